use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Live progress of a tender check run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckProgress {
    pub session_id: String,
    pub status: CheckStatus,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,

    /// Rule groups processed so far
    pub processed_groups: u32,
    /// Total rule groups in the selected ruleset
    pub total_groups: u32,
    /// Name of the rule group currently running
    pub current_group: Option<String>,

    /// Issues found so far
    pub issues: Vec<CheckIssue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// File accepted, check not started yet
    Pending,

    /// Check is running
    Running,

    /// Check finished with no issues
    Completed,

    /// Check finished and found issues
    CompletedWithIssues,

    /// Check aborted
    Failed,
}

impl CheckStatus {
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            CheckStatus::Completed | CheckStatus::CompletedWithIssues | CheckStatus::Failed
        )
    }
}

/// One issue reported by the check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckIssue {
    pub severity: IssueSeverity,
    /// Rule code (e.g. "QC-012")
    pub rule_code: String,
    /// Location inside the tender file (sheet/row wording)
    pub location: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Error,
    Warning,
    Info,
}

impl IssueSeverity {
    pub fn display_name(&self) -> &'static str {
        match self {
            IssueSeverity::Error => "Error",
            IssueSeverity::Warning => "Warning",
            IssueSeverity::Info => "Info",
        }
    }
}

impl CheckProgress {
    pub fn new(session_id: String, total_groups: u32) -> Self {
        Self {
            session_id,
            status: CheckStatus::Pending,
            started_at: Utc::now(),
            completed_at: None,
            processed_groups: 0,
            total_groups,
            current_group: None,
            issues: Vec::new(),
        }
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Warning)
            .count()
    }

    /// Mark the run finished; the final status depends on what was found.
    pub fn finish(&mut self) {
        self.status = if self.issues.is_empty() {
            CheckStatus::Completed
        } else {
            CheckStatus::CompletedWithIssues
        };
        self.current_group = None;
        self.completed_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_picks_status_from_found_issues() {
        let mut clean = CheckProgress::new("s1".to_string(), 4);
        clean.finish();
        assert_eq!(clean.status, CheckStatus::Completed);
        assert!(clean.status.is_finished());

        let mut dirty = CheckProgress::new("s2".to_string(), 4);
        dirty.issues.push(CheckIssue {
            severity: IssueSeverity::Warning,
            rule_code: "QC-007".to_string(),
            location: "Sheet 1, row 42".to_string(),
            message: "Unit cost far above regional benchmark".to_string(),
        });
        dirty.finish();
        assert_eq!(dirty.status, CheckStatus::CompletedWithIssues);
        assert_eq!(dirty.warning_count(), 1);
        assert_eq!(dirty.error_count(), 0);
    }
}
