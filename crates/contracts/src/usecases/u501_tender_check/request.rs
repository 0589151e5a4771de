use serde::{Deserialize, Serialize};

/// Request to run quality-control checks over a tender file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRequest {
    /// Name of the uploaded tender file
    pub file_name: String,

    /// Label of the compliance ruleset to apply
    pub ruleset: String,

    /// Outlier detection method label.
    ///
    /// Display-level selection only: the statistics engine lives outside
    /// this repository.
    #[serde(default)]
    pub outlier_method: OutlierMethod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutlierMethod {
    #[default]
    Iqr,
    ZScore,
    Mad,
}

impl OutlierMethod {
    pub fn display_name(&self) -> &'static str {
        match self {
            OutlierMethod::Iqr => "IQR",
            OutlierMethod::ZScore => "Z-Score",
            OutlierMethod::Mad => "MAD",
        }
    }

    pub fn all() -> Vec<OutlierMethod> {
        vec![OutlierMethod::Iqr, OutlierMethod::ZScore, OutlierMethod::Mad]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "iqr" => Some(OutlierMethod::Iqr),
            "z_score" => Some(OutlierMethod::ZScore),
            "mad" => Some(OutlierMethod::Mad),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            OutlierMethod::Iqr => "iqr",
            OutlierMethod::ZScore => "z_score",
            OutlierMethod::Mad => "mad",
        }
    }
}
