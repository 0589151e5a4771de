use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a raw cost record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CostRecordId(pub Uuid);

impl CostRecordId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for CostRecordId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CostRecordId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Raw cost record awaiting standardization (aggregate a005).
///
/// Comes from a source document with free-text wording; tagging assigns a
/// cost category code (a004) so the record can feed index calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostRecord {
    #[serde(flatten)]
    pub base: BaseAggregate<CostRecordId>,

    /// Source document the record was extracted from
    #[serde(rename = "sourceDocument")]
    pub source_document: String,

    /// Amount, currency
    pub amount: f64,

    /// Assigned category code (a004), None until tagged
    #[serde(rename = "categoryCode")]
    pub category_code: Option<String>,
}

impl CostRecord {
    pub fn new(code: String, description: String, source_document: String, amount: f64) -> Self {
        Self {
            base: BaseAggregate::new(CostRecordId::new_v4(), code, description),
            source_document,
            amount,
            category_code: None,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn is_tagged(&self) -> bool {
        self.category_code.is_some()
    }

    /// Assign a category; an empty code clears the assignment.
    pub fn assign_category(&mut self, code: &str) {
        self.category_code = if code.is_empty() {
            None
        } else {
            Some(code.to_string())
        };
        self.base.touch();
    }
}

impl AggregateRoot for CostRecord {
    type Id = CostRecordId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "cost_record"
    }

    fn element_name() -> &'static str {
        "Cost record"
    }

    fn list_name() -> &'static str {
        "Cost records"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagging_round_trip() {
        let mut record = CostRecord::new(
            "CR-001".to_string(),
            "C30 ready-mix concrete".to_string(),
            "tender-2025-014.xlsx".to_string(),
            184_000.0,
        );
        assert!(!record.is_tagged());

        record.assign_category("02.01");
        assert!(record.is_tagged());
        assert_eq!(record.category_code.as_deref(), Some("02.01"));

        record.assign_category("");
        assert!(!record.is_tagged());
    }
}
