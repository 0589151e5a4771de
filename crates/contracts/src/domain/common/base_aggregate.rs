use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Base aggregate with the fields every aggregate carries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Unique record identifier
    pub id: Id,
    /// Business code of the record (e.g. "PRJ-2025-001", "02.01")
    pub code: String,
    /// Human readable name of the record
    pub description: String,
    /// Free-form comment
    pub comment: Option<String>,
    /// Lifecycle metadata
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    /// Create a new aggregate base
    pub fn new(id: Id, code: String, description: String) -> Self {
        Self {
            id,
            code,
            description,
            comment: None,
            metadata: EntityMetadata::new(),
        }
    }

    /// Create an aggregate base with pre-existing metadata (loading fixtures)
    pub fn with_metadata(
        id: Id,
        code: String,
        description: String,
        comment: Option<String>,
        metadata: EntityMetadata,
    ) -> Self {
        Self {
            id,
            code,
            description,
            comment,
            metadata,
        }
    }

    /// Refresh the updated_at timestamp
    pub fn touch(&mut self) {
        self.metadata.touch();
    }

    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment;
    }
}
