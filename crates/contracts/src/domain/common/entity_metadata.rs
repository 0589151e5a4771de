use serde::{Deserialize, Serialize};

/// Lifecycle metadata of an aggregate instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// When the record was created
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// When the record was last updated
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Soft delete flag
    pub is_deleted: bool,
    /// Version counter, bumped on every edit
    pub version: i32,
}

impl EntityMetadata {
    /// Fresh metadata for a newly created aggregate
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            is_deleted: false,
            version: 0,
        }
    }

    /// Refresh the updated_at timestamp
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }

    pub fn increment_version(&mut self) {
        self.version += 1;
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}
