use super::EntityMetadata;

/// Trait for aggregate roots
///
/// Defines the required instance accessors plus the static class-level
/// metadata (index, collection name, UI names) every aggregate declares.
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id;

    // ------------------------------------------------------------------
    // Instance accessors
    // ------------------------------------------------------------------

    /// Record ID
    fn id(&self) -> Self::Id;

    /// Business code of the record (e.g. "PRJ-2025-001")
    fn code(&self) -> &str;

    /// Human readable name of the record
    fn description(&self) -> &str;

    /// Lifecycle metadata
    fn metadata(&self) -> &EntityMetadata;

    /// Mutable lifecycle metadata
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    // ------------------------------------------------------------------
    // Class-level metadata
    // ------------------------------------------------------------------

    /// Aggregate index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name (e.g. "project")
    fn collection_name() -> &'static str;

    /// UI name, singular (e.g. "Project")
    fn element_name() -> &'static str;

    /// UI name, plural (e.g. "Projects")
    fn list_name() -> &'static str;

    // ------------------------------------------------------------------
    // Default implementations
    // ------------------------------------------------------------------

    /// Full system name of the aggregate (e.g. "a001_project")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
