use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a cost category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CostCategoryId(pub Uuid);

impl CostCategoryId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for CostCategoryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CostCategoryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Standardized cost category (aggregate a004).
///
/// `base.code` carries the hierarchical code: "02" is a top-level chapter,
/// "02.01" a child of it, and so on. `base.description` is the label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostCategory {
    #[serde(flatten)]
    pub base: BaseAggregate<CostCategoryId>,

    /// Code of the parent category, None for top-level chapters
    #[serde(rename = "parentCode")]
    pub parent_code: Option<String>,
}

impl CostCategory {
    pub fn new(code: String, label: String) -> Self {
        let parent_code = code
            .rfind('.')
            .map(|dot| code[..dot].to_string());
        Self {
            base: BaseAggregate::new(CostCategoryId::new_v4(), code, label),
            parent_code,
        }
    }

    /// Nesting depth derived from the code: "02" → 1, "02.01" → 2.
    pub fn depth(&self) -> usize {
        self.base.code.split('.').count()
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_code.is_none()
    }
}

impl AggregateRoot for CostCategory {
    type Id = CostCategoryId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "cost_category"
    }

    fn element_name() -> &'static str {
        "Cost category"
    }

    fn list_name() -> &'static str {
        "Cost categories"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_code_is_derived_from_the_code() {
        let chapter = CostCategory::new("02".to_string(), "Structure".to_string());
        assert!(chapter.is_top_level());
        assert_eq!(chapter.depth(), 1);

        let child = CostCategory::new("02.01".to_string(), "Concrete".to_string());
        assert_eq!(child.parent_code.as_deref(), Some("02"));
        assert_eq!(child.depth(), 2);
    }
}
