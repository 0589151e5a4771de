use super::summary::{summarize, AggregateSummary};
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier of an estimation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EstimationId(pub Uuid);

impl EstimationId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for EstimationId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(EstimationId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Unique identifier of a line item inside an estimation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineItemId(pub Uuid);

impl LineItemId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for LineItemId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(LineItemId)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Line items
// ============================================================================

/// Numeric fields of a line item that feed the derived subtotal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineItemField {
    Area,
    UnitCost,
}

/// One estimation unit (e.g. a building block).
///
/// Invariant: `subtotal` is always `area * unit_cost`; it is recomputed by
/// the setters and never edited independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: LineItemId,
    pub name: String,
    /// Standardized category code ("02.01" etc.), empty until assigned
    #[serde(rename = "categoryCode")]
    pub category_code: String,
    /// Area, m²
    pub area: f64,
    /// Unit cost, currency per m²
    #[serde(rename = "unitCost")]
    pub unit_cost: f64,
    /// Derived: area * unit_cost
    pub subtotal: f64,
}

impl LineItem {
    /// New line item with zero-valued numeric fields
    pub fn new(name: String) -> Self {
        Self {
            id: LineItemId::new_v4(),
            name,
            category_code: String::new(),
            area: 0.0,
            unit_cost: 0.0,
            subtotal: 0.0,
        }
    }

    pub fn set_area(&mut self, area: f64) {
        self.area = area;
        self.recompute_subtotal();
    }

    pub fn set_unit_cost(&mut self, unit_cost: f64) {
        self.unit_cost = unit_cost;
        self.recompute_subtotal();
    }

    fn recompute_subtotal(&mut self) {
        self.subtotal = self.area * self.unit_cost;
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Estimation (aggregate a003): an ordered, mutable collection of line items
/// with an always-consistent derived summary.
///
/// The collection is exclusively owned by the single UI context that renders
/// it; every mutation completes synchronously before the summary is next
/// read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Estimation {
    #[serde(flatten)]
    pub base: BaseAggregate<EstimationId>,

    /// Project the estimation belongs to (a001), if any
    #[serde(rename = "projectId")]
    pub project_id: Option<String>,

    pub items: Vec<LineItem>,
}

impl Estimation {
    pub fn new(code: String, description: String, project_id: Option<String>) -> Self {
        Self {
            base: BaseAggregate::new(EstimationId::new_v4(), code, description),
            project_id,
            items: Vec::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Append a new zero-valued line item and return its id.
    ///
    /// Growth is unconstrained; there are no error conditions.
    pub fn add_item(&mut self, name: String) -> LineItemId {
        let item = LineItem::new(name);
        let id = item.id;
        self.items.push(item);
        self.base.touch();
        id
    }

    /// Remove the line item with `id`. No-op (not an error) if absent.
    pub fn remove_item(&mut self, id: LineItemId) {
        self.items.retain(|item| item.id != id);
        self.base.touch();
    }

    /// Set a numeric field on the matching item and recompute its subtotal
    /// in the same operation. Returns false if no item matches.
    ///
    /// The recompute happens before this method returns, so no intermediate
    /// inconsistent state is observable by the caller.
    pub fn update_item(&mut self, id: LineItemId, field: LineItemField, value: f64) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        match field {
            LineItemField::Area => item.set_area(value),
            LineItemField::UnitCost => item.set_unit_cost(value),
        }
        self.base.touch();
        true
    }

    /// Rename the matching item. Returns false if no item matches.
    pub fn rename_item(&mut self, id: LineItemId, name: String) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        item.name = name;
        self.base.touch();
        true
    }

    /// Assign a category code to the matching item. Returns false if absent.
    pub fn set_item_category(&mut self, id: LineItemId, category_code: String) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        item.category_code = category_code;
        self.base.touch();
        true
    }

    /// Derived totals over the current items. Pure; idempotent between
    /// mutations.
    pub fn summary(&self) -> AggregateSummary {
        summarize(&self.items)
    }
}

impl AggregateRoot for Estimation {
    type Id = EstimationId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "estimation"
    }

    fn element_name() -> &'static str {
        "Estimation"
    }

    fn list_name() -> &'static str {
        "Estimations"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimation_with(items: &[(&str, f64, f64)]) -> Estimation {
        let mut est = Estimation::new("EST-001".to_string(), "Test".to_string(), None);
        for (name, area, unit_cost) in items {
            let id = est.add_item(name.to_string());
            est.update_item(id, LineItemField::Area, *area);
            est.update_item(id, LineItemField::UnitCost, *unit_cost);
        }
        est
    }

    #[test]
    fn add_item_starts_zero_valued_with_fresh_id() {
        let mut est = Estimation::new("EST-001".to_string(), "Test".to_string(), None);
        let first = est.add_item("Block A".to_string());
        let second = est.add_item("Block B".to_string());

        assert_ne!(first, second);
        assert_eq!(est.items.len(), 2);
        assert_eq!(est.items[0].area, 0.0);
        assert_eq!(est.items[0].unit_cost, 0.0);
        assert_eq!(est.items[0].subtotal, 0.0);
    }

    #[test]
    fn subtotal_tracks_area_and_unit_cost() {
        let mut est = estimation_with(&[("Block A", 15000.0, 4500.0)]);
        assert_eq!(est.items[0].subtotal, 67_500_000.0);

        let id = est.items[0].id;
        est.update_item(id, LineItemField::Area, 20000.0);
        assert_eq!(est.items[0].subtotal, 90_000_000.0);
        assert_eq!(est.items[0].unit_cost, 4500.0);
    }

    #[test]
    fn update_leaves_other_items_untouched() {
        let mut est = estimation_with(&[("Block A", 15000.0, 4500.0), ("Block B", 25000.0, 5200.0)]);
        let first_id = est.items[0].id;
        est.update_item(first_id, LineItemField::Area, 20000.0);

        assert_eq!(est.items[1].subtotal, 130_000_000.0);
        assert_eq!(est.summary().total_cost, 90_000_000.0 + 130_000_000.0);
    }

    #[test]
    fn update_of_unknown_id_is_rejected() {
        let mut est = estimation_with(&[("Block A", 100.0, 10.0)]);
        let unknown = LineItemId::new_v4();
        assert!(!est.update_item(unknown, LineItemField::Area, 999.0));
        assert_eq!(est.items[0].area, 100.0);
    }

    #[test]
    fn remove_of_absent_id_is_a_noop() {
        let mut est = estimation_with(&[("Block A", 100.0, 10.0)]);
        est.remove_item(LineItemId::new_v4());
        assert_eq!(est.items.len(), 1);
    }

    #[test]
    fn removing_the_only_item_zeroes_the_summary() {
        let mut est = estimation_with(&[("Block A", 15000.0, 4500.0)]);
        let id = est.items[0].id;
        est.remove_item(id);

        let summary = est.summary();
        assert_eq!(summary.total_area, 0.0);
        assert_eq!(summary.total_cost, 0.0);
        assert_eq!(summary.average_unit_cost, 0.0);
    }

    #[test]
    fn summary_reflects_arbitrary_mutation_sequences() {
        let mut est = estimation_with(&[
            ("Block A", 15000.0, 4500.0),
            ("Block B", 25000.0, 5200.0),
            ("Annex", 3000.0, 2800.0),
        ]);
        let annex_id = est.items[2].id;
        est.remove_item(annex_id);
        let extra = est.add_item("Parking".to_string());
        est.update_item(extra, LineItemField::Area, 5000.0);
        est.update_item(extra, LineItemField::UnitCost, 1500.0);

        let summary = est.summary();
        assert_eq!(summary.total_area, 45000.0);
        assert_eq!(summary.total_cost, 67_500_000.0 + 130_000_000.0 + 7_500_000.0);
        let expected_avg = summary.total_cost / summary.total_area;
        assert_eq!(summary.average_unit_cost, expected_avg);
    }

    #[test]
    fn summary_is_idempotent_between_mutations() {
        let est = estimation_with(&[("Block A", 15000.0, 4500.0)]);
        assert_eq!(est.summary(), est.summary());
    }
}
