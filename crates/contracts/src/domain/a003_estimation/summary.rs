use super::aggregate::LineItem;
use serde::{Deserialize, Serialize};

/// Derived totals over a set of estimation line items.
///
/// Never stored: recomputed synchronously from the current items on every
/// read, so there is no staleness window to manage.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateSummary {
    /// Σ area over all items, m²
    #[serde(rename = "totalArea")]
    pub total_area: f64,

    /// Σ subtotal over all items, currency
    #[serde(rename = "totalCost")]
    pub total_cost: f64,

    /// total_cost / total_area, or 0 when there is no area.
    ///
    /// The zero fallback keeps the displayed value continuous for an empty
    /// estimation instead of signalling an error.
    #[serde(rename = "averageUnitCost")]
    pub average_unit_cost: f64,
}

/// Compute the aggregate summary of `items`.
///
/// Pure function, no side effects. Guaranteed to never return NaN or
/// Infinity for finite inputs: the average falls back to 0 when total
/// area is not positive.
pub fn summarize(items: &[LineItem]) -> AggregateSummary {
    let total_area: f64 = items.iter().map(|item| item.area).sum();
    let total_cost: f64 = items.iter().map(|item| item.subtotal).sum();
    let average_unit_cost = if total_area > 0.0 {
        total_cost / total_area
    } else {
        0.0
    };

    AggregateSummary {
        total_area,
        total_cost,
        average_unit_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_estimation::aggregate::LineItem;

    fn item(name: &str, area: f64, unit_cost: f64) -> LineItem {
        let mut it = LineItem::new(name.to_string());
        it.set_area(area);
        it.set_unit_cost(unit_cost);
        it
    }

    #[test]
    fn empty_collection_summarizes_to_zeros() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_area, 0.0);
        assert_eq!(summary.total_cost, 0.0);
        assert_eq!(summary.average_unit_cost, 0.0);
    }

    #[test]
    fn weighted_average_over_two_blocks() {
        let items = vec![
            item("Block A", 15000.0, 4500.0),
            item("Block B", 25000.0, 5200.0),
        ];
        let summary = summarize(&items);
        assert_eq!(summary.total_area, 40000.0);
        assert_eq!(summary.total_cost, 67_500_000.0 + 130_000_000.0);
        assert_eq!(summary.average_unit_cost, 4937.5);
    }

    #[test]
    fn zero_area_items_never_produce_nan() {
        let items = vec![item("Empty", 0.0, 4500.0)];
        let summary = summarize(&items);
        assert!(summary.average_unit_cost.is_finite());
        assert_eq!(summary.average_unit_cost, 0.0);
    }

    #[test]
    fn summarize_is_idempotent() {
        let items = vec![item("Block A", 123.4, 567.8)];
        let first = summarize(&items);
        let second = summarize(&items);
        assert_eq!(first, second);
    }
}
