use serde::{Deserialize, Serialize};

/// Response for the cost overview dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostOverviewDto {
    /// Number of regions with published indexes
    pub region_count: u32,
    /// Number of index records overall
    pub index_count: u32,
    /// Average index value of the latest period, currency per m²
    pub latest_average_index: f64,
    /// Month-over-month change of the average, percent
    pub change_percent: f64,
    /// Per-period averages, oldest first
    pub trend: Vec<TrendPoint>,
}

/// One point of the index trend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Period in format "YYYY-MM"
    pub period: String,
    /// Average index value across regions for the period
    pub average_index: f64,
    /// Number of index records in the period
    pub index_count: u32,
}

impl CostOverviewDto {
    /// Latest trend point, if any
    pub fn latest(&self) -> Option<&TrendPoint> {
        self.trend.last()
    }
}
