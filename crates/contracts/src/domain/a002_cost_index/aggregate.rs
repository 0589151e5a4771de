use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::building_type::BuildingType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a cost index record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CostIndexId(pub Uuid);

impl CostIndexId {
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

impl AggregateId for CostIndexId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CostIndexId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Cost benchmark record (aggregate a002)
///
/// One published index value: the average unit cost of a building type in a
/// region for one period, with the sample size it was derived from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostIndex {
    #[serde(flatten)]
    pub base: BaseAggregate<CostIndexId>,

    pub region: String,

    #[serde(rename = "buildingType")]
    pub building_type: BuildingType,

    /// Publication period, "YYYY-MM"
    pub period: String,

    /// Index value, currency per m²
    #[serde(rename = "indexValue")]
    pub index_value: f64,

    /// Number of source records behind the value
    #[serde(rename = "sampleSize")]
    pub sample_size: u32,

    /// Change vs the previous period, percent (None for the first period)
    #[serde(rename = "changePercent")]
    pub change_percent: Option<f64>,
}

impl CostIndex {
    pub fn new(
        code: String,
        region: String,
        building_type: BuildingType,
        period: String,
        index_value: f64,
        sample_size: u32,
        change_percent: Option<f64>,
    ) -> Self {
        let description = format!("{} / {} / {}", region, building_type.display_name(), period);
        Self {
            base: BaseAggregate::new(CostIndexId::new_v4(), code, description),
            region,
            building_type,
            period,
            index_value,
            sample_size,
            change_percent,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }
}

impl AggregateRoot for CostIndex {
    type Id = CostIndexId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "cost_index"
    }

    fn element_name() -> &'static str {
        "Cost index"
    }

    fn list_name() -> &'static str {
        "Cost indexes"
    }
}
