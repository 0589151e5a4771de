use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::building_type::BuildingType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a construction project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub Uuid);

impl ProjectId {
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

impl AggregateId for ProjectId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProjectId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Lifecycle stage of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStage {
    Feasibility,
    Design,
    Tendering,
    Construction,
    Completed,
}

impl ProjectStage {
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectStage::Feasibility => "Feasibility",
            ProjectStage::Design => "Design",
            ProjectStage::Tendering => "Tendering",
            ProjectStage::Construction => "Construction",
            ProjectStage::Completed => "Completed",
        }
    }

    pub fn all() -> Vec<ProjectStage> {
        vec![
            ProjectStage::Feasibility,
            ProjectStage::Design,
            ProjectStage::Tendering,
            ProjectStage::Construction,
            ProjectStage::Completed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "feasibility" => Some(ProjectStage::Feasibility),
            "design" => Some(ProjectStage::Design),
            "tendering" => Some(ProjectStage::Tendering),
            "construction" => Some(ProjectStage::Construction),
            "completed" => Some(ProjectStage::Completed),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ProjectStage::Feasibility => "feasibility",
            ProjectStage::Design => "design",
            ProjectStage::Tendering => "tendering",
            ProjectStage::Construction => "construction",
            ProjectStage::Completed => "completed",
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Construction project (aggregate a001)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(flatten)]
    pub base: BaseAggregate<ProjectId>,

    pub region: String,

    #[serde(rename = "buildingType")]
    pub building_type: BuildingType,

    pub stage: ProjectStage,

    /// Gross floor area, m²
    #[serde(rename = "grossFloorArea")]
    pub gross_floor_area: f64,

    /// Planned investment, currency
    #[serde(rename = "plannedInvestment")]
    pub planned_investment: f64,
}

impl Project {
    pub fn new(
        code: String,
        description: String,
        region: String,
        building_type: BuildingType,
        stage: ProjectStage,
        gross_floor_area: f64,
        planned_investment: f64,
    ) -> Self {
        Self {
            base: BaseAggregate::new(ProjectId::new_v4(), code, description),
            region,
            building_type,
            stage,
            gross_floor_area,
            planned_investment,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }
}

impl AggregateRoot for Project {
    type Id = ProjectId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "project"
    }

    fn element_name() -> &'static str {
        "Project"
    }

    fn list_name() -> &'static str {
        "Projects"
    }
}

// ============================================================================
// DTO for the details form
// ============================================================================

/// Flat form DTO for the project details screen
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub region: String,
    pub building_type: Option<BuildingType>,
    pub stage: Option<ProjectStage>,
    pub gross_floor_area: f64,
    pub planned_investment: f64,
    pub comment: Option<String>,
}

impl From<&Project> for ProjectDto {
    fn from(p: &Project) -> Self {
        Self {
            id: Some(p.base.id.as_string()),
            code: Some(p.base.code.clone()),
            description: p.base.description.clone(),
            region: p.region.clone(),
            building_type: Some(p.building_type),
            stage: Some(p.stage),
            gross_floor_area: p.gross_floor_area,
            planned_investment: p.planned_investment,
            comment: p.base.comment.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Project {
        Project::new(
            "PRJ-2025-001".to_string(),
            "Riverside residential".to_string(),
            "East Lake".to_string(),
            BuildingType::Residential,
            ProjectStage::Construction,
            86_000.0,
            412_000_000.0,
        )
    }

    #[test]
    fn base_fields_are_flattened_in_json() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["code"], "PRJ-2025-001");
        assert_eq!(json["buildingType"], "Residential");
        assert_eq!(json["grossFloorArea"], 86_000.0);
        assert!(json.get("base").is_none());
    }

    #[test]
    fn json_round_trip_preserves_the_project() {
        let project = sample();
        let json = serde_json::to_string(&project).unwrap();
        let back: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(back.base.id, project.base.id);
        assert_eq!(back.stage, project.stage);
        assert_eq!(back.planned_investment, project.planned_investment);
    }
}
