use serde::{Deserialize, Serialize};

/// Building types the index system benchmarks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingType {
    Residential,
    Office,
    Commercial,
    Industrial,
    Education,
    Healthcare,
}

impl BuildingType {
    /// Stable code of the building type
    pub fn code(&self) -> &'static str {
        match self {
            BuildingType::Residential => "bt-residential",
            BuildingType::Office => "bt-office",
            BuildingType::Commercial => "bt-commercial",
            BuildingType::Industrial => "bt-industrial",
            BuildingType::Education => "bt-education",
            BuildingType::Healthcare => "bt-healthcare",
        }
    }

    /// Human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            BuildingType::Residential => "Residential",
            BuildingType::Office => "Office",
            BuildingType::Commercial => "Commercial",
            BuildingType::Industrial => "Industrial",
            BuildingType::Education => "Education",
            BuildingType::Healthcare => "Healthcare",
        }
    }

    /// All building types
    pub fn all() -> Vec<BuildingType> {
        vec![
            BuildingType::Residential,
            BuildingType::Office,
            BuildingType::Commercial,
            BuildingType::Industrial,
            BuildingType::Education,
            BuildingType::Healthcare,
        ]
    }

    /// Parse from code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "bt-residential" => Some(BuildingType::Residential),
            "bt-office" => Some(BuildingType::Office),
            "bt-commercial" => Some(BuildingType::Commercial),
            "bt-industrial" => Some(BuildingType::Industrial),
            "bt-education" => Some(BuildingType::Education),
            "bt-healthcare" => Some(BuildingType::Healthcare),
            _ => None,
        }
    }
}

impl ToString for BuildingType {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
