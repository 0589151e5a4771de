//! Data-provider seam between the UI and the data it renders.
//!
//! Screens never own hard-coded fixtures: they pull everything through
//! [`DataProvider`], so the domain logic stays testable with no UI framework
//! in scope and a real backend can be slotted in behind the same trait.

use crate::dashboards::d400_cost_overview::{CostOverviewDto, TrendPoint};
use crate::domain::a001_project::{Project, ProjectStage};
use crate::domain::a002_cost_index::CostIndex;
use crate::domain::a003_estimation::{Estimation, LineItemField};
use crate::domain::a004_cost_category::CostCategory;
use crate::domain::a005_cost_record::CostRecord;
use crate::enums::building_type::BuildingType;
use crate::usecases::u501_tender_check::{CheckIssue, IssueSeverity};
use anyhow::Result;

/// Capability the UI depends on instead of inline mock arrays.
pub trait DataProvider: Send + Sync {
    fn fetch_projects(&self) -> Result<Vec<Project>>;
    fn fetch_cost_indexes(&self) -> Result<Vec<CostIndex>>;
    fn fetch_categories(&self) -> Result<Vec<CostCategory>>;
    fn fetch_cost_records(&self) -> Result<Vec<CostRecord>>;
    fn fetch_estimation(&self) -> Result<Estimation>;
    fn fetch_check_issues(&self) -> Result<Vec<CheckIssue>>;
    fn fetch_overview(&self) -> Result<CostOverviewDto>;
}

/// In-memory provider seeded with demo data.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoDataProvider;

impl DemoDataProvider {
    pub fn new() -> Self {
        Self
    }
}

impl DataProvider for DemoDataProvider {
    fn fetch_projects(&self) -> Result<Vec<Project>> {
        Ok(vec![
            Project::new(
                "PRJ-2025-001".to_string(),
                "Riverside residential quarter".to_string(),
                "East Lake".to_string(),
                BuildingType::Residential,
                ProjectStage::Construction,
                86_000.0,
                412_000_000.0,
            ),
            Project::new(
                "PRJ-2025-002".to_string(),
                "Harbor gate office tower".to_string(),
                "Harbor".to_string(),
                BuildingType::Office,
                ProjectStage::Tendering,
                54_000.0,
                351_000_000.0,
            ),
            Project::new(
                "PRJ-2025-003".to_string(),
                "Northern logistics hub, phase II".to_string(),
                "Northern".to_string(),
                BuildingType::Industrial,
                ProjectStage::Design,
                120_000.0,
                298_000_000.0,
            ),
            Project::new(
                "PRJ-2024-017".to_string(),
                "Central district school campus".to_string(),
                "Central".to_string(),
                BuildingType::Education,
                ProjectStage::Completed,
                31_500.0,
                168_000_000.0,
            ),
        ])
    }

    fn fetch_cost_indexes(&self) -> Result<Vec<CostIndex>> {
        // Three publication periods for two regions and two building types;
        // change_percent is vs the same series one period earlier.
        let series: Vec<(&str, BuildingType, Vec<(&str, f64, u32)>)> = vec![
            (
                "East Lake",
                BuildingType::Residential,
                vec![
                    ("2025-04", 4380.0, 126),
                    ("2025-05", 4455.0, 131),
                    ("2025-06", 4512.0, 129),
                ],
            ),
            (
                "East Lake",
                BuildingType::Office,
                vec![
                    ("2025-04", 5890.0, 84),
                    ("2025-05", 5940.0, 88),
                    ("2025-06", 6010.0, 86),
                ],
            ),
            (
                "Harbor",
                BuildingType::Residential,
                vec![
                    ("2025-04", 4120.0, 102),
                    ("2025-05", 4105.0, 99),
                    ("2025-06", 4180.0, 104),
                ],
            ),
            (
                "Harbor",
                BuildingType::Office,
                vec![
                    ("2025-04", 5610.0, 71),
                    ("2025-05", 5705.0, 75),
                    ("2025-06", 5760.0, 73),
                ],
            ),
        ];

        let mut result = Vec::new();
        let mut seq = 0;
        for (region, building_type, points) in series {
            let mut previous: Option<f64> = None;
            for (period, value, sample_size) in points {
                seq += 1;
                let change = previous.map(|prev| (value - prev) / prev * 100.0);
                result.push(CostIndex::new(
                    format!("IDX-{:04}", seq),
                    region.to_string(),
                    building_type,
                    period.to_string(),
                    value,
                    sample_size,
                    change,
                ));
                previous = Some(value);
            }
        }
        Ok(result)
    }

    fn fetch_categories(&self) -> Result<Vec<CostCategory>> {
        let entries = [
            ("01", "Groundworks"),
            ("01.01", "Excavation"),
            ("01.02", "Foundations"),
            ("02", "Structure"),
            ("02.01", "Concrete works"),
            ("02.02", "Steel works"),
            ("03", "Envelope"),
            ("03.01", "Curtain wall"),
            ("03.02", "Roofing"),
            ("04", "MEP"),
            ("04.01", "Electrical"),
            ("04.02", "HVAC"),
        ];
        Ok(entries
            .iter()
            .map(|(code, label)| CostCategory::new(code.to_string(), label.to_string()))
            .collect())
    }

    fn fetch_cost_records(&self) -> Result<Vec<CostRecord>> {
        let mut records = vec![
            CostRecord::new(
                "CR-0101".to_string(),
                "C30 ready-mix concrete, columns".to_string(),
                "tender-2025-014.xlsx".to_string(),
                1_840_000.0,
            ),
            CostRecord::new(
                "CR-0102".to_string(),
                "Rebar HRB400, 16-25mm".to_string(),
                "tender-2025-014.xlsx".to_string(),
                2_310_000.0,
            ),
            CostRecord::new(
                "CR-0103".to_string(),
                "Earth excavation, class III soil".to_string(),
                "tender-2025-014.xlsx".to_string(),
                640_000.0,
            ),
            CostRecord::new(
                "CR-0104".to_string(),
                "Unitized curtain wall, 6+12A+6 glazing".to_string(),
                "boq-harbor-tower.xlsx".to_string(),
                5_120_000.0,
            ),
            CostRecord::new(
                "CR-0105".to_string(),
                "VRF outdoor units, 45kW".to_string(),
                "boq-harbor-tower.xlsx".to_string(),
                1_274_000.0,
            ),
            CostRecord::new(
                "CR-0106".to_string(),
                "LV switchboards and distribution".to_string(),
                "boq-harbor-tower.xlsx".to_string(),
                988_000.0,
            ),
            CostRecord::new(
                "CR-0107".to_string(),
                "Waterproof membrane, basement raft".to_string(),
                "tender-2025-014.xlsx".to_string(),
                402_000.0,
            ),
        ];
        // A few arrive pre-tagged to exercise both states of the screen.
        records[0].assign_category("02.01");
        records[3].assign_category("03.01");
        Ok(records)
    }

    fn fetch_estimation(&self) -> Result<Estimation> {
        let mut est = Estimation::new(
            "EST-2025-008".to_string(),
            "Riverside quarter, concept estimate".to_string(),
            None,
        );
        let a = est.add_item("Block A".to_string());
        est.set_item_category(a, "02".to_string());
        est.update_item(a, LineItemField::Area, 15_000.0);
        est.update_item(a, LineItemField::UnitCost, 4_500.0);

        let b = est.add_item("Block B".to_string());
        est.set_item_category(b, "02".to_string());
        est.update_item(b, LineItemField::Area, 25_000.0);
        est.update_item(b, LineItemField::UnitCost, 5_200.0);

        Ok(est)
    }

    fn fetch_check_issues(&self) -> Result<Vec<CheckIssue>> {
        Ok(vec![
            CheckIssue {
                severity: IssueSeverity::Error,
                rule_code: "QC-003".to_string(),
                location: "Sheet 'BOQ', row 18".to_string(),
                message: "Line amount does not equal quantity × unit rate".to_string(),
            },
            CheckIssue {
                severity: IssueSeverity::Error,
                rule_code: "QC-011".to_string(),
                location: "Sheet 'BOQ', row 64".to_string(),
                message: "Missing unit of measure".to_string(),
            },
            CheckIssue {
                severity: IssueSeverity::Warning,
                rule_code: "QC-021".to_string(),
                location: "Sheet 'BOQ', row 42".to_string(),
                message: "Unit rate 38% above regional benchmark (outlier candidate)".to_string(),
            },
            CheckIssue {
                severity: IssueSeverity::Warning,
                rule_code: "QC-024".to_string(),
                location: "Sheet 'Summary'".to_string(),
                message: "Preliminaries exceed 12% of direct cost".to_string(),
            },
            CheckIssue {
                severity: IssueSeverity::Info,
                rule_code: "QC-030".to_string(),
                location: "Sheet 'BOQ', rows 101-108".to_string(),
                message: "8 lines without standardized category tag".to_string(),
            },
        ])
    }

    fn fetch_overview(&self) -> Result<CostOverviewDto> {
        Ok(build_overview(&self.fetch_cost_indexes()?))
    }
}

/// Fold index records into the overview dashboard DTO.
///
/// Trend points are per-period averages over all regions and building
/// types, oldest period first.
pub fn build_overview(indexes: &[CostIndex]) -> CostOverviewDto {
    let mut periods: Vec<String> = indexes.iter().map(|ix| ix.period.clone()).collect();
    periods.sort();
    periods.dedup();

    let trend: Vec<TrendPoint> = periods
        .iter()
        .map(|period| {
            let values: Vec<f64> = indexes
                .iter()
                .filter(|ix| &ix.period == period)
                .map(|ix| ix.index_value)
                .collect();
            let average = if values.is_empty() {
                0.0
            } else {
                values.iter().sum::<f64>() / values.len() as f64
            };
            TrendPoint {
                period: period.clone(),
                average_index: average,
                index_count: values.len() as u32,
            }
        })
        .collect();

    let mut regions: Vec<&str> = indexes.iter().map(|ix| ix.region.as_str()).collect();
    regions.sort();
    regions.dedup();

    let latest_average = trend.last().map(|p| p.average_index).unwrap_or(0.0);
    let change_percent = match trend.len() {
        0 | 1 => 0.0,
        n => {
            let prev = trend[n - 2].average_index;
            if prev > 0.0 {
                (trend[n - 1].average_index - prev) / prev * 100.0
            } else {
                0.0
            }
        }
    };

    CostOverviewDto {
        region_count: regions.len() as u32,
        index_count: indexes.len() as u32,
        latest_average_index: latest_average,
        change_percent,
        trend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_fixtures_are_non_empty() {
        let provider = DemoDataProvider::new();
        assert!(!provider.fetch_projects().unwrap().is_empty());
        assert!(!provider.fetch_cost_indexes().unwrap().is_empty());
        assert!(!provider.fetch_categories().unwrap().is_empty());
        assert!(!provider.fetch_cost_records().unwrap().is_empty());
        assert!(!provider.fetch_check_issues().unwrap().is_empty());
    }

    #[test]
    fn tagged_demo_records_reference_known_categories() {
        let provider = DemoDataProvider::new();
        let categories = provider.fetch_categories().unwrap();
        for record in provider.fetch_cost_records().unwrap() {
            if let Some(code) = &record.category_code {
                assert!(
                    categories.iter().any(|c| &c.base.code == code),
                    "unknown category {} on {}",
                    code,
                    record.base.code
                );
            }
        }
    }

    #[test]
    fn demo_estimation_matches_the_reference_scenario() {
        let est = DemoDataProvider::new().fetch_estimation().unwrap();
        let summary = est.summary();
        assert_eq!(summary.total_area, 40_000.0);
        assert_eq!(summary.total_cost, 197_500_000.0);
        assert_eq!(summary.average_unit_cost, 4_937.5);
    }

    #[test]
    fn overview_trend_is_sorted_and_averaged() {
        let provider = DemoDataProvider::new();
        let overview = provider.fetch_overview().unwrap();

        assert_eq!(overview.region_count, 2);
        assert!(overview.index_count > 0);
        let periods: Vec<&str> = overview.trend.iter().map(|p| p.period.as_str()).collect();
        let mut sorted = periods.clone();
        sorted.sort();
        assert_eq!(periods, sorted);

        // 2025-06 average over the four series
        let expected = (4512.0 + 6010.0 + 4180.0 + 5760.0) / 4.0;
        assert_eq!(overview.latest_average_index, expected);
        assert!(overview.change_percent.is_finite());
    }

    #[test]
    fn overview_of_no_indexes_is_all_zero() {
        let overview = build_overview(&[]);
        assert_eq!(overview.index_count, 0);
        assert_eq!(overview.latest_average_index, 0.0);
        assert_eq!(overview.change_percent, 0.0);
        assert!(overview.trend.is_empty());
    }
}
