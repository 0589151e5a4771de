pub mod dto;

pub use dto::{CostOverviewDto, TrendPoint};
