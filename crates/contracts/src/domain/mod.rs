pub mod common;

pub mod a001_project;
pub mod a002_cost_index;
pub mod a003_estimation;
pub mod a004_cost_category;
pub mod a005_cost_record;
