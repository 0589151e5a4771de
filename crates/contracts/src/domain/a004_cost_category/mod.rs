pub mod aggregate;

pub use aggregate::{CostCategory, CostCategoryId};
