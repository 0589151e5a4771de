pub mod aggregate;

pub use aggregate::{CostIndex, CostIndexId};
