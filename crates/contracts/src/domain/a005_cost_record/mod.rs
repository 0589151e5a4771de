pub mod aggregate;

pub use aggregate::{CostRecord, CostRecordId};
