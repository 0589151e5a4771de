pub mod aggregate;
pub mod summary;

pub use aggregate::{Estimation, EstimationId, LineItem, LineItemField, LineItemId};
pub use summary::{summarize, AggregateSummary};
