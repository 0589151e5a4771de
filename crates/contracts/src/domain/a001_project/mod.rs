pub mod aggregate;

pub use aggregate::{Project, ProjectDto, ProjectId, ProjectStage};
