pub mod progress;
pub mod request;

pub use progress::{CheckIssue, CheckProgress, CheckStatus, IssueSeverity};
pub use request::{CheckRequest, OutlierMethod};

use crate::usecases::common::UseCaseMetadata;

pub struct TenderCheck;

impl UseCaseMetadata for TenderCheck {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "tender_check"
    }

    fn display_name() -> &'static str {
        "Tender quality check"
    }

    fn description() -> &'static str {
        "Quality-control checks over an uploaded tender file"
    }
}
