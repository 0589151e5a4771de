/// UseCase metadata for identification and documentation
pub trait UseCaseMetadata {
    /// UseCase index (e.g. "u501")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "tender_check")
    fn usecase_name() -> &'static str;

    /// Display name for the UI (e.g. "Tender quality check")
    fn display_name() -> &'static str;

    /// Description of the UseCase
    fn description() -> &'static str {
        ""
    }

    /// Full name of the form "u501_tender_check"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
