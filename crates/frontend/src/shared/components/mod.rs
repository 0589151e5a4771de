pub mod page_header;
pub mod stat_card;
pub mod table;
pub mod table_totals_row;

pub use page_header::PageHeader;
pub use stat_card::StatCard;
pub use table_totals_row::TableTotalsRow;
