//! Tab management module
//!
//! - `page` - TabPage wrapper around tab content
//! - `registry` - tab.key -> View mapping (single source of truth)
//! - `tab_bar` - strip of clickable tab headers
//! - `tab_labels` - single source of truth for tab titles

pub mod page;
pub mod registry;
pub mod tab_bar;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_bar::TabBar;
pub use tab_labels::{detail_tab_label, tab_label_for_key};
