//! Data access context for screens.
//!
//! All screens read through [`DataContext`] instead of owning fixtures, so
//! swapping the demo provider for a real backend touches one place.

use contracts::shared::provider::{DataProvider, DemoDataProvider};
use std::sync::Arc;

#[derive(Clone)]
pub struct DataContext(pub Arc<dyn DataProvider>);

impl DataContext {
    pub fn demo() -> Self {
        Self(Arc::new(DemoDataProvider::new()))
    }
}

/// Shorthand used by screens: `let data = use_data();`
pub fn use_data() -> DataContext {
    leptos::context::use_context::<DataContext>().expect("DataContext not found in context")
}
