use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct CostIndexListState {
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for CostIndexListState {
    fn default() -> Self {
        Self {
            sort_field: "period".to_string(),
            sort_ascending: false,
        }
    }
}

pub fn create_state() -> RwSignal<CostIndexListState> {
    RwSignal::new(CostIndexListState::default())
}
