use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ProjectListState {
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for ProjectListState {
    fn default() -> Self {
        Self {
            sort_field: "code".to_string(),
            sort_ascending: true,
        }
    }
}

pub fn create_state() -> RwSignal<ProjectListState> {
    RwSignal::new(ProjectListState::default())
}
