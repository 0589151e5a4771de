use crate::shared::data::DataContext;
use contracts::domain::a001_project::ProjectDto;
use leptos::prelude::*;

/// ViewModel for the project details form
#[derive(Clone)]
pub struct ProjectDetailsViewModel {
    pub form: RwSignal<ProjectDto>,
    pub error: RwSignal<Option<String>>,
}

impl ProjectDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProjectDto::default()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || Self::validate_form(&self.form.get()).is_ok()
    }

    fn validate_form(dto: &ProjectDto) -> Result<(), &'static str> {
        if dto.description.trim().is_empty() {
            return Err("Name is required");
        }
        if dto.region.trim().is_empty() {
            return Err("Region is required");
        }
        if dto.gross_floor_area < 0.0 {
            return Err("Gross floor area cannot be negative");
        }
        if dto.planned_investment < 0.0 {
            return Err("Planned investment cannot be negative");
        }
        Ok(())
    }

    /// Load form data from the provider if an ID is given
    pub fn load_if_needed(&self, data: &DataContext, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };
        match data.0.fetch_projects() {
            Ok(projects) => {
                let found = projects
                    .iter()
                    .find(|p| p.to_string_id() == existing_id)
                    .map(ProjectDto::from);
                match found {
                    Some(dto) => self.form.set(dto),
                    None => self.error.set(Some("Project not found".to_string())),
                }
            }
            Err(e) => self.error.set(Some(format!("Load failed: {}", e))),
        }
    }

    /// Validate and hand the form back to the caller
    pub fn save_command(&self, on_saved: impl Fn(ProjectDto) + 'static) {
        let current = self.form.get();

        if let Err(msg) = Self::validate_form(&current) {
            self.error.set(Some(msg.to_string()));
            return;
        }

        log::info!("project form saved: {}", current.description);
        on_saved(current);
    }
}
