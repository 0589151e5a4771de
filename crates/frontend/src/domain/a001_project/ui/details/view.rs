use super::view_model::ProjectDetailsViewModel;
use crate::shared::components::table::parse_non_negative;
use crate::shared::data::use_data;
use contracts::enums::building_type::BuildingType;
use contracts::domain::a001_project::ProjectStage;
use leptos::prelude::*;

/// Project details form.
///
/// Rendered either inside a modal (creation) or inside a detail tab
/// (editing); the caller passes `on_close` for both paths.
#[component]
pub fn ProjectDetails(
    /// Existing project id, None for creation
    id: Option<String>,
    /// Called when the form is saved or dismissed
    on_close: Callback<()>,
) -> impl IntoView {
    let data = use_data();
    let vm = ProjectDetailsViewModel::new();
    vm.load_if_needed(&data, id);

    let form = vm.form;
    let error = vm.error;

    let title = {
        let vm = vm.clone();
        move || {
            if (vm.is_edit_mode())() {
                "Project"
            } else {
                "New project"
            }
        }
    };

    let handle_save = {
        let vm = vm.clone();
        move |_| {
            vm.save_command(move |_| {
                on_close.run(());
            });
        }
    };

    let handle_cancel = move |_| {
        on_close.run(());
    };

    view! {
        <div class="details-form">
            <div class="details-form__header">
                <h3>{title}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="form-group">
                <label>"Code"</label>
                <input
                    type="text"
                    prop:value=move || form.get().code.unwrap_or_default()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.code = if value.is_empty() { None } else { Some(value) });
                    }
                />
            </div>

            <div class="form-group">
                <label>"Name"</label>
                <input
                    type="text"
                    prop:value=move || form.get().description
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.description = value);
                    }
                />
            </div>

            <div class="form-group">
                <label>"Region"</label>
                <input
                    type="text"
                    prop:value=move || form.get().region
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.region = value);
                    }
                />
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label>"Building type"</label>
                    <select
                        on:change=move |ev| {
                            let code = event_target_value(&ev);
                            form.update(|f| f.building_type = BuildingType::from_code(&code));
                        }
                    >
                        {BuildingType::all().into_iter().map(|bt| {
                            let selected = move || form.get().building_type == Some(bt);
                            view! {
                                <option value={bt.code()} prop:selected=selected>
                                    {bt.display_name()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"Stage"</label>
                    <select
                        on:change=move |ev| {
                            let code = event_target_value(&ev);
                            form.update(|f| f.stage = ProjectStage::from_code(&code));
                        }
                    >
                        {ProjectStage::all().into_iter().map(|stage| {
                            let selected = move || form.get().stage == Some(stage);
                            view! {
                                <option value={stage.code()} prop:selected=selected>
                                    {stage.display_name()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label>"Gross floor area, m²"</label>
                    <input
                        type="number"
                        min="0"
                        prop:value=move || form.get().gross_floor_area.to_string()
                        on:input=move |ev| {
                            // Negative and non-finite input is clamped at the boundary
                            let parsed = parse_non_negative(&event_target_value(&ev));
                            form.update(|f| f.gross_floor_area = parsed);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"Planned investment"</label>
                    <input
                        type="number"
                        min="0"
                        prop:value=move || form.get().planned_investment.to_string()
                        on:input=move |ev| {
                            let parsed = parse_non_negative(&event_target_value(&ev));
                            form.update(|f| f.planned_investment = parsed);
                        }
                    />
                </div>
            </div>

            <div class="form-group">
                <label>"Comment"</label>
                <input
                    type="text"
                    prop:value=move || form.get().comment.unwrap_or_default()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.comment = if value.is_empty() { None } else { Some(value) });
                    }
                />
            </div>

            <div class="details-form__footer">
                <button
                    class="button button--primary"
                    prop:disabled={
                        let vm = vm.clone();
                        move || !(vm.is_form_valid())()
                    }
                    on:click=handle_save
                >
                    "Save"
                </button>
                <button class="button button--secondary" on:click=handle_cancel>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
