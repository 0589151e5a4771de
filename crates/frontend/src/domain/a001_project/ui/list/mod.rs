pub mod state;

use self::state::create_state;
use crate::domain::a001_project::ui::details::ProjectDetails;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::shared::components::table::format_money;
use crate::shared::components::table::format_number_int;
use crate::shared::data::use_data;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, Sortable};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a001_project::Project;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct ProjectRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub region: String,
    pub building_type: String,
    pub stage: String,
    pub gross_floor_area: f64,
    pub planned_investment: f64,
    pub created_at: String,
}

impl From<Project> for ProjectRow {
    fn from(p: Project) -> Self {
        use contracts::domain::common::AggregateId;

        Self {
            id: p.base.id.as_string(),
            code: p.base.code,
            description: p.base.description,
            region: p.region,
            building_type: p.building_type.display_name().to_string(),
            stage: p.stage.display_name().to_string(),
            gross_floor_area: p.gross_floor_area,
            planned_investment: p.planned_investment,
            created_at: format_timestamp(p.base.metadata.created_at),
        }
    }
}

fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

impl Sortable for ProjectRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.to_lowercase().cmp(&other.code.to_lowercase()),
            "description" => self
                .description
                .to_lowercase()
                .cmp(&other.description.to_lowercase()),
            "region" => self.region.to_lowercase().cmp(&other.region.to_lowercase()),
            "building_type" => self.building_type.cmp(&other.building_type),
            "stage" => self.stage.cmp(&other.stage),
            "gross_floor_area" => self
                .gross_floor_area
                .partial_cmp(&other.gross_floor_area)
                .unwrap_or(Ordering::Equal),
            "planned_investment" => self
                .planned_investment
                .partial_cmp(&other.planned_investment)
                .unwrap_or(Ordering::Equal),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn ProjectList() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let data = use_data();
    let state = create_state();
    let (items, set_items) = signal::<Vec<ProjectRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = {
        let data = data.clone();
        move || match data.0.fetch_projects() {
            Ok(v) => {
                let rows: Vec<ProjectRow> = v.into_iter().map(Into::into).collect();
                set_items.set(rows);
                set_error.set(None);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    // Row click opens a detail tab, the "New" button opens a modal.
    let open_detail_tab = move |row: &ProjectRow| {
        let key = format!("a001_project_detail_{}", row.id);
        let title = detail_tab_label("Project", &row.code);
        tabs_store.open_tab(&key, &title);
    };

    let handle_create_new = {
        let fetch = fetch.clone();
        move || {
            let fetch = fetch.clone();
            modal_stack.push_with_frame(
                Some("max-width: min(900px, 95vw); width: min(900px, 95vw);".to_string()),
                Some("project-modal".to_string()),
                move |handle| {
                    let fetch = fetch.clone();
                    view! {
                        <ProjectDetails
                            id=None
                            on_close=Callback::new({
                                let handle = handle.clone();
                                move |_| {
                                    handle.close();
                                    fetch();
                                }
                            })
                        />
                    }
                    .into_any()
                },
            );
        }
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
        }
    };

    let sorted_items = move || {
        let mut items_vec = items.get();
        let s = state.get();
        sort_list(&mut items_vec, &s.sort_field, s.sort_ascending);
        items_vec
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>"Projects"</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| handle_create_new()>
                        {icon("plus")}
                        "New project"
                    </button>
                    <button class="button button--secondary" on:click={
                        let fetch = fetch.clone();
                        move |_| fetch()
                    }>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("code")>
                                "Code"
                                <span class={move || get_sort_class(&state.get().sort_field, "code")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "code", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("description")>
                                "Name"
                                <span class={move || get_sort_class(&state.get().sort_field, "description")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "description", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("region")>
                                "Region"
                                <span class={move || get_sort_class(&state.get().sort_field, "region")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "region", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("building_type")>
                                "Building type"
                                <span class={move || get_sort_class(&state.get().sort_field, "building_type")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "building_type", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("stage")>
                                "Stage"
                                <span class={move || get_sort_class(&state.get().sort_field, "stage")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "stage", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--right table__header-cell--sortable" on:click=toggle_sort("gross_floor_area")>
                                "GFA, m²"
                                <span class={move || get_sort_class(&state.get().sort_field, "gross_floor_area")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "gross_floor_area", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--right table__header-cell--sortable" on:click=toggle_sort("planned_investment")>
                                "Planned investment"
                                <span class={move || get_sort_class(&state.get().sort_field, "planned_investment")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "planned_investment", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("created_at")>
                                "Created"
                                <span class={move || get_sort_class(&state.get().sort_field, "created_at")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "created_at", state.get().sort_ascending)}
                                </span>
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_items().into_iter().map(|row| {
                            let row_for_click = row.clone();
                            view! {
                                <tr
                                    class="table__row"
                                    on:click=move |_| open_detail_tab(&row_for_click)
                                >
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell">{row.region}</td>
                                    <td class="table__cell">{row.building_type}</td>
                                    <td class="table__cell">{row.stage}</td>
                                    <td class="table__cell table__cell--right">{format_number_int(row.gross_floor_area)}</td>
                                    <td class="table__cell table__cell--right">{format_money(row.planned_investment)}</td>
                                    <td class="table__cell">{row.created_at}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
