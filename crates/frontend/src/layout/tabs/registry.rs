//! Tab content registry - single source of truth for the tab.key -> View
//! mapping.

use crate::dashboards::d400_cost_overview::ui::CostOverviewDashboard;
use crate::domain::a001_project::ui::details::ProjectDetails;
use crate::domain::a001_project::ui::list::ProjectList;
use crate::domain::a002_cost_index::ui::list::CostIndexList;
use crate::domain::a003_estimation::ui::workbench::EstimationWorkbench;
use crate::domain::a004_cost_category::ui::list::CostCategoryList;
use crate::domain::a005_cost_record::ui::tagging::CostRecordTagging;
use crate::layout::global_context::AppGlobalContext;
use crate::usecases::u501_tender_check::view::TenderCheckWidget;
use leptos::prelude::*;

/// Renders the tab content for a key.
///
/// # Arguments
/// * `key` - unique tab key (e.g. "a002_cost_index", "u501_tender_check")
/// * `tabs_store` - context used by detail views to close their own tab
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        // ── Domain aggregates ─────────────────────────────────────────────
        "a001_project" => view! { <ProjectList /> }.into_any(),
        k if k.starts_with("a001_project_detail_") => {
            let id = k.strip_prefix("a001_project_detail_").unwrap().to_string();
            view! {
                <ProjectDetails
                    id=Some(id)
                    on_close=Callback::new({
                        let key_for_close = key_for_close.clone();
                        move |_| {
                            tabs_store.close_tab(&key_for_close);
                        }
                    })
                />
            }
            .into_any()
        }

        "a002_cost_index" => view! { <CostIndexList /> }.into_any(),

        "a003_estimation" => view! { <EstimationWorkbench /> }.into_any(),

        "a004_cost_category" => view! { <CostCategoryList /> }.into_any(),

        "a005_cost_record" => view! { <CostRecordTagging /> }.into_any(),

        // ── Use cases ─────────────────────────────────────────────────────
        "u501_tender_check" => view! { <TenderCheckWidget /> }.into_any(),

        // ── Dashboards ────────────────────────────────────────────────────
        "d400_cost_overview" => view! { <CostOverviewDashboard /> }.into_any(),

        // ── Unknown key ───────────────────────────────────────────────────
        unknown => {
            let label = unknown.to_string();
            view! {
                <div class="tab-placeholder">
                    <p>"Unknown tab: " {label}</p>
                </div>
            }
            .into_any()
        }
    }
}
