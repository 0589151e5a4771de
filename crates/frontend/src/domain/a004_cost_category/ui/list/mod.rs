use crate::shared::components::PageHeader;
use crate::shared::data::use_data;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Read-only list of the standardized cost category tree.
#[component]
pub fn CostCategoryList() -> impl IntoView {
    let data = use_data();
    let (items, set_items) = signal(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = {
        let data = data.clone();
        move || match data.0.fetch_categories() {
            Ok(v) => {
                set_items.set(v);
                set_error.set(None);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    fetch();

    view! {
        <div class="content">
            <PageHeader title="Cost categories" subtitle="Standardized classification tree">
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Code"</th>
                            <th class="table__header-cell">"Label"</th>
                            <th class="table__header-cell">"Parent"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|cat| {
                            let indent = format!("padding-left: {}px;", 8 + (cat.depth().saturating_sub(1)) * 18);
                            let parent = cat.parent_code.clone().unwrap_or_else(|| "—".to_string());
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell" style=indent>{cat.base.code.clone()}</td>
                                    <td class="table__cell">{cat.base.description.clone()}</td>
                                    <td class="table__cell">{parent}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
