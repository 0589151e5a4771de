use crate::shared::components::table::format_money;
use crate::shared::components::PageHeader;
use crate::shared::data::use_data;
use crate::shared::icons::icon;
use contracts::domain::a004_cost_category::CostCategory;
use contracts::domain::a005_cost_record::CostRecord;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// Category tagging screen for raw cost records.
///
/// Records arrive untagged from source documents; here each one gets a
/// standardized category code.
#[component]
pub fn CostRecordTagging() -> impl IntoView {
    let data = use_data();

    let records = RwSignal::new(data.0.fetch_cost_records().unwrap_or_default());
    let categories: Vec<CostCategory> = data.0.fetch_categories().unwrap_or_default();
    let categories = StoredValue::new(categories);
    let (untagged_only, set_untagged_only) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = {
        let data = data.clone();
        move || match data.0.fetch_cost_records() {
            Ok(v) => {
                records.set(v);
                set_error.set(None);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    let untagged_count = move || records.get().iter().filter(|r| !r.is_tagged()).count();

    let visible = move || {
        let only = untagged_only.get();
        records
            .get()
            .into_iter()
            .filter(|r| !only || !r.is_tagged())
            .collect::<Vec<CostRecord>>()
    };

    let assign = move |id: String, code: String| {
        records.update(|list| {
            if let Some(record) = list.iter_mut().find(|r| r.base.id.as_string() == id) {
                record.assign_category(&code);
            }
        });
    };

    view! {
        <div class="content">
            <PageHeader title="Cost records" subtitle="Assign standardized categories to imported records">
                <label class="header__toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || untagged_only.get()
                        on:change=move |ev| set_untagged_only.set(event_target_checked(&ev))
                    />
                    " Untagged only"
                </label>
                <span class="header__counter">
                    {move || format!("Untagged: {}", untagged_count())}
                </span>
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
                            <th class="table__header-cell">"Description"</th>
                            <th class="table__header-cell">"Source document"</th>
                            <th class="table__header-cell table__header-cell--right">"Amount"</th>
                            <th class="table__header-cell">"Category"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible().into_iter().map(|record| {
                            let id = record.base.id.as_string();
                            let current = record.category_code.clone().unwrap_or_default();
                            let row_class = if record.is_tagged() {
                                "table__row"
                            } else {
                                "table__row table__row--attention"
                            };
                            view! {
                                <tr class=row_class>
                                    <td class="table__cell">{record.base.code.clone()}</td>
                                    <td class="table__cell">{record.base.description.clone()}</td>
                                    <td class="table__cell">{record.source_document.clone()}</td>
                                    <td class="table__cell table__cell--right">{format_money(record.amount)}</td>
                                    <td class="table__cell">
                                        <select
                                            on:change=move |ev| {
                                                assign(id.clone(), event_target_value(&ev));
                                            }
                                        >
                                            <option value="" prop:selected=current.is_empty()>
                                                "— untagged —"
                                            </option>
                                            {categories.get_value().into_iter().map(|cat| {
                                                let code = cat.base.code.clone();
                                                let selected = current == code;
                                                view! {
                                                    <option value={code.clone()} prop:selected=selected>
                                                        {format!("{} {}", code, cat.base.description)}
                                                    </option>
                                                }
                                            }).collect_view()}
                                        </select>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
