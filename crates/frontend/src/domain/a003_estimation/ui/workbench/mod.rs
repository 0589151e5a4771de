use crate::shared::components::table::{format_money, parse_non_negative};
use crate::shared::components::StatCard;
use crate::shared::components::TableTotalsRow;
use crate::shared::data::use_data;
use crate::shared::icons::icon;
use contracts::domain::a003_estimation::{Estimation, LineItemField};
use contracts::domain::a004_cost_category::CostCategory;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

/// Line-item editor over a single estimation.
///
/// Every edit goes through the aggregate's own operations so the subtotal
/// column and the summary cards can never drift from the rows.
#[component]
pub fn EstimationWorkbench() -> impl IntoView {
    let data = use_data();

    let initial = match data.0.fetch_estimation() {
        Ok(est) => est,
        Err(e) => {
            log::error!("estimation fixture failed to load: {}", e);
            Estimation::new("EST-0000".to_string(), "Estimation".to_string(), None)
        }
    };
    let categories: Vec<CostCategory> = data.0.fetch_categories().unwrap_or_default();
    let categories = StoredValue::new(categories);

    let est = RwSignal::new(initial);
    let (new_item_name, set_new_item_name) = signal(String::new());

    let summary = Signal::derive(move || est.get().summary());

    let handle_add = move |_| {
        let name = new_item_name.get().trim().to_string();
        let name = if name.is_empty() {
            let next = est.with_untracked(|e| e.items.len() + 1);
            format!("Item {}", next)
        } else {
            name
        };
        est.update(|e| {
            e.add_item(name);
        });
        set_new_item_name.set(String::new());
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{move || est.get().base.description.clone()}</h2>
            </div>

            <div class="stat-cards">
                <StatCard
                    label="Total area".to_string()
                    icon_name="building".to_string()
                    value=Signal::derive(move || Some(summary.get().total_area))
                    format=ValueFormat::Number { decimals: 0 }
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                    change_percent=Signal::derive(|| None)
                    subtitle=Signal::derive(|| Some("m²".to_string()))
                />
                <StatCard
                    label="Total cost".to_string()
                    icon_name="bar-chart".to_string()
                    value=Signal::derive(move || Some(summary.get().total_cost))
                    format=ValueFormat::Money { currency: "CNY".to_string() }
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                    change_percent=Signal::derive(|| None)
                />
                <StatCard
                    label="Average unit cost".to_string()
                    icon_name="calculator".to_string()
                    value=Signal::derive(move || Some(summary.get().average_unit_cost))
                    format=ValueFormat::Money { currency: "CNY/m²".to_string() }
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                    change_percent=Signal::derive(|| None)
                />
            </div>

            <div class="header__actions" style="margin: 12px 0;">
                <input
                    type="text"
                    placeholder="New line item name"
                    prop:value=move || new_item_name.get()
                    on:input=move |ev| set_new_item_name.set(event_target_value(&ev))
                />
                <button class="button button--primary" on:click=handle_add>
                    {icon("plus")}
                    "Add item"
                </button>
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell table__header-cell--right">"Area, m²"</th>
                            <th class="table__header-cell table__header-cell--right">"Unit cost, /m²"</th>
                            <th class="table__header-cell table__header-cell--right">"Subtotal"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                        {move || {
                            let s = summary.get();
                            view! {
                                <TableTotalsRow>
                                    <td class="table__cell">{format!("Items: {}", est.get().items.len())}</td>
                                    <td class="table__cell"></td>
                                    <td class="table__cell table__cell--right">{format_money(s.total_area)}</td>
                                    <td class="table__cell table__cell--right">{format_money(s.average_unit_cost)}</td>
                                    <td class="table__cell table__cell--right">{format_money(s.total_cost)}</td>
                                    <td class="table__cell"></td>
                                </TableTotalsRow>
                            }
                        }}
                    </thead>
                    <tbody>
                        {move || est.get().items.into_iter().map(|item| {
                            let id = item.id;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">
                                        <input
                                            type="text"
                                            prop:value=item.name.clone()
                                            on:change=move |ev| {
                                                let value = event_target_value(&ev);
                                                est.update(|e| {
                                                    e.rename_item(id, value);
                                                });
                                            }
                                        />
                                    </td>
                                    <td class="table__cell">
                                        <select
                                            on:change=move |ev| {
                                                let code = event_target_value(&ev);
                                                est.update(|e| {
                                                    e.set_item_category(id, code);
                                                });
                                            }
                                        >
                                            <option value="" prop:selected=item.category_code.is_empty()>
                                                "—"
                                            </option>
                                            {categories.get_value().into_iter().map(|cat| {
                                                let code = cat.base.code.clone();
                                                let selected = item.category_code == code;
                                                view! {
                                                    <option value={code.clone()} prop:selected=selected>
                                                        {format!("{} {}", code, cat.base.description)}
                                                    </option>
                                                }
                                            }).collect_view()}
                                        </select>
                                    </td>
                                    <td class="table__cell table__cell--right">
                                        <input
                                            type="number"
                                            min="0"
                                            step="100"
                                            prop:value=item.area.to_string()
                                            on:input=move |ev| {
                                                // Negative and non-finite input is clamped here; the aggregate stays pure
                                                let parsed = parse_non_negative(&event_target_value(&ev));
                                                est.update(|e| {
                                                    e.update_item(id, LineItemField::Area, parsed);
                                                });
                                            }
                                        />
                                    </td>
                                    <td class="table__cell table__cell--right">
                                        <input
                                            type="number"
                                            min="0"
                                            step="50"
                                            prop:value=item.unit_cost.to_string()
                                            on:input=move |ev| {
                                                let parsed = parse_non_negative(&event_target_value(&ev));
                                                est.update(|e| {
                                                    e.update_item(id, LineItemField::UnitCost, parsed);
                                                });
                                            }
                                        />
                                    </td>
                                    <td class="table__cell table__cell--right">
                                        {format_money(item.subtotal)}
                                    </td>
                                    <td class="table__cell">
                                        <button
                                            class="button button--icon"
                                            title="Remove item"
                                            on:click=move |_| {
                                                est.update(|e| {
                                                    e.remove_item(id);
                                                });
                                            }
                                        >
                                            {icon("delete")}
                                        </button>
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
