pub mod state;

use self::state::create_state;
use crate::shared::components::table::{format_number_int, format_number_with_decimals};
use crate::shared::components::TableTotalsRow;
use crate::shared::data::use_data;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    get_sort_class, get_sort_indicator, sort_list, SearchInput, Sortable,
};
use contracts::domain::a002_cost_index::CostIndex;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct CostIndexRow {
    pub code: String,
    pub region: String,
    pub building_type: String,
    pub period: String,
    pub index_value: f64,
    pub sample_size: u32,
    pub change_percent: Option<f64>,
}

impl From<CostIndex> for CostIndexRow {
    fn from(ix: CostIndex) -> Self {
        Self {
            code: ix.base.code,
            region: ix.region,
            building_type: ix.building_type.display_name().to_string(),
            period: ix.period,
            index_value: ix.index_value,
            sample_size: ix.sample_size,
            change_percent: ix.change_percent,
        }
    }
}

impl Sortable for CostIndexRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "region" => self.region.to_lowercase().cmp(&other.region.to_lowercase()),
            "building_type" => self.building_type.cmp(&other.building_type),
            "period" => self.period.cmp(&other.period),
            "index_value" => self
                .index_value
                .partial_cmp(&other.index_value)
                .unwrap_or(Ordering::Equal),
            "sample_size" => self.sample_size.cmp(&other.sample_size),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn CostIndexList() -> impl IntoView {
    let data = use_data();
    let state = create_state();
    let (items, set_items) = signal::<Vec<CostIndexRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (filter, set_filter) = signal(String::new());

    let fetch = {
        let data = data.clone();
        move || match data.0.fetch_cost_indexes() {
            Ok(v) => {
                let rows: Vec<CostIndexRow> = v.into_iter().map(Into::into).collect();
                set_items.set(rows);
                set_error.set(None);
            }
            Err(e) => set_error.set(Some(e.to_string())),
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

    // Filter on region or building type, then sort
    let visible_items = move || {
        let needle = filter.get().trim().to_lowercase();
        let mut items_vec: Vec<CostIndexRow> = items
            .get()
            .into_iter()
            .filter(|row| {
                needle.is_empty()
                    || row.region.to_lowercase().contains(&needle)
                    || row.building_type.to_lowercase().contains(&needle)
                    || row.period.contains(&needle)
            })
            .collect();
        let s = state.get();
        sort_list(&mut items_vec, &s.sort_field, s.sort_ascending);
        items_vec
    };

    // Totals row: record count, average index, total sample size
    let totals = move || {
        let rows = visible_items();
        let count = rows.len();
        let avg = if count > 0 {
            rows.iter().map(|r| r.index_value).sum::<f64>() / count as f64
        } else {
            0.0
        };
        let samples: u32 = rows.iter().map(|r| r.sample_size).sum();
        (count, avg, samples)
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>"Cost indexes"</h2>
                <div class="header__actions">
                    <SearchInput
                        value=filter
                        on_change=Callback::new(move |v| set_filter.set(v))
                        placeholder="Region, type or period...".to_string()
                    />
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
                            <th class="table__header-cell">"Code"</th>
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
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("period")>
                                "Period"
                                <span class={move || get_sort_class(&state.get().sort_field, "period")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "period", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--right table__header-cell--sortable" on:click=toggle_sort("index_value")>
                                "Index, /m²"
                                <span class={move || get_sort_class(&state.get().sort_field, "index_value")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "index_value", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--right table__header-cell--sortable" on:click=toggle_sort("sample_size")>
                                "Samples"
                                <span class={move || get_sort_class(&state.get().sort_field, "sample_size")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "sample_size", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--right">"Change"</th>
                        </tr>
                        {move || {
                            let (count, avg, samples) = totals();
                            view! {
                                <TableTotalsRow>
                                    <td class="table__cell">{format!("Records: {}", count)}</td>
                                    <td class="table__cell"></td>
                                    <td class="table__cell"></td>
                                    <td class="table__cell"></td>
                                    <td class="table__cell table__cell--right">{format_number_with_decimals(avg, 1)}</td>
                                    <td class="table__cell table__cell--right">{format_number_int(samples as f64)}</td>
                                    <td class="table__cell"></td>
                                </TableTotalsRow>
                            }
                        }}
                    </thead>
                    <tbody>
                        {move || visible_items().into_iter().map(|row| {
                            let change = row.change_percent
                                .map(|p| format!("{}{:.1}%", if p >= 0.0 { "+" } else { "" }, p))
                                .unwrap_or_else(|| "—".to_string());
                            let change_class = match row.change_percent {
                                Some(p) if p > 0.0 => "table__cell table__cell--right table__cell--up",
                                Some(p) if p < 0.0 => "table__cell table__cell--right table__cell--down",
                                _ => "table__cell table__cell--right",
                            };
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">{row.region}</td>
                                    <td class="table__cell">{row.building_type}</td>
                                    <td class="table__cell">{row.period}</td>
                                    <td class="table__cell table__cell--right">{format_number_with_decimals(row.index_value, 1)}</td>
                                    <td class="table__cell table__cell--right">{row.sample_size}</td>
                                    <td class={change_class}>{change}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
