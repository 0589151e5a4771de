use crate::shared::components::table::{format_number_int, format_number_with_decimals};
use crate::shared::components::StatCard;
use crate::shared::data::use_data;
use contracts::dashboards::d400_cost_overview::CostOverviewDto;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

/// Cost overview dashboard: headline indicators plus the index trend.
#[component]
pub fn CostOverviewDashboard() -> impl IntoView {
    let data = use_data();

    let (overview, set_overview) = signal(None::<CostOverviewDto>);
    let (error, set_error) = signal(None::<String>);

    match data.0.fetch_overview() {
        Ok(dto) => set_overview.set(Some(dto)),
        Err(e) => {
            log::error!("cost overview failed to load: {}", e);
            set_error.set(Some(e.to_string()));
        }
    }

    let change_status = Signal::derive(move || {
        match overview.get().map(|o| o.change_percent) {
            Some(p) if p > 2.0 => IndicatorStatus::Warning,
            Some(_) => IndicatorStatus::Good,
            None => IndicatorStatus::Neutral,
        }
    });

    view! {
        <div class="content dashboard">
            <div class="header">
                <h2>"Cost overview"</h2>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="stat-cards">
                <StatCard
                    label="Regions".to_string()
                    icon_name="database".to_string()
                    value=Signal::derive(move || overview.get().map(|o| o.region_count as f64))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                    change_percent=Signal::derive(|| None)
                />
                <StatCard
                    label="Index records".to_string()
                    icon_name="bar-chart".to_string()
                    value=Signal::derive(move || overview.get().map(|o| o.index_count as f64))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                    change_percent=Signal::derive(|| None)
                />
                <StatCard
                    label="Latest average index".to_string()
                    icon_name="trending-up".to_string()
                    value=Signal::derive(move || overview.get().map(|o| o.latest_average_index))
                    format=ValueFormat::Money { currency: "CNY/m²".to_string() }
                    status=change_status
                    change_percent=Signal::derive(move || overview.get().map(|o| o.change_percent))
                    subtitle=Signal::derive(move || {
                        overview.get().and_then(|o| o.latest().map(|p| p.period.clone()))
                    })
                />
            </div>

            <div class="table-container" style="margin-top: 20px;">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Period"</th>
                            <th class="table__header-cell table__header-cell--right">"Average index, /m²"</th>
                            <th class="table__header-cell table__header-cell--right">"Records"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || overview.get().map(|o| {
                            o.trend.into_iter().map(|point| {
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{point.period}</td>
                                        <td class="table__cell table__cell--right">{format_number_with_decimals(point.average_index, 1)}</td>
                                        <td class="table__cell table__cell--right">{format_number_int(point.index_count as f64)}</td>
                                    </tr>
                                }
                            }).collect_view()
                        })}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
