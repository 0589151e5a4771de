use crate::shared::data::use_data;
use crate::shared::icons::icon;
use contracts::usecases::u501_tender_check::{
    CheckIssue, CheckProgress, CheckRequest, CheckStatus, IssueSeverity, OutlierMethod,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

const TOTAL_GROUPS: u32 = 8;

const GROUP_NAMES: [&str; 8] = [
    "File structure",
    "Header sheet",
    "Units of measure",
    "Quantity × rate arithmetic",
    "Category tags",
    "Regional benchmarks",
    "Preliminaries share",
    "Summary reconciliation",
];

const PROGRESS_KEY: &str = "u501_progress";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Save the finished run to localStorage.
fn save_progress_snapshot(p: &CheckProgress) {
    if let Ok(json) = serde_json::to_string(p) {
        if let Some(s) = storage() {
            let _ = s.set_item(PROGRESS_KEY, &json);
        }
    }
}

/// Load the last finished run from localStorage.
fn load_progress_snapshot() -> Option<CheckProgress> {
    storage()
        .and_then(|s| s.get_item(PROGRESS_KEY).ok().flatten())
        .and_then(|j| serde_json::from_str::<CheckProgress>(&j).ok())
}

/// Quality-control check over an uploaded tender file.
///
/// The check itself runs step by step with a visible progress bar; issues
/// come back grouped by severity.
#[component]
pub fn TenderCheckWidget() -> impl IntoView {
    let data = use_data();

    let (file_name, set_file_name) = signal("tender-2025-014.xlsx".to_string());
    let (ruleset, set_ruleset) = signal("standard".to_string());
    let (outlier_method, set_outlier_method) = signal(OutlierMethod::Iqr);
    let (is_running, set_is_running) = signal(false);
    let (error_msg, set_error_msg) = signal(String::new());
    let (progress, set_progress) = signal(None::<CheckProgress>);

    // Restore the last finished run when the tab is reopened
    if let Some(snapshot) = load_progress_snapshot() {
        if snapshot.status.is_finished() {
            set_progress.set(Some(snapshot));
        }
    }

    let on_start_check = {
        let data = data.clone();
        move |_| {
            let name = file_name.get().trim().to_string();
            if name.is_empty() {
                set_error_msg.set("Enter a file name".to_string());
                return;
            }

            let request = CheckRequest {
                file_name: name,
                ruleset: ruleset.get(),
                outlier_method: outlier_method.get(),
            };

            set_is_running.set(true);
            set_error_msg.set(String::new());
            if let Some(s) = storage() {
                let _ = s.remove_item(PROGRESS_KEY);
            }

            let issues = match data.0.fetch_check_issues() {
                Ok(issues) => issues,
                Err(e) => {
                    set_error_msg.set(format!("Check failed to start: {}", e));
                    set_is_running.set(false);
                    return;
                }
            };

            log::info!(
                "tender check started: file={} ruleset={} method={}",
                request.file_name,
                request.ruleset,
                request.outlier_method.display_name()
            );

            spawn_local(async move {
                let mut prog = CheckProgress::new(Uuid::new_v4().to_string(), TOTAL_GROUPS);
                prog.status = CheckStatus::Running;
                set_progress.set(Some(prog.clone()));

                for (idx, group) in GROUP_NAMES.iter().enumerate() {
                    gloo_timers::future::TimeoutFuture::new(400).await;
                    prog.current_group = Some(group.to_string());
                    prog.processed_groups = idx as u32 + 1;
                    set_progress.set(Some(prog.clone()));
                }

                prog.issues = issues;
                prog.finish();
                save_progress_snapshot(&prog);
                set_progress.set(Some(prog));
                set_is_running.set(false);
            });
        }
    };

    let progress_percent = move || {
        progress
            .get()
            .map(|p| {
                if p.total_groups == 0 {
                    0.0
                } else {
                    p.processed_groups as f64 / p.total_groups as f64 * 100.0
                }
            })
            .unwrap_or(0.0)
    };

    let severity_badge = |severity: IssueSeverity| match severity {
        IssueSeverity::Error => view! { <span class="badge badge--error">"error"</span> },
        IssueSeverity::Warning => view! { <span class="badge badge--warning">"warning"</span> },
        IssueSeverity::Info => view! { <span class="badge badge--info">"info"</span> },
    };

    view! {
        <div class="check-widget" style="padding: 20px; border: 1px solid #ccc; border-radius: 8px; max-width: 800px; margin: 20px auto; max-height: 80vh; overflow-y: auto;">
            <h2>"Tender quality check"</h2>

            <div style="margin: 20px 0;">
                <label style="display: block; margin-bottom: 8px; font-weight: bold;">
                    "Tender file:"
                </label>
                <input
                    type="text"
                    style="width: 100%; padding: 8px; border: 1px solid #ddd; border-radius: 4px;"
                    prop:value=move || file_name.get()
                    on:input=move |ev| set_file_name.set(event_target_value(&ev))
                    prop:disabled=move || is_running.get()
                />
            </div>

            <div class="form-row" style="margin: 20px 0;">
                <div class="form-group">
                    <label>"Ruleset"</label>
                    <select
                        on:change=move |ev| set_ruleset.set(event_target_value(&ev))
                        prop:disabled=move || is_running.get()
                    >
                        <option value="standard" selected>"Standard"</option>
                        <option value="strict">"Strict"</option>
                    </select>
                </div>
                <div class="form-group">
                    <label>"Outlier method"</label>
                    <select
                        on:change=move |ev| {
                            if let Some(method) = OutlierMethod::from_code(&event_target_value(&ev)) {
                                set_outlier_method.set(method);
                            }
                        }
                        prop:disabled=move || is_running.get()
                    >
                        {OutlierMethod::all().into_iter().map(|method| {
                            let selected = move || outlier_method.get() == method;
                            view! {
                                <option value={method.code()} prop:selected=selected>
                                    {method.display_name()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
            </div>

            {move || {
                let msg = error_msg.get();
                (!msg.is_empty()).then(|| view! { <div class="error">{msg}</div> })
            }}

            <div style="margin: 20px 0;">
                <button
                    class="button button--primary"
                    style="padding: 10px 20px; font-size: 16px;"
                    on:click=on_start_check
                    prop:disabled=move || is_running.get()
                >
                    {icon("check-circle")}
                    "Run check"
                </button>
            </div>

            {move || progress.get().map(|p| {
                let status_text = match p.status {
                    CheckStatus::Pending => "Pending",
                    CheckStatus::Running => "Running",
                    CheckStatus::Completed => "Completed, no issues",
                    CheckStatus::CompletedWithIssues => "Completed with issues",
                    CheckStatus::Failed => "Failed",
                };
                let current = p.current_group.clone().unwrap_or_default();
                let counts = format!(
                    "{} of {} groups · errors: {} · warnings: {}",
                    p.processed_groups,
                    p.total_groups,
                    p.error_count(),
                    p.warning_count()
                );
                view! {
                    <div class="check-progress" style="margin: 20px 0;">
                        <div style="display: flex; justify-content: space-between; margin-bottom: 6px;">
                            <strong>{status_text}</strong>
                            <span>{counts}</span>
                        </div>
                        <div class="progress-bar" style="height: 8px; background: #eee; border-radius: 4px;">
                            <div
                                class="progress-bar__fill"
                                style=move || format!(
                                    "height: 8px; border-radius: 4px; background: #007bff; width: {}%;",
                                    progress_percent()
                                )
                            ></div>
                        </div>
                        <div style="margin-top: 5px; font-size: 12px; color: #666;">{current}</div>
                    </div>
                }
            })}

            {move || progress.get().filter(|p| p.status.is_finished() && !p.issues.is_empty()).map(|p| {
                view! {
                    <div class="table-container" style="margin-top: 20px;">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Severity"</th>
                                    <th class="table__header-cell">"Rule"</th>
                                    <th class="table__header-cell">"Location"</th>
                                    <th class="table__header-cell">"Message"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {p.issues.into_iter().map(|issue: CheckIssue| {
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{severity_badge(issue.severity)}</td>
                                            <td class="table__cell">{issue.rule_code}</td>
                                            <td class="table__cell">{issue.location}</td>
                                            <td class="table__cell">{issue.message}</td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
            })}
        </div>
    }
}
