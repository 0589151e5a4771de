//! List utilities shared by the table screens (sorting, search input).

use leptos::prelude::*;
use std::cmp::Ordering;

/// Trait for row types that support column sorting.
pub trait Sortable {
    /// Compares two rows by the given field name.
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sorts a list in place by the given field.
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Sort indicator for a column header.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class for the sort indicator span.
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Text filter input with a clear button.
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Called on every change
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Filter...".to_string()
    } else {
        placeholder
    };

    let clear_filter = move |_| {
        on_change.run(String::new());
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder={placeholder}
                style="width: 220px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                prop:value=move || value.get()
                on:input=move |ev| {
                    on_change.run(event_target_value(&ev));
                }
            />
            {move || if !value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=clear_filter
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
