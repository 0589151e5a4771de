use leptos::prelude::*;

/// Totals row for tables.
///
/// Renders a `<tr>` with the totals-row styling; content is passed as
/// `<td>` children.
#[component]
pub fn TableTotalsRow(
    /// Row content (td elements)
    children: Children,
    /// Extra CSS classes
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let row_class = if class.is_empty() {
        "table__totals-row".to_string()
    } else {
        format!("table__totals-row {}", class)
    };

    view! {
        <tr class={row_class}>
            {children()}
        </tr>
    }
}
