//! TabPage component - wrapper that shows or hides a tab's content.

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

/// Wrapper component for a single tab.
///
/// Renders the content via `registry::render_tab_content` and controls
/// visibility with the `hidden` CSS modifier depending on the active tab.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let tab_key_for_active_check = tab_key.clone();

    // Reactive: tracks the currently active tab
    let is_active = move || {
        let current_active = tabs_store.active.get();
        current_active.as_ref() == Some(&tab_key_for_active_check)
    };

    let tab_key_for_content = tab_key.clone();
    let content = render_tab_content(&tab_key_for_content, tabs_store);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}
