//! TopHeader component - application top navigation bar.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Main application top bar.
///
/// Uses AppGlobalContext for sidebar visibility control.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Construction Cost Index"</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
            </div>
        </div>
    }
}
