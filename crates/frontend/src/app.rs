use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::{TabBar, TabPage};
use crate::layout::Shell;
use crate::shared::data::DataContext;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Centralized modal management
    provide_context(ModalStackService::new());

    // Data seam: every screen reads through DataContext
    provide_context(DataContext::demo());

    view! {
        <MainLayout />
        <ModalHost />
    }
}

/// Main application layout with Sidebar and Tabs.
///
/// Initializes router integration so the active tab is reflected in the URL
/// (?active=...).
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Runs once when the component is created.
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <TabBar />
                    <div class="tab-content">
                        <For
                            each=move || tabs_store.opened.get()
                            key=|tab| tab.key.clone()
                            children=move |tab: TabData| {
                                view! { <TabPage tab=tab tabs_store=tabs_store /> }
                            }
                        />
                    </div>
                }
                .into_any()
            }
        />
    }
}
