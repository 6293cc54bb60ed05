use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::{AppGlobalContext, ResourceStores};
use crate::layout::left::Sidebar;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::Shell;
use crate::shared::gateway::RemoteGateway;
use crate::shared::notifications::{NotificationHost, NotificationService};
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
        <NotificationHost />
    }
}

#[component]
pub fn App() -> impl IntoView {
    let tabs_store = AppGlobalContext::new();
    let notifications = NotificationService::new();
    let gateway = RemoteGateway::from_env();
    log::info!("API base: {}", gateway.endpoint_url(""));

    provide_context(tabs_store);
    provide_context(notifications);
    provide_context(ResourceStores::new(gateway.clone(), notifications));
    provide_context(gateway);

    // the product list is the landing page
    tabs_store.open_tab("a001_product", tab_label_for_key("a001_product"));

    view! { <MainLayout /> }
}
