//! Application Shell - корневой layout приложения (Shell + Sidebar + Tabs)

use crate::layout::center::Center;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;

/// Инициализирует router integration для синхронизации табов с URL (?active=...).
#[component]
pub fn AppShell() -> impl IntoView {
    if let Some(tabs_store) = use_context::<AppGlobalContext>() {
        tabs_store.init_router_integration();
    }

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Center /> }.into_any()
        />
    }
}
