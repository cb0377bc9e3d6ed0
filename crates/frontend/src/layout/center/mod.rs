//! Центральная зона: полоса табов и страницы открытых справочников

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::TabPage;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Center() -> impl IntoView {
    let Some(tabs_store) = use_context::<AppGlobalContext>() else {
        log::error!("AppGlobalContext context not found");
        return ().into_any();
    };

    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <div class="tabs__bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| view! { <TabHeader tab=tab tabs_store=tabs_store /> }
                />
            </div>

            <Show
                when=move || tabs_store.opened.with(|tabs| !tabs.is_empty())
                fallback=|| view! {
                    <div class="tabs__empty">"Select a directory in the menu on the left"</div>
                }
            >
                <div class="tabs__content">
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                    />
                </div>
            </Show>
        </div>
    }
    .into_any()
}

#[component]
fn TabHeader(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key_for_active = tab.key.clone();
    let is_active =
        Memo::new(move |_| tabs_store.active.with(|a| a.as_deref() == Some(key_for_active.as_str())));

    let key_for_click = tab.key.clone();
    let on_click = move |_| tabs_store.activate_tab(&key_for_click);

    let key_for_close = tab.key.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key_for_close);
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click>
            <span>{tab.title}</span>
            <button class="tab-close" title="Close" on:click=on_close>{icon("x")}</button>
        </div>
    }
}
