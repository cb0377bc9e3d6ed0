//! TopHeader component - application top navigation bar.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>();

    let toggle_sidebar = move |_| {
        if let Some(ctx) = ctx {
            ctx.toggle_left();
        }
    };
    let is_sidebar_visible = move || ctx.map(|c| c.left_open.get()).unwrap_or(true);

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Master Data"</span>
            </div>
        </div>
    }
}
