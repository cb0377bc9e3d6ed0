use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let Some(ctx) = use_context::<AppGlobalContext>() else {
        log::error!("AppGlobalContext context not found");
        return children().into_any();
    };
    let is_open = move || ctx.left_open.get();

    view! {
        <div data-zone="left" class="left" class:hidden=move || !is_open()>
            {children()}
        </div>
    }
    .into_any()
}
