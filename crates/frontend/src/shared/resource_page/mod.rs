//! Страница справочника: список, форма и обзор одной коллекции REST API.
//!
//! Все десять справочников рендерятся одним и тем же кодом, параметризованным
//! типом записи: `resource_page::<Board>()`.

mod form;
mod list;
mod overview;
mod state;

pub use state::ResourceState;

use crate::shared::icons::icon;
use contracts::domain::common::AggregateRoot;
use contracts::shared::view_mode::ViewMode;
use leptos::prelude::*;

pub fn resource_page<R: AggregateRoot>() -> impl IntoView {
    let state = ResourceState::<R>::new();
    state.load();

    move || match state.mode.get() {
        ViewMode::List => list::list_view(state).into_any(),
        ViewMode::Create | ViewMode::Edit(_) => form::form_view(state).into_any(),
        ViewMode::Overview(id) => overview::overview_view(state, id).into_any(),
    }
}

/// Закрываемое сообщение об ошибке над содержимым страницы
fn error_banner(error: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|message| {
            view! {
                <div class="alert alert--error">
                    <span class="alert__text">{message}</span>
                    <button class="alert__close" title="Dismiss" on:click=move |_| error.set(None)>
                        {icon("x")}
                    </button>
                </div>
            }
        })
    }
}
