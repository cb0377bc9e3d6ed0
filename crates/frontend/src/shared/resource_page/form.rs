use super::error_banner;
use super::state::ResourceState;
use crate::shared::components::ui::{Badge, BadgeTone, Button, ButtonKind};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_FORM};
use contracts::domain::common::AggregateRoot;
use contracts::shared::form::parse_flag;
use contracts::shared::metadata::{FieldKind, FieldMetadata};
use contracts::shared::view_mode::ViewEvent;
use leptos::prelude::*;

/// Экран создания/редактирования записи
pub fn form_view<R: AggregateRoot>(state: ResourceState<R>) -> impl IntoView {
    let is_edit = state.form.with_untracked(|form| form.is_edit_mode());
    let title = if is_edit {
        format!("Edit {}", R::element_name().to_lowercase())
    } else {
        format!("New {}", R::element_name().to_lowercase())
    };
    let (badge_tone, badge_text) = if is_edit {
        (BadgeTone::Primary, "Editing")
    } else {
        (BadgeTone::Success, "New")
    };

    let fields = R::field_metadata()
        .iter()
        .filter(|meta| meta.visible_in_form())
        .map(|meta| field_input(state, meta))
        .collect_view();

    view! {
        <PageFrame page_id=page_id(&R::full_name(), PAGE_CAT_FORM) category=PAGE_CAT_FORM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    <Badge tone=badge_tone>{badge_text}</Badge>
                </div>
            </div>

            <div class="page__content">
                {error_banner(state.error)}

                <form
                    class="form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        state.submit();
                    }
                >
                    {fields}

                    <div class="form__actions">
                        <Button
                            submit=true
                            disabled=Signal::derive(move || state.saving.get())
                        >
                            {move || if state.saving.get() { "Saving..." } else { "Save" }}
                        </Button>
                        <Button
                            kind=ButtonKind::Secondary
                            on_click=Callback::new(move |_| state.dispatch(ViewEvent::Cancel))
                        >
                            "Cancel"
                        </Button>
                    </div>
                </form>
            </div>
        </PageFrame>
    }
}

fn field_input<R: AggregateRoot>(state: ResourceState<R>, meta: &'static FieldMetadata) -> AnyView {
    let name = meta.name;
    let input_id = format!("{}-{}", R::entity_name(), name);
    let placeholder = meta.ui.placeholder.unwrap_or_default();
    let value = move || state.form.with(|form| form.field_value(name));

    let control = match meta.kind {
        FieldKind::Boolean => view! {
            <input
                id=input_id.clone()
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || parse_flag(&value())
                on:change=move |_| state.toggle_flag(name)
            />
        }
        .into_any(),
        FieldKind::LongText => view! {
            <textarea
                id=input_id.clone()
                class="form__textarea"
                rows="3"
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| state.set_field(name, event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        kind => view! {
            <input
                id=input_id.clone()
                type=kind.input_type()
                class="form__input"
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| state.set_field(name, event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <div class="form__group">
            <label class="form__label" for=input_id>
                {meta.ui.label}
                {meta.validation.required.then_some(" *")}
            </label>
            {control}
        </div>
    }
    .into_any()
}
