use super::error_banner;
use super::state::ResourceState;
use crate::shared::components::ui::{Button, ButtonKind, StatusBadge};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DETAIL};
use contracts::domain::common::{AggregateRoot, RecordId};
use contracts::shared::form::FormSchema;
use contracts::shared::metadata::FieldKind;
use contracts::shared::view_mode::ViewEvent;
use leptos::prelude::*;

/// Read-only карточка записи
pub fn overview_view<R: AggregateRoot>(state: ResourceState<R>, id: RecordId) -> impl IntoView {
    let back = Callback::new(move |_| state.dispatch(ViewEvent::Back));

    let details = move || {
        let Some(record) = state.list.with(|list| list.find(&id).cloned()) else {
            return view! {
                <div class="alert alert--warning">
                    {format!("{} {} not found", R::element_name(), id)}
                </div>
            }
            .into_any();
        };
        details_view(state, record)
    };

    view! {
        <PageFrame page_id=page_id(&R::full_name(), PAGE_CAT_DETAIL) category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <Button kind=ButtonKind::Ghost title="Back" on_click=back>
                        {icon("arrow-left")}
                    </Button>
                    <h1 class="page__title">{R::element_name()}</h1>
                </div>
            </div>
            <div class="page__content">
                {error_banner(state.error)}
                {details}
            </div>
        </PageFrame>
    }
}

fn details_view<R: AggregateRoot>(state: ResourceState<R>, record: R) -> AnyView {
    let dto = record.to_dto();
    let rows = R::field_metadata()
        .iter()
        .filter(|meta| meta.kind != FieldKind::Boolean)
        .map(|meta| {
            let value = dto
                .get_field(meta.name)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "-".to_string());
            view! {
                <div class="details__row">
                    <dt class="details__label">{meta.ui.label}</dt>
                    <dd class="details__value">{value}</dd>
                </div>
            }
        })
        .collect_view();

    let active = record.status();
    let created = record.metadata().format_created();
    let updated = record.metadata().format_updated();
    let (edit_id, toggle_id) = (record.id().clone(), record.id().clone());

    view! {
        <div class="details">
            <h2 class="details__title">{record.display_name().to_string()}</h2>
            <dl class="details__list">
                {rows}
                <div class="details__row">
                    <dt class="details__label">"Status"</dt>
                    <dd class="details__value"><StatusBadge active=active /></dd>
                </div>
                <div class="details__row details__row--meta">
                    <dt class="details__label">"Created"</dt>
                    <dd class="details__value">{created}</dd>
                </div>
                <div class="details__row details__row--meta">
                    <dt class="details__label">"Updated"</dt>
                    <dd class="details__value">{updated}</dd>
                </div>
            </dl>
            <div class="details__actions">
                <Button on_click=Callback::new(move |_| state.dispatch(ViewEvent::Edit(edit_id.clone())))>
                    {icon("edit")}
                    " Edit"
                </Button>
                <Button
                    kind=ButtonKind::Secondary
                    on_click=Callback::new(move |_| state.toggle_status(toggle_id.clone()))
                >
                    {icon("power")}
                    {if active { " Deactivate" } else { " Activate" }}
                </Button>
            </div>
        </div>
    }
    .into_any()
}
