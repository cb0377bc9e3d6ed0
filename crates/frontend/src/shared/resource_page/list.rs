use super::state::ResourceState;
use super::error_banner;
use crate::shared::components::pagination_controls::{range_summary, PaginationControls};
use crate::shared::components::ui::{Button, ButtonKind, StatusBadge};
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use contracts::domain::common::AggregateRoot;
use contracts::shared::list::{Identified, PageNav, Searchable};
use contracts::shared::view_mode::ViewEvent;
use leptos::prelude::*;

pub fn list_view<R: AggregateRoot>(state: ResourceState<R>) -> impl IntoView {
    let list = state.list;

    let header_cells = R::list_columns()
        .into_iter()
        .map(|column| {
            let field = column.name;
            view! {
                <th class="table__header-cell table__header-cell--sortable"
                    on:click=move |_| list.update(|l| l.toggle_sort(field))
                >
                    {column.ui.label}
                    <span class="table__sort-indicator">
                        {move || list.with(|l| get_sort_indicator(l.sort(), field))}
                    </span>
                </th>
            }
        })
        .collect_view();

    let rows = move || {
        let term = list.with(|l| l.search_term().to_string());
        let records: Vec<R> = list.with(|l| l.visible_records().into_iter().cloned().collect());

        if records.is_empty() {
            let colspan = R::list_columns().len() + 2;
            let text = if state.loading.get() {
                "Loading..."
            } else if term.is_empty() {
                "No records yet"
            } else {
                "Nothing matches the search"
            };
            return view! {
                <tr>
                    <td class="table__cell table__cell--empty" colspan=colspan>{text}</td>
                </tr>
            }
            .into_any();
        }

        records
            .into_iter()
            .map(|record| row_view(state, record, &term))
            .collect_view()
            .into_any()
    };

    view! {
        <PageFrame page_id=page_id(&R::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{R::list_name()}</h1>
                    <span class="page__counter">
                        {move || list.with(|l| l.len())}
                    </span>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=Signal::derive(move || list.with(|l| l.search_term().to_string()))
                        on_change=Callback::new(move |term: String| list.update(|l| l.set_search_term(term)))
                        placeholder=format!("Search {}...", R::list_name().to_lowercase())
                    />
                    <Button
                        kind=ButtonKind::Secondary
                        title="Reload"
                        disabled=Signal::derive(move || state.loading.get())
                        on_click=Callback::new(move |_| state.load())
                    >
                        {icon("refresh")}
                    </Button>
                    <Button on_click=Callback::new(move |_| state.dispatch(ViewEvent::Create))>
                        {icon("plus")}
                        {format!(" New {}", R::element_name().to_lowercase())}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {error_banner(state.error)}

                <div class="table-wrapper">
                    <table class="table">
                        <thead class="table__head">
                            <tr>
                                {header_cells}
                                <th class="table__header-cell">"Status"</th>
                                <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>

                <div class="page__footer">
                    <span class="page__summary">
                        {move || list.with(|l| range_summary(l.visible_range(), l.filtered_count()))}
                    </span>
                    <PaginationControls
                        buttons=Signal::derive(move || list.with(|l| l.pagination_window()))
                        has_prev=Signal::derive(move || list.with(|l| l.has_prev()))
                        has_next=Signal::derive(move || list.with(|l| l.has_next()))
                        page_size=Signal::derive(move || list.with(|l| l.page_size()))
                        on_navigate=Callback::new(move |nav: PageNav| list.update(|l| l.navigate(nav)))
                        on_page_size_change=Callback::new(move |size: usize| list.update(|l| l.set_page_size(size)))
                    />
                </div>
            </div>
        </PageFrame>
    }
}

fn row_view<R: AggregateRoot>(state: ResourceState<R>, record: R, term: &str) -> AnyView {
    let cells = R::list_columns()
        .into_iter()
        .map(|column| {
            let value = record.get_field_value(column.name).unwrap_or_default();
            let content = if R::is_search_field(column.name) {
                highlight_matches(&value, term)
            } else {
                value.into_any()
            };
            view! { <td class="table__cell">{content}</td> }
        })
        .collect_view();

    let active = record.status();
    let toggle_title = if active { "Deactivate" } else { "Activate" };
    let id = record.id().clone();
    let (view_id, edit_id, toggle_id, delete_id) = (id.clone(), id.clone(), id.clone(), id);

    view! {
        <tr class="table__row" class:table__row--inactive=move || !active>
            {cells}
            <td class="table__cell">
                <StatusBadge active=active />
            </td>
            <td class="table__cell table__cell--actions">
                <button class="icon-button" title="View"
                    on:click=move |_| state.dispatch(ViewEvent::View(view_id.clone()))
                >
                    {icon("eye")}
                </button>
                <button class="icon-button" title="Edit"
                    on:click=move |_| state.dispatch(ViewEvent::Edit(edit_id.clone()))
                >
                    {icon("edit")}
                </button>
                <button class="icon-button"
                    title=toggle_title
                    on:click=move |_| state.toggle_status(toggle_id.clone())
                >
                    {icon("power")}
                </button>
                <button class="icon-button icon-button--danger" title="Delete"
                    on:click=move |_| state.delete(delete_id.clone())
                >
                    {icon("trash")}
                </button>
            </td>
        </tr>
    }
    .into_any()
}
