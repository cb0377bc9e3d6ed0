use crate::shared::icons::icon;
use contracts::shared::list::{PageButton, PageNav, PAGE_SIZE_OPTIONS};
use leptos::prelude::*;

/// "Showing X–Y of Z" for the current page
pub fn range_summary(range: Option<(usize, usize)>, total: usize) -> String {
    match range {
        Some((from, to)) => format!("Showing {}–{} of {}", from, to, total),
        None if total == 0 => "No records".to_string(),
        None => format!("Showing 0 of {}", total),
    }
}

/// PaginationControls component - reusable pagination controls
///
/// Renders buttons only; the target page is computed by the list controller
/// from the [`PageNav`] command. Nothing is rendered while there are no pages.
#[component]
pub fn PaginationControls(
    /// Page buttons with ellipsis compression
    #[prop(into)]
    buttons: Signal<Vec<PageButton>>,

    /// Whether First/Prev are enabled
    #[prop(into)]
    has_prev: Signal<bool>,

    /// Whether Next/Last are enabled
    #[prop(into)]
    has_next: Signal<bool>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback for every navigation button
    on_navigate: Callback<PageNav>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || buttons.with(|b| !b.is_empty())>
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_navigate.run(PageNav::First)
                    disabled=move || !has_prev.get()
                    title="First page"
                >
                    {icon("chevrons-left")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| on_navigate.run(PageNav::Prev)
                    disabled=move || !has_prev.get()
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    buttons
                        .get()
                        .into_iter()
                        .map(|button| match button {
                            PageButton::Page { number, is_active } => view! {
                                <button
                                    class="pagination-btn pagination-btn--page"
                                    class:pagination-btn--active=is_active
                                    on:click=move |_| on_navigate.run(PageNav::To(number))
                                >
                                    {number}
                                </button>
                            }
                            .into_any(),
                            PageButton::Ellipsis => {
                                view! { <span class="pagination-ellipsis">"…"</span> }.into_any()
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| on_navigate.run(PageNav::Next)
                    disabled=move || !has_next.get()
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| on_navigate.run(PageNav::Last)
                    disabled=move || !has_next.get()
                    title="Last page"
                >
                    {icon("chevrons-right")}
                </button>
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse() {
                            on_page_size_change.run(size);
                        }
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {PAGE_SIZE_OPTIONS
                        .into_iter()
                        .map(|size| {
                            view! {
                                <option value=size.to_string() selected=move || page_size.get() == size>
                                    {format!("{} / page", size)}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_summary() {
        assert_eq!(range_summary(Some((11, 12)), 12), "Showing 11–12 of 12");
        assert_eq!(range_summary(None, 0), "No records");
        assert_eq!(range_summary(None, 7), "Showing 0 of 7");
    }
}
