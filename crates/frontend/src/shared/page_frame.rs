//! PageFrame: standard root wrapper for every page rendered inside a tab.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`: `"{entity}--{category}"`, e.g. `"a001_board--list"`
//!   - `data-page-category`: one of the PAGE_CAT_* constants

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets standard metadata on every tab page.
///
/// Adds the BEM modifier class based on category:
/// - `list`   → `page`
/// - `form`   → `page page--form`
/// - `detail` → `page page--detail`
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    #[prop(into)]
    page_id: String,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_FORM => "page page--form",
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };

    if !is_valid_page_id(&page_id) {
        log::warn!("PageFrame: malformed page id '{}'", page_id);
    }

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
