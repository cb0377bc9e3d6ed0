//! Page category constants for tab page standardization.
//!
//! Every page rendered inside a tab declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_board--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector and search for the aggregate index.

/// List of records: table with search and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Create / edit form for a single record.
pub const PAGE_CAT_FORM: &str = "form";

/// Read-only overview of a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Build a page id in the `{entity}--{category}` format.
pub fn page_id(entity: &str, category: &str) -> String {
    format!("{}--{}", entity, category)
}

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id() {
        let id = page_id("a008_log_mood", PAGE_CAT_FORM);
        assert_eq!(id, "a008_log_mood--form");
        assert!(is_valid_page_id(&id));
        assert!(!is_valid_page_id("a008_log_mood"));
        assert!(!is_valid_page_id("--list"));
    }
}
