//! Page-button layout with ellipsis compression.

/// Maximum number of page buttons shown without an ellipsis
pub const MAX_VISIBLE_PAGES: usize = 5;

/// One control in the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Page { number: usize, is_active: bool },
    Ellipsis,
}

impl PageButton {
    fn page(number: usize, current: usize) -> Self {
        Self::Page {
            number,
            is_active: number == current,
        }
    }
}

/// Buttons for `current` (1-based) out of `total` pages.
///
/// - `total <= 5`: every page
/// - near the start: `1 2 3 4 … last`
/// - near the end: `1 … last-3 last-2 last-1 last`
/// - otherwise: `1 … current-1 current current+1 … last`
pub fn page_window(current: usize, total: usize) -> Vec<PageButton> {
    if total == 0 {
        return Vec::new();
    }

    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(|n| PageButton::page(n, current)).collect();
    }

    let edge = MAX_VISIBLE_PAGES - 1;
    let mut buttons = Vec::with_capacity(MAX_VISIBLE_PAGES + 2);

    if current <= 3 {
        buttons.extend((1..=edge).map(|n| PageButton::page(n, current)));
        buttons.push(PageButton::Ellipsis);
        buttons.push(PageButton::page(total, current));
    } else if current >= total - 2 {
        buttons.push(PageButton::page(1, current));
        buttons.push(PageButton::Ellipsis);
        buttons.extend((total + 1 - edge..=total).map(|n| PageButton::page(n, current)));
    } else {
        buttons.push(PageButton::page(1, current));
        buttons.push(PageButton::Ellipsis);
        buttons.extend((current - 1..=current + 1).map(|n| PageButton::page(n, current)));
        buttons.push(PageButton::Ellipsis);
        buttons.push(PageButton::page(total, current));
    }

    buttons
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(buttons: &[PageButton]) -> String {
        buttons
            .iter()
            .map(|b| match b {
                PageButton::Page { number, is_active: true } => format!("[{}]", number),
                PageButton::Page { number, .. } => number.to_string(),
                PageButton::Ellipsis => "…".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_small_total_lists_every_page() {
        assert_eq!(render(&page_window(2, 3)), "1 [2] 3");
        assert_eq!(render(&page_window(5, 5)), "1 2 3 4 [5]");
    }

    #[test]
    fn test_middle_window() {
        assert_eq!(render(&page_window(5, 10)), "1 … 4 [5] 6 … 10");
    }

    #[test]
    fn test_near_start_and_end() {
        assert_eq!(render(&page_window(1, 10)), "[1] 2 3 4 … 10");
        assert_eq!(render(&page_window(3, 10)), "1 2 [3] 4 … 10");
        assert_eq!(render(&page_window(8, 10)), "1 … 7 [8] 9 10");
        assert_eq!(render(&page_window(10, 10)), "1 … 7 8 9 [10]");
        assert_eq!(render(&page_window(4, 6)), "1 … 3 [4] 5 6");
    }

    #[test]
    fn test_empty_and_out_of_range() {
        assert!(page_window(1, 0).is_empty());
        // Page past the end keeps the layout, nothing is active
        let buttons = page_window(12, 10);
        assert_eq!(render(&buttons), "1 … 7 8 9 10");
        assert!(!buttons
            .iter()
            .any(|b| matches!(b, PageButton::Page { is_active: true, .. })));
    }

    #[test]
    fn test_deterministic() {
        for total in 0..15 {
            for current in 1..=total.max(1) {
                assert_eq!(page_window(current, total), page_window(current, total));
            }
        }
    }
}
