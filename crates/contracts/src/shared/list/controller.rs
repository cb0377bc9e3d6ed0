use super::page_window::{page_window, PageButton};
use super::traits::{Identified, Sortable};
use crate::domain::common::RecordId;

/// Page sizes offered by the page-size selector
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Активная сортировка списка
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub ascending: bool,
}

/// Команда навигации по страницам из панели пагинации
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Prev,
    Next,
    Last,
    /// Кнопка с номером страницы
    To(usize),
}

/// Client-side list state shared by every master-data screen.
///
/// Holds the full collection as returned by the server and derives the
/// filtered, sorted and paginated view from the search term, page size and
/// current page. Pages are 1-based.
///
/// The current page is never re-clamped when the filtered set shrinks; the
/// visible slice is simply empty in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedListController<T> {
    items: Vec<T>,
    search_term: String,
    page_size: usize,
    current_page: usize,
    sort: Option<SortState>,
}

impl<T> Default for PaginatedListController<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_term: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
            sort: None,
        }
    }
}

impl<T: Identified + Sortable> PaginatedListController<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn with_page_size(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            page_size,
            ..Self::default()
        }
    }

    // ------------------------------------------------------------------
    // Collection
    // ------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace the collection wholesale (after a fetch). Page and filter are kept.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn find(&self, id: &RecordId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Replace the record with the same id by the server's version.
    /// Returns `false` when no such record is loaded.
    pub fn replace_record(&mut self, record: T) -> bool {
        match self.items.iter_mut().find(|item| item.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Replace by id, or append when the record is new
    pub fn upsert(&mut self, record: T) {
        if let Some(slot) = self.items.iter_mut().find(|item| item.id() == record.id()) {
            *slot = record;
        } else {
            self.items.push(record);
        }
    }

    pub fn remove(&mut self, id: &RecordId) -> Option<T> {
        let pos = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(pos))
    }

    // ------------------------------------------------------------------
    // Search / sort
    // ------------------------------------------------------------------

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Same field flips direction, another field sorts ascending
    pub fn toggle_sort(&mut self, field: &str) {
        if let Some(sort) = self.sort.as_mut().filter(|s| s.field == field) {
            sort.ascending = !sort.ascending;
            return;
        }
        self.sort = Some(SortState {
            field: field.to_string(),
            ascending: true,
        });
    }

    /// Records matching the search term, in sort order (server order when unsorted)
    pub fn filtered(&self) -> Vec<&T> {
        let mut rows: Vec<&T> = self
            .items
            .iter()
            .filter(|item| item.matches_filter(&self.search_term))
            .collect();

        if let Some(sort) = &self.sort {
            rows.sort_by(|a, b| {
                let cmp = a.compare_by_field(b, &sort.field);
                if sort.ascending {
                    cmp
                } else {
                    cmp.reverse()
                }
            });
        }

        rows
    }

    pub fn filtered_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.matches_filter(&self.search_term))
            .count()
    }

    // ------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Any value is accepted; the selector only offers [`PAGE_SIZE_OPTIONS`]
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size;
        self.current_page = 1;
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Jump to a page as-is, without clamping
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn prev_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    pub fn next_page(&mut self) {
        self.current_page = (self.current_page + 1).min(self.page_count().max(1));
    }

    pub fn first_page(&mut self) {
        self.current_page = 1;
    }

    pub fn last_page(&mut self) {
        self.current_page = self.page_count().max(1);
    }

    pub fn navigate(&mut self, nav: PageNav) {
        match nav {
            PageNav::First => self.first_page(),
            PageNav::Prev => self.prev_page(),
            PageNav::Next => self.next_page(),
            PageNav::Last => self.last_page(),
            PageNav::To(page) => self.set_page(page),
        }
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.page_count()
    }

    pub fn page_count(&self) -> usize {
        self.filtered_count().div_ceil(self.slice_size())
    }

    /// Records of the current page
    pub fn visible_records(&self) -> Vec<&T> {
        let size = self.slice_size();
        self.filtered()
            .into_iter()
            .skip(self.slice_start())
            .take(size)
            .collect()
    }

    /// 1-based inclusive range of the visible records within the filtered set
    pub fn visible_range(&self) -> Option<(usize, usize)> {
        let total = self.filtered_count();
        let start = self.slice_start();
        if start >= total {
            return None;
        }
        let end = (start + self.slice_size()).min(total);
        Some((start + 1, end))
    }

    pub fn pagination_window(&self) -> Vec<PageButton> {
        page_window(self.current_page, self.page_count())
    }

    // Zero page size would divide by zero; it behaves as one record per page.
    fn slice_size(&self) -> usize {
        self.page_size.max(1)
    }

    // Page 0 slices like page 1.
    fn slice_start(&self) -> usize {
        self.current_page.saturating_sub(1) * self.slice_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::Searchable;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: RecordId,
        name: String,
        email: String,
        status: bool,
    }

    impl Row {
        fn new(id: i64, name: &str) -> Self {
            Self {
                id: RecordId::Number(id),
                name: name.to_string(),
                email: format!("{}@example.org", name.to_lowercase()),
                status: true,
            }
        }
    }

    impl Identified for Row {
        fn id(&self) -> &RecordId {
            &self.id
        }
    }

    impl Searchable for Row {
        const SEARCH_FIELDS: &'static [&'static str] = &["name", "email"];

        fn get_field_value(&self, field: &str) -> Option<String> {
            match field {
                "name" => Some(self.name.clone()),
                "email" => Some(self.email.clone()),
                _ => None,
            }
        }
    }

    impl Sortable for Row {}

    fn alphabet(count: usize) -> Vec<Row> {
        (0..count)
            .map(|i| {
                let letter = char::from(b'A' + i as u8).to_string();
                Row::new(i as i64 + 1, &letter)
            })
            .collect()
    }

    fn names(rows: &[&Row]) -> Vec<String> {
        rows.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_twelve_records_two_pages() {
        let mut list = PaginatedListController::new(alphabet(12));
        assert_eq!(list.page_size(), 10);
        assert_eq!(list.page_count(), 2);

        let first = list.visible_records();
        assert_eq!(first.len(), 10);
        assert_eq!(first[0].name, "A");
        assert_eq!(first[9].name, "J");
        assert_eq!(list.visible_range(), Some((1, 10)));

        list.set_page(2);
        assert_eq!(names(&list.visible_records()), vec!["K", "L"]);
        assert_eq!(list.visible_range(), Some((11, 12)));
    }

    #[test]
    fn test_no_match_renders_nothing() {
        let mut list = PaginatedListController::new(alphabet(12));
        list.set_search_term("xyz");
        assert!(list.visible_records().is_empty());
        assert_eq!(list.page_count(), 0);
        assert!(list.pagination_window().is_empty());
        assert_eq!(list.visible_range(), None);
    }

    #[test]
    fn test_search_is_case_insensitive_and_resets_page() {
        let mut list = PaginatedListController::new(vec![
            Row::new(1, "Central Board"),
            Row::new(2, "State Board"),
            Row::new(3, "Cambridge"),
        ]);
        list.set_page(3);
        list.set_search_term("BOARD");
        assert_eq!(list.current_page(), 1);
        assert_eq!(names(&list.visible_records()), vec!["Central Board", "State Board"]);

        // Matches on any search field
        list.set_search_term("cambridge@");
        assert_eq!(names(&list.visible_records()), vec!["Cambridge"]);
    }

    #[test]
    fn test_same_search_term_twice_is_idempotent() {
        let mut once = PaginatedListController::new(alphabet(20));
        once.set_search_term("example");

        let mut twice = once.clone();
        twice.set_search_term("example");

        assert_eq!(once.visible_records(), twice.visible_records());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_visible_len_never_exceeds_page_size() {
        for size in PAGE_SIZE_OPTIONS {
            let mut list = PaginatedListController::with_page_size(alphabet(26), size);
            for page in 1..=5 {
                list.set_page(page);
                assert!(list.visible_records().len() <= size);
            }
        }
    }

    #[test]
    fn test_page_count_monotonic_in_filtered_size() {
        for size in PAGE_SIZE_OPTIONS {
            let mut previous = 0;
            for count in 0..=26 {
                let list = PaginatedListController::with_page_size(alphabet(count), size);
                let pages = list.page_count();
                assert!(pages >= previous);
                previous = pages;
            }
        }
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut list = PaginatedListController::new(alphabet(26));
        list.set_page(3);
        list.set_page_size(25);
        assert_eq!(list.current_page(), 1);
        assert_eq!(list.page_count(), 2);

        // Out-of-set sizes are taken as-is
        list.set_page_size(7);
        assert_eq!(list.page_size(), 7);
        assert_eq!(list.page_count(), 4);

        list.set_page_size(0);
        assert_eq!(list.page_count(), 26);
        assert_eq!(list.visible_records().len(), 1);
    }

    #[test]
    fn test_page_beyond_filtered_range_is_empty() {
        let mut list = PaginatedListController::new(alphabet(26));
        list.set_page(3);
        assert_eq!(list.visible_records().len(), 6);

        // Shrinking the collection keeps the page; the slice is empty
        list.set_items(alphabet(5));
        assert_eq!(list.current_page(), 3);
        assert!(list.visible_records().is_empty());
        assert_eq!(list.page_count(), 1);
    }

    #[test]
    fn test_prev_next_clamp() {
        let mut list = PaginatedListController::new(alphabet(25));
        list.prev_page();
        assert_eq!(list.current_page(), 1);
        assert!(!list.has_prev());

        list.next_page();
        list.next_page();
        list.next_page();
        assert_eq!(list.current_page(), 3);
        assert!(!list.has_next());

        list.first_page();
        assert_eq!(list.current_page(), 1);
        list.last_page();
        assert_eq!(list.current_page(), 3);

        let mut empty = PaginatedListController::<Row>::new(Vec::new());
        empty.next_page();
        assert_eq!(empty.current_page(), 1);
    }

    #[test]
    fn test_navigate_commands() {
        let mut list = PaginatedListController::new(alphabet(25));
        list.navigate(PageNav::Last);
        assert_eq!(list.current_page(), 3);
        assert!(list.has_prev());
        assert!(!list.has_next());

        list.navigate(PageNav::Next);
        assert_eq!(list.current_page(), 3);
        list.navigate(PageNav::Prev);
        assert_eq!(list.current_page(), 2);
        assert_eq!(names(&list.visible_records())[0], "K");

        list.navigate(PageNav::To(1));
        assert_eq!(list.current_page(), 1);
        list.navigate(PageNav::Prev);
        assert_eq!(list.current_page(), 1);
        assert!(!list.has_prev());

        list.navigate(PageNav::First);
        list.set_search_term("zzz");
        list.navigate(PageNav::Last);
        assert_eq!(list.current_page(), 1);
        assert!(!list.has_next());
    }

    #[test]
    fn test_window_follows_current_page() {
        let mut list = PaginatedListController::new(alphabet(26));
        list.set_page_size(2);
        assert_eq!(list.page_count(), 13);
        list.set_page(5);
        let window = list.pagination_window();
        let numbers: Vec<Option<usize>> = window
            .iter()
            .map(|b| match b {
                PageButton::Page { number, .. } => Some(*number),
                PageButton::Ellipsis => None,
            })
            .collect();
        assert_eq!(
            numbers,
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(13)]
        );
    }

    #[test]
    fn test_replace_record_by_id() {
        let mut list = PaginatedListController::new(alphabet(6));
        let mut server = Row::new(5, "E");
        server.status = false;
        assert!(list.replace_record(server.clone()));

        assert_eq!(list.find(&RecordId::Number(5)), Some(&server));
        assert_eq!(list.find(&RecordId::Number(4)), Some(&Row::new(4, "D")));
        assert_eq!(names(&list.visible_records()), vec!["A", "B", "C", "D", "E", "F"]);

        assert!(!list.replace_record(Row::new(99, "Z")));
        assert_eq!(list.len(), 6);
    }

    #[test]
    fn test_upsert_and_remove() {
        let mut list = PaginatedListController::new(alphabet(2));
        list.upsert(Row::new(3, "C"));
        assert_eq!(list.len(), 3);
        list.upsert(Row::new(1, "Renamed"));
        assert_eq!(list.len(), 3);
        assert_eq!(list.find(&RecordId::Number(1)).unwrap().name, "Renamed");

        let removed = list.remove(&RecordId::Number(2)).unwrap();
        assert_eq!(removed.name, "B");
        assert!(list.remove(&RecordId::Number(2)).is_none());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_sort_toggles_direction() {
        let mut list = PaginatedListController::new(vec![
            Row::new(1, "beta"),
            Row::new(2, "Alpha"),
            Row::new(3, "gamma"),
        ]);
        assert_eq!(names(&list.visible_records()), vec!["beta", "Alpha", "gamma"]);

        list.toggle_sort("name");
        assert_eq!(names(&list.visible_records()), vec!["Alpha", "beta", "gamma"]);

        list.toggle_sort("name");
        assert_eq!(names(&list.visible_records()), vec!["gamma", "beta", "Alpha"]);
        assert!(!list.sort().unwrap().ascending);

        list.toggle_sort("email");
        assert!(list.sort().unwrap().ascending);
    }
}
