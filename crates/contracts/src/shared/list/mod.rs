//! Универсальная логика списков: поиск, сортировка, пагинация

mod controller;
mod page_window;
mod traits;

pub use controller::{PageNav, PaginatedListController, SortState, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use page_window::{page_window, PageButton, MAX_VISIBLE_PAGES};
pub use traits::{Identified, Searchable, Sortable};
