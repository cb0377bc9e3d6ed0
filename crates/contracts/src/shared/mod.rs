pub mod api;
pub mod form;
pub mod list;
pub mod metadata;
pub mod view_mode;
