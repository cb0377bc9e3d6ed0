pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod icons;
pub mod list_utils;
pub mod page_frame;
pub mod page_standard;
pub mod resource_page;
