//! Общие типы справочников: записи, формы, контроллер списка и REST-пути.
//! Не зависит от UI, поэтому вся логика тестируется обычным `cargo test`.

pub mod domain;
pub mod shared;
