//! Контракт REST API справочников: адреса и ошибки

mod endpoints;
mod error;

pub use endpoints::ResourceEndpoints;
pub use error::{ApiError, MutationKind, PageError};
