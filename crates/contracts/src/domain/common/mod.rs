//! Common types and traits for all master-data records

pub mod aggregate_id;
pub mod aggregate_root;
pub mod entity_metadata;

// Re-exports
pub use aggregate_id::RecordId;
pub use aggregate_root::{default_active, AggregateRoot};
pub use entity_metadata::EntityMetadata;
