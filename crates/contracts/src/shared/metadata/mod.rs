//! Field metadata for master-data resources
//!
//! Every resource describes its editable fields once, as a static slice of
//! [`FieldMetadata`]. The same slice drives list columns, form inputs, the
//! overview screen and client-side validation.
//!
//! ```rust,ignore
//! use contracts::shared::form::FormSchema;
//!
//! for field in BoardDto::field_metadata() {
//!     if field.validation.required {
//!         println!("Required: {}", field.ui.label);
//!     }
//! }
//! ```

mod field_type;
mod types;
mod validation;

pub use field_type::FieldKind;
pub use types::{FieldMetadata, FieldUiMetadata};
pub use validation::{ValidationError, ValidationRules};
