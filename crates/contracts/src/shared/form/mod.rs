//! Typed form drafts for create/edit screens.
//!
//! A resource's form is a plain struct (its DTO) implementing [`FormSchema`].
//! Inputs address fields by their wire name; [`FormState`] keeps the draft and
//! remembers which record is being edited.

use crate::domain::common::{AggregateRoot, RecordId};
use crate::shared::metadata::{FieldKind, FieldMetadata, ValidationError};
use serde::Serialize;

/// Typed form of a resource
pub trait FormSchema: Clone + Default + PartialEq {
    /// Body sent to the API on create/update
    type Payload: Serialize + 'static;

    /// Static description of all form fields, in display order
    fn field_metadata() -> &'static [FieldMetadata];

    /// Current value of a field as input text (`"true"`/`"false"` for flags)
    fn get_field(&self, field: &str) -> Option<String>;

    /// Apply an input edit. Returns `false` for unknown fields.
    fn set_field(&mut self, field: &str, value: String) -> bool;

    /// Build the request body from an already validated draft
    fn payload(&self) -> Result<Self::Payload, ValidationError>;

    /// Cross-field or resource-specific checks, run after the per-field rules
    fn validate_rules(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    fn validate(&self) -> Result<(), ValidationError> {
        for meta in Self::field_metadata().iter().filter(|f| f.visible_in_form()) {
            let value = self.get_field(meta.name).unwrap_or_default();
            meta.validate(&value)?;
        }
        self.validate_rules()
    }

    /// Validate and produce the request body
    fn submit(&self) -> Result<Self::Payload, ValidationError> {
        self.validate()?;
        self.payload()
    }

    fn field(name: &str) -> Option<&'static FieldMetadata> {
        Self::field_metadata().iter().find(|f| f.name == name)
    }
}

/// Checkbox/select text to flag
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "on" | "1" | "yes"
    )
}

/// Flag to input text
pub fn flag_text(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

/// Empty input text means "not set"
pub fn optional_text(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Draft of the create/edit screen
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState<D> {
    draft: D,
    editing: Option<RecordId>,
}

impl<D: FormSchema> FormState<D> {
    /// Empty draft for the create screen
    pub fn new() -> Self {
        Self {
            draft: D::default(),
            editing: None,
        }
    }

    /// Draft populated from an existing record for the edit screen
    pub fn for_edit<R>(record: &R) -> Self
    where
        R: AggregateRoot<Dto = D>,
    {
        Self {
            draft: record.to_dto(),
            editing: Some(record.id().clone()),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.is_some()
    }

    pub fn editing_id(&self) -> Option<&RecordId> {
        self.editing.as_ref()
    }

    pub fn field_value(&self, field: &str) -> String {
        self.draft.get_field(field).unwrap_or_default()
    }

    pub fn set_field(&mut self, field: &str, value: String) -> Result<(), ValidationError> {
        if self.draft.set_field(field, value) {
            Ok(())
        } else {
            Err(ValidationError::UnknownField(field.to_string()))
        }
    }

    pub fn toggle_flag(&mut self, field: &str) -> Result<(), ValidationError> {
        match D::field(field) {
            Some(meta) if meta.kind == FieldKind::Boolean => {
                let next = !parse_flag(&self.field_value(field));
                self.set_field(field, flag_text(next))
            }
            _ => Err(ValidationError::UnknownField(field.to_string())),
        }
    }

    pub fn submit(&self) -> Result<D::Payload, ValidationError> {
        self.draft.submit()
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
