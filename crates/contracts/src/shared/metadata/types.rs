//! Core metadata types for resource fields
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.

use super::field_type::FieldKind;
use super::validation::{ValidationError, ValidationRules};

/// Metadata for a single field
/// Copy trait enabled for efficient passing by value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetadata {
    /// Wire name of the field (camelCase, as in the API JSON)
    pub name: &'static str,
    pub kind: FieldKind,
    pub ui: FieldUiMetadata,
    pub validation: ValidationRules,
}

impl FieldMetadata {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            ui: FieldUiMetadata {
                label,
                placeholder: None,
                visible_in_list: true,
                visible_in_form: true,
            },
            validation: ValidationRules::none(),
        }
    }

    pub const fn required(mut self) -> Self {
        self.validation.required = true;
        self
    }

    pub const fn rules(mut self, validation: ValidationRules) -> Self {
        self.validation = validation;
        self
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.ui.placeholder = Some(placeholder);
        self
    }

    /// Field is edited in forms and shown in overview, but has no list column
    pub const fn form_only(mut self) -> Self {
        self.ui.visible_in_list = false;
        self
    }

    /// Check if field should be visible in list view
    pub fn visible_in_list(&self) -> bool {
        self.ui.visible_in_list
    }

    /// Check if field should be visible in form
    pub fn visible_in_form(&self) -> bool {
        self.ui.visible_in_form
    }

    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        self.validation.validate_value(self.kind, value, self.ui.label)
    }
}

/// UI metadata for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldUiMetadata {
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub visible_in_list: bool,
    pub visible_in_form: bool,
}
