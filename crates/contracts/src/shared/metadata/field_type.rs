//! Field kind enumeration for form/list metadata

/// Kind of input a field is edited with and how its text is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    LongText,
    Email,
    Phone,
    Number,
    /// Calendar date in `YYYY-MM-DD`
    Date,
    Boolean,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::LongText => "long_text",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Number => "number",
            Self::Date => "date",
            Self::Boolean => "boolean",
        }
    }

    /// Value of the `type` attribute of the `<input>` editing this field
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Text | Self::LongText => "text",
            Self::Email => "email",
            Self::Phone => "tel",
            Self::Number => "number",
            Self::Date => "date",
            Self::Boolean => "checkbox",
        }
    }
}
