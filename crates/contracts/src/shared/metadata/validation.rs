//! Validation rules for metadata fields

use super::field_type::FieldKind;
use chrono::NaiveDate;
use thiserror::Error;

/// Client-side validation failure, raised before any request is sent
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{label} is required")]
    Required { label: &'static str },

    #[error("{label} must be at least {min} characters")]
    TooShort { label: &'static str, min: usize },

    #[error("{label} must not exceed {max} characters")]
    TooLong { label: &'static str, max: usize },

    #[error("{label} must be a valid email address")]
    InvalidEmail { label: &'static str },

    #[error("{label} must be a valid phone number")]
    InvalidPhone { label: &'static str },

    #[error("{label} must be a number")]
    InvalidNumber { label: &'static str },

    #[error("{label} must be between {min} and {max}")]
    OutOfRange {
        label: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{label} must be a date in YYYY-MM-DD format")]
    InvalidDate { label: &'static str },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("{0}")]
    Rule(String),
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub const fn with_length(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, label: &'static str) -> Result<(), ValidationError> {
        let value = value.trim();
        if value.is_empty() {
            if self.required {
                return Err(ValidationError::Required { label });
            }
            return Ok(());
        }

        let len = value.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(ValidationError::TooShort { label, min });
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(ValidationError::TooLong { label, max });
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, label: &'static str) -> Result<(), ValidationError> {
        let below = self.min.is_some_and(|min| value < min);
        let above = self.max.is_some_and(|max| value > max);
        if below || above {
            return Err(ValidationError::OutOfRange {
                label,
                min: self.min.unwrap_or(f64::MIN),
                max: self.max.unwrap_or(f64::MAX),
            });
        }
        Ok(())
    }

    /// Full check of a raw form value: presence, length, then kind-specific format.
    pub fn validate_value(
        &self,
        kind: FieldKind,
        value: &str,
        label: &'static str,
    ) -> Result<(), ValidationError> {
        self.validate_string(value, label)?;

        let value = value.trim();
        if value.is_empty() {
            return Ok(());
        }

        match kind {
            FieldKind::Email => {
                if !is_valid_email(value) {
                    return Err(ValidationError::InvalidEmail { label });
                }
            }
            FieldKind::Phone => {
                if !is_valid_phone(value) {
                    return Err(ValidationError::InvalidPhone { label });
                }
            }
            FieldKind::Number => {
                let number = value
                    .parse::<f64>()
                    .map_err(|_| ValidationError::InvalidNumber { label })?;
                self.validate_number(number, label)?;
            }
            FieldKind::Date => {
                NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .map_err(|_| ValidationError::InvalidDate { label })?;
            }
            FieldKind::Text | FieldKind::LongText | FieldKind::Boolean => {}
        }

        Ok(())
    }
}

fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.contains(char::is_whitespace)
}

fn is_valid_phone(value: &str) -> bool {
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'));
    allowed && (7..=15).contains(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let rules = ValidationRules::required();
        assert_eq!(
            rules.validate_value(FieldKind::Text, "   ", "Name"),
            Err(ValidationError::Required { label: "Name" })
        );
        assert!(rules.validate_value(FieldKind::Text, "CBSE", "Name").is_ok());
        assert!(ValidationRules::none()
            .validate_value(FieldKind::Email, "", "Email")
            .is_ok());
    }

    #[test]
    fn test_email_and_phone() {
        let rules = ValidationRules::none();
        assert!(rules.validate_value(FieldKind::Email, "a@b.org", "Email").is_ok());
        assert!(rules.validate_value(FieldKind::Email, "a@b", "Email").is_err());
        assert!(rules.validate_value(FieldKind::Email, "a b@c.org", "Email").is_err());
        assert!(rules.validate_value(FieldKind::Phone, "+91 98765-43210", "Phone").is_ok());
        assert!(rules.validate_value(FieldKind::Phone, "12ab", "Phone").is_err());
    }

    #[test]
    fn test_number_range_and_date() {
        let rules = ValidationRules::required().with_range(1.0, 10.0);
        assert!(rules.validate_value(FieldKind::Number, "7", "Intensity").is_ok());
        assert_eq!(
            rules.validate_value(FieldKind::Number, "seven", "Intensity"),
            Err(ValidationError::InvalidNumber { label: "Intensity" })
        );
        assert!(matches!(
            rules.validate_value(FieldKind::Number, "11", "Intensity"),
            Err(ValidationError::OutOfRange { .. })
        ));

        let date = ValidationRules::required();
        assert!(date.validate_value(FieldKind::Date, "2024-03-15", "Date").is_ok());
        assert!(date.validate_value(FieldKind::Date, "15.03.2024", "Date").is_err());
    }

    #[test]
    fn test_length_counts_chars() {
        let rules = ValidationRules::none().with_length(Some(6), Some(6));
        assert!(rules.validate_string("560001", "Pincode").is_ok());
        assert_eq!(
            rules.validate_string("5600", "Pincode"),
            Err(ValidationError::TooShort { label: "Pincode", min: 6 })
        );
        assert_eq!(
            ValidationError::TooLong { label: "Emoji", max: 8 }.to_string(),
            "Emoji must not exceed 8 characters"
        );
    }
}
