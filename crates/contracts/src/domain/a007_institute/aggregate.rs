use crate::domain::common::{default_active, AggregateRoot, EntityMetadata, RecordId};
use crate::shared::form::{flag_text, optional_text, parse_flag, FormSchema};
use crate::shared::list::{Identified, Searchable, Sortable};
use crate::shared::metadata::{FieldKind, FieldMetadata, ValidationError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Учебное заведение (школа, колледж, университет)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Institute {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub institute_type: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub city_name: Option<String>,
    pub address: Option<String>,
    #[serde(default = "default_active")]
    pub status: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Identified for Institute {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Searchable for Institute {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "type", "email", "cityName"];

    fn get_field_value(&self, field: &str) -> Option<String> {
        self.to_dto().get_field(field)
    }
}

impl Sortable for Institute {}

impl AggregateRoot for Institute {
    type Dto = InstituteDto;

    fn status(&self) -> bool {
        self.status
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> InstituteDto {
        InstituteDto {
            name: self.name.clone(),
            institute_type: self.institute_type.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            city_name: self.city_name.clone(),
            address: self.address.clone(),
            status: self.status,
        }
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn entity_name() -> &'static str {
        "institute"
    }

    fn collection_name() -> &'static str {
        "institutes"
    }

    fn element_name() -> &'static str {
        "Institute"
    }

    fn list_name() -> &'static str {
        "Institutes"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("name", "Name", FieldKind::Text).required(),
    FieldMetadata::new("type", "Type", FieldKind::Text)
        .required()
        .placeholder("School / College / University"),
    FieldMetadata::new("email", "Email", FieldKind::Email).required(),
    FieldMetadata::new("phone", "Phone", FieldKind::Phone),
    FieldMetadata::new("cityName", "City", FieldKind::Text),
    FieldMetadata::new("address", "Address", FieldKind::LongText).form_only(),
    FieldMetadata::new("status", "Active", FieldKind::Boolean).form_only(),
];

/// DTO для создания/обновления учебного заведения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstituteDto {
    pub name: String,
    #[serde(rename = "type")]
    pub institute_type: String,
    pub email: String,
    pub phone: Option<String>,
    pub city_name: Option<String>,
    pub address: Option<String>,
    pub status: bool,
}

impl Default for InstituteDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            institute_type: String::new(),
            email: String::new(),
            phone: None,
            city_name: None,
            address: None,
            status: true,
        }
    }
}

impl FormSchema for InstituteDto {
    type Payload = InstituteDto;

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn get_field(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "type" => Some(self.institute_type.clone()),
            "email" => Some(self.email.clone()),
            "phone" => Some(self.phone.clone().unwrap_or_default()),
            "cityName" => Some(self.city_name.clone().unwrap_or_default()),
            "address" => Some(self.address.clone().unwrap_or_default()),
            "status" => Some(flag_text(self.status)),
            _ => None,
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "name" => self.name = value,
            "type" => self.institute_type = value,
            "email" => self.email = value,
            "phone" => self.phone = optional_text(value),
            "cityName" => self.city_name = optional_text(value),
            "address" => self.address = optional_text(value),
            "status" => self.status = parse_flag(&value),
            _ => return false,
        }
        true
    }

    fn payload(&self) -> Result<InstituteDto, ValidationError> {
        Ok(InstituteDto {
            name: self.name.trim().to_string(),
            institute_type: self.institute_type.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;

    #[test]
    fn test_search_includes_city() {
        let institute: Institute = serde_json::from_str(
            r#"{"id":"inst-1","name":"IIT","type":"University","email":"office@iit.ac.in","cityName":"Mumbai"}"#,
        )
        .unwrap();
        assert!(institute.matches_filter("mumbai"));
        assert!(institute.matches_filter("univ"));
        assert_eq!(institute.get_field_value("type").as_deref(), Some("University"));
    }

    #[test]
    fn test_invalid_phone_is_rejected() {
        let mut form = FormState::<InstituteDto>::new();
        form.set_field("name", "IIT".into()).unwrap();
        form.set_field("type", "University".into()).unwrap();
        form.set_field("email", "office@iit.ac.in".into()).unwrap();
        form.set_field("phone", "call me".into()).unwrap();
        assert_eq!(
            form.submit().unwrap_err().to_string(),
            "Phone must be a valid phone number"
        );

        form.set_field("phone", "".into()).unwrap();
        let body = serde_json::to_value(form.submit().unwrap()).unwrap();
        assert_eq!(body["type"], "University");
        assert!(body["phone"].is_null());
    }
}
