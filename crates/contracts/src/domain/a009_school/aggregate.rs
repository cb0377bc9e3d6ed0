use crate::domain::common::{default_active, AggregateRoot, EntityMetadata, RecordId};
use crate::shared::form::{flag_text, optional_text, parse_flag, FormSchema};
use crate::shared::list::{Identified, Searchable, Sortable};
use crate::shared::metadata::{FieldKind, FieldMetadata, ValidationError, ValidationRules};
use serde::{Deserialize, Serialize};

/// Школа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub board_name: String,
    pub email: Option<String>,
    pub zone_name: Option<String>,
    pub address: Option<String>,
    #[serde(default = "default_active")]
    pub status: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Identified for School {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Searchable for School {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "code", "boardName"];

    fn get_field_value(&self, field: &str) -> Option<String> {
        self.to_dto().get_field(field)
    }
}

impl Sortable for School {}

impl AggregateRoot for School {
    type Dto = SchoolDto;

    fn status(&self) -> bool {
        self.status
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> SchoolDto {
        SchoolDto {
            name: self.name.clone(),
            code: self.code.clone(),
            board_name: self.board_name.clone(),
            email: self.email.clone(),
            zone_name: self.zone_name.clone(),
            address: self.address.clone(),
            status: self.status,
        }
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn entity_name() -> &'static str {
        "school"
    }

    fn collection_name() -> &'static str {
        "schools"
    }

    fn element_name() -> &'static str {
        "School"
    }

    fn list_name() -> &'static str {
        "Schools"
    }
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("name", "Name", FieldKind::Text).required(),
    FieldMetadata::new("code", "Code", FieldKind::Text)
        .rules(ValidationRules::required().with_length(Some(2), Some(20))),
    FieldMetadata::new("boardName", "Board", FieldKind::Text).required(),
    FieldMetadata::new("email", "Email", FieldKind::Email),
    FieldMetadata::new("zoneName", "Zone", FieldKind::Text),
    FieldMetadata::new("address", "Address", FieldKind::LongText).form_only(),
    FieldMetadata::new("status", "Active", FieldKind::Boolean).form_only(),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolDto {
    pub name: String,
    pub code: String,
    pub board_name: String,
    pub email: Option<String>,
    pub zone_name: Option<String>,
    pub address: Option<String>,
    pub status: bool,
}

impl Default for SchoolDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            code: String::new(),
            board_name: String::new(),
            email: None,
            zone_name: None,
            address: None,
            status: true,
        }
    }
}

impl FormSchema for SchoolDto {
    type Payload = SchoolDto;

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn get_field(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "code" => Some(self.code.clone()),
            "boardName" => Some(self.board_name.clone()),
            "email" => Some(self.email.clone().unwrap_or_default()),
            "zoneName" => Some(self.zone_name.clone().unwrap_or_default()),
            "address" => Some(self.address.clone().unwrap_or_default()),
            "status" => Some(flag_text(self.status)),
            _ => None,
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "name" => self.name = value,
            "code" => self.code = value.to_uppercase(),
            "boardName" => self.board_name = value,
            "email" => self.email = optional_text(value),
            "zoneName" => self.zone_name = optional_text(value),
            "address" => self.address = optional_text(value),
            "status" => self.status = parse_flag(&value),
            _ => return false,
        }
        true
    }

    fn payload(&self) -> Result<SchoolDto, ValidationError> {
        Ok(SchoolDto {
            name: self.name.trim().to_string(),
            code: self.code.trim().to_string(),
            board_name: self.board_name.trim().to_string(),
            email: self.email.as_ref().map(|e| e.trim().to_lowercase()),
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;

    #[test]
    fn test_search_on_code_and_board() {
        let school: School = serde_json::from_str(
            r#"{"id":12,"name":"Springfield High","code":"SPH01","boardName":"CBSE","zoneName":"North"}"#,
        )
        .unwrap();
        assert!(school.matches_filter("sph"));
        assert!(school.matches_filter("cbse"));
        // Зона не входит в поиск
        assert!(!school.matches_filter("north"));
    }

    #[test]
    fn test_code_rules() {
        let mut form = FormState::<SchoolDto>::new();
        form.set_field("name", "Springfield High".into()).unwrap();
        form.set_field("boardName", "CBSE".into()).unwrap();
        assert_eq!(
            form.submit(),
            Err(ValidationError::Required { label: "Code" })
        );

        form.set_field("code", "s".into()).unwrap();
        assert_eq!(
            form.submit(),
            Err(ValidationError::TooShort { label: "Code", min: 2 })
        );

        form.set_field("code", "sph01".into()).unwrap();
        form.set_field("email", " Office@SPH.edu ".into()).unwrap();
        let payload = form.submit().unwrap();
        assert_eq!(payload.code, "SPH01");
        assert_eq!(payload.email.as_deref(), Some("office@sph.edu"));
    }
}
