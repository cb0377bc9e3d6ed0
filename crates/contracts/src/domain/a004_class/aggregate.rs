use crate::domain::common::{default_active, AggregateRoot, EntityMetadata, RecordId};
use crate::shared::form::{flag_text, optional_text, parse_flag, FormSchema};
use crate::shared::list::{Identified, Searchable, Sortable};
use crate::shared::metadata::{FieldKind, FieldMetadata, ValidationError};
use serde::{Deserialize, Serialize};

/// Класс (параллель) школы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: RecordId,
    pub name: String,
    pub code: Option<String>,
    #[serde(default)]
    pub school_name: String,
    pub board_name: Option<String>,
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub status: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Identified for Class {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Searchable for Class {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "schoolName", "code"];

    fn get_field_value(&self, field: &str) -> Option<String> {
        self.to_dto().get_field(field)
    }
}

impl Sortable for Class {}

impl AggregateRoot for Class {
    type Dto = ClassDto;

    fn status(&self) -> bool {
        self.status
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> ClassDto {
        ClassDto {
            name: self.name.clone(),
            code: self.code.clone(),
            school_name: self.school_name.clone(),
            board_name: self.board_name.clone(),
            description: self.description.clone(),
            status: self.status,
        }
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn entity_name() -> &'static str {
        "class"
    }

    fn collection_name() -> &'static str {
        "classes"
    }

    fn element_name() -> &'static str {
        "Class"
    }

    fn list_name() -> &'static str {
        "Classes"
    }
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("name", "Name", FieldKind::Text)
        .required()
        .placeholder("e.g. Grade 7"),
    FieldMetadata::new("code", "Code", FieldKind::Text),
    FieldMetadata::new("schoolName", "School", FieldKind::Text).required(),
    FieldMetadata::new("boardName", "Board", FieldKind::Text),
    FieldMetadata::new("description", "Description", FieldKind::LongText).form_only(),
    FieldMetadata::new("status", "Active", FieldKind::Boolean).form_only(),
];

/// DTO для создания/обновления класса
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDto {
    pub name: String,
    pub code: Option<String>,
    pub school_name: String,
    pub board_name: Option<String>,
    pub description: Option<String>,
    pub status: bool,
}

impl Default for ClassDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            code: None,
            school_name: String::new(),
            board_name: None,
            description: None,
            status: true,
        }
    }
}

impl FormSchema for ClassDto {
    type Payload = ClassDto;

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn get_field(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "code" => Some(self.code.clone().unwrap_or_default()),
            "schoolName" => Some(self.school_name.clone()),
            "boardName" => Some(self.board_name.clone().unwrap_or_default()),
            "description" => Some(self.description.clone().unwrap_or_default()),
            "status" => Some(flag_text(self.status)),
            _ => None,
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "name" => self.name = value,
            "code" => self.code = optional_text(value.to_uppercase()),
            "schoolName" => self.school_name = value,
            "boardName" => self.board_name = optional_text(value),
            "description" => self.description = optional_text(value),
            "status" => self.status = parse_flag(&value),
            _ => return false,
        }
        true
    }

    fn payload(&self) -> Result<ClassDto, ValidationError> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;

    #[test]
    fn test_code_is_searchable_when_present() {
        let mut class: Class = serde_json::from_str(
            r#"{"id":3,"name":"Grade 7","schoolName":"St. Mary's","code":"G7A"}"#,
        )
        .unwrap();
        assert!(class.matches_filter("g7a"));
        assert!(class.matches_filter("mary"));

        class.code = None;
        assert!(!class.matches_filter("g7a"));
    }

    #[test]
    fn test_code_is_uppercased_on_input() {
        let mut form = FormState::<ClassDto>::new();
        form.set_field("code", "g7b".into()).unwrap();
        assert_eq!(form.field_value("code"), "G7B");
        form.set_field("code", "  ".into()).unwrap();
        assert_eq!(form.field_value("code"), "");
    }
}
