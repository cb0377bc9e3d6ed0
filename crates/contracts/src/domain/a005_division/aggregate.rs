use crate::domain::common::{default_active, AggregateRoot, EntityMetadata, RecordId};
use crate::shared::form::{flag_text, optional_text, parse_flag, FormSchema};
use crate::shared::list::{Identified, Searchable, Sortable};
use crate::shared::metadata::{FieldKind, FieldMetadata, ValidationError, ValidationRules};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Отделение (секция) внутри класса
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Division {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub class_name: String,
    pub school_name: Option<String>,
    pub capacity: Option<u32>,
    #[serde(default = "default_active")]
    pub status: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Identified for Division {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Searchable for Division {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "className"];

    fn get_field_value(&self, field: &str) -> Option<String> {
        self.to_dto().get_field(field)
    }
}

impl Sortable for Division {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "capacity" => self.capacity.cmp(&other.capacity),
            _ => {
                let left = self.get_field_value(field).unwrap_or_default().to_lowercase();
                let right = other.get_field_value(field).unwrap_or_default().to_lowercase();
                left.cmp(&right)
            }
        }
    }
}

impl AggregateRoot for Division {
    type Dto = DivisionDto;

    fn status(&self) -> bool {
        self.status
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> DivisionDto {
        DivisionDto {
            name: self.name.clone(),
            class_name: self.class_name.clone(),
            school_name: self.school_name.clone(),
            capacity: self.capacity.map(|c| c.to_string()).unwrap_or_default(),
            status: self.status,
        }
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn entity_name() -> &'static str {
        "division"
    }

    fn collection_name() -> &'static str {
        "divisions"
    }

    fn element_name() -> &'static str {
        "Division"
    }

    fn list_name() -> &'static str {
        "Divisions"
    }
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("name", "Name", FieldKind::Text)
        .required()
        .placeholder("e.g. A"),
    FieldMetadata::new("className", "Class", FieldKind::Text).required(),
    FieldMetadata::new("schoolName", "School", FieldKind::Text),
    FieldMetadata::new("capacity", "Capacity", FieldKind::Number)
        .rules(ValidationRules::none().with_range(1.0, 200.0)),
    FieldMetadata::new("status", "Active", FieldKind::Boolean).form_only(),
];

/// Форма отделения; вместимость хранится как введённый текст
#[derive(Debug, Clone, PartialEq)]
pub struct DivisionDto {
    pub name: String,
    pub class_name: String,
    pub school_name: Option<String>,
    pub capacity: String,
    pub status: bool,
}

impl Default for DivisionDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            class_name: String::new(),
            school_name: None,
            capacity: String::new(),
            status: true,
        }
    }
}

/// Тело запроса создания/обновления отделения
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionPayload {
    pub name: String,
    pub class_name: String,
    pub school_name: Option<String>,
    pub capacity: Option<u32>,
    pub status: bool,
}

impl FormSchema for DivisionDto {
    type Payload = DivisionPayload;

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn get_field(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "className" => Some(self.class_name.clone()),
            "schoolName" => Some(self.school_name.clone().unwrap_or_default()),
            "capacity" => Some(self.capacity.clone()),
            "status" => Some(flag_text(self.status)),
            _ => None,
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "name" => self.name = value,
            "className" => self.class_name = value,
            "schoolName" => self.school_name = optional_text(value),
            "capacity" => self.capacity = value,
            "status" => self.status = parse_flag(&value),
            _ => return false,
        }
        true
    }

    fn validate_rules(&self) -> Result<(), ValidationError> {
        let capacity = self.capacity.trim();
        if !capacity.is_empty() && capacity.parse::<u32>().is_err() {
            return Err(ValidationError::Rule(
                "Capacity must be a whole number".to_string(),
            ));
        }
        Ok(())
    }

    fn payload(&self) -> Result<DivisionPayload, ValidationError> {
        let capacity = match self.capacity.trim() {
            "" => None,
            text => Some(
                text.parse::<u32>()
                    .map_err(|_| ValidationError::InvalidNumber { label: "Capacity" })?,
            ),
        };

        Ok(DivisionPayload {
            name: self.name.trim().to_string(),
            class_name: self.class_name.trim().to_string(),
            school_name: self.school_name.clone(),
            capacity,
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;
    use crate::shared::list::PaginatedListController;

    fn division(id: i64, name: &str, capacity: Option<u32>) -> Division {
        Division {
            id: RecordId::Number(id),
            name: name.to_string(),
            class_name: "Grade 5".to_string(),
            school_name: None,
            capacity,
            status: true,
            metadata: EntityMetadata::default(),
        }
    }

    #[test]
    fn test_capacity_payload() {
        let mut form = FormState::<DivisionDto>::new();
        form.set_field("name", "A".into()).unwrap();
        form.set_field("className", "Grade 5".into()).unwrap();
        assert_eq!(form.submit().unwrap().capacity, None);

        form.set_field("capacity", "40".into()).unwrap();
        let payload = form.submit().unwrap();
        assert_eq!(payload.capacity, Some(40));
        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["className"], "Grade 5");
        assert_eq!(body["capacity"], 40);

        form.set_field("capacity", "500".into()).unwrap();
        assert!(matches!(
            form.submit(),
            Err(ValidationError::OutOfRange { label: "Capacity", .. })
        ));

        form.set_field("capacity", "12.5".into()).unwrap();
        assert_eq!(
            form.submit().unwrap_err().to_string(),
            "Capacity must be a whole number"
        );
    }

    #[test]
    fn test_capacity_sorts_numerically() {
        let mut list = PaginatedListController::new(vec![
            division(1, "A", Some(9)),
            division(2, "B", Some(40)),
            division(3, "C", None),
        ]);
        list.toggle_sort("capacity");
        let names: Vec<&str> = list
            .visible_records()
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_edit_form_shows_capacity_text() {
        let form = FormState::for_edit(&division(7, "B", Some(35)));
        assert_eq!(form.field_value("capacity"), "35");
        assert_eq!(form.editing_id(), Some(&RecordId::Number(7)));
    }
}
