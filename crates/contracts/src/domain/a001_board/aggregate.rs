use crate::domain::common::{default_active, AggregateRoot, EntityMetadata, RecordId};
use crate::shared::form::{flag_text, optional_text, parse_flag, FormSchema};
use crate::shared::list::{Identified, Searchable, Sortable};
use crate::shared::metadata::{FieldKind, FieldMetadata, ValidationError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Образовательный совет (CBSE, ICSE, State Board, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub board_type: String,
    #[serde(default)]
    pub email: String,
    pub contact_number: Option<String>,
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub status: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Identified for Board {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Searchable for Board {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "type", "email"];

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "type" => Some(self.board_type.clone()),
            "email" => Some(self.email.clone()),
            "contactNumber" => Some(self.contact_number.clone().unwrap_or_default()),
            "description" => Some(self.description.clone().unwrap_or_default()),
            _ => None,
        }
    }
}

impl Sortable for Board {}

impl AggregateRoot for Board {
    type Dto = BoardDto;

    fn status(&self) -> bool {
        self.status
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> BoardDto {
        BoardDto {
            name: self.name.clone(),
            board_type: self.board_type.clone(),
            email: self.email.clone(),
            contact_number: self.contact_number.clone(),
            description: self.description.clone(),
            status: self.status,
        }
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn entity_name() -> &'static str {
        "board"
    }

    fn collection_name() -> &'static str {
        "boards"
    }

    fn element_name() -> &'static str {
        "Board"
    }

    fn list_name() -> &'static str {
        "Boards"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("name", "Name", FieldKind::Text)
        .required()
        .placeholder("e.g. CBSE"),
    FieldMetadata::new("type", "Type", FieldKind::Text)
        .required()
        .placeholder("National / State / International"),
    FieldMetadata::new("email", "Email", FieldKind::Email).required(),
    FieldMetadata::new("contactNumber", "Contact number", FieldKind::Phone),
    FieldMetadata::new("description", "Description", FieldKind::LongText).form_only(),
    FieldMetadata::new("status", "Active", FieldKind::Boolean).form_only(),
];

/// DTO для создания/обновления совета
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDto {
    pub name: String,
    #[serde(rename = "type")]
    pub board_type: String,
    pub email: String,
    pub contact_number: Option<String>,
    pub description: Option<String>,
    pub status: bool,
}

impl Default for BoardDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            board_type: String::new(),
            email: String::new(),
            contact_number: None,
            description: None,
            status: true,
        }
    }
}

impl FormSchema for BoardDto {
    type Payload = BoardDto;

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn get_field(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "type" => Some(self.board_type.clone()),
            "email" => Some(self.email.clone()),
            "contactNumber" => Some(self.contact_number.clone().unwrap_or_default()),
            "description" => Some(self.description.clone().unwrap_or_default()),
            "status" => Some(flag_text(self.status)),
            _ => None,
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "name" => self.name = value,
            "type" => self.board_type = value,
            "email" => self.email = value,
            "contactNumber" => self.contact_number = optional_text(value),
            "description" => self.description = optional_text(value),
            "status" => self.status = parse_flag(&value),
            _ => return false,
        }
        true
    }

    fn payload(&self) -> Result<BoardDto, ValidationError> {
        Ok(BoardDto {
            name: self.name.trim().to_string(),
            board_type: self.board_type.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;

    fn sample() -> Board {
        serde_json::from_str(
            r#"{
                "id": 5,
                "name": "Central Board",
                "type": "National",
                "email": "info@cbse.gov.in",
                "contactNumber": null,
                "status": true,
                "createdAt": "2024-03-15T14:02:26Z"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let board = sample();
        assert_eq!(board.id, RecordId::Number(5));
        assert_eq!(board.board_type, "National");
        assert!(board.description.is_none());
        assert_eq!(board.metadata.format_created(), "2024-03-15 14:02:26");
    }

    #[test]
    fn test_search_on_name_type_email() {
        let board = sample();
        assert!(board.matches_filter("central"));
        assert!(board.matches_filter("NATION"));
        assert!(board.matches_filter("cbse.gov"));
        assert!(!board.matches_filter("state"));
    }

    #[test]
    fn test_contact_number_is_listed_but_not_searched() {
        let mut board = sample();
        board.contact_number = Some("011-2345".to_string());

        let columns: Vec<&str> = Board::list_columns().iter().map(|c| c.name).collect();
        assert_eq!(columns, vec!["name", "type", "email", "contactNumber"]);
        let highlighted: Vec<&str> = columns
            .into_iter()
            .filter(|name| Board::is_search_field(name))
            .collect();
        assert_eq!(highlighted, vec!["name", "type", "email"]);

        assert!(!board.matches_filter("2345"));
    }

    #[test]
    fn test_edit_form_round() {
        let board = sample();
        let mut form = FormState::for_edit(&board);
        assert!(form.is_edit_mode());
        assert_eq!(form.editing_id(), Some(&RecordId::Number(5)));
        assert_eq!(form.field_value("type"), "National");

        form.set_field("email", "  INFO@CBSE.gov.in ".to_string()).unwrap();
        let payload = form.submit().unwrap();
        assert_eq!(payload.email, "info@cbse.gov.in");

        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["type"], "National");
        assert!(body.get("contactNumber").is_some());
    }

    #[test]
    fn test_create_form_validation() {
        let mut form = FormState::<BoardDto>::new();
        assert!(!form.is_edit_mode());
        assert_eq!(
            form.submit(),
            Err(ValidationError::Required { label: "Name" })
        );

        form.set_field("name", "ICSE".into()).unwrap();
        form.set_field("type", "National".into()).unwrap();
        form.set_field("email", "not-an-email".into()).unwrap();
        assert_eq!(
            form.submit(),
            Err(ValidationError::InvalidEmail { label: "Email" })
        );

        form.set_field("email", "help@cisce.org".into()).unwrap();
        form.toggle_flag("status").unwrap();
        let payload = form.submit().unwrap();
        assert!(!payload.status);

        assert_eq!(
            form.set_field("unknown", String::new()),
            Err(ValidationError::UnknownField("unknown".into()))
        );
    }
}
