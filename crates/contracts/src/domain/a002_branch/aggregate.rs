use crate::domain::common::{default_active, AggregateRoot, EntityMetadata, RecordId};
use crate::shared::form::{flag_text, optional_text, parse_flag, FormSchema};
use crate::shared::list::{Identified, Searchable, Sortable};
use crate::shared::metadata::{FieldKind, FieldMetadata, ValidationError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Филиал учебного заведения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: RecordId,
    pub name: String,
    pub code: Option<String>,
    pub institute_id: Option<RecordId>,
    #[serde(default)]
    pub institute_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(default = "default_active")]
    pub status: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Identified for Branch {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Searchable for Branch {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "instituteName"];

    fn get_field_value(&self, field: &str) -> Option<String> {
        self.to_dto().get_field(field)
    }
}

impl Sortable for Branch {}

impl AggregateRoot for Branch {
    type Dto = BranchDto;

    fn status(&self) -> bool {
        self.status
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> BranchDto {
        BranchDto {
            name: self.name.clone(),
            code: self.code.clone(),
            institute_id: self.institute_id.clone(),
            institute_name: self.institute_name.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            status: self.status,
        }
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn entity_name() -> &'static str {
        "branch"
    }

    fn collection_name() -> &'static str {
        "branches"
    }

    fn element_name() -> &'static str {
        "Branch"
    }

    fn list_name() -> &'static str {
        "Branches"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("name", "Name", FieldKind::Text).required(),
    FieldMetadata::new("code", "Code", FieldKind::Text),
    FieldMetadata::new("instituteName", "Institute", FieldKind::Text)
        .required()
        .placeholder("Institute this branch belongs to"),
    FieldMetadata::new("phone", "Phone", FieldKind::Phone),
    FieldMetadata::new("address", "Address", FieldKind::LongText).form_only(),
    FieldMetadata::new("status", "Active", FieldKind::Boolean).form_only(),
];

/// DTO для создания/обновления филиала
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchDto {
    pub name: String,
    pub code: Option<String>,
    /// Сохраняется при редактировании, в форме не показывается
    pub institute_id: Option<RecordId>,
    pub institute_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub status: bool,
}

impl Default for BranchDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            code: None,
            institute_id: None,
            institute_name: String::new(),
            phone: None,
            address: None,
            status: true,
        }
    }
}

impl FormSchema for BranchDto {
    type Payload = BranchDto;

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn get_field(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "code" => Some(self.code.clone().unwrap_or_default()),
            "instituteName" => Some(self.institute_name.clone()),
            "phone" => Some(self.phone.clone().unwrap_or_default()),
            "address" => Some(self.address.clone().unwrap_or_default()),
            "status" => Some(flag_text(self.status)),
            _ => None,
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "name" => self.name = value,
            "code" => self.code = optional_text(value),
            "instituteName" => {
                // Другое учреждение: старая ссылка больше не действительна
                if value.trim() != self.institute_name.trim() {
                    self.institute_id = None;
                }
                self.institute_name = value;
            }
            "phone" => self.phone = optional_text(value),
            "address" => self.address = optional_text(value),
            "status" => self.status = parse_flag(&value),
            _ => return false,
        }
        true
    }

    fn payload(&self) -> Result<BranchDto, ValidationError> {
        Ok(BranchDto {
            name: self.name.trim().to_string(),
            institute_name: self.institute_name.trim().to_string(),
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;

    fn branch(id: i64, name: &str, institute: &str) -> Branch {
        Branch {
            id: RecordId::Number(id),
            name: name.to_string(),
            code: None,
            institute_id: Some(RecordId::Number(10)),
            institute_name: institute.to_string(),
            phone: None,
            address: None,
            status: true,
            metadata: EntityMetadata::default(),
        }
    }

    #[test]
    fn test_search_on_name_and_institute() {
        let b = branch(1, "North Campus", "Delhi Public School");
        assert!(b.matches_filter("north"));
        assert!(b.matches_filter("public"));
        assert!(!b.matches_filter("south"));
    }

    #[test]
    fn test_missing_institute_name_is_rejected() {
        let mut form = FormState::<BranchDto>::new();
        form.set_field("name", "East Wing".into()).unwrap();
        let err = form.submit().unwrap_err();
        assert_eq!(err, ValidationError::Required { label: "Institute" });
        assert_eq!(err.to_string(), "Institute is required");
    }

    #[test]
    fn test_changing_institute_drops_reference() {
        let mut form = FormState::for_edit(&branch(2, "Main", "DPS"));
        form.set_field("instituteName", "DPS ".into()).unwrap();
        assert_eq!(form.submit().unwrap().institute_id, Some(RecordId::Number(10)));

        form.set_field("instituteName", "Kendriya Vidyalaya".into()).unwrap();
        let payload = form.submit().unwrap();
        assert_eq!(payload.institute_id, None);
        assert_eq!(payload.institute_name, "Kendriya Vidyalaya");
    }

    #[test]
    fn test_missing_status_defaults_to_active() {
        let b: Branch =
            serde_json::from_str(r#"{"id":"br-7","name":"West","instituteName":"DPS"}"#).unwrap();
        assert_eq!(b.id, RecordId::Text("br-7".to_string()));
        assert!(b.status);
        assert_eq!(b.get_field_value("code"), Some(String::new()));
    }
}
