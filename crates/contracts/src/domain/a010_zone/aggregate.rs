use crate::domain::common::{default_active, AggregateRoot, EntityMetadata, RecordId};
use crate::shared::form::{flag_text, optional_text, parse_flag, FormSchema};
use crate::shared::list::{Identified, Searchable, Sortable};
use crate::shared::metadata::{FieldKind, FieldMetadata, ValidationError};
use serde::{Deserialize, Serialize};

/// Зона (район) города
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub city_name: String,
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub status: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Identified for Zone {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Searchable for Zone {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "cityName"];

    fn get_field_value(&self, field: &str) -> Option<String> {
        self.to_dto().get_field(field)
    }
}

impl Sortable for Zone {}

impl AggregateRoot for Zone {
    type Dto = ZoneDto;

    fn status(&self) -> bool {
        self.status
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> ZoneDto {
        ZoneDto {
            name: self.name.clone(),
            city_name: self.city_name.clone(),
            description: self.description.clone(),
            status: self.status,
        }
    }

    fn aggregate_index() -> &'static str {
        "a010"
    }

    fn entity_name() -> &'static str {
        "zone"
    }

    fn collection_name() -> &'static str {
        "zones"
    }

    fn element_name() -> &'static str {
        "Zone"
    }

    fn list_name() -> &'static str {
        "Zones"
    }
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("name", "Name", FieldKind::Text)
        .required()
        .placeholder("e.g. North"),
    FieldMetadata::new("cityName", "City", FieldKind::Text).required(),
    FieldMetadata::new("description", "Description", FieldKind::LongText),
    FieldMetadata::new("status", "Active", FieldKind::Boolean).form_only(),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDto {
    pub name: String,
    pub city_name: String,
    pub description: Option<String>,
    pub status: bool,
}

impl Default for ZoneDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            city_name: String::new(),
            description: None,
            status: true,
        }
    }
}

impl FormSchema for ZoneDto {
    type Payload = ZoneDto;

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn get_field(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "cityName" => Some(self.city_name.clone()),
            "description" => Some(self.description.clone().unwrap_or_default()),
            "status" => Some(flag_text(self.status)),
            _ => None,
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "name" => self.name = value,
            "cityName" => self.city_name = value,
            "description" => self.description = optional_text(value),
            "status" => self.status = parse_flag(&value),
            _ => return false,
        }
        true
    }

    fn payload(&self) -> Result<ZoneDto, ValidationError> {
        Ok(ZoneDto {
            name: self.name.trim().to_string(),
            city_name: self.city_name.trim().to_string(),
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;

    #[test]
    fn test_zone_form() {
        let zone: Zone =
            serde_json::from_str(r#"{"id":2,"name":"North","cityName":"Pune","status":true}"#)
                .unwrap();
        assert!(zone.matches_filter("pun"));

        let mut form = FormState::for_edit(&zone);
        form.set_field("cityName", "  ".into()).unwrap();
        assert_eq!(form.submit(), Err(ValidationError::Required { label: "City" }));

        form.set_field("cityName", " Mumbai ".into()).unwrap();
        form.toggle_flag("status").unwrap();
        let payload = form.submit().unwrap();
        assert_eq!(payload.city_name, "Mumbai");
        assert!(!payload.status);
    }
}
