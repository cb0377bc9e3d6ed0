use crate::domain::common::{default_active, AggregateRoot, EntityMetadata, RecordId};
use crate::shared::form::{flag_text, optional_text, parse_flag, FormSchema};
use crate::shared::list::{Identified, Searchable, Sortable};
use crate::shared::metadata::{FieldKind, FieldMetadata, ValidationError, ValidationRules};
use serde::{Deserialize, Serialize};

/// Город
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    pub pincode: Option<String>,
    #[serde(default = "default_active")]
    pub status: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Identified for City {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Searchable for City {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "state", "country"];

    fn get_field_value(&self, field: &str) -> Option<String> {
        self.to_dto().get_field(field)
    }
}

impl Sortable for City {}

impl AggregateRoot for City {
    type Dto = CityDto;

    fn status(&self) -> bool {
        self.status
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> CityDto {
        CityDto {
            name: self.name.clone(),
            state: self.state.clone(),
            country: self.country.clone(),
            pincode: self.pincode.clone(),
            status: self.status,
        }
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn entity_name() -> &'static str {
        "city"
    }

    fn collection_name() -> &'static str {
        "cities"
    }

    fn element_name() -> &'static str {
        "City"
    }

    fn list_name() -> &'static str {
        "Cities"
    }
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("name", "Name", FieldKind::Text).required(),
    FieldMetadata::new("state", "State", FieldKind::Text).required(),
    FieldMetadata::new("country", "Country", FieldKind::Text).required(),
    FieldMetadata::new("pincode", "Pincode", FieldKind::Text)
        .rules(ValidationRules::none().with_length(Some(6), Some(6)))
        .placeholder("6 digits"),
    FieldMetadata::new("status", "Active", FieldKind::Boolean).form_only(),
];

/// DTO для создания/обновления города
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityDto {
    pub name: String,
    pub state: String,
    pub country: String,
    pub pincode: Option<String>,
    pub status: bool,
}

impl Default for CityDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            state: String::new(),
            country: String::new(),
            pincode: None,
            status: true,
        }
    }
}

impl FormSchema for CityDto {
    type Payload = CityDto;

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn get_field(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "state" => Some(self.state.clone()),
            "country" => Some(self.country.clone()),
            "pincode" => Some(self.pincode.clone().unwrap_or_default()),
            "status" => Some(flag_text(self.status)),
            _ => None,
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "name" => self.name = value,
            "state" => self.state = value,
            "country" => self.country = value,
            "pincode" => self.pincode = optional_text(value),
            "status" => self.status = parse_flag(&value),
            _ => return false,
        }
        true
    }

    fn validate_rules(&self) -> Result<(), ValidationError> {
        if let Some(pincode) = &self.pincode {
            if !pincode.trim().chars().all(|c| c.is_ascii_digit()) {
                return Err(ValidationError::Rule(
                    "Pincode must contain digits only".to_string(),
                ));
            }
        }
        Ok(())
    }

    fn payload(&self) -> Result<CityDto, ValidationError> {
        Ok(CityDto {
            pincode: self.pincode.as_ref().map(|p| p.trim().to_string()),
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;

    #[test]
    fn test_pincode_rules() {
        let mut form = FormState::<CityDto>::new();
        for (field, value) in [("name", "Pune"), ("state", "Maharashtra"), ("country", "India")] {
            form.set_field(field, value.to_string()).unwrap();
        }
        assert!(form.submit().is_ok());

        form.set_field("pincode", "4110".into()).unwrap();
        assert_eq!(
            form.submit(),
            Err(ValidationError::TooShort { label: "Pincode", min: 6 })
        );

        form.set_field("pincode", "41100a".into()).unwrap();
        assert_eq!(
            form.submit().unwrap_err().to_string(),
            "Pincode must contain digits only"
        );

        form.set_field("pincode", " 411001 ".into()).unwrap();
        assert_eq!(form.submit().unwrap().pincode.as_deref(), Some("411001"));
    }

    #[test]
    fn test_search_on_state_and_country() {
        let city: City = serde_json::from_str(
            r#"{"id":1,"name":"Pune","state":"Maharashtra","country":"India","status":false}"#,
        )
        .unwrap();
        assert!(city.matches_filter("maha"));
        assert!(city.matches_filter("INDIA"));
        assert!(!city.status);
        assert_eq!(City::list_columns().len(), 4);
    }
}
