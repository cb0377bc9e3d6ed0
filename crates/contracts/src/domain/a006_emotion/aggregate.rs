use crate::domain::common::{default_active, AggregateRoot, EntityMetadata, RecordId};
use crate::shared::form::{flag_text, optional_text, parse_flag, FormSchema};
use crate::shared::list::{Identified, Searchable, Sortable};
use crate::shared::metadata::{FieldKind, FieldMetadata, ValidationError, ValidationRules};
use serde::{Deserialize, Serialize};

/// Эмоция из справочника настроений
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Emotion {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub emoji: Option<String>,
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub status: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Identified for Emotion {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Searchable for Emotion {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "category", "description"];

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "category" => Some(self.category.clone()),
            "emoji" => Some(self.emoji.clone().unwrap_or_default()),
            "description" => Some(self.description.clone().unwrap_or_default()),
            _ => None,
        }
    }
}

impl Sortable for Emotion {}

impl AggregateRoot for Emotion {
    type Dto = EmotionDto;

    fn status(&self) -> bool {
        self.status
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> EmotionDto {
        EmotionDto {
            name: self.name.clone(),
            category: self.category.clone(),
            emoji: self.emoji.clone(),
            description: self.description.clone(),
            status: self.status,
        }
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn entity_name() -> &'static str {
        "emotion"
    }

    fn collection_name() -> &'static str {
        "emotions"
    }

    fn element_name() -> &'static str {
        "Emotion"
    }

    fn list_name() -> &'static str {
        "Emotions"
    }
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("name", "Name", FieldKind::Text)
        .required()
        .placeholder("e.g. Happy"),
    FieldMetadata::new("category", "Category", FieldKind::Text)
        .required()
        .placeholder("Positive / Negative / Neutral"),
    FieldMetadata::new("emoji", "Emoji", FieldKind::Text)
        .rules(ValidationRules::none().with_length(None, Some(8))),
    FieldMetadata::new("description", "Description", FieldKind::LongText),
    FieldMetadata::new("status", "Active", FieldKind::Boolean).form_only(),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionDto {
    pub name: String,
    pub category: String,
    pub emoji: Option<String>,
    pub description: Option<String>,
    pub status: bool,
}

impl Default for EmotionDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            emoji: None,
            description: None,
            status: true,
        }
    }
}

impl FormSchema for EmotionDto {
    type Payload = EmotionDto;

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn get_field(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "category" => Some(self.category.clone()),
            "emoji" => Some(self.emoji.clone().unwrap_or_default()),
            "description" => Some(self.description.clone().unwrap_or_default()),
            "status" => Some(flag_text(self.status)),
            _ => None,
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "name" => self.name = value,
            "category" => self.category = value,
            "emoji" => self.emoji = optional_text(value),
            "description" => self.description = optional_text(value),
            "status" => self.status = parse_flag(&value),
            _ => return false,
        }
        true
    }

    fn payload(&self) -> Result<EmotionDto, ValidationError> {
        Ok(EmotionDto {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            emoji: self.emoji.as_ref().map(|e| e.trim().to_string()),
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;

    #[test]
    fn test_description_is_searchable() {
        let emotion: Emotion = serde_json::from_str(
            r#"{"id":1,"name":"Calm","category":"Positive","description":"Relaxed and at ease"}"#,
        )
        .unwrap();
        assert!(emotion.matches_filter("relaxed"));
        assert!(emotion.matches_filter("posit"));
        assert!(!emotion.matches_filter("angry"));
        assert_eq!(Emotion::list_columns().len(), 4);
    }

    #[test]
    fn test_emoji_length_limit() {
        let mut form = FormState::<EmotionDto>::new();
        form.set_field("name", "Happy".into()).unwrap();
        form.set_field("category", "Positive".into()).unwrap();
        form.set_field("emoji", "😀".into()).unwrap();
        assert_eq!(form.submit().unwrap().emoji.as_deref(), Some("😀"));

        form.set_field("emoji", "very happy face".into()).unwrap();
        assert_eq!(
            form.submit(),
            Err(ValidationError::TooLong { label: "Emoji", max: 8 })
        );
    }
}
