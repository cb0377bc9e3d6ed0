use crate::domain::common::{default_active, AggregateRoot, EntityMetadata, RecordId};
use crate::shared::form::{flag_text, optional_text, parse_flag, FormSchema};
use crate::shared::list::{Identified, Searchable, Sortable};
use crate::shared::metadata::{FieldKind, FieldMetadata, ValidationError, ValidationRules};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;

const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// Aggregate Root
// ============================================================================

/// Запись журнала настроения ученика
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogMood {
    pub id: RecordId,
    pub student_name: String,
    #[serde(default)]
    pub emotion_name: String,
    /// Интенсивность 1..10
    pub intensity: u8,
    #[serde(deserialize_with = "deserialize_day")]
    pub logged_on: NaiveDate,
    pub note: Option<String>,
    #[serde(default = "default_active")]
    pub status: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

/// Сервер отдаёт `loggedOn` то датой, то полной ISO-меткой времени
/// (`2024-03-15T00:00:00.000Z`); от метки берём календарный день.
fn parse_day(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

fn deserialize_day<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_day(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid loggedOn date: '{}'", raw)))
}

impl Identified for LogMood {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Searchable for LogMood {
    const SEARCH_FIELDS: &'static [&'static str] = &["studentName", "emotionName"];

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "studentName" => Some(self.student_name.clone()),
            "emotionName" => Some(self.emotion_name.clone()),
            "intensity" => Some(self.intensity.to_string()),
            "loggedOn" => Some(self.logged_on.format(DATE_FORMAT).to_string()),
            "note" => Some(self.note.clone().unwrap_or_default()),
            _ => None,
        }
    }
}

impl Sortable for LogMood {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "intensity" => self.intensity.cmp(&other.intensity),
            "loggedOn" => self.logged_on.cmp(&other.logged_on),
            _ => {
                let left = self.get_field_value(field).unwrap_or_default().to_lowercase();
                let right = other.get_field_value(field).unwrap_or_default().to_lowercase();
                left.cmp(&right)
            }
        }
    }
}

impl AggregateRoot for LogMood {
    type Dto = LogMoodDto;

    fn status(&self) -> bool {
        self.status
    }

    fn display_name(&self) -> &str {
        &self.student_name
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> LogMoodDto {
        LogMoodDto {
            student_name: self.student_name.clone(),
            emotion_name: self.emotion_name.clone(),
            intensity: self.intensity.to_string(),
            logged_on: self.logged_on.format(DATE_FORMAT).to_string(),
            note: self.note.clone(),
            status: self.status,
        }
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn entity_name() -> &'static str {
        "log_mood"
    }

    fn collection_name() -> &'static str {
        "log-moods"
    }

    fn element_name() -> &'static str {
        "Mood log"
    }

    fn list_name() -> &'static str {
        "Mood logs"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("studentName", "Student", FieldKind::Text).required(),
    FieldMetadata::new("emotionName", "Emotion", FieldKind::Text).required(),
    FieldMetadata::new("intensity", "Intensity", FieldKind::Number)
        .rules(ValidationRules::required().with_range(1.0, 10.0))
        .placeholder("1 - 10"),
    FieldMetadata::new("loggedOn", "Logged on", FieldKind::Date).required(),
    FieldMetadata::new("note", "Note", FieldKind::LongText).form_only(),
    FieldMetadata::new("status", "Active", FieldKind::Boolean).form_only(),
];

/// Форма записи настроения; число и дата хранятся как введённый текст
#[derive(Debug, Clone, PartialEq)]
pub struct LogMoodDto {
    pub student_name: String,
    pub emotion_name: String,
    pub intensity: String,
    pub logged_on: String,
    pub note: Option<String>,
    pub status: bool,
}

impl Default for LogMoodDto {
    fn default() -> Self {
        Self {
            student_name: String::new(),
            emotion_name: String::new(),
            intensity: String::new(),
            logged_on: String::new(),
            note: None,
            status: true,
        }
    }
}

/// Тело запроса создания/обновления записи настроения
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogMoodPayload {
    pub student_name: String,
    pub emotion_name: String,
    pub intensity: u8,
    pub logged_on: NaiveDate,
    pub note: Option<String>,
    pub status: bool,
}

impl FormSchema for LogMoodDto {
    type Payload = LogMoodPayload;

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn get_field(&self, field: &str) -> Option<String> {
        match field {
            "studentName" => Some(self.student_name.clone()),
            "emotionName" => Some(self.emotion_name.clone()),
            "intensity" => Some(self.intensity.clone()),
            "loggedOn" => Some(self.logged_on.clone()),
            "note" => Some(self.note.clone().unwrap_or_default()),
            "status" => Some(flag_text(self.status)),
            _ => None,
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "studentName" => self.student_name = value,
            "emotionName" => self.emotion_name = value,
            "intensity" => self.intensity = value,
            "loggedOn" => self.logged_on = value,
            "note" => self.note = optional_text(value),
            "status" => self.status = parse_flag(&value),
            _ => return false,
        }
        true
    }

    fn payload(&self) -> Result<LogMoodPayload, ValidationError> {
        let intensity = self
            .intensity
            .trim()
            .parse::<u8>()
            .map_err(|_| ValidationError::Rule("Intensity must be a whole number".to_string()))?;
        let logged_on = NaiveDate::parse_from_str(self.logged_on.trim(), DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate { label: "Logged on" })?;

        Ok(LogMoodPayload {
            student_name: self.student_name.trim().to_string(),
            emotion_name: self.emotion_name.trim().to_string(),
            intensity,
            logged_on,
            note: self.note.clone(),
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;
    use crate::shared::list::PaginatedListController;

    fn entry(id: i64, student: &str, intensity: u8, day: u32) -> LogMood {
        LogMood {
            id: RecordId::Number(id),
            student_name: student.to_string(),
            emotion_name: "Happy".to_string(),
            intensity,
            logged_on: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            note: None,
            status: true,
            metadata: EntityMetadata::default(),
        }
    }

    #[test]
    fn test_wire_shape() {
        let log: LogMood = serde_json::from_str(
            r#"{"id":4,"studentName":"Asha","emotionName":"Calm","intensity":6,"loggedOn":"2024-03-15"}"#,
        )
        .unwrap();
        assert_eq!(log.intensity, 6);
        assert_eq!(log.display_name(), "Asha");
        assert_eq!(log.get_field_value("loggedOn").as_deref(), Some("2024-03-15"));
        assert_eq!(LogMood::full_name(), "a008_log_mood");
    }

    #[test]
    fn test_logged_on_accepts_date_and_timestamp() {
        let logs: Vec<LogMood> = serde_json::from_str(
            r#"[
                {"id":1,"studentName":"Asha","intensity":6,"loggedOn":"2024-03-15"},
                {"id":2,"studentName":"Ravi","intensity":3,"loggedOn":"2024-03-16T00:00:00.000Z"},
                {"id":3,"studentName":"Meena","intensity":8,"loggedOn":"2024-03-17T09:30:00"}
            ]"#,
        )
        .unwrap();
        let days: Vec<String> = logs
            .iter()
            .map(|log| log.get_field_value("loggedOn").unwrap_or_default())
            .collect();
        assert_eq!(days, vec!["2024-03-15", "2024-03-16", "2024-03-17"]);

        let broken = serde_json::from_str::<LogMood>(
            r#"{"id":4,"studentName":"Asha","intensity":6,"loggedOn":"15/03/2024"}"#,
        );
        assert!(broken.is_err());
    }

    #[test]
    fn test_payload_is_typed() {
        let mut form = FormState::<LogMoodDto>::new();
        form.set_field("studentName", "Asha".into()).unwrap();
        form.set_field("emotionName", "Calm".into()).unwrap();
        form.set_field("intensity", "11".into()).unwrap();
        form.set_field("loggedOn", "2024-03-15".into()).unwrap();
        assert!(matches!(
            form.submit(),
            Err(ValidationError::OutOfRange { label: "Intensity", .. })
        ));

        form.set_field("intensity", "7".into()).unwrap();
        let body = serde_json::to_value(form.submit().unwrap()).unwrap();
        assert_eq!(body["intensity"], 7);
        assert_eq!(body["loggedOn"], "2024-03-15");

        form.set_field("loggedOn", "15/03/2024".into()).unwrap();
        assert_eq!(
            form.submit(),
            Err(ValidationError::InvalidDate { label: "Logged on" })
        );
    }

    #[test]
    fn test_sort_by_intensity_and_date() {
        let mut list = PaginatedListController::new(vec![
            entry(1, "A", 9, 3),
            entry(2, "B", 10, 1),
            entry(3, "C", 2, 2),
        ]);
        list.toggle_sort("intensity");
        let order: Vec<&str> = list
            .visible_records()
            .iter()
            .map(|r| r.student_name.as_str())
            .collect();
        // "10" < "2" as text, numeric ordering keeps 10 last
        assert_eq!(order, vec!["C", "A", "B"]);

        list.toggle_sort("loggedOn");
        let order: Vec<&str> = list
            .visible_records()
            .iter()
            .map(|r| r.student_name.as_str())
            .collect();
        assert_eq!(order, vec!["B", "C", "A"]);
    }
}
