use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Метки времени записи, как их отдаёт сервер (могут отсутствовать)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMetadata {
    /// Дата создания записи
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Дата последнего обновления
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl EntityMetadata {
    pub fn format_created(&self) -> String {
        format_timestamp(self.created_at)
    }

    pub fn format_updated(&self) -> String {
        format_timestamp(self.updated_at)
    }
}

fn format_timestamp(dt: Option<DateTime<Utc>>) -> String {
    dt.map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}
