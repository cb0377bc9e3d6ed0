use crate::shared::metadata::ValidationError;
use std::fmt;
use thiserror::Error;

/// Failure of a single HTTP call, normalised by the resource client
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Build a status error from a non-2xx response body.
    ///
    /// Uses the `message` or `error` field of a JSON body when present,
    /// otherwise the trimmed body text, otherwise the reason phrase.
    pub fn from_status(status: u16, body: &str) -> Self {
        let from_json = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                ["message", "error"]
                    .iter()
                    .find_map(|key| value.get(key).and_then(|v| v.as_str()).map(str::to_string))
            });

        let message = match from_json {
            Some(message) => message,
            None if !body.trim().is_empty() => body.trim().chars().take(200).collect(),
            None => reason_phrase(status).to_string(),
        };

        Self::Status { status, message }
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        409 => "Conflict",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Request failed",
    }
}

/// Which write operation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
    ToggleStatus,
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::ToggleStatus => "toggle status of",
        })
    }
}

/// Error shown inline on a resource page
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PageError {
    #[error("Failed to load records: {0}")]
    Fetch(#[source] ApiError),

    #[error("Failed to {kind} record: {source}")]
    Mutation {
        kind: MutationKind,
        #[source]
        source: ApiError,
    },

    #[error("{0}")]
    Validation(#[from] ValidationError),
}

impl PageError {
    pub fn mutation(kind: MutationKind, source: ApiError) -> Self {
        Self::Mutation { kind, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_prefers_json_message() {
        let err = ApiError::from_status(409, r#"{"message":"Board name already exists"}"#);
        assert_eq!(err.to_string(), "HTTP 409: Board name already exists");

        let err = ApiError::from_status(400, r#"{"error":"bad id"}"#);
        assert_eq!(err.to_string(), "HTTP 400: bad id");
    }

    #[test]
    fn test_from_status_falls_back_to_text_and_reason() {
        assert_eq!(
            ApiError::from_status(500, "  boom \n").to_string(),
            "HTTP 500: boom"
        );
        let not_found = ApiError::from_status(404, "");
        assert_eq!(not_found.to_string(), "HTTP 404: Not Found");
    }

    #[test]
    fn test_page_error_messages() {
        let fetch = PageError::Fetch(ApiError::Network("offline".into()));
        assert_eq!(fetch.to_string(), "Failed to load records: Network error: offline");

        let toggle = PageError::mutation(
            MutationKind::ToggleStatus,
            ApiError::from_status(404, ""),
        );
        assert_eq!(
            toggle.to_string(),
            "Failed to toggle status of record: HTTP 404: Not Found"
        );

        let validation: PageError = ValidationError::Required { label: "Institute" }.into();
        assert_eq!(validation.to_string(), "Institute is required");
    }
}
