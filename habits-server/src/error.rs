//! Mapping from habit operation failures to JSON HTTP responses.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use habits::HabitError;
use serde_json::json;
use tracing::error;

/// Error returned by API handlers, rendered as `{"error": message}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<HabitError> for ApiError {
    fn from(err: HabitError) -> Self {
        let status = match &err {
            HabitError::Validation(_) => StatusCode::BAD_REQUEST,
            HabitError::NotFound(_) => StatusCode::NOT_FOUND,
            HabitError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, message = %self.message, "request failed");
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use habits::StorageError;

    #[test]
    fn habit_errors_map_to_status_codes() {
        let cases = [
            (
                HabitError::Validation("title is required".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (HabitError::NotFound("x".to_string()), StatusCode::NOT_FOUND),
            (
                HabitError::Storage(StorageError::Unavailable("down".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status, expected);
        }
    }

    #[test]
    fn not_found_message_names_the_id() {
        let api = ApiError::from(HabitError::NotFound("abc".to_string()));
        assert_eq!(api.message, "habit not found: abc");
    }
}
