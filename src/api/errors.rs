use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::errors::RepositoryError;

/// API error type with HTTP status code and message
///
/// Always rendered as `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Maps a failed lookup: malformed id is 400, missing entity is 404
    pub fn from_lookup(err: RepositoryError, entity: &str) -> Self {
        match err {
            RepositoryError::InvalidId(id) => Self::bad_request(format!("Invalid {} id: {}", entity, id)),
            RepositoryError::NotFound => Self::not_found(format!("{} not found", capitalize(entity))),
            other => Self::internal_server_error(other.to_string()),
        }
    }

    /// Maps a failed update: malformed id or field is 400, missing entity is 404
    pub fn from_update(err: RepositoryError, entity: &str) -> Self {
        match err {
            RepositoryError::Validation(msg) => Self::bad_request(msg),
            other => Self::from_lookup(other, entity),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, error = %self.message, "Request failed");
        } else {
            tracing::debug!(status = %self.status, error = %self.message, "Request rejected");
        }

        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        Self::internal_server_error(err.to_string())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_maps_invalid_id_to_bad_request() {
        let err = ApiError::from_lookup(RepositoryError::InvalidId("abc".to_string()), "event");

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Invalid event id: abc");
    }

    #[test]
    fn lookup_maps_not_found() {
        let err = ApiError::from_lookup(RepositoryError::NotFound, "team");

        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Team not found");
    }

    #[test]
    fn lookup_maps_everything_else_to_internal() {
        let err = ApiError::from_lookup(RepositoryError::Database("boom".to_string()), "event");

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn update_maps_validation_to_bad_request() {
        let err = ApiError::from_update(RepositoryError::Validation("date is not a valid date: x".to_string()), "event");

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn repository_errors_default_to_internal() {
        let err: ApiError = RepositoryError::CreateFailed.into();

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
