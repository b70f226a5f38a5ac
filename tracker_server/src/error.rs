//! HTTP error translation.
//!
//! Maps core errors onto client-visible responses: not-found lookups become
//! 404, malformed input becomes 400, everything else is a 500 with the
//! detail kept in the server log rather than the response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracker_core::Error;

/// Result alias for request handlers
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// A client-visible error response
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::UserNotFound(_) | Error::LogNotFound(_) => Self::not_found(err.to_string()),
            Error::InvalidDate(_) | Error::InvalidLimit(_) => Self::bad_request(err.to_string()),
            other => {
                tracing::error!("Store operation failed: {}", other);
                Self::internal("Internal server error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::from(Error::UserNotFound(Uuid::new_v4()));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_date_maps_to_400() {
        let err = ApiError::from(Error::InvalidDate("yesterday".into()));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("yesterday"));
    }

    #[test]
    fn test_io_maps_to_opaque_500() {
        let err = ApiError::from(Error::Io(std::io::Error::other("disk gone")));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message.contains("disk"));
    }
}
