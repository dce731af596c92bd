//! API error envelope and handler result helpers
//!
//! - `ApiError`: typed error that renders as `{"success": false, "error": ...}`
//! - `ApiResult<T>`: unified handler return type
//! - `ok()`: 200 wrapper for success payloads

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

// ============================================================================
// Error Envelope
// ============================================================================

/// Body of every non-2xx response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Always false on errors
    #[schema(example = false)]
    pub success: bool,
    /// Short human-readable description
    #[schema(example = "Missing required fields")]
    pub error: String,
}

/// API-facing error, paired one-to-one with an HTTP status
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Shorthand for early returns inside `ApiResult` handlers
    pub fn into_err<T>(self) -> ApiResult<T> {
        Err(self)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("internal error surfaced to client: {}", self);
        }
        let body = Json(ErrorBody {
            success: false,
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

// ============================================================================
// Handler Result Helpers
// ============================================================================

/// Unified handler result: explicit status + JSON body, or the error envelope
pub type ApiResult<T> = Result<(StatusCode, Json<T>), ApiError>;

/// Wrap a success payload in 200 OK
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(data)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody {
            success: false,
            error: "Endpoint not found".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Endpoint not found");
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_api_error_status_mapping() {
        assert_eq!(
            ApiError::bad_request("x").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::internal("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_api_error_message_passthrough() {
        let err = ApiError::bad_request("Missing required fields");
        assert_eq!(err.to_string(), "Missing required fields");
    }

    #[test]
    fn test_into_err_is_err() {
        let result: ApiResult<()> = ApiError::not_found("gone").into_err();
        assert!(result.is_err());
    }
}
