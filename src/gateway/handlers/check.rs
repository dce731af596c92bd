//! Username availability handler

use axum::extract::Path;
use serde::Serialize;
use utoipa::ToSchema;

use crate::username::is_valid_username;

use super::super::types::{ApiResult, ok};

/// Username check response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    #[schema(example = true)]
    pub success: bool,
    /// The username as received
    #[schema(example = "growth_guru")]
    pub username: String,
    #[schema(example = true)]
    pub is_valid: bool,
    #[schema(example = "Username is valid and ready for order")]
    pub message: String,
}

/// Check a username's format
///
/// Pure format validation; the handle is never looked up anywhere. The
/// response is `success: true` even for invalid usernames, the verdict
/// lives in `isValid`.
///
/// GET /api/check/{username}
#[utoipa::path(
    get,
    path = "/api/check/{username}",
    params(
        ("username" = String, Path, description = "Instagram handle to validate")
    ),
    responses(
        (status = 200, description = "Validation verdict", body = CheckResponse)
    ),
    tag = "Services"
)]
pub async fn check_username(Path(username): Path<String>) -> ApiResult<CheckResponse> {
    let is_valid = is_valid_username(&username);
    let message = if is_valid {
        "Username is valid and ready for order"
    } else {
        "Invalid username format"
    };
    ok(CheckResponse {
        success: true,
        username,
        is_valid,
        message: message.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_check_valid_username() {
        let (status, body) = check_username(Path("insta.fan_99".to_string()))
            .await
            .unwrap();
        assert_eq!(status, axum::http::StatusCode::OK);
        assert!(body.success);
        assert!(body.is_valid);
        assert_eq!(body.username, "insta.fan_99");
        assert_eq!(body.message, "Username is valid and ready for order");
    }

    #[tokio::test]
    async fn test_check_invalid_username_still_succeeds() {
        let (status, body) = check_username(Path("not a handle!".to_string()))
            .await
            .unwrap();
        assert_eq!(status, axum::http::StatusCode::OK);
        assert!(body.success);
        assert!(!body.is_valid);
        assert_eq!(body.message, "Invalid username format");
    }

    #[tokio::test]
    async fn test_check_overlong_username() {
        let name = "x".repeat(31);
        let (_, body) = check_username(Path(name.clone())).await.unwrap();
        assert!(!body.is_valid);
        assert_eq!(body.username, name);
    }

    #[tokio::test]
    async fn test_check_json_shape() {
        let (_, body) = check_username(Path("alice".to_string())).await.unwrap();
        let json = serde_json::to_value(&body.0).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["isValid"], true);
        assert!(json.get("is_valid").is_none());
    }
}
