//! API root handler: service banner and endpoint directory

use serde::Serialize;
use utoipa::ToSchema;

use super::super::types::{ApiResult, ok};

/// Directory of the main API endpoints
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDirectory {
    #[schema(example = "/api/services")]
    pub get_services: String,
    #[schema(example = "/api/stats")]
    pub get_stats: String,
    #[schema(example = "/api/check/:username")]
    pub check_username: String,
    #[schema(example = "/api/order (POST)")]
    pub simulate_order: String,
}

/// Root response: liveness banner plus the endpoint directory
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiInfo {
    #[schema(example = "active")]
    pub status: String,
    #[schema(example = "Instagram Followers API")]
    pub message: String,
    pub endpoints: EndpointDirectory,
    #[schema(example = "1.0.0")]
    pub version: String,
}

/// Service banner
///
/// GET /
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner and endpoint directory", body = ApiInfo)
    ),
    tag = "System"
)]
pub async fn api_info() -> ApiResult<ApiInfo> {
    ok(ApiInfo {
        status: "active".to_string(),
        message: "Instagram Followers API".to_string(),
        endpoints: EndpointDirectory {
            get_services: "/api/services".to_string(),
            get_stats: "/api/stats".to_string(),
            check_username: "/api/check/:username".to_string(),
            simulate_order: "/api/order (POST)".to_string(),
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_api_info_banner() {
        let (status, body) = api_info().await.unwrap();
        assert_eq!(status, axum::http::StatusCode::OK);
        assert_eq!(body.status, "active");
        assert_eq!(body.message, "Instagram Followers API");
        assert_eq!(body.version, "1.0.0");
    }

    #[tokio::test]
    async fn test_api_info_directory_serializes_camel_case() {
        let (_, body) = api_info().await.unwrap();
        let json = serde_json::to_value(&body.0).unwrap();
        let endpoints = &json["endpoints"];
        assert_eq!(endpoints["getServices"], "/api/services");
        assert_eq!(endpoints["getStats"], "/api/stats");
        assert_eq!(endpoints["checkUsername"], "/api/check/:username");
        assert_eq!(endpoints["simulateOrder"], "/api/order (POST)");
        // The banner has no `success` flag, unlike the /api responses
        assert!(json.get("success").is_none());
    }
}
