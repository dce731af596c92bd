//! Service catalog handler

use std::sync::Arc;

use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;

use crate::catalog::ServiceInfo;

use super::super::state::AppState;
use super::super::types::{ApiResult, ok};

/// Catalog listing response
#[derive(Debug, Serialize, ToSchema)]
pub struct ServicesResponse {
    #[schema(example = true)]
    pub success: bool,
    pub services: Vec<ServiceInfo>,
    /// Number of entries in `services`
    #[schema(example = 3)]
    pub count: usize,
}

/// List the marketed services
///
/// GET /api/services
#[utoipa::path(
    get,
    path = "/api/services",
    responses(
        (status = 200, description = "Full service catalog", body = ServicesResponse)
    ),
    tag = "Services"
)]
pub async fn list_services(State(state): State<Arc<AppState>>) -> ApiResult<ServicesResponse> {
    let services = state.services.to_vec();
    let count = services.len();
    ok(ServicesResponse {
        success: true,
        services,
        count,
    })
}
