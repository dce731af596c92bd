//! Order tracking handler

use axum::extract::Path;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::OrderStatus;
use crate::simulation;

use super::super::types::{ApiResult, ok};
use super::helpers::now_iso;

/// Tracking response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackResponse {
    #[schema(example = true)]
    pub success: bool,
    /// The id as received; no lookup happens
    #[schema(example = "ORD1755859200000417")]
    pub order_id: String,
    pub status: OrderStatus,
    /// Percent complete, 0..=100
    #[schema(example = 67)]
    pub progress: u8,
    /// Units delivered so far; tracks `progress` exactly
    #[schema(example = 67)]
    pub delivered: u8,
    /// `"N hours"` while processing, `"Completed"` at 100
    #[schema(example = "5 hours")]
    pub estimated_time_remaining: String,
    #[schema(example = "2026-08-22T09:30:00.000Z")]
    pub last_updated: String,
}

/// Track an order
///
/// Any id is accepted and echoed back; progress is drawn fresh per call,
/// so the same order can report 90% and then 12%. `completed` appears
/// exactly when progress hits 100.
///
/// GET /api/track/{order_id}
#[utoipa::path(
    get,
    path = "/api/track/{order_id}",
    params(
        ("order_id" = String, Path, description = "Order id returned at placement")
    ),
    responses(
        (status = 200, description = "Simulated progress snapshot", body = TrackResponse)
    ),
    tag = "Orders"
)]
pub async fn track_order(Path(order_id): Path<String>) -> ApiResult<TrackResponse> {
    let progress = simulation::delivery_progress();
    let status = if progress == 100 {
        OrderStatus::Completed
    } else {
        OrderStatus::Processing
    };
    let estimated_time_remaining = if status == OrderStatus::Completed {
        "Completed".to_string()
    } else {
        format!("{} hours", simulation::hours_remaining())
    };

    ok(TrackResponse {
        success: true,
        order_id,
        status,
        progress,
        delivered: progress,
        estimated_time_remaining,
        last_updated: now_iso(),
    })
}
