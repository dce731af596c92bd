//! Order placement handler

use std::time::Duration as StdDuration;

use chrono::{Duration, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Order, OrderStatus};
use crate::simulation;

use super::super::types::{ApiError, ApiResult, ErrorBody, OrderPayload, OrderRequest, ok};
use super::helpers::to_iso;

/// Order placement response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Order created successfully")]
    pub message: String,
    pub order: Order,
    /// What the customer is told happens next (nothing does)
    pub next_steps: Vec<String>,
}

/// Place a simulated order
///
/// Fabricates an order record and returns it. The only side effect is a
/// delayed log line standing in for fulfillment; the record itself is
/// gone once the response is sent.
///
/// POST /api/order
#[utoipa::path(
    post,
    path = "/api/order",
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order created", body = OrderResponse),
        (status = 400, description = "Missing or empty fields", body = ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn create_order(OrderPayload(order): OrderPayload) -> ApiResult<OrderResponse> {
    let placed_at = Utc::now();
    let order_id = simulation::order_id(placed_at.timestamp_millis() as u64);

    let completion = match placed_at.checked_add_signed(Duration::hours(24)) {
        Some(t) => t,
        None => return ApiError::internal("Completion time out of range").into_err(),
    };

    let record = Order {
        order_id: order_id.clone(),
        username: order.username.clone(),
        service_id: order.service_id,
        quantity: order.quantity,
        email: order.email,
        status: OrderStatus::Processing,
        start_time: to_iso(placed_at),
        estimated_completion: to_iso(completion),
        progress: 0,
    };

    // Simulated fulfillment kick-off; nothing awaits this
    let username = order.username;
    tokio::spawn(async move {
        tokio::time::sleep(StdDuration::from_secs(1)).await;
        tracing::info!("Order {} processed for {}", order_id, username);
    });

    ok(OrderResponse {
        success: true,
        message: "Order created successfully".to_string(),
        order: record,
        next_steps: vec![
            "Check your email for confirmation".to_string(),
            "Order will start within 1-2 hours".to_string(),
            "Track progress using order ID".to_string(),
        ],
    })
}
