//! Order records returned by the API
//!
//! Orders exist only inside the response that announces them. Nothing is
//! written anywhere, which is the entire business model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle state reported for simulated orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Processing,
    Completed,
}

/// A freshly placed (simulated) order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// `ORD` + placement millis + random suffix
    #[schema(example = "ORD1755859200000417")]
    pub order_id: String,
    #[schema(example = "growth_guru")]
    pub username: String,
    /// Catalog service id, echoed from the request
    #[schema(example = 1)]
    pub service_id: u32,
    #[schema(example = 500)]
    pub quantity: u32,
    #[schema(example = "guru@example.com")]
    pub email: String,
    pub status: OrderStatus,
    /// Placement time, ISO-8601 UTC with millisecond precision
    #[schema(example = "2026-08-22T09:30:00.000Z")]
    pub start_time: String,
    /// Always 24 hours after placement
    #[schema(example = "2026-08-23T09:30:00.000Z")]
    pub estimated_completion: String,
    /// Percent complete, always 0 at placement
    #[schema(example = 0)]
    pub progress: u8,
}
