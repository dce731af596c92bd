//! OpenAPI / Swagger UI Documentation
//!
//! Auto-generated OpenAPI 3.0 documentation for the mock API.
//!
//! - Swagger UI: `http://localhost:3000/docs`
//! - OpenAPI JSON: `http://localhost:3000/api-docs/openapi.json`

use utoipa::OpenApi;

// Import handler types for schema registration
use crate::catalog::ServiceInfo;
use crate::gateway::handlers::{
    ApiInfo, CheckResponse, EndpointDirectory, OrderResponse, ServicesResponse, StatsResponse,
    TrackResponse,
};
use crate::gateway::types::{ErrorBody, OrderRequest};
use crate::models::{Order, OrderStatus};
use crate::simulation::SiteStats;

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Instagram Followers API",
        version = "1.0.0",
        description = "Mock Instagram growth-services ordering API. Hardcoded catalog, simulated orders, zero persistence.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:3000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::info::api_info,
        crate::gateway::handlers::services::list_services,
        crate::gateway::handlers::stats::get_stats,
        crate::gateway::handlers::check::check_username,
        crate::gateway::handlers::order::create_order,
        crate::gateway::handlers::track::track_order,
    ),
    components(
        schemas(
            ApiInfo,
            EndpointDirectory,
            ServicesResponse,
            ServiceInfo,
            StatsResponse,
            SiteStats,
            CheckResponse,
            OrderRequest,
            OrderResponse,
            Order,
            OrderStatus,
            TrackResponse,
            ErrorBody,
        )
    ),
    tags(
        (name = "System", description = "Service banner and liveness"),
        (name = "Services", description = "Catalog browsing and username checks"),
        (name = "Stats", description = "Simulated platform statistics"),
        (name = "Orders", description = "Order placement and tracking")
    )
)]
pub struct ApiDoc;
