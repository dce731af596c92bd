//! Order request types and validation
//!
//! - `OrderRequest`: HTTP request deserialization, every field optional
//! - `ValidatedOrder`: order with all required fields present
//! - `OrderPayload`: axum extractor that rejects before the handler runs

use serde::Deserialize;
use utoipa::ToSchema;

use axum::{
    Json,
    extract::{Form, FromRequest, Request},
    http::header,
};

use super::response::ApiError;

// ============================================================================
// OrderRequest: HTTP Request Deserialization
// ============================================================================

/// Raw order submission
///
/// This struct is used for HTTP deserialization only; every field is
/// optional at this layer. Presence checks happen in
/// [`validate_order_request`], not in serde.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Target profile
    #[schema(example = "growth_guru")]
    pub username: Option<String>,
    /// Catalog service id
    #[schema(example = 1)]
    pub service_id: Option<u32>,
    /// Units to deliver
    #[schema(example = 500)]
    pub quantity: Option<u32>,
    /// Confirmation address, format not checked
    #[schema(example = "guru@example.com")]
    pub email: Option<String>,
}

// ============================================================================
// ValidatedOrder: Required Fields Present
// ============================================================================

/// Order submission with every required field present and non-empty
#[derive(Debug, Clone)]
pub struct ValidatedOrder {
    pub username: String,
    pub service_id: u32,
    pub quantity: u32,
    pub email: String,
}

/// Check that every order field is present
///
/// An empty string or a zero id/quantity counts as missing. Clients get
/// one aggregate message either way, never a field-by-field breakdown.
pub fn validate_order_request(req: OrderRequest) -> Result<ValidatedOrder, &'static str> {
    const MISSING: &str = "Missing required fields";

    let username = req.username.filter(|u| !u.is_empty()).ok_or(MISSING)?;
    let service_id = req.service_id.filter(|&id| id > 0).ok_or(MISSING)?;
    let quantity = req.quantity.filter(|&q| q > 0).ok_or(MISSING)?;
    let email = req.email.filter(|e| !e.is_empty()).ok_or(MISSING)?;

    Ok(ValidatedOrder {
        username,
        service_id,
        quantity,
        email,
    })
}

// ============================================================================
// OrderPayload: Axum Framework Integration
// ============================================================================

/// Validated order extractor
///
/// Performs body parsing and field validation at the framework level, so
/// the handler only ever sees complete orders. JSON is the primary body
/// format; plain HTML-form submissions (`application/x-www-form-urlencoded`)
/// decode into the same fields. Malformed bodies and missing fields both
/// produce the standard 400 envelope.
#[derive(Debug)]
pub struct OrderPayload(pub ValidatedOrder);

fn is_form_content_type(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

impl<S> FromRequest<S> for OrderPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let raw: OrderRequest = if is_form_content_type(&req) {
            let Form(raw) = Form::from_request(req, state)
                .await
                .map_err(|e| ApiError::bad_request(format!("Invalid form body: {}", e)))?;
            raw
        } else {
            let Json(raw) = Json::from_request(req, state)
                .await
                .map_err(|e| ApiError::bad_request(format!("Invalid JSON: {}", e)))?;
            raw
        };

        let order = validate_order_request(raw).map_err(ApiError::bad_request)?;

        Ok(OrderPayload(order))
    }
}
