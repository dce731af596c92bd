//! Gateway types module
//!
//! Type-safe API boundary enforcement:
//!
//! ## Input Types
//! - [`OrderRequest`]: order deserialization from HTTP requests
//! - [`ValidatedOrder`]: order with all required fields present
//! - [`OrderPayload`]: axum extractor for framework-level validation
//!
//! ## Output Types
//! - [`ApiError`] / [`ErrorBody`]: the `{"success": false, "error"}` envelope
//! - [`ApiResult<T>`]: unified handler return type

pub mod order;
pub mod response;

// Re-export commonly used types at module root
pub use order::{OrderPayload, OrderRequest, ValidatedOrder, validate_order_request};
pub use response::{ApiError, ApiResult, ErrorBody, ok};
