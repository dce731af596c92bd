//! Service catalog
//!
//! The three marketed services are fixed at compile time. There is no
//! admin surface to add or edit entries; the catalog is the product.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A marketed growth service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    /// Catalog ID, referenced by order requests
    #[schema(example = 1)]
    pub id: u32,
    #[schema(example = "Instagram Followers - High Quality")]
    pub name: String,
    pub description: String,
    /// Display price, not parsed anywhere
    #[schema(example = "$0.99 per 100")]
    pub price: String,
    #[schema(example = "24-48 hours")]
    pub delivery_time: String,
    /// Smallest orderable quantity
    #[schema(example = 100)]
    pub min_order: u32,
    /// Largest orderable quantity
    #[schema(example = 10000)]
    pub max_order: u32,
    pub features: Vec<String>,
}

static SERVICES: Lazy<Vec<ServiceInfo>> = Lazy::new(|| {
    vec![
        ServiceInfo {
            id: 1,
            name: "Instagram Followers - High Quality".to_string(),
            description: "Real and active followers with profile pictures".to_string(),
            price: "$0.99 per 100".to_string(),
            delivery_time: "24-48 hours".to_string(),
            min_order: 100,
            max_order: 10000,
            features: vec![
                "Real Profiles".to_string(),
                "No Password Required".to_string(),
                "Instant Start".to_string(),
            ],
        },
        ServiceInfo {
            id: 2,
            name: "Instagram Likes - Premium".to_string(),
            description: "High-quality likes from real accounts".to_string(),
            price: "$0.49 per 100".to_string(),
            delivery_time: "1-2 hours".to_string(),
            min_order: 100,
            max_order: 5000,
            features: vec![
                "Fast Delivery".to_string(),
                "Real Engagement".to_string(),
                "Safe".to_string(),
            ],
        },
        ServiceInfo {
            id: 3,
            name: "Instagram Views".to_string(),
            description: "Increase your video views instantly".to_string(),
            price: "$0.29 per 1000".to_string(),
            delivery_time: "Instant".to_string(),
            min_order: 1000,
            max_order: 50000,
            features: vec![
                "Instant Start".to_string(),
                "High Retention".to_string(),
                "All Countries".to_string(),
            ],
        },
    ]
});

/// All marketed services, in display order
pub fn all() -> &'static [ServiceInfo] {
    &SERVICES
}
