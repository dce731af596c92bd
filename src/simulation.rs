//! Simulated platform data
//!
//! Everything random in the API is produced here: dashboard statistics,
//! order identifiers, delivery progress. Values are drawn fresh on every
//! call and never stored, so two requests never agree with each other.

use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Dashboard statistics, fabricated per request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteStats {
    #[schema(example = 12453)]
    pub total_orders: u32,
    #[schema(example = 3811)]
    pub active_users: u32,
    #[schema(example = 934201)]
    pub followers_delivered: u32,
    /// Fixed marketing figure
    #[schema(example = "98.5%")]
    pub satisfaction_rate: String,
    /// Fixed marketing figure
    #[schema(example = "99.9%")]
    pub uptime: String,
}

/// Draw a fresh set of dashboard numbers
pub fn site_stats() -> SiteStats {
    let mut rng = rand::thread_rng();
    SiteStats {
        total_orders: rng.gen_range(5_000..15_000),
        active_users: rng.gen_range(1_000..6_000),
        followers_delivered: rng.gen_range(500_000..1_500_000),
        satisfaction_rate: "98.5%".to_string(),
        uptime: "99.9%".to_string(),
    }
}

/// Build an order identifier from the placement time
///
/// `ORD` + unix milliseconds + a random suffix. The suffix keeps ids from
/// colliding when two orders land in the same millisecond.
pub fn order_id(placed_at_ms: u64) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..1000);
    format!("ORD{}{}", placed_at_ms, suffix)
}

/// Sampled delivery progress percentage, 0..=100
///
/// 100 must be reachable: it is the only value that reports an order as
/// completed.
pub fn delivery_progress() -> u8 {
    rand::thread_rng().gen_range(0..=100)
}

/// Fabricated hours-remaining estimate for in-flight orders, 1..=12
pub fn hours_remaining() -> u8 {
    rand::thread_rng().gen_range(1..=12)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_stats_within_ranges() {
        for _ in 0..200 {
            let stats = site_stats();
            assert!((5_000..15_000).contains(&stats.total_orders));
            assert!((1_000..6_000).contains(&stats.active_users));
            assert!((500_000..1_500_000).contains(&stats.followers_delivered));
            assert_eq!(stats.satisfaction_rate, "98.5%");
            assert_eq!(stats.uptime, "99.9%");
        }
    }

    #[test]
    fn test_site_stats_serializes_camel_case() {
        let json = serde_json::to_value(site_stats()).unwrap();
        assert!(json.get("totalOrders").is_some());
        assert!(json.get("activeUsers").is_some());
        assert!(json.get("followersDelivered").is_some());
        assert!(json.get("satisfactionRate").is_some());
        assert!(json.get("total_orders").is_none());
    }

    #[test]
    fn test_order_id_format() {
        for _ in 0..100 {
            let id = order_id(1_700_000_000_000);
            assert!(id.starts_with("ORD1700000000000"), "bad id: {}", id);
            let suffix = &id["ORD1700000000000".len()..];
            assert!((1..=3).contains(&suffix.len()), "bad suffix: {}", id);
            assert!(suffix.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_delivery_progress_bounds() {
        for _ in 0..500 {
            assert!(delivery_progress() <= 100);
        }
    }

    #[test]
    fn test_delivery_progress_varies() {
        let first = delivery_progress();
        let varied = (0..500).any(|_| delivery_progress() != first);
        assert!(varied, "500 identical draws");
    }

    #[test]
    fn test_hours_remaining_bounds() {
        for _ in 0..500 {
            let hours = hours_remaining();
            assert!((1..=12).contains(&hours), "out of range: {}", hours);
        }
    }
}
