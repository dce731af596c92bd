//! Platform statistics handler

use serde::Serialize;
use utoipa::ToSchema;

use crate::simulation::{self, SiteStats};

use super::super::types::{ApiResult, ok};
use super::helpers::now_iso;

/// Statistics response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[schema(example = true)]
    pub success: bool,
    pub stats: SiteStats,
    /// Time the numbers were drawn, ISO-8601 millis
    #[schema(example = "2026-08-22T09:30:00.000Z")]
    pub last_updated: String,
}

/// Platform statistics
///
/// Numbers are drawn fresh on every call; consecutive requests disagree
/// on purpose.
///
/// GET /api/stats
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Simulated platform statistics", body = StatsResponse)
    ),
    tag = "Stats"
)]
pub async fn get_stats() -> ApiResult<StatsResponse> {
    ok(StatsResponse {
        success: true,
        stats: simulation::site_stats(),
        last_updated: now_iso(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_stats_envelope() {
        let (status, body) = get_stats().await.unwrap();
        assert_eq!(status, axum::http::StatusCode::OK);
        assert!(body.success);
        assert!(body.last_updated.ends_with('Z'));
    }

    #[tokio::test]
    async fn test_get_stats_ranges() {
        for _ in 0..50 {
            let (_, body) = get_stats().await.unwrap();
            assert!((5_000..15_000).contains(&body.stats.total_orders));
            assert!((1_000..6_000).contains(&body.stats.active_users));
            assert!((500_000..1_500_000).contains(&body.stats.followers_delivered));
        }
    }

    #[tokio::test]
    async fn test_get_stats_json_shape() {
        let (_, body) = get_stats().await.unwrap();
        let json = serde_json::to_value(&body.0).unwrap();
        assert_eq!(json["success"], true);
        assert!(json["stats"]["totalOrders"].is_u64());
        assert_eq!(json["stats"]["satisfactionRate"], "98.5%");
        assert_eq!(json["stats"]["uptime"], "99.9%");
        assert!(json["lastUpdated"].is_string());
    }
}
