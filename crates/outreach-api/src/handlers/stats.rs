//! Dashboard statistics endpoint
//!
//! The admin dashboard renders per-collection stat panels; all figures
//! are derived server-side from the live tables rather than counted by
//! the client.

use crate::handlers::common::ApiError;
use crate::state::AppState;
use axum::{Json, extract::State};
use outreach_database::queries::{CollectionCounts, StatsQueries};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Stats for one collection panel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionStats {
    /// Total records
    pub total: i64,
    /// Records visible on the public site
    pub visible: i64,
    /// Share of records that are visible, 0-100
    pub visible_percent: f64,
}

impl From<CollectionCounts> for CollectionStats {
    #[allow(clippy::cast_precision_loss)]
    fn from(counts: CollectionCounts) -> Self {
        let visible_percent = if counts.total > 0 {
            (counts.visible as f64 / counts.total as f64) * 100.0
        } else {
            0.0
        };

        Self {
            total: counts.total,
            visible: counts.visible,
            visible_percent,
        }
    }
}

/// Dashboard statistics response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStatsResponse {
    /// Events panel
    pub events: CollectionStats,
    /// Newsletter panel; visible = active subscribers
    pub subscribers: CollectionStats,
    /// Volunteer opportunities panel
    pub opportunities: CollectionStats,
    /// Courses panel
    pub courses: CollectionStats,
    /// Legal cases panel; visible = cases not yet closed
    pub legal_cases: CollectionStats,
    /// Law lookup panel
    pub laws: CollectionStats,
    /// Testimonials panel
    pub testimonials: CollectionStats,
    /// Lectures panel
    pub lectures: CollectionStats,
    /// When the figures were gathered
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Gather dashboard statistics for every collection
pub async fn dashboard_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardStatsResponse>, ApiError> {
    let counts = StatsQueries::dashboard(&state.pool).await?;

    Ok(Json(DashboardStatsResponse {
        events: counts.events.into(),
        subscribers: counts.subscribers.into(),
        opportunities: counts.opportunities.into(),
        courses: counts.courses.into(),
        legal_cases: counts.legal_cases.into(),
        laws: counts.laws.into(),
        testimonials: counts.testimonials.into(),
        lectures: counts.lectures.into(),
        generated_at: chrono::Utc::now(),
    }))
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collection_stats_percentage() {
        let stats: CollectionStats = CollectionCounts {
            total: 4,
            visible: 3,
        }
        .into();
        assert_eq!(stats.visible_percent, 75.0);
    }

    #[test]
    fn test_collection_stats_empty_collection() {
        let stats: CollectionStats = CollectionCounts {
            total: 0,
            visible: 0,
        }
        .into();
        assert_eq!(stats.visible_percent, 0.0);
    }

    #[test]
    fn test_collection_stats_all_visible() {
        let stats: CollectionStats = CollectionCounts {
            total: 7,
            visible: 7,
        }
        .into();
        assert_eq!(stats.visible_percent, 100.0);
    }
}
