//! Per-page section settings endpoints
//!
//! Each admin page owns exactly one settings row, keyed by its page
//! slug. Reads fall back to the default presentation so a page that has
//! never been saved still renders; the first save creates the row.

use crate::handlers::common::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};
use outreach_core::{ApiResponse, SectionSettings};
use outreach_database::models::SectionSettingsDb;
use outreach_database::queries::SectionSettingsQueries;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

fn default_row(page: String) -> SectionSettingsDb {
    let defaults = SectionSettings::default();
    SectionSettingsDb {
        page,
        updated_at: chrono::Utc::now(),
        title: defaults.title,
        subtitle: defaults.subtitle,
        layout: defaults.layout,
        items_per_page: defaults.items_per_page,
        show_stats: defaults.show_stats,
    }
}

/// Fetch the settings for a page, or defaults when never saved
pub async fn get_settings(
    State(state): State<Arc<AppState>>,
    Path(page): Path<String>,
) -> Result<Json<SectionSettingsDb>, ApiError> {
    let settings = SectionSettingsQueries::get(&state.pool, &page)
        .await?
        .unwrap_or_else(|| default_row(page));

    Ok(Json(settings))
}

/// Save the settings for a page, creating the row on first save
pub async fn put_settings(
    State(state): State<Arc<AppState>>,
    Path(page): Path<String>,
    Json(payload): Json<SectionSettings>,
) -> Result<Json<ApiResponse<SectionSettingsDb>>, ApiError> {
    payload.validate().map_err(|e| ApiError::validation(&e))?;

    let settings = SectionSettingsQueries::upsert(&state.pool, &page, &payload).await?;
    info!(%page, "Section settings saved");

    Ok(Json(ApiResponse::with_message(settings, "Settings saved")))
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_row_carries_page_slug() {
        let row = default_row("events".to_string());
        assert_eq!(row.page, "events");
        assert_eq!(row.layout, "grid");
        assert_eq!(row.items_per_page, 10);
        assert!(row.show_stats);
    }

    #[test]
    fn test_put_payload_bounds_items_per_page() {
        let payload: SectionSettings = serde_json::from_value(serde_json::json!({
            "title": "Upcoming Events",
            "items_per_page": 500
        }))
        .unwrap();
        assert!(payload.validate().is_err());

        let payload: SectionSettings = serde_json::from_value(serde_json::json!({
            "title": "Upcoming Events"
        }))
        .unwrap();
        assert!(payload.validate().is_ok());
        assert_eq!(payload.items_per_page, 10);
    }
}
