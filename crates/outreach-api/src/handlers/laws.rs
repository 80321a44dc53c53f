//! Law lookup endpoints

use crate::handlers::common::{ApiError, ListResponse, PageParams};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use outreach_core::types::Law;
use outreach_core::utils::normalize_search;
use outreach_database::models::LawDb;
use outreach_database::queries::{LawFilter, LawQueries};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// Query parameters for listing laws
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ListLawsQuery {
    /// 1-based page number
    pub page: Option<i64>,
    /// Rows per page
    pub per_page: Option<i64>,
    /// Free-text search over title, reference and summary
    pub search: Option<String>,
    /// Filter by category
    pub category: Option<String>,
    /// Filter by visibility
    pub visible: Option<bool>,
}

/// List laws alphabetically with filtering and pagination
pub async fn list_laws(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListLawsQuery>,
) -> Result<Json<ListResponse<LawDb>>, ApiError> {
    let pattern = params.search.as_deref().and_then(normalize_search);
    let (limit, offset) = PageParams {
        page: params.page,
        per_page: params.per_page,
    }
    .window(&state.config.api);

    let filter = LawFilter {
        search: pattern.as_deref(),
        category: params.category.as_deref(),
        visible: params.visible,
        limit,
        offset,
    };

    let laws = LawQueries::list(&state.pool, &filter).await?;
    let total = LawQueries::count(&state.pool, &filter).await?;

    Ok(Json(ListResponse::new(laws, limit, offset, total)))
}

/// Fetch a single law by id
pub async fn get_law(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<LawDb>, ApiError> {
    let law = LawQueries::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Law"))?;

    Ok(Json(law))
}

/// Create a new law entry
pub async fn create_law(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Law>,
) -> Result<(StatusCode, Json<LawDb>), ApiError> {
    payload.validate().map_err(|e| ApiError::validation(&e))?;

    let law = LawQueries::insert(&state.pool, &payload).await?;
    info!(id = %law.id, title = %law.title, "Law entry created");

    Ok((StatusCode::CREATED, Json(law)))
}

/// Replace an existing law entry
pub async fn update_law(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<Law>,
) -> Result<Json<LawDb>, ApiError> {
    payload.validate().map_err(|e| ApiError::validation(&e))?;

    let law = LawQueries::update(&state.pool, id, &payload)
        .await?
        .ok_or_else(|| ApiError::not_found("Law"))?;

    Ok(Json(law))
}

/// Delete a law entry
pub async fn delete_law(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let removed = LawQueries::delete(&state.pool, id).await?;
    if removed == 0 {
        return Err(ApiError::not_found("Law"));
    }

    info!(%id, "Law entry deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Toggle public visibility
pub async fn toggle_visible(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<LawDb>, ApiError> {
    let law = LawQueries::toggle_visible(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Law"))?;

    Ok(Json(law))
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn test_create_payload_validates_source_url() {
        let payload: Law = serde_json::from_value(serde_json::json!({
            "title": "RTI Act",
            "act_reference": "Act 22 of 2005",
            "summary": "Right to information",
            "category": "transparency",
            "year": 2005,
            "source_url": "not a url"
        }))
        .unwrap();
        assert!(payload.validate().is_err());

        let payload: Law = serde_json::from_value(serde_json::json!({
            "title": "RTI Act",
            "act_reference": "Act 22 of 2005",
            "summary": "Right to information",
            "category": "transparency",
            "year": 2005,
            "source_url": "https://example.org/rti"
        }))
        .unwrap();
        assert!(payload.validate().is_ok());
    }
}
