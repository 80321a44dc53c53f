//! Volunteer opportunity endpoints

use crate::handlers::common::{ApiError, ListResponse, PageParams};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use outreach_core::types::Opportunity;
use outreach_core::utils::normalize_search;
use outreach_database::models::OpportunityDb;
use outreach_database::queries::{OpportunityFilter, OpportunityQueries};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// Query parameters for listing opportunities
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ListOpportunitiesQuery {
    /// 1-based page number
    pub page: Option<i64>,
    /// Rows per page
    pub per_page: Option<i64>,
    /// Free-text search over title, description and location
    pub search: Option<String>,
    /// Filter by category
    pub category: Option<String>,
    /// Filter by visibility
    pub visible: Option<bool>,
    /// Filter by urgency
    pub urgent: Option<bool>,
}

/// List opportunities, urgent listings first
pub async fn list_opportunities(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListOpportunitiesQuery>,
) -> Result<Json<ListResponse<OpportunityDb>>, ApiError> {
    let pattern = params.search.as_deref().and_then(normalize_search);
    let (limit, offset) = PageParams {
        page: params.page,
        per_page: params.per_page,
    }
    .window(&state.config.api);

    let filter = OpportunityFilter {
        search: pattern.as_deref(),
        category: params.category.as_deref(),
        visible: params.visible,
        urgent: params.urgent,
        limit,
        offset,
    };

    let opportunities = OpportunityQueries::list(&state.pool, &filter).await?;
    let total = OpportunityQueries::count(&state.pool, &filter).await?;

    Ok(Json(ListResponse::new(opportunities, limit, offset, total)))
}

/// Fetch a single opportunity by id
pub async fn get_opportunity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<OpportunityDb>, ApiError> {
    let opportunity = OpportunityQueries::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Opportunity"))?;

    Ok(Json(opportunity))
}

/// Create a new opportunity
pub async fn create_opportunity(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Opportunity>,
) -> Result<(StatusCode, Json<OpportunityDb>), ApiError> {
    payload.validate().map_err(|e| ApiError::validation(&e))?;

    let opportunity = OpportunityQueries::insert(&state.pool, &payload).await?;
    info!(id = %opportunity.id, title = %opportunity.title, "Opportunity created");

    Ok((StatusCode::CREATED, Json(opportunity)))
}

/// Replace an existing opportunity
pub async fn update_opportunity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<Opportunity>,
) -> Result<Json<OpportunityDb>, ApiError> {
    payload.validate().map_err(|e| ApiError::validation(&e))?;

    let opportunity = OpportunityQueries::update(&state.pool, id, &payload)
        .await?
        .ok_or_else(|| ApiError::not_found("Opportunity"))?;

    Ok(Json(opportunity))
}

/// Delete an opportunity
pub async fn delete_opportunity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let removed = OpportunityQueries::delete(&state.pool, id).await?;
    if removed == 0 {
        return Err(ApiError::not_found("Opportunity"));
    }

    info!(%id, "Opportunity deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Toggle public visibility
pub async fn toggle_visible(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<OpportunityDb>, ApiError> {
    let opportunity = OpportunityQueries::toggle_visible(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Opportunity"))?;

    Ok(Json(opportunity))
}

/// Toggle the urgent flag
pub async fn toggle_urgent(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<OpportunityDb>, ApiError> {
    let opportunity = OpportunityQueries::toggle_urgent(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Opportunity"))?;

    Ok(Json(opportunity))
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_query_flag_filters() {
        let query: ListOpportunitiesQuery = serde_json::from_value(serde_json::json!({
            "visible": true,
            "urgent": false
        }))
        .unwrap();
        assert_eq!(query.visible, Some(true));
        assert_eq!(query.urgent, Some(false));
    }
}
