//! Newsletter subscriber endpoints

use crate::handlers::common::{ApiError, ListResponse, PageParams};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use outreach_core::types::Subscriber;
use outreach_core::utils::normalize_search;
use outreach_database::models::SubscriberDb;
use outreach_database::queries::{SubscriberFilter, SubscriberQueries};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// Query parameters for listing subscribers
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ListSubscribersQuery {
    /// 1-based page number
    pub page: Option<i64>,
    /// Rows per page
    pub per_page: Option<i64>,
    /// Free-text search over email and name
    pub search: Option<String>,
    /// Filter by subscription status
    pub status: Option<String>,
}

/// List subscribers with filtering and pagination
pub async fn list_subscribers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListSubscribersQuery>,
) -> Result<Json<ListResponse<SubscriberDb>>, ApiError> {
    let pattern = params.search.as_deref().and_then(normalize_search);
    let (limit, offset) = PageParams {
        page: params.page,
        per_page: params.per_page,
    }
    .window(&state.config.api);

    let filter = SubscriberFilter {
        search: pattern.as_deref(),
        status: params.status.as_deref(),
        limit,
        offset,
    };

    let subscribers = SubscriberQueries::list(&state.pool, &filter).await?;
    let total = SubscriberQueries::count(&state.pool, &filter).await?;

    Ok(Json(ListResponse::new(subscribers, limit, offset, total)))
}

/// Fetch a single subscriber by id
pub async fn get_subscriber(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SubscriberDb>, ApiError> {
    let subscriber = SubscriberQueries::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Subscriber"))?;

    Ok(Json(subscriber))
}

/// Add a subscriber; duplicate emails are rejected with 400
pub async fn create_subscriber(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Subscriber>,
) -> Result<(StatusCode, Json<SubscriberDb>), ApiError> {
    payload.validate().map_err(|e| ApiError::validation(&e))?;

    let subscriber = SubscriberQueries::insert(&state.pool, &payload).await?;
    info!(id = %subscriber.id, "Subscriber added");

    Ok((StatusCode::CREATED, Json(subscriber)))
}

/// Replace an existing subscriber
pub async fn update_subscriber(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<Subscriber>,
) -> Result<Json<SubscriberDb>, ApiError> {
    payload.validate().map_err(|e| ApiError::validation(&e))?;

    let subscriber = SubscriberQueries::update(&state.pool, id, &payload)
        .await?
        .ok_or_else(|| ApiError::not_found("Subscriber"))?;

    Ok(Json(subscriber))
}

/// Remove a subscriber
pub async fn delete_subscriber(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let removed = SubscriberQueries::delete(&state.pool, id).await?;
    if removed == 0 {
        return Err(ApiError::not_found("Subscriber"));
    }

    info!(%id, "Subscriber removed");
    Ok(StatusCode::NO_CONTENT)
}
