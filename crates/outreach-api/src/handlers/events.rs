//! Event management endpoints
//!
//! Full CRUD plus flag toggles and the public registration counter. This
//! module is the pattern the other collection handlers follow: list with
//! filters and pagination, fetch by id, validated create/update, delete,
//! and single-statement toggles so a double toggle always restores the
//! original state.

use crate::handlers::common::{ApiError, ListResponse, PageParams};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use outreach_core::types::Event;
use outreach_core::utils::normalize_search;
use outreach_database::models::EventDb;
use outreach_database::queries::{EventFilter, EventQueries};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// Query parameters for listing events
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ListEventsQuery {
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
}

/// List events with filtering and pagination
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListEventsQuery>,
) -> Result<Json<ListResponse<EventDb>>, ApiError> {
    let pattern = params.search.as_deref().and_then(normalize_search);
    let (limit, offset) = PageParams {
        page: params.page,
        per_page: params.per_page,
    }
    .window(&state.config.api);

    let filter = EventFilter {
        search: pattern.as_deref(),
        category: params.category.as_deref(),
        visible: params.visible,
        limit,
        offset,
    };

    let events = EventQueries::list(&state.pool, &filter).await?;
    let total = EventQueries::count(&state.pool, &filter).await?;

    Ok(Json(ListResponse::new(events, limit, offset, total)))
}

/// Fetch a single event by id
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<EventDb>, ApiError> {
    let event = EventQueries::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Event"))?;

    Ok(Json(event))
}

/// Create a new event; the server assigns the id
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Event>,
) -> Result<(StatusCode, Json<EventDb>), ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::validation(&e))?;

    let event = EventQueries::insert(&state.pool, &payload).await?;
    info!(id = %event.id, title = %event.title, "Event created");

    Ok((StatusCode::CREATED, Json(event)))
}

/// Replace an existing event
pub async fn update_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<Event>,
) -> Result<Json<EventDb>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::validation(&e))?;

    let event = EventQueries::update(&state.pool, id, &payload)
        .await?
        .ok_or_else(|| ApiError::not_found("Event"))?;

    Ok(Json(event))
}

/// Delete an event
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let removed = EventQueries::delete(&state.pool, id).await?;
    if removed == 0 {
        return Err(ApiError::not_found("Event"));
    }

    info!(%id, "Event deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Toggle whether the event shows on the public site
pub async fn toggle_visible(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<EventDb>, ApiError> {
    let event = EventQueries::toggle_visible(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Event"))?;

    Ok(Json(event))
}

/// Toggle the landing-page highlight flag
pub async fn toggle_featured(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<EventDb>, ApiError> {
    let event = EventQueries::toggle_featured(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Event"))?;

    Ok(Json(event))
}

/// Record one registration for an event
pub async fn register(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<EventDb>, ApiError> {
    let event = EventQueries::increment_registrations(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Event"))?;

    info!(%id, registrations = event.registrations, "Event registration recorded");
    Ok(Json(event))
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_query_deserializes_from_partial_params() {
        let query: ListEventsQuery = serde_json::from_value(serde_json::json!({
            "search": "gala",
            "visible": true
        }))
        .unwrap();

        assert_eq!(query.search.as_deref(), Some("gala"));
        assert_eq!(query.visible, Some(true));
        assert!(query.page.is_none());
        assert!(query.category.is_none());
    }

    #[test]
    fn test_list_query_defaults_empty() {
        let query = ListEventsQuery::default();
        assert!(query.search.is_none());
        assert!(query.per_page.is_none());
    }

    #[test]
    fn test_search_pattern_normalization() {
        // Wiring check: blank search must not reach the query layer
        let query = ListEventsQuery {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(query.search.as_deref().and_then(normalize_search).is_none());

        let query = ListEventsQuery {
            search: Some("50% off".to_string()),
            ..Default::default()
        };
        let pattern = query.search.as_deref().and_then(normalize_search).unwrap();
        assert_eq!(pattern, "%50\\% off%");
    }

    #[test]
    fn test_create_payload_requires_title() {
        let payload: Event = serde_json::from_value(serde_json::json!({
            "title": "",
            "description": "d",
            "date": "April 15, 2025",
            "time": "7:00 PM",
            "location": "Hall A"
        }))
        .unwrap();

        assert!(payload.validate().is_err());
    }
}
