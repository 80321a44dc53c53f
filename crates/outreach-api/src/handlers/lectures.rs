//! Video lecture endpoints

use crate::handlers::common::{ApiError, ListResponse, PageParams};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use outreach_core::types::Lecture;
use outreach_core::utils::normalize_search;
use outreach_database::models::LectureDb;
use outreach_database::queries::{LectureFilter, LectureQueries};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// Query parameters for listing lectures
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ListLecturesQuery {
    /// 1-based page number
    pub page: Option<i64>,
    /// Rows per page
    pub per_page: Option<i64>,
    /// Free-text search over title and speaker
    pub search: Option<String>,
    /// Filter by category
    pub category: Option<String>,
    /// Filter by visibility
    pub visible: Option<bool>,
}

/// List lectures with filtering and pagination
pub async fn list_lectures(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListLecturesQuery>,
) -> Result<Json<ListResponse<LectureDb>>, ApiError> {
    let pattern = params.search.as_deref().and_then(normalize_search);
    let (limit, offset) = PageParams {
        page: params.page,
        per_page: params.per_page,
    }
    .window(&state.config.api);

    let filter = LectureFilter {
        search: pattern.as_deref(),
        category: params.category.as_deref(),
        visible: params.visible,
        limit,
        offset,
    };

    let lectures = LectureQueries::list(&state.pool, &filter).await?;
    let total = LectureQueries::count(&state.pool, &filter).await?;

    Ok(Json(ListResponse::new(lectures, limit, offset, total)))
}

/// Fetch a single lecture by id
pub async fn get_lecture(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<LectureDb>, ApiError> {
    let lecture = LectureQueries::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Lecture"))?;

    Ok(Json(lecture))
}

/// Create a new lecture
pub async fn create_lecture(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Lecture>,
) -> Result<(StatusCode, Json<LectureDb>), ApiError> {
    payload.validate().map_err(|e| ApiError::validation(&e))?;

    let lecture = LectureQueries::insert(&state.pool, &payload).await?;
    info!(id = %lecture.id, title = %lecture.title, "Lecture created");

    Ok((StatusCode::CREATED, Json(lecture)))
}

/// Replace an existing lecture
pub async fn update_lecture(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<Lecture>,
) -> Result<Json<LectureDb>, ApiError> {
    payload.validate().map_err(|e| ApiError::validation(&e))?;

    let lecture = LectureQueries::update(&state.pool, id, &payload)
        .await?
        .ok_or_else(|| ApiError::not_found("Lecture"))?;

    Ok(Json(lecture))
}

/// Delete a lecture
pub async fn delete_lecture(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let removed = LectureQueries::delete(&state.pool, id).await?;
    if removed == 0 {
        return Err(ApiError::not_found("Lecture"));
    }

    info!(%id, "Lecture deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Toggle public visibility
pub async fn toggle_visible(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<LectureDb>, ApiError> {
    let lecture = LectureQueries::toggle_visible(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Lecture"))?;

    Ok(Json(lecture))
}

/// Toggle the landing-page highlight flag
pub async fn toggle_featured(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<LectureDb>, ApiError> {
    let lecture = LectureQueries::toggle_featured(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Lecture"))?;

    Ok(Json(lecture))
}

/// Record one view of a lecture
pub async fn record_view(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<LectureDb>, ApiError> {
    let lecture = LectureQueries::increment_views(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Lecture"))?;

    Ok(Json(lecture))
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn test_create_payload_validates_video_url() {
        let payload: Lecture = serde_json::from_value(serde_json::json!({
            "title": "Know Your Rights",
            "speaker": "Adv. Mehta",
            "video_url": "nope",
            "duration": "42:00",
            "category": "legal"
        }))
        .unwrap();
        assert!(payload.validate().is_err());

        let payload: Lecture = serde_json::from_value(serde_json::json!({
            "title": "Know Your Rights",
            "speaker": "Adv. Mehta",
            "video_url": "https://videos.example.org/rights",
            "duration": "42:00",
            "category": "legal"
        }))
        .unwrap();
        assert!(payload.validate().is_ok());
    }
}
