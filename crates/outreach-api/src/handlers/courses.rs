//! Skill-training course endpoints

use crate::handlers::common::{ApiError, ListResponse, PageParams};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use outreach_core::types::Course;
use outreach_core::utils::normalize_search;
use outreach_database::models::CourseDb;
use outreach_database::queries::{CourseFilter, CourseQueries};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// Query parameters for listing courses
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ListCoursesQuery {
    /// 1-based page number
    pub page: Option<i64>,
    /// Rows per page
    pub per_page: Option<i64>,
    /// Free-text search over title and description
    pub search: Option<String>,
    /// Filter by category
    pub category: Option<String>,
    /// Filter by difficulty level
    pub level: Option<String>,
    /// Filter by visibility
    pub visible: Option<bool>,
}

/// List courses with filtering and pagination
pub async fn list_courses(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListCoursesQuery>,
) -> Result<Json<ListResponse<CourseDb>>, ApiError> {
    let pattern = params.search.as_deref().and_then(normalize_search);
    let (limit, offset) = PageParams {
        page: params.page,
        per_page: params.per_page,
    }
    .window(&state.config.api);

    let filter = CourseFilter {
        search: pattern.as_deref(),
        category: params.category.as_deref(),
        level: params.level.as_deref(),
        visible: params.visible,
        limit,
        offset,
    };

    let courses = CourseQueries::list(&state.pool, &filter).await?;
    let total = CourseQueries::count(&state.pool, &filter).await?;

    Ok(Json(ListResponse::new(courses, limit, offset, total)))
}

/// Fetch a single course by id
pub async fn get_course(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CourseDb>, ApiError> {
    let course = CourseQueries::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Course"))?;

    Ok(Json(course))
}

/// Create a new course
pub async fn create_course(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Course>,
) -> Result<(StatusCode, Json<CourseDb>), ApiError> {
    payload.validate().map_err(|e| ApiError::validation(&e))?;

    let course = CourseQueries::insert(&state.pool, &payload).await?;
    info!(id = %course.id, title = %course.title, "Course created");

    Ok((StatusCode::CREATED, Json(course)))
}

/// Replace an existing course
pub async fn update_course(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<Course>,
) -> Result<Json<CourseDb>, ApiError> {
    payload.validate().map_err(|e| ApiError::validation(&e))?;

    let course = CourseQueries::update(&state.pool, id, &payload)
        .await?
        .ok_or_else(|| ApiError::not_found("Course"))?;

    Ok(Json(course))
}

/// Delete a course
pub async fn delete_course(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let removed = CourseQueries::delete(&state.pool, id).await?;
    if removed == 0 {
        return Err(ApiError::not_found("Course"));
    }

    info!(%id, "Course deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Toggle public visibility
pub async fn toggle_visible(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CourseDb>, ApiError> {
    let course = CourseQueries::toggle_visible(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Course"))?;

    Ok(Json(course))
}

/// Toggle the landing-page highlight flag
pub async fn toggle_featured(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CourseDb>, ApiError> {
    let course = CourseQueries::toggle_featured(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Course"))?;

    Ok(Json(course))
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_query_level_filter() {
        let query: ListCoursesQuery = serde_json::from_value(serde_json::json!({
            "level": "advanced",
            "category": "design"
        }))
        .unwrap();
        assert_eq!(query.level.as_deref(), Some("advanced"));
        assert_eq!(query.category.as_deref(), Some("design"));
    }
}
