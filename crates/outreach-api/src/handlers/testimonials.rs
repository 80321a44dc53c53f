//! Testimonial endpoints

use crate::handlers::common::{ApiError, ListResponse, PageParams};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use outreach_core::types::Testimonial;
use outreach_core::utils::normalize_search;
use outreach_database::models::TestimonialDb;
use outreach_database::queries::{TestimonialFilter, TestimonialQueries};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// Query parameters for listing testimonials
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ListTestimonialsQuery {
    /// 1-based page number
    pub page: Option<i64>,
    /// Rows per page
    pub per_page: Option<i64>,
    /// Free-text search over author and quote
    pub search: Option<String>,
    /// Filter by visibility
    pub visible: Option<bool>,
    /// Filter by verification state
    pub verified: Option<bool>,
}

/// List testimonials with filtering and pagination
pub async fn list_testimonials(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListTestimonialsQuery>,
) -> Result<Json<ListResponse<TestimonialDb>>, ApiError> {
    let pattern = params.search.as_deref().and_then(normalize_search);
    let (limit, offset) = PageParams {
        page: params.page,
        per_page: params.per_page,
    }
    .window(&state.config.api);

    let filter = TestimonialFilter {
        search: pattern.as_deref(),
        visible: params.visible,
        verified: params.verified,
        limit,
        offset,
    };

    let testimonials = TestimonialQueries::list(&state.pool, &filter).await?;
    let total = TestimonialQueries::count(&state.pool, &filter).await?;

    Ok(Json(ListResponse::new(testimonials, limit, offset, total)))
}

/// Fetch a single testimonial by id
pub async fn get_testimonial(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TestimonialDb>, ApiError> {
    let testimonial = TestimonialQueries::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Testimonial"))?;

    Ok(Json(testimonial))
}

/// Create a new testimonial
pub async fn create_testimonial(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Testimonial>,
) -> Result<(StatusCode, Json<TestimonialDb>), ApiError> {
    payload.validate().map_err(|e| ApiError::validation(&e))?;

    let testimonial = TestimonialQueries::insert(&state.pool, &payload).await?;
    info!(id = %testimonial.id, author = %testimonial.author, "Testimonial created");

    Ok((StatusCode::CREATED, Json(testimonial)))
}

/// Replace an existing testimonial
pub async fn update_testimonial(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<Testimonial>,
) -> Result<Json<TestimonialDb>, ApiError> {
    payload.validate().map_err(|e| ApiError::validation(&e))?;

    let testimonial = TestimonialQueries::update(&state.pool, id, &payload)
        .await?
        .ok_or_else(|| ApiError::not_found("Testimonial"))?;

    Ok(Json(testimonial))
}

/// Delete a testimonial
pub async fn delete_testimonial(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let removed = TestimonialQueries::delete(&state.pool, id).await?;
    if removed == 0 {
        return Err(ApiError::not_found("Testimonial"));
    }

    info!(%id, "Testimonial deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Toggle public visibility
pub async fn toggle_visible(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TestimonialDb>, ApiError> {
    let testimonial = TestimonialQueries::toggle_visible(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Testimonial"))?;

    Ok(Json(testimonial))
}

/// Toggle the staff verification mark
pub async fn toggle_verified(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TestimonialDb>, ApiError> {
    let testimonial = TestimonialQueries::toggle_verified(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Testimonial"))?;

    Ok(Json(testimonial))
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn test_create_payload_rating_bounds() {
        let payload: Testimonial = serde_json::from_value(serde_json::json!({
            "author": "Asha",
            "role": "Volunteer",
            "quote": "Changed my life",
            "rating": 6
        }))
        .unwrap();
        assert!(payload.validate().is_err());

        let payload: Testimonial = serde_json::from_value(serde_json::json!({
            "author": "Asha",
            "role": "Volunteer",
            "quote": "Changed my life",
            "rating": 5
        }))
        .unwrap();
        assert!(payload.validate().is_ok());
    }
}
