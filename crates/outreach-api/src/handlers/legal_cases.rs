//! Legal-aid case endpoints
//!
//! Cases carry a status workflow (open, in progress, closed) on top of
//! the usual CRUD surface, so there is a dedicated status transition
//! route alongside the urgent-flag toggle.

use crate::handlers::common::{ApiError, ListResponse, PageParams};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use outreach_core::types::{CaseStatus, LegalCase};
use outreach_core::utils::normalize_search;
use outreach_database::models::LegalCaseDb;
use outreach_database::queries::{LegalCaseFilter, LegalCaseQueries};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// Query parameters for listing cases
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ListCasesQuery {
    /// 1-based page number
    pub page: Option<i64>,
    /// Rows per page
    pub per_page: Option<i64>,
    /// Free-text search over case number, title, client and summary
    pub search: Option<String>,
    /// Filter by tracking status
    pub status: Option<String>,
    /// Filter by urgency
    pub urgent: Option<bool>,
}

/// Status transition request body
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SetStatusRequest {
    /// Target status
    pub status: CaseStatus,
}

/// List cases, urgent first
pub async fn list_cases(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListCasesQuery>,
) -> Result<Json<ListResponse<LegalCaseDb>>, ApiError> {
    let pattern = params.search.as_deref().and_then(normalize_search);
    let (limit, offset) = PageParams {
        page: params.page,
        per_page: params.per_page,
    }
    .window(&state.config.api);

    let filter = LegalCaseFilter {
        search: pattern.as_deref(),
        status: params.status.as_deref(),
        urgent: params.urgent,
        limit,
        offset,
    };

    let cases = LegalCaseQueries::list(&state.pool, &filter).await?;
    let total = LegalCaseQueries::count(&state.pool, &filter).await?;

    Ok(Json(ListResponse::new(cases, limit, offset, total)))
}

/// Fetch a single case by id
pub async fn get_case(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<LegalCaseDb>, ApiError> {
    let case = LegalCaseQueries::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Legal case"))?;

    Ok(Json(case))
}

/// Open a new case; case numbers must be unique
pub async fn create_case(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LegalCase>,
) -> Result<(StatusCode, Json<LegalCaseDb>), ApiError> {
    payload.validate().map_err(|e| ApiError::validation(&e))?;

    let case = LegalCaseQueries::insert(&state.pool, &payload).await?;
    info!(id = %case.id, case_number = %case.case_number, "Legal case created");

    Ok((StatusCode::CREATED, Json(case)))
}

/// Replace an existing case
pub async fn update_case(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<LegalCase>,
) -> Result<Json<LegalCaseDb>, ApiError> {
    payload.validate().map_err(|e| ApiError::validation(&e))?;

    let case = LegalCaseQueries::update(&state.pool, id, &payload)
        .await?
        .ok_or_else(|| ApiError::not_found("Legal case"))?;

    Ok(Json(case))
}

/// Delete a case
pub async fn delete_case(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let removed = LegalCaseQueries::delete(&state.pool, id).await?;
    if removed == 0 {
        return Err(ApiError::not_found("Legal case"));
    }

    info!(%id, "Legal case deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Toggle the urgent flag
pub async fn toggle_urgent(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<LegalCaseDb>, ApiError> {
    let case = LegalCaseQueries::toggle_urgent(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Legal case"))?;

    Ok(Json(case))
}

/// Move a case to a new status
pub async fn set_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetStatusRequest>,
) -> Result<Json<LegalCaseDb>, ApiError> {
    let status = payload.status.to_string();
    let case = LegalCaseQueries::set_status(&state.pool, id, &status)
        .await?
        .ok_or_else(|| ApiError::not_found("Legal case"))?;

    info!(%id, %status, "Legal case status changed");
    Ok(Json(case))
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_status_request_parses_snake_case() {
        let request: SetStatusRequest =
            serde_json::from_value(serde_json::json!({ "status": "in_progress" })).unwrap();
        assert_eq!(request.status, CaseStatus::InProgress);
        assert_eq!(request.status.to_string(), "in_progress");
    }

    #[test]
    fn test_set_status_request_rejects_unknown_status() {
        let result: Result<SetStatusRequest, _> =
            serde_json::from_value(serde_json::json!({ "status": "archived" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_create_payload_requires_case_number() {
        let payload: LegalCase = serde_json::from_value(serde_json::json!({
            "case_number": "",
            "title": "Eviction defense",
            "client_name": "R. Kumar",
            "summary": "Tenant dispute"
        }))
        .unwrap();
        assert!(payload.validate().is_err());
    }
}
