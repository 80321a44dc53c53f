//! Shared response and error plumbing for the API handlers
//!
//! Every failure leaves the server as the same JSON envelope:
//! `{ error, code, details? }` with a status code that matches the
//! failure class. Handlers return `Result<_, ApiError>` and rely on the
//! `From` conversions below.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use outreach_core::{Error, PaginationInfo, config::ApiConfig};
use serde::{Deserialize, Serialize};
use tracing::error;
use validator::ValidationErrors;

/// Uniform error envelope returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
    /// Stable machine-readable code
    pub code: String,
    /// Optional structured context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Handler error carrying a status code and envelope
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status to respond with
    pub status: StatusCode,
    /// Response body
    pub body: ErrorResponse,
}

impl ApiError {
    /// Build an error with a status, code and message
    #[must_use]
    pub fn new(status: StatusCode, code: &str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse {
                error: message.into(),
                code: code.to_string(),
                details: None,
            },
        }
    }

    /// 404 for a missing record
    #[must_use]
    pub fn not_found(resource: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{resource} not found"),
        )
    }

    /// 400 with per-field validation details
    #[must_use]
    pub fn validation(errors: &ValidationErrors) -> Self {
        let details = serde_json::to_value(errors).unwrap_or(serde_json::Value::Null);
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse {
                error: "Validation failed".to_string(),
                code: "VALIDATION_FAILED".to_string(),
                details: Some(details),
            },
        }
    }

    /// 400 for a malformed request
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation { field, message } => Self {
                status: StatusCode::BAD_REQUEST,
                body: ErrorResponse {
                    error: format!("Validation failed for {field}: {message}"),
                    code: "VALIDATION_FAILED".to_string(),
                    details: Some(serde_json::json!({ "field": field, "message": message })),
                },
            },
            Error::NotFound { resource } => Self::not_found(&resource),
            Error::FileSizeExceeded { size, max_size } => Self {
                status: StatusCode::PAYLOAD_TOO_LARGE,
                body: ErrorResponse {
                    error: format!("File size {size} exceeds maximum {max_size}"),
                    code: "FILE_TOO_LARGE".to_string(),
                    details: Some(serde_json::json!({ "size": size, "max_size": max_size })),
                },
            },
            Error::UnsupportedImageFormat { format } => Self::new(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_IMAGE_FORMAT",
                format!("Unsupported image format: {format}"),
            ),
            Error::Database(message) => {
                // Database internals stay out of client responses
                error!("Database error: {message}");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "Database operation failed",
                )
            }
            other => {
                error!("Internal error: {other}");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error",
                )
            }
        }
    }
}

/// Common pagination query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    /// 1-based page number
    pub page: Option<i64>,
    /// Rows per page
    pub per_page: Option<i64>,
}

impl PageParams {
    /// Resolve the requested page into a clamped limit/offset pair
    #[must_use]
    pub fn window(&self, api: &ApiConfig) -> (i64, i64) {
        let per_page = self
            .per_page
            .unwrap_or(api.default_page_size)
            .clamp(1, api.max_page_size);
        let page = self.page.unwrap_or(1).max(1);
        // Saturate so an absurd page number yields an empty page, not a panic
        (per_page, page.saturating_sub(1).saturating_mul(per_page))
    }
}

/// Paginated list response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Records on this page
    pub data: Vec<T>,
    /// Pagination metadata; `total_count` reflects the active filters
    pub pagination: PaginationInfo,
}

impl<T> ListResponse<T> {
    /// Assemble a page of results with its pagination metadata
    #[must_use]
    pub fn new(data: Vec<T>, limit: i64, offset: i64, total: i64) -> Self {
        Self {
            data,
            pagination: PaginationInfo::from_limit_offset(limit, offset, total),
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn api_config() -> ApiConfig {
        ApiConfig {
            enable_cors: true,
            cors_origins: vec!["*".to_string()],
            default_page_size: 50,
            max_page_size: 500,
        }
    }

    #[test]
    fn test_page_params_defaults() {
        let params = PageParams::default();
        let (limit, offset) = params.window(&api_config());
        assert_eq!(limit, 50);
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_page_params_window() {
        let params = PageParams {
            page: Some(3),
            per_page: Some(20),
        };
        let (limit, offset) = params.window(&api_config());
        assert_eq!(limit, 20);
        assert_eq!(offset, 40);
    }

    #[test]
    fn test_page_params_clamped_to_max() {
        let params = PageParams {
            page: Some(1),
            per_page: Some(10_000),
        };
        let (limit, _) = params.window(&api_config());
        assert_eq!(limit, 500);
    }

    #[test]
    fn test_page_params_rejects_zero_and_negative() {
        let params = PageParams {
            page: Some(0),
            per_page: Some(-5),
        };
        let (limit, offset) = params.window(&api_config());
        assert_eq!(limit, 1);
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_page_params_extreme_page_saturates() {
        let params = PageParams {
            page: Some(i64::MAX),
            per_page: Some(20),
        };
        let (limit, offset) = params.window(&api_config());
        assert_eq!(limit, 20);
        assert_eq!(offset, i64::MAX);

        // The saturated offset still yields a well-formed (empty) page
        let response: ListResponse<i32> = ListResponse::new(vec![], limit, offset, 10);
        assert!(!response.pagination.has_next);
        assert!(response.pagination.has_prev);
    }

    #[test]
    fn test_not_found_envelope() {
        let err = ApiError::not_found("Event");
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.body.code, "NOT_FOUND");
        assert_eq!(err.body.error, "Event not found");
        assert!(err.body.details.is_none());
    }

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = Error::FileSizeExceeded {
            size: 12_000_000,
            max_size: 10_000_000,
        }
        .into();
        assert_eq!(err.status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.body.code, "FILE_TOO_LARGE");
        let details = err.body.details.expect("details missing");
        assert_eq!(details["size"], 12_000_000);

        let err: ApiError = Error::UnsupportedImageFormat {
            format: "application/pdf".to_string(),
        }
        .into();
        assert_eq!(err.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let err: ApiError = Error::Database("connection refused".to_string()).into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        // Internal detail must not leak
        assert!(!err.body.error.contains("connection refused"));
    }

    #[test]
    fn test_error_response_skips_empty_details() {
        let err = ApiError::bad_request("nope");
        let json = serde_json::to_value(&err.body).unwrap();
        assert!(json.get("details").is_none());
        assert_eq!(json["code"], "BAD_REQUEST");
    }

    #[test]
    fn test_list_response_pagination() {
        let response = ListResponse::new(vec![1, 2, 3], 3, 3, 10);
        assert_eq!(response.pagination.page, 2);
        assert_eq!(response.pagination.total_count, 10);
        assert!(response.pagination.has_next);
        assert!(response.pagination.has_prev);
    }
}
