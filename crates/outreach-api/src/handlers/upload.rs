//! Image upload endpoint
//!
//! Accepts a multipart form with an `image` field. The declared content
//! type and the received size are both checked before anything touches
//! disk; a rejected upload leaves no file behind.

use crate::handlers::common::ApiError;
use crate::state::AppState;
use axum::{Json, extract::Multipart, extract::State};
use outreach_core::Error;
use outreach_core::utils::stored_image_name;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Successful upload response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Public URL of the stored image
    pub url: String,
    /// Stored filename
    pub filename: String,
    /// Size in bytes
    pub size: usize,
}

/// Handle an image upload
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart request: {e}")))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let content_type = field.content_type().unwrap_or("").to_string();
        let original_name = field.file_name().map(str::to_string);

        // Content-type gate before reading the body
        let Some(filename) = stored_image_name(&content_type) else {
            warn!(%content_type, "Rejected upload with unsupported content type");
            return Err(Error::UnsupportedImageFormat {
                format: content_type,
            }
            .into());
        };

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {e}")))?;

        let max_size = state.config.storage.max_image_size;
        if data.len() as u64 > max_size {
            warn!(size = data.len(), max_size, "Rejected oversized upload");
            return Err(Error::FileSizeExceeded {
                size: data.len() as u64,
                max_size,
            }
            .into());
        }

        let path = state.upload_dir.join(&filename);
        tokio::fs::write(&path, &data)
            .await
            .map_err(|e| ApiError::from(Error::Io(e)))?;

        info!(
            filename = %filename,
            original = original_name.as_deref().unwrap_or("<unnamed>"),
            size = data.len(),
            "Image stored"
        );

        return Ok(Json(UploadResponse {
            url: state.public_image_url(&filename),
            filename,
            size: data.len(),
        }));
    }

    Err(ApiError::bad_request("Missing 'image' field"))
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_upload_response_serialization() {
        let response = UploadResponse {
            url: "/uploads/abc.png".to_string(),
            filename: "abc.png".to_string(),
            size: 2_000_000,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["url"], "/uploads/abc.png");
        assert_eq!(json["size"], 2_000_000);
    }

    #[test]
    fn test_size_gate_math() {
        let max_size: u64 = 10_000_000;
        assert!(12_000_000_u64 > max_size); // 12 MB rejected
        assert!(2_000_000_u64 <= max_size); // 2 MB accepted
    }
}
