//! Health check endpoints for monitoring and diagnostics

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Timestamp of the check
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Database connectivity status
    pub database: DatabaseHealth,
    /// Process uptime in seconds
    pub uptime_seconds: u64,
}

/// Database health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseHealth {
    /// Database connection status
    pub connected: bool,
    /// Maximum number of pooled connections
    pub max_connections: u32,
    /// Number of idle connections
    pub idle_connections: u32,
    /// Response time in milliseconds
    pub response_time_ms: u64,
}

/// Readiness check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Service readiness status
    pub ready: bool,
    /// Timestamp of the check
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Basic health check for load balancers and monitoring
///
/// Returns HTTP 200 with pool statistics when the database answers, or
/// HTTP 503 when it does not.
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, StatusCode> {
    let start = std::time::Instant::now();

    if let Err(e) = sqlx::query("SELECT 1").execute(&state.pool).await {
        error!("Database health check failed: {e}");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    #[allow(clippy::cast_possible_truncation)]
    let response_time_ms = start.elapsed().as_millis() as u64;

    #[allow(clippy::cast_possible_truncation)]
    let database = DatabaseHealth {
        connected: true,
        max_connections: state.pool.options().get_max_connections(),
        idle_connections: state.pool.num_idle() as u32,
        response_time_ms,
    };

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        database,
        uptime_seconds: uptime_seconds(),
    }))
}

/// Readiness check for orchestrators; 200 when the database is reachable
pub async fn readiness_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReadinessResponse>, StatusCode> {
    match sqlx::query("SELECT 1").fetch_one(&state.pool).await {
        Ok(_) => Ok(Json(ReadinessResponse {
            ready: true,
            timestamp: chrono::Utc::now(),
        })),
        Err(e) => {
            error!("Readiness check failed - database not accessible: {e}");
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

fn uptime_seconds() -> u64 {
    static START_TIME: std::sync::LazyLock<std::time::Instant> =
        std::sync::LazyLock::new(std::time::Instant::now);
    START_TIME.elapsed().as_secs()
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let health = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
            database: DatabaseHealth {
                connected: true,
                max_connections: 20,
                idle_connections: 4,
                response_time_ms: 12,
            },
            uptime_seconds: 3600,
        };

        let json = serde_json::to_string(&health).expect("Failed to serialize");
        assert!(json.contains("healthy"));
        assert!(json.contains("database"));
        assert!(json.contains("3600"));
    }

    #[test]
    fn test_readiness_response_serialization() {
        let readiness = ReadinessResponse {
            ready: true,
            timestamp: chrono::Utc::now(),
        };

        let json = serde_json::to_string(&readiness).expect("Failed to serialize");
        assert!(json.contains("ready"));
        assert!(json.contains("true"));
    }

    #[test]
    fn test_uptime_monotonic() {
        let first = uptime_seconds();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let second = uptime_seconds();
        assert!(second >= first);
    }
}
