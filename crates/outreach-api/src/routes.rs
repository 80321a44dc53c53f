//! API route definitions with middleware integration

use crate::{handlers, state::AppState};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;

/// Build the collection CRUD routes
pub fn api_routes(max_upload_bytes: usize) -> Router<Arc<AppState>> {
    Router::new()
        // Events
        .route(
            "/api/events",
            get(handlers::events::list_events).post(handlers::events::create_event),
        )
        .route(
            "/api/events/:id",
            get(handlers::events::get_event)
                .put(handlers::events::update_event)
                .delete(handlers::events::delete_event),
        )
        .route(
            "/api/events/:id/visible",
            patch(handlers::events::toggle_visible),
        )
        .route(
            "/api/events/:id/featured",
            patch(handlers::events::toggle_featured),
        )
        .route("/api/events/:id/register", post(handlers::events::register))
        // Newsletter subscribers
        .route(
            "/api/subscribers",
            get(handlers::subscribers::list_subscribers)
                .post(handlers::subscribers::create_subscriber),
        )
        .route(
            "/api/subscribers/:id",
            get(handlers::subscribers::get_subscriber)
                .put(handlers::subscribers::update_subscriber)
                .delete(handlers::subscribers::delete_subscriber),
        )
        // Volunteer opportunities
        .route(
            "/api/opportunities",
            get(handlers::opportunities::list_opportunities)
                .post(handlers::opportunities::create_opportunity),
        )
        .route(
            "/api/opportunities/:id",
            get(handlers::opportunities::get_opportunity)
                .put(handlers::opportunities::update_opportunity)
                .delete(handlers::opportunities::delete_opportunity),
        )
        .route(
            "/api/opportunities/:id/visible",
            patch(handlers::opportunities::toggle_visible),
        )
        .route(
            "/api/opportunities/:id/urgent",
            patch(handlers::opportunities::toggle_urgent),
        )
        // Skill-training courses
        .route(
            "/api/courses",
            get(handlers::courses::list_courses).post(handlers::courses::create_course),
        )
        .route(
            "/api/courses/:id",
            get(handlers::courses::get_course)
                .put(handlers::courses::update_course)
                .delete(handlers::courses::delete_course),
        )
        .route(
            "/api/courses/:id/visible",
            patch(handlers::courses::toggle_visible),
        )
        .route(
            "/api/courses/:id/featured",
            patch(handlers::courses::toggle_featured),
        )
        // Legal-aid cases
        .route(
            "/api/legal-cases",
            get(handlers::legal_cases::list_cases).post(handlers::legal_cases::create_case),
        )
        .route(
            "/api/legal-cases/:id",
            get(handlers::legal_cases::get_case)
                .put(handlers::legal_cases::update_case)
                .delete(handlers::legal_cases::delete_case),
        )
        .route(
            "/api/legal-cases/:id/urgent",
            patch(handlers::legal_cases::toggle_urgent),
        )
        .route(
            "/api/legal-cases/:id/status",
            patch(handlers::legal_cases::set_status),
        )
        // Law lookup
        .route(
            "/api/laws",
            get(handlers::laws::list_laws).post(handlers::laws::create_law),
        )
        .route(
            "/api/laws/:id",
            get(handlers::laws::get_law)
                .put(handlers::laws::update_law)
                .delete(handlers::laws::delete_law),
        )
        .route("/api/laws/:id/visible", patch(handlers::laws::toggle_visible))
        // Testimonials
        .route(
            "/api/testimonials",
            get(handlers::testimonials::list_testimonials)
                .post(handlers::testimonials::create_testimonial),
        )
        .route(
            "/api/testimonials/:id",
            get(handlers::testimonials::get_testimonial)
                .put(handlers::testimonials::update_testimonial)
                .delete(handlers::testimonials::delete_testimonial),
        )
        .route(
            "/api/testimonials/:id/visible",
            patch(handlers::testimonials::toggle_visible),
        )
        .route(
            "/api/testimonials/:id/verified",
            patch(handlers::testimonials::toggle_verified),
        )
        // Video lectures
        .route(
            "/api/lectures",
            get(handlers::lectures::list_lectures).post(handlers::lectures::create_lecture),
        )
        .route(
            "/api/lectures/:id",
            get(handlers::lectures::get_lecture)
                .put(handlers::lectures::update_lecture)
                .delete(handlers::lectures::delete_lecture),
        )
        .route(
            "/api/lectures/:id/visible",
            patch(handlers::lectures::toggle_visible),
        )
        .route(
            "/api/lectures/:id/featured",
            patch(handlers::lectures::toggle_featured),
        )
        .route("/api/lectures/:id/view", post(handlers::lectures::record_view))
        // Section settings
        .route(
            "/api/settings/:page",
            get(handlers::settings::get_settings).put(handlers::settings::put_settings),
        )
        // Image upload
        .route("/api/upload-image", post(handlers::upload::upload_image))
        // Dashboard statistics
        .route("/api/stats/dashboard", get(handlers::stats::dashboard_stats))
        // Service info
        .route("/api", get(api_info))
        .route("/", get(root_endpoint))
        // The body limit is above the image cap so oversized uploads
        // reach the handler and get the structured 413 envelope
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CompressionLayer::new())
}

/// Build health check routes (no authentication required)
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
}

/// Combine all routes into a single router
pub fn build_router(max_upload_bytes: usize) -> Router<Arc<AppState>> {
    Router::new()
        .merge(api_routes(max_upload_bytes))
        .merge(health_routes())
        .fallback(not_found_handler)
}

/// Handle 404 Not Found errors
async fn not_found_handler() -> (axum::http::StatusCode, axum::Json<serde_json::Value>) {
    (
        axum::http::StatusCode::NOT_FOUND,
        axum::Json(serde_json::json!({
            "error": "The requested endpoint does not exist",
            "code": "ROUTE_NOT_FOUND"
        })),
    )
}

/// Root endpoint for basic connectivity
async fn root_endpoint() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "service": "Outreach CMS API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "ok"
    }))
}

/// API info endpoint
async fn api_info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "api": "Outreach CMS API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "events": "/api/events",
            "subscribers": "/api/subscribers",
            "opportunities": "/api/opportunities",
            "courses": "/api/courses",
            "legal_cases": "/api/legal-cases",
            "laws": "/api/laws",
            "testimonials": "/api/testimonials",
            "lectures": "/api/lectures",
            "settings": "/api/settings/:page",
            "upload": "/api/upload-image",
            "stats": "/api/stats/dashboard",
            "health": "/health"
        }
    }))
}
