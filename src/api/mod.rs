//! REST API module using Axum
//!
//! Provides the HTTP surface of the dashboard:
//! - `/` - the interactive page (embedded at compile time)
//! - `/api/v1/*` - JSON control options and chart data, enveloped
//! - `/health` - liveness

pub mod envelope;
pub mod handlers;
mod routes;

pub use handlers::DashboardState;

use axum::http::{header, Method};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::defaults;

/// Dashboard page.
const DASHBOARD_HTML: &str = include_str!("../../static/dashboard.html");

/// GET / - Serve the dashboard page
async fn serve_dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

/// Build a CORS layer that is restrictive by default (same-origin only).
///
/// Set `WEARWATCH_CORS_ORIGINS` to a comma-separated list of allowed origins
/// when the page is served from elsewhere during development.
fn build_cors_layer() -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    match std::env::var(defaults::ENV_CORS_ORIGINS) {
        Ok(origins) => {
            let allowed: Vec<_> = origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            tracing::info!(origins = %origins, "CORS: allowing configured origins");
            base.allow_origin(allowed)
        }
        // No cross-origin allowed, the page is same-origin
        Err(_) => base,
    }
}

/// Create the complete application router.
pub fn create_app(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(serve_dashboard))
        .nest("/api/v1", routes::api_routes(state.clone()))
        .merge(routes::health_routes(state))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(build_cors_layer())
}
