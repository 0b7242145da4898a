//! API route definitions
//!
//! - /api/v1/options - control options and initial selection
//! - /api/v1/charts - all four charts for the current controls
//! - /api/v1/charts/:kind - one chart (temperature, speed, torque, wear)
//! - /health - liveness and dataset size

use axum::{routing::get, Router};

use super::handlers::{self, DashboardState};

/// Create the JSON API routes
pub fn api_routes(state: DashboardState) -> Router {
    Router::new()
        .route("/options", get(handlers::get_options))
        .route("/charts", get(handlers::get_charts))
        .route("/charts/:kind", get(handlers::get_chart))
        .with_state(state)
}

/// Health endpoint at root level
pub fn health_routes(state: DashboardState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .with_state(state)
}
