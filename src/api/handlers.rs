//! API route handlers
//!
//! Every chart request is a plain synchronous call into the chart builders
//! with the three control values taken from the query string. Handlers only
//! read the shared dataset.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::envelope::{ApiErrorResponse, ApiResponse};
use crate::charts::{self, ChartKind};
use crate::dataset::{ControlOptions, Dataset};
use crate::types::ReadingFilter;

// ============================================================================
// API State
// ============================================================================

/// Shared state for API handlers
#[derive(Clone)]
pub struct DashboardState {
    /// Immutable dataset loaded at startup
    pub dataset: Arc<Dataset>,
    /// Control values the page starts with
    pub initial: ReadingFilter,
    /// Process start, for uptime reporting
    pub started: Instant,
}

impl DashboardState {
    /// State whose initial selection is the configured defaults resolved
    /// against the dataset.
    pub fn new(dataset: Arc<Dataset>, controls: &crate::config::ControlsConfig) -> Self {
        let initial = controls.initial_filter(dataset.options());
        Self {
            dataset,
            initial,
            started: Instant::now(),
        }
    }

    /// Fill in whatever the query left out from the initial selection.
    fn filter_from(&self, query: ChartQuery) -> ReadingFilter {
        ReadingFilter {
            product_type: query
                .product_type
                .unwrap_or_else(|| self.initial.product_type.clone()),
            failure_type: query
                .failure_type
                .unwrap_or_else(|| self.initial.failure_type.clone()),
            tool_wear_min: query.wear_min.unwrap_or(self.initial.tool_wear_min),
            tool_wear_max: query.wear_max.unwrap_or(self.initial.tool_wear_max),
        }
    }
}

// ============================================================================
// Request / Response Types
// ============================================================================

/// Query string of the chart endpoints, e.g.
/// `?product_type=M&failure_type=No%20Failure&wear_min=0&wear_max=120`
///
/// An empty bound (`wear_min=`) counts as absent. Integers beyond `i64`
/// saturate, so a huge bound still selects rather than failing.
#[derive(Debug, Default, Deserialize)]
pub struct ChartQuery {
    pub product_type: Option<String>,
    pub failure_type: Option<String>,
    #[serde(default, deserialize_with = "tool_wear_bound")]
    pub wear_min: Option<i64>,
    #[serde(default, deserialize_with = "tool_wear_bound")]
    pub wear_max: Option<i64>,
}

fn tool_wear_bound<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => parse_saturating(text)
            .map(Some)
            .ok_or_else(|| {
                D::Error::custom(format!("tool-wear bound '{text}' is not an integer"))
            }),
    }
}

/// Parse an integer of any length, clamping to the `i64` range.
fn parse_saturating(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match text.parse::<i64>() {
        Ok(v) => Some(v),
        Err(_) if negative => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// Control options plus the initial selection.
#[derive(Debug, Serialize)]
pub struct OptionsResponse<'a> {
    #[serde(flatten)]
    pub options: &'a ControlOptions,
    pub initial: &'a ReadingFilter,
    pub charts: [ChartKind; 4],
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub rows: usize,
    pub uptime_seconds: u64,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /health
pub async fn health_check(State(state): State<DashboardState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        rows: state.dataset.len(),
        uptime_seconds: state.started.elapsed().as_secs(),
    })
}

/// GET /api/v1/options
pub async fn get_options(State(state): State<DashboardState>) -> Response {
    ApiResponse::ok(OptionsResponse {
        options: state.dataset.options(),
        initial: &state.initial,
        charts: ChartKind::ALL,
    })
}

/// GET /api/v1/charts
pub async fn get_charts(
    State(state): State<DashboardState>,
    query: Result<Query<ChartQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(e) => return ApiErrorResponse::bad_request(e.body_text()),
    };
    let filter = state.filter_from(query);
    let rows = state.dataset.select(&filter);
    let matched = rows.len();
    ApiResponse::selected(charts::render_rows(&rows), filter, matched)
}

/// GET /api/v1/charts/:kind
pub async fn get_chart(
    State(state): State<DashboardState>,
    Path(kind): Path<String>,
    query: Result<Query<ChartQuery>, QueryRejection>,
) -> Response {
    let kind: ChartKind = match kind.parse() {
        Ok(k) => k,
        Err(e) => return ApiErrorResponse::not_found(e.to_string()),
    };
    let Query(query) = match query {
        Ok(q) => q,
        Err(e) => return ApiErrorResponse::bad_request(e.body_text()),
    };
    let filter = state.filter_from(query);
    let rows = state.dataset.select(&filter);
    let matched = rows.len();
    ApiResponse::selected(kind.build(&rows), filter, matched)
}
