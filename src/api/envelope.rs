//! Response envelope for the `/api/v1` endpoints.
//!
//! Success bodies are `{ "data": ..., "meta": { ... } }`. Chart responses also
//! carry the filter actually applied (query values merged with the initial
//! selection) and how many readings it matched, so the page can show what
//! defaults were filled in. Errors are `{ "error": { ... }, "meta": { ... } }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde::Serialize;

use crate::types::ReadingFilter;

/// API version reported in every envelope.
pub const API_VERSION: &str = "1";

/// The filter a chart response was computed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub filter: ReadingFilter,
    /// Readings that passed the filter
    pub matched: usize,
}

/// Metadata included in every response.
#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub timestamp: String,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<Selection>,
}

impl ResponseMeta {
    fn now(selection: Option<Selection>) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            version: API_VERSION,
            selection,
        }
    }
}

/// Successful response.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Response {
        Self::respond(data, None)
    }

    /// Chart data together with the selection that produced it.
    pub fn selected(data: T, filter: ReadingFilter, matched: usize) -> Response {
        Self::respond(data, Some(Selection { filter, matched }))
    }

    fn respond(data: T, selection: Option<Selection>) -> Response {
        let body = Self {
            data,
            meta: ResponseMeta::now(selection),
        };
        (StatusCode::OK, axum::Json(body)).into_response()
    }
}

/// Error detail inside [`ApiErrorResponse`].
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// Error response. Only request-shape problems end up here: a bad filter
/// value is never an error, it just matches nothing.
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ErrorDetail,
    pub meta: ResponseMeta,
}

impl ApiErrorResponse {
    fn build(status: StatusCode, code: &'static str, msg: impl Into<String>) -> Response {
        let body = Self {
            error: ErrorDetail {
                code,
                message: msg.into(),
            },
            meta: ResponseMeta::now(None),
        };
        (status, axum::Json(body)).into_response()
    }

    /// Unknown chart name.
    pub fn not_found(msg: impl Into<String>) -> Response {
        Self::build(StatusCode::NOT_FOUND, "NOT_FOUND", msg)
    }

    /// Query string that does not deserialize.
    pub fn bad_request(msg: impl Into<String>) -> Response {
        Self::build(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg)
    }
}
