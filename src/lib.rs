//! Wearwatch: Predictive Maintenance Dashboard
//!
//! Loads a static dataset of machine sensor readings once at startup and
//! serves an interactive page with four charts plotted against tool wear,
//! filtered by product type, failure type and a tool-wear range.
//!
//! ## Architecture
//!
//! - **Dataset**: immutable in-memory rows plus derived control options
//! - **Charts**: pure filter-and-render pipeline, one parameterized chart builder
//! - **API**: axum router serving the page and JSON chart data
//! - **Config**: TOML configuration with unknown-key warnings

pub mod api;
pub mod charts;
pub mod config;
pub mod dataset;
pub mod types;

// Re-export configuration
pub use config::DashboardConfig;

// Re-export commonly used types
pub use types::{ChartSet, ChartSpec, Point, Reading, ReadingFilter, Series, TraceMode};

// Re-export the pipeline
pub use charts::{render, render_one, render_rows, ChartKind};
pub use dataset::{ControlOptions, Dataset, DatasetError};
