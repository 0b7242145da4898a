//! In-memory maintenance dataset
//!
//! Loaded once at startup from the CSV file and shared read-only (`Arc<Dataset>`)
//! with every request handler. Nothing mutates it after construction.
//!
//! # Usage
//!
//! ```ignore
//! use wearwatch::dataset::Dataset;
//! use wearwatch::types::ReadingFilter;
//!
//! let dataset = Dataset::load("predictive_maintenance.csv")?;
//! let options = dataset.options();
//! let filter = ReadingFilter::new("M", "No Failure", options.tool_wear_min, options.tool_wear_max);
//! let rows = dataset.select(&filter);
//! ```

mod loader;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::types::{Reading, ReadingFilter};

// ============================================================================
// Errors
// ============================================================================

/// Reasons a dataset cannot be built. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot open dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read dataset header: {0}")]
    Header(#[source] csv::Error),

    #[error("dataset is missing required column '{0}'")]
    MissingColumn(String),

    #[error("malformed row at line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("dataset contains no rows")]
    Empty,
}

// ============================================================================
// Control Options
// ============================================================================

/// Values that seed the dashboard controls, derived once at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlOptions {
    /// Distinct product types, in order of first appearance
    pub product_types: Vec<String>,
    /// Distinct failure types, in order of first appearance
    pub failure_types: Vec<String>,
    /// Smallest observed tool wear (min)
    pub tool_wear_min: i64,
    /// Largest observed tool wear (min)
    pub tool_wear_max: i64,
}

impl ControlOptions {
    fn derive(readings: &[Reading]) -> Result<Self, DatasetError> {
        let first = readings.first().ok_or(DatasetError::Empty)?;

        let mut tool_wear_min = first.tool_wear;
        let mut tool_wear_max = first.tool_wear;
        for r in readings {
            tool_wear_min = tool_wear_min.min(r.tool_wear);
            tool_wear_max = tool_wear_max.max(r.tool_wear);
        }

        Ok(Self {
            product_types: distinct(readings.iter().map(|r| r.product_type.as_str())),
            failure_types: distinct(readings.iter().map(|r| r.failure_type.as_str())),
            tool_wear_min,
            tool_wear_max,
        })
    }

    /// Whether `value` occurs in the product type column.
    pub fn has_product_type(&self, value: &str) -> bool {
        self.product_types.iter().any(|p| p == value)
    }

    pub fn has_failure_type(&self, value: &str) -> bool {
        self.failure_types.iter().any(|f| f == value)
    }
}

/// Distinct values, first-appearance order.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Dataset
// ============================================================================

/// Immutable, ordered sequence of readings plus the derived control options.
#[derive(Debug, Clone)]
pub struct Dataset {
    readings: Vec<Reading>,
    options: ControlOptions,
    source: Option<PathBuf>,
}

impl Dataset {
    /// Load and parse the CSV file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let readings = loader::read_path(path)?;
        let mut dataset = Self::from_readings(readings)?;
        dataset.source = Some(path.to_path_buf());

        tracing::info!(
            path = %path.display(),
            rows = dataset.len(),
            product_types = ?dataset.options.product_types,
            failure_types = dataset.options.failure_types.len(),
            tool_wear_min = dataset.options.tool_wear_min,
            tool_wear_max = dataset.options.tool_wear_max,
            "Loaded maintenance dataset"
        );
        Ok(dataset)
    }

    /// Parse CSV text from any reader.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, DatasetError> {
        Self::from_readings(loader::read_csv(reader)?)
    }

    /// Build from rows already in memory. Fails on an empty vector because
    /// the tool-wear bounds would be undefined.
    pub fn from_readings(readings: Vec<Reading>) -> Result<Self, DatasetError> {
        let options = ControlOptions::derive(&readings)?;
        Ok(Self {
            readings,
            options,
            source: None,
        })
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn options(&self) -> &ControlOptions {
        &self.options
    }

    /// File the rows were loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Rows matching `filter`, in dataset order.
    pub fn select(&self, filter: &ReadingFilter) -> Vec<&Reading> {
        self.readings.iter().filter(|r| filter.matches(r)).collect()
    }
}
