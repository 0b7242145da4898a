//! Chart descriptions returned to the dashboard page

use serde::{Deserialize, Serialize};

/// A single (tool wear, value) sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceMode {
    #[serde(rename = "lines+markers")]
    LinesAndMarkers,
}

/// One named line on a chart. Points keep dataset order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub mode: TraceMode,
    pub points: Vec<Point>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Title, axis labels and series of a single plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

impl ChartSpec {
    /// Total number of points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }
}

/// The four dashboard charts for one filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSet {
    pub temperature: ChartSpec,
    pub speed: ChartSpec,
    pub torque: ChartSpec,
    pub wear: ChartSpec,
}

impl ChartSet {
    pub fn iter(&self) -> impl Iterator<Item = &ChartSpec> {
        [&self.temperature, &self.speed, &self.torque, &self.wear].into_iter()
    }
}
