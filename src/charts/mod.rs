//! Filter-and-render pipeline
//!
//! `render` is a pure function of (dataset, filter): select the matching rows
//! once, then build every chart from that subset with the same parameterized
//! builder. Points follow dataset order and are never sorted by tool wear.
//! An empty subset yields charts whose series hold no points.

mod definitions;

pub use definitions::{ChartDefinition, ChartKind, SeriesDefinition, UnknownChart, TOOL_WEAR_LABEL};

use crate::dataset::Dataset;
use crate::types::{ChartSet, ChartSpec, Point, Reading, ReadingFilter, Series, TraceMode};

impl ChartKind {
    /// Build this chart from an already-filtered subset.
    pub fn build(self, rows: &[&Reading]) -> ChartSpec {
        let def = self.definition();
        ChartSpec {
            title: def.title.to_string(),
            x_label: def.x_label.to_string(),
            y_label: def.y_label.to_string(),
            series: def
                .series
                .iter()
                .map(|s| Series {
                    name: s.name.to_string(),
                    mode: TraceMode::LinesAndMarkers,
                    points: rows
                        .iter()
                        .map(|r| Point {
                            x: r.tool_wear_f64(),
                            y: (s.value)(r),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// All four charts for `filter`.
pub fn render(dataset: &Dataset, filter: &ReadingFilter) -> ChartSet {
    let rows = dataset.select(filter);
    tracing::debug!(
        product_type = %filter.product_type,
        failure_type = %filter.failure_type,
        tool_wear_min = filter.tool_wear_min,
        tool_wear_max = filter.tool_wear_max,
        matched = rows.len(),
        "Rendering charts"
    );
    render_rows(&rows)
}

/// All four charts from an already-selected subset.
pub fn render_rows(rows: &[&Reading]) -> ChartSet {
    ChartSet {
        temperature: ChartKind::Temperature.build(rows),
        speed: ChartKind::Speed.build(rows),
        torque: ChartKind::Torque.build(rows),
        wear: ChartKind::Wear.build(rows),
    }
}

/// A single chart for `filter`.
pub fn render_one(dataset: &Dataset, filter: &ReadingFilter, kind: ChartKind) -> ChartSpec {
    kind.build(&dataset.select(filter))
}
