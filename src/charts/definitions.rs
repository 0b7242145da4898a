//! Static chart layouts: titles, axis labels and the series each chart plots.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::Reading;

/// X-axis label shared by every chart.
pub const TOOL_WEAR_LABEL: &str = "Tool wear [min]";

/// One plotted line: a display name and the column it reads.
#[derive(Clone, Copy)]
pub struct SeriesDefinition {
    pub name: &'static str,
    pub value: fn(&Reading) -> f64,
}

impl fmt::Debug for SeriesDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeriesDefinition")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Fixed layout of one chart, independent of the filter.
#[derive(Debug, Clone, Copy)]
pub struct ChartDefinition {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub series: &'static [SeriesDefinition],
}

static TEMPERATURE: ChartDefinition = ChartDefinition {
    title: "Air and Process Temperature vs. Tool Wear",
    x_label: TOOL_WEAR_LABEL,
    y_label: "Temperature [K]",
    series: &[
        SeriesDefinition {
            name: "Air temperature",
            value: |r| r.air_temperature,
        },
        SeriesDefinition {
            name: "Process temperature",
            value: |r| r.process_temperature,
        },
    ],
};

static SPEED: ChartDefinition = ChartDefinition {
    title: "Rotational Speed vs. Tool Wear",
    x_label: TOOL_WEAR_LABEL,
    y_label: "Rotational speed [rpm]",
    series: &[SeriesDefinition {
        name: "Rotational speed",
        value: |r| f64::from(r.rotational_speed),
    }],
};

static TORQUE: ChartDefinition = ChartDefinition {
    title: "Torque vs. Tool Wear",
    x_label: TOOL_WEAR_LABEL,
    y_label: "Torque [Nm]",
    series: &[SeriesDefinition {
        name: "Torque",
        value: |r| r.torque,
    }],
};

static WEAR: ChartDefinition = ChartDefinition {
    title: "Tool Wear vs. Tool Wear",
    x_label: TOOL_WEAR_LABEL,
    y_label: "Tool wear [min]",
    series: &[SeriesDefinition {
        name: "Tool wear",
        value: Reading::tool_wear_f64,
    }],
};

/// The four dashboard charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Temperature,
    Speed,
    Torque,
    Wear,
}

impl ChartKind {
    /// Display order on the page (row-major 2x2 grid).
    pub const ALL: [Self; 4] = [Self::Temperature, Self::Speed, Self::Torque, Self::Wear];

    pub fn definition(self) -> &'static ChartDefinition {
        match self {
            Self::Temperature => &TEMPERATURE,
            Self::Speed => &SPEED,
            Self::Torque => &TORQUE,
            Self::Wear => &WEAR,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Speed => "speed",
            Self::Torque => "torque",
            Self::Wear => "wear",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised chart name in a request path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown chart '{0}' (expected temperature, speed, torque or wear)")]
pub struct UnknownChart(pub String);

impl FromStr for ChartKind {
    type Err = UnknownChart;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownChart(s.to_string()))
    }
}
