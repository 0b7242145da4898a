//! Sensor reading row

use serde::{Deserialize, Serialize};

/// One sensor observation from the maintenance dataset.
///
/// Deserializes from the dataset's descriptive CSV headers and serializes
/// with snake_case field names. Identifier and target columns (`UDI`,
/// `Product ID`, `Target`) are not part of the row and are skipped by the loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Product quality variant (L, M or H)
    #[serde(rename(deserialize = "Type"))]
    pub product_type: String,
    /// Failure classification, e.g. "No Failure", "Heat Dissipation Failure"
    #[serde(rename(deserialize = "Failure Type"))]
    pub failure_type: String,
    /// Air temperature (K)
    #[serde(rename(deserialize = "Air temperature [K]"))]
    pub air_temperature: f64,
    /// Process temperature (K)
    #[serde(rename(deserialize = "Process temperature [K]"))]
    pub process_temperature: f64,
    /// Rotational speed (rpm)
    #[serde(rename(deserialize = "Rotational speed [rpm]"))]
    pub rotational_speed: u32,
    /// Torque (Nm)
    #[serde(rename(deserialize = "Torque [Nm]"))]
    pub torque: f64,
    /// Cumulative tool wear (min)
    #[serde(rename(deserialize = "Tool wear [min]"))]
    pub tool_wear: i64,
}

impl Reading {
    /// Tool wear as a plot coordinate.
    #[allow(clippy::cast_precision_loss)]
    pub fn tool_wear_f64(&self) -> f64 {
        self.tool_wear as f64
    }
}
