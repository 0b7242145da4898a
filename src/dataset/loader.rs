//! CSV parsing for the maintenance dataset
//!
//! Columns are matched by header name, so column order is free and extra
//! columns (`UDI`, `Product ID`, `Target`, ...) are ignored.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::DatasetError;
use crate::types::Reading;

/// Header names the dashboard needs.
const REQUIRED_COLUMNS: [&str; 7] = [
    "Type",
    "Failure Type",
    "Air temperature [K]",
    "Process temperature [K]",
    "Rotational speed [rpm]",
    "Torque [Nm]",
    "Tool wear [min]",
];

pub(super) fn read_path(path: &Path) -> Result<Vec<Reading>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv(BufReader::new(file))
}

pub(super) fn read_csv<R: Read>(reader: R) -> Result<Vec<Reading>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().map_err(DatasetError::Header)?;
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(DatasetError::MissingColumn((*missing).to_string()));
    }

    let mut readings = Vec::new();
    for (idx, result) in reader.deserialize::<Reading>().enumerate() {
        let reading = result.map_err(|source| DatasetError::Row {
            // Header occupies line 1
            line: source
                .position()
                .map_or(idx as u64 + 2, csv::Position::line),
            source,
        })?;
        readings.push(reading);
    }

    Ok(readings)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "UDI,Product ID,Type,Air temperature [K],Process temperature [K],\
Rotational speed [rpm],Torque [Nm],Tool wear [min],Target,Failure Type";

    #[test]
    fn test_reads_rows_and_ignores_extra_columns() {
        let csv = format!(
            "{HEADER}\n\
             1,M14860,M,298.1,308.6,1551,42.8,0,0,No Failure\n\
             2,L47181,L,298.2,308.7,1408,46.3,3,0,No Failure\n"
        );
        let rows = read_csv(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].product_type, "M");
        assert_eq!(rows[0].failure_type, "No Failure");
        assert!((rows[0].air_temperature - 298.1).abs() < f64::EPSILON);
        assert!((rows[0].process_temperature - 308.6).abs() < f64::EPSILON);
        assert_eq!(rows[0].rotational_speed, 1551);
        assert!((rows[0].torque - 42.8).abs() < f64::EPSILON);
        assert_eq!(rows[1].tool_wear, 3);
    }

    #[test]
    fn test_column_order_is_free() {
        let csv = "Tool wear [min],Torque [Nm],Rotational speed [rpm],Process temperature [K],\
Air temperature [K],Failure Type,Type\n\
                   12,40.1,1500,310.0,300.0,Power Failure,H\n";
        let rows = read_csv(csv.as_bytes()).unwrap();

        assert_eq!(rows[0].tool_wear, 12);
        assert_eq!(rows[0].product_type, "H");
        assert_eq!(rows[0].failure_type, "Power Failure");
    }

    #[test]
    fn test_missing_column_reported() {
        let csv = "Type,Failure Type,Air temperature [K],Process temperature [K],\
Rotational speed [rpm],Torque [Nm]\n\
                   M,No Failure,298.1,308.6,1551,42.8\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        match err {
            DatasetError::MissingColumn(col) => assert_eq!(col, "Tool wear [min]"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_value_reports_line() {
        let csv = format!(
            "{HEADER}\n\
             1,M14860,M,298.1,308.6,1551,42.8,0,0,No Failure\n\
             2,L47181,L,298.2,308.7,fast,46.3,3,0,No Failure\n"
        );
        let err = read_csv(csv.as_bytes()).unwrap_err();
        match err {
            DatasetError::Row { line, .. } => assert_eq!(line, 3),
            other => panic!("expected Row error, got {other:?}"),
        }
    }

    #[test]
    fn test_header_only_yields_no_rows() {
        let rows = read_csv(format!("{HEADER}\n").as_bytes()).unwrap();
        assert!(rows.is_empty());
    }
}
