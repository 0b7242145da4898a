//! Row filter built from the dashboard controls

use serde::{Deserialize, Serialize};

use super::Reading;

/// The three dashboard controls: product type, failure type and an
/// inclusive tool-wear range.
///
/// Values are not checked against the dataset. Unknown categories or a
/// range outside the observed bounds simply match nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingFilter {
    pub product_type: String,
    pub failure_type: String,
    pub tool_wear_min: i64,
    pub tool_wear_max: i64,
}

impl ReadingFilter {
    pub fn new(
        product_type: impl Into<String>,
        failure_type: impl Into<String>,
        tool_wear_min: i64,
        tool_wear_max: i64,
    ) -> Self {
        Self {
            product_type: product_type.into(),
            failure_type: failure_type.into(),
            tool_wear_min,
            tool_wear_max,
        }
    }

    /// Exact category match AND `min <= tool_wear <= max`.
    pub fn matches(&self, reading: &Reading) -> bool {
        reading.product_type == self.product_type
            && reading.failure_type == self.failure_type
            && reading.tool_wear >= self.tool_wear_min
            && reading.tool_wear <= self.tool_wear_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(product: &str, failure: &str, wear: i64) -> Reading {
        Reading {
            product_type: product.to_string(),
            failure_type: failure.to_string(),
            air_temperature: 300.0,
            process_temperature: 310.0,
            rotational_speed: 1500,
            torque: 40.0,
            tool_wear: wear,
        }
    }

    #[test]
    fn test_matches_requires_every_condition() {
        let filter = ReadingFilter::new("M", "No Failure", 0, 20);

        assert!(filter.matches(&reading("M", "No Failure", 10)));
        assert!(!filter.matches(&reading("L", "No Failure", 10)));
        assert!(!filter.matches(&reading("M", "Power Failure", 10)));
        assert!(!filter.matches(&reading("M", "No Failure", 21)));
        assert!(!filter.matches(&reading("M", "No Failure", -1)));
    }

    #[test]
    fn test_range_is_inclusive() {
        let filter = ReadingFilter::new("H", "No Failure", 5, 15);

        assert!(filter.matches(&reading("H", "No Failure", 5)));
        assert!(filter.matches(&reading("H", "No Failure", 15)));
        assert!(!filter.matches(&reading("H", "No Failure", 4)));
        assert!(!filter.matches(&reading("H", "No Failure", 16)));
    }

    #[test]
    fn test_category_match_is_exact() {
        let filter = ReadingFilter::new("m", "no failure", 0, 100);
        assert!(!filter.matches(&reading("M", "No Failure", 10)));

        let partial = ReadingFilter::new("M", "No", 0, 100);
        assert!(!partial.matches(&reading("M", "No Failure", 10)));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let filter = ReadingFilter::new("M", "No Failure", 20, 10);
        assert!(!filter.matches(&reading("M", "No Failure", 15)));
    }
}
