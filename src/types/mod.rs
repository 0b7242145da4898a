//! Shared data structures for the predictive maintenance dashboard
//!
//! - `Reading`: one row of the sensor dataset
//! - `ReadingFilter`: the three UI controls as a row predicate
//! - `ChartSpec` / `ChartSet`: chart descriptions returned to the page

mod chart;
mod filter;
mod reading;

pub use chart::*;
pub use filter::*;
pub use reading::*;
