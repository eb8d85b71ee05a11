//! Error types for chart calculation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use astra_time::TimeError;

/// Errors from natal-chart calculation.
///
/// The pipeline is closed-form, so the only runtime failure is malformed
/// input; there is no convergence or lookup error class.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChartError {
    /// Birth date or time string could not be parsed.
    Time(TimeError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for ChartError {}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
