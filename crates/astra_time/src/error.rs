//! Error types for calendar/clock parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from date/time string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// A `YYYY-MM-DD` date string could not be parsed or is out of range.
    InvalidDate(String),
    /// An `HH:MM` time string could not be parsed or is out of range.
    InvalidTime(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "invalid date: {s}"),
            Self::InvalidTime(s) => write!(f, "invalid time: {s}"),
        }
    }
}

impl Error for TimeError {}
