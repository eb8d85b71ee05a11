//! Calendar date and wall-clock time types.
//!
//! `CalendarDate` and `ClockTime` are the two halves of a birth instant.
//! Both parse from the plain string forms the surrounding layers hand us
//! (`YYYY-MM-DD` and 24-hour `HH:MM`). Parsing never defaults on bad input;
//! malformed strings surface as [`TimeError`].

use crate::error::TimeError;

use serde::{Deserialize, Serialize};

/// Days per month in a non-leap year, indexed by `month - 1`.
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// Construct a date, checking month and day ranges.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate(format!(
                "{year:04}-{month:02}-{day:02}"
            )));
        }
        let mut max_day = DAYS_IN_MONTH[(month - 1) as usize];
        if month == 2 && is_leap_year(year) {
            max_day = 29;
        }
        if day < 1 || day > max_day {
            return Err(TimeError::InvalidDate(format!(
                "{year:04}-{month:02}-{day:02}"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Parse a `YYYY-MM-DD` string.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let invalid = || TimeError::InvalidDate(s.to_string());
        let mut parts = s.splitn(3, '-');
        let year = parts.next().ok_or_else(invalid)?;
        let month = parts.next().ok_or_else(invalid)?;
        let day = parts.next().ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let day: u32 = day.parse().map_err(|_| invalid())?;
        Self::new(year, month, day)
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A 24-hour wall-clock time with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    /// Construct a time, checking hour and minute ranges.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 || minute > 59 {
            return Err(TimeError::InvalidTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    /// Parse a 24-hour `HH:MM` string.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let invalid = || TimeError::InvalidTime(s.to_string());
        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute)
    }

    /// Fraction of a day elapsed since midnight, in [0, 1).
    pub fn day_fraction(self) -> f64 {
        (self.hour as f64 + self.minute as f64 / 60.0) / 24.0
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Gregorian leap-year rule.
const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date() {
        let d = CalendarDate::parse("2000-01-01").unwrap();
        assert_eq!(
            d,
            CalendarDate {
                year: 2000,
                month: 1,
                day: 1
            }
        );
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(CalendarDate::parse("not-a-date").is_err());
        assert!(CalendarDate::parse("2000/01/01").is_err());
        assert!(CalendarDate::parse("2000-13-01").is_err());
        assert!(CalendarDate::parse("2000-02-30").is_err());
    }

    #[test]
    fn leap_day_accepted_in_leap_years_only() {
        assert!(CalendarDate::parse("2000-02-29").is_ok());
        assert!(CalendarDate::parse("1900-02-29").is_err());
        assert!(CalendarDate::parse("2001-02-29").is_err());
    }

    #[test]
    fn parse_time() {
        let t = ClockTime::parse("12:00").unwrap();
        assert_eq!(t, ClockTime { hour: 12, minute: 0 });
        let t = ClockTime::parse("23:59").unwrap();
        assert_eq!(
            t,
            ClockTime {
                hour: 23,
                minute: 59
            }
        );
    }

    #[test]
    fn parse_time_rejects_garbage() {
        assert!(ClockTime::parse("noon").is_err());
        assert!(ClockTime::parse("12").is_err());
        assert!(ClockTime::parse("24:00").is_err());
        assert!(ClockTime::parse("12:60").is_err());
        assert!(ClockTime::parse("12:xx").is_err());
    }

    #[test]
    fn day_fraction_noon() {
        let t = ClockTime::parse("12:00").unwrap();
        assert!((t.day_fraction() - 0.5).abs() < 1e-15);
    }

    #[test]
    fn display_roundtrip() {
        assert_eq!(CalendarDate::parse("1987-06-05").unwrap().to_string(), "1987-06-05");
        assert_eq!(ClockTime::parse("09:07").unwrap().to_string(), "09:07");
    }
}
