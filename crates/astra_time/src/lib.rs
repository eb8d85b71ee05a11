//! Time handling for the natal-chart engine.
//!
//! This crate provides:
//! - `CalendarDate` / `ClockTime` with `YYYY-MM-DD` and `HH:MM` parsing
//! - Gregorian calendar → Julian Day conversion
//! - Greenwich/local mean sidereal angles (degree-based)
//!
//! All conversions treat the caller's clock time as already being on the UT
//! scale; timezone labels are carried by the data model but never resolved
//! here (see the engine crate's documentation for why).

pub mod calendar;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use calendar::{CalendarDate, ClockTime};
pub use error::TimeError;
pub use julian::{J2000_JD, julian_day, julian_day_number};
pub use sidereal::{gmst_deg, local_sidereal_deg};
