//! Gregorian calendar to Julian Day conversion.
//!
//! The Julian Day is the continuous day count used as the time axis for all
//! of the engine's formulas. Conversion uses the standard integer Gregorian
//! algorithm (Fliegel & Van Flandern form): with `a = (14 - month) / 12`,
//! `y = year + 4800 - a`, `m = month + 12a - 3`,
//!
//! ```text
//! jdn = day + (153m + 2)/5 + 365y + y/4 - y/100 + y/400 - 32045
//! ```
//!
//! (all divisions floored). `jdn` is the Julian Day Number of the civil day;
//! the day itself begins at JD `jdn - 0.5` (the preceding midnight UT), so
//! noon on 2000-01-01 lands exactly on the J2000 epoch, JD 2451545.0.
//!
//! No timezone correction is applied here: the caller's clock time is taken
//! to already be on the UT scale the rest of the engine uses.

use crate::calendar::{CalendarDate, ClockTime};

/// Julian Day of the J2000.0 reference epoch (2000-01-01 12:00 UT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Day Number of a Gregorian calendar date.
pub fn julian_day_number(date: CalendarDate) -> i64 {
    let a = (14 - date.month as i64).div_euclid(12);
    let y = date.year as i64 + 4800 - a;
    let m = date.month as i64 + 12 * a - 3;
    date.day as i64
        + (153 * m + 2).div_euclid(5)
        + 365 * y
        + y.div_euclid(4)
        - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Julian Day of a calendar date plus clock time (UT).
pub fn julian_day(date: CalendarDate, time: ClockTime) -> f64 {
    julian_day_number(date) as f64 - 0.5 + time.day_fraction()
}
