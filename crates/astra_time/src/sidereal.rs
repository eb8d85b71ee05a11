//! Greenwich mean sidereal angle and local sidereal angle, in degrees.
//!
//! The house system anchors its cusps at the local sidereal angle of the
//! birth place. This uses the two-term mean formula
//!
//! ```text
//! gmst = 280.46061837 + 360.98564736629 * (jd - J2000)   (mod 360)
//! ```
//!
//! which is the linear part of the IAU GMST expression. The higher-order
//! polynomial terms are dropped by design; the position model this engine
//! pairs with is itself a linear mean-motion model.

use crate::julian::J2000_JD;

/// Greenwich mean sidereal angle at a Julian Day, degrees in [0, 360).
pub fn gmst_deg(jd: f64) -> f64 {
    (280.46061837 + 360.98564736629 * (jd - J2000_JD)).rem_euclid(360.0)
}

/// Local sidereal angle from GMST and observer east longitude, degrees in [0, 360).
pub fn local_sidereal_deg(gmst: f64, east_longitude_deg: f64) -> f64 {
    (gmst + east_longitude_deg).rem_euclid(360.0)
}
