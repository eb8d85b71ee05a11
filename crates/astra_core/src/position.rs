//! Per-body position model: linear mean-motion extrapolation from J2000.
//!
//! `longitude = normalize_360(base + (jd - J2000) * daily_motion)`. Latitude
//! and distance are fixed at 0 and 1 in this model, and their speeds at 0;
//! the fields exist so the output shape matches what a full ephemeris would
//! produce.

use serde::{Deserialize, Serialize};

use astra_time::J2000_JD;

use crate::body::Body;
use crate::util::normalize_360;
use crate::zodiac::{ZodiacSign, sign_position};

/// Computed position of one body at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub body: Body,
    /// Ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees (0 in this model).
    pub latitude_deg: f64,
    /// Distance in AU (1 in this model).
    pub distance_au: f64,
    /// Longitude speed in degrees/day; negative means retrograde.
    pub longitude_speed: f64,
    /// Latitude speed in degrees/day (0 in this model).
    pub latitude_speed: f64,
    /// Distance speed in AU/day (0 in this model).
    pub distance_speed: f64,
    /// Sign containing the longitude.
    pub sign: ZodiacSign,
    /// Whole degrees within the sign, 0..=29.
    pub degree: u32,
    /// Whole arc-minutes within the degree, 0..=59.
    pub minute: u32,
    /// House number 1..=12, filled in once house cusps are known.
    pub house: Option<u8>,
}

/// Position of a body at a Julian Day.
pub fn position_of(body: Body, jd: f64) -> Position {
    let days = jd - J2000_JD;
    let longitude_deg = normalize_360(body.base_longitude_deg() + days * body.daily_motion_deg());
    let sp = sign_position(longitude_deg);

    Position {
        body,
        longitude_deg,
        latitude_deg: 0.0,
        distance_au: 1.0,
        longitude_speed: body.daily_motion_deg(),
        latitude_speed: 0.0,
        distance_speed: 0.0,
        sign: sp.sign,
        degree: sp.degree,
        minute: sp.minute,
        house: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::ALL_BODIES;

    #[test]
    fn sun_at_epoch_is_base() {
        let p = position_of(Body::Sun, J2000_JD);
        assert!((p.longitude_deg - 280.0).abs() < 1e-12);
        assert_eq!(p.sign, ZodiacSign::Capricorn);
        assert_eq!(p.degree, 10);
        assert_eq!(p.minute, 0);
    }

    #[test]
    fn all_bodies_at_epoch_are_base() {
        for body in ALL_BODIES {
            let p = position_of(body, J2000_JD);
            assert!(
                (p.longitude_deg - body.base_longitude_deg()).abs() < 1e-12,
                "{}",
                body.name()
            );
        }
    }

    #[test]
    fn sun_advances_by_daily_motion() {
        let p = position_of(Body::Sun, J2000_JD + 10.0);
        assert!((p.longitude_deg - (280.0 + 10.0 * 0.985647)).abs() < 1e-9);
    }

    #[test]
    fn node_moves_backwards() {
        let p0 = position_of(Body::NorthNode, J2000_JD);
        let p1 = position_of(Body::NorthNode, J2000_JD + 1.0);
        let delta = (p1.longitude_deg - p0.longitude_deg + 540.0) % 360.0 - 180.0;
        assert!((delta + 0.053).abs() < 1e-9, "node moved {delta} deg/day");
        assert!(p1.longitude_speed < 0.0);
    }

    #[test]
    fn longitude_always_normalized() {
        // Far past and future epochs, including ones that drive the raw
        // linear term far outside [0, 360) in both directions.
        for &jd in &[0.0, 1_000_000.0, 2_451_545.0, 3_000_000.0, 10_000_000.0] {
            for body in ALL_BODIES {
                let p = position_of(body, jd);
                assert!(
                    (0.0..360.0).contains(&p.longitude_deg),
                    "{} at jd {jd}: {}",
                    body.name(),
                    p.longitude_deg
                );
            }
        }
    }

    #[test]
    fn fixed_model_fields() {
        let p = position_of(Body::Venus, J2000_JD + 1234.5);
        assert_eq!(p.latitude_deg, 0.0);
        assert_eq!(p.distance_au, 1.0);
        assert_eq!(p.latitude_speed, 0.0);
        assert_eq!(p.distance_speed, 0.0);
        assert_eq!(p.house, None);
    }
}
