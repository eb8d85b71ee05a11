//! Equal-house computation anchored at the local sidereal angle.
//!
//! Cusp of house *i* (0-indexed) = `normalize_360(lst + i * 30)`, where
//! `lst` is the local sidereal angle of the birth place. The Ascendant is
//! the cusp of house 1 and the Midheaven the cusp of house 10.
//!
//! Geographic latitude is carried by [`GeoPoint`] but does not influence the
//! equal division; only a latitude-dependent system (Placidus, Koch, ...)
//! would use it, and those would replace [`houses`] wholesale.

use serde::{Deserialize, Serialize};

use astra_time::{gmst_deg, local_sidereal_deg};

use crate::util::normalize_360;
use crate::zodiac::ZodiacSign;

/// Geographic location of the observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, north positive, [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive, [-180, 180].
    pub longitude_deg: f64,
}

impl GeoPoint {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }
}

/// A single house: number, cusp longitude, and the sign on the cusp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct House {
    /// House number, 1..=12. House 1 is the Ascendant.
    pub number: u8,
    /// Ecliptic longitude of the cusp in degrees, [0, 360).
    pub cusp_deg: f64,
    /// Sign on the cusp.
    pub sign: ZodiacSign,
}

/// Compute the 12 equal house cusps for an instant and place.
pub fn houses(jd: f64, location: &GeoPoint) -> [House; 12] {
    let lst = local_sidereal_deg(gmst_deg(jd), location.longitude_deg);

    std::array::from_fn(|i| {
        let cusp_deg = normalize_360(lst + (i as f64) * 30.0);
        House {
            number: (i + 1) as u8,
            cusp_deg,
            sign: ZodiacSign::from_longitude(cusp_deg),
        }
    })
}

/// Whether `angle` lies in the half-open span `[start, end)` on the circle.
///
/// Handles the 360°→0° wrap: when `start > end` the span crosses zero.
pub fn angle_in_span(angle: f64, start: f64, end: f64) -> bool {
    if start <= end {
        angle >= start && angle < end
    } else {
        angle >= start || angle < end
    }
}

/// House number (1..=12) containing an ecliptic longitude.
///
/// The 12 spans tile the full circle, so exactly one always matches; the
/// fall-through to house 1 is a defensive default, not an expected path.
pub fn house_of(longitude_deg: f64, houses: &[House; 12]) -> u8 {
    for i in 0..houses.len() {
        let start = houses[i].cusp_deg;
        let end = houses[(i + 1) % houses.len()].cusp_deg;
        if angle_in_span(longitude_deg, start, end) {
            return houses[i].number;
        }
    }
    1
}
