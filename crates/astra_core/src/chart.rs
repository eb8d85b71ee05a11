//! Natal-chart assembly: birth data in, full chart out.
//!
//! `calculate_natal_chart` is a pure function of its input: Julian Day, 12
//! body positions, 12 house cusps, Ascendant/Midheaven, per-body house
//! backfill, aspect scan. No caching, no shared state; identical input
//! yields identical output, and concurrent calls need no synchronization.

use log::debug;
use serde::{Deserialize, Serialize};

use astra_time::{CalendarDate, ClockTime, julian_day};

use crate::aspect::{Aspect, aspects};
use crate::body::ALL_BODIES;
use crate::error::ChartError;
use crate::house::{GeoPoint, House, house_of, houses};
use crate::position::{Position, position_of};

/// Birth data as supplied by the caller.
///
/// The time is a 24-hour `HH:MM` string; the timezone is an opaque label
/// that is carried but never resolved — the clock time is treated as already
/// being on the engine's UT scale. Latitude/longitude ranges are the
/// caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    pub date: CalendarDate,
    /// Local clock time, `HH:MM`.
    pub time: String,
    /// Latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
    /// Opaque timezone label, e.g. `America/New_York`. Not resolved.
    pub timezone: String,
}

impl BirthData {
    /// Geographic location of the birth place.
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude_deg, self.longitude_deg)
    }
}

/// A complete natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalChart {
    /// The 12 body positions, in body definition order.
    pub planets: [Position; 12],
    /// The 12 houses, in house-number order.
    pub houses: [House; 12],
    /// Ascendant = cusp of house 1, degrees.
    pub ascendant_deg: f64,
    /// Midheaven = cusp of house 10, degrees.
    pub midheaven_deg: f64,
    /// All matched aspects, one per unordered body pair at most.
    pub aspects: Vec<Aspect>,
}

/// Calculate the full natal chart for the given birth data.
pub fn calculate_natal_chart(birth: &BirthData) -> Result<NatalChart, ChartError> {
    let time = ClockTime::parse(&birth.time)?;
    let jd = julian_day(birth.date, time);
    debug!("birth {} {} -> jd {jd}", birth.date, time);

    let mut planets: [Position; 12] = std::array::from_fn(|i| position_of(ALL_BODIES[i], jd));

    let houses = houses(jd, &birth.location());
    let ascendant_deg = houses[0].cusp_deg;
    let midheaven_deg = houses[9].cusp_deg;

    for planet in &mut planets {
        planet.house = Some(house_of(planet.longitude_deg, &houses));
    }

    let aspects = aspects(&planets);
    debug!(
        "chart: asc {ascendant_deg:.4} deg, mc {midheaven_deg:.4} deg, {} aspects",
        aspects.len()
    );

    Ok(NatalChart {
        planets,
        houses,
        ascendant_deg,
        midheaven_deg,
        aspects,
    })
}
