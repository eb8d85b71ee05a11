//! Transit positions and transit-to-natal contact search.
//!
//! `positions_at` gives the charted bodies' positions at an arbitrary
//! instant. `transit_contacts` walks a date range in whole-day steps and
//! classifies every transiting body against every natal body using the same
//! aspect table as the natal scan. The daily step matches the linear
//! position model's resolution; only the Moon moves more than a degree or
//! two per step.

use serde::{Deserialize, Serialize};

use crate::aspect::{AspectType, classify_separation};
use crate::body::{ALL_BODIES, Body};
use crate::chart::NatalChart;
use crate::position::{Position, position_of};
use crate::util::angular_separation;

/// Positions of all 12 bodies at a Julian Day, in definition order.
pub fn positions_at(jd: f64) -> [Position; 12] {
    std::array::from_fn(|i| position_of(ALL_BODIES[i], jd))
}

/// One transiting body aspecting one natal body on one scan day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitContact {
    /// Julian Day of the scan step.
    pub jd: f64,
    /// The moving (transiting) body.
    pub transit_body: Body,
    /// The natal body being aspected.
    pub natal_body: Body,
    pub kind: AspectType,
    /// Deviation from the exact aspect angle, degrees.
    pub orb_deg: f64,
}

/// Scan `days` whole-day steps from `start_jd` for transit-to-natal aspects.
///
/// Steps are `start_jd, start_jd + 1, ..., start_jd + days - 1`. Output is
/// ordered by day, then transiting body, then natal body.
pub fn transit_contacts(natal: &NatalChart, start_jd: f64, days: u32) -> Vec<TransitContact> {
    let mut contacts = Vec::new();

    for day in 0..days {
        let jd = start_jd + day as f64;
        let transits = positions_at(jd);

        for transit in &transits {
            for natal_planet in &natal.planets {
                let sep =
                    angular_separation(transit.longitude_deg, natal_planet.longitude_deg);
                if let Some((kind, orb_deg)) = classify_separation(sep) {
                    contacts.push(TransitContact {
                        jd,
                        transit_body: transit.body,
                        natal_body: natal_planet.body,
                        kind,
                        orb_deg,
                    });
                }
            }
        }
    }

    contacts
}
