//! Glyph layout: fanning out bodies that share a house.
//!
//! Bodies in the same house can sit within a degree or two of each other;
//! drawn at their natural angles the glyphs overlap. This spreads them
//! symmetrically around their natural positions, in longitude order, using a
//! separation step capped at 6° and shrunk when the house is crowded.

use astra_core::Body;

use crate::geometry::chart_angle_deg;

/// A body placed at an adjusted drawing angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedGlyph {
    pub body: Body,
    /// Adjusted chart angle to draw at, [0, 360).
    pub angle_deg: f64,
    /// The body's unadjusted ecliptic longitude.
    pub longitude_deg: f64,
}

/// Spread the bodies in one house so their glyphs do not overlap.
///
/// `house_start_angle_deg`/`house_end_angle_deg` are the house's chart
/// angles; the separation step is `min(6°, span / (count + 1))`.
pub fn distribute_in_house(
    bodies: &[(Body, f64)],
    house_start_angle_deg: f64,
    house_end_angle_deg: f64,
) -> Vec<PlacedGlyph> {
    match bodies {
        [] => return Vec::new(),
        [(body, longitude_deg)] => {
            return vec![PlacedGlyph {
                body: *body,
                angle_deg: chart_angle_deg(*longitude_deg),
                longitude_deg: *longitude_deg,
            }];
        }
        _ => {}
    }

    let mut sorted: Vec<(Body, f64)> = bodies.to_vec();
    sorted.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut span = house_end_angle_deg - house_start_angle_deg;
    if span < 0.0 {
        span += 360.0;
    }
    let count = sorted.len();
    let step = (span / (count + 1) as f64).min(6.0);

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, (body, longitude_deg))| {
            let adjustment = (i as f64 - (count - 1) as f64 / 2.0) * step;
            let angle_deg = (chart_angle_deg(longitude_deg) + adjustment).rem_euclid(360.0);
            PlacedGlyph {
                body,
                angle_deg,
                longitude_deg,
            }
        })
        .collect()
}
