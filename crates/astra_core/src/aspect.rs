//! Pairwise aspect scan over the charted bodies.
//!
//! Every unordered pair of bodies is tested once, in ascending index-pair
//! order. The shortest angular separation between the pair is compared
//! against the fixed aspect table in table order, and the first type whose
//! orb tolerance covers the separation wins; a pair yields at most one
//! aspect. Conjunction is listed before opposition on purpose: ties resolve
//! by table order, not by smallest orb.

use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::position::Position;
use crate::util::angular_separation;

/// The six classified aspect types, in match-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectType {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
    Quincunx,
}

/// All aspect types in match-priority order. The scan walks this array.
pub const ALL_ASPECT_TYPES: [AspectType; 6] = [
    AspectType::Conjunction,
    AspectType::Opposition,
    AspectType::Trine,
    AspectType::Square,
    AspectType::Sextile,
    AspectType::Quincunx,
];

impl AspectType {
    /// Lowercase name of the aspect type.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Opposition => "opposition",
            Self::Trine => "trine",
            Self::Square => "square",
            Self::Sextile => "sextile",
            Self::Quincunx => "quincunx",
        }
    }

    /// Astrological glyph for the aspect.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Conjunction => "\u{260C}",
            Self::Opposition => "\u{260D}",
            Self::Trine => "\u{25B3}",
            Self::Square => "\u{25A1}",
            Self::Sextile => "\u{26B9}",
            Self::Quincunx => "\u{26BB}",
        }
    }

    /// Defining angle in degrees.
    pub const fn angle_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Opposition => 180.0,
            Self::Trine => 120.0,
            Self::Square => 90.0,
            Self::Sextile => 60.0,
            Self::Quincunx => 150.0,
        }
    }

    /// Orb tolerance in degrees (inclusive).
    pub const fn orb_deg(self) -> f64 {
        match self {
            Self::Conjunction => 8.0,
            Self::Opposition => 8.0,
            Self::Trine => 6.0,
            Self::Square => 6.0,
            Self::Sextile => 4.0,
            Self::Quincunx => 3.0,
        }
    }

    /// All aspect types in match-priority order.
    pub const fn all() -> &'static [AspectType; 6] {
        &ALL_ASPECT_TYPES
    }
}

/// A classified angular relationship between two bodies.
///
/// `body1`/`body2` are in canonical order: `body1` has the lower body index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub body1: Body,
    pub body2: Body,
    /// Defining angle of the matched type, degrees.
    pub angle_deg: f64,
    pub kind: AspectType,
    /// Absolute deviation from the defining angle, degrees, >= 0.
    pub orb_deg: f64,
    /// Whether the aspect is applying (closing) rather than separating.
    ///
    /// Proxy rule: applying iff `speed1 - speed2 > 0`. A simplification of
    /// true applying/separating geometry, which would also depend on whether
    /// the separation is closing toward or widening past the exact angle.
    pub applying: bool,
}

/// Classify a single separation against the aspect table, first match wins.
pub fn classify_separation(separation_deg: f64) -> Option<(AspectType, f64)> {
    for kind in ALL_ASPECT_TYPES {
        let orb = (separation_deg - kind.angle_deg()).abs();
        if orb <= kind.orb_deg() {
            return Some((kind, orb));
        }
    }
    None
}

/// Scan all unordered body pairs for aspects.
///
/// Pairs are visited as (0,1), (0,2), ..., (1,2), ... so the output order is
/// deterministic and each unordered pair appears at most once.
pub fn aspects(positions: &[Position]) -> Vec<Aspect> {
    let mut found = Vec::new();

    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let p1 = &positions[i];
            let p2 = &positions[j];
            let sep = angular_separation(p1.longitude_deg, p2.longitude_deg);

            if let Some((kind, orb_deg)) = classify_separation(sep) {
                found.push(Aspect {
                    body1: p1.body,
                    body2: p2.body,
                    angle_deg: kind.angle_deg(),
                    kind,
                    orb_deg,
                    applying: p1.longitude_speed - p2.longitude_speed > 0.0,
                });
            }
        }
    }

    found
}
