//! The fixed set of charted celestial bodies and their mean-motion model.
//!
//! Each body carries a base ecliptic longitude at the J2000 epoch and a
//! constant daily motion. The linear extrapolation from those two numbers is
//! a deliberate stand-in for a real ephemeris: it has the right shape
//! (per-body position as a function of Julian Day) while staying closed-form
//! and exactly testable. The North Node's mean motion is retrograde, hence
//! negative.

use serde::{Deserialize, Serialize};

/// The 12 charted bodies: the ten planets (in the astrological sense), the
/// mean lunar North Node, and Chiron.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
    Chiron,
}

/// All 12 bodies in definition order. Chart output preserves this order.
pub const ALL_BODIES: [Body; 12] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::NorthNode,
    Body::Chiron,
];

impl Body {
    /// Display name of the body.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::NorthNode => "North Node",
            Self::Chiron => "Chiron",
        }
    }

    /// Astrological glyph for the body.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Sun => "\u{2609}",
            Self::Moon => "\u{263D}",
            Self::Mercury => "\u{263F}",
            Self::Venus => "\u{2640}",
            Self::Mars => "\u{2642}",
            Self::Jupiter => "\u{2643}",
            Self::Saturn => "\u{2644}",
            Self::Uranus => "\u{2645}",
            Self::Neptune => "\u{2646}",
            Self::Pluto => "\u{2647}",
            Self::NorthNode => "\u{260A}",
            Self::Chiron => "\u{26B7}",
        }
    }

    /// 0-based index into [`ALL_BODIES`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
            Self::NorthNode => 10,
            Self::Chiron => 11,
        }
    }

    /// Ecliptic longitude in degrees at the J2000 epoch (JD 2451545.0).
    pub const fn base_longitude_deg(self) -> f64 {
        match self {
            Self::Sun => 280.0,
            Self::Moon => 45.0,
            Self::Mercury => 160.0,
            Self::Venus => 96.0,
            Self::Mars => 355.0,
            Self::Jupiter => 34.0,
            Self::Saturn => 46.0,
            Self::Uranus => 316.0,
            Self::Neptune => 302.0,
            Self::Pluto => 252.0,
            Self::NorthNode => 125.0,
            Self::Chiron => 106.0,
        }
    }

    /// Mean daily motion in degrees per day. Negative means retrograde.
    pub const fn daily_motion_deg(self) -> f64 {
        match self {
            Self::Sun => 0.985647,
            Self::Moon => 13.176358,
            Self::Mercury => 1.383,
            Self::Venus => 1.602,
            Self::Mars => 0.524,
            Self::Jupiter => 0.083,
            Self::Saturn => 0.033,
            Self::Uranus => 0.012,
            Self::Neptune => 0.006,
            Self::Pluto => 0.004,
            Self::NorthNode => -0.053,
            Self::Chiron => 0.039,
        }
    }

    /// All 12 bodies in definition order.
    pub const fn all() -> &'static [Body; 12] {
        &ALL_BODIES
    }
}
