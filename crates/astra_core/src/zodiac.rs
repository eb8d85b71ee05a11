//! Zodiac signs and degree-within-sign decomposition.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 degrees. Any longitude in [0, 360) therefore
//! maps to exactly one sign plus a degree/minute offset within it.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in zodiacal order (Aries = 0 .. Pisces = 11).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Astrological glyph for the sign.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Aries => "\u{2648}",
            Self::Taurus => "\u{2649}",
            Self::Gemini => "\u{264A}",
            Self::Cancer => "\u{264B}",
            Self::Leo => "\u{264C}",
            Self::Virgo => "\u{264D}",
            Self::Libra => "\u{264E}",
            Self::Scorpio => "\u{264F}",
            Self::Sagittarius => "\u{2650}",
            Self::Capricorn => "\u{2651}",
            Self::Aquarius => "\u{2652}",
            Self::Pisces => "\u{2653}",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Sign containing an ecliptic longitude.
    pub fn from_longitude(longitude_deg: f64) -> Self {
        let lon = normalize_360(longitude_deg);
        // normalize_360 of a tiny negative can round to exactly 360.0; clamp
        // that edge into Pisces instead of indexing out of bounds.
        let index = ((lon / 30.0).floor() as usize).min(11);
        ALL_SIGNS[index]
    }

    /// All 12 signs in zodiacal order.
    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_SIGNS
    }
}

/// A longitude decomposed into sign, whole degrees and whole arc-minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignPosition {
    pub sign: ZodiacSign,
    /// Whole degrees within the sign, 0..=29.
    pub degree: u32,
    /// Whole arc-minutes within the degree, 0..=59.
    pub minute: u32,
}

/// Decompose an ecliptic longitude into sign + degree + arc-minute.
pub fn sign_position(longitude_deg: f64) -> SignPosition {
    let lon = normalize_360(longitude_deg);
    let in_sign = lon % 30.0;
    let degree = in_sign.floor();
    let minute = ((in_sign - degree) * 60.0).floor();
    SignPosition {
        sign: ZodiacSign::from_longitude(lon),
        degree: degree as u32,
        minute: minute as u32,
    }
}

impl std::fmt::Display for SignPosition {
    /// Formats as e.g. `15°04′ Leo`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\u{b0}{:02}\u{2032} {}",
            self.degree,
            self.minute,
            self.sign.name()
        )
    }
}
