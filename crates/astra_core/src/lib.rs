//! Natal-chart calculation engine.
//!
//! This crate provides:
//! - Closed enums for bodies, zodiac signs, and aspect types, with their
//!   fixed model tables
//! - The linear per-body position model (base longitude at J2000 + mean
//!   daily motion)
//! - Equal 30-degree houses anchored at the local sidereal angle
//! - The pairwise aspect scan with per-type orb tolerances
//! - `calculate_natal_chart`, the single entry point collaborators consume
//! - Transit positions and a daily transit-contact scan
//!
//! The whole pipeline is a pure synchronous function of its input: no I/O,
//! no caching, no shared mutable state. The linear position model is a
//! deliberately simplified stand-in for a real ephemeris with the same
//! structural shape, which makes every output exactly testable.

pub mod aspect;
pub mod body;
pub mod chart;
pub mod error;
pub mod house;
pub mod position;
pub mod transit;
pub mod util;
pub mod zodiac;

pub use aspect::{ALL_ASPECT_TYPES, Aspect, AspectType, aspects, classify_separation};
pub use body::{ALL_BODIES, Body};
pub use chart::{BirthData, NatalChart, calculate_natal_chart};
pub use error::ChartError;
pub use house::{GeoPoint, House, angle_in_span, house_of, houses};
pub use position::{Position, position_of};
pub use transit::{TransitContact, positions_at, transit_contacts};
pub use util::{angular_separation, normalize_360};
pub use zodiac::{ALL_SIGNS, SignPosition, ZodiacSign, sign_position};
