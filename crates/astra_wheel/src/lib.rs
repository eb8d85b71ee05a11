//! Projection geometry for drawing a natal chart as a circular wheel.
//!
//! Pure, stateless helpers: longitude → chart angle, polar → Cartesian,
//! SVG-style path strings for zodiac sectors, house spokes and aspect
//! chords, and glyph fan-out for crowded houses. Nothing here depends on
//! the chart pipeline at call time; everything takes plain angles and radii.

pub mod geometry;
pub mod layout;
pub mod path;

pub use geometry::{
    CHART_RADIUS, ChartPoint, HOUSE_RADIUS, INNER_RADIUS, OUTER_RADIUS, PLANET_RADIUS,
    chart_angle_deg, point_on_circle,
};
pub use layout::{PlacedGlyph, distribute_in_house};
pub use path::{chord_path, radial_line_path, sector_path};
