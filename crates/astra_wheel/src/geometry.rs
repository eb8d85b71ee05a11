//! Angle convention and polar-to-Cartesian projection for the chart wheel.
//!
//! Ecliptic 0° (the Aries point) is drawn at the 9 o'clock position and
//! increasing longitude sweeps clockwise on screen, hence
//! `chart_angle = 270 - longitude (mod 360)`. All drawing code downstream
//! works in chart angles, never raw longitudes.

use astra_core::normalize_360;

/// Default radius of the main wheel circle.
pub const CHART_RADIUS: f64 = 150.0;
/// Inner radius of the zodiac band.
pub const INNER_RADIUS: f64 = 120.0;
/// Outer radius of the zodiac band.
pub const OUTER_RADIUS: f64 = 180.0;
/// Radius at which house numbers sit.
pub const HOUSE_RADIUS: f64 = 100.0;
/// Radius at which planet glyphs sit.
pub const PLANET_RADIUS: f64 = 135.0;

/// A point in chart (screen) space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// Convert an ecliptic longitude to a chart-drawing angle in [0, 360).
pub fn chart_angle_deg(longitude_deg: f64) -> f64 {
    normalize_360(270.0 - longitude_deg)
}

/// Point at `angle_deg` (degrees) and `radius` on a circle centered at
/// `(cx, cy)`.
pub fn point_on_circle(angle_deg: f64, radius: f64, cx: f64, cy: f64) -> ChartPoint {
    let rad = angle_deg.to_radians();
    ChartPoint {
        x: cx + radius * rad.cos(),
        y: cy + radius * rad.sin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn aries_point_at_nine_oclock() {
        assert_abs_diff_eq!(chart_angle_deg(0.0), 270.0);
        assert_abs_diff_eq!(chart_angle_deg(90.0), 180.0);
        assert_abs_diff_eq!(chart_angle_deg(180.0), 90.0);
        assert_abs_diff_eq!(chart_angle_deg(270.0), 0.0);
    }

    #[test]
    fn chart_angle_stays_in_range() {
        for lon in [-30.0, 0.0, 271.0, 359.9, 725.0] {
            let a = chart_angle_deg(lon);
            assert!((0.0..360.0).contains(&a), "lon {lon} -> {a}");
        }
    }

    #[test]
    fn cardinal_points() {
        let p = point_on_circle(0.0, 100.0, 0.0, 0.0);
        assert_abs_diff_eq!(p.x, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-9);

        let p = point_on_circle(90.0, 100.0, 0.0, 0.0);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn center_offset_applies() {
        let p = point_on_circle(180.0, 50.0, 200.0, 300.0);
        assert_abs_diff_eq!(p.x, 150.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 300.0, epsilon = 1e-9);
    }
}
