//! SVG path-data strings for the wheel's shapes.
//!
//! These build plain `M`/`L`/`A`/`Z` command strings any 2D vector layer can
//! consume. Angles are chart angles in degrees (see [`crate::geometry`]);
//! radii and centers are in the same unit space as the radius constants.

use crate::geometry::point_on_circle;

/// Annular sector between two chart angles and two radii, closed.
///
/// The boundary runs inner-start → outer-start → outer arc → inner-end →
/// inner arc back. The arc flag switches to the large arc when the sector
/// spans more than 180°.
pub fn sector_path(
    start_angle_deg: f64,
    end_angle_deg: f64,
    inner_radius: f64,
    outer_radius: f64,
    cx: f64,
    cy: f64,
) -> String {
    let inner_start = point_on_circle(start_angle_deg, inner_radius, cx, cy);
    let outer_start = point_on_circle(start_angle_deg, outer_radius, cx, cy);
    let outer_end = point_on_circle(end_angle_deg, outer_radius, cx, cy);
    let inner_end = point_on_circle(end_angle_deg, inner_radius, cx, cy);

    let large_arc = if end_angle_deg - start_angle_deg <= 180.0 {
        '0'
    } else {
        '1'
    };

    format!(
        "M {} {} L {} {} A {} {} 0 {} 1 {} {} L {} {} A {} {} 0 {} 0 {} {} Z",
        inner_start.x,
        inner_start.y,
        outer_start.x,
        outer_start.y,
        outer_radius,
        outer_radius,
        large_arc,
        outer_end.x,
        outer_end.y,
        inner_end.x,
        inner_end.y,
        inner_radius,
        inner_radius,
        large_arc,
        inner_start.x,
        inner_start.y,
    )
}

/// Straight radial segment at one chart angle, from `start_radius` out to
/// `end_radius`. Used for house-cusp spokes.
pub fn radial_line_path(
    angle_deg: f64,
    start_radius: f64,
    end_radius: f64,
    cx: f64,
    cy: f64,
) -> String {
    let start = point_on_circle(angle_deg, start_radius, cx, cy);
    let end = point_on_circle(angle_deg, end_radius, cx, cy);
    format!("M {} {} L {} {}", start.x, start.y, end.x, end.y)
}

/// Straight chord between two chart angles at one radius. Used for aspect
/// lines between bodies.
pub fn chord_path(angle1_deg: f64, angle2_deg: f64, radius: f64, cx: f64, cy: f64) -> String {
    let p1 = point_on_circle(angle1_deg, radius, cx, cy);
    let p2 = point_on_circle(angle2_deg, radius, cx, cy);
    format!("M {} {} L {} {}", p1.x, p1.y, p2.x, p2.y)
}
