//! Shared angle utilities.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Shortest angular separation between two longitudes, degrees in [0, 180].
pub fn angular_separation(lon1_deg: f64, lon2_deg: f64) -> f64 {
    let diff = (lon1_deg - lon2_deg).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}
