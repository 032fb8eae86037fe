//! Great-circle distance

use crate::core::coordinates::degrees_to_radians;

/// Mean Earth radius used for all surface distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers between two latitude/longitude pairs in degrees.
pub fn distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let phi1 = degrees_to_radians(lat1);
    let phi2 = degrees_to_radians(lat2);
    let d_phi = degrees_to_radians(lat2 - lat1);
    let d_lambda = degrees_to_radians(lng2 - lng1);

    let a = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    // Rounding can push near-antipodal pairs just past 1
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}
