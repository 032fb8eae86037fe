//! Spherical centroid of a point set

use crate::core::coordinates::{degrees_to_radians, radians_to_degrees};
use crate::core::point::GeoPoint;
use bevy::math::DVec3;

/// Spherical mean of the current points, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCentroid {
    pub latitude: f64,
    pub longitude: f64,
}

/// Mean position of `points` on the unit sphere.
///
/// Each point is lifted to a unit vector, the vectors are averaged component
/// wise and the mean is projected back with `atan2`. This stays correct across
/// the antimeridian and near the poles where averaging raw degrees does not.
/// The mean vector is not renormalized; `atan2` is scale invariant.
///
/// Returns `None` for an empty slice. A single point is returned unchanged.
pub fn centroid(points: &[GeoPoint]) -> Option<GeoCentroid> {
    match points {
        [] => None,
        [only] => Some(GeoCentroid {
            latitude: only.latitude,
            longitude: only.longitude,
        }),
        _ => {
            let sum: DVec3 = points
                .iter()
                .map(|p| unit_vector(p.latitude, p.longitude))
                .sum();
            let mean = sum / points.len() as f64;

            let longitude = mean.y.atan2(mean.x);
            let latitude = mean.z.atan2(mean.x.hypot(mean.y));
            Some(GeoCentroid {
                latitude: radians_to_degrees(latitude),
                longitude: radians_to_degrees(longitude),
            })
        }
    }
}

// Geodetic unit vector: z towards the north pole, x through (0, 0).
fn unit_vector(lat_deg: f64, lng_deg: f64) -> DVec3 {
    let lat = degrees_to_radians(lat_deg);
    let lng = degrees_to_radians(lng_deg);
    DVec3::new(lat.cos() * lng.cos(), lat.cos() * lng.sin(), lat.sin())
}
