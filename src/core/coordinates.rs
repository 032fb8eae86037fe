//! Coordinate utilities
//!
//! Degree/radian conversion and the spherical-to-Cartesian mapping shared by
//! every consumer that places a point on the rendered globe.

use bevy::math::{DVec3, Vec3};
use std::f64::consts::PI;

/// Radius of the rendered globe in world units.
pub const DEFAULT_GLOBE_RADIUS: f64 = 100.0;

pub fn degrees_to_radians(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn radians_to_degrees(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

/// Map a latitude/longitude in degrees onto a sphere of `radius`.
///
/// Polar angle is measured from +Y (latitude 90 is "up") and the azimuth is
/// offset by 180 degrees so longitude 0 faces the reference meridian of the
/// globe texture. Any renderer placing geometry on the globe must use this
/// exact mapping.
///
/// Inputs are not range-checked; out-of-range values still produce a point.
pub fn to_cartesian(lat: f64, lng: f64, radius: f64) -> DVec3 {
    let phi = degrees_to_radians(90.0 - lat);
    let theta = degrees_to_radians(lng + 180.0);

    let x = -radius * phi.sin() * theta.cos();
    let y = radius * phi.cos();
    let z = radius * phi.sin() * theta.sin();
    DVec3::new(x, y, z)
}

/// Same mapping as [`to_cartesian`], narrowed to the f32 Bevy render space.
pub fn to_render_vec3(lat: f64, lng: f64, radius: f64) -> Vec3 {
    to_cartesian(lat, lng, radius).as_vec3()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_degrees_to_radians_known_values() {
        assert!((degrees_to_radians(180.0) - PI).abs() < EPSILON);
        assert!((degrees_to_radians(90.0) - PI / 2.0).abs() < EPSILON);
        assert!((degrees_to_radians(-45.0) + PI / 4.0).abs() < EPSILON);
        assert_eq!(degrees_to_radians(0.0), 0.0);
    }

    #[test]
    fn test_radians_to_degrees_known_values() {
        assert!((radians_to_degrees(PI) - 180.0).abs() < EPSILON);
        assert!((radians_to_degrees(-PI / 2.0) + 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_angle_roundtrip() {
        for &x in &[0.0, 1.0, -1.0, 45.5, -179.99, 360.0, 1234.5678, -98765.4321] {
            let back = degrees_to_radians(radians_to_degrees(x));
            assert!((back - x).abs() < EPSILON * x.abs().max(1.0));
            let back = radians_to_degrees(degrees_to_radians(x));
            assert!((back - x).abs() < EPSILON * x.abs().max(1.0));
        }
    }

    #[test]
    fn test_to_cartesian_north_pole_is_up() {
        let p = to_cartesian(90.0, 0.0, DEFAULT_GLOBE_RADIUS);
        assert!((p.y - DEFAULT_GLOBE_RADIUS).abs() < EPSILON);
        assert!(p.x.abs() < EPSILON);
        assert!(p.z.abs() < EPSILON);
    }

    #[test]
    fn test_to_cartesian_south_pole_is_down() {
        let p = to_cartesian(-90.0, 42.0, 1.0);
        assert!((p.y + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_to_cartesian_prime_meridian_equator() {
        // theta = 180 deg -> x = -r * 1 * -1 = r
        let p = to_cartesian(0.0, 0.0, 100.0);
        assert!((p.x - 100.0).abs() < EPSILON);
        assert!(p.y.abs() < EPSILON);
        assert!(p.z.abs() < EPSILON);
    }

    #[test]
    fn test_to_cartesian_ninety_east() {
        // theta = 270 deg -> z = r * sin(270) = -r
        let p = to_cartesian(0.0, 90.0, 100.0);
        assert!(p.x.abs() < EPSILON);
        assert!((p.z + 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_to_cartesian_lies_on_sphere() {
        for &(lat, lng) in &[(19.4326, -99.1332), (35.6762, 139.6503), (-33.8688, 151.2093)] {
            let p = to_cartesian(lat, lng, 6371.0);
            assert!((p.length() - 6371.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_to_cartesian_antimeridian_continuity() {
        let east = to_cartesian(10.0, 180.0, 1.0);
        let west = to_cartesian(10.0, -180.0, 1.0);
        assert!((east - west).length() < EPSILON);
    }

    #[test]
    fn test_to_cartesian_out_of_range_is_finite() {
        let p = to_cartesian(120.0, 540.0, 1.0);
        assert!(p.is_finite());
        assert!((p.length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_to_render_vec3_matches_f64() {
        let d = to_cartesian(48.8566, 2.3522, DEFAULT_GLOBE_RADIUS);
        let f = to_render_vec3(48.8566, 2.3522, DEFAULT_GLOBE_RADIUS);
        assert!((f.x as f64 - d.x).abs() < 1e-4);
        assert!((f.y as f64 - d.y).abs() < 1e-4);
        assert!((f.z as f64 - d.z).abs() < 1e-4);
    }
}
