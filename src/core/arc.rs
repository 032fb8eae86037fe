//! Great-circle sampling for arc-style connections

use bevy::math::DVec3;
use std::f64::consts::PI;

use crate::core::coordinates::to_cartesian;

/// Sample the great circle between two lat/lng positions on a globe of `radius`.
///
/// Returns `segments + 1` points from start to end. `lift` raises the middle of
/// the arc above the surface as a fraction of the radius so long arcs stay
/// visible over the globe; endpoints always sit on the surface.
pub fn great_circle_points(
    (lat1, lng1): (f64, f64),
    (lat2, lng2): (f64, f64),
    radius: f64,
    segments: u32,
    lift: f64,
) -> Vec<DVec3> {
    let segments = segments.max(1);
    let a = to_cartesian(lat1, lng1, 1.0);
    let b = to_cartesian(lat2, lng2, 1.0);
    let omega = a.angle_between(b);

    // Lift grows with arc length so short hops hug the surface
    let peak = lift * (omega / PI);

    (0..=segments)
        .map(|i| {
            let t = i as f64 / segments as f64;
            let dir = slerp_unit(a, b, omega, t);
            let height = 1.0 + peak * (PI * t).sin();
            dir * radius * height
        })
        .collect()
}

fn slerp_unit(a: DVec3, b: DVec3, omega: f64, t: f64) -> DVec3 {
    let sin_omega = omega.sin();
    if omega < 1e-9 {
        return a;
    }
    if sin_omega.abs() < 1e-9 {
        // Antipodal: any great circle works, pick one through a fixed orthogonal axis
        let axis = a.any_orthonormal_vector();
        return a * (PI * t).cos() + axis * (PI * t).sin();
    }
    let wa = ((1.0 - t) * omega).sin() / sin_omega;
    let wb = (t * omega).sin() / sin_omega;
    (a * wa + b * wb).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_arc_endpoints_on_surface() {
        let pts = great_circle_points((19.4326, -99.1332), (35.6762, 139.6503), 100.0, 32, 0.2);
        assert_eq!(pts.len(), 33);
        let start = to_cartesian(19.4326, -99.1332, 100.0);
        let end = to_cartesian(35.6762, 139.6503, 100.0);
        assert!((pts[0] - start).length() < 1e-6);
        assert!((pts[32] - end).length() < 1e-6);
    }

    #[test]
    fn test_arc_without_lift_stays_on_sphere() {
        let pts = great_circle_points((0.0, 0.0), (0.0, 90.0), 100.0, 16, 0.0);
        for p in &pts {
            assert!((p.length() - 100.0).abs() < 1e-6);
        }
        // Midpoint of the quarter arc sits at longitude 45
        let mid = to_cartesian(0.0, 45.0, 100.0);
        assert!((pts[8] - mid).length() < 1e-6);
    }

    #[test]
    fn test_arc_lift_raises_midpoint() {
        let pts = great_circle_points((0.0, 0.0), (0.0, 90.0), 100.0, 16, 0.2);
        assert!(pts[8].length() > 100.0 + EPSILON);
        assert!((pts[0].length() - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_arc_identical_points_collapse() {
        let pts = great_circle_points((10.0, 10.0), (10.0, 10.0), 50.0, 8, 0.3);
        assert_eq!(pts.len(), 9);
        for p in &pts {
            assert!((p.length() - 50.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_arc_antipodal_is_finite() {
        let pts = great_circle_points((0.0, 0.0), (0.0, 180.0), 1.0, 8, 0.0);
        for p in &pts {
            assert!(p.is_finite());
            assert!((p.length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_arc_zero_segments_is_clamped() {
        let pts = great_circle_points((0.0, 0.0), (0.0, 10.0), 1.0, 0, 0.0);
        assert_eq!(pts.len(), 2);
    }
}
