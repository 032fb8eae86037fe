//! Point and centroid markers

use bevy::prelude::*;

use crate::config::GlobeConfig;
use crate::core::coordinates::to_render_vec3;
use crate::core::point::PointColor;
use crate::core::topology::CENTROID_COLOR;
use crate::points::PointStore;
use crate::topology::DerivedTopology;
use crate::visualization::colors::parse_color;

// Marker sizes as a fraction of the globe radius
const POINT_MARKER_SCALE: f32 = 0.015;
const CENTROID_MARKER_SCALE: f32 = 0.025;

pub fn draw_markers_system(
    mut gizmos: Gizmos,
    store: Res<PointStore>,
    derived: Res<DerivedTopology>,
    config: Res<GlobeConfig>,
) {
    let radius = config.globe_radius;
    let globe_radius = radius as f32;

    for point in store.points() {
        let position = to_render_vec3(point.latitude, point.longitude, radius);
        gizmos.sphere(
            position,
            globe_radius * POINT_MARKER_SCALE,
            parse_color(&point.color),
        );
    }

    if let Some(centroid) = derived.centroid {
        let position = to_render_vec3(centroid.latitude, centroid.longitude, radius);
        let color = parse_color(&PointColor::new(CENTROID_COLOR));
        gizmos.sphere(position, globe_radius * CENTROID_MARKER_SCALE, color);
        // Stalk so the centroid reads as distinct from regular points
        gizmos.line(position, position * 1.06, color);
    }
}
