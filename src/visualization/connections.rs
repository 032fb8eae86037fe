//! Connection rendering
//!
//! `Straight` draws the chord between endpoints, `Arc` a lifted great-circle
//! polyline. Both blend from the start colour to the end colour.

use bevy::prelude::*;

use crate::config::GlobeConfig;
use crate::core::arc::great_circle_points;
use crate::core::coordinates::to_render_vec3;
use crate::core::topology::ConnectionPair;
use crate::topology::{ConnectionSettings, ConnectionStyle, DerivedTopology};
use crate::visualization::colors::parse_color;

pub fn draw_connections_system(
    mut gizmos: Gizmos,
    derived: Res<DerivedTopology>,
    settings: Res<ConnectionSettings>,
    config: Res<GlobeConfig>,
) {
    for pair in &derived.connections {
        let start_color = parse_color(&pair.from_color);
        let end_color = parse_color(&pair.to_color);
        match settings.style {
            ConnectionStyle::Straight => {
                let (start, end) = chord(pair, config.globe_radius);
                gizmos.line_gradient(start, end, start_color, end_color);
            }
            ConnectionStyle::Arc => {
                let strip = arc_strip(pair, &config, start_color, end_color);
                gizmos.linestrip_gradient(strip);
            }
        }
    }
}

fn chord(pair: &ConnectionPair, radius: f64) -> (Vec3, Vec3) {
    (
        to_render_vec3(pair.from.latitude(), pair.from.longitude(), radius),
        to_render_vec3(pair.to.latitude(), pair.to.longitude(), radius),
    )
}

fn arc_strip(
    pair: &ConnectionPair,
    config: &GlobeConfig,
    start_color: Color,
    end_color: Color,
) -> Vec<(Vec3, Color)> {
    let points = great_circle_points(
        (pair.from.latitude(), pair.from.longitude()),
        (pair.to.latitude(), pair.to.longitude()),
        config.globe_radius,
        config.arc_segments,
        config.arc_lift,
    );
    let last = (points.len() - 1).max(1) as f32;
    points
        .into_iter()
        .enumerate()
        .map(|(i, p)| (p.as_vec3(), start_color.mix(&end_color, i as f32 / last)))
        .collect()
}
