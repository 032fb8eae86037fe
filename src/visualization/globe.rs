//! Globe sphere and graticule

use bevy::prelude::*;

use crate::config::GlobeConfig;
use crate::core::coordinates::to_render_vec3;
use crate::visualization::colors::{globe_base_color, graticule_color};

/// Marker for the globe mesh entity
#[derive(Component)]
pub struct GlobeSurface;

const GRATICULE_STEP_DEG: i32 = 30;
const GRATICULE_SEGMENTS: i32 = 72;

pub fn spawn_globe(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<GlobeConfig>,
) {
    let base = globe_base_color(config.map_style).with_alpha(config.globe_opacity);
    let alpha_mode = if config.globe_opacity < 1.0 {
        AlphaMode::Blend
    } else {
        AlphaMode::Opaque
    };

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(config.globe_radius as f32).mesh().uv(96, 48))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: base,
            alpha_mode,
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_xyz(0.0, 0.0, 0.0),
        GlobeSurface,
        Name::new("Globe"),
    ));
    info!(
        "Globe spawned: radius {}, style {:?}",
        config.globe_radius, config.map_style
    );
}

/// Lines of latitude and longitude every 30 degrees, just above the surface
pub fn draw_graticule_system(mut gizmos: Gizmos, config: Res<GlobeConfig>) {
    if !config.show_graticule {
        return;
    }
    let radius = config.globe_radius * 1.002;
    let color = graticule_color(config.map_style);

    for lat in (-90 + GRATICULE_STEP_DEG..90).step_by(GRATICULE_STEP_DEG as usize) {
        let ring = (0..=GRATICULE_SEGMENTS).map(|i| {
            let lng = -180.0 + 360.0 * i as f64 / GRATICULE_SEGMENTS as f64;
            to_render_vec3(lat as f64, lng, radius)
        });
        gizmos.linestrip(ring, color);
    }

    for lng in (-180..180).step_by(GRATICULE_STEP_DEG as usize) {
        let meridian = (0..=GRATICULE_SEGMENTS / 2).map(|i| {
            let lat = -90.0 + 180.0 * i as f64 / (GRATICULE_SEGMENTS / 2) as f64;
            to_render_vec3(lat, lng as f64, radius)
        });
        gizmos.linestrip(meridian, color);
    }
}
