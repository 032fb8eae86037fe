use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod config;
mod controls;
mod core;
mod points;
mod topology;
mod visualization;

use config::{ConfigPlugin, GlobeConfig};
use controls::ControlsPlugin;
use points::{InitialQueries, PointsPlugin};
use topology::TopologyPlugin;
use visualization::VisualizationPlugin;

/// Marker for the orbit camera looking at the globe
#[derive(Component)]
pub struct MainCamera;

pub fn setup(mut commands: Commands, config: Res<GlobeConfig>) {
    commands.insert_resource(GlobalAmbientLight {
        brightness: 400.0,
        ..default()
    });

    // ~3.5x the globe radius keeps the whole sphere in view
    let initial_distance = config.globe_radius as f32 * 3.5;

    let pan_orbit = PanOrbitCamera {
        focus: Vec3::ZERO,
        radius: Some(initial_distance),
        yaw: Some(0.0),
        pitch: Some(0.3),
        force_update: true,
        ..default()
    };

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            near: 0.1,
            far: initial_distance * 20.0,
            ..default()
        }),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        pan_orbit,
        MainCamera,
        Tonemapping::TonyMcMapface,
        Transform::from_xyz(0.0, 0.0, initial_distance).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 6_000.0,
            ..default()
        },
        Transform::from_xyz(1.0, 0.5, 1.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn main() {
    let queries: Vec<String> = std::env::args().skip(1).collect();

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Geolinks".to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    app.add_plugins(ConfigPlugin);
    app.insert_resource(InitialQueries(queries));

    app.add_plugins(PanOrbitCameraPlugin);
    app.add_plugins(PointsPlugin);
    app.add_plugins(TopologyPlugin);
    app.add_plugins(ControlsPlugin);
    app.add_plugins(VisualizationPlugin);
    app.add_systems(Startup, setup);

    app.run();
}
