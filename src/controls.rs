//! Keyboard controls
//!
//! - `M` cycle connection mode
//! - `C` toggle arc/straight connections
//! - `Backspace` remove the most recent point
//! - `Delete` remove all points
//! - `D` log the distance of every connection

use bevy::prelude::*;

use crate::points::systems::apply_point_removals;
use crate::points::{PointStore, RemovePoint};
use crate::topology::{ConnectionSettings, DerivedTopology, recompute_topology_system};

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                keyboard_controls_system.before(apply_point_removals),
                log_distances_system.after(recompute_topology_system),
            ),
        );
    }
}

pub fn keyboard_controls_system(
    input: Res<ButtonInput<KeyCode>>,
    mut settings: ResMut<ConnectionSettings>,
    store: Res<PointStore>,
    mut removals: MessageWriter<RemovePoint>,
) {
    if input.just_pressed(KeyCode::KeyM) {
        settings.mode = settings.mode.next();
        info!("Connection mode: {}", settings.mode.label());
    }
    if input.just_pressed(KeyCode::KeyC) {
        settings.style = settings.style.toggled();
        info!("Connection style: {:?}", settings.style);
    }
    if input.just_pressed(KeyCode::Backspace)
        && let Some(last) = store.points().last()
    {
        removals.write(RemovePoint(last.id));
    }
    if input.just_pressed(KeyCode::Delete) {
        for point in store.points() {
            removals.write(RemovePoint(point.id));
        }
    }
}

pub fn log_distances_system(input: Res<ButtonInput<KeyCode>>, derived: Res<DerivedTopology>) {
    if !input.just_pressed(KeyCode::KeyD) {
        return;
    }
    if derived.connections.is_empty() {
        info!("No connections");
        return;
    }
    for (pair, km) in derived.connections.iter().zip(&derived.distances_km) {
        info!("{} -> {}: {:.0} km", pair.from.name(), pair.to.name(), km);
    }
    info!("Total: {:.0} km", derived.total_distance_km());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::topology::ConnectionMode;
    use crate::points::PointsPlugin;
    use crate::topology::{ConnectionStyle, TopologyPlugin};

    fn test_app() -> App {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .add_plugins((PointsPlugin, TopologyPlugin, ControlsPlugin));
        app
    }

    fn press(app: &mut App, key: KeyCode) {
        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.clear();
        input.release_all();
        input.press(key);
    }

    #[test]
    fn test_mode_key_cycles_mode() {
        let mut app = test_app();
        press(&mut app, KeyCode::KeyM);
        app.update();
        assert_eq!(
            app.world().resource::<ConnectionSettings>().mode,
            ConnectionMode::Mesh
        );
    }

    #[test]
    fn test_style_key_toggles_style() {
        let mut app = test_app();
        press(&mut app, KeyCode::KeyC);
        app.update();
        assert_eq!(
            app.world().resource::<ConnectionSettings>().style,
            ConnectionStyle::Straight
        );
    }

    #[test]
    fn test_backspace_removes_last_point() {
        let mut app = test_app();
        {
            let mut store = app.world_mut().resource_mut::<PointStore>();
            store.add("first", 0.0, 0.0).unwrap();
            store.add("second", 1.0, 1.0).unwrap();
        }
        press(&mut app, KeyCode::Backspace);
        app.update();

        let store = app.world().resource::<PointStore>();
        assert_eq!(store.len(), 1);
        assert_eq!(store.points()[0].name, "first");
    }

    #[test]
    fn test_backspace_on_consecutive_frames_removes_distinct_points() {
        let mut app = test_app();
        {
            let mut store = app.world_mut().resource_mut::<PointStore>();
            for name in ["a", "b", "c"] {
                store.add(name, 0.0, 0.0).unwrap();
            }
        }
        press(&mut app, KeyCode::Backspace);
        app.update();
        press(&mut app, KeyCode::Backspace);
        app.update();

        let store = app.world().resource::<PointStore>();
        let names: Vec<&str> = store.points().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a"]);
    }

    #[test]
    fn test_delete_clears_points() {
        let mut app = test_app();
        {
            let mut store = app.world_mut().resource_mut::<PointStore>();
            for i in 0..3 {
                store.add(format!("p{i}"), 0.0, 0.0).unwrap();
            }
        }
        press(&mut app, KeyCode::Delete);
        app.update();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .clear();
        app.update();
        assert!(app.world().resource::<PointStore>().is_empty());
    }
}
