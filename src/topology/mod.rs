//! Derived topology module
//!
//! Recomputes centroid, connections and per-connection distances from the
//! point store whenever the points or the connection settings change.

use bevy::prelude::*;

pub mod settings;
pub mod systems;

pub use settings::{ConnectionSettings, ConnectionStyle};
pub use systems::{DerivedTopology, recompute_topology_system};

/// Plugin for the derived connection data
pub struct TopologyPlugin;

impl Plugin for TopologyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ConnectionSettings>()
            .init_resource::<DerivedTopology>()
            .add_systems(
                Update,
                recompute_topology_system
                    .after(crate::points::systems::resolve_location_requests)
                    .after(crate::points::systems::apply_point_removals),
            );
    }
}
