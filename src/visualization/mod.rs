//! Visualization module
//!
//! Draws the globe, point markers and connections. Everything here consumes
//! [`DerivedTopology`](crate::topology::DerivedTopology) snapshots; nothing
//! feeds back into the math.

use bevy::prelude::*;

use crate::topology::recompute_topology_system;

pub mod colors;
pub mod connections;
pub mod globe;
pub mod markers;

pub use connections::draw_connections_system;
pub use globe::{GlobeSurface, spawn_globe};
pub use markers::draw_markers_system;

/// Plugin for visualization systems
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_globe).add_systems(
            Update,
            (
                globe::draw_graticule_system,
                draw_markers_system,
                draw_connections_system,
            )
                .after(recompute_topology_system),
        );
    }
}
