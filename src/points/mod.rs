//! Point management module
//!
//! Owns the authoritative ordered list of points and turns location queries
//! into points through a [`LocationResolver`].

use bevy::prelude::*;

pub mod resolver;
pub mod store;
pub mod systems;

pub use resolver::{GazetteerResolver, LocationResolver, ResolvedLocation, Resolver};
pub use store::PointStore;
pub use systems::{AddLocation, InitialQueries, RemovePoint};

/// Plugin for point bookkeeping
pub struct PointsPlugin;

impl Plugin for PointsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointStore>()
            .init_resource::<Resolver>()
            .init_resource::<InitialQueries>()
            .add_message::<AddLocation>()
            .add_message::<RemovePoint>()
            .add_systems(Startup, systems::queue_initial_queries)
            .add_systems(
                Update,
                (
                    systems::resolve_location_requests,
                    systems::apply_point_removals.after(systems::resolve_location_requests),
                ),
            );
    }
}
