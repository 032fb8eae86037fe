//! Topology recomputation

use bevy::prelude::*;

use crate::core::centroid::{GeoCentroid, centroid};
use crate::core::point::GeoPoint;
use crate::core::topology::{ConnectionMode, ConnectionPair, connections};
use crate::points::PointStore;
use crate::topology::settings::ConnectionSettings;

/// Snapshot of everything derived from the current points and mode
#[derive(Resource, Debug, Default, Clone)]
pub struct DerivedTopology {
    pub centroid: Option<GeoCentroid>,
    pub connections: Vec<ConnectionPair>,
    /// One entry per connection, same order
    pub distances_km: Vec<f64>,
}

impl DerivedTopology {
    pub fn compute(points: &[GeoPoint], mode: ConnectionMode) -> Self {
        let centroid = centroid(points);
        let connections = connections(points, mode, centroid.as_ref());
        let distances_km = connections.iter().map(ConnectionPair::distance_km).collect();
        Self {
            centroid,
            connections,
            distances_km,
        }
    }

    pub fn total_distance_km(&self) -> f64 {
        self.distances_km.iter().sum()
    }
}

pub fn recompute_topology_system(
    store: Res<PointStore>,
    settings: Res<ConnectionSettings>,
    mut derived: ResMut<DerivedTopology>,
) {
    if !store.is_changed() && !settings.is_changed() {
        return;
    }

    *derived = DerivedTopology::compute(store.points(), settings.mode);
    debug!(
        "Topology {}: {} points, {} connections, {:.1} km total",
        settings.mode.label(),
        store.len(),
        derived.connections.len(),
        derived.total_distance_km()
    );
}
