//! Point store systems

use bevy::prelude::*;

use crate::core::point::PointId;
use crate::points::resolver::Resolver;
use crate::points::store::PointStore;

/// Request to resolve `query` and append the result as a new point
#[derive(Message, Debug, Clone)]
pub struct AddLocation {
    pub query: String,
}

#[derive(Message, Debug, Clone, Copy)]
pub struct RemovePoint(pub PointId);

/// Location queries given on the command line
#[derive(Resource, Debug, Default, Deref)]
pub struct InitialQueries(pub Vec<String>);

pub fn queue_initial_queries(
    queries: Res<InitialQueries>,
    mut writer: MessageWriter<AddLocation>,
) {
    for query in queries.iter() {
        writer.write(AddLocation {
            query: query.clone(),
        });
    }
}

pub fn resolve_location_requests(
    mut requests: MessageReader<AddLocation>,
    resolver: Res<Resolver>,
    mut store: ResMut<PointStore>,
) {
    for request in requests.read() {
        let Some(location) = resolver.resolve(&request.query) else {
            warn!("No location found for query: {:?}", request.query);
            continue;
        };
        match store.add(location.name.clone(), location.latitude, location.longitude) {
            Ok(id) => info!(
                "Added point {} {} at Lat: {}, Lon: {}",
                id, location.name, location.latitude, location.longitude
            ),
            Err(err) => warn!("Rejected location {:?}: {}", request.query, err),
        }
    }
}

pub fn apply_point_removals(
    mut removals: MessageReader<RemovePoint>,
    mut store: ResMut<PointStore>,
) {
    for RemovePoint(id) in removals.read() {
        match store.remove(*id) {
            Ok(point) => info!("Removed point {} {}", id, point.name),
            Err(err) => warn!("{}", err),
        }
    }
}
