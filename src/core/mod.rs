//! Core geospatial math
//!
//! Pure functions over geographic points: coordinate conversion, spherical
//! centroid, great-circle distance and connection topology. Nothing here owns
//! Bevy state; the plugins in `points`, `topology` and `visualization` call in.

pub mod arc;
pub mod centroid;
pub mod coordinates;
pub mod distance;
pub mod point;
pub mod topology;

pub use centroid::{GeoCentroid, centroid};
pub use distance::distance_km;
pub use point::{GeoPoint, PointColor, PointId};
pub use topology::{ConnectionMode, ConnectionPair, Endpoint, connections};
