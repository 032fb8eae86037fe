//! Geographic point records supplied by the point store

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, store-assigned point identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointId(pub u64);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Display colour token. The math never interprets it; renderers parse it as hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointColor(pub String);

impl PointColor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub id: PointId,
    pub name: String,
    /// Degrees, [-90, 90]
    pub latitude: f64,
    /// Degrees, [-180, 180]
    pub longitude: f64,
    pub color: PointColor,
}

impl GeoPoint {
    /// Range check applied by the point store before a point is accepted.
    pub fn validate(&self) -> Result<(), PointError> {
        if self.name.trim().is_empty() {
            return Err(PointError::EmptyName);
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(PointError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(PointError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PointError {
    EmptyName,
    LatitudeOutOfRange(f64),
    LongitudeOutOfRange(f64),
    UnknownPoint(PointId),
}

impl fmt::Display for PointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointError::EmptyName => write!(f, "point name must not be empty"),
            PointError::LatitudeOutOfRange(lat) => write!(f, "Invalid latitude: {lat:?}"),
            PointError::LongitudeOutOfRange(lng) => write!(f, "Invalid longitude: {lng:?}"),
            PointError::UnknownPoint(id) => write!(f, "no point with id {id}"),
        }
    }
}

impl std::error::Error for PointError {}
