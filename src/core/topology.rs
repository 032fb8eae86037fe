//! Connection topology between points
//!
//! Derives which pairs to link from the current point list, the selected
//! [`ConnectionMode`] and the centroid. Every mode is total: too few points
//! simply produce no pairs.

use serde::{Deserialize, Serialize};

use crate::core::centroid::GeoCentroid;
use crate::core::distance::distance_km;
use crate::core::point::{GeoPoint, PointColor};

/// Highlight colour reserved for the centroid endpoint.
pub const CENTROID_COLOR: &str = "#ffd54a";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionMode {
    /// Every point to the centroid
    #[default]
    Star,
    /// Every unordered pair of points
    Mesh,
    /// Each point to its successor in list order
    Path,
}

impl ConnectionMode {
    #[allow(dead_code)]
    pub const ALL: [ConnectionMode; 3] = [
        ConnectionMode::Star,
        ConnectionMode::Mesh,
        ConnectionMode::Path,
    ];

    pub fn next(self) -> Self {
        match self {
            ConnectionMode::Star => ConnectionMode::Mesh,
            ConnectionMode::Mesh => ConnectionMode::Path,
            ConnectionMode::Path => ConnectionMode::Star,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConnectionMode::Star => "STAR",
            ConnectionMode::Mesh => "MESH",
            ConnectionMode::Path => "PATH",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    Point(GeoPoint),
    Centroid(GeoCentroid),
}

impl Endpoint {
    pub fn latitude(&self) -> f64 {
        match self {
            Endpoint::Point(p) => p.latitude,
            Endpoint::Centroid(c) => c.latitude,
        }
    }

    pub fn longitude(&self) -> f64 {
        match self {
            Endpoint::Point(p) => p.longitude,
            Endpoint::Centroid(c) => c.longitude,
        }
    }

    pub fn color(&self) -> PointColor {
        match self {
            Endpoint::Point(p) => p.color.clone(),
            Endpoint::Centroid(_) => PointColor::new(CENTROID_COLOR),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Endpoint::Point(p) => &p.name,
            Endpoint::Centroid(_) => "Centroid",
        }
    }

    #[allow(dead_code)]
    pub fn is_centroid(&self) -> bool {
        matches!(self, Endpoint::Centroid(_))
    }
}

/// One link to draw, with the colours of both ends for gradient rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionPair {
    pub from: Endpoint,
    pub to: Endpoint,
    pub from_color: PointColor,
    pub to_color: PointColor,
}

impl ConnectionPair {
    pub fn new(from: Endpoint, to: Endpoint) -> Self {
        let from_color = from.color();
        let to_color = to.color();
        Self {
            from,
            to,
            from_color,
            to_color,
        }
    }

    pub fn distance_km(&self) -> f64 {
        distance_km(
            self.from.latitude(),
            self.from.longitude(),
            self.to.latitude(),
            self.to.longitude(),
        )
    }
}

/// Pairs to connect for `mode`, in a deterministic order.
///
/// `Star` needs a centroid; with one point the pair is zero length, which is
/// kept rather than suppressed.
pub fn connections(
    points: &[GeoPoint],
    mode: ConnectionMode,
    centroid: Option<&GeoCentroid>,
) -> Vec<ConnectionPair> {
    match mode {
        ConnectionMode::Star => {
            let Some(center) = centroid else {
                return Vec::new();
            };
            points
                .iter()
                .map(|p| {
                    ConnectionPair::new(Endpoint::Point(p.clone()), Endpoint::Centroid(*center))
                })
                .collect()
        }
        ConnectionMode::Mesh => {
            let n = points.len();
            let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
            for (i, a) in points.iter().enumerate() {
                for b in &points[i + 1..] {
                    pairs.push(ConnectionPair::new(
                        Endpoint::Point(a.clone()),
                        Endpoint::Point(b.clone()),
                    ));
                }
            }
            pairs
        }
        ConnectionMode::Path => points
            .windows(2)
            .map(|w| {
                ConnectionPair::new(Endpoint::Point(w[0].clone()), Endpoint::Point(w[1].clone()))
            })
            .collect(),
    }
}
