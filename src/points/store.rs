//! Ordered point list resource

use bevy::prelude::*;

use crate::core::point::{GeoPoint, PointColor, PointError, PointId};

/// Colours handed out to new points in rotation.
pub const POINT_PALETTE: [&str; 8] = [
    "#4fc3f7", "#ff8a65", "#81c784", "#ba68c8", "#f06292", "#4db6ac", "#fff176", "#9575cd",
];

/// Authoritative, insertion-ordered list of points
#[derive(Resource, Debug, Default)]
pub struct PointStore {
    points: Vec<GeoPoint>,
    next_id: u64,
    next_color: usize,
}

impl PointStore {
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[allow(dead_code)]
    pub fn get(&self, id: PointId) -> Option<&GeoPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Append a point, assigning it an id and the next palette colour.
    ///
    /// Range enforcement lives here; the math accepts anything.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<PointId, PointError> {
        let color = POINT_PALETTE[self.next_color % POINT_PALETTE.len()];
        let point = GeoPoint {
            id: PointId(self.next_id),
            name: name.into(),
            latitude,
            longitude,
            color: PointColor::new(color),
        };
        point.validate()?;

        let id = point.id;
        self.points.push(point);
        self.next_id += 1;
        self.next_color += 1;
        Ok(id)
    }

    pub fn remove(&mut self, id: PointId) -> Result<GeoPoint, PointError> {
        let index = self
            .points
            .iter()
            .position(|p| p.id == id)
            .ok_or(PointError::UnknownPoint(id))?;
        Ok(self.points.remove(index))
    }

    pub fn remove_last(&mut self) -> Option<GeoPoint> {
        self.points.pop()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_ids_and_colors() {
        let mut store = PointStore::default();
        let a = store.add("Tokyo", 35.6762, 139.6503).unwrap();
        let b = store.add("Paris", 48.8566, 2.3522).unwrap();
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
        assert_eq!(store.points()[0].color.as_str(), POINT_PALETTE[0]);
        assert_eq!(store.points()[1].color.as_str(), POINT_PALETTE[1]);
    }

    #[test]
    fn test_add_preserves_order() {
        let mut store = PointStore::default();
        for name in ["a", "b", "c"] {
            store.add(name, 0.0, 0.0).unwrap();
        }
        let names: Vec<&str> = store.points().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_add_rejects_invalid_without_consuming_id() {
        let mut store = PointStore::default();
        assert_eq!(
            store.add("bad", 91.0, 0.0),
            Err(PointError::LatitudeOutOfRange(91.0))
        );
        assert!(store.is_empty());
        let id = store.add("good", 1.0, 1.0).unwrap();
        assert_eq!(id, PointId(0));
        assert_eq!(store.points()[0].color.as_str(), POINT_PALETTE[0]);
    }

    #[test]
    fn test_palette_wraps() {
        let mut store = PointStore::default();
        for i in 0..=POINT_PALETTE.len() {
            store.add(format!("p{i}"), 0.0, 0.0).unwrap();
        }
        let last = store.points().last().unwrap();
        assert_eq!(last.color.as_str(), POINT_PALETTE[0]);
    }

    #[test]
    fn test_remove_by_id() {
        let mut store = PointStore::default();
        let a = store.add("a", 0.0, 0.0).unwrap();
        let b = store.add("b", 1.0, 1.0).unwrap();
        let removed = store.remove(a).unwrap();
        assert_eq!(removed.name, "a");
        assert_eq!(store.len(), 1);
        assert!(store.get(b).is_some());
        assert_eq!(store.remove(a), Err(PointError::UnknownPoint(a)));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut store = PointStore::default();
        let a = store.add("a", 0.0, 0.0).unwrap();
        store.remove(a).unwrap();
        let b = store.add("b", 0.0, 0.0).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_remove_last_and_clear() {
        let mut store = PointStore::default();
        assert!(store.remove_last().is_none());
        store.add("a", 0.0, 0.0).unwrap();
        store.add("b", 0.0, 0.0).unwrap();
        assert_eq!(store.remove_last().unwrap().name, "b");
        store.clear();
        assert!(store.is_empty());
    }
}
