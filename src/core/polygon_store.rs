//! Abgeschlossene Polygone und deren geordnete Sammlung.

use super::GeoPoint;

/// Mindestanzahl an Eckpunkten für ein nicht-degeneriertes Polygon.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Geschlossenes, unveränderliches Polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<GeoPoint>,
}

impl Polygon {
    /// Erstellt ein Polygon aus einer geordneten Punktfolge.
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Eckpunkte in gespeicherter Reihenfolge
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Anzahl der Eckpunkte
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Weniger als drei Eckpunkte: wird gespeichert, aber nicht gezeichnet.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < MIN_POLYGON_VERTICES
    }
}

/// Geordnete, nur anhängende Sammlung abgeschlossener Polygone.
#[derive(Debug, Clone, Default)]
pub struct PolygonStore {
    polygons: Vec<Polygon>,
}

impl PolygonStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self {
            polygons: Vec::new(),
        }
    }

    /// Legt ein neues Polygon aus der Punktfolge ab und gibt dessen Index zurück.
    pub(crate) fn commit(&mut self, points: Vec<GeoPoint>) -> usize {
        self.polygons.push(Polygon::new(points));
        self.polygons.len() - 1
    }

    /// Alle Polygone in Commit-Reihenfolge
    pub fn all(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Polygon an einem Index
    pub fn get(&self, index: usize) -> Option<&Polygon> {
        self.polygons.get(index)
    }

    /// Anzahl gespeicherter Polygone
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Gibt `true` zurück, wenn noch kein Polygon gespeichert wurde.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_appends_in_order_and_returns_index() {
        let mut store = PolygonStore::new();
        let first = vec![GeoPoint::new(0.0, 0.0); 3];
        let second = vec![GeoPoint::new(1.0, 1.0); 4];

        assert_eq!(store.commit(first.clone()), 0);
        assert_eq!(store.commit(second.clone()), 1);

        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].points(), first.as_slice());
        assert_eq!(store.get(1).map(Polygon::vertex_count), Some(4));
    }

    #[test]
    fn degenerate_below_three_vertices() {
        assert!(Polygon::new(Vec::new()).is_degenerate());
        assert!(Polygon::new(vec![GeoPoint::new(0.0, 0.0); 2]).is_degenerate());
        assert!(!Polygon::new(vec![GeoPoint::new(0.0, 0.0); 3]).is_degenerate());
    }

    #[test]
    fn empty_commit_is_stored() {
        let mut store = PolygonStore::new();
        store.commit(Vec::new());
        assert_eq!(store.len(), 1);
        assert!(store.all()[0].points().is_empty());
    }
}
