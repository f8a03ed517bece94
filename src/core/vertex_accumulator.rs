//! Puffer für die Eckpunkte des aktuell gezeichneten Polygons.

use super::GeoPoint;

/// Geordneter, nur anhängender Puffer der Polygon-Eckpunkte.
///
/// Geleert wird ausschließlich durch den Commit im `ModeController`.
#[derive(Debug, Clone, Default)]
pub struct VertexAccumulator {
    vertices: Vec<GeoPoint>,
}

impl VertexAccumulator {
    /// Erstellt einen leeren Puffer.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Hängt einen Eckpunkt an (Reihenfolge bleibt erhalten).
    pub(crate) fn append(&mut self, point: GeoPoint) {
        self.vertices.push(point);
    }

    /// Read-only Sicht auf die Eckpunkte in Einfügereihenfolge.
    pub fn snapshot(&self) -> &[GeoPoint] {
        &self.vertices
    }

    /// Anzahl gesammelter Eckpunkte
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Gibt `true` zurück, wenn keine Eckpunkte gesammelt sind.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Leert den Puffer.
    pub(crate) fn clear(&mut self) {
        self.vertices.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_insertion_order() {
        let mut acc = VertexAccumulator::new();
        let a = GeoPoint::new(1.0, 1.0);
        let b = GeoPoint::new(2.0, 2.0);
        let c = GeoPoint::new(1.0, 1.0);

        acc.append(a);
        acc.append(b);
        acc.append(c);

        // Keine Deduplizierung
        assert_eq!(acc.snapshot(), &[a, b, c]);
        assert_eq!(acc.len(), 3);
    }

    #[test]
    fn clear_empties_buffer() {
        let mut acc = VertexAccumulator::new();
        acc.append(GeoPoint::new(3.0, 4.0));
        acc.clear();
        assert!(acc.snapshot().is_empty());
    }
}
