//! Punkt-Marker, unabhängig vom Zeichenmodus gesetzt.

use super::GeoPoint;

/// Marker an einem Punkt mit abgeleitetem Beschriftungstext.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Position des Markers
    pub point: GeoPoint,
    /// Popup-Text (Lat/Long/Alt)
    pub label: String,
}

impl Marker {
    /// Erstellt einen Marker; der Text wird aus dem Punkt abgeleitet.
    pub fn at(point: GeoPoint) -> Self {
        Self {
            label: point.label(),
            point,
        }
    }
}

/// Geordnete, nur anhängende Liste aller Marker.
#[derive(Debug, Clone, Default)]
pub struct MarkerLog {
    markers: Vec<Marker>,
}

impl MarkerLog {
    /// Erstellt eine leere Marker-Liste.
    pub fn new() -> Self {
        Self {
            markers: Vec::new(),
        }
    }

    /// Hängt einen Marker an.
    pub(crate) fn append(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    /// Alle Marker in Einfügereihenfolge
    pub fn all(&self) -> &[Marker] {
        &self.markers
    }

    /// Anzahl der Marker
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Gibt `true` zurück, wenn keine Marker vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
