//! Kartenansicht: Mittelpunkt und Tile-Zoomstufe.

use super::GeoPoint;

/// Kamera der Kartenansicht
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapCamera {
    /// Mittelpunkt der Ansicht
    pub center: GeoPoint,
    /// Tile-Zoomstufe (0 = ganze Welt)
    pub zoom: u8,
}

impl MapCamera {
    /// Minimale Zoomstufe.
    pub const ZOOM_MIN: u8 = 0;
    /// Maximale Zoomstufe (OSM-Tiles).
    pub const ZOOM_MAX: u8 = 19;

    /// Erstellt eine Kamera; die Zoomstufe wird auf den gültigen Bereich begrenzt.
    pub fn new(center: GeoPoint, zoom: u8) -> Self {
        Self {
            center,
            zoom: zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX),
        }
    }

    /// Zentriert die Ansicht auf einen Punkt, Zoomstufe bleibt erhalten.
    pub fn look_at(&mut self, target: GeoPoint) {
        self.center = target;
    }

    /// Eine Zoomstufe hinein (begrenzt).
    pub fn zoom_in(&mut self) {
        self.zoom = self.zoom.saturating_add(1).min(Self::ZOOM_MAX);
    }

    /// Eine Zoomstufe heraus (begrenzt).
    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(1).max(Self::ZOOM_MIN);
    }
}
