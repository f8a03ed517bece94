//! Schnittstelle zum Karten-Rendering-Substrat.

use crate::core::GeoPoint;
use crate::shared::PolygonShape;

/// Vom Substrat bereitgestellte Fähigkeiten (Zentrieren, Polygone, Marker).
///
/// Projektion, Tiles und Pan/Zoom-Mechanik liegen vollständig im Substrat.
pub trait MapSubstrate {
    /// Handle auf ein gezeichnetes Element
    type Handle;

    /// Zentriert die Ansicht auf einen Punkt mit gegebener Zoomstufe.
    fn recenter(&mut self, center: GeoPoint, zoom: u8);

    /// Zeichnet ein Polygon (geschlossen oder offen).
    fn render_polygon(&mut self, shape: &PolygonShape) -> Self::Handle;

    /// Zeichnet einen Marker mit Popup-Text.
    fn render_marker(&mut self, point: GeoPoint, popup: &str) -> Self::Handle;
}
