//! Render-Szene als expliziter Übergabevertrag zwischen App und Substrat.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render`/`ui` sie konsumieren.

use super::overlay::OverlayGroup;
use crate::core::{GeoPoint, MapCamera};

/// Marker-Radius in Pixeln (Zeichnen und Treffertest).
pub const MARKER_RADIUS: f32 = 6.0;

/// Zu zeichnendes Polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonShape {
    /// Eckpunkte in Reihenfolge
    pub points: Vec<GeoPoint>,
    /// `false` für das noch offene Polygon im Zeichenmodus
    pub closed: bool,
    /// Weniger als drei Eckpunkte
    pub degenerate: bool,
}

/// Zu zeichnender Marker mit Popup.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerShape {
    /// Position
    pub point: GeoPoint,
    /// Popup-Text
    pub popup: String,
}

/// Projektion des Annotationszustands (unabhängig vom Modus).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderSet {
    /// Ein Shape pro gespeichertem Polygon
    pub polygons: Vec<PolygonShape>,
    /// Das aktuell gezeichnete Polygon
    pub live_polygon: PolygonShape,
    /// Ein Shape pro Marker
    pub markers: Vec<MarkerShape>,
}

impl Default for PolygonShape {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            closed: false,
            degenerate: true,
        }
    }
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Kamera-Zustand für diesen Frame
    pub camera: MapCamera,
    /// Annotationen (Polygone, Live-Polygon, Marker)
    pub annotations: RenderSet,
    /// Aktuell sichtbare Overlay-Gruppen
    pub overlays: Vec<OverlayGroup>,
}

impl RenderScene {
    /// Gibt zurück, ob überhaupt Annotationen vorhanden sind.
    pub fn has_annotations(&self) -> bool {
        !self.annotations.polygons.is_empty()
            || !self.annotations.markers.is_empty()
            || !self.annotations.live_polygon.points.is_empty()
    }
}
