use crate::core::GeoPoint;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Einfachklick auf die Karte
    SingleClick { point: GeoPoint },
    /// Doppelklick auf die Karte
    DoubleClick { point: GeoPoint },
    /// Zwischen Navigieren und Zeichnen umschalten
    ToggleModeRequested,
    /// Eine Zoomstufe hinein
    ZoomInRequested,
    /// Eine Zoomstufe heraus
    ZoomOutRequested,
    /// Karte per Drag verschoben (neuer Mittelpunkt)
    ViewDragged { center: GeoPoint },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Sichtbarkeit einer Overlay-Gruppe umschalten
    OverlayVisibilityToggled { name: String },
    /// Hinweisfenster geschlossen
    NoticeDismissed,
    /// Anwendung beenden
    ExitRequested,
}
