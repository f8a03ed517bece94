use crate::core::GeoPoint;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Kartenmittelpunkt setzen (Zoomstufe bleibt)
    RecenterView { center: GeoPoint },
    /// Eckpunkt an das aktuell gezeichnete Polygon anhängen
    AppendVertex { point: GeoPoint },
    /// Marker an einem Punkt setzen
    DropMarker { point: GeoPoint },
    /// Modus umschalten (beim Verlassen von Draw: Commit)
    ToggleMode,
    /// Eine Zoomstufe hinein
    ZoomIn,
    /// Eine Zoomstufe heraus
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Sichtbarkeit einer Overlay-Gruppe umschalten
    ToggleOverlayVisibility { name: String },
    /// Hinweis einer Overlay-Gruppe anzeigen
    ShowNotice { message: String },
    /// Angezeigten Hinweis schließen
    DismissNotice,
    /// Anwendung beenden
    RequestExit,
}
