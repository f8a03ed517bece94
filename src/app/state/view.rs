use crate::core::MapCamera;
use crate::shared::{default_overlay_groups, OverlayGroup, SessionOptions};

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Kamera der Kartenansicht
    pub camera: MapCamera,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Overlay-Gruppen der Basiskarte (Sichtbarkeit vom Benutzer gesteuert)
    pub overlays: Vec<OverlayGroup>,
    /// Offener Hinweis (z.B. nach Klick auf eine Overlay-Gruppe)
    pub notice: Option<String>,
}

impl ViewState {
    /// Erstellt den View-Zustand für den Sitzungsstart.
    pub fn new(options: &SessionOptions) -> Self {
        Self {
            camera: options.initial_camera(),
            viewport_size: [0.0, 0.0],
            overlays: default_overlay_groups(),
            notice: None,
        }
    }

    /// Sucht eine Overlay-Gruppe anhand ihres Namens.
    pub fn overlay_mut(&mut self, name: &str) -> Option<&mut OverlayGroup> {
        self.overlays.iter_mut().find(|group| group.name == name)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(&SessionOptions::default())
    }
}
