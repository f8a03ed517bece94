//! Handler für Kamera, Viewport und Overlay-Gruppen.

use crate::app::AppState;
use crate::core::GeoPoint;

/// Zentriert die Karte auf einen Punkt bei aktueller Zoomstufe.
pub fn recenter(state: &mut AppState, center: GeoPoint) {
    state.view.camera.look_at(center);
    log::debug!(
        "Karte zentriert auf {} (Zoom {})",
        center,
        state.view.camera.zoom
    );
}

/// Zoomt eine Stufe hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.camera.zoom_in();
}

/// Zoomt eine Stufe heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.camera.zoom_out();
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Schaltet die Sichtbarkeit einer Overlay-Gruppe um.
pub fn toggle_overlay_visibility(state: &mut AppState, name: &str) {
    match state.view.overlay_mut(name) {
        Some(group) => {
            group.visible = !group.visible;
            log::info!("Overlay '{}' sichtbar: {}", name, group.visible);
        }
        None => log::warn!("Unbekannte Overlay-Gruppe: {}", name),
    }
}
