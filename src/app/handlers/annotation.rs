//! Handler für Moduswechsel, Eckpunkte und Marker.

use crate::app::mode_controller::{Mode, ModeTransition};
use crate::app::AppState;
use crate::core::GeoPoint;

/// Schaltet den Modus um; beim Verlassen von Draw wird das Polygon übernommen.
pub fn toggle_mode(state: &mut AppState) {
    match state.annotation.toggle_mode() {
        ModeTransition::EnteredDraw => log::info!("Zeichenmodus aktiv"),
        ModeTransition::Committed {
            polygon_index,
            vertex_count,
            degenerate,
        } => {
            if degenerate {
                log::warn!(
                    "Polygon {} mit nur {} Eckpunkten übernommen (degeneriert)",
                    polygon_index,
                    vertex_count
                );
            } else {
                log::info!(
                    "Polygon {} mit {} Eckpunkten übernommen",
                    polygon_index,
                    vertex_count
                );
            }
        }
    }
}

/// Hängt einen Eckpunkt an; nur im Zeichenmodus wirksam.
pub fn append_vertex(state: &mut AppState, point: GeoPoint) {
    if state.annotation.mode() != Mode::Draw {
        log::warn!("Eckpunkt {} ignoriert: kein Zeichenmodus", point);
        return;
    }
    state.annotation.append_vertex(point);
    log::debug!(
        "Eckpunkt {} hinzugefügt ({} gesamt)",
        point,
        state.annotation.vertices().len()
    );
}

/// Setzt einen Marker am Punkt.
pub fn drop_marker(state: &mut AppState, point: GeoPoint) {
    state.annotation.drop_marker(point);
    log::info!("Marker bei {} gesetzt", point);
}
