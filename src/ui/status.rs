//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, Mode};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let mode_name = match state.annotation.mode() {
                Mode::Navigate => "Navigieren",
                Mode::Draw => "Zeichnen",
            };
            ui.label(format!("Modus: {}", mode_name));

            ui.separator();

            ui.label(format!(
                "Eckpunkte: {} | Polygone: {} | Marker: {}",
                state.annotation.vertices().len(),
                state.polygon_count(),
                state.marker_count()
            ));

            ui.separator();

            let center = state.view.camera.center;
            ui.label(format!(
                "Zoom: {} | Mitte: ({:.5}, {:.5})",
                state.view.camera.zoom,
                center.latitude(),
                center.longitude()
            ));
        });
    });
}
