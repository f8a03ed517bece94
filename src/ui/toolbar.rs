//! Toolbar: Moduswechsel und Zoom.

use crate::app::{AppIntent, AppState, Mode};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let mode = state.annotation.mode();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let label = match mode {
                Mode::Navigate => "✏ Polygon zeichnen",
                Mode::Draw => "✔ Polygon abschließen",
            };
            if ui
                .add(egui::Button::new(label).selected(mode == Mode::Draw))
                .clicked()
            {
                events.push(AppIntent::ToggleModeRequested);
            }

            ui.separator();

            if ui.button("＋").on_hover_text("Hineinzoomen").clicked() {
                events.push(AppIntent::ZoomInRequested);
            }
            if ui.button("－").on_hover_text("Herauszoomen").clicked() {
                events.push(AppIntent::ZoomOutRequested);
            }

            ui.separator();

            if ui.button("Beenden").clicked() {
                events.push(AppIntent::ExitRequested);
            }
        });
    });

    events
}
