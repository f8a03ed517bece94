//! Layer-Steuerung (oben rechts) für die Overlay-Gruppen.

use crate::app::{AppIntent, AppState};

/// Rendert die Layer-Steuerung und gibt Umschalt-Events zurück.
pub fn render_layer_control(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::Window::new("Layers")
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-10.0, 10.0))
        .resizable(false)
        .collapsible(true)
        .show(ctx, |ui| {
            for group in &state.view.overlays {
                let mut visible = group.visible;
                if ui.checkbox(&mut visible, group.name.as_str()).changed() {
                    events.push(AppIntent::OverlayVisibilityToggled {
                        name: group.name.clone(),
                    });
                }
            }
        });

    events
}
