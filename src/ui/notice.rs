//! Hinweisfenster für Klicks auf Overlay-Gruppen.

use crate::app::{AppIntent, AppState};

/// Zeigt den offenen Hinweis als modales Fenster an.
pub fn show_notice_window(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(message) = state.view.notice.as_deref() else {
        return events;
    };

    egui::Window::new("Hinweis")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                events.push(AppIntent::NoticeDismissed);
            }
        });

    events
}
