//! Handler für Hinweisfenster und Anwendungssteuerung.

use crate::app::AppState;

/// Zeigt einen Hinweis an (ersetzt einen noch offenen).
pub fn show_notice(state: &mut AppState, message: String) {
    log::info!("Hinweis: {}", message);
    state.view.notice = Some(message);
}

/// Schließt den angezeigten Hinweis.
pub fn dismiss_notice(state: &mut AppState) {
    state.view.notice = None;
}

/// Signalisiert dem Host, die Anwendung zu beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
    log::info!("Beenden angefordert");
}
