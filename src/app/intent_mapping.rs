//! Mapping von UI-Intents auf mutierende App-Commands.

use super::gesture_adapter::{self, GestureKind};
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SingleClick { point } => {
            gesture_adapter::dispatch(state, GestureKind::SingleClick, point)
        }
        AppIntent::DoubleClick { point } => {
            gesture_adapter::dispatch(state, GestureKind::DoubleClick, point)
        }
        AppIntent::ToggleModeRequested => vec![AppCommand::ToggleMode],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewDragged { center } => match center.validate() {
            Ok(()) => vec![AppCommand::RecenterView { center }],
            Err(e) => {
                log::warn!("Drag verworfen: {}", e);
                Vec::new()
            }
        },
        // Unveränderte Größe erzeugt keinen Command (wird jeden Frame gemeldet)
        AppIntent::ViewportResized { size } if size == state.view.viewport_size => Vec::new(),
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::OverlayVisibilityToggled { name } => {
            vec![AppCommand::ToggleOverlayVisibility { name }]
        }
        AppIntent::NoticeDismissed => vec![AppCommand::DismissNotice],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
