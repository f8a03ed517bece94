//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Handler auf den AppState.
///
/// Events werden strikt nacheinander verarbeitet: ein Intent ist mit allen
/// zugehörigen Commands abgeschlossen, bevor der nächste beginnt.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Annotationen ===
            AppCommand::ToggleMode => handlers::annotation::toggle_mode(state),
            AppCommand::AppendVertex { point } => {
                handlers::annotation::append_vertex(state, point)
            }
            AppCommand::DropMarker { point } => handlers::annotation::drop_marker(state, point),

            // === Kamera & Viewport ===
            AppCommand::RecenterView { center } => handlers::view::recenter(state, center),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::ToggleOverlayVisibility { name } => {
                handlers::view::toggle_overlay_visibility(state, &name)
            }

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::ShowNotice { message } => handlers::dialog::show_notice(state, message),
            AppCommand::DismissNotice => handlers::dialog::dismiss_notice(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
