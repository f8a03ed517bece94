//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod gesture_adapter;
pub mod handlers;
mod intent_mapping;
pub mod mode_controller;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Sitzung (Annotationen, View).
pub mod state;

pub use crate::core::MapCamera;
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use gesture_adapter::GestureKind;
pub use mode_controller::{Mode, ModeController, ModeTransition};
pub use render_scene::{build as build_render_scene, project_annotations};
pub use state::{AnnotationState, AppState, ViewState};
