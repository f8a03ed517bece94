use crate::app::CommandLog;
use crate::shared::SessionOptions;

use super::{AnnotationState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Annotationen der Sitzung (Modus, Puffer, Polygone, Marker)
    pub annotation: AnnotationState,
    /// View-State
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Beim Start gelesene Optionen
    pub options: SessionOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(SessionOptions::default())
    }

    /// Erstellt einen neuen App-State aus geladenen Optionen.
    pub fn with_options(options: SessionOptions) -> Self {
        Self {
            annotation: AnnotationState::new(),
            view: ViewState::new(&options),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Anzahl gespeicherter Polygone (für UI-Anzeige)
    pub fn polygon_count(&self) -> usize {
        self.annotation.polygons().len()
    }

    /// Anzahl gesetzter Marker (für UI-Anzeige)
    pub fn marker_count(&self) -> usize {
        self.annotation.markers().len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
