use crate::app::mode_controller::{Mode, ModeController, ModeTransition};
use crate::core::{GeoPoint, Marker, MarkerLog, PolygonStore, VertexAccumulator};

/// Annotationszustand der Sitzung: Modus, Eckpunkt-Puffer, Polygone, Marker.
///
/// Lesend frei zugänglich; Mutation nur über die Handler des `AppController`.
#[derive(Debug, Clone, Default)]
pub struct AnnotationState {
    mode: ModeController,
    vertices: VertexAccumulator,
    polygons: PolygonStore,
    markers: MarkerLog,
}

impl AnnotationState {
    /// Erstellt einen leeren Annotationszustand im Navigate-Modus.
    pub fn new() -> Self {
        Self {
            mode: ModeController::new(),
            vertices: VertexAccumulator::new(),
            polygons: PolygonStore::new(),
            markers: MarkerLog::new(),
        }
    }

    /// Aktueller Interaktionsmodus
    pub fn mode(&self) -> Mode {
        self.mode.mode()
    }

    /// Eckpunkte des aktuell gezeichneten Polygons
    pub fn vertices(&self) -> &VertexAccumulator {
        &self.vertices
    }

    /// Abgeschlossene Polygone
    pub fn polygons(&self) -> &PolygonStore {
        &self.polygons
    }

    /// Gesetzte Marker
    pub fn markers(&self) -> &MarkerLog {
        &self.markers
    }

    pub(crate) fn toggle_mode(&mut self) -> ModeTransition {
        self.mode.toggle(&mut self.vertices, &mut self.polygons)
    }

    pub(crate) fn append_vertex(&mut self, point: GeoPoint) {
        self.vertices.append(point);
    }

    pub(crate) fn drop_marker(&mut self, point: GeoPoint) {
        self.markers.append(Marker::at(point));
    }
}
