//! Interaktionsmodus (Navigieren/Zeichnen) und der atomare Polygon-Commit.

use crate::core::{PolygonStore, VertexAccumulator};

/// Aktiver Interaktionsmodus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Klick zentriert die Karte
    #[default]
    Navigate,
    /// Klick fügt einen Eckpunkt hinzu
    Draw,
}

/// Ergebnis eines Moduswechsels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeTransition {
    /// Navigate → Draw, keine weiteren Effekte
    EnteredDraw,
    /// Draw → Navigate, Puffer wurde als Polygon übernommen
    Committed {
        /// Index des neuen Polygons im Store
        polygon_index: usize,
        /// Anzahl übernommener Eckpunkte
        vertex_count: usize,
        /// Weniger als drei Eckpunkte
        degenerate: bool,
    },
}

/// Hält den aktuellen Modus und führt den Commit beim Verlassen von Draw aus.
#[derive(Debug, Clone, Default)]
pub struct ModeController {
    mode: Mode,
}

impl ModeController {
    /// Erstellt einen Controller im Navigate-Modus.
    pub fn new() -> Self {
        Self {
            mode: Mode::Navigate,
        }
    }

    /// Aktueller Modus
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Wechselt den Modus.
    ///
    /// Beim Verlassen von Draw wird der Pufferinhalt – auch mit weniger als
    /// drei Punkten – als Polygon abgelegt und der Puffer geleert. Beide
    /// Schritte laufen unter derselben exklusiven Ausleihe.
    pub fn toggle(
        &mut self,
        vertices: &mut VertexAccumulator,
        polygons: &mut PolygonStore,
    ) -> ModeTransition {
        match self.mode {
            Mode::Navigate => {
                self.mode = Mode::Draw;
                ModeTransition::EnteredDraw
            }
            Mode::Draw => {
                let polygon_index = polygons.commit(vertices.snapshot().to_vec());
                vertices.clear();
                self.mode = Mode::Navigate;

                let committed = &polygons.all()[polygon_index];
                ModeTransition::Committed {
                    polygon_index,
                    vertex_count: committed.vertex_count(),
                    degenerate: committed.is_degenerate(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeoPoint;

    #[test]
    fn navigate_to_draw_has_no_side_effects() {
        let mut controller = ModeController::new();
        let mut vertices = VertexAccumulator::new();
        let mut polygons = PolygonStore::new();

        let transition = controller.toggle(&mut vertices, &mut polygons);

        assert_eq!(transition, ModeTransition::EnteredDraw);
        assert_eq!(controller.mode(), Mode::Draw);
        assert!(polygons.is_empty());
    }

    #[test]
    fn leaving_draw_commits_and_clears() {
        let mut controller = ModeController::new();
        let mut vertices = VertexAccumulator::new();
        let mut polygons = PolygonStore::new();
        let points = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
        ];

        controller.toggle(&mut vertices, &mut polygons);
        for p in points {
            vertices.append(p);
        }
        let transition = controller.toggle(&mut vertices, &mut polygons);

        assert_eq!(
            transition,
            ModeTransition::Committed {
                polygon_index: 0,
                vertex_count: 3,
                degenerate: false,
            }
        );
        assert_eq!(controller.mode(), Mode::Navigate);
        assert!(vertices.is_empty());
        assert_eq!(polygons.all()[0].points(), &points);
    }

    #[test]
    fn empty_draw_session_commits_degenerate_polygon() {
        let mut controller = ModeController::new();
        let mut vertices = VertexAccumulator::new();
        let mut polygons = PolygonStore::new();

        controller.toggle(&mut vertices, &mut polygons);
        let transition = controller.toggle(&mut vertices, &mut polygons);

        assert!(matches!(
            transition,
            ModeTransition::Committed {
                vertex_count: 0,
                degenerate: true,
                ..
            }
        ));
        assert_eq!(polygons.len(), 1);
    }
}
