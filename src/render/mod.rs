//! Übergabe einer `RenderScene` an ein Karten-Substrat.

mod substrate;

pub use crate::shared::RenderScene;
pub use substrate::MapSubstrate;

use crate::shared::PolygonShape;

/// Handles aller in einem Frame gezeichneten Elemente.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentedHandles<H> {
    /// Overlay-Polygone und -Marker sichtbarer Gruppen
    pub overlays: Vec<H>,
    /// Gespeicherte, nicht-degenerierte Polygone
    pub polygons: Vec<H>,
    /// Aktuell gezeichnetes Polygon (falls Eckpunkte vorhanden)
    pub live_polygon: Option<H>,
    /// Annotations-Marker
    pub markers: Vec<H>,
}

/// Gibt eine Szene an das Substrat weiter.
///
/// Reihenfolge: Kamera, Overlays, gespeicherte Polygone, Live-Polygon, Marker.
/// Degenerierte gespeicherte Polygone werden übersprungen.
pub fn present<S: MapSubstrate>(
    scene: &RenderScene,
    substrate: &mut S,
) -> PresentedHandles<S::Handle> {
    substrate.recenter(scene.camera.center, scene.camera.zoom);

    let mut overlays = Vec::new();
    for group in &scene.overlays {
        for points in &group.polygons {
            let shape = PolygonShape {
                points: points.clone(),
                closed: true,
                degenerate: points.len() < crate::core::MIN_POLYGON_VERTICES,
            };
            overlays.push(substrate.render_polygon(&shape));
        }
        for marker in &group.markers {
            overlays.push(substrate.render_marker(marker.point, &marker.popup));
        }
    }

    let polygons = scene
        .annotations
        .polygons
        .iter()
        .filter(|shape| !shape.degenerate)
        .map(|shape| substrate.render_polygon(shape))
        .collect();

    let live = &scene.annotations.live_polygon;
    let live_polygon = (!live.points.is_empty()).then(|| substrate.render_polygon(live));

    let markers = scene
        .annotations
        .markers
        .iter()
        .map(|marker| substrate.render_marker(marker.point, &marker.popup))
        .collect();

    PresentedHandles {
        overlays,
        polygons,
        live_polygon,
        markers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AppController, AppIntent, AppState};
    use crate::core::GeoPoint;

    /// Substrat, das alle Aufrufe protokolliert.
    #[derive(Default)]
    struct RecordingSubstrate {
        recentered: Vec<(GeoPoint, u8)>,
        polygons: Vec<usize>,
        markers: Vec<String>,
    }

    impl MapSubstrate for RecordingSubstrate {
        type Handle = usize;

        fn recenter(&mut self, center: GeoPoint, zoom: u8) {
            self.recentered.push((center, zoom));
        }

        fn render_polygon(&mut self, shape: &PolygonShape) -> usize {
            self.polygons.push(shape.points.len());
            self.polygons.len() + self.markers.len()
        }

        fn render_marker(&mut self, _point: GeoPoint, popup: &str) -> usize {
            self.markers.push(popup.to_string());
            self.polygons.len() + self.markers.len()
        }
    }

    #[test]
    fn present_skips_degenerate_polygons_and_hidden_overlays() {
        let mut controller = AppController::new();
        let mut state = AppState::new();
        let click = |p: GeoPoint| AppIntent::SingleClick { point: p };

        // Degeneriertes Polygon (leer)
        controller
            .handle_intent(&mut state, AppIntent::ToggleModeRequested)
            .expect("Toggle");
        controller
            .handle_intent(&mut state, AppIntent::ToggleModeRequested)
            .expect("Toggle");

        // Gültiges Dreieck
        controller
            .handle_intent(&mut state, AppIntent::ToggleModeRequested)
            .expect("Toggle");
        for p in [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
        ] {
            controller.handle_intent(&mut state, click(p)).expect("Klick");
        }
        controller
            .handle_intent(&mut state, AppIntent::ToggleModeRequested)
            .expect("Toggle");

        let scene = controller.build_render_scene(&state);
        let mut substrate = RecordingSubstrate::default();
        let handles = present(&scene, &mut substrate);

        assert_eq!(substrate.recentered.len(), 1);
        assert_eq!(substrate.recentered[0].1, state.view.camera.zoom);
        // Ein sichtbares Overlay: 1 Polygon + 1 Marker
        assert_eq!(handles.overlays.len(), 2);
        assert_eq!(handles.polygons.len(), 1);
        assert!(handles.live_polygon.is_none());
        assert!(handles.markers.is_empty());
        assert_eq!(substrate.polygons, vec![9, 3]);
        assert_eq!(substrate.markers, vec!["Gelora Bung Karno".to_string()]);
    }

    #[test]
    fn present_renders_live_polygon_and_markers() {
        let mut controller = AppController::new();
        let mut state = AppState::new();
        controller
            .handle_intent(
                &mut state,
                AppIntent::OverlayVisibilityToggled {
                    name: "Layer group with circles".to_string(),
                },
            )
            .expect("Overlay");
        controller
            .handle_intent(&mut state, AppIntent::ToggleModeRequested)
            .expect("Toggle");
        controller
            .handle_intent(
                &mut state,
                AppIntent::SingleClick {
                    point: GeoPoint::new(1.0, 2.0),
                },
            )
            .expect("Klick");
        controller
            .handle_intent(
                &mut state,
                AppIntent::DoubleClick {
                    point: GeoPoint::new(1.0, 2.0),
                },
            )
            .expect("Doppelklick");

        let scene = controller.build_render_scene(&state);
        let mut substrate = RecordingSubstrate::default();
        let handles = present(&scene, &mut substrate);

        assert!(handles.overlays.is_empty());
        assert!(handles.live_polygon.is_some());
        assert_eq!(handles.markers.len(), 1);
        assert_eq!(substrate.markers, vec!["Lat: 1\nLong: 2".to_string()]);
    }
}
