//! Render-Projektion: bildet den Sitzungszustand auf zu zeichnende Shapes ab.

use super::state::AnnotationState;
use super::AppState;
use crate::core::Polygon;
use crate::shared::{MarkerShape, PolygonShape, RenderScene, RenderSet};

/// Projiziert den Annotationszustand auf ein `RenderSet`.
///
/// Reine Funktion: gleicher Zustand ergibt strukturell gleiche Ausgabe.
/// Der Modus fließt nicht ein.
pub fn project_annotations(annotation: &AnnotationState) -> RenderSet {
    let polygons = annotation
        .polygons()
        .all()
        .iter()
        .map(stored_polygon_shape)
        .collect();

    let live_points = annotation.vertices().snapshot().to_vec();
    let live_polygon = PolygonShape {
        degenerate: live_points.len() < crate::core::MIN_POLYGON_VERTICES,
        points: live_points,
        closed: false,
    };

    let markers = annotation
        .markers()
        .all()
        .iter()
        .map(|marker| MarkerShape {
            point: marker.point,
            popup: marker.label.clone(),
        })
        .collect();

    RenderSet {
        polygons,
        live_polygon,
        markers,
    }
}

fn stored_polygon_shape(polygon: &Polygon) -> PolygonShape {
    PolygonShape {
        points: polygon.points().to_vec(),
        closed: true,
        degenerate: polygon.is_degenerate(),
    }
}

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        camera: state.view.camera,
        annotations: project_annotations(&state.annotation),
        overlays: state
            .view
            .overlays
            .iter()
            .filter(|group| group.visible)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeoPoint;

    fn populated_state() -> AppState {
        let mut state = AppState::new();
        state.annotation.toggle_mode();
        state.annotation.append_vertex(GeoPoint::new(0.0, 0.0));
        state.annotation.append_vertex(GeoPoint::new(0.0, 1.0));
        state.annotation.append_vertex(GeoPoint::new(1.0, 1.0));
        state.annotation.toggle_mode();
        state.annotation.toggle_mode();
        state.annotation.append_vertex(GeoPoint::new(2.0, 2.0));
        state.annotation.drop_marker(GeoPoint::with_altitude(3.0, 4.0, 5.0));
        state
    }

    #[test]
    fn projection_contains_one_shape_per_entity() {
        let state = populated_state();

        let set = project_annotations(&state.annotation);

        assert_eq!(set.polygons.len(), 1);
        assert!(set.polygons[0].closed);
        assert!(!set.polygons[0].degenerate);
        assert_eq!(set.live_polygon.points, vec![GeoPoint::new(2.0, 2.0)]);
        assert!(!set.live_polygon.closed);
        assert!(set.live_polygon.degenerate);
        assert_eq!(set.markers.len(), 1);
        assert_eq!(set.markers[0].popup, "Lat: 3\nLong: 4\nAlt: 5");
    }

    #[test]
    fn projection_is_idempotent() {
        let state = populated_state();

        let first = build(&state);
        let second = build(&state);

        assert_eq!(first, second);
    }

    #[test]
    fn projection_ignores_mode() {
        let mut navigate = AppState::new();
        navigate.annotation.drop_marker(GeoPoint::new(1.0, 1.0));
        let mut draw = AppState::new();
        draw.annotation.drop_marker(GeoPoint::new(1.0, 1.0));
        draw.annotation.toggle_mode();

        assert_eq!(
            project_annotations(&navigate.annotation),
            project_annotations(&draw.annotation)
        );
    }

    #[test]
    fn build_includes_only_visible_overlays() {
        let state = AppState::new();

        let scene = build(&state);

        assert_eq!(scene.overlays.len(), 1);
        assert_eq!(scene.overlays[0].name, "Layer group with circles");
    }
}
