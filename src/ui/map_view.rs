//! egui-Implementierung des Karten-Substrats.

use super::projection::geo_to_screen;
use crate::core::{GeoPoint, MapCamera};
use crate::render::MapSubstrate;
use crate::shared::options::TILE_ATTRIBUTION;
use crate::shared::{PolygonShape, MARKER_RADIUS};
use egui::layers::ShapeIdx;
use egui::{Align2, Color32, FontId, Pos2, Stroke};

const BACKGROUND_COLOR: Color32 = Color32::from_rgb(229, 227, 223);
const POLYGON_COLOR: Color32 = Color32::from_rgb(51, 136, 255);
const LIVE_POLYGON_COLOR: Color32 = Color32::from_rgb(255, 140, 0);
const MARKER_COLOR: Color32 = Color32::from_rgb(220, 40, 40);

/// Zeichnet Polygone und Marker mit dem egui-Painter in den Viewport.
pub struct EguiSubstrate {
    painter: egui::Painter,
    camera: MapCamera,
    hover_pos: Option<Pos2>,
    popup: Option<(Pos2, String)>,
}

impl EguiSubstrate {
    /// Erstellt das Substrat und füllt den Viewport-Hintergrund.
    pub fn new(painter: egui::Painter, camera: MapCamera, hover_pos: Option<Pos2>) -> Self {
        painter.rect_filled(painter.clip_rect(), 0.0, BACKGROUND_COLOR);
        Self {
            painter,
            camera,
            hover_pos,
            popup: None,
        }
    }

    fn to_screen(&self, point: GeoPoint) -> Pos2 {
        geo_to_screen(point, &self.camera, self.painter.clip_rect())
    }

    /// Zeichnet das Popup des überfahrenen Markers und die Quellenangabe.
    pub fn finish(self) {
        if let Some((anchor, text)) = &self.popup {
            let galley =
                self.painter
                    .layout_no_wrap(text.clone(), FontId::proportional(13.0), Color32::BLACK);
            let pos = *anchor + egui::vec2(MARKER_RADIUS + 4.0, -galley.size().y / 2.0);
            let bg = egui::Rect::from_min_size(pos, galley.size()).expand(4.0);
            self.painter.rect_filled(bg, 4.0, Color32::WHITE);
            self.painter.galley(pos, galley, Color32::BLACK);
        }

        let rect = self.painter.clip_rect();
        self.painter.text(
            rect.right_bottom() - egui::vec2(4.0, 4.0),
            Align2::RIGHT_BOTTOM,
            TILE_ATTRIBUTION,
            FontId::proportional(11.0),
            Color32::DARK_GRAY,
        );
    }
}

impl MapSubstrate for EguiSubstrate {
    type Handle = ShapeIdx;

    fn recenter(&mut self, center: GeoPoint, zoom: u8) {
        self.camera = MapCamera::new(center, zoom);
    }

    fn render_polygon(&mut self, shape: &PolygonShape) -> ShapeIdx {
        let points: Vec<Pos2> = shape.points.iter().map(|p| self.to_screen(*p)).collect();
        if shape.closed {
            self.painter
                .add(egui::Shape::closed_line(points, Stroke::new(2.0, POLYGON_COLOR)))
        } else {
            let vertex_dots: Vec<egui::Shape> = points
                .iter()
                .map(|p| egui::Shape::circle_filled(*p, 3.0, LIVE_POLYGON_COLOR))
                .collect();
            let line = egui::Shape::line(points, Stroke::new(2.0, LIVE_POLYGON_COLOR));
            let mut shapes = vec![line];
            shapes.extend(vertex_dots);
            self.painter.add(egui::Shape::Vec(shapes))
        }
    }

    fn render_marker(&mut self, point: GeoPoint, popup: &str) -> ShapeIdx {
        let pos = self.to_screen(point);
        if self
            .hover_pos
            .is_some_and(|hover| hover.distance(pos) <= MARKER_RADIUS * 1.5)
        {
            self.popup = Some((pos, popup.to_string()));
        }
        self.painter
            .circle(pos, MARKER_RADIUS, MARKER_COLOR, Stroke::new(1.5, Color32::WHITE))
    }
}
