//! Web-Mercator-Projektion zwischen geographischen und Bildschirm-Koordinaten.

use crate::core::mercator::{geo_to_world, world_to_geo};
use crate::core::{GeoPoint, MapCamera};
use glam::DVec2;

/// Bildschirmposition eines Punkts im Viewport-Rechteck.
pub fn geo_to_screen(point: GeoPoint, camera: &MapCamera, rect: egui::Rect) -> egui::Pos2 {
    let offset = geo_to_world(point, camera.zoom) - geo_to_world(camera.center, camera.zoom);
    rect.center() + egui::vec2(offset.x as f32, offset.y as f32)
}

/// Geographischer Punkt unter einer Bildschirmposition.
pub fn screen_to_geo(pos: egui::Pos2, camera: &MapCamera, rect: egui::Rect) -> GeoPoint {
    let delta = pos - rect.center();
    let world = geo_to_world(camera.center, camera.zoom)
        + DVec2::new(f64::from(delta.x), f64::from(delta.y));
    world_to_geo(world, camera.zoom)
}

/// Neuer Kartenmittelpunkt nach einem Drag um `drag_delta` Pixel.
pub fn dragged_center(camera: &MapCamera, drag_delta: egui::Vec2) -> GeoPoint {
    let world = geo_to_world(camera.center, camera.zoom)
        - DVec2::new(f64::from(drag_delta.x), f64::from(drag_delta.y));
    world_to_geo(world, camera.zoom)
}
