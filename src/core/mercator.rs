//! Web-Mercator: geographische Punkte ↔ Welt-Pixel bei einer Tile-Zoomstufe.

use super::GeoPoint;
use glam::DVec2;
use std::f64::consts::PI;

/// Kantenlänge einer Kachel in Pixeln.
const TILE_SIZE: f64 = 256.0;
/// Breitengrad-Grenze der Web-Mercator-Projektion.
const MAX_LATITUDE: f64 = 85.051_128_78;

/// Weltgröße in Pixeln bei gegebener Zoomstufe.
fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * 2f64.powi(i32::from(zoom))
}

/// Projiziert einen Punkt in Welt-Pixel-Koordinaten.
pub fn geo_to_world(point: GeoPoint, zoom: u8) -> DVec2 {
    let size = world_size(zoom);
    let lat = point.latitude().clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (point.longitude() + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    DVec2::new(x, y)
}

/// Rückprojektion aus Welt-Pixel-Koordinaten (ohne Höhe).
pub fn world_to_geo(world: DVec2, zoom: u8) -> GeoPoint {
    let size = world_size(zoom);
    let lon = world.x / size * 360.0 - 180.0;
    let lat = (PI * (1.0 - 2.0 * world.y / size)).sinh().atan().to_degrees();
    GeoPoint::new(lat, lon)
}
