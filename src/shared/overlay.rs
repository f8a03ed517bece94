//! Benannte Overlay-Gruppen der Basiskarte.
//!
//! Die Sichtbarkeit wird ausschließlich vom Benutzer umgeschaltet und ist
//! unabhängig vom Annotationszustand.

use super::render_scene::MARKER_RADIUS;
use crate::core::mercator::geo_to_world;
use crate::core::GeoPoint;
use glam::DVec2;

/// Statischer Marker innerhalb einer Overlay-Gruppe.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayMarker {
    /// Position des Markers
    pub point: GeoPoint,
    /// Popup-Text
    pub popup: String,
}

/// Ein-/ausblendbare Gruppe aus Markern und Polygonen.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayGroup {
    /// Anzeigename (eindeutig)
    pub name: String,
    /// Sichtbarkeit
    pub visible: bool,
    /// Marker der Gruppe
    pub markers: Vec<OverlayMarker>,
    /// Polygone der Gruppe
    pub polygons: Vec<Vec<GeoPoint>>,
    /// Hinweistext bei Klick auf einen Marker oder in ein Polygon der Gruppe
    pub on_click: Option<String>,
}

impl OverlayGroup {
    /// Prüft, ob ein Klick bei gegebener Zoomstufe ein Element der Gruppe trifft.
    ///
    /// Marker gelten im Umkreis von `MARKER_RADIUS` Pixeln als getroffen,
    /// Polygone per Ray-Casting in Welt-Pixeln.
    pub fn hit_test(&self, point: GeoPoint, zoom: u8) -> bool {
        let click = geo_to_world(point, zoom);

        let marker_hit = self.markers.iter().any(|marker| {
            geo_to_world(marker.point, zoom).distance(click) <= f64::from(MARKER_RADIUS)
        });
        if marker_hit {
            return true;
        }

        self.polygons.iter().any(|outline| {
            let projected: Vec<DVec2> = outline.iter().map(|p| geo_to_world(*p, zoom)).collect();
            point_in_polygon(click, &projected)
        })
    }
}

/// Prüft ob ein Punkt innerhalb eines Polygons liegt (Ray-Casting).
fn point_in_polygon(point: DVec2, polygon: &[DVec2]) -> bool {
    let Some(&last) = polygon.last() else {
        return false;
    };
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut previous = last;

    for &current in polygon {
        let intersect = ((current.y > point.y) != (previous.y > point.y))
            && (point.x
                < (previous.x - current.x) * (point.y - current.y) / (previous.y - current.y)
                    + current.x);

        if intersect {
            inside = !inside;
        }

        previous = current;
    }

    inside
}

/// Umriss des Stadions Gelora Bung Karno.
const GBK_OUTLINE: [(f64, f64); 9] = [
    (-6.214669526319127, 106.79833505435423),
    (-6.220507037077649, 106.79841995392937),
    (-6.222547271055484, 106.80306614213157),
    (-6.2246618297727885, 106.8047785879743),
    (-6.222034333328526, 106.80875203008532),
    (-6.22131910805266, 106.80825739936898),
    (-6.215825428896476, 106.80827214898527),
    (-6.215686292605482, 106.80610816639332),
    (-6.212924964757694, 106.80610816639332),
];

/// Hinweis der Gruppe "Layer group with circles".
pub const FEATURE_GROUP_NOTICE: &str = "click feature group";

fn gelora_bung_karno_group(name: &str, visible: bool, on_click: Option<&str>) -> OverlayGroup {
    OverlayGroup {
        name: name.to_string(),
        visible,
        on_click: on_click.map(str::to_string),
        markers: vec![OverlayMarker {
            point: GeoPoint::new(-6.2186488, 106.7991978),
            popup: "Gelora Bung Karno".to_string(),
        }],
        polygons: vec![GBK_OUTLINE
            .iter()
            .map(|&(lat, lon)| GeoPoint::new(lat, lon))
            .collect()],
    }
}

/// Overlay-Gruppen beim Sitzungsstart.
pub fn default_overlay_groups() -> Vec<OverlayGroup> {
    vec![
        gelora_bung_karno_group("Gelora Bung Karno Marker", false, None),
        gelora_bung_karno_group(
            "Layer group with circles",
            true,
            Some(FEATURE_GROUP_NOTICE),
        ),
    ]
}
