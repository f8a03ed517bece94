//! Sitzungs-Konfiguration für den Map Annotator.
//!
//! `SessionOptions` enthält nur die beim Start gelesenen Werte
//! (Startmittelpunkt, Startzoom). Die `const`-Werte dienen als Default.

use crate::core::{GeoPoint, MapCamera};
use serde::{Deserialize, Deserializer, Serialize};

// ── Startansicht ────────────────────────────────────────────────────

/// Start-Breitengrad (Gelora Bung Karno, Jakarta).
pub const INITIAL_CENTER_LAT: f64 = -6.2186488;
/// Start-Längengrad (Gelora Bung Karno, Jakarta).
pub const INITIAL_CENTER_LON: f64 = 106.7991978;
/// Start-Zoomstufe.
pub const INITIAL_ZOOM: u8 = 13;

// ── Tiles ───────────────────────────────────────────────────────────

/// Quellenangabe der Basiskarte.
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Name der Optionen-Datei neben der Binary.
const CONFIG_FILE_NAME: &str = "map_annotator.toml";

/// Beim Sitzungsstart gelesene Optionen.
/// Wird als `map_annotator.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionOptions {
    /// Breitengrad des Startmittelpunkts
    pub initial_center_lat: f64,
    /// Längengrad des Startmittelpunkts
    pub initial_center_lon: f64,
    /// Start-Zoomstufe (wird beim Laden begrenzt)
    #[serde(deserialize_with = "deserialize_zoom")]
    pub initial_zoom: u8,
}

/// Liest die Zoomstufe als beliebige Ganzzahl und begrenzt sie auf den
/// gültigen Bereich, statt die ganze Datei zu verwerfen.
fn deserialize_zoom<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    let clamped = raw.clamp(i64::from(MapCamera::ZOOM_MIN), i64::from(MapCamera::ZOOM_MAX));
    Ok(u8::try_from(clamped).unwrap_or(MapCamera::ZOOM_MAX))
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            initial_center_lat: INITIAL_CENTER_LAT,
            initial_center_lon: INITIAL_CENTER_LON,
            initial_zoom: INITIAL_ZOOM,
        }
    }
}

impl SessionOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {:#}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML und prüft den Startmittelpunkt.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        opts.initial_center().validate()?;
        Ok(opts)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("map_annotator"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Startmittelpunkt als `GeoPoint`
    pub fn initial_center(&self) -> GeoPoint {
        GeoPoint::new(self.initial_center_lat, self.initial_center_lon)
    }

    /// Kamera für den Sitzungsstart
    pub fn initial_camera(&self) -> MapCamera {
        MapCamera::new(self.initial_center(), self.initial_zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("map_annotator_{}_{}.toml", name, std::process::id()))
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = temp_config_path("missing");
        let _ = std::fs::remove_file(&path);

        assert_eq!(SessionOptions::load_from_file(&path), SessionOptions::default());
    }

    #[test]
    fn save_then_load_returns_same_options() {
        let path = temp_config_path("roundtrip");
        let opts = SessionOptions {
            initial_center_lat: 52.520008,
            initial_center_lon: 13.404954,
            initial_zoom: 11,
        };

        opts.save_to_file(&path).expect("Speichern sollte funktionieren");
        let loaded = SessionOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, opts);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let content = "initial_center_lat = 1.0\ninitial_center_lon = 2.0\ninitial_zoom = 3\ntheme = \"dark\"\n";
        assert!(SessionOptions::from_toml(content).is_err());
    }

    #[test]
    fn zoom_is_clamped_on_load() {
        let content = "initial_center_lat = 1.0\ninitial_center_lon = 2.0\ninitial_zoom = 99\n";
        let opts = SessionOptions::from_toml(content).expect("gültiges TOML");
        assert_eq!(opts.initial_zoom, MapCamera::ZOOM_MAX);
    }

    #[test]
    fn out_of_range_zoom_keeps_rest_of_file() {
        let too_large = "initial_center_lat = 52.5\ninitial_center_lon = 13.4\ninitial_zoom = 300\n";
        let negative = "initial_center_lat = 52.5\ninitial_center_lon = 13.4\ninitial_zoom = -5\n";

        let opts = SessionOptions::from_toml(too_large).expect("gültiges TOML");
        assert_eq!(opts.initial_zoom, MapCamera::ZOOM_MAX);
        assert_eq!(opts.initial_center_lat, 52.5);
        assert_eq!(opts.initial_center_lon, 13.4);

        let opts = SessionOptions::from_toml(negative).expect("gültiges TOML");
        assert_eq!(opts.initial_zoom, MapCamera::ZOOM_MIN);
    }

    #[test]
    fn out_of_range_zoom_in_file_is_clamped_on_load() {
        let path = temp_config_path("zoom_clamp");
        std::fs::write(
            &path,
            "initial_center_lat = 48.1\ninitial_center_lon = 11.6\ninitial_zoom = 300\n",
        )
        .expect("Schreiben sollte funktionieren");

        let loaded = SessionOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(
            loaded,
            SessionOptions {
                initial_center_lat: 48.1,
                initial_center_lon: 11.6,
                initial_zoom: MapCamera::ZOOM_MAX,
            }
        );
    }

    #[test]
    fn non_finite_center_is_rejected() {
        let content = "initial_center_lat = nan\ninitial_center_lon = 2.0\ninitial_zoom = 3\n";
        assert!(SessionOptions::from_toml(content).is_err());
    }
}
