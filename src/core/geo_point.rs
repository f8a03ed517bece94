//! Geographischer Punkt (Breite, Länge, optionale Höhe).

use std::fmt;

/// Fehler bei der Validierung eines `GeoPoint`.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum PointError {
    /// Breitengrad ist NaN oder unendlich
    #[error("Breitengrad nicht endlich: {0}")]
    NonFiniteLatitude(f64),
    /// Längengrad ist NaN oder unendlich
    #[error("Längengrad nicht endlich: {0}")]
    NonFiniteLongitude(f64),
    /// Höhe angegeben, aber NaN oder unendlich
    #[error("Höhe nicht endlich: {0}")]
    NonFiniteAltitude(f64),
}

/// Unveränderlicher Punkt in geographischen Koordinaten.
///
/// Die Werte werden ohne Rundung in voller `f64`-Präzision gehalten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
    altitude: Option<f64>,
}

impl GeoPoint {
    /// Erstellt einen Punkt ohne Höhenangabe.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: None,
        }
    }

    /// Erstellt einen Punkt mit Höhenangabe.
    pub const fn with_altitude(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: Some(altitude),
        }
    }

    /// Breitengrad in Grad
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Längengrad in Grad
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Höhe (falls vorhanden)
    pub fn altitude(&self) -> Option<f64> {
        self.altitude
    }

    /// Prüft, ob alle Komponenten endlich sind.
    ///
    /// Wertebereiche (|lat| <= 90 usw.) werden bewusst nicht geprüft.
    pub fn validate(&self) -> Result<(), PointError> {
        if !self.latitude.is_finite() {
            return Err(PointError::NonFiniteLatitude(self.latitude));
        }
        if !self.longitude.is_finite() {
            return Err(PointError::NonFiniteLongitude(self.longitude));
        }
        match self.altitude {
            Some(alt) if !alt.is_finite() => Err(PointError::NonFiniteAltitude(alt)),
            _ => Ok(()),
        }
    }

    /// Popup-Text im Format `Lat: …\nLong: …` (plus `\nAlt: …` bei Höhe).
    pub fn label(&self) -> String {
        match self.altitude {
            Some(alt) => format!(
                "Lat: {}\nLong: {}\nAlt: {}",
                self.latitude, self.longitude, alt
            ),
            None => format!("Lat: {}\nLong: {}", self.latitude, self.longitude),
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)?;
        if let Some(alt) = self.altitude {
            write!(f, " @ {}m", alt)?;
        }
        Ok(())
    }
}
