//! Core-Domänentypen: Punkte, Eckpunkt-Puffer, Polygone, Marker, Kamera.

pub mod camera;
pub mod geo_point;
pub mod mercator;
pub mod marker_log;
pub mod polygon_store;
pub mod vertex_accumulator;

pub use camera::MapCamera;
pub use geo_point::{GeoPoint, PointError};
pub use marker_log::{Marker, MarkerLog};
pub use polygon_store::{Polygon, PolygonStore, MIN_POLYGON_VERTICES};
pub use vertex_accumulator::VertexAccumulator;
