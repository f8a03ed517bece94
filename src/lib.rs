//! Map Annotator Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, GestureKind, Mode, ModeController,
    ModeTransition, ViewState,
};
pub use core::{
    GeoPoint, MapCamera, Marker, MarkerLog, PointError, Polygon, PolygonStore, VertexAccumulator,
};
pub use render::{present, MapSubstrate, PresentedHandles};
pub use shared::{RenderScene, SessionOptions};
