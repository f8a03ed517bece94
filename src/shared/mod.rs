//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app`, `render` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
pub mod overlay;
mod render_scene;

pub use options::SessionOptions;
pub use overlay::{default_overlay_groups, OverlayGroup, OverlayMarker, FEATURE_GROUP_NOTICE};
pub use render_scene::{MarkerShape, PolygonShape, RenderScene, RenderSet, MARKER_RADIUS};
