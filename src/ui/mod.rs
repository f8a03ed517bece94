//! UI-Layer mit egui: Toolbar, Layer-Steuerung, Hinweise, Status-Bar, Viewport.
//!
//! Der Viewport implementiert das Karten-Substrat (`EguiSubstrate`) und
//! übersetzt Zeiger-Gesten in `AppIntent`s.

pub mod input;
pub mod layers;
pub mod map_view;
pub mod notice;
pub mod projection;
pub mod status;
pub mod toolbar;

pub use input::InputState;
pub use layers::render_layer_control;
pub use map_view::EguiSubstrate;
pub use notice::show_notice_window;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
