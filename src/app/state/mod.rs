//! Application State: zentrale Datenhaltung der Sitzung.

mod annotation;
mod app_state;
mod view;

pub use annotation::AnnotationState;
pub use app_state::AppState;
pub use view::ViewState;
