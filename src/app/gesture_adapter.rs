//! Map-Event-Adapter: ordnet Zeiger-Gesten modusabhängig Commands zu.
//!
//! Die Zuordnung ist eine explizite Dispatch-Tabelle `GestureKind → Handler`.
//! Handler sind reine Funktionen `(&AppState, GeoPoint) → Vec<AppCommand>`;
//! ausgeführt werden die Commands zentral im `AppController`.

use super::mode_controller::Mode;
use super::{AppCommand, AppState};
use crate::core::GeoPoint;

/// Art der Zeiger-Geste
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// Einfachklick
    SingleClick,
    /// Doppelklick
    DoubleClick,
}

/// Handler-Signatur der Dispatch-Tabelle.
pub type GestureHandler = fn(&AppState, GeoPoint) -> Vec<AppCommand>;

/// Liefert den Handler für eine Gestenart.
pub fn handler_for(kind: GestureKind) -> GestureHandler {
    match kind {
        GestureKind::SingleClick => on_single_click,
        GestureKind::DoubleClick => on_double_click,
    }
}

/// Validiert den Punkt und übersetzt die Geste in Commands.
///
/// Ungültige Punkte (nicht endliche Koordinaten) werden verworfen.
pub fn dispatch(state: &AppState, kind: GestureKind, point: GeoPoint) -> Vec<AppCommand> {
    if let Err(e) = point.validate() {
        log::warn!("{:?} verworfen: {}", kind, e);
        return Vec::new();
    }
    handler_for(kind)(state, point)
}

/// Navigate: Karte zentrieren. Draw: Eckpunkt anhängen.
///
/// Trifft der Klick zusätzlich eine sichtbare Overlay-Gruppe mit Hinweistext,
/// folgt ein `ShowNotice` pro Gruppe.
fn on_single_click(state: &AppState, point: GeoPoint) -> Vec<AppCommand> {
    let mut commands = match state.annotation.mode() {
        Mode::Navigate => vec![AppCommand::RecenterView { center: point }],
        Mode::Draw => vec![AppCommand::AppendVertex { point }],
    };
    commands.extend(overlay_notices(state, point));
    commands
}

fn overlay_notices(state: &AppState, point: GeoPoint) -> Vec<AppCommand> {
    let zoom = state.view.camera.zoom;
    state
        .view
        .overlays
        .iter()
        .filter(|group| group.visible)
        .filter_map(|group| group.on_click.as_ref().map(|message| (group, message)))
        .filter(|(group, _)| group.hit_test(point, zoom))
        .map(|(_, message)| AppCommand::ShowNotice {
            message: message.clone(),
        })
        .collect()
}

/// Marker setzen, unabhängig vom Modus.
fn on_double_click(_state: &AppState, point: GeoPoint) -> Vec<AppCommand> {
    vec![AppCommand::DropMarker { point }]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw_state() -> AppState {
        let mut state = AppState::new();
        state.annotation.toggle_mode();
        state
    }

    #[test]
    fn single_click_in_navigate_recenters() {
        let state = AppState::new();
        let p = GeoPoint::new(-6.25, 106.75);

        let commands = dispatch(&state, GestureKind::SingleClick, p);

        assert_eq!(commands, vec![AppCommand::RecenterView { center: p }]);
    }

    #[test]
    fn single_click_in_draw_appends_vertex() {
        let state = draw_state();
        let p = GeoPoint::with_altitude(1.0, 2.0, 3.0);

        let commands = dispatch(&state, GestureKind::SingleClick, p);

        assert_eq!(commands, vec![AppCommand::AppendVertex { point: p }]);
    }

    #[test]
    fn double_click_drops_marker_in_both_modes() {
        let p = GeoPoint::new(5.0, 6.0);
        let expected = vec![AppCommand::DropMarker { point: p }];

        assert_eq!(dispatch(&AppState::new(), GestureKind::DoubleClick, p), expected);
        assert_eq!(dispatch(&draw_state(), GestureKind::DoubleClick, p), expected);
    }

    #[test]
    fn single_click_on_feature_group_adds_notice_after_routing() {
        let state = draw_state();
        let inside = GeoPoint::new(-6.218, 106.803);

        let commands = dispatch(&state, GestureKind::SingleClick, inside);

        assert_eq!(
            commands,
            vec![
                AppCommand::AppendVertex { point: inside },
                AppCommand::ShowNotice {
                    message: crate::shared::FEATURE_GROUP_NOTICE.to_string(),
                },
            ]
        );
    }

    #[test]
    fn double_click_on_feature_group_raises_no_notice() {
        let inside = GeoPoint::new(-6.218, 106.803);

        let commands = dispatch(&AppState::new(), GestureKind::DoubleClick, inside);

        assert_eq!(commands, vec![AppCommand::DropMarker { point: inside }]);
    }

    #[test]
    fn non_finite_point_yields_no_commands() {
        let state = draw_state();

        assert!(dispatch(&state, GestureKind::SingleClick, GeoPoint::new(f64::NAN, 0.0)).is_empty());
        assert!(
            dispatch(&state, GestureKind::DoubleClick, GeoPoint::new(0.0, f64::INFINITY))
                .is_empty()
        );
    }

    #[test]
    fn handler_table_is_pure() {
        let state = draw_state();
        let p = GeoPoint::new(1.0, 1.0);

        let first = handler_for(GestureKind::SingleClick)(&state, p);
        let second = handler_for(GestureKind::SingleClick)(&state, p);

        assert_eq!(first, second);
        assert!(state.annotation.vertices().is_empty());
    }
}
