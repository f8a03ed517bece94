//! Viewport-Input: Klicks, Doppelklicks, Drag und Scroll → AppIntent.

use super::projection::{dragged_center, screen_to_geo};
use crate::app::AppIntent;
use crate::core::{GeoPoint, MapCamera};

/// Scroll-Distanz in Punkten pro Zoomstufe.
const SCROLL_ZOOM_STEP: f32 = 50.0;

/// Frame-übergreifender Input-Zustand des Viewports.
#[derive(Debug, Default)]
pub struct InputState {
    scroll_accum: f32,
}

impl InputState {
    /// Erstellt einen neuen, leeren InputState.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        camera: &MapCamera,
    ) -> Vec<AppIntent> {
        let rect = response.rect;
        let mut events = vec![AppIntent::ViewportResized {
            size: [rect.width(), rect.height()],
        }];

        if let Some(pointer_pos) = response.interact_pointer_pos() {
            let point = screen_to_geo(pointer_pos, camera, rect);
            events.extend(click_intents(
                response.clicked_by(egui::PointerButton::Primary),
                response.double_clicked_by(egui::PointerButton::Primary),
                point,
            ));
        }

        if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            if delta != egui::Vec2::ZERO {
                events.push(AppIntent::ViewDragged {
                    center: dragged_center(camera, delta),
                });
            }
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            events.extend(self.scroll_zoom_intents(scroll));
        } else {
            self.scroll_accum = 0.0;
        }

        events
    }

    /// Sammelt Scroll-Deltas und erzeugt pro vollem Schritt einen Zoom-Intent.
    ///
    /// Ein Richtungswechsel verwirft den angesammelten Rest.
    fn scroll_zoom_intents(&mut self, scroll: f32) -> Vec<AppIntent> {
        if scroll == 0.0 {
            return Vec::new();
        }
        if self.scroll_accum != 0.0 && self.scroll_accum.signum() != scroll.signum() {
            self.scroll_accum = 0.0;
        }
        self.scroll_accum += scroll;

        let mut events = Vec::new();
        while self.scroll_accum >= SCROLL_ZOOM_STEP {
            self.scroll_accum -= SCROLL_ZOOM_STEP;
            events.push(AppIntent::ZoomInRequested);
        }
        while self.scroll_accum <= -SCROLL_ZOOM_STEP {
            self.scroll_accum += SCROLL_ZOOM_STEP;
            events.push(AppIntent::ZoomOutRequested);
        }
        events
    }
}

/// Übersetzt egui-Klickflags in Intents.
///
/// egui meldet beim zweiten Klick eines Doppelklicks auch `clicked`; dieser
/// Klick wird unterdrückt, damit ein Doppelklick genau einen Einfachklick
/// (den ersten) und einen Doppelklick ergibt.
fn click_intents(clicked: bool, double_clicked: bool, point: GeoPoint) -> Vec<AppIntent> {
    if double_clicked {
        vec![AppIntent::DoubleClick { point }]
    } else if clicked {
        vec![AppIntent::SingleClick { point }]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_click_of_double_click_is_not_a_single_click() {
        let p = GeoPoint::new(-6.21, 106.80);

        assert_eq!(
            click_intents(true, false, p),
            vec![AppIntent::SingleClick { point: p }]
        );
        assert_eq!(
            click_intents(true, true, p),
            vec![AppIntent::DoubleClick { point: p }]
        );
        assert!(click_intents(false, false, p).is_empty());
    }

    #[test]
    fn smooth_scroll_gesture_zooms_once_per_step() {
        let mut input = InputState::new();

        // Trackpad: viele kleine Deltas über mehrere Frames
        let mut events = Vec::new();
        for _ in 0..12 {
            events.extend(input.scroll_zoom_intents(5.0));
        }

        assert_eq!(events, vec![AppIntent::ZoomInRequested]);
    }

    #[test]
    fn large_wheel_delta_yields_multiple_steps() {
        let mut input = InputState::new();

        let events = input.scroll_zoom_intents(-120.0);

        assert_eq!(
            events,
            vec![AppIntent::ZoomOutRequested, AppIntent::ZoomOutRequested]
        );
    }

    #[test]
    fn direction_change_discards_remainder() {
        let mut input = InputState::new();

        assert!(input.scroll_zoom_intents(40.0).is_empty());
        assert!(input.scroll_zoom_intents(-40.0).is_empty());
        assert_eq!(
            input.scroll_zoom_intents(-10.0),
            vec![AppIntent::ZoomOutRequested]
        );
    }
}
