//! Map Annotator.
//!
//! Interaktive Karte zum Zeichnen von Polygonen und Setzen von Markern.
//! egui/eframe als Oberfläche, Annotationen nur für die laufende Sitzung.

use eframe::egui;
use map_annotator::{render, ui, AppController, AppIntent, AppState, SessionOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Map Annotator v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Map Annotator"),
            ..Default::default()
        };

        eframe::run_native(
            "Map Annotator",
            options,
            Box::new(|_cc| Ok(Box::new(AnnotatorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct AnnotatorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl AnnotatorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = SessionOptions::config_path();
        let session_options = SessionOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(session_options),
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for AnnotatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        if has_meaningful_events {
            ctx.request_repaint();
        }
    }
}

impl AnnotatorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    &self.state.view.camera,
                ));

                let scene = self.controller.build_render_scene(&self.state);
                let mut substrate = ui::EguiSubstrate::new(
                    ui.painter_at(rect),
                    scene.camera,
                    response.hover_pos(),
                );
                render::present(&scene, &mut substrate);
                substrate.finish();

                if !scene.has_annotations() {
                    ui.painter().text(
                        rect.center_top() + egui::vec2(0.0, 16.0),
                        egui::Align2::CENTER_TOP,
                        "Doppelklick setzt einen Marker",
                        egui::FontId::proportional(16.0),
                        egui::Color32::DARK_GRAY,
                    );
                }
            });

        events.extend(ui::render_layer_control(ctx, &self.state));
        events.extend(ui::show_notice_window(ctx, &self.state));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
