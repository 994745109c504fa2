//! Shape-Annotation-Editor.
//!
//! Editor für Polygone mit beschrifteten Kurvenkanten, Winkelfächern und
//! frei platzierten Texten, gebaut mit egui.

use eframe::egui;
use shape_annotation_editor::{ui, AppController, AppIntent, AppState, EditorOptions};

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

        log::info!(
            "Shape-Annotation-Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Shape-Annotation-Editor"),
            ..Default::default()
        };

        eframe::run_native(
            "Shape-Annotation-Editor",
            options,
            Box::new(|cc| Ok(Box::new(EditorApp::new(&cc.egui_ctx)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new(ctx: &egui::Context) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);
        if !config_path.exists() {
            if let Err(e) = editor_options.save_to_file(&config_path) {
                log::warn!("Standard-Optionen nicht gespeichert: {:#}", e);
            }
        }

        let mut state = AppState::with_options(editor_options);
        state.text_measure = Box::new(ui::EguiTextMeasure::new(ctx.clone()));

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.collect_ui_events(ctx);

        self.process_events(events);

        if self.state.view.take_redraw_request() {
            ctx.request_repaint();
        }
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_properties_panel(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_canvas_events(ui, &response, &self.state));

                let scene = self.controller.build_render_scene(&self.state);
                ui::paint_scene(&ui.painter_at(rect), rect, &scene);

                if !scene.has_content() {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Klicken, um Ecken zu setzen · Enter schließt das Polygon",
                        egui::FontId::proportional(18.0),
                        egui::Color32::GRAY,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::warn!("Event-Verarbeitung abgelehnt: {:#}", e);
            }
        }
    }
}
