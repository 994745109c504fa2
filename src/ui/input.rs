//! Canvas-Input-Handling: Maus/Touch-Events und Scroll → AppIntent.
//!
//! Positionen werden in Gerätekoordinaten weitergereicht; die Umrechnung in
//! Modellkoordinaten passiert im Intent-Mapping.

use super::keyboard;
use crate::app::{AppIntent, AppState};

/// Verwaltet den Input-Zustand der Zeichenfläche
#[derive(Debug, Default)]
pub struct InputState {
    /// Primärtaste wurde auf der Zeichenfläche gedrückt und ist noch unten
    pointer_down: bool,
    /// Zuletzt gemeldete Zeigerposition (Gerätekoordinaten)
    last_pointer: Option<egui::Pos2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zentraler UI→Intent-Einstieg für Zeiger-, Scroll- und Tastatur-Eingaben.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        state: &AppState,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        let origin = glam::Vec2::new(response.rect.min.x, response.rect.min.y);
        if origin != state.view.camera.canvas_origin {
            events.push(AppIntent::CanvasOriginChanged { origin });
        }

        events.extend(keyboard::collect_keyboard_intents(ui, state.editor.mode));

        self.handle_press(ui, response, &mut events);
        self.handle_move(ui, response, &mut events);
        self.handle_release(ui, &mut events);
        handle_scroll_zoom(ui, response, &mut events);

        events
    }

    fn handle_press(&mut self, ui: &egui::Ui, response: &egui::Response, events: &mut Vec<AppIntent>) {
        let (pressed, modifiers, pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.modifiers,
                i.pointer.press_origin(),
            )
        });
        if !pressed {
            return;
        }
        let Some(pos) = pos.filter(|p| response.rect.contains(*p)) else {
            return;
        };

        self.pointer_down = true;
        self.last_pointer = Some(pos);
        events.push(AppIntent::PointerPressed {
            screen_pos: to_vec2(pos),
            additive: modifiers.shift || modifiers.command,
        });
    }

    fn handle_move(&mut self, ui: &egui::Ui, response: &egui::Response, events: &mut Vec<AppIntent>) {
        let Some(pos) = ui.input(|i| i.pointer.latest_pos()) else {
            return;
        };
        if self.last_pointer == Some(pos) {
            return;
        }
        // Außerhalb der Zeichenfläche nur während einer laufenden Geste
        if !self.pointer_down && !response.rect.contains(pos) {
            return;
        }

        self.last_pointer = Some(pos);
        events.push(AppIntent::PointerMoved {
            screen_pos: to_vec2(pos),
        });
    }

    fn handle_release(&mut self, ui: &egui::Ui, events: &mut Vec<AppIntent>) {
        if !self.pointer_down {
            return;
        }
        let released = ui.input(|i| i.pointer.primary_released() || !i.pointer.primary_down());
        if released {
            self.pointer_down = false;
            events.push(AppIntent::PointerReleased);
        }
    }
}

/// Mausrad: eine Zoom-Raste pro Wheel-Ereignis.
fn handle_scroll_zoom(ui: &egui::Ui, response: &egui::Response, events: &mut Vec<AppIntent>) {
    if !response.hovered() {
        return;
    }
    let steps = ui.input(|i| wheel_zoom_steps(&i.events));
    events.extend(
        steps
            .into_iter()
            .map(|zoom_in| AppIntent::ZoomStepRequested { zoom_in }),
    );
}

/// Richtung je Wheel-Ereignis (`true` = hinein); Ereignisse ohne vertikalen Anteil entfallen.
fn wheel_zoom_steps(events: &[egui::Event]) -> Vec<bool> {
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::MouseWheel { delta, .. } if delta.y != 0.0 => Some(delta.y > 0.0),
            _ => None,
        })
        .collect()
}

fn to_vec2(pos: egui::Pos2) -> glam::Vec2 {
    glam::Vec2::new(pos.x, pos.y)
}
