//! Keyboard-Shortcuts für die Zeichenfläche.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::{AppIntent, EditMode};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Solange ein Textfeld den Fokus hat, gehören alle Tasten (auch Cmd/Ctrl+Z)
/// dem Textfeld.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, active_mode: EditMode) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    let (modifiers, key_z_pressed, key_y_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
        )
    });

    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && (key_y_pressed || (modifiers.shift && key_z_pressed)) {
        events.push(AppIntent::RedoRequested);
    }

    // Ctrl+G (Gruppieren), Shift+Ctrl+G (Auflösen), Ctrl+D (Duplizieren)
    let (key_g_pressed, key_d_pressed) =
        ui.input(|i| (i.key_pressed(egui::Key::G), i.key_pressed(egui::Key::D)));

    if modifiers.command && key_g_pressed {
        if modifiers.shift {
            events.push(AppIntent::UngroupSelectionRequested);
        } else {
            events.push(AppIntent::GroupSelectionRequested);
        }
    }

    if modifiers.command && key_d_pressed {
        events.push(AppIntent::DuplicateSelectionRequested);
    }

    // Enter schließt das Polygon in Arbeit, Zifferntasten wechseln den Modus
    let (key_enter_pressed, mode_keys) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Enter),
            [
                i.key_pressed(egui::Key::Num1),
                i.key_pressed(egui::Key::Num2),
                i.key_pressed(egui::Key::Num3),
                i.key_pressed(egui::Key::Num4),
            ],
        )
    });

    if key_enter_pressed && active_mode == EditMode::Draw {
        events.push(AppIntent::ClosePolygonRequested);
    }

    if !modifiers.command {
        for (mode, pressed) in EditMode::ALL.into_iter().zip(mode_keys) {
            if pressed && mode != active_mode {
                events.push(AppIntent::ModeSelected { mode });
            }
        }
    }

    events
}

#[cfg(test)]
mod tests;
