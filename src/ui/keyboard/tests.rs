use super::*;

fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

fn collect_with_key_event(event: egui::Event, active_mode: EditMode) -> Vec<AppIntent> {
    collect_with_focus(event, active_mode, false)
}

fn collect_with_focus(
    event: egui::Event,
    active_mode: EditMode,
    text_field_focused: bool,
) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    raw_input.modifiers = match &event {
        egui::Event::Key { modifiers, .. } => *modifiers,
        _ => egui::Modifiers::default(),
    };
    raw_input.events.push(event);

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            if text_field_focused {
                ui.memory_mut(|m| m.request_focus(egui::Id::new("label_field")));
            }
            events = collect_keyboard_intents(ui, active_mode);
        });
    });

    events
}

#[test]
fn test_num2_emits_edit_mode_intent() {
    let events = collect_with_key_event(
        key_event(egui::Key::Num2, egui::Modifiers::default()),
        EditMode::Draw,
    );

    assert!(events.iter().any(|event| matches!(
        event,
        AppIntent::ModeSelected {
            mode: EditMode::Edit
        }
    )));
}

#[test]
fn test_active_mode_key_emits_nothing() {
    let events = collect_with_key_event(
        key_event(egui::Key::Num1, egui::Modifiers::default()),
        EditMode::Draw,
    );

    assert!(events.is_empty());
}

#[test]
fn test_ctrl_z_emits_undo() {
    let events = collect_with_key_event(
        key_event(egui::Key::Z, egui::Modifiers::COMMAND),
        EditMode::Edit,
    );

    assert_eq!(events, vec![AppIntent::UndoRequested]);
}

#[test]
fn test_ctrl_shift_z_emits_redo() {
    let events = collect_with_key_event(
        key_event(egui::Key::Z, egui::Modifiers::COMMAND | egui::Modifiers::SHIFT),
        EditMode::Edit,
    );

    assert_eq!(events, vec![AppIntent::RedoRequested]);
}

#[test]
fn test_enter_closes_polygon_only_in_draw_mode() {
    let in_draw = collect_with_key_event(
        key_event(egui::Key::Enter, egui::Modifiers::default()),
        EditMode::Draw,
    );
    let in_edit = collect_with_key_event(
        key_event(egui::Key::Enter, egui::Modifiers::default()),
        EditMode::Edit,
    );

    assert_eq!(in_draw, vec![AppIntent::ClosePolygonRequested]);
    assert!(in_edit.is_empty());
}

#[test]
fn test_ctrl_shift_g_emits_ungroup() {
    let events = collect_with_key_event(
        key_event(egui::Key::G, egui::Modifiers::COMMAND | egui::Modifiers::SHIFT),
        EditMode::Edit,
    );

    assert_eq!(events, vec![AppIntent::UngroupSelectionRequested]);
}

#[test]
fn test_focused_text_field_keeps_ctrl_z() {
    let events = collect_with_focus(
        key_event(egui::Key::Z, egui::Modifiers::COMMAND),
        EditMode::Edit,
        true,
    );

    assert!(events.is_empty());
}
