//! UI-Komponenten: Toolbar, Eigenschaften-Panel, Statusleiste, Canvas-Input und -Painter.

mod canvas;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Alle Komponenten lesen den `AppState` nur und liefern `AppIntent`s zurück.
/// Keyboard-Shortcuts und der Canvas-Painter liegen in eigenen Dateien.
pub mod properties;
pub mod status;
mod text_measure;
pub mod toolbar;

pub use canvas::paint_scene;
pub use input::InputState;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
pub use text_measure::EguiTextMeasure;
pub use toolbar::render_toolbar;

use crate::core::Color;

/// Wandelt eine RGBA-Farbe (0.0–1.0) in eine egui-Farbe um.
pub(crate) fn color32(color: Color) -> egui::Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        channel(color[3]),
    )
}
