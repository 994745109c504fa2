//! Textbreiten-Messung über die Fonts des egui-Kontexts.

use crate::core::TextMeasure;

/// Misst Texte mit derselben Schrift, mit der der Canvas-Painter sie zeichnet.
///
/// Erst nach dem ersten `Context::run` nutzbar (vorher hat egui keine Fonts).
pub struct EguiTextMeasure {
    ctx: egui::Context,
}

impl EguiTextMeasure {
    /// Erstellt die Messung für den Kontext des Editor-Fensters.
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl TextMeasure for EguiTextMeasure {
    fn text_width(&self, content: &str, font_size: f32) -> f32 {
        if content.is_empty() || font_size <= 0.0 {
            return 0.0;
        }
        let galley = self.ctx.fonts_mut(|fonts| {
            fonts.layout(
                content.to_owned(),
                egui::FontId::proportional(font_size),
                egui::Color32::PLACEHOLDER,
                f32::INFINITY,
            )
        });
        galley.rect.width()
    }
}
