//! Freie Textobjekte und deren Bounding-Box.

use super::{Color, GroupId};
use glam::Vec2;

/// Misst die Breite eines Textes bei gegebener Schriftgröße.
///
/// Der Hit-Test braucht nur die Breite; die Höhe ist die deklarierte Schriftgröße.
pub trait TextMeasure {
    /// Breite von `content` in Modelleinheiten.
    fn text_width(&self, content: &str, font_size: f32) -> f32;
}

/// Näherung ohne Font-Backend: feste Zeichenbreite relativ zur Schriftgröße.
#[derive(Debug, Clone, Copy)]
pub struct ApproxTextMeasure {
    /// Mittlere Zeichenbreite als Anteil der Schriftgröße
    pub char_width_factor: f32,
}

impl Default for ApproxTextMeasure {
    fn default() -> Self {
        Self {
            char_width_factor: 0.6,
        }
    }
}

impl TextMeasure for ApproxTextMeasure {
    fn text_width(&self, content: &str, font_size: f32) -> f32 {
        content.chars().count() as f32 * font_size * self.char_width_factor
    }
}

/// Achsenparalleles Rechteck (min/max-Ecke)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl BoundingBox {
    /// Rechteck der Größe `size`, zentriert auf `center`.
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Punkt liegt innerhalb (Ränder eingeschlossen).
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Frei platzierter Text
#[derive(Debug, Clone, PartialEq)]
pub struct TextObject {
    /// Mittelpunkt des Textes
    pub position: Vec2,
    /// Textinhalt
    pub content: String,
    /// Schriftgröße (zugleich Höhe der Bounding-Box)
    pub font_size: f32,
    /// Textfarbe
    pub color: Color,
    /// Zugehörige Gruppe (None = ungruppiert)
    pub group_id: Option<GroupId>,
}

impl TextObject {
    /// Erstellt einen ungruppierten Text.
    pub fn new(position: Vec2, content: impl Into<String>, font_size: f32, color: Color) -> Self {
        Self {
            position,
            content: content.into(),
            font_size,
            color,
            group_id: None,
        }
    }

    /// Bounding-Box: gemessene Breite × Schriftgröße, zentriert auf `position`.
    pub fn bounding_box(&self, measure: &dyn TextMeasure) -> BoundingBox {
        let width = measure.text_width(&self.content, self.font_size);
        BoundingBox::from_center_size(self.position, Vec2::new(width, self.font_size))
    }
}
