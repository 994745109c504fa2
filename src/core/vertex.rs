//! Polygon-Ecke mit Kanten- und Winkel-Eigenschaften.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// RGBA-Farbe (0.0–1.0 je Kanal)
pub type Color = [f32; 4];

/// Schwarz, Standardfarbe aller Linien und Labels.
pub const COLOR_BLACK: Color = [0.0, 0.0, 0.0, 1.0];

/// Darstellungs-Eigenschaften der Kante, die an dieser Ecke beginnt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeProperty {
    /// Längen-Bezier samt Label anzeigen
    pub show_edge_length: bool,
    /// Abstand des Standard-Kontrollpunkts von der Kantenmitte (Pixel)
    pub curvature: f32,
    /// Farbe der geraden Kante
    pub segment_color: Color,
    /// Farbe der Längen-Bezier
    pub bezier_color: Color,
    /// Farbe des Längen-Labels
    pub label_color: Color,
    /// Ersetzt den berechneten Längentext, wenn nicht leer
    pub label_override: String,
    /// Anteil der Kurve, der für das Label ausgespart wird (0.0–1.0)
    pub bezier_gap: f32,
    /// Manueller Label-Versatz X
    pub label_offset_x: f32,
    /// Manueller Label-Versatz Y
    pub label_offset_y: f32,
    /// Schriftgröße des Labels
    pub label_font_size: f32,
}

impl Default for EdgeProperty {
    fn default() -> Self {
        Self {
            show_edge_length: true,
            curvature: 30.0,
            segment_color: COLOR_BLACK,
            bezier_color: COLOR_BLACK,
            label_color: COLOR_BLACK,
            label_override: String::new(),
            bezier_gap: 0.1,
            label_offset_x: 0.0,
            label_offset_y: 0.0,
            label_font_size: 12.0,
        }
    }
}

/// Darstellungs-Eigenschaften des Winkelfächers an dieser Ecke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AngleProperty {
    /// Winkelfächer anzeigen
    pub show_angle: bool,
    /// Radius des Fächers
    pub radius: f32,
    /// Ersetzt den berechneten Gradtext, wenn nicht leer
    pub label_override: String,
    /// 0.0 = Innenwinkel, 1.0 = Außenwinkel
    pub fan_position: f32,
    /// Manueller Label-Versatz X
    pub label_offset_x: f32,
    /// Manueller Label-Versatz Y
    pub label_offset_y: f32,
    /// Schriftgröße des Labels
    pub label_font_size: f32,
}

impl Default for AngleProperty {
    fn default() -> Self {
        Self {
            show_angle: true,
            radius: 30.0,
            label_override: String::new(),
            fan_position: 0.0,
            label_offset_x: 0.0,
            label_offset_y: 0.0,
            label_font_size: 12.0,
        }
    }
}

/// Einzelne Ecke eines Polygons
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Position im Modellraum
    pub position: Vec2,
    /// Eigenschaften der ausgehenden Kante (Ecke i → i+1)
    pub edge: EdgeProperty,
    /// Eigenschaften des Winkels an dieser Ecke
    pub angle: AngleProperty,
    /// Gezogener Kontrollpunkt; überschreibt den berechneten Standard dauerhaft
    pub edge_control: Option<Vec2>,
}

impl Vertex {
    /// Erstellt eine Ecke mit Standard-Eigenschaften.
    pub fn new(position: Vec2) -> Self {
        Self::with_properties(position, EdgeProperty::default(), AngleProperty::default())
    }

    /// Erstellt eine Ecke mit vorgegebenen Eigenschaften (z.B. aus `EditorOptions`).
    pub fn with_properties(position: Vec2, edge: EdgeProperty, angle: AngleProperty) -> Self {
        Self {
            position,
            edge,
            angle,
            edge_control: None,
        }
    }

    /// Verschiebt Position und (falls gesetzt) den Kontrollpunkt gemeinsam.
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
        if let Some(control) = self.edge_control.as_mut() {
            *control += delta;
        }
    }
}
