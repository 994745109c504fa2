//! Render-Szene als expliziter Übergabevertrag zwischen App und UI-Painter.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.
//! Alle Koordinaten im Modellraum; der Painter rechnet mit `camera` um.

use super::options::EditorOptions;
use crate::core::{BoundingBox, Camera2D, Color, PolygonRef, ScaleHandle};
use glam::Vec2;

/// Text an einer Position (zentriert gezeichnet)
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLabel {
    pub position: Vec2,
    pub text: String,
    pub font_size: f32,
    pub color: Color,
}

/// Gerade Kante zwischen zwei Ecken
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneSegment {
    pub start: Vec2,
    pub end: Vec2,
    pub color: Color,
}

/// Längen-Bezier einer Kante: sichtbare Kurvenstücke plus Label
#[derive(Debug, Clone, PartialEq)]
pub struct SceneEdgeCurve {
    /// Polylines der sichtbaren Abschnitte (Lücke für das Label ausgespart)
    pub pieces: Vec<Vec<Vec2>>,
    pub color: Color,
    pub label: SceneLabel,
}

/// Winkelfächer an einer Ecke
#[derive(Debug, Clone, PartialEq)]
pub struct SceneAngleFan {
    /// Ecke, dann Bogenpunkte
    pub outline: Vec<Vec2>,
    pub label: SceneLabel,
}

/// Alles, was zu einem Polygon gezeichnet wird
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePolygon {
    pub polygon: PolygonRef,
    pub segments: Vec<SceneSegment>,
    pub curves: Vec<SceneEdgeCurve>,
    pub fans: Vec<SceneAngleFan>,
    /// Ecken-Marker (nur im Edit-Modus gefüllt)
    pub vertices: Vec<Vec2>,
    /// Kontrollpunkt-Marker (nur im Edit-Modus gefüllt)
    pub edge_controls: Vec<Vec2>,
    pub selected: bool,
}

/// Freier Text samt Bounding-Box
#[derive(Debug, Clone, PartialEq)]
pub struct SceneText {
    pub label: SceneLabel,
    pub bounds: BoundingBox,
    pub selected: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Abgeschlossene Polygone, dann das Polygon in Arbeit
    pub polygons: Vec<ScenePolygon>,
    /// Freie Texte in Erstellungsreihenfolge
    pub texts: Vec<SceneText>,
    /// Gummiband im Draw-Modus: letzte Ecke → Zeiger
    pub rubber_band: Option<(Vec2, Vec2)>,
    /// Skalier-Griff des selektierten Polygons
    pub scale_handle: Option<ScaleHandle>,
    /// Raster anzeigen
    pub show_grid: bool,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob überhaupt etwas zu zeichnen ist.
    pub fn has_content(&self) -> bool {
        self.polygons.iter().any(|p| !p.segments.is_empty() || !p.vertices.is_empty())
            || !self.texts.is_empty()
            || self.rubber_band.is_some()
    }
}
