//! Zentrale Konfiguration des Shape-Annotation-Editors.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{AngleProperty, Color, EdgeProperty, HitTestParams, COLOR_BLACK};
use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.5;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 3.0;
/// Zoom-Schritt pro Mausrad-Raste.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Hit-Test ────────────────────────────────────────────────────────

/// Trefferradius für Ecken und Kontrollpunkte (zoom-normalisiert).
pub const HIT_RADIUS: f32 = 8.0;
/// Kantenlänge des Skalier-Griffs.
pub const SCALE_HANDLE_SIZE: f32 = 10.0;

// ── Raster ──────────────────────────────────────────────────────────

/// Rasterweite für Anzeige und Einrasten.
pub const GRID_SIZE: f32 = 20.0;

// ── Kurven ──────────────────────────────────────────────────────────

/// Abschnitte für Längen-Näherung und Kurven-Sampling.
pub const CURVE_SEGMENTS: usize = crate::shared::curve_geometry::CURVE_SEGMENTS;

// ── Texte ───────────────────────────────────────────────────────────

/// Inhalt neu platzierter Texte.
pub const TEXT_DEFAULT_CONTENT: &str = "Text";
/// Schriftgröße neu platzierter Texte.
pub const TEXT_DEFAULT_FONT_SIZE: f32 = 16.0;
/// Zeichenbreite relativ zur Schriftgröße für die Text-Bounding-Box.
pub const TEXT_CHAR_WIDTH_FACTOR: f32 = 0.6;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl gespeicherter Undo-Schritte.
pub const HISTORY_MAX_DEPTH: usize = 200;

// ── Darstellung ─────────────────────────────────────────────────────

/// Füllfarbe der Ecken (RGBA: Gelb).
pub const VERTEX_COLOR: Color = [1.0, 1.0, 0.0, 1.0];
/// Füllfarbe der Kanten-Kontrollpunkte (RGBA: Blau).
pub const EDGE_CONTROL_COLOR: Color = [0.0, 0.0, 1.0, 1.0];
/// Füllfarbe der Winkelfächer (RGBA: halbtransparentes Rot).
pub const ANGLE_FAN_FILL_COLOR: Color = [1.0, 0.0, 0.0, 0.3];
/// Rand- und Labelfarbe der Winkelfächer (RGBA: Rot).
pub const ANGLE_FAN_STROKE_COLOR: Color = [1.0, 0.0, 0.0, 1.0];
/// Hervorhebung selektierter Objekte (RGBA: Orange).
pub const SELECTION_COLOR: Color = [1.0, 0.55, 0.0, 1.0];
/// Farbe des Skalier-Griffs (RGBA: Grün).
pub const SCALE_HANDLE_COLOR: Color = [0.0, 0.7, 0.2, 1.0];
/// Farbe der Rasterlinien (RGBA: Hellgrau).
pub const GRID_COLOR: Color = [0.93, 0.93, 0.93, 1.0];

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `shape_annotation_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor
    pub camera_zoom_max: f32,
    /// Zoom-Schritt pro Mausrad-Raste
    pub camera_scroll_zoom_step: f32,

    // ── Hit-Test ────────────────────────────────────────────────
    /// Trefferradius für Ecken und Kontrollpunkte
    pub hit_radius: f32,
    /// Kantenlänge des Skalier-Griffs
    pub scale_handle_size: f32,

    // ── Raster ──────────────────────────────────────────────────
    /// Rasterweite
    pub grid_size: f32,

    // ── Kurven ──────────────────────────────────────────────────
    /// Abschnitte für Längen-Näherung und Kurven-Sampling
    #[serde(default = "default_curve_segments")]
    pub curve_segments: usize,

    // ── Neue Texte ──────────────────────────────────────────────
    /// Inhalt neu platzierter Texte
    pub text_default_content: String,
    /// Schriftgröße neu platzierter Texte
    pub text_default_font_size: f32,
    /// Farbe neu platzierter Texte
    pub text_default_color: Color,
    /// Zeichenbreite relativ zur Schriftgröße (Text-Bounding-Box)
    #[serde(default = "default_text_char_width_factor")]
    pub text_char_width_factor: f32,

    // ── History ─────────────────────────────────────────────────
    /// Maximale Anzahl Undo-Schritte
    #[serde(default = "default_history_max_depth")]
    pub history_max_depth: usize,

    // ── Darstellung ─────────────────────────────────────────────
    /// Füllfarbe der Ecken
    pub vertex_color: Color,
    /// Füllfarbe der Kanten-Kontrollpunkte
    pub edge_control_color: Color,
    /// Füllfarbe der Winkelfächer
    pub angle_fan_fill_color: Color,
    /// Rand- und Labelfarbe der Winkelfächer
    pub angle_fan_stroke_color: Color,
    /// Hervorhebung selektierter Objekte
    pub selection_color: Color,
    /// Farbe des Skalier-Griffs
    pub scale_handle_color: Color,
    /// Farbe der Rasterlinien
    pub grid_color: Color,

    // ── Standard-Eigenschaften neuer Ecken (TOML-Tabellen) ─────
    /// Kanten-Eigenschaften neuer Ecken
    #[serde(default)]
    pub default_edge: EdgeProperty,
    /// Winkel-Eigenschaften neuer Ecken
    #[serde(default)]
    pub default_angle: AngleProperty,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,

            hit_radius: HIT_RADIUS,
            scale_handle_size: SCALE_HANDLE_SIZE,

            grid_size: GRID_SIZE,
            curve_segments: CURVE_SEGMENTS,

            text_default_content: TEXT_DEFAULT_CONTENT.to_string(),
            text_default_font_size: TEXT_DEFAULT_FONT_SIZE,
            text_default_color: COLOR_BLACK,
            text_char_width_factor: TEXT_CHAR_WIDTH_FACTOR,

            history_max_depth: HISTORY_MAX_DEPTH,

            vertex_color: VERTEX_COLOR,
            edge_control_color: EDGE_CONTROL_COLOR,
            angle_fan_fill_color: ANGLE_FAN_FILL_COLOR,
            angle_fan_stroke_color: ANGLE_FAN_STROKE_COLOR,
            selection_color: SELECTION_COLOR,
            scale_handle_color: SCALE_HANDLE_COLOR,
            grid_color: GRID_COLOR,

            default_edge: EdgeProperty::default(),
            default_angle: AngleProperty::default(),
        }
    }
}

/// Serde-Default für `curve_segments` (ältere TOML-Dateien).
fn default_curve_segments() -> usize {
    CURVE_SEGMENTS
}

/// Serde-Default für `text_char_width_factor`.
fn default_text_char_width_factor() -> f32 {
    TEXT_CHAR_WIDTH_FACTOR
}

/// Serde-Default für `history_max_depth`.
fn default_history_max_depth() -> usize {
    HISTORY_MAX_DEPTH
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("shape_annotation_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("shape_annotation_editor.toml")
    }

    /// Parameter für `core::hit_test`.
    pub fn hit_test_params(&self) -> HitTestParams {
        HitTestParams {
            hit_radius: self.hit_radius,
            handle_size: self.scale_handle_size,
        }
    }
}
