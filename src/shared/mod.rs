//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält reine Kurven- und Winkel-Geometrie sowie Typen, die zwischen
//! `app` und `ui` geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod angle_geometry;
pub mod curve_geometry;
pub mod options;
mod render_scene;

pub use angle_geometry::{angle_fan, angle_label_text, lerp_angle, AngleFan};
pub use curve_geometry::{
    approx_quadratic_length, edge_label_anchor, edge_label_text, quadratic_bezier_point,
    sample_quadratic, visible_ranges,
};
pub use options::EditorOptions;
pub use render_scene::{
    RenderScene, SceneAngleFan, SceneEdgeCurve, SceneLabel, ScenePolygon, SceneSegment,
    SceneText,
};
