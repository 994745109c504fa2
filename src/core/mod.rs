//! Core-Domänentypen: Ecken, Polygone, Texte, Gruppen, Dokument, Kamera, Hit-Tests.

pub mod camera;
pub mod document;
pub mod error;
pub mod group;
/// Polygon-Modell
///
/// - Polygon: geordnete Ecken, offen oder geschlossen
/// - PolygonRef: abgeschlossenes Polygon oder das Polygon in Arbeit
/// - PolygonPose: Lage-Snapshot für Drags
pub mod polygon;
pub mod property;
pub mod text;
pub mod vertex;

pub use camera::{snap_to_grid, Camera2D};
pub use document::Document;
pub use error::EditError;
pub use group::{Group, GroupId};
pub use hit_test::{
    hit_test, point_in_polygon, scale_handle, topmost_polygon_at, topmost_text_at, Hit,
    HitTestParams, ScaleHandle,
};
pub use polygon::{default_control_point, Polygon, PolygonPose, PolygonRef};
pub use property::{AnglePropertyChange, EdgePropertyChange, TextPropertyChange};
pub use text::{ApproxTextMeasure, BoundingBox, TextMeasure, TextObject};
pub use vertex::{AngleProperty, Color, EdgeProperty, Vertex, COLOR_BLACK};
