//! Einzelne Eigenschafts-Änderungen als Werte (vom Eigenschaften-Panel erzeugt).

use super::{AngleProperty, Color, EdgeProperty, TextObject};
use glam::Vec2;

/// Änderung genau eines Feldes von `EdgeProperty`
#[derive(Debug, Clone, PartialEq)]
pub enum EdgePropertyChange {
    ShowEdgeLength(bool),
    Curvature(f32),
    SegmentColor(Color),
    BezierColor(Color),
    LabelColor(Color),
    LabelOverride(String),
    /// Wird auf [0, 1] begrenzt
    BezierGap(f32),
    LabelOffset(Vec2),
    LabelFontSize(f32),
}

impl EdgePropertyChange {
    /// Schreibt die Änderung in `edge`.
    pub fn apply(self, edge: &mut EdgeProperty) {
        match self {
            Self::ShowEdgeLength(v) => edge.show_edge_length = v,
            Self::Curvature(v) => edge.curvature = v,
            Self::SegmentColor(c) => edge.segment_color = c,
            Self::BezierColor(c) => edge.bezier_color = c,
            Self::LabelColor(c) => edge.label_color = c,
            Self::LabelOverride(s) => edge.label_override = s,
            Self::BezierGap(v) => edge.bezier_gap = v.clamp(0.0, 1.0),
            Self::LabelOffset(o) => {
                edge.label_offset_x = o.x;
                edge.label_offset_y = o.y;
            }
            Self::LabelFontSize(v) => edge.label_font_size = v,
        }
    }
}

/// Änderung genau eines Feldes von `AngleProperty`
#[derive(Debug, Clone, PartialEq)]
pub enum AnglePropertyChange {
    ShowAngle(bool),
    Radius(f32),
    LabelOverride(String),
    /// Wird auf [0, 1] begrenzt
    FanPosition(f32),
    LabelOffset(Vec2),
    LabelFontSize(f32),
}

impl AnglePropertyChange {
    /// Schreibt die Änderung in `angle`.
    pub fn apply(self, angle: &mut AngleProperty) {
        match self {
            Self::ShowAngle(v) => angle.show_angle = v,
            Self::Radius(v) => angle.radius = v,
            Self::LabelOverride(s) => angle.label_override = s,
            Self::FanPosition(v) => angle.fan_position = v.clamp(0.0, 1.0),
            Self::LabelOffset(o) => {
                angle.label_offset_x = o.x;
                angle.label_offset_y = o.y;
            }
            Self::LabelFontSize(v) => angle.label_font_size = v,
        }
    }
}

/// Änderung genau eines Feldes eines `TextObject`
#[derive(Debug, Clone, PartialEq)]
pub enum TextPropertyChange {
    Content(String),
    Position(Vec2),
    FontSize(f32),
    Color(Color),
}

impl TextPropertyChange {
    /// Schreibt die Änderung in `text`. Die Gruppenzugehörigkeit bleibt unberührt.
    pub fn apply(self, text: &mut TextObject) {
        match self {
            Self::Content(s) => text.content = s,
            Self::Position(p) => text.position = p,
            Self::FontSize(v) => text.font_size = v,
            Self::Color(c) => text.color = c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_and_fan_position_are_clamped() {
        let mut edge = EdgeProperty::default();
        EdgePropertyChange::BezierGap(1.7).apply(&mut edge);
        assert_eq!(edge.bezier_gap, 1.0);

        let mut angle = AngleProperty::default();
        AnglePropertyChange::FanPosition(-0.5).apply(&mut angle);
        assert_eq!(angle.fan_position, 0.0);
    }

    #[test]
    fn label_offset_sets_both_axes() {
        let mut edge = EdgeProperty::default();
        EdgePropertyChange::LabelOffset(Vec2::new(4.0, -2.0)).apply(&mut edge);
        assert_eq!((edge.label_offset_x, edge.label_offset_y), (4.0, -2.0));
    }
}
