//! Winkelfächer an einer Polygon-Ecke.
//!
//! Winkel im Bogenmaß, gemessen mit `atan2` im Modellraum (y nach unten).

use glam::Vec2;
use std::f32::consts::{PI, TAU};

/// Zusätzlicher Abstand des Winkel-Labels jenseits des Fächerradius.
pub const ANGLE_LABEL_DISTANCE: f32 = 10.0;

/// Normalisiert eine Winkeldifferenz auf [−π, π].
fn wrap_diff(mut diff: f32) -> f32 {
    while diff < -PI {
        diff += TAU;
    }
    while diff > PI {
        diff -= TAU;
    }
    diff
}

/// Interpoliert zwischen zwei Winkeln auf dem kürzeren Weg um den Kreis.
pub fn lerp_angle(a: f32, b: f32, t: f32) -> f32 {
    a + wrap_diff(b - a) * t
}

/// Geometrie des Winkelfächers an einer Ecke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleFan {
    /// Richtung der (interpolierten) Winkelhalbierenden
    pub bisector: f32,
    /// Halber Öffnungswinkel des gezeichneten Fächers
    pub half_angle: f32,
    /// Innenwinkel zwischen Vorgänger- und Nachfolger-Richtung (0..=π)
    pub interior_angle: f32,
}

impl AngleFan {
    /// Start-Winkel des Fächerbogens
    pub fn start_angle(&self) -> f32 {
        self.bisector - self.half_angle
    }

    /// End-Winkel des Fächerbogens
    pub fn end_angle(&self) -> f32 {
        self.bisector + self.half_angle
    }

    /// Gesamter Öffnungswinkel des Fächers
    pub fn sweep(&self) -> f32 {
        2.0 * self.half_angle
    }

    /// Innenwinkel in Grad
    pub fn interior_degrees(&self) -> f32 {
        self.interior_angle.to_degrees()
    }

    /// Label-Anker ohne Benutzer-Versatz: auf der Halbierenden bei `radius + 10`.
    pub fn label_anchor(&self, vertex: Vec2, radius: f32) -> Vec2 {
        vertex + Vec2::from_angle(self.bisector) * (radius + ANGLE_LABEL_DISTANCE)
    }

    /// Umriss des Fächers als geschlossene Punktfolge (Ecke, Bogen).
    pub fn outline(&self, vertex: Vec2, radius: f32, segments: usize) -> Vec<Vec2> {
        let segments = segments.max(1);
        let start = self.start_angle();
        let step = self.sweep() / segments as f32;
        std::iter::once(vertex)
            .chain((0..=segments).map(|i| {
                vertex + Vec2::from_angle(start + step * i as f32) * radius
            }))
            .collect()
    }
}

/// Berechnet den Fächer an `vertex` zwischen `prev` und `next`.
///
/// Die innere Halbierende ist `atan2` der summierten Einheitsvektoren,
/// die äußere liegt um π gedreht. `fan_position` interpoliert Richtung
/// (kürzester Weg) und Öffnung zwischen innen (0.0) und außen (1.0).
pub fn angle_fan(prev: Vec2, vertex: Vec2, next: Vec2, fan_position: f32) -> AngleFan {
    let to_prev = prev - vertex;
    let to_next = next - vertex;
    let angle_prev = to_prev.y.atan2(to_prev.x);
    let angle_next = to_next.y.atan2(to_next.x);
    let interior_angle = wrap_diff(angle_next - angle_prev).abs();

    let internal_center = (angle_prev.sin() + angle_next.sin())
        .atan2(angle_prev.cos() + angle_next.cos());
    let external_center = (internal_center + PI) % TAU;
    let internal_half = interior_angle / 2.0;
    let external_half = (TAU - interior_angle) / 2.0;

    AngleFan {
        bisector: lerp_angle(internal_center, external_center, fan_position),
        half_angle: internal_half * (1.0 - fan_position) + external_half * fan_position,
        interior_angle,
    }
}

/// Label-Text des Winkels: Override (wenn nicht leer) oder Grad mit einer Nachkommastelle.
pub fn angle_label_text(label_override: &str, degrees: f32) -> String {
    if label_override.trim().is_empty() {
        format!("{degrees:.1}°")
    } else {
        label_override.to_string()
    }
}
