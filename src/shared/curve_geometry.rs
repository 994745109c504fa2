//! Reine Geometrie-Funktionen für quadratische Bezier-Kanten.
//!
//! Layer-neutral: wird vom Hit-Test-Umfeld, von `app::render_scene` und
//! vom Painter gleichermaßen genutzt.

use glam::Vec2;

/// Standard-Auflösung für Längen-Näherung und Polyline-Sampling.
pub const CURVE_SEGMENTS: usize = 20;

/// Abstand des Kanten-Labels entlang der Kurvennormale.
pub const EDGE_LABEL_NORMAL_OFFSET: f32 = 5.0;
/// Vertikale Verschiebung des Kanten-Labels (negativ = nach oben).
pub const EDGE_LABEL_VERTICAL_SHIFT: f32 = -10.0;

/// Punkt auf der quadratischen Bezier-Kurve (start, control, end) bei t ∈ [0, 1].
pub fn quadratic_bezier_point(start: Vec2, control: Vec2, end: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    start * (u * u) + control * (2.0 * u * t) + end * (t * t)
}

/// Tastet das Kurvenstück [t0, t1] mit `segments` Abschnitten ab (inkl. beider Enden).
pub fn sample_quadratic(
    start: Vec2,
    control: Vec2,
    end: Vec2,
    t0: f32,
    t1: f32,
    segments: usize,
) -> Vec<Vec2> {
    let segments = segments.max(1);
    let dt = (t1 - t0) / segments as f32;
    (0..=segments)
        .map(|i| quadratic_bezier_point(start, control, end, t0 + dt * i as f32))
        .collect()
}

/// Näherungsweise Bogenlänge: Summe der Sehnen über `segments` gleich große t-Schritte.
pub fn approx_quadratic_length(start: Vec2, control: Vec2, end: Vec2, segments: usize) -> f32 {
    sample_quadratic(start, control, end, 0.0, 1.0, segments)
        .windows(2)
        .map(|w| w[0].distance(w[1]))
        .sum()
}

/// Sichtbare t-Bereiche der Längen-Bezier bei gegebener Lücke.
///
/// - `gap >= 1`: nichts
/// - `gap <= 0`: die ganze Kurve
/// - sonst: [0, 0.5 − gap/2] und [0.5 + gap/2, 1]
pub fn visible_ranges(gap: f32) -> Vec<(f32, f32)> {
    if gap >= 1.0 {
        Vec::new()
    } else if gap <= 0.0 {
        vec![(0.0, 1.0)]
    } else {
        vec![(0.0, 0.5 - gap / 2.0), (0.5 + gap / 2.0, 1.0)]
    }
}

/// Ankerpunkt des Längen-Labels ohne Benutzer-Versatz.
///
/// Kurvenmitte, um `EDGE_LABEL_NORMAL_OFFSET` entlang der Normale der
/// zwischen t=0.48 und t=0.52 genäherten Tangente versetzt, dann vertikal
/// um `EDGE_LABEL_VERTICAL_SHIFT` verschoben.
pub fn edge_label_anchor(start: Vec2, control: Vec2, end: Vec2) -> Vec2 {
    let mid = quadratic_bezier_point(start, control, end, 0.5);
    let tangent = quadratic_bezier_point(start, control, end, 0.52)
        - quadratic_bezier_point(start, control, end, 0.48);
    let normal = Vec2::new(-tangent.y, tangent.x).normalize_or_zero();
    mid + normal * EDGE_LABEL_NORMAL_OFFSET + Vec2::new(0.0, EDGE_LABEL_VERTICAL_SHIFT)
}

/// Label-Text der Kante: Override (wenn nicht leer) oder Länge mit einer Nachkommastelle.
pub fn edge_label_text(label_override: &str, length: f32) -> String {
    if label_override.trim().is_empty() {
        format!("{length:.1}")
    } else {
        label_override.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn bezier_endpoints_and_midpoint() {
        let (s, c, e) = (Vec2::ZERO, Vec2::new(5.0, 10.0), Vec2::new(10.0, 0.0));
        assert_eq!(quadratic_bezier_point(s, c, e, 0.0), s);
        assert_eq!(quadratic_bezier_point(s, c, e, 1.0), e);
        let mid = quadratic_bezier_point(s, c, e, 0.5);
        assert_relative_eq!(mid.x, 5.0);
        assert_relative_eq!(mid.y, 5.0);
    }

    #[test]
    fn straight_edge_length_matches_endpoint_distance() {
        let start = Vec2::new(3.0, 4.0);
        let end = Vec2::new(33.0, 44.0);
        let control = (start + end) * 0.5;
        let length = approx_quadratic_length(start, control, end, CURVE_SEGMENTS);
        assert_relative_eq!(length, start.distance(end), epsilon = 1e-3);
    }

    #[test]
    fn curved_edge_is_longer_than_chord() {
        let length = approx_quadratic_length(
            Vec2::ZERO,
            Vec2::new(50.0, 30.0),
            Vec2::new(100.0, 0.0),
            CURVE_SEGMENTS,
        );
        assert!(length > 100.0);
    }

    #[test]
    fn gap_ranges() {
        assert!(visible_ranges(1.0).is_empty());
        assert!(visible_ranges(1.5).is_empty());
        assert_eq!(visible_ranges(0.0), vec![(0.0, 1.0)]);
        let ranges = visible_ranges(0.2);
        assert_eq!(ranges.len(), 2);
        assert_relative_eq!(ranges[0].1, 0.4);
        assert_relative_eq!(ranges[1].0, 0.6);
    }

    #[test]
    fn label_anchor_on_horizontal_edge() {
        // Gerade Kante nach rechts: Normale zeigt nach +y
        let anchor = edge_label_anchor(Vec2::ZERO, Vec2::new(5.0, 0.0), Vec2::new(10.0, 0.0));
        assert_relative_eq!(anchor.x, 5.0, epsilon = 1e-4);
        assert_relative_eq!(anchor.y, 5.0 - 10.0, epsilon = 1e-4);
    }

    #[test]
    fn label_text_prefers_override() {
        assert_eq!(edge_label_text("", 12.345), "12.3");
        assert_eq!(edge_label_text("   ", 2.0), "2.0");
        assert_eq!(edge_label_text("a = 5", 2.0), "a = 5");
    }
}
