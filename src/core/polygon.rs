//! Polygon-Modell und abgeleitete Geometrie (Kanten, Kontrollpunkte, Winkel).

use super::{GroupId, Vertex};
use glam::Vec2;

/// Verweis auf ein Polygon: abgeschlossen (Index in `polygons`) oder in Arbeit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PolygonRef {
    /// Abgeschlossenes Polygon an Index
    Completed(usize),
    /// Das gerade gezeichnete Polygon
    InProgress,
}

/// Lage aller Ecken und Kontrollpunkte eines Polygons (für Drag-Snapshots).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolygonPose {
    /// Eckpositionen in Reihenfolge
    pub positions: Vec<Vec2>,
    /// Kontrollpunkt-Overrides je Ecke
    pub edge_controls: Vec<Option<Vec2>>,
}

/// Polygon aus geordneten Ecken. Die Reihenfolge definiert Kanten und Winkel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    /// Ecken in Zeichenreihenfolge
    pub vertices: Vec<Vertex>,
    /// Geschlossen: letzte Ecke ist mit der ersten verbunden
    pub is_closed: bool,
    /// Zugehörige Gruppe (None = ungruppiert)
    pub group_id: Option<GroupId>,
}

impl Polygon {
    /// Erstellt ein leeres, offenes Polygon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl der Ecken
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// `true`, wenn das Polygon keine Ecken hat.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Anzahl der Kanten: N wenn geschlossen, sonst max(N−1, 0).
    pub fn edge_count(&self) -> usize {
        let n = self.vertices.len();
        if self.is_closed {
            n
        } else {
            n.saturating_sub(1)
        }
    }

    /// Start- und Endpunkt der Kante `i` (None außerhalb von `edge_count`).
    pub fn edge_endpoints(&self, i: usize) -> Option<(Vec2, Vec2)> {
        if i >= self.edge_count() {
            return None;
        }
        let n = self.vertices.len();
        Some((self.vertices[i].position, self.vertices[(i + 1) % n].position))
    }

    /// Kontrollpunkt der Kante `i`.
    ///
    /// Ein gespeicherter Override gewinnt. Sonst: Kantenmitte, um `curvature`
    /// senkrecht versetzt. Die Normale ist immer (−dy, dx)/|d|, damit die
    /// Kurve nach Undo/Redo in dieselbe Richtung ausbeult.
    pub fn edge_control_point(&self, i: usize) -> Option<Vec2> {
        let (start, end) = self.edge_endpoints(i)?;
        let vertex = &self.vertices[i];
        if let Some(control) = vertex.edge_control {
            return Some(control);
        }
        Some(default_control_point(start, end, vertex.edge.curvature))
    }

    /// Indizes der Ecken mit definiertem Winkel: 0..N geschlossen, 1..N−1 offen.
    pub fn angle_indices(&self) -> std::ops::Range<usize> {
        let n = self.vertices.len();
        if self.is_closed {
            0..n
        } else {
            1..n.saturating_sub(1).max(1)
        }
    }

    /// Vorgänger, Ecke und Nachfolger für den Winkel an Index `i`.
    pub fn angle_triple(&self, i: usize) -> Option<(Vec2, Vec2, Vec2)> {
        if !self.angle_indices().contains(&i) {
            return None;
        }
        let n = self.vertices.len();
        let prev = self.vertices[(i + n - 1) % n].position;
        let next = self.vertices[(i + 1) % n].position;
        Some((prev, self.vertices[i].position, next))
    }

    /// Schwerpunkt als Mittelwert der Ecken.
    pub fn centroid(&self) -> Option<Vec2> {
        if self.vertices.is_empty() {
            return None;
        }
        let sum: Vec2 = self.vertices.iter().map(|v| v.position).sum();
        Some(sum / self.vertices.len() as f32)
    }

    /// Komponentenweises Maximum aller Ecken (Anker des Skalier-Griffs).
    pub fn max_corner(&self) -> Option<Vec2> {
        self.vertices
            .iter()
            .map(|v| v.position)
            .reduce(|acc, p| acc.max(p))
    }

    /// Eckpositionen als Liste (für Point-in-Polygon).
    pub fn positions(&self) -> Vec<Vec2> {
        self.vertices.iter().map(|v| v.position).collect()
    }

    /// Momentaufnahme aller Positionen und Kontrollpunkte.
    pub fn pose(&self) -> PolygonPose {
        PolygonPose {
            positions: self.positions(),
            edge_controls: self.vertices.iter().map(|v| v.edge_control).collect(),
        }
    }

    /// Setzt Positionen und Kontrollpunkte aus `pose`, transformiert durch `map`.
    ///
    /// Ecken ohne Eintrag in `pose` bleiben unverändert.
    pub fn apply_pose(&mut self, pose: &PolygonPose, map: impl Fn(Vec2) -> Vec2) {
        for (i, vertex) in self.vertices.iter_mut().enumerate() {
            if let Some(position) = pose.positions.get(i) {
                vertex.position = map(*position);
            }
            if let Some(Some(control)) = pose.edge_controls.get(i) {
                vertex.edge_control = Some(map(*control));
            }
        }
    }
}

/// Standard-Kontrollpunkt einer Kante ohne Override.
///
/// Bei Kantenlänge 0 gibt es keine Normale; dann liegt der Punkt auf der Mitte.
pub fn default_control_point(start: Vec2, end: Vec2, curvature: f32) -> Vec2 {
    let mid = (start + end) * 0.5;
    let d = end - start;
    let length = d.length();
    if length <= f32::EPSILON {
        return mid;
    }
    mid + Vec2::new(-d.y, d.x) / length * curvature
}
