//! Das Dokument: abgeschlossene Polygone, Polygon in Arbeit, Texte und Gruppen.
//!
//! Alle vier Sammlungen werden gemeinsam mutiert und gemeinsam gesnapshottet,
//! damit Gruppen-Referenzen über Undo/Redo hinweg gültig bleiben.

use super::{EditError, Group, GroupId, Polygon, PolygonRef, TextObject, Vertex};

/// Vollständiger Dokumentzustand
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// Abgeschlossene Polygone in Erstellungsreihenfolge
    pub polygons: Vec<Polygon>,
    /// Polygon in Arbeit (immer offen)
    pub current_polygon: Polygon,
    /// Textobjekte in Erstellungsreihenfolge
    pub texts: Vec<TextObject>,
    /// Gruppen; aufgelöste Gruppen bleiben als `None` stehen
    pub groups: Vec<Option<Group>>,
}

impl Document {
    /// Mindestanzahl an Ecken zum Schließen eines Polygons.
    pub const MIN_CLOSE_VERTICES: usize = 3;

    /// Erstellt ein leeres Dokument.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl der abgeschlossenen Polygone
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Anzahl der Textobjekte
    pub fn text_count(&self) -> usize {
        self.texts.len()
    }

    /// Löst einen `PolygonRef` auf.
    pub fn polygon(&self, target: PolygonRef) -> Option<&Polygon> {
        match target {
            PolygonRef::Completed(index) => self.polygons.get(index),
            PolygonRef::InProgress => Some(&self.current_polygon),
        }
    }

    /// Löst einen `PolygonRef` mutable auf.
    pub fn polygon_mut(&mut self, target: PolygonRef) -> Option<&mut Polygon> {
        match target {
            PolygonRef::Completed(index) => self.polygons.get_mut(index),
            PolygonRef::InProgress => Some(&mut self.current_polygon),
        }
    }

    /// Alle Polygone in Hit-Test-Reihenfolge: abgeschlossene, dann das in Arbeit.
    pub fn polygons_with_refs(&self) -> impl Iterator<Item = (PolygonRef, &Polygon)> {
        self.polygons
            .iter()
            .enumerate()
            .map(|(i, p)| (PolygonRef::Completed(i), p))
            .chain(std::iter::once((
                PolygonRef::InProgress,
                &self.current_polygon,
            )))
    }

    /// Hängt eine Ecke an das Polygon in Arbeit an.
    pub fn push_vertex(&mut self, vertex: Vertex) {
        self.current_polygon.vertices.push(vertex);
    }

    /// Schließt das Polygon in Arbeit und übernimmt es in `polygons`.
    ///
    /// Gibt den neuen Index zurück. Bei weniger als 3 Ecken bleibt alles unverändert.
    pub fn close_current_polygon(&mut self) -> Result<usize, EditError> {
        let count = self.current_polygon.len();
        if count < Self::MIN_CLOSE_VERTICES {
            return Err(EditError::ClosePolygonTooFewVertices { count });
        }
        let mut polygon = std::mem::take(&mut self.current_polygon);
        polygon.is_closed = true;
        self.polygons.push(polygon);
        Ok(self.polygons.len() - 1)
    }

    /// Leert das gesamte Dokument.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Fügt einen Text hinzu und gibt seinen Index zurück.
    pub fn push_text(&mut self, text: TextObject) -> usize {
        self.texts.push(text);
        self.texts.len() - 1
    }

    /// Lebende Gruppe zu `id`
    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id).and_then(Option::as_ref)
    }

    /// Mitgliederzahl einer Gruppe (0 für aufgelöste oder unbekannte IDs).
    pub fn group_member_count(&self, id: GroupId) -> usize {
        self.group(id).map_or(0, Group::member_count)
    }

    /// Lebende Gruppen, zuletzt erstellte zuerst.
    pub fn live_groups_newest_first(&self) -> impl Iterator<Item = (GroupId, &Group)> {
        self.groups
            .iter()
            .enumerate()
            .rev()
            .filter_map(|(id, g)| g.as_ref().map(|g| (id, g)))
    }

    /// Legt eine Gruppe an.
    ///
    /// Voraussetzungen: mindestens 2 Mitglieder, alle Indizes gültig, kein
    /// Mitglied bereits gruppiert. Sonst `None` ohne Änderung.
    pub fn create_group(&mut self, polygons: &[usize], texts: &[usize]) -> Option<GroupId> {
        let group = Group {
            polygons: polygons.iter().copied().collect(),
            texts: texts.iter().copied().collect(),
        };
        if group.member_count() < Group::MIN_MEMBERS {
            return None;
        }
        let polygons_free = group
            .polygons
            .iter()
            .all(|&i| self.polygons.get(i).is_some_and(|p| p.group_id.is_none()));
        let texts_free = group
            .texts
            .iter()
            .all(|&i| self.texts.get(i).is_some_and(|t| t.group_id.is_none()));
        if !polygons_free || !texts_free {
            return None;
        }

        let id = self.groups.len();
        for &i in &group.polygons {
            self.polygons[i].group_id = Some(id);
        }
        for &i in &group.texts {
            self.texts[i].group_id = Some(id);
        }
        self.groups.push(Some(group));
        Some(id)
    }

    /// Löst eine Gruppe auf: Mitglieder werden ungruppiert, der Slot bleibt als `None`.
    pub fn dissolve_group(&mut self, id: GroupId) -> bool {
        let Some(group) = self.groups.get_mut(id).and_then(Option::take) else {
            return false;
        };
        for i in group.polygons {
            if let Some(polygon) = self.polygons.get_mut(i) {
                polygon.group_id = None;
            }
        }
        for i in group.texts {
            if let Some(text) = self.texts.get_mut(i) {
                text.group_id = None;
            }
        }
        true
    }

    /// Entfernt ein abgeschlossenes Polygon gruppenkonsistent.
    ///
    /// Das Polygon verlässt seine Gruppe, höhere Indizes rücken in allen
    /// Gruppen nach, und eine Gruppe unter 2 Mitgliedern wird aufgelöst.
    pub fn remove_polygon(&mut self, index: usize) -> Option<Polygon> {
        if index >= self.polygons.len() {
            return None;
        }
        let removed = self.polygons.remove(index);
        for group in self.groups.iter_mut().flatten() {
            Group::forget_index(&mut group.polygons, index);
        }
        if let Some(id) = removed.group_id {
            self.dissolve_if_undersized(id);
        }
        Some(removed)
    }

    /// Entfernt einen Text gruppenkonsistent (analog zu `remove_polygon`).
    pub fn remove_text(&mut self, index: usize) -> Option<TextObject> {
        if index >= self.texts.len() {
            return None;
        }
        let removed = self.texts.remove(index);
        for group in self.groups.iter_mut().flatten() {
            Group::forget_index(&mut group.texts, index);
        }
        if let Some(id) = removed.group_id {
            self.dissolve_if_undersized(id);
        }
        Some(removed)
    }

    fn dissolve_if_undersized(&mut self, id: GroupId) {
        if self.group(id).is_some_and(|g| g.member_count() < Group::MIN_MEMBERS) {
            self.dissolve_group(id);
        }
    }

    /// Kopiert ein Polygon (ohne Gruppe) ans Ende. Gibt den neuen Index zurück.
    pub fn duplicate_polygon(&mut self, target: PolygonRef) -> Option<usize> {
        let mut copy = self.polygon(target)?.clone();
        if copy.is_empty() {
            return None;
        }
        copy.group_id = None;
        self.polygons.push(copy);
        Some(self.polygons.len() - 1)
    }

    /// Kopiert einen Text (ohne Gruppe) ans Ende. Gibt den neuen Index zurück.
    pub fn duplicate_text(&mut self, index: usize) -> Option<usize> {
        let mut copy = self.texts.get(index)?.clone();
        copy.group_id = None;
        self.texts.push(copy);
        Some(self.texts.len() - 1)
    }

    /// Prüft, dass Gruppen und `group_id`-Referenzen übereinstimmen.
    pub fn groups_consistent(&self) -> bool {
        let polygons_ok = self.polygons.iter().enumerate().all(|(i, p)| match p.group_id {
            Some(id) => self.group(id).is_some_and(|g| g.polygons.contains(&i)),
            None => true,
        });
        let texts_ok = self.texts.iter().enumerate().all(|(i, t)| match t.group_id {
            Some(id) => self.group(id).is_some_and(|g| g.texts.contains(&i)),
            None => true,
        });
        let groups_ok = self.live_groups_newest_first().all(|(id, g)| {
            g.member_count() >= Group::MIN_MEMBERS
                && g.polygons
                    .iter()
                    .all(|&i| self.polygons.get(i).is_some_and(|p| p.group_id == Some(id)))
                && g.texts
                    .iter()
                    .all(|&i| self.texts.get(i).is_some_and(|t| t.group_id == Some(id)))
        });
        polygons_ok && texts_ok && groups_ok && self.current_polygon.group_id.is_none()
    }
}
