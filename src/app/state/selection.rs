use crate::core::{Document, Group, GroupId, PolygonRef};
use indexmap::IndexSet;

/// Auswahlbezogener Anwendungszustand
///
/// Wird vom Eigenschaften-Panel nur gelesen. Reihenfolge = Auswahlreihenfolge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Selektierte Polygone (abgeschlossen oder in Arbeit)
    pub polygons: IndexSet<PolygonRef>,
    /// Selektierte Texte (Indizes in `Document::texts`)
    pub texts: IndexSet<usize>,
    /// Selektierte Gruppe (falls per Gruppen-Treffer gewählt)
    pub group: Option<GroupId>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true`, wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty() && self.texts.is_empty() && self.group.is_none()
    }

    /// Hebt die gesamte Selektion auf.
    pub fn clear(&mut self) {
        self.polygons.clear();
        self.texts.clear();
        self.group = None;
    }

    /// Prüft, ob ein Polygon selektiert ist.
    pub fn contains_polygon(&self, polygon: PolygonRef) -> bool {
        self.polygons.contains(&polygon)
    }

    /// Selektiert ein Polygon; ohne `additive` ersetzt es die Selektion.
    pub fn select_polygon(&mut self, polygon: PolygonRef, additive: bool) {
        if !additive {
            self.clear();
        }
        self.polygons.insert(polygon);
    }

    /// Selektiert einen Text; ohne `additive` ersetzt er die Selektion.
    pub fn select_text(&mut self, text: usize, additive: bool) {
        if !additive {
            self.clear();
        }
        self.texts.insert(text);
    }

    /// Selektiert eine Gruppe samt aller Mitglieder.
    pub fn select_group(&mut self, id: GroupId, group: &Group, additive: bool) {
        if !additive {
            self.clear();
        }
        self.polygons
            .extend(group.polygons.iter().map(|&i| PolygonRef::Completed(i)));
        self.texts.extend(group.texts.iter().copied());
        self.group = Some(id);
    }

    /// Einziges selektiertes Polygon (für das Eigenschaften-Panel).
    pub fn single_polygon(&self) -> Option<PolygonRef> {
        match (self.polygons.len(), self.texts.len()) {
            (1, 0) => self.polygons.first().copied(),
            _ => None,
        }
    }

    /// Einziger selektierter Text (für das Eigenschaften-Panel).
    pub fn single_text(&self) -> Option<usize> {
        match (self.polygons.len(), self.texts.len()) {
            (0, 1) => self.texts.first().copied(),
            _ => None,
        }
    }

    /// Entfernt Polygon `removed` aus der Selektion und rückt höhere Indizes nach.
    pub fn forget_polygon(&mut self, removed: usize) {
        self.polygons = self
            .polygons
            .iter()
            .filter_map(|&p| match p {
                PolygonRef::Completed(i) if i == removed => None,
                PolygonRef::Completed(i) if i > removed => Some(PolygonRef::Completed(i - 1)),
                other => Some(other),
            })
            .collect();
    }

    /// Entfernt Text `removed` aus der Selektion und rückt höhere Indizes nach.
    pub fn forget_text(&mut self, removed: usize) {
        self.texts = self
            .texts
            .iter()
            .filter(|&&i| i != removed)
            .map(|&i| if i > removed { i - 1 } else { i })
            .collect();
    }

    /// Verwirft alle Einträge, die im Dokument nicht (mehr) existieren.
    ///
    /// Das Polygon in Arbeit bleibt nur selektiert, solange es Ecken hat.
    pub fn prune(&mut self, document: &Document) {
        self.polygons.retain(|p| match *p {
            PolygonRef::Completed(i) => i < document.polygons.len(),
            PolygonRef::InProgress => !document.current_polygon.is_empty(),
        });
        self.texts.retain(|&i| i < document.texts.len());
        if self.group.is_some_and(|id| document.group(id).is_none()) {
            self.group = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_select_replaces_additive_extends() {
        let mut selection = SelectionState::new();
        selection.select_polygon(PolygonRef::Completed(0), false);
        selection.select_text(3, true);
        assert_eq!(selection.polygons.len(), 1);
        assert_eq!(selection.texts.len(), 1);

        selection.select_polygon(PolygonRef::Completed(2), false);
        assert!(selection.texts.is_empty());
        assert_eq!(selection.single_polygon(), Some(PolygonRef::Completed(2)));
    }

    #[test]
    fn forget_polygon_shifts_indices() {
        let mut selection = SelectionState::new();
        for i in [0, 2, 4] {
            selection.select_polygon(PolygonRef::Completed(i), true);
        }
        selection.select_polygon(PolygonRef::InProgress, true);
        selection.forget_polygon(2);
        let refs: Vec<_> = selection.polygons.iter().copied().collect();
        assert_eq!(
            refs,
            vec![
                PolygonRef::Completed(0),
                PolygonRef::Completed(3),
                PolygonRef::InProgress
            ]
        );
    }

    #[test]
    fn prune_drops_stale_entries() {
        let mut selection = SelectionState::new();
        selection.select_polygon(PolygonRef::Completed(5), true);
        selection.select_polygon(PolygonRef::InProgress, true);
        selection.select_text(0, true);
        selection.group = Some(1);

        selection.prune(&Document::new());
        assert!(selection.is_empty());
    }
}
