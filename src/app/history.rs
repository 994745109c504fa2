//! Snapshot-basiertes Undo/Redo über das gesamte Dokument.

use super::AppState;
use crate::core::{
    AnglePropertyChange, Document, EdgePropertyChange, PolygonRef, TextPropertyChange,
};
use std::mem::Discriminant;

/// Unabhängige Tiefenkopie des Dokuments.
///
/// Polygone, Polygon in Arbeit, Texte und Gruppen werden gemeinsam kopiert,
/// damit `group_id`-Referenzen nach Undo/Redo gültig bleiben. Die Selektion
/// gehört nicht zum Snapshot; sie wird nach dem Wiederherstellen bereinigt.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Dokument zum Zeitpunkt des Snapshots
    pub document: Document,
}

impl Snapshot {
    /// Erstellt einen Snapshot durch strukturellen Deep-Clone.
    pub fn from_state(state: &AppState) -> Self {
        Self {
            document: state.document.clone(),
        }
    }

    /// Stellt den Snapshot wieder her.
    ///
    /// Eine laufende Drag-Geste wird verworfen, die Selektion auf gültige
    /// Indizes reduziert.
    pub fn apply_to(self, state: &mut AppState) {
        state.document = self.document;
        state.editor.drag = None;
        state.selection.prune(&state.document);
    }
}

/// Ziel und Feld einer Eigenschafts-Änderung.
///
/// Aufeinanderfolgende Änderungen mit gleichem Schlüssel (Tippen im Label-Feld,
/// Ziehen eines Sliders) bilden zusammen einen Undo-Schritt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyEditKey {
    Edge {
        polygon: PolygonRef,
        edge: usize,
        field: Discriminant<EdgePropertyChange>,
    },
    Angle {
        polygon: PolygonRef,
        vertex: usize,
        field: Discriminant<AnglePropertyChange>,
    },
    Text {
        text: usize,
        field: Discriminant<TextPropertyChange>,
    },
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
    /// Offene Eigenschafts-Änderung, deren Undo-Schritt weitere Änderungen aufnimmt
    open_edit: Option<PropertyEditKey>,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth.min(64)),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
            open_edit: None,
        }
    }

    /// Legt einen vorab erstellten Snapshot auf den Undo-Stack und verwirft alle Redo-Einträge.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        Self::push_bounded(&mut self.undo_stack, snap, self.max_depth);
        self.redo_stack.clear();
        self.open_edit = None;
    }

    /// Legt einen Snapshot für eine Eigenschafts-Änderung an.
    ///
    /// Setzt die Änderung eine offene Änderung mit gleichem Schlüssel fort,
    /// bleibt der vorhandene Undo-Schritt zuständig und `snapshot` wird nicht
    /// aufgerufen. Gibt `true` zurück, wenn ein neuer Schritt angelegt wurde.
    pub fn record_property_edit(
        &mut self,
        key: PropertyEditKey,
        snapshot: impl FnOnce() -> Snapshot,
    ) -> bool {
        if self.open_edit == Some(key) && self.can_undo() {
            return false;
        }
        self.record_snapshot(snapshot());
        self.open_edit = Some(key);
        true
    }

    /// Schließt die offene Eigenschafts-Änderung (Feld verlassen, Drag beendet).
    pub fn finish_property_edit(&mut self) {
        self.open_edit = None;
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Anzahl verfügbarer Undo-Schritte
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Anzahl verfügbarer Redo-Schritte
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Pop undo stack and push `current` onto redo stack; returns the snapshot to apply.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        self.open_edit = None;
        Self::push_bounded(&mut self.redo_stack, current, self.max_depth);
        Some(prev)
    }

    /// Pop redo stack and push `current` onto undo stack; returns the snapshot to apply.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        self.open_edit = None;
        Self::push_bounded(&mut self.undo_stack, current, self.max_depth);
        Some(next)
    }

    fn push_bounded(stack: &mut Vec<Snapshot>, snap: Snapshot, max_depth: usize) {
        if stack.len() >= max_depth {
            stack.remove(0);
        }
        stack.push(snap);
    }
}
