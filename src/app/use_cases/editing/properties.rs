//! Use-Cases: Kanten-, Winkel- und Text-Eigenschaften ändern (Eigenschaften-Panel).
//!
//! Eine Bearbeitung eines Feldes erzeugt genau einen Undo-Schritt, auch wenn das
//! Panel pro Tastendruck oder Drag-Frame eine Änderung meldet. Änderungen, die
//! den Wert nicht verändern, werden ohne History-Eintrag verworfen.

use crate::app::history::{PropertyEditKey, Snapshot};
use crate::app::AppState;
use crate::core::{AnglePropertyChange, EdgePropertyChange, PolygonRef, TextPropertyChange};
use std::mem::discriminant;

/// Ändert eine Eigenschaft der Kante `edge` (ausgehend von Ecke `edge`).
///
/// Gibt `true` zurück, wenn sich das Dokument geändert hat.
pub fn set_edge_property(
    state: &mut AppState,
    polygon: PolygonRef,
    edge: usize,
    change: EdgePropertyChange,
) -> bool {
    let Some(current) = state.document.polygon(polygon).and_then(|p| {
        (edge < p.edge_count())
            .then(|| p.vertices.get(edge))
            .flatten()
    }) else {
        log::warn!("Kante {} von {:?} existiert nicht", edge, polygon);
        return false;
    };

    let key = PropertyEditKey::Edge {
        polygon,
        edge,
        field: discriminant(&change),
    };
    let mut updated = current.edge.clone();
    change.apply(&mut updated);
    if updated == current.edge {
        log::debug!("Kanten-Eigenschaft unverändert, kein Undo-Schritt");
        return false;
    }

    // Snapshot VOR Mutation
    record_property_snapshot(state, key);
    if let Some(vertex) = state
        .document
        .polygon_mut(polygon)
        .and_then(|p| p.vertices.get_mut(edge))
    {
        vertex.edge = updated;
    }
    true
}

/// Ändert eine Eigenschaft des Winkels an Ecke `vertex`.
pub fn set_angle_property(
    state: &mut AppState,
    polygon: PolygonRef,
    vertex: usize,
    change: AnglePropertyChange,
) -> bool {
    let Some(current) = state
        .document
        .polygon(polygon)
        .and_then(|p| p.vertices.get(vertex))
    else {
        log::warn!("Ecke {} von {:?} existiert nicht", vertex, polygon);
        return false;
    };

    let key = PropertyEditKey::Angle {
        polygon,
        vertex,
        field: discriminant(&change),
    };
    let mut updated = current.angle.clone();
    change.apply(&mut updated);
    if updated == current.angle {
        log::debug!("Winkel-Eigenschaft unverändert, kein Undo-Schritt");
        return false;
    }

    // Snapshot VOR Mutation
    record_property_snapshot(state, key);
    if let Some(target) = state
        .document
        .polygon_mut(polygon)
        .and_then(|p| p.vertices.get_mut(vertex))
    {
        target.angle = updated;
    }
    true
}

/// Ändert Inhalt, Position, Größe oder Farbe eines Textes.
pub fn set_text_property(state: &mut AppState, text: usize, change: TextPropertyChange) -> bool {
    let Some(current) = state.document.texts.get(text) else {
        log::warn!("Text {} existiert nicht", text);
        return false;
    };

    let key = PropertyEditKey::Text {
        text,
        field: discriminant(&change),
    };
    let mut updated = current.clone();
    change.apply(&mut updated);
    if &updated == current {
        log::debug!("Text-Eigenschaft unverändert, kein Undo-Schritt");
        return false;
    }

    // Snapshot VOR Mutation
    record_property_snapshot(state, key);
    state.document.texts[text] = updated;
    true
}

/// Beendet die laufende Feld-Bearbeitung; die nächste Änderung wird ein eigener Undo-Schritt.
pub fn finish_property_edit(state: &mut AppState) {
    state.history.finish_property_edit();
}

fn record_property_snapshot(state: &mut AppState, key: PropertyEditKey) {
    let document = &state.document;
    let recorded = state.history.record_property_edit(key, || Snapshot {
        document: document.clone(),
    });
    if !recorded {
        log::debug!("Änderung an {:?} in offenen Undo-Schritt übernommen", key);
    }
}
