use crate::app::state::EditMode;
use crate::core::{AnglePropertyChange, EdgePropertyChange, PolygonRef, TextPropertyChange};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
/// Positionen sind bereits in Modellkoordinaten (ggf. eingerastet).
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Pointer-Down: Hit-Test, Drag-Start oder Modus-Aktion
    BeginPointerGesture { world_pos: glam::Vec2, additive: bool },
    /// Pointer-Move: laufenden Drag fortschreiben oder Gummiband aktualisieren
    UpdatePointerGesture { world_pos: glam::Vec2 },
    /// Pointer-Up: Geste abschließen, ggf. History-Commit
    EndPointerGesture,

    /// Zoom multiplikativ ändern (begrenzt)
    ZoomCamera { factor: f32 },
    /// Canvas-Ursprung in Gerätekoordinaten setzen
    SetCanvasOrigin { origin: glam::Vec2 },

    /// Modus wechseln
    SetEditMode { mode: EditMode },
    /// Polygon in Arbeit schließen (mindestens 3 Ecken)
    ClosePolygon,
    /// Alles löschen
    ClearAll,
    /// Undo
    Undo,
    /// Redo
    Redo,
    /// Selektierte Objekte zu einer Gruppe zusammenfassen
    GroupSelection,
    /// Gruppe der Selektion auflösen
    UngroupSelection,
    /// Selektierte Objekte duplizieren
    DuplicateSelection,

    /// Eine Kanten-Eigenschaft setzen
    SetEdgeProperty {
        polygon: PolygonRef,
        edge: usize,
        change: EdgePropertyChange,
    },
    /// Eine Winkel-Eigenschaft setzen
    SetAngleProperty {
        polygon: PolygonRef,
        vertex: usize,
        change: AnglePropertyChange,
    },
    /// Eine Text-Eigenschaft setzen
    SetTextProperty {
        text: usize,
        change: TextPropertyChange,
    },
    /// Laufende Feld-Bearbeitung abschließen (nächste Änderung = neuer Undo-Schritt)
    FinishPropertyEdit,

    /// Raster-Anzeige setzen
    SetShowGrid { enabled: bool },
    /// Einrasten setzen
    SetSnapToGrid { enabled: bool },
    /// Globale Längenanzeige setzen
    SetShowEdgeLengths { enabled: bool },
    /// Globale Winkelanzeige setzen
    SetShowAngles { enabled: bool },
}
