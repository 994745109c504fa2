use crate::app::state::EditMode;
use crate::core::{AnglePropertyChange, EdgePropertyChange, PolygonRef, TextPropertyChange};

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Positionen kommen in Gerätekoordinaten (Pixel) an.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Zeiger gedrückt (Maus oder Touch)
    PointerPressed {
        screen_pos: glam::Vec2,
        /// Modifier gehalten: Selektion erweitern statt ersetzen
        additive: bool,
    },
    /// Zeiger bewegt
    PointerMoved { screen_pos: glam::Vec2 },
    /// Zeiger losgelassen (beendet eine laufende Geste)
    PointerReleased,
    /// Mausrad: eine Zoom-Raste hinein (`true`) oder heraus (`false`)
    ZoomStepRequested { zoom_in: bool },
    /// Lage der Zeichenfläche im Fenster hat sich geändert
    CanvasOriginChanged { origin: glam::Vec2 },

    /// Modus gewechselt (Toolbar)
    ModeSelected { mode: EditMode },
    /// Polygon in Arbeit schließen
    ClosePolygonRequested,
    /// Gesamtes Dokument leeren
    ClearAllRequested,
    /// Letzten Schritt rückgängig machen
    UndoRequested,
    /// Rückgängig gemachten Schritt wiederholen
    RedoRequested,
    /// Selektion gruppieren
    GroupSelectionRequested,
    /// Gruppe der Selektion auflösen
    UngroupSelectionRequested,
    /// Selektierte Polygone/Texte duplizieren
    DuplicateSelectionRequested,

    /// Kanten-Eigenschaft im Panel geändert
    EdgePropertyChanged {
        polygon: PolygonRef,
        edge: usize,
        change: EdgePropertyChange,
    },
    /// Winkel-Eigenschaft im Panel geändert
    AnglePropertyChanged {
        polygon: PolygonRef,
        vertex: usize,
        change: AnglePropertyChange,
    },
    /// Text-Eigenschaft im Panel geändert
    TextPropertyChanged {
        text: usize,
        change: TextPropertyChange,
    },
    /// Eingabefeld verlassen oder Drag eines Reglers beendet
    PropertyEditFinished,

    /// Raster anzeigen umgeschaltet
    ShowGridToggled { enabled: bool },
    /// Einrasten umgeschaltet
    SnapToGridToggled { enabled: bool },
    /// Globale Längenanzeige umgeschaltet
    ShowEdgeLengthsToggled { enabled: bool },
    /// Globale Winkelanzeige umgeschaltet
    ShowAnglesToggled { enabled: bool },
}
