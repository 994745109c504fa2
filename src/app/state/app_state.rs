use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::core::{ApproxTextMeasure, Document, HitTestParams, TextMeasure};
use crate::shared::EditorOptions;

use super::{EditorState, SelectionState, ViewState};

/// Hauptzustand der Anwendung (die Edit-Session)
///
/// Das Dokument wird ausschließlich über Commands des `AppController` mutiert.
pub struct AppState {
    /// Polygone, Polygon in Arbeit, Texte und Gruppen
    pub document: Document,
    /// View-State
    pub view: ViewState,
    /// Selection-State
    pub selection: SelectionState,
    /// Modus und laufende Drag-Geste
    pub editor: EditorState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen (Radien, Raster, Standard-Eigenschaften, Farben)
    pub options: EditorOptions,
    /// Textbreiten-Messung für Text-Bounding-Boxen
    pub text_measure: Box<dyn TextMeasure>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit vorgegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            document: Document::new(),
            view: ViewState::new(),
            selection: SelectionState::new(),
            editor: EditorState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.history_max_depth),
            text_measure: Box::new(ApproxTextMeasure {
                char_width_factor: options.text_char_width_factor,
            }),
            options,
        }
    }

    /// Gibt die Anzahl der abgeschlossenen Polygone zurück (für UI-Anzeige)
    pub fn polygon_count(&self) -> usize {
        self.document.polygon_count()
    }

    /// Gibt die Anzahl der Texte zurück (für UI-Anzeige)
    pub fn text_count(&self) -> usize {
        self.document.text_count()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Wird in mutierenden Use-Cases VOR der Mutation aufgerufen.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }

    /// Hit-Test-Parameter aus den Optionen
    pub fn hit_test_params(&self) -> HitTestParams {
        self.options.hit_test_params()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
