use crate::app::history::Snapshot;
use crate::core::{GroupId, PolygonPose, PolygonRef};
use glam::Vec2;

/// Aktiver Bearbeitungsmodus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Ecken an das Polygon in Arbeit anhängen
    #[default]
    Draw,
    /// Objekte selektieren, ziehen und skalieren
    Edit,
    /// Oberstes Objekt unter dem Zeiger löschen
    Delete,
    /// Neue Texte platzieren
    Text,
}

impl EditMode {
    /// Alle Modi in Toolbar-Reihenfolge.
    pub const ALL: [EditMode; 4] = [EditMode::Draw, EditMode::Edit, EditMode::Delete, EditMode::Text];

    /// Anzeigename für Toolbar und Statusleiste
    pub fn label(self) -> &'static str {
        match self {
            EditMode::Draw => "Zeichnen",
            EditMode::Edit => "Bearbeiten",
            EditMode::Delete => "Löschen",
            EditMode::Text => "Text",
        }
    }
}

/// Drag-Unterzustand zwischen Pointer-Down und Pointer-Up (nur im Edit-Modus).
///
/// Ganz-Polygon-, Gruppen-, Skalier- und Text-Drags tragen ihren Startzustand,
/// damit jeder Move vom Snapshot aus rechnet statt vom bereits bewegten Zustand.
#[derive(Debug, Clone, PartialEq)]
pub enum DragState {
    /// Kontrollpunkt der Kante `edge` folgt dem Zeiger
    EdgeControl { polygon: PolygonRef, edge: usize },
    /// Ecke `vertex` folgt dem Zeiger
    Vertex { polygon: PolygonRef, vertex: usize },
    /// Ganzes Polygon wird verschoben
    WholePolygon { polygon: usize, start: PolygonPose },
    /// Alle Mitglieder einer Gruppe werden verschoben
    Group {
        group: GroupId,
        polygons: Vec<(usize, PolygonPose)>,
        texts: Vec<(usize, Vec2)>,
    },
    /// Polygon wird um seinen Schwerpunkt skaliert
    Scale {
        polygon: PolygonRef,
        start: PolygonPose,
        centroid: Vec2,
        initial_distance: f32,
    },
    /// Text wird verschoben
    Text { text: usize, start: Vec2 },
}

impl DragState {
    /// Kurzname für Log-Ausgaben
    pub fn label(&self) -> &'static str {
        match self {
            DragState::EdgeControl { .. } => "Kontrollpunkt",
            DragState::Vertex { .. } => "Ecke",
            DragState::WholePolygon { .. } => "Polygon",
            DragState::Group { .. } => "Gruppe",
            DragState::Scale { .. } => "Skalierung",
            DragState::Text { .. } => "Text",
        }
    }
}

/// Laufende Drag-Geste
#[derive(Debug, Clone)]
pub struct ActiveDrag {
    /// Art des Drags samt Startzustand
    pub kind: DragState,
    /// Zeigerposition bei Pointer-Down (Modellraum)
    pub start_pointer: Vec2,
    /// Dokument vor der Geste; wird bei Pointer-Up committet, falls `dirty`
    pub pending_snapshot: Snapshot,
    /// Seit Pointer-Down wurde das Dokument verändert
    pub dirty: bool,
}

/// Zustand des Bearbeitungsmodus und der laufenden Geste
#[derive(Debug, Default)]
pub struct EditorState {
    /// Aktiver Modus
    pub mode: EditMode,
    /// Laufender Drag (None = kein Drag aktiv)
    pub drag: Option<ActiveDrag>,
}

impl EditorState {
    /// Erstellt den Standard-Editorzustand (Draw-Modus, kein Drag).
    pub fn new() -> Self {
        Self::default()
    }

    /// `true`, während eine Drag-Geste läuft.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}
