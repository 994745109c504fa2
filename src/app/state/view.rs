use crate::core::Camera2D;
use glam::Vec2;

/// View-bezogener Anwendungszustand (nicht Teil der History)
#[derive(Debug)]
pub struct ViewState {
    /// 2D-Kamera für die Ansicht
    pub camera: Camera2D,
    /// Raster anzeigen
    pub show_grid: bool,
    /// Zeigerpositionen auf das Raster einrasten
    pub snap_to_grid: bool,
    /// Längen-Beziers global anzeigen
    pub show_edge_lengths: bool,
    /// Winkelfächer global anzeigen
    pub show_angles: bool,
    /// Letzte Zeigerposition im Modellraum (Gummiband im Draw-Modus)
    pub pointer_position: Option<Vec2>,
    /// Level-getriggertes Neuzeichnen-Flag, pro Frame einmal abgeholt
    redraw_requested: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            show_grid: true,
            snap_to_grid: false,
            show_edge_lengths: true,
            show_angles: true,
            pointer_position: None,
            redraw_requested: true,
        }
    }

    /// Fordert ein Neuzeichnen an. Mehrfache Anforderungen fallen zusammen.
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Liefert die offene Anforderung und setzt das Flag zurück.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Offene Anforderung ohne Zurücksetzen.
    pub fn redraw_pending(&self) -> bool {
        self.redraw_requested
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
