//! Handler für Kamera und Anzeige-Schalter.

use crate::app::use_cases;
use crate::app::AppState;

/// Zoomt multiplikativ um `factor`.
pub fn zoom(state: &mut AppState, factor: f32) {
    use_cases::camera::zoom(state, factor);
}

/// Setzt den Canvas-Ursprung in Gerätekoordinaten.
pub fn set_canvas_origin(state: &mut AppState, origin: glam::Vec2) {
    use_cases::camera::set_canvas_origin(state, origin);
}

/// Schaltet das Hintergrundraster.
pub fn set_show_grid(state: &mut AppState, enabled: bool) {
    state.view.show_grid = enabled;
}

/// Schaltet das Einrasten von Zeigerpositionen auf das Raster.
pub fn set_snap_to_grid(state: &mut AppState, enabled: bool) {
    state.view.snap_to_grid = enabled;
    log::info!("Raster-Einrasten: {}", if enabled { "an" } else { "aus" });
}

/// Schaltet alle Längen-Beziers global.
pub fn set_show_edge_lengths(state: &mut AppState, enabled: bool) {
    state.view.show_edge_lengths = enabled;
}

/// Schaltet alle Winkelfächer global.
pub fn set_show_angles(state: &mut AppState, enabled: bool) {
    state.view.show_angles = enabled;
}
