//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;

/// Zoomt die Kamera multiplikativ, begrenzt auf die Zoom-Grenzen der Optionen.
pub fn zoom(state: &mut AppState, factor: f32) {
    if !factor.is_finite() || factor <= 0.0 {
        log::warn!("Ungültiger Zoom-Faktor ignoriert: {}", factor);
        return;
    }
    state.view.camera.zoom_by(
        factor,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
    log::debug!("Zoom: {:.2}", state.view.camera.zoom);
}

/// Setzt den Canvas-Ursprung (linke obere Ecke in Gerätekoordinaten).
pub fn set_canvas_origin(state: &mut AppState, origin: glam::Vec2) {
    state.view.camera.canvas_origin = origin;
}
