//! 2D-Kamera: Zoom und Umrechnung Geräte- → Modellkoordinaten.

use glam::Vec2;

/// 2D-Kamera mit Zoom um den Canvas-Ursprung
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Linke obere Ecke des Canvas in Gerätekoordinaten
    pub canvas_origin: Vec2,
    /// Zoom-Level (1.0 = normal)
    pub zoom: f32,
}

impl Camera2D {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.5;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 3.0;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            canvas_origin: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Ändert den Zoom-Level multiplikativ, begrenzt auf `[min, max]`.
    pub fn zoom_by(&mut self, factor: f32, min: f32, max: f32) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Konvertiert Gerätekoordinaten zu Modellkoordinaten: `(device − origin) / zoom`.
    pub fn screen_to_world(&self, device_pos: Vec2) -> Vec2 {
        (device_pos - self.canvas_origin) / self.zoom
    }

    /// Konvertiert Modellkoordinaten zurück zu Gerätekoordinaten.
    pub fn world_to_screen(&self, world_pos: Vec2) -> Vec2 {
        world_pos * self.zoom + self.canvas_origin
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

/// Rastet einen Punkt auf das nächste Gitterkreuz ein.
pub fn snap_to_grid(pos: Vec2, grid_size: f32) -> Vec2 {
    if grid_size <= 0.0 {
        return pos;
    }
    (pos / grid_size).round() * grid_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_to_world_divides_by_zoom() {
        let camera = Camera2D {
            canvas_origin: Vec2::new(100.0, 50.0),
            zoom: 2.0,
        };
        assert_eq!(
            camera.screen_to_world(Vec2::new(140.0, 70.0)),
            Vec2::new(20.0, 10.0)
        );
        assert_eq!(
            camera.world_to_screen(Vec2::new(20.0, 10.0)),
            Vec2::new(140.0, 70.0)
        );
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = Camera2D::new();
        for _ in 0..30 {
            camera.zoom_by(1.1, Camera2D::ZOOM_MIN, Camera2D::ZOOM_MAX);
        }
        assert_eq!(camera.zoom, Camera2D::ZOOM_MAX);
        for _ in 0..60 {
            camera.zoom_by(1.0 / 1.1, Camera2D::ZOOM_MIN, Camera2D::ZOOM_MAX);
        }
        assert_eq!(camera.zoom, Camera2D::ZOOM_MIN);
    }

    #[test]
    fn snap_rounds_to_nearest_grid_point() {
        assert_eq!(
            snap_to_grid(Vec2::new(29.0, 31.0), 20.0),
            Vec2::new(20.0, 40.0)
        );
        assert_eq!(snap_to_grid(Vec2::new(9.0, -11.0), 20.0), Vec2::new(0.0, -20.0));
    }
}
