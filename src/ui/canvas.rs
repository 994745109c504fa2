//! Canvas-Painter: zeichnet eine `RenderScene` mit dem egui-Painter.

use super::color32;
use crate::core::Camera2D;
use crate::shared::{RenderScene, SceneLabel};
use egui::{Align2, FontId, Pos2, Stroke};
use glam::Vec2;

const SEGMENT_WIDTH: f32 = 1.5;
const CURVE_WIDTH: f32 = 1.0;
const VERTEX_MARKER_RADIUS: f32 = 4.0;
const CONTROL_MARKER_RADIUS: f32 = 3.0;
const SELECTION_WIDTH: f32 = 3.0;

fn to_screen(camera: &Camera2D, world: Vec2) -> Pos2 {
    let screen = camera.world_to_screen(world);
    Pos2::new(screen.x, screen.y)
}

/// Zeichnet Raster, Polygone, Texte, Gummiband und Skalier-Griff.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let camera = &scene.camera;
    let options = &scene.options;
    painter.rect_filled(rect, 0.0, egui::Color32::WHITE);

    if scene.show_grid {
        paint_grid(painter, rect, camera, options.grid_size, options.grid_color);
    }

    let selection_stroke = Stroke::new(SELECTION_WIDTH, color32(options.selection_color));

    for polygon in &scene.polygons {
        for segment in &polygon.segments {
            let points = [
                to_screen(camera, segment.start),
                to_screen(camera, segment.end),
            ];
            if polygon.selected {
                painter.line_segment(points, selection_stroke);
            }
            painter.line_segment(points, Stroke::new(SEGMENT_WIDTH, color32(segment.color)));
        }

        for curve in &polygon.curves {
            let stroke = Stroke::new(CURVE_WIDTH, color32(curve.color));
            for piece in &curve.pieces {
                let points = piece.iter().map(|&p| to_screen(camera, p)).collect();
                painter.add(egui::Shape::line(points, stroke));
            }
            paint_label(painter, camera, &curve.label);
        }

        for fan in &polygon.fans {
            paint_fan(
                painter,
                camera,
                &fan.outline,
                color32(options.angle_fan_fill_color),
                color32(options.angle_fan_stroke_color),
            );
            paint_label(painter, camera, &fan.label);
        }

        for &vertex in &polygon.vertices {
            painter.circle_filled(
                to_screen(camera, vertex),
                VERTEX_MARKER_RADIUS,
                color32(options.vertex_color),
            );
        }
        for &control in &polygon.edge_controls {
            painter.circle_filled(
                to_screen(camera, control),
                CONTROL_MARKER_RADIUS,
                color32(options.edge_control_color),
            );
        }
    }

    for text in &scene.texts {
        if text.selected {
            let bounds = egui::Rect::from_two_pos(
                to_screen(camera, text.bounds.min),
                to_screen(camera, text.bounds.max),
            );
            painter.rect_stroke(bounds, 0.0, selection_stroke, egui::StrokeKind::Outside);
        }
        paint_label(painter, camera, &text.label);
    }

    if let Some((start, end)) = scene.rubber_band {
        painter.line_segment(
            [to_screen(camera, start), to_screen(camera, end)],
            Stroke::new(1.0, egui::Color32::GRAY),
        );
    }

    if let Some(handle) = &scene.scale_handle {
        let bounds = handle.bounds();
        let rect = egui::Rect::from_two_pos(
            to_screen(camera, bounds.min),
            to_screen(camera, bounds.max),
        );
        painter.rect_filled(rect, 0.0, color32(options.scale_handle_color));
    }
}

fn paint_label(painter: &egui::Painter, camera: &Camera2D, label: &SceneLabel) {
    painter.text(
        to_screen(camera, label.position),
        Align2::CENTER_CENTER,
        &label.text,
        FontId::proportional(label.font_size * camera.zoom),
        color32(label.color),
    );
}

/// Fächer als Dreiecksfächer (auch für Öffnungen über 180°), dann Umriss.
fn paint_fan(
    painter: &egui::Painter,
    camera: &Camera2D,
    outline: &[Vec2],
    fill: egui::Color32,
    stroke: egui::Color32,
) {
    let Some((&apex, arc)) = outline.split_first() else {
        return;
    };
    if arc.len() < 2 {
        return;
    }

    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(to_screen(camera, apex), fill);
    for &point in arc {
        mesh.colored_vertex(to_screen(camera, point), fill);
    }
    for i in 1..arc.len() as u32 {
        mesh.add_triangle(0, i, i + 1);
    }
    painter.add(egui::Shape::mesh(mesh));

    let mut points: Vec<Pos2> = outline.iter().map(|&p| to_screen(camera, p)).collect();
    points.push(to_screen(camera, apex));
    painter.add(egui::Shape::line(points, Stroke::new(1.0, stroke)));
}

fn paint_grid(
    painter: &egui::Painter,
    rect: egui::Rect,
    camera: &Camera2D,
    grid_size: f32,
    color: crate::core::Color,
) {
    let spacing = grid_size * camera.zoom;
    if spacing < 4.0 {
        return;
    }
    let stroke = Stroke::new(1.0, color32(color));
    let origin = to_screen(camera, Vec2::ZERO);

    let mut x = rect.left() + (origin.x - rect.left()).rem_euclid(spacing);
    while x <= rect.right() {
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
        x += spacing;
    }
    let mut y = rect.top() + (origin.y - rect.top()).rem_euclid(spacing);
    while y <= rect.bottom() {
        painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
        y += spacing;
    }
}
