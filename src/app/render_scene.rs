//! Builder für Render-Szenen aus dem AppState.

use crate::app::{AppState, EditMode};
use crate::core::{scale_handle, Polygon, PolygonRef};
use crate::shared::{
    angle_fan, angle_label_text, approx_quadratic_length, edge_label_anchor, edge_label_text,
    sample_quadratic, visible_ranges, RenderScene, SceneAngleFan, SceneEdgeCurve, SceneLabel,
    ScenePolygon, SceneSegment, SceneText,
};
use glam::Vec2;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let polygons = state
        .document
        .polygons_with_refs()
        .filter(|(_, polygon)| !polygon.is_empty())
        .map(|(polygon_ref, polygon)| build_polygon(state, polygon_ref, polygon))
        .collect();

    let texts = state
        .document
        .texts
        .iter()
        .enumerate()
        .map(|(index, text)| SceneText {
            label: SceneLabel {
                position: text.position,
                text: text.content.clone(),
                font_size: text.font_size,
                color: text.color,
            },
            bounds: text.bounding_box(state.text_measure.as_ref()),
            selected: state.selection.texts.contains(&index),
        })
        .collect();

    let rubber_band = match (state.editor.mode, state.view.pointer_position) {
        (EditMode::Draw, Some(pointer)) => state
            .document
            .current_polygon
            .vertices
            .last()
            .map(|last| (last.position, pointer)),
        _ => None,
    };

    RenderScene {
        camera: state.view.camera.clone(),
        polygons,
        texts,
        rubber_band,
        scale_handle: selected_scale_handle(state),
        show_grid: state.view.show_grid,
        options: state.options.clone(),
    }
}

fn build_polygon(state: &AppState, polygon_ref: PolygonRef, polygon: &Polygon) -> ScenePolygon {
    let segments_per_curve = state.options.curve_segments;
    let edit_mode = state.editor.mode == EditMode::Edit;

    let mut segments = Vec::with_capacity(polygon.edge_count());
    let mut curves = Vec::new();
    let mut edge_controls = Vec::new();

    for edge in 0..polygon.edge_count() {
        let (Some((start, end)), Some(control)) =
            (polygon.edge_endpoints(edge), polygon.edge_control_point(edge))
        else {
            continue;
        };
        let property = &polygon.vertices[edge].edge;

        segments.push(SceneSegment {
            start,
            end,
            color: property.segment_color,
        });
        if edit_mode {
            edge_controls.push(control);
        }

        if state.view.show_edge_lengths && property.show_edge_length {
            let pieces = visible_ranges(property.bezier_gap)
                .into_iter()
                .map(|(t0, t1)| sample_quadratic(start, control, end, t0, t1, segments_per_curve))
                .collect();
            let length = approx_quadratic_length(start, control, end, segments_per_curve);
            curves.push(SceneEdgeCurve {
                pieces,
                color: property.bezier_color,
                label: SceneLabel {
                    position: edge_label_anchor(start, control, end)
                        + Vec2::new(property.label_offset_x, property.label_offset_y),
                    text: edge_label_text(&property.label_override, length),
                    font_size: property.label_font_size,
                    color: property.label_color,
                },
            });
        }
    }

    let mut fans = Vec::new();
    if state.view.show_angles {
        for index in polygon.angle_indices() {
            let Some((prev, vertex, next)) = polygon.angle_triple(index) else {
                continue;
            };
            let property = &polygon.vertices[index].angle;
            if !property.show_angle {
                continue;
            }
            let fan = angle_fan(prev, vertex, next, property.fan_position);
            fans.push(SceneAngleFan {
                outline: fan.outline(vertex, property.radius, segments_per_curve),
                label: SceneLabel {
                    position: fan.label_anchor(vertex, property.radius)
                        + Vec2::new(property.label_offset_x, property.label_offset_y),
                    text: angle_label_text(&property.label_override, fan.interior_degrees()),
                    font_size: property.label_font_size,
                    color: state.options.angle_fan_stroke_color,
                },
            });
        }
    }

    ScenePolygon {
        polygon: polygon_ref,
        segments,
        curves,
        fans,
        vertices: if edit_mode {
            polygon.positions()
        } else {
            Vec::new()
        },
        edge_controls,
        selected: state.selection.contains_polygon(polygon_ref),
    }
}

/// Skalier-Griff: nur im Edit-Modus für genau ein selektiertes, ungruppiertes Polygon.
fn selected_scale_handle(state: &AppState) -> Option<crate::core::ScaleHandle> {
    if state.editor.mode != EditMode::Edit {
        return None;
    }
    let PolygonRef::Completed(index) = state.selection.single_polygon()? else {
        return None;
    };
    let polygon = state.document.polygons.get(index)?;
    if polygon.group_id.is_some() {
        return None;
    }
    scale_handle(polygon, state.options.scale_handle_size)
}
