//! Properties-Panel (rechte Seitenleiste) für Kanten-, Winkel- und Text-Eigenschaften.
//!
//! Jede geänderte Einstellung wird als Intent gemeldet. Verlässt der Nutzer ein
//! Eingabefeld oder beendet einen Regler-Drag, folgt `PropertyEditFinished`, damit
//! die nächste Änderung einen eigenen Undo-Schritt bekommt.

use crate::app::{AppIntent, AppState};
use crate::core::{
    AngleProperty, AnglePropertyChange, EdgeProperty, EdgePropertyChange, Polygon, PolygonRef,
    TextObject, TextPropertyChange,
};

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let mut finished = false;

    egui::SidePanel::right("properties_panel")
        .default_width(240.0)
        .min_width(180.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Eigenschaften");
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                if let Some(polygon_ref) = state.selection.single_polygon() {
                    if let Some(polygon) = state.document.polygon(polygon_ref) {
                        render_polygon_properties(
                            ui,
                            polygon_ref,
                            polygon,
                            &mut events,
                            &mut finished,
                        );
                    }
                } else if let Some(index) = state.selection.single_text() {
                    if let Some(text) = state.document.texts.get(index) {
                        render_text_properties(ui, index, text, &mut events, &mut finished);
                    }
                } else if state.selection.is_empty() {
                    ui.label("Keine Selektion");
                } else {
                    ui.label(format!(
                        "{} Polygone, {} Texte selektiert",
                        state.selection.polygons.len(),
                        state.selection.texts.len()
                    ));
                }
            });
        });

    if finished {
        events.push(AppIntent::PropertyEditFinished);
    }
    events
}

/// Meldet `changed()` und merkt sich, ob die Bearbeitung des Widgets endete.
fn track(response: egui::Response, finished: &mut bool) -> bool {
    if response.lost_focus() || response.drag_stopped() {
        *finished = true;
    }
    response.changed()
}

fn render_polygon_properties(
    ui: &mut egui::Ui,
    polygon_ref: PolygonRef,
    polygon: &Polygon,
    events: &mut Vec<AppIntent>,
    finished: &mut bool,
) {
    match polygon_ref {
        PolygonRef::Completed(index) => ui.label(format!("Polygon {}", index)),
        PolygonRef::InProgress => ui.label("Polygon in Arbeit"),
    };
    ui.label(format!(
        "{} Ecken, {}",
        polygon.len(),
        if polygon.is_closed { "geschlossen" } else { "offen" }
    ));
    if let Some(group) = polygon.group_id {
        ui.label(format!("Gruppe {}", group));
    }
    ui.separator();

    for edge in 0..polygon.edge_count() {
        let property = &polygon.vertices[edge].edge;
        egui::CollapsingHeader::new(format!("Kante {}", edge + 1))
            .id_salt(("edge", edge))
            .show(ui, |ui| {
                for change in edge_property_editor(ui, property, finished) {
                    events.push(AppIntent::EdgePropertyChanged {
                        polygon: polygon_ref,
                        edge,
                        change,
                    });
                }
            });
    }

    for vertex in polygon.angle_indices() {
        let property = &polygon.vertices[vertex].angle;
        egui::CollapsingHeader::new(format!("Winkel {}", vertex + 1))
            .id_salt(("angle", vertex))
            .show(ui, |ui| {
                for change in angle_property_editor(ui, property, finished) {
                    events.push(AppIntent::AnglePropertyChanged {
                        polygon: polygon_ref,
                        vertex,
                        change,
                    });
                }
            });
    }
}

fn edge_property_editor(
    ui: &mut egui::Ui,
    property: &EdgeProperty,
    finished: &mut bool,
) -> Vec<EdgePropertyChange> {
    let mut changes = Vec::new();

    let mut show = property.show_edge_length;
    if ui.checkbox(&mut show, "Länge anzeigen").changed() {
        changes.push(EdgePropertyChange::ShowEdgeLength(show));
    }

    let mut curvature = property.curvature;
    ui.horizontal(|ui| {
        ui.label("Krümmung");
        if track(
            ui.add(egui::DragValue::new(&mut curvature).speed(1.0)),
            finished,
        ) {
            changes.push(EdgePropertyChange::Curvature(curvature));
        }
    });

    let mut gap = property.bezier_gap;
    if track(
        ui.add(egui::Slider::new(&mut gap, 0.0..=1.0).text("Lücke")),
        finished,
    ) {
        changes.push(EdgePropertyChange::BezierGap(gap));
    }

    let mut label = property.label_override.clone();
    ui.horizontal(|ui| {
        ui.label("Label");
        if track(ui.text_edit_singleline(&mut label), finished) {
            changes.push(EdgePropertyChange::LabelOverride(label.clone()));
        }
    });

    if let Some(offset) =
        offset_editor(ui, property.label_offset_x, property.label_offset_y, finished)
    {
        changes.push(EdgePropertyChange::LabelOffset(offset));
    }

    let mut font_size = property.label_font_size;
    ui.horizontal(|ui| {
        ui.label("Schriftgröße");
        if track(
            ui.add(egui::DragValue::new(&mut font_size).range(4.0..=96.0)),
            finished,
        ) {
            changes.push(EdgePropertyChange::LabelFontSize(font_size));
        }
    });

    let mut colors = [
        property.segment_color,
        property.bezier_color,
        property.label_color,
    ];
    ui.horizontal(|ui| {
        ui.label("Farben");
        if ui.color_edit_button_rgba_unmultiplied(&mut colors[0]).changed() {
            changes.push(EdgePropertyChange::SegmentColor(colors[0]));
        }
        if ui.color_edit_button_rgba_unmultiplied(&mut colors[1]).changed() {
            changes.push(EdgePropertyChange::BezierColor(colors[1]));
        }
        if ui.color_edit_button_rgba_unmultiplied(&mut colors[2]).changed() {
            changes.push(EdgePropertyChange::LabelColor(colors[2]));
        }
    });

    changes
}

fn angle_property_editor(
    ui: &mut egui::Ui,
    property: &AngleProperty,
    finished: &mut bool,
) -> Vec<AnglePropertyChange> {
    let mut changes = Vec::new();

    let mut show = property.show_angle;
    if ui.checkbox(&mut show, "Winkel anzeigen").changed() {
        changes.push(AnglePropertyChange::ShowAngle(show));
    }

    let mut radius = property.radius;
    ui.horizontal(|ui| {
        ui.label("Radius");
        if track(
            ui.add(egui::DragValue::new(&mut radius).range(1.0..=500.0)),
            finished,
        ) {
            changes.push(AnglePropertyChange::Radius(radius));
        }
    });

    let mut fan_position = property.fan_position;
    if track(
        ui.add(egui::Slider::new(&mut fan_position, 0.0..=1.0).text("Innen ↔ Außen")),
        finished,
    ) {
        changes.push(AnglePropertyChange::FanPosition(fan_position));
    }

    let mut label = property.label_override.clone();
    ui.horizontal(|ui| {
        ui.label("Label");
        if track(ui.text_edit_singleline(&mut label), finished) {
            changes.push(AnglePropertyChange::LabelOverride(label.clone()));
        }
    });

    if let Some(offset) =
        offset_editor(ui, property.label_offset_x, property.label_offset_y, finished)
    {
        changes.push(AnglePropertyChange::LabelOffset(offset));
    }

    let mut font_size = property.label_font_size;
    ui.horizontal(|ui| {
        ui.label("Schriftgröße");
        if track(
            ui.add(egui::DragValue::new(&mut font_size).range(4.0..=96.0)),
            finished,
        ) {
            changes.push(AnglePropertyChange::LabelFontSize(font_size));
        }
    });

    changes
}

fn render_text_properties(
    ui: &mut egui::Ui,
    index: usize,
    text: &TextObject,
    events: &mut Vec<AppIntent>,
    finished: &mut bool,
) {
    ui.label(format!("Text {}", index));
    if let Some(group) = text.group_id {
        ui.label(format!("Gruppe {}", group));
    }
    ui.separator();

    let mut push = |change| events.push(AppIntent::TextPropertyChanged { text: index, change });

    let mut content = text.content.clone();
    if track(ui.text_edit_multiline(&mut content), finished) {
        push(TextPropertyChange::Content(content));
    }

    let mut position = [text.position.x, text.position.y];
    ui.horizontal(|ui| {
        ui.label("Position");
        let x = track(
            ui.add(egui::DragValue::new(&mut position[0]).prefix("x: ")),
            finished,
        );
        let y = track(
            ui.add(egui::DragValue::new(&mut position[1]).prefix("y: ")),
            finished,
        );
        if x || y {
            push(TextPropertyChange::Position(glam::Vec2::from(position)));
        }
    });

    let mut font_size = text.font_size;
    ui.horizontal(|ui| {
        ui.label("Schriftgröße");
        if track(
            ui.add(egui::DragValue::new(&mut font_size).range(4.0..=200.0)),
            finished,
        ) {
            push(TextPropertyChange::FontSize(font_size));
        }
    });

    let mut color = text.color;
    ui.horizontal(|ui| {
        ui.label("Farbe");
        if ui.color_edit_button_rgba_unmultiplied(&mut color).changed() {
            push(TextPropertyChange::Color(color));
        }
    });
}

/// Zwei DragValues für einen Label-Versatz; `Some` bei Änderung.
fn offset_editor(ui: &mut egui::Ui, x: f32, y: f32, finished: &mut bool) -> Option<glam::Vec2> {
    let mut offset = [x, y];
    let changed = ui
        .horizontal(|ui| {
            ui.label("Versatz");
            let dx = track(
                ui.add(egui::DragValue::new(&mut offset[0]).prefix("x: ")),
                finished,
            );
            let dy = track(
                ui.add(egui::DragValue::new(&mut offset[1]).prefix("y: ")),
                finished,
            );
            dx || dy
        })
        .inner;
    changed.then(|| glam::Vec2::from(offset))
}
