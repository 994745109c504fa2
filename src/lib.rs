//! Shape-Annotation-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, EditMode, ViewState};
pub use core::{
    Camera2D, Document, EditError, Group, GroupId, Polygon, PolygonRef, TextObject, Vertex,
};
pub use shared::{EditorOptions, RenderScene};
