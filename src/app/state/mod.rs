//! Application State — zentrale Datenhaltung der Edit-Session.

mod app_state;
mod editor;
mod selection;
mod view;

pub use app_state::AppState;
pub use editor::{ActiveDrag, DragState, EditMode, EditorState};
pub use selection::SelectionState;
pub use view::ViewState;
