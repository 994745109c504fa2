//! Handler für Gruppieren und Auflösen.

use crate::app::use_cases;
use crate::app::AppState;

/// Gruppiert die Selektion.
pub fn group_selection(state: &mut AppState) {
    use_cases::selection::group_selection(state);
}

/// Löst die selektierte Gruppe auf.
pub fn ungroup_selection(state: &mut AppState) {
    use_cases::selection::ungroup_selection(state);
}
