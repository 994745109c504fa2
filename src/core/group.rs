//! Gruppen: eingefrorene Mengen aus Polygonen und Texten.

use std::collections::BTreeSet;

/// Index einer Gruppe in `Document::groups` (bleibt nach Auflösen reserviert).
pub type GroupId = usize;

/// Mitglieder einer Gruppe. Ein Objekt gehört höchstens einer Gruppe an.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Group {
    /// Indizes in `Document::polygons`
    pub polygons: BTreeSet<usize>,
    /// Indizes in `Document::texts`
    pub texts: BTreeSet<usize>,
}

impl Group {
    /// Mindestanzahl an Mitgliedern einer lebenden Gruppe.
    pub const MIN_MEMBERS: usize = 2;

    /// Gesamtzahl der Mitglieder
    pub fn member_count(&self) -> usize {
        self.polygons.len() + self.texts.len()
    }

    /// Entfernt Index `removed` und rückt alle höheren Indizes nach.
    pub(crate) fn forget_index(set: &mut BTreeSet<usize>, removed: usize) {
        *set = set
            .iter()
            .filter(|&&i| i != removed)
            .map(|&i| if i > removed { i - 1 } else { i })
            .collect();
    }
}
