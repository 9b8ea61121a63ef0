// src/gui/components/mod.rs
//
// One file per panel; each exposes a `draw(ui, app)` (the editor draws
// windows and takes the egui context instead).

pub mod context_panel; // src/gui/components/context_panel.rs
pub mod toolbar;       // src/gui/components/toolbar.rs
pub mod filter_panel;  // src/gui/components/filter_panel.rs
pub mod grid;          // src/gui/components/grid.rs
pub mod detail;        // src/gui/components/detail.rs
pub mod editor;        // src/gui/components/editor.rs
pub mod export_bar;    // src/gui/components/export_bar.rs

use crate::catalog::CatalogCache;
use crate::model::RosterEntry;
use crate::types::TypeTag;

/// Types to display for an entry: the stored columns win, the catalog
/// fills in when the store has none yet.
pub(crate) fn resolved_types(
    entry: &RosterEntry,
    cache: &CatalogCache,
) -> (Option<TypeTag>, Option<TypeTag>) {
    if entry.type1.is_some() {
        return (entry.type1, entry.type2);
    }
    match cache.get(&entry.species) {
        Some(info) => (info.type1(), info.type2()),
        None => (None, None),
    }
}
