// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see the action functions.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod mutate;  // src/gui/actions/mutate.rs
mod refresh; // src/gui/actions/refresh.rs

pub use copy::copy;
pub use export::export;
pub use mutate::{ delete_entry, save_editor };
pub use refresh::{ refresh, select_context };
