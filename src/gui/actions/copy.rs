// src/gui/actions/copy.rs
use eframe::egui;
use tracing::{ debug, info };

use crate::export::to_json_string;
use crate::gui::app::App;
use crate::model::RosterEntry;

/// Clipboard gets the same JSON document Export writes, in view order.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.view.total() == 0 {
        debug!("copy: clicked, but there's nothing to copy");
        app.status("Nothing to copy");
        return;
    }

    let entries: Vec<&RosterEntry> = app.view.ordered().collect();
    let count = entries.len();
    let result = to_json_string(&entries);

    match result {
        Ok(txt) => {
            info!("copy: rows={count}");
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => {
            app.status(format!("Copy error: {e}"));
        }
    }
}
