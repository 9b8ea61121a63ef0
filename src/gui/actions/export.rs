// src/gui/actions/export.rs
use tracing::{ debug, error, info };

use crate::export::write_export;
use crate::gui::app::App;
use crate::model::RosterEntry;

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        info!(
            "export: out path set to {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
        app.out_path_dirty = false;
    }

    if app.view.total() == 0 {
        debug!("export: clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let entries: Vec<&RosterEntry> = app.view.ordered().collect();
    let count = entries.len();
    info!("export: begin rows={count}");
    let result = write_export(&app.state.options.export, &entries);

    let status_msg = match result {
        Ok(path) => {
            info!("export: OK count={count} path={}", path.display());
            format!("Exported {count} entries. {}", path.display())
        }
        Err(e) => {
            error!("export: {e}");
            format!("Export error: {e}")
        }
    };
    app.status(status_msg);
}
