// src/gui/actions/refresh.rs
use std::sync::Arc;

use eframe::egui;
use tracing::{ debug, info };

use crate::fetch;
use crate::gui::app::App;
use crate::model::ContextId;
use crate::session::Event;
use crate::store::cache;

/// Switch collections: wipe local edits, show the disk snapshot if there
/// is one, then refresh from the store.
pub fn select_context(app: &mut App, ctx: &egui::Context, context: Option<ContextId>) {
    if !app.session.apply(Event::SelectContext(context)) {
        return;
    }
    app.selected = None;
    app.editor = None;
    app.confirm_delete = None;

    let Some(ctx_id) = app.session.context_id.clone() else {
        app.rebuild_view();
        app.status("Idle");
        return;
    };

    match cache::load_snapshot(&ctx_id) {
        Ok(entries) => {
            info!("cache: loaded {} entries for context {}", entries.len(), ctx_id.as_str());
            let generation = app.session.generation;
            app.apply(Event::SnapshotLoaded { generation, entries });
            app.ensure_enrichment(ctx);
            app.status("Loaded local data");
        }
        Err(e) => {
            debug!("cache: no snapshot for context {} ({e})", ctx_id.as_str());
            app.rebuild_view();
        }
    }

    refresh(app, ctx);
}

/// Bump the generation and fetch the selected context's roster again.
pub fn refresh(app: &mut App, ctx: &egui::Context) {
    let Some(context) = app.session.context_id.clone() else {
        app.status("Select a collection first");
        return;
    };
    app.session.apply(Event::Refresh);
    app.loading = true;
    app.status("Refreshing…");
    info!("store: refresh begin context={}", context.as_str());
    fetch::spawn_snapshot(
        Arc::clone(&app.store),
        app.session.generation,
        context,
        app.tx.clone(),
        ctx,
    );
}
