// src/gui/app.rs
use std::{
    error::Error,
    sync::{ Arc, mpsc::{ self, Receiver, Sender } },
};

use eframe::egui;
use tracing::{ debug, info, warn };

use crate::{
    catalog::{ CatalogCache, RestCatalog, SpeciesCatalog },
    config::state::AppState,
    fetch::{ self, FetchMsg },
    model::{ ContextRef, EntryId, RosterEntry },
    roster::RosterView,
    session::{ Event, Session },
    store::{ self, RestStore, RosterStore },
};

use super::components::{ self, editor::Editor };

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Pokebox",
        options,
        Box::new(|cc| Ok(Box::new(App::new(AppState::default(), &cc.egui_ctx)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub session: Session,
    // derived from `session`, rebuilt on every dirty apply
    pub view: RosterView,
    pub state: AppState,

    pub contexts: Vec<ContextRef>,

    // services + background plumbing
    pub store: Arc<dyn RosterStore>,
    pub catalog: Arc<dyn SpeciesCatalog>,
    pub cache: CatalogCache,
    pub tx: Sender<FetchMsg>,
    pub rx: Receiver<FetchMsg>,

    // transient UI state
    pub status: String,
    pub loading: bool,
    pub search_text: String,
    pub show_filters: bool,
    pub selected: Option<EntryId>,
    pub editor: Option<Editor>,
    pub confirm_delete: Option<EntryId>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,
}

impl App {
    pub fn new(state: AppState, egui_ctx: &egui::Context) -> Self {
        let (tx, rx) = mpsc::channel();
        let store: Arc<dyn RosterStore> = Arc::new(RestStore::new());
        let catalog: Arc<dyn SpeciesCatalog> = Arc::new(RestCatalog::new());

        // Context list: cached copy first, then a background refresh.
        let mut status = s!("Idle");
        let contexts = match store::cache::load_contexts() {
            Ok(v) if !v.is_empty() => {
                info!("cache: loaded {} contexts", v.len());
                status = s!("Loaded local data");
                v
            }
            Ok(_) => Vec::new(),
            Err(e) => {
                debug!("cache: no context list ({e})");
                Vec::new()
            }
        };
        fetch::spawn_contexts(Arc::clone(&store), tx.clone(), egui_ctx);

        let mut session = Session::new();
        session.page.size = state.options.grid.page_size();
        let view = RosterView::build(&session);

        // initial out path text
        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        info!("init: contexts={}, page_size={}", contexts.len(), session.page.size);

        Self {
            session,
            view,
            state,
            contexts,
            store,
            catalog,
            cache: CatalogCache::new(),
            tx,
            rx,
            status,
            loading: false,
            search_text: s!(),
            show_filters: false,
            selected: None,
            editor: None,
            confirm_delete: None,
            out_path_text,
            out_path_dirty: false,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Route an event through the session; rebuild the view if it changed.
    pub fn apply(&mut self, event: Event) {
        if self.session.apply(event) {
            self.rebuild_view();
        }
    }

    pub fn rebuild_view(&mut self) {
        self.view = RosterView::build(&self.session);
        // A selection that no longer resolves was deleted (or belongs to
        // another context); filtered-out ids still resolve and stay.
        if let Some(id) = &self.selected {
            if self.view.find(id).is_none() {
                self.selected = None;
            }
        }
    }

    pub fn selected_entry(&self) -> Option<&RosterEntry> {
        self.selected.as_ref().and_then(|id| self.view.find(id))
    }

    /// Display name of the selected context for the picker button.
    pub fn context_label(&self) -> String {
        match &self.session.context_id {
            Some(id) => self
                .contexts
                .iter()
                .find(|c| c.id == *id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| s!(id.as_str())),
            None => s!("Select a collection"),
        }
    }

    /// Claim and launch catalog lookups for every species in the current
    /// session that has no cache slot yet.
    pub fn ensure_enrichment(&mut self, ctx: &egui::Context) {
        let mut wanted: Vec<String> = Vec::new();
        for entry in self.session.snapshot.iter().chain(self.session.pending.iter()) {
            let key = entry.species.trim().to_lowercase();
            if self.cache.begin(&key) {
                wanted.push(key);
            }
        }
        if !wanted.is_empty() {
            debug!("catalog: prefetch {} species", wanted.len());
            fetch::prefetch_species(
                Arc::clone(&self.catalog),
                self.session.generation,
                wanted,
                self.tx.clone(),
                ctx,
            );
        }
    }

    /* ---------- message pump ---------- */

    fn pump_messages(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                FetchMsg::Contexts(Ok(contexts)) => {
                    match store::cache::save_contexts(&contexts) {
                        Ok(p) => debug!("cache: saved context list to {}", p.display()),
                        Err(e) => warn!("cache: context list save failed: {e}"),
                    }
                    info!("store: {} contexts", contexts.len());
                    self.contexts = contexts;
                }
                FetchMsg::Contexts(Err(e)) => {
                    warn!("store: context list failed: {e}");
                    if self.contexts.is_empty() {
                        self.status(format!("Error: {e}"));
                    }
                }

                FetchMsg::Snapshot { generation, context, result } => {
                    if generation != self.session.generation {
                        debug!("fetch: dropped stale snapshot for context {}", context.as_str());
                        continue;
                    }
                    self.loading = false;
                    match result {
                        Ok(entries) => {
                            if let Err(e) = store::cache::save_snapshot(&context, &entries) {
                                warn!("cache: snapshot save failed: {e}");
                            }
                            let n = entries.len();
                            info!("store: snapshot context={} entries={n}", context.as_str());
                            self.apply(Event::SnapshotLoaded { generation, entries });
                            self.status(format!("Ready: {n} entries"));
                            self.ensure_enrichment(ctx);
                        }
                        Err(e) => {
                            // Whatever the view shows (disk cache or the last
                            // snapshot) stays up; it is stale but valid.
                            warn!("store: snapshot failed: {e}");
                            self.status(format!("Error: {e}"));
                        }
                    }
                }

                FetchMsg::Species { generation, species, result } => {
                    if generation != self.session.generation {
                        debug!("fetch: dropped stale species result for {species}");
                        self.cache.cancel(&species);
                        continue;
                    }
                    if let Err(e) = &result {
                        debug!("catalog: {species}: {e}");
                    }
                    self.cache.resolve(&species, result);
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pump_messages(ctx);

        egui::TopBottomPanel::top("context_bar").show(ctx, |ui| {
            components::context_panel::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("export_bar").show(ctx, |ui| {
            components::export_bar::draw(ui, self);
        });

        if self.state.gui.show_detail && self.selected.is_some() {
            egui::SidePanel::right("detail")
                .resizable(false)
                .default_width(260.0)
                .show(ctx, |ui| {
                    components::detail::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            components::toolbar::draw(ui, self);

            if self.show_filters {
                ui.separator();
                components::filter_panel::draw(ui, self);
            }

            ui.separator();

            components::grid::draw(ui, self);
        });

        // Overlays last so they stack on top of the panels.
        components::editor::draw(ctx, self);
        components::editor::draw_confirm_delete(ctx, self);
    }
}
