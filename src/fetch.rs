// src/fetch.rs
//
// Background fetches for the GUI. Results come back over an mpsc channel
// and are drained on the UI thread; each carries the session generation it
// was launched under so superseded loads can be dropped on arrival. Every
// worker pokes the egui context after sending so the frame wakes up.

use std::{
    sync::{ Arc, atomic::{ AtomicUsize, Ordering }, mpsc::Sender },
    thread,
    time::Duration,
};

use eframe::egui;

use crate::catalog::{ CatalogError, SpeciesCatalog, SpeciesInfo };
use crate::config::consts::{ JITTER_MS, REQUEST_PAUSE_MS, WORKERS };
use crate::model::{ ContextId, ContextRef, RosterEntry };
use crate::store::{ RosterStore, StoreError };

pub enum FetchMsg {
    Contexts(Result<Vec<ContextRef>, StoreError>),
    Snapshot {
        generation: u64,
        context: ContextId,
        result: Result<Vec<RosterEntry>, StoreError>,
    },
    Species {
        generation: u64,
        species: String,
        result: Result<SpeciesInfo, CatalogError>,
    },
}

pub fn spawn_contexts(store: Arc<dyn RosterStore>, tx: Sender<FetchMsg>, ctx: &egui::Context) {
    let ctx = ctx.clone();
    thread::spawn(move || {
        let result = store.contexts();
        let _ = tx.send(FetchMsg::Contexts(result));
        ctx.request_repaint();
    });
}

pub fn spawn_snapshot(
    store: Arc<dyn RosterStore>,
    generation: u64,
    context: ContextId,
    tx: Sender<FetchMsg>,
    ctx: &egui::Context,
) {
    let ctx = ctx.clone();
    thread::spawn(move || {
        let result = store.fetch(&context);
        let _ = tx.send(FetchMsg::Snapshot { generation, context, result });
        ctx.request_repaint();
    });
}

/// One-off lookup (editor validation).
pub fn spawn_species(
    catalog: Arc<dyn SpeciesCatalog>,
    generation: u64,
    species: String,
    tx: Sender<FetchMsg>,
    ctx: &egui::Context,
) {
    let ctx = ctx.clone();
    thread::spawn(move || {
        let result = catalog.lookup(&species);
        let _ = tx.send(FetchMsg::Species { generation, species, result });
        ctx.request_repaint();
    });
}

/// Warm the catalog for every species named in a fresh snapshot. A small
/// worker pool walks the list via a shared cursor; results stream back one
/// by one, so cards fill in as they land.
pub fn prefetch_species(
    catalog: Arc<dyn SpeciesCatalog>,
    generation: u64,
    species: Vec<String>,
    tx: Sender<FetchMsg>,
    ctx: &egui::Context,
) {
    if species.is_empty() {
        return;
    }

    let list = Arc::new(species);
    let cursor = Arc::new(AtomicUsize::new(0));
    let workers = WORKERS.min(list.len()).max(1);

    for _ in 0..workers {
        let list = Arc::clone(&list);
        let idx = Arc::clone(&cursor);
        let catalog = Arc::clone(&catalog);
        let tx = tx.clone();
        let ctx = ctx.clone();

        thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= list.len() {
                    break;
                }
                let name = list[i].clone();
                let result = catalog.lookup(&name);
                if tx.send(FetchMsg::Species { generation, species: name, result }).is_err() {
                    break; // UI is gone
                }
                ctx.request_repaint();
                let jitter = (i as u64) % JITTER_MS;
                thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS + jitter)); // be polite
            }
        });
    }
}
