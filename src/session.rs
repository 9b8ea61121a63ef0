// src/session.rs
//
// Single source of truth for everything the roster view derives from.
// All mutation goes through `apply`, which returns whether the derived
// view must be rebuilt; nothing else in the app touches these fields
// except to read them. The page-reset policy and the stale-fetch
// generation check both live here so no caller can get them wrong.

use std::collections::HashSet;

use tracing::debug;

use crate::model::{ ContextId, EntryId, RosterEntry };
use crate::roster::{ FilterSpec, PageState, SortState, SortToggle };

#[derive(Clone, Debug, Default)]
pub struct Session {
    /// Selected collection; None shows the empty prompt.
    pub context_id: Option<ContextId>,

    /// Last server snapshot for the selected context (may be disk-cached).
    pub snapshot: Vec<RosterEntry>,

    /// Locally created or edited entries not yet confirmed by a reload.
    pub pending: Vec<RosterEntry>,

    /// Locally deleted ids, suppressed until the next reload.
    pub tombstones: HashSet<EntryId>,

    pub filter: FilterSpec,
    pub query: String,
    pub sort: SortState,
    pub page: PageState,

    /// Bumped on context switch and explicit refresh. Fetches launched
    /// under an older generation are discarded on arrival.
    pub generation: u64,
}

/// Everything that can happen to a session.
#[derive(Clone, Debug)]
pub enum Event {
    /// Select another collection (None clears the selection).
    SelectContext(Option<ContextId>),
    /// Explicit reload request; only bumps the generation.
    Refresh,
    /// A snapshot fetch completed. Stale generations are dropped whole.
    SnapshotLoaded { generation: u64, entries: Vec<RosterEntry> },
    /// The store confirmed a create/update; the row becomes a pending add.
    EntrySaved(RosterEntry),
    /// The store confirmed a delete; the id becomes a tombstone.
    EntryDeleted(EntryId),
    SetFilter(FilterSpec),
    SetQuery(String),
    ToggleSort(SortToggle),
    SetPageIndex(usize),
    SetPageSize(usize),
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event; returns true when the derived view is dirty.
    pub fn apply(&mut self, event: Event) -> bool {
        match event {
            Event::SelectContext(context) => {
                if self.context_id == context {
                    return false;
                }
                // Local edits belong to the old context's view; drop them
                // wholesale rather than letting them leak across.
                self.context_id = context;
                self.snapshot.clear();
                self.pending.clear();
                self.tombstones.clear();
                self.page.index = 0;
                self.generation += 1;
                true
            }

            Event::Refresh => {
                self.generation += 1;
                false
            }

            Event::SnapshotLoaded { generation, entries } => {
                if generation != self.generation {
                    debug!(
                        "session: dropped stale snapshot (gen {}, current {})",
                        generation, self.generation
                    );
                    return false;
                }
                // A reload confirms (or supersedes) the pending adds it
                // contains; the rest raced the fetch and stay pending so
                // they do not flicker out of the view.
                let confirmed: HashSet<&EntryId> = entries.iter().map(|e| &e.id).collect();
                self.pending.retain(|p| !confirmed.contains(&p.id));
                self.tombstones.clear();
                self.snapshot = entries;
                self.page.index = 0;
                true
            }

            Event::EntrySaved(entry) => {
                // Upsert: an edit replaces the earlier pending add in place
                // so the row keeps its slot; a create appends.
                match self.pending.iter_mut().find(|p| p.id == entry.id) {
                    Some(slot) => *slot = entry,
                    None => self.pending.push(entry),
                }
                self.page.index = 0;
                true
            }

            Event::EntryDeleted(id) => {
                let had_pending = self.pending.iter().any(|p| p.id == id);
                if had_pending {
                    self.pending.retain(|p| p.id != id);
                    self.page.index = 0;
                }
                self.tombstones.insert(id);
                true
            }

            Event::SetFilter(filter) => {
                if self.filter == filter {
                    return false;
                }
                self.filter = filter;
                self.page.index = 0;
                true
            }

            Event::SetQuery(query) => {
                if self.query == query {
                    return false;
                }
                self.query = query;
                self.page.index = 0;
                true
            }

            Event::ToggleSort(toggle) => {
                let next = self.sort.toggle(toggle);
                if next == self.sort {
                    return false;
                }
                self.sort = next;
                self.page.index = 0;
                true
            }

            Event::SetPageIndex(index) => {
                if self.page.index == index {
                    return false;
                }
                self.page.index = index;
                true
            }

            Event::SetPageSize(size) => {
                let size = size.max(1);
                if self.page.size == size {
                    return false;
                }
                self.page = PageState { index: 0, size };
                true
            }
        }
    }
}
