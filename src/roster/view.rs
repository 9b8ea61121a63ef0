// src/roster/view.rs
//
// Derived view over the session record. Owns the reconciled list and a
// projection of kept row indices (filter + search + sort applied), plus the
// resolved page slice. Rebuilt wholesale whenever any input changes; nothing
// here is mutated incrementally.

use crate::model::{ EntryId, RosterEntry };
use crate::session::Session;

use super::{ page::{ self, PageSlice }, search, sort };

#[derive(Clone, Debug, Default)]
pub struct RosterView {
    /// Reconciled entries (pending + server, tombstones removed).
    merged: Vec<RosterEntry>,
    /// Positions of kept rows in `merged`, in final display order.
    row_ix: Vec<usize>,
    page: PageSlice,
}

impl RosterView {
    /// Run the whole pipeline over the session record.
    pub fn build(session: &Session) -> RosterView {
        let Some(context) = session.context_id.as_ref() else {
            return RosterView::default();
        };

        let merged = super::reconcile(
            &session.snapshot,
            &session.pending,
            &session.tombstones,
            context,
        );

        let needle = search::normalize(&session.query);
        let mut row_ix: Vec<usize> = merged
            .iter()
            .enumerate()
            .filter(|(_, e)| session.filter.matches(e))
            .filter(|(_, e)| needle.is_empty() || search::matches(e, &needle))
            .map(|(i, _)| i)
            .collect();

        // Stable sort keeps the reconciled order for equal keys.
        let mode = session.sort.mode;
        if mode != sort::SortMode::None {
            row_ix.sort_by(|&a, &b| sort::compare(mode, &merged[a], &merged[b]));
        }

        let page = page::paginate(row_ix.len(), session.page);

        RosterView { merged, row_ix, page }
    }

    /// Rows surviving filter + search (pre-pagination count).
    pub fn total(&self) -> usize {
        self.row_ix.len()
    }

    pub fn page(&self) -> PageSlice {
        self.page
    }

    /// Entries on the current page, in display order.
    pub fn visible(&self) -> impl Iterator<Item = &RosterEntry> {
        self.row_ix[self.page.start..self.page.end]
            .iter()
            .map(|&ix| &self.merged[ix])
    }

    /// Full ordered result, pre-pagination (export consumes this).
    pub fn ordered(&self) -> impl Iterator<Item = &RosterEntry> {
        self.row_ix.iter().map(|&ix| &self.merged[ix])
    }

    /// Lookup by id in the reconciled list (not restricted to the page),
    /// so a detail panel survives page flips.
    pub fn find(&self, id: &EntryId) -> Option<&RosterEntry> {
        self.merged.iter().find(|e| e.id == *id)
    }

    pub fn is_empty(&self) -> bool {
        self.row_ix.is_empty()
    }
}
