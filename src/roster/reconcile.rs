// src/roster/reconcile.rs

use std::collections::HashSet;

use crate::model::{ ContextId, EntryId, RosterEntry };

/// Merge the server snapshot with local pending adds and tombstones.
///
/// Pending adds belonging to `context` come first, in insertion order; then
/// every server row whose id (string form) matches no pending add, in server
/// order. Ids present in `tombstones` are dropped from both sources. The
/// output never holds two entries with the same id, and a pending add always
/// supersedes the server row it shadows (it carries the newer local edits).
pub fn reconcile(
    server: &[RosterEntry],
    pending: &[RosterEntry],
    tombstones: &HashSet<EntryId>,
    context: &ContextId,
) -> Vec<RosterEntry> {
    let mut out = Vec::with_capacity(pending.len() + server.len());

    // Every pending id shadows its server row, even when the pending entry
    // was moved to another context: the stale row must not resurface here.
    let shadowed: HashSet<&EntryId> = pending.iter().map(|p| &p.id).collect();
    let mut seen: HashSet<&EntryId> = HashSet::with_capacity(pending.len());

    for p in pending {
        if p.context_id != *context {
            continue;
        }
        if tombstones.contains(&p.id) {
            continue;
        }
        if seen.insert(&p.id) {
            out.push(p.clone());
        }
    }

    for row in server {
        if tombstones.contains(&row.id) || shadowed.contains(&row.id) {
            continue;
        }
        if seen.insert(&row.id) {
            out.push(row.clone());
        }
    }

    out
}
