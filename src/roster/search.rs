// src/roster/search.rs

use crate::model::RosterEntry;

/// Canonical query form: trimmed and lowercased. Empty means "match all".
pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Case-insensitive substring match over nickname OR species.
/// `needle` must already be normalized; a missing nickname behaves as "".
pub fn matches(entry: &RosterEntry, needle: &str) -> bool {
    entry
        .nickname
        .as_deref()
        .unwrap_or("")
        .to_lowercase()
        .contains(needle)
        || entry.species.to_lowercase().contains(needle)
}
