// src/roster/sort.rs
//
// The two-button sort control as an explicit state machine. `prior` is
// remembered so the alphabetical cycle can hand back whatever mode it
// interrupted (None or RecentFirst).

use std::cmp::Ordering;

use crate::model::RosterEntry;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMode {
    #[default]
    None,
    RecentFirst,
    AlphaAscending,
    AlphaDescending,
}

impl SortMode {
    #[inline]
    pub fn is_alpha(self) -> bool {
        matches!(self, SortMode::AlphaAscending | SortMode::AlphaDescending)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    pub mode: SortMode,
    pub prior: SortMode,
}

impl SortState {
    pub fn toggle(self, toggle: SortToggle) -> SortState {
        let (mode, prior) = transition(self.mode, self.prior, toggle);
        SortState { mode, prior }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortToggle {
    Recency,
    Alpha,
}

/// Pure transition function for the sort control.
///
/// Recency: None ⇄ RecentFirst; from an alpha mode it remembers that mode
/// and jumps to RecentFirst.
/// Alpha: from any non-alpha mode S it remembers S and enters ascending;
/// ascending flips to descending; descending returns to the remembered mode.
pub fn transition(mode: SortMode, prior: SortMode, toggle: SortToggle) -> (SortMode, SortMode) {
    use SortMode::*;
    match toggle {
        SortToggle::Recency => match mode {
            None => (RecentFirst, prior),
            RecentFirst => (None, prior),
            AlphaAscending | AlphaDescending => (RecentFirst, mode),
        },
        SortToggle::Alpha => match mode {
            None | RecentFirst => (AlphaAscending, mode),
            AlphaAscending => (AlphaDescending, prior),
            AlphaDescending => (prior, prior),
        },
    }
}

/// Comparator for the current mode. `SortMode::None` must not be sorted at
/// all (the reconciled order stands); callers skip the sort in that case.
pub fn compare(mode: SortMode, a: &RosterEntry, b: &RosterEntry) -> Ordering {
    match mode {
        SortMode::None => Ordering::Equal,
        // Newest first; entries without a timestamp sort as earliest.
        SortMode::RecentFirst => b.created_at.cmp(&a.created_at),
        SortMode::AlphaAscending => a.sort_key().cmp(&b.sort_key()),
        SortMode::AlphaDescending => b.sort_key().cmp(&a.sort_key()),
    }
}
