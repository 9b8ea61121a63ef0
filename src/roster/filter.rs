// src/roster/filter.rs

use std::collections::BTreeSet;

use crate::model::RosterEntry;
use crate::types::TypeTag;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Benched,
}

impl StatusFilter {
    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Benched => "Benched",
        }
    }
}

/// Status predicate AND type-set predicate. An empty type set matches
/// everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub status: StatusFilter,
    pub types: BTreeSet<TypeTag>,
}

impl FilterSpec {
    pub fn matches(&self, entry: &RosterEntry) -> bool {
        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Active => entry.is_active,
            StatusFilter::Benched => !entry.is_active,
        };
        if !status_ok {
            return false;
        }
        self.types.is_empty()
            || entry.type1.is_some_and(|t| self.types.contains(&t))
            || entry.type2.is_some_and(|t| self.types.contains(&t))
    }

    pub fn is_default(&self) -> bool {
        self.status == StatusFilter::All && self.types.is_empty()
    }
}
