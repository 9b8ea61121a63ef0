// src/roster/mod.rs
//
// The derivation pipeline: server snapshot + local pending adds + local
// tombstones → reconciled list → filter → search → sort → page slice.
// Every stage is a pure function; the composed view is rebuilt wholesale
// (see view.rs) rather than mutated incrementally.

pub mod reconcile;
pub mod filter;
pub mod search;
pub mod sort;
pub mod page;
pub mod view;

pub use reconcile::reconcile;
pub use filter::{ FilterSpec, StatusFilter };
pub use sort::{ SortMode, SortState, SortToggle, transition };
pub use page::{ PageSlice, PageState, paginate };
pub use view::RosterView;
