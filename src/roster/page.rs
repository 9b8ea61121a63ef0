// src/roster/page.rs

use crate::config::consts::{ GRID_COLS, GRID_ROWS };

/// Requested page; the index may be stale (larger than the current result
/// set allows) and is re-clamped on every derivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    pub index: usize,
    pub size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self { index: 0, size: GRID_ROWS * GRID_COLS }
    }
}

/// Resolved slice bounds for one page of a list of `len` items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSlice {
    pub total_pages: usize,
    pub index: usize,
    pub start: usize,
    pub end: usize,
}

impl PageSlice {
    #[inline]
    pub fn len(&self) -> usize { self.end - self.start }
    #[inline]
    pub fn is_empty(&self) -> bool { self.start == self.end }
}

// An all-zero slice would break the `total_pages >= 1` invariant, so the
// default is the resolved empty page, not a derive.
impl Default for PageSlice {
    fn default() -> Self {
        paginate(0, PageState::default())
    }
}

/// `total_pages = max(1, ceil(len/size))`; the index clamps into
/// `[0, total_pages - 1]`; the slice bounds clip to `len`.
pub fn paginate(len: usize, page: PageState) -> PageSlice {
    let size = page.size.max(1);
    let total_pages = len.div_ceil(size).max(1);
    let index = page.index.min(total_pages - 1);
    let start = (index * size).min(len);
    let end = (start + size).min(len);
    PageSlice { total_pages, index, start, end }
}
