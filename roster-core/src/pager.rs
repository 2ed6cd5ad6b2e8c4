//! Page window tracking for the local collection view.
//!
//! Pages are 1-based. Movement and clamping never error: out-of-range
//! indices are pulled back to the nearest valid page.

use std::ops::Range;

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Tracks the visible page over a collection of `count` records.
///
/// The page size is fixed at construction; the current page moves through
/// [`next`](Pager::next)/[`previous`](Pager::previous) and is re-clamped by
/// the owner after removals. Invariant: `current <= total_pages(count)`
/// whenever the owner keeps `count` and the pager in step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    current: usize,
}

impl Pager {
    /// Create a pager on page 1. A zero page size is bumped to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current: 1,
        }
    }

    /// Records per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The current page (1-based).
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of pages needed for `count` records (at least 1).
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size).max(1)
    }

    /// Advance one page; no-op on the last page.
    pub fn next(&mut self, count: usize) {
        if self.current < self.total_pages(count) {
            self.current += 1;
        }
    }

    /// Go back one page; no-op on page 1.
    pub fn previous(&mut self) {
        if self.current > 1 {
            self.current -= 1;
        }
    }

    /// Pull the current page back inside `[1, total_pages(count)]`.
    ///
    /// Call after removals so the window never points past the end.
    pub fn clamp(&mut self, count: usize) {
        self.current = self.current.min(self.total_pages(count));
    }

    /// Index range of the records visible on the current page.
    ///
    /// Always a valid slice range for a collection of length `count`; the
    /// final page may be shorter than the page size.
    pub fn window(&self, count: usize) -> Range<usize> {
        let start = ((self.current - 1) * self.page_size).min(count);
        let end = (start + self.page_size).min(count);
        start..end
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_page_one() {
        let pager = Pager::new(3);
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn zero_page_size_is_bumped() {
        let pager = Pager::new(0);
        assert_eq!(pager.page_size(), 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        let pager = Pager::new(3);
        assert_eq!(pager.total_pages(0), 1);
        assert_eq!(pager.total_pages(3), 1);
        assert_eq!(pager.total_pages(4), 2);
        assert_eq!(pager.total_pages(10), 4);
    }

    #[test]
    fn next_stops_at_last_page() {
        let mut pager = Pager::new(3);
        pager.next(7); // -> 2
        pager.next(7); // -> 3
        pager.next(7); // no-op, 3 is the last page
        assert_eq!(pager.current(), 3);
    }

    #[test]
    fn previous_stops_at_page_one() {
        let mut pager = Pager::new(3);
        pager.previous();
        assert_eq!(pager.current(), 1);

        pager.next(10);
        pager.previous();
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn windows_partition_the_collection_in_order() {
        let mut pager = Pager::new(3);
        let count = 8;

        let mut seen: Vec<usize> = Vec::new();
        for _ in 0..pager.total_pages(count) {
            seen.extend(pager.window(count));
            pager.next(count);
        }

        assert_eq!(seen, (0..count).collect::<Vec<_>>());
    }

    #[test]
    fn window_never_exceeds_page_size() {
        let mut pager = Pager::new(3);
        pager.next(4);
        assert_eq!(pager.window(4), 3..4);
        assert!(pager.window(4).len() <= pager.page_size());
    }

    #[test]
    fn clamp_pulls_current_back_after_removals() {
        let mut pager = Pager::new(3);
        pager.next(4); // page 2 of 2

        // Collection shrinks to 3 records: only one page remains.
        pager.clamp(3);
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn clamp_on_empty_collection_resets_to_page_one() {
        let mut pager = Pager::new(3);
        pager.next(6);
        pager.clamp(0);
        assert_eq!(pager.current(), 1);
        assert_eq!(pager.window(0), 0..0);
    }

    #[test]
    fn default_page_size_is_three() {
        assert_eq!(Pager::default().page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(DEFAULT_PAGE_SIZE, 3);
    }
}
