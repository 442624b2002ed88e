//! Paginator: page count and the visible slice of a filtered collection.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Items-per-page setting; `All` shows the whole filtered set on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSize {
    Fixed(NonZeroUsize),
    All,
}

impl PageSize {
    /// Fixed page size, clamped to at least one item per page.
    pub fn fixed(n: usize) -> Self {
        match NonZeroUsize::new(n) {
            Some(n) => PageSize::Fixed(n),
            None => PageSize::Fixed(NonZeroUsize::MIN),
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::fixed(10)
    }
}

/// Tracks the current page and slices filtered collections.
///
/// Invariant: `current_page` stays within `[1, total_pages]`; an empty
/// collection still renders as page 1 of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginator {
    current_page: usize,
    page_size: PageSize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl Paginator {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            current_page: 1,
            page_size,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    fn per_page(&self, total: usize) -> usize {
        match self.page_size {
            PageSize::Fixed(n) => n.get(),
            // "All" collapses to a single page covering everything.
            PageSize::All => total.max(1),
        }
    }

    /// Number of pages, never less than one.
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.per_page(total)).max(1)
    }

    /// Changing the page size resets to the first page.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.current_page = 1;
    }

    /// Jump back to the first page (used whenever a filter changes).
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Pull the current page back into range after the collection shrank.
    pub fn clamp(&mut self, total: usize) {
        let total_pages = self.total_pages(total);
        if self.current_page > total_pages {
            self.current_page = total_pages;
        }
    }

    /// Advance one page; a no-op on the last page.
    pub fn next_page(&mut self, total: usize) {
        if self.current_page < self.total_pages(total) {
            self.current_page += 1;
        }
    }

    /// Go back one page; a no-op on the first page.
    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// The visible slice of `items` for the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let per_page = self.per_page(items.len());
        let start = (self.current_page - 1) * per_page;
        if start >= items.len() {
            return &[];
        }
        let end = (start + per_page).min(items.len());
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_floors_at_one() {
        let paginator = Paginator::new(PageSize::fixed(10));
        assert_eq!(paginator.total_pages(0), 1);
        assert_eq!(paginator.total_pages(1), 1);
        assert_eq!(paginator.total_pages(10), 1);
        assert_eq!(paginator.total_pages(11), 2);
    }

    #[test]
    fn test_zero_page_size_clamps_to_one() {
        let paginator = Paginator::new(PageSize::fixed(0));
        assert_eq!(paginator.total_pages(3), 3);
    }

    #[test]
    fn test_slice_bounds() {
        let items: Vec<u32> = (0..14).collect();
        let mut paginator = Paginator::new(PageSize::fixed(10));
        assert_eq!(paginator.slice(&items), &items[0..10]);

        paginator.next_page(items.len());
        assert_eq!(paginator.slice(&items), &items[10..14]);
    }

    #[test]
    fn test_navigation_noops_at_boundaries() {
        let mut paginator = Paginator::new(PageSize::fixed(10));
        paginator.prev_page();
        assert_eq!(paginator.current_page(), 1);

        paginator.next_page(14);
        assert_eq!(paginator.current_page(), 2);
        paginator.next_page(14);
        assert_eq!(paginator.current_page(), 2);
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let mut paginator = Paginator::new(PageSize::fixed(5));
        paginator.next_page(20);
        paginator.next_page(20);
        assert_eq!(paginator.current_page(), 3);

        paginator.set_page_size(PageSize::fixed(20));
        assert_eq!(paginator.current_page(), 1);
    }

    #[test]
    fn test_all_is_a_single_page() {
        let items: Vec<u32> = (0..57).collect();
        let mut paginator = Paginator::new(PageSize::All);
        assert_eq!(paginator.total_pages(items.len()), 1);
        assert_eq!(paginator.slice(&items).len(), 57);
        paginator.next_page(items.len());
        assert_eq!(paginator.current_page(), 1);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut paginator = Paginator::new(PageSize::fixed(10));
        paginator.next_page(30);
        paginator.next_page(30);
        assert_eq!(paginator.current_page(), 3);

        paginator.clamp(4);
        assert_eq!(paginator.current_page(), 1);
    }

    #[test]
    fn test_empty_collection_slices_empty() {
        let items: Vec<u32> = Vec::new();
        let paginator = Paginator::new(PageSize::fixed(10));
        assert!(paginator.slice(&items).is_empty());
        assert_eq!(paginator.current_page(), 1);
        assert_eq!(paginator.total_pages(0), 1);
    }
}
