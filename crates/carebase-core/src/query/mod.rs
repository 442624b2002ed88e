//! Generic list-query engine shared by every record list view.
//!
//! Pipeline: Record Store → Filter Predicate Set → Paginator → visible page
//!
//! Every dashboard list (patients, doctors, appointments, inventory) drives
//! the same engine instead of re-deriving filter/paginate plumbing per view.

mod filter;
mod paginate;

pub use filter::*;
pub use paginate::*;

use serde::{Deserialize, Serialize};

use crate::models::ListRecord;

/// One page of query output, borrowed from the underlying collection.
#[derive(Debug)]
pub struct Page<'a, R> {
    /// Records visible on the current page, in collection order
    pub items: Vec<&'a R>,
    /// Records passing the filter across all pages
    pub filtered_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
}

/// Filter state plus page cursor for one list view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    filter: FilterState,
    paginator: Paginator,
}

impl ListQuery {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            filter: FilterState::new(),
            paginator: Paginator::new(page_size),
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    // Every filter edit jumps back to the first page, matching how the
    // dashboard views behave when an input changes.

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.set_search(search);
        self.paginator.reset();
    }

    pub fn set_field(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.filter.set_field(key, value);
        self.paginator.reset();
    }

    pub fn clear_field(&mut self, key: &str) {
        self.filter.clear_field(key);
        self.paginator.reset();
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        self.filter.set_date_range(range);
        self.paginator.reset();
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.paginator.set_page_size(page_size);
    }

    /// Advance one page over the filtered view of `records`; a no-op on
    /// the last page.
    pub fn next_page<R: ListRecord>(&mut self, records: &[R]) {
        let count = self.filter.apply(records).len();
        self.paginator.next_page(count);
    }

    /// Go back one page; a no-op on the first page.
    pub fn prev_page(&mut self) {
        self.paginator.prev_page();
    }

    /// Evaluate the query: filter, clamp the page cursor, slice.
    pub fn page<'a, R: ListRecord>(&mut self, records: &'a [R]) -> Page<'a, R> {
        let filtered = self.filter.apply(records);
        self.paginator.clamp(filtered.len());
        let total_pages = self.paginator.total_pages(filtered.len());
        let items = self.paginator.slice(&filtered).to_vec();
        Page {
            items,
            filtered_count: filtered.len(),
            current_page: self.paginator.current_page(),
            total_pages,
        }
    }
}
