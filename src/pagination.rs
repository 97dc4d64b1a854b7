//! Page arithmetic for the friends table.

use std::ops::Range;
use thiserror::Error;

use crate::constants::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagerError {
    #[error("Page size must be at least 1")]
    ZeroPageSize,
}

/// Current page of a table with `len` rows.
///
/// The pager does not own the rows; every method that depends on the row
/// count takes it as `len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_index: usize,
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pager {
    pub fn new(page_size: usize) -> Result<Self, PagerError> {
        if page_size == 0 {
            return Err(PagerError::ZeroPageSize);
        }
        Ok(Self { page_index: 0, page_size })
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages; an empty table still has one (empty) page.
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    pub fn can_previous_page(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next_page(&self, len: usize) -> bool {
        self.page_index + 1 < self.page_count(len)
    }

    /// Jump to `page`. A page past the end is ignored and `false` returned.
    pub fn goto_page(&mut self, page: usize, len: usize) -> bool {
        if page >= self.page_count(len) {
            return false;
        }
        self.page_index = page;
        true
    }

    pub fn next_page(&mut self, len: usize) {
        if self.can_next_page(len) {
            self.page_index += 1;
        }
    }

    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn first_page(&mut self) {
        self.page_index = 0;
    }

    pub fn last_page(&mut self, len: usize) {
        self.page_index = self.page_count(len) - 1;
    }

    /// Keep the current page valid after rows were removed.
    pub fn clamp(&mut self, len: usize) {
        self.page_index = self.page_index.min(self.page_count(len) - 1);
    }

    /// Rows shown on the current page, as indices into the full list.
    pub fn page_range(&self, len: usize) -> Range<usize> {
        let start = (self.page_index * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }

    /// The page containing `row`.
    pub fn page_of(&self, row: usize) -> usize {
        row / self.page_size
    }

    /// Change the page size, keeping the first row of the current page in view.
    pub fn set_page_size(&mut self, page_size: usize, len: usize) -> Result<(), PagerError> {
        if page_size == 0 {
            return Err(PagerError::ZeroPageSize);
        }
        let first_row = self.page_index * self.page_size;
        self.page_size = page_size;
        self.page_index = self.page_of(first_row);
        self.clamp(len);
        Ok(())
    }
}
