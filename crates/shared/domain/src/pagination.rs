//! Pagination types for the listing endpoint.

use serde::Deserialize;

use crate::constants::FIRST_PAGE;

/// Paginated response as served by the listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total: u32,
    pub total_pages: u32,
    pub data: Vec<T>,
}

/// Current page number plus the server-reported page count.
///
/// Both start at 1. `total_pages` is whatever the last successful fetch
/// reported, so it is not adjusted for local deletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    current: u32,
    total_pages: u32,
}

impl PageCursor {
    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Previous is disabled exactly on the first page
    pub fn has_previous(&self) -> bool {
        self.current != FIRST_PAGE
    }

    /// Next is disabled on the last reported page, and past it when a
    /// later fetch reports fewer pages (or none at all)
    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }

    /// Move back one page. Returns the new page, or `None` when disabled.
    pub fn previous(&mut self) -> Option<u32> {
        if !self.has_previous() {
            return None;
        }
        self.current -= 1;
        Some(self.current)
    }

    /// Move forward one page. Returns the new page, or `None` when disabled.
    pub fn next(&mut self) -> Option<u32> {
        if !self.has_next() {
            return None;
        }
        self.current += 1;
        Some(self.current)
    }

    /// Record the page count reported by a fetch.
    pub fn set_total_pages(&mut self, total_pages: u32) {
        self.total_pages = total_pages;
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            current: FIRST_PAGE,
            total_pages: FIRST_PAGE,
        }
    }
}
