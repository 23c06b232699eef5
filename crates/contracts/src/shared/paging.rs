//! Lazy paging primitives shared by list views.
//!
//! A grid keeps its position as a row offset (`first`) plus a page size
//! (`rows`); remote catalogs address pages 1-based.

use serde::{Deserialize, Serialize};

/// Position of a lazily loaded grid: row offset of the first visible row and
/// the page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub first: usize,
    pub rows: usize,
}

impl PageRequest {
    /// Creates a request; a zero page size is clamped to 1.
    pub fn new(first: usize, rows: usize) -> Self {
        Self {
            first,
            rows: rows.max(1),
        }
    }

    /// Request for the 0-based page `page_index`.
    pub fn for_page(page_index: usize, rows: usize) -> Self {
        let rows = rows.max(1);
        Self::new(page_index.saturating_mul(rows), rows)
    }

    /// 0-based index of the page containing `first`.
    pub fn page_index(&self) -> usize {
        self.first / self.rows.max(1)
    }

    /// 1-based page number as expected by the remote API.
    pub fn remote_page(&self) -> usize {
        self.page_index() + 1
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, 12)
    }
}

/// One fetched page of records. Produced fresh on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_index: usize,
    pub page_size: usize,
    /// Total number of records on the remote side
    pub total_count: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_count: usize) -> Self {
        Self {
            items,
            page_index: request.page_index(),
            page_size: request.rows,
            total_count,
        }
    }
}

/// Number of pages needed to show `total_count` rows, `page_size` at a time.
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}
