//! Offset/limit pagination math
//!
//! Pages are 1-indexed. The total page count is derived from the catalog
//! count the list endpoint reports, so it is 0 until the first page loads.

use serde::Serialize;

/// Entries per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Pages shown around the current one before the window collapses
const WINDOW_PAGES: u64 = 5;

/// `ceil(total_count / page_size)`; 0 for a zero page size
pub fn total_pages(total_count: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// Offset of the first entry on `page`, or `None` past `u64::MAX`
pub fn checked_page_offset(page: u64, page_size: u64) -> Option<u64> {
    page.saturating_sub(1).checked_mul(page_size)
}

/// Offset of the first entry on `page`, saturating at `u64::MAX`
pub fn page_offset(page: u64, page_size: u64) -> u64 {
    checked_page_offset(page, page_size).unwrap_or(u64::MAX)
}

/// Whether `page` lies in `[1, total_pages]`
pub fn is_page_in_range(page: u64, total_pages: u64) -> bool {
    page >= 1 && page <= total_pages
}

/// Pagination metadata for list output
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_count: u64,
    pub page_size: u64,
    pub next_page_command: Option<String>,
    pub prev_page_command: Option<String>,
}

/// Build page metadata with navigation hints for the `list` command
pub fn page_info(current_page: u64, page_size: u64, total_count: u64) -> PageInfo {
    let total = total_pages(total_count, page_size);

    let next_page_command = if current_page < total {
        Some(format!(
            "pokedex list --page {} --limit {page_size}",
            current_page + 1
        ))
    } else {
        None
    };

    let prev_page_command = if current_page > 1 {
        Some(format!(
            "pokedex list --page {} --limit {page_size}",
            current_page - 1
        ))
    } else {
        None
    };

    PageInfo {
        current_page,
        total_pages: total,
        total_count,
        page_size,
        next_page_command,
        prev_page_command,
    }
}

/// One slot in the pagination bar
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(u64),
    Gap,
}

/// Compact pagination bar: first, a window around current, last.
///
/// Short catalogs list every page. Longer ones always show the first and
/// last page, the pages adjacent to `current`, and a gap marker wherever
/// pages were skipped.
pub fn visible_pages(current: u64, total: u64) -> Vec<PageMarker> {
    if total <= WINDOW_PAGES + 2 {
        return (1..=total).map(PageMarker::Page).collect();
    }

    let mut pages = vec![PageMarker::Page(1)];

    if current > 3 {
        pages.push(PageMarker::Gap);
    }

    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total - 1);
    pages.extend((start..=end).map(PageMarker::Page));

    if current + 2 < total {
        pages.push(PageMarker::Gap);
    }

    pages.push(PageMarker::Page(total));
    pages
}
