//! Pagination window calculator
//!
//! Maps `(current_page, total_pages)` to the compressed list of page controls:
//!
//! ```text
//! total <= 5          1 2 3 4 5
//! current near start  1 2 3 4 … 10
//! current = 5         1 … 3 4 5 … 10
//! current near end    1 … 7 8 9 10
//! ```

/// Pages shown without compression.
const MAX_VISIBLE: u32 = 5;

/// Interior pages shown between the first and last page.
const INTERIOR: u32 = 3;

/// How far the interior window reaches back from the current page.
const LEAD: u32 = MAX_VISIBLE / 2;

/// One control in the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    Page(u32),
    Ellipsis,
}

/// Computes the page window. Never more than 7 entries.
///
/// `current_page` is clamped into `[1, total_pages]` and `total_pages` is
/// treated as at least 1.
pub fn page_window(current_page: u32, total_pages: u32) -> Vec<PageEntry> {
    let total = total_pages.max(1);
    if total <= MAX_VISIBLE {
        return (1..=total).map(PageEntry::Page).collect();
    }

    let current = current_page.clamp(1, total);
    let mut start = current.saturating_sub(LEAD).max(2);
    let end = (start + INTERIOR - 1).min(total - 1);
    start = (end + 1).saturating_sub(INTERIOR).max(2);

    let mut entries = Vec::with_capacity(7);
    entries.push(PageEntry::Page(1));
    if start > 2 {
        entries.push(PageEntry::Ellipsis);
    }
    entries.extend((start..=end).map(PageEntry::Page));
    if end < total - 1 {
        entries.push(PageEntry::Ellipsis);
    }
    entries.push(PageEntry::Page(total));
    entries
}
