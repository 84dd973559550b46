// Pagination: slicing the player list into fixed-size pages and tracking the
// current page.

use serde::Serialize;

/// Page sizes offered to the user.
pub const ROWS_PER_PAGE_OPTIONS: [usize; 5] = [8, 10, 15, 25, 50];

/// Page size used until the user picks another.
pub const DEFAULT_ROWS_PER_PAGE: usize = 8;

/// One page of a list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based page number the items belong to.
    pub page: usize,
    /// 0 when the list is empty.
    pub total_pages: usize,
    pub total_rows: usize,
}

/// Number of pages needed for `total_rows` rows. Zero rows need zero pages.
pub fn total_pages(total_rows: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_rows.div_ceil(page_size)
}

/// Slice `[(page - 1) * page_size, page * page_size)` out of `list`, clamped
/// to the list bounds. A page of 0 is treated as page 1.
pub fn paginate<T>(list: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size).min(list.len());
    let end = page.saturating_mul(page_size).min(list.len());
    Page {
        items: &list[start..end],
        page,
        total_pages: total_pages(list.len(), page_size),
        total_rows: list.len(),
    }
}

// ---------------------------------------------------------------------------
// Pager
// ---------------------------------------------------------------------------

/// Current page and page size for one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pager {
    current_page: usize,
    rows_per_page: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Pager::new(DEFAULT_ROWS_PER_PAGE)
    }
}

impl Pager {
    /// A pager on page 1. A size of 0 falls back to the default size.
    pub fn new(rows_per_page: usize) -> Self {
        Pager {
            current_page: 1,
            rows_per_page: if rows_per_page == 0 {
                DEFAULT_ROWS_PER_PAGE
            } else {
                rows_per_page
            },
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn total_pages(&self, total_rows: usize) -> usize {
        total_pages(total_rows, self.rows_per_page)
    }

    /// Move to page `page`, clamped into `1..=total_pages`.
    pub fn set_page(&mut self, page: usize, total_rows: usize) {
        let last = self.total_pages(total_rows).max(1);
        self.current_page = page.clamp(1, last);
    }

    /// Change the page size and restart at page 1. A size of 0 is ignored.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        if rows_per_page == 0 {
            return;
        }
        self.rows_per_page = rows_per_page;
        self.current_page = 1;
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, total_rows: usize) -> bool {
        self.current_page < self.total_pages(total_rows)
    }

    pub fn next(&mut self, total_rows: usize) {
        if self.has_next(total_rows) {
            self.current_page += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.has_previous() {
            self.current_page -= 1;
        }
    }

    /// The current page of `list`.
    pub fn page<'a, T>(&self, list: &'a [T]) -> Page<'a, T> {
        paginate(list, self.current_page, self.rows_per_page)
    }

    /// Selectable page numbers, `1..=total_pages`.
    pub fn page_numbers(&self, total_rows: usize) -> Vec<usize> {
        (1..=self.total_pages(total_rows)).collect()
    }

    /// 1-based first and last row shown on the current page, or `None` when
    /// there are no rows.
    pub fn row_range(&self, total_rows: usize) -> Option<(usize, usize)> {
        if total_rows == 0 {
            return None;
        }
        let start = (self.current_page - 1) * self.rows_per_page + 1;
        let end = (self.current_page * self.rows_per_page).min(total_rows);
        Some((start.min(total_rows), end))
    }

    /// "17 - 20 of 20" style summary, or "No data".
    pub fn range_label(&self, total_rows: usize) -> String {
        match self.row_range(total_rows) {
            Some((start, end)) => format!("{start} - {end} of {total_rows}"),
            None => "No data".to_string(),
        }
    }

    /// Next entry of [`ROWS_PER_PAGE_OPTIONS`] after the current size,
    /// wrapping around. Sizes not in the list step to the first option.
    pub fn next_rows_option(&self) -> usize {
        match ROWS_PER_PAGE_OPTIONS.iter().position(|&n| n == self.rows_per_page) {
            Some(i) => ROWS_PER_PAGE_OPTIONS[(i + 1) % ROWS_PER_PAGE_OPTIONS.len()],
            None => ROWS_PER_PAGE_OPTIONS[0],
        }
    }

    /// Previous entry of [`ROWS_PER_PAGE_OPTIONS`], wrapping around.
    pub fn previous_rows_option(&self) -> usize {
        let len = ROWS_PER_PAGE_OPTIONS.len();
        match ROWS_PER_PAGE_OPTIONS.iter().position(|&n| n == self.rows_per_page) {
            Some(i) => ROWS_PER_PAGE_OPTIONS[(i + len - 1) % len],
            None => ROWS_PER_PAGE_OPTIONS[0],
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
