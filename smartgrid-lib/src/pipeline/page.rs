//! Paginate stage: fixed-size windows over the sorted sequence

use super::VisibleRow;

/// Default page size when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pagination state: a 1-based page index over fixed-size windows.
///
/// When disabled, the paginate stage passes the full sorted sequence
/// through. The page index is deliberately *not* clamped on
/// [`set_page`](PaginationState::set_page): a page past the end yields an
/// empty visible slice rather than an error, matching the silently-normalized
/// behavior of the rest of the pipeline. The clamped
/// [`next_page`](PaginationState::next_page) /
/// [`prev_page`](PaginationState::prev_page) helpers are what UI
/// prev/next affordances should call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    page: usize,
    page_size: usize,
    enabled: bool,
}

impl PaginationState {
    /// Creates pagination state on page 1 with the given page size
    /// (clamped to at least 1).
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            enabled: true,
        }
    }

    /// Returns the current 1-based page index.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns the page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns `true` if pagination is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Jumps to a page. Out-of-range values are accepted and yield an empty
    /// slice; a page of 0 is bumped to 1.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Sets the page size, clamped to at least 1.
    ///
    /// The page index is left alone; if the new size pushes it past the end
    /// the slice comes back empty until the caller navigates.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    /// Enables or disables pagination.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Advances one page, clamped to `total_pages`.
    pub fn next_page(&mut self, total_pages: usize) {
        if self.page < total_pages {
            self.page += 1;
        }
    }

    /// Goes back one page, clamped to page 1.
    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Jumps to the first page.
    pub fn first_page(&mut self) {
        self.page = 1;
    }

    /// Jumps to the last page.
    pub fn last_page(&mut self, total_pages: usize) {
        self.page = total_pages.max(1);
    }

    /// Resets to page 1.
    pub fn reset(&mut self) {
        self.page = 1;
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Returns the number of pages needed for `count` rows: `ceil(count / size)`.
///
/// An empty sequence has zero pages.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Slices the current page out of the sorted sequence.
///
/// Identity when pagination is disabled. The window is the half-open range
/// `[(page - 1) * size, page * size)`, clipped to the available length —
/// slicing past the end yields a shorter (possibly empty) result, never an
/// error.
pub fn apply<'a>(rows: Vec<VisibleRow<'a>>, pagination: &PaginationState) -> Vec<VisibleRow<'a>> {
    if !pagination.is_enabled() {
        return rows;
    }
    let start = (pagination.page() - 1).saturating_mul(pagination.page_size());
    let end = start.saturating_add(pagination.page_size());
    let start = start.min(rows.len());
    let end = end.min(rows.len());
    rows[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Column;
    use crate::model::Record;
    use crate::pipeline::FilterState;
    use crate::pipeline::filter;

    fn numbered(count: usize) -> Vec<Record> {
        (0..count)
            .map(|i| Record::new().set("id", i as i64))
            .collect()
    }

    fn rows(records: &[Record]) -> Vec<VisibleRow<'_>> {
        let columns = [Column::new("id", "ID")];
        filter::apply(records, &columns, &FilterState::new())
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    #[test]
    fn test_window_slicing() {
        let records = numbered(5);
        let mut pagination = PaginationState::new(2);

        let page1 = apply(rows(&records), &pagination);
        assert_eq!(page1.len(), 2);
        assert_eq!(page1[0].source_index, 0);

        pagination.set_page(3);
        let page3 = apply(rows(&records), &pagination);
        // Last page is shorter.
        assert_eq!(page3.len(), 1);
        assert_eq!(page3[0].source_index, 4);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let records = numbered(3);
        let mut pagination = PaginationState::new(2);
        pagination.set_page(9);
        assert!(apply(rows(&records), &pagination).is_empty());
    }

    #[test]
    fn test_disabled_is_identity() {
        let records = numbered(5);
        let mut pagination = PaginationState::new(2);
        pagination.set_page(4);
        pagination.set_enabled(false);
        assert_eq!(apply(rows(&records), &pagination).len(), 5);
    }

    #[test]
    fn test_page_size_clamped() {
        let mut pagination = PaginationState::new(0);
        assert_eq!(pagination.page_size(), 1);
        pagination.set_page_size(0);
        assert_eq!(pagination.page_size(), 1);
    }

    #[test]
    fn test_navigation_clamps() {
        let mut pagination = PaginationState::new(2);
        pagination.prev_page();
        assert_eq!(pagination.page(), 1);
        pagination.next_page(3);
        assert_eq!(pagination.page(), 2);
        pagination.last_page(3);
        assert_eq!(pagination.page(), 3);
        pagination.next_page(3);
        assert_eq!(pagination.page(), 3);
        pagination.first_page();
        assert_eq!(pagination.page(), 1);
    }

    #[test]
    fn test_pages_cover_sequence_exactly() {
        let records = numbered(7);
        let mut pagination = PaginationState::new(3);
        let total = total_pages(records.len(), pagination.page_size());

        let mut seen = Vec::new();
        for page in 1..=total {
            pagination.set_page(page);
            seen.extend(
                apply(rows(&records), &pagination)
                    .iter()
                    .map(|r| r.source_index),
            );
        }
        assert_eq!(seen, (0..7).collect::<Vec<_>>());
    }
}
