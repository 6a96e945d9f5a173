//! The grid controller

use std::time::Duration;

use crate::edit::EditSession;
use crate::error::ExportError;
use crate::error::GridError;
use crate::export;
use crate::export::ExportFormat;
use crate::model::Column;
use crate::model::Record;
use crate::pipeline;
use crate::pipeline::FilterState;
use crate::pipeline::PaginationState;
use crate::pipeline::SortState;
use crate::pipeline::VisibleRow;
use crate::pipeline::page::DEFAULT_PAGE_SIZE;
use crate::theme::Theme;

/// Skeleton delay a host should apply after replacing the data set.
pub const DATA_CHANGE_DELAY: Duration = Duration::from_millis(600);

/// Skeleton delay a host should apply after a page change.
pub const PAGE_CHANGE_DELAY: Duration = Duration::from_millis(400);

/// Observer fired after a committed edit with the updated record and its
/// source-absolute index.
pub type RowEditCallback = Box<dyn FnMut(&Record, usize)>;

/// Observer fired after a committed edit with the whole updated collection.
pub type DataChangeCallback = Box<dyn FnMut(&[Record])>;

/// The grid controller: one owner for the source records and every piece of
/// grid state, deriving the visible slice on demand.
///
/// The controller runs the filter → sort → paginate pipeline over the source
/// collection each time [`visible_rows`](GridController::visible_rows) is
/// called; nothing is cached. All state transitions are synchronous, and the
/// edit observers fire exactly once per successful commit, after the source
/// mutation is visible.
///
/// # Example
///
/// ```
/// use smartgrid_lib::GridController;
/// use smartgrid_lib::sample;
///
/// let mut grid = GridController::builder()
///     .data(sample::users(25))
///     .columns(sample::user_columns())
///     .page_size(10)
///     .build();
///
/// assert_eq!(grid.total_pages(), 3);
/// grid.toggle_sort("name");
/// grid.set_filter("role", "admin");
/// let visible = grid.visible_rows();
/// assert!(visible.len() <= 10);
/// ```
pub struct GridController {
    columns: Vec<Column>,
    data: Vec<Record>,
    filters: FilterState,
    active_filter: Option<String>,
    sort: SortState,
    pagination: PaginationState,
    theme: Theme,
    loading: bool,
    editing: Option<EditSession>,
    on_row_edit: Option<RowEditCallback>,
    on_data_change: Option<DataChangeCallback>,
}

impl GridController {
    /// Creates a new builder for constructing a controller.
    pub fn builder() -> GridBuilder<Missing, Missing> {
        GridBuilder::new()
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    /// Runs the full pipeline and returns the visible slice.
    ///
    /// Each row carries its source-absolute index, which is the index to
    /// hand to [`begin_edit`](GridController::begin_edit).
    pub fn visible_rows(&self) -> Vec<VisibleRow<'_>> {
        pipeline::visible_slice(
            &self.data,
            &self.columns,
            &self.filters,
            &self.sort,
            &self.pagination,
        )
    }

    /// Returns the number of records that pass the active filters.
    pub fn filtered_count(&self) -> usize {
        pipeline::filter::apply(&self.data, &self.columns, &self.filters).len()
    }

    /// Returns the page count for the current filters and page size.
    pub fn total_pages(&self) -> usize {
        pipeline::page::total_pages(self.filtered_count(), self.pagination.page_size())
    }

    // =========================================================================
    // State accessors
    // =========================================================================

    /// Returns the column descriptors.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the full source collection, unfiltered and unsorted.
    pub fn data(&self) -> &[Record] {
        &self.data
    }

    /// Returns the filter state.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Returns the column whose filter input is open, if any.
    pub fn active_filter(&self) -> Option<&str> {
        self.active_filter.as_deref()
    }

    /// Returns the sort state.
    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Returns the pagination state.
    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// Returns the current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns `true` while a data or page change is settling.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the source index of the row being edited, if any.
    pub fn editing_index(&self) -> Option<usize> {
        self.editing.as_ref().map(EditSession::index)
    }

    /// Returns the in-progress edit session, if any.
    pub fn edit_session(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Sets one column's filter query.
    pub fn set_filter(&mut self, column_id: impl Into<String>, query: impl Into<String>) {
        self.filters.set(column_id, query);
    }

    /// Clears one column's filter query.
    pub fn clear_filter(&mut self, column_id: &str) {
        self.filters.clear(column_id);
    }

    /// Clears every filter query.
    pub fn clear_filters(&mut self) {
        self.filters.clear_all();
    }

    /// Opens a column's filter input, or closes it if already open.
    pub fn toggle_filter_input(&mut self, column_id: &str) {
        if self.active_filter.as_deref() == Some(column_id) {
            self.active_filter = None;
        } else {
            self.active_filter = Some(column_id.to_string());
        }
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Selects a sort column, or flips the direction on repeat selection.
    ///
    /// Ignored for unknown column ids and for columns not marked sortable.
    pub fn toggle_sort(&mut self, column_id: &str) {
        let sortable = self
            .columns
            .iter()
            .any(|c| c.id() == column_id && c.is_sortable());
        if sortable {
            self.sort.toggle(column_id);
        }
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    /// Jumps to a page and flags the loading transition. Out-of-range pages
    /// yield an empty visible slice.
    pub fn set_page(&mut self, page: usize) {
        self.pagination.set_page(page);
        self.loading = true;
    }

    /// Advances one page, clamped to the last page.
    pub fn next_page(&mut self) {
        let total = self.total_pages();
        self.pagination.next_page(total);
        self.loading = true;
    }

    /// Goes back one page, clamped to page 1.
    pub fn prev_page(&mut self) {
        self.pagination.prev_page();
        self.loading = true;
    }

    /// Jumps to the first page.
    pub fn first_page(&mut self) {
        self.pagination.first_page();
        self.loading = true;
    }

    /// Jumps to the last page.
    pub fn last_page(&mut self) {
        let total = self.total_pages();
        self.pagination.last_page(total);
        self.loading = true;
    }

    /// Sets the page size, clamped to at least 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.set_page_size(page_size);
    }

    /// Enables or disables pagination.
    pub fn set_pagination_enabled(&mut self, enabled: bool) {
        self.pagination.set_enabled(enabled);
    }

    /// Flips pagination on or off.
    pub fn toggle_pagination(&mut self) {
        let enabled = self.pagination.is_enabled();
        self.pagination.set_enabled(!enabled);
    }

    /// Clears the loading flag.
    ///
    /// Hosts call this when their skeleton timer elapses (see
    /// [`DATA_CHANGE_DELAY`] and [`PAGE_CHANGE_DELAY`]). Overlapping timers
    /// need no coordination: whichever completion lands last simply clears
    /// the flag again.
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    // =========================================================================
    // Theme
    // =========================================================================

    /// Flips between light and dark mode.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Begins editing the row at the given source-absolute index.
    ///
    /// Errors if the index is out of bounds, or if a *different* row is
    /// already mid-edit — the in-progress edit is never silently discarded.
    /// Re-beginning the same row restarts its session from the current
    /// cell values.
    pub fn begin_edit(&mut self, source_index: usize) -> Result<(), GridError> {
        if source_index >= self.data.len() {
            return Err(GridError::RowOutOfBounds {
                index: source_index,
                len: self.data.len(),
            });
        }
        if let Some(session) = &self.editing
            && session.index() != source_index
        {
            return Err(GridError::EditInProgress {
                editing: session.index(),
            });
        }
        self.editing = Some(EditSession::begin(
            source_index,
            &self.data[source_index],
            &self.columns,
        ));
        Ok(())
    }

    /// Overwrites one field of the in-progress edit.
    pub fn update_field(
        &mut self,
        column_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<(), GridError> {
        match &mut self.editing {
            Some(session) => {
                session.set_field(column_id, text);
                Ok(())
            }
            None => Err(GridError::NoActiveEdit),
        }
    }

    /// Commits the in-progress edit.
    ///
    /// Merges the pending text into the source record (pending wins),
    /// replaces the record in the source collection, then notifies the
    /// row-edit and data-change observers, in that order.
    pub fn commit_edit(&mut self) -> Result<(), GridError> {
        let session = self.editing.take().ok_or(GridError::NoActiveEdit)?;
        let index = session.index();
        let updated = session.apply_to(&self.data[index]);
        self.data[index] = updated;

        log::debug!("committed edit to row {index}");
        if let Some(on_row_edit) = &mut self.on_row_edit {
            on_row_edit(&self.data[index], index);
        }
        if let Some(on_data_change) = &mut self.on_data_change {
            on_data_change(&self.data);
        }
        Ok(())
    }

    /// Abandons the in-progress edit, if any. No side effects.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    // =========================================================================
    // Data replacement
    // =========================================================================

    /// Replaces the source collection.
    ///
    /// All state derived from the old collection resets: filters, sort,
    /// page index, and any in-flight edit. Theme, page size and the
    /// pagination toggle survive. Flags the loading transition.
    pub fn replace_data(&mut self, data: Vec<Record>) {
        log::debug!("replacing data: {} rows", data.len());
        self.data = data;
        self.filters.clear_all();
        self.active_filter = None;
        self.sort.reset();
        self.pagination.reset();
        self.editing = None;
        self.loading = true;
    }

    // =========================================================================
    // Export
    // =========================================================================

    /// Serializes the full source collection to CSV.
    pub fn export_csv(&self) -> String {
        export::to_csv(&self.data, &self.columns)
    }

    /// Serializes the full source collection to pretty-printed JSON.
    pub fn export_json(&self) -> Result<String, ExportError> {
        export::to_json(&self.data)
    }

    /// Writes an export of the full source collection to
    /// `dir/smartgrid_export.<ext>` and returns the path.
    pub fn export_to_file(
        &self,
        dir: impl AsRef<std::path::Path>,
        format: ExportFormat,
    ) -> Result<std::path::PathBuf, ExportError> {
        let content = match format {
            ExportFormat::Csv => self.export_csv(),
            ExportFormat::Json => self.export_json()?,
        };
        export::write_export(dir, &format.default_filename(), &content)
    }
}

impl std::fmt::Debug for GridController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridController")
            .field("columns", &self.columns.len())
            .field("rows", &self.data.len())
            .field("filters", &self.filters)
            .field("sort", &self.sort)
            .field("pagination", &self.pagination)
            .field("theme", &self.theme)
            .field("loading", &self.loading)
            .field("editing", &self.editing_index())
            .finish()
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`GridController`].
///
/// Uses the typestate pattern to ensure required fields are set at compile
/// time.
///
/// # Required Fields
///
/// - `data` - the source records
/// - `columns` - the column descriptors
///
/// # Example
///
/// ```
/// use smartgrid_lib::GridController;
/// use smartgrid_lib::model::{Column, Record};
/// use smartgrid_lib::theme::Theme;
///
/// let grid = GridController::builder()
///     .data(vec![Record::new().set("id", 1i64)])
///     .columns(vec![Column::new("id", "ID")])
///     .page_size(25)
///     .theme(Theme::Dark)
///     .build();
/// ```
pub struct GridBuilder<Data, Columns> {
    data: Data,
    columns: Columns,
    page_size: usize,
    theme: Theme,
    on_row_edit: Option<RowEditCallback>,
    on_data_change: Option<DataChangeCallback>,
}

impl GridBuilder<Missing, Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            data: Missing,
            columns: Missing,
            page_size: DEFAULT_PAGE_SIZE,
            theme: Theme::Light,
            on_row_edit: None,
            on_data_change: None,
        }
    }
}

impl Default for GridBuilder<Missing, Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> GridBuilder<Missing, C> {
    /// Sets the source records.
    pub fn data(self, data: Vec<Record>) -> GridBuilder<Set<Vec<Record>>, C> {
        GridBuilder {
            data: Set(data),
            columns: self.columns,
            page_size: self.page_size,
            theme: self.theme,
            on_row_edit: self.on_row_edit,
            on_data_change: self.on_data_change,
        }
    }
}

impl<D> GridBuilder<D, Missing> {
    /// Sets the column descriptors.
    pub fn columns(self, columns: Vec<Column>) -> GridBuilder<D, Set<Vec<Column>>> {
        GridBuilder {
            data: self.data,
            columns: Set(columns),
            page_size: self.page_size,
            theme: self.theme,
            on_row_edit: self.on_row_edit,
            on_data_change: self.on_data_change,
        }
    }
}

impl<D, C> GridBuilder<D, C> {
    /// Sets the page size. Defaults to 10; clamped to at least 1.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Sets the initial theme. Defaults to [`Theme::Light`].
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Sets the observer fired after each committed edit with the updated
    /// record and its source index.
    pub fn on_row_edit<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Record, usize) + 'static,
    {
        self.on_row_edit = Some(Box::new(callback));
        self
    }

    /// Sets the observer fired after each committed edit with the whole
    /// updated collection.
    pub fn on_data_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&[Record]) + 'static,
    {
        self.on_data_change = Some(Box::new(callback));
        self
    }
}

impl GridBuilder<Set<Vec<Record>>, Set<Vec<Column>>> {
    /// Builds the [`GridController`].
    ///
    /// This method is only available when both `data` and `columns` have
    /// been set.
    pub fn build(self) -> GridController {
        GridController {
            columns: self.columns.0,
            data: self.data.0,
            filters: FilterState::new(),
            active_filter: None,
            sort: SortState::new(),
            pagination: PaginationState::new(self.page_size),
            theme: self.theme,
            loading: false,
            editing: None,
            on_row_edit: self.on_row_edit,
            on_data_change: self.on_data_change,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridController {
        GridController::builder()
            .data(crate::sample::users(5))
            .columns(crate::sample::user_columns())
            .page_size(2)
            .build()
    }

    #[test]
    fn test_defaults() {
        let grid = GridController::builder()
            .data(vec![])
            .columns(vec![])
            .build();
        assert_eq!(grid.pagination().page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(grid.theme(), Theme::Light);
        assert!(!grid.is_loading());
    }

    #[test]
    fn test_toggle_sort_requires_sortable_column() {
        let mut grid = GridController::builder()
            .data(vec![])
            .columns(vec![
                Column::new("a", "A").sortable(true),
                Column::new("b", "B"),
            ])
            .build();

        grid.toggle_sort("b");
        assert_eq!(grid.sort().column(), None);
        grid.toggle_sort("nope");
        assert_eq!(grid.sort().column(), None);
        grid.toggle_sort("a");
        assert_eq!(grid.sort().column(), Some("a"));
    }

    #[test]
    fn test_page_navigation_sets_loading() {
        let mut grid = grid();
        assert!(!grid.is_loading());
        grid.next_page();
        assert!(grid.is_loading());
        grid.finish_loading();
        assert!(!grid.is_loading());
    }

    #[test]
    fn test_begin_edit_bounds() {
        let mut grid = grid();
        assert_eq!(
            grid.begin_edit(99),
            Err(GridError::RowOutOfBounds { index: 99, len: 5 })
        );
    }

    #[test]
    fn test_second_edit_is_blocked() {
        let mut grid = grid();
        grid.begin_edit(0).unwrap();
        assert_eq!(
            grid.begin_edit(1),
            Err(GridError::EditInProgress { editing: 0 })
        );
        // The first session is untouched.
        assert_eq!(grid.editing_index(), Some(0));
        // Re-beginning the same row is allowed.
        grid.begin_edit(0).unwrap();
    }

    #[test]
    fn test_update_field_requires_session() {
        let mut grid = grid();
        assert_eq!(
            grid.update_field("name", "x"),
            Err(GridError::NoActiveEdit)
        );
    }

    #[test]
    fn test_replace_data_resets_transient_state() {
        let mut grid = grid();
        grid.set_filter("name", "user");
        grid.toggle_sort("name");
        grid.set_page(2);
        grid.begin_edit(0).unwrap();
        grid.toggle_theme();

        grid.replace_data(crate::sample::users(3));

        assert!(grid.filters().is_empty());
        assert_eq!(grid.sort().column(), None);
        assert_eq!(grid.pagination().page(), 1);
        assert_eq!(grid.editing_index(), None);
        assert!(grid.is_loading());
        // Theme is not derived from the data; it survives.
        assert_eq!(grid.theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_filter_input() {
        let mut grid = grid();
        grid.toggle_filter_input("name");
        assert_eq!(grid.active_filter(), Some("name"));
        grid.toggle_filter_input("role");
        assert_eq!(grid.active_filter(), Some("role"));
        grid.toggle_filter_input("role");
        assert_eq!(grid.active_filter(), None);
    }
}
