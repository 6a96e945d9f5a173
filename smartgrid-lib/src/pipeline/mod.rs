//! The filter → sort → paginate pipeline
//!
//! Pure functions over a snapshot of the grid state. Rows travel through the
//! pipeline as [`VisibleRow`]s, which pair each record with its absolute
//! index in the source collection. Carrying the source index end to end is
//! what lets an edit commit on page 3 mutate the right element: the visible
//! slice already knows where each of its rows lives.

pub mod filter;
pub mod page;
pub mod sort;

pub use filter::FilterState;
pub use page::PaginationState;
pub use sort::Direction;
pub use sort::SortState;

use crate::model::Column;
use crate::model::Record;

/// One row of the visible slice: a record plus its absolute position in the
/// source collection.
#[derive(Debug, Clone, Copy)]
pub struct VisibleRow<'a> {
    /// Index of this record in the unfiltered, unsorted source collection.
    pub source_index: usize,
    /// The record itself.
    pub record: &'a Record,
}

/// Runs the full filter → sort → paginate pipeline over a source collection.
pub fn visible_slice<'a>(
    records: &'a [Record],
    columns: &[Column],
    filters: &FilterState,
    sort: &SortState,
    pagination: &PaginationState,
) -> Vec<VisibleRow<'a>> {
    let filtered = filter::apply(records, columns, filters);
    let sorted = sort::apply(filtered, sort);
    page::apply(sorted, pagination)
}
