//! Grid state transition errors

/// Errors from grid controller state transitions.
///
/// Malformed *data* never errors — missing cells read as empty strings,
/// out-of-range pages yield empty slices, bad page sizes are clamped. These
/// variants cover API misuse of the edit machine, where silently doing the
/// wrong thing would corrupt the source collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The row index is outside the source collection.
    #[error("Row index {index} out of bounds (collection has {len} rows)")]
    RowOutOfBounds { index: usize, len: usize },

    /// An edit is already in progress on another row.
    #[error("Row {editing} is already being edited")]
    EditInProgress { editing: usize },

    /// An edit operation was called with no active edit session.
    #[error("No edit in progress")]
    NoActiveEdit,
}
