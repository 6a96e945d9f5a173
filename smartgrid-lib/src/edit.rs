//! Inline edit session
//!
//! At most one row is editable at a time, system-wide. The session lives in
//! the grid controller as an `Option<EditSession>`: `None` is the viewing
//! state, `Some` is a row mid-edit. Pending edits are raw text (inline
//! editing happens through text inputs); on commit they merge into the
//! source record as string values, pending text winning on key conflict.
//! Fields the user never touched keep their original typed values.

use std::collections::HashMap;

use crate::model::Column;
use crate::model::Record;
use crate::model::Value;

/// One row's in-progress edit.
///
/// Created when a row enters editing (seeding every column's current display
/// text for the edit inputs), mutated per keystroke, destroyed on commit or
/// cancel. Only fields that were actually written back merge into the source
/// record; seeded-but-untouched cells keep their original values and types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    index: usize,
    seeded: HashMap<String, String>,
    dirty: HashMap<String, String>,
}

impl EditSession {
    /// Begins editing the record at the given source-absolute index,
    /// seeding the edit inputs from the record's current cells.
    pub fn begin(index: usize, record: &Record, columns: &[Column]) -> Self {
        let seeded = columns
            .iter()
            .map(|column| (column.id().to_string(), record.cell_text(column.id())))
            .collect();
        Self {
            index,
            seeded,
            dirty: HashMap::new(),
        }
    }

    /// Returns the source-absolute index of the row being edited.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the text an edit input for this field should show: the
    /// latest keystroke if the field was touched, otherwise the seeded text.
    pub fn pending(&self, column_id: &str) -> Option<&str> {
        self.dirty
            .get(column_id)
            .or_else(|| self.seeded.get(column_id))
            .map(String::as_str)
    }

    /// Returns `true` if any field has been written since the edit began.
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Overwrites one field's pending text. No coercion or validation.
    pub fn set_field(&mut self, column_id: impl Into<String>, text: impl Into<String>) {
        self.dirty.insert(column_id.into(), text.into());
    }

    /// Builds the updated record: the source record with every touched field
    /// applied on top as a string value. Pending text wins on key conflict.
    pub fn apply_to(&self, record: &Record) -> Record {
        record.merged(
            self.dirty
                .iter()
                .map(|(field, text)| (field.clone(), Value::String(text.clone()))),
        )
    }
}
