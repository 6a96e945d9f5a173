//! Column descriptors

use std::fmt;
use std::sync::Arc;

use super::Record;
use super::Value;

/// A custom cell renderer: receives the raw cell value and the whole record,
/// returns the text to display.
pub type CellRenderer = Arc<dyn Fn(&Value, &Record) -> String + Send + Sync>;

/// Static metadata describing one grid column.
///
/// A column's `id` names the record field it projects; its `label` is the
/// human-readable header text. Columns are immutable for the lifetime of a
/// grid instance. Column ids are not validated against the records — an id
/// with no matching field silently yields blank cells.
///
/// # Example
///
/// ```
/// use smartgrid_lib::model::{Column, Record};
///
/// let column = Column::new("revenue", "Revenue")
///     .sortable(true)
///     .renderer(|value, _record| format!("${}", value.to_display_string()));
///
/// let record = Record::new().set("revenue", 1_000i64);
/// assert_eq!(column.render_cell(&record), "$1000");
/// ```
#[derive(Clone)]
pub struct Column {
    id: String,
    label: String,
    sortable: bool,
    cell_renderer: Option<CellRenderer>,
}

impl Column {
    /// Creates a new column. Columns are not sortable unless
    /// [`sortable`](Column::sortable) is set.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            sortable: false,
            cell_renderer: None,
        }
    }

    /// Sets whether the column can be sorted.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Sets a custom cell renderer.
    ///
    /// The renderer affects display only; filtering, sorting and export all
    /// operate on the raw cell value.
    pub fn renderer<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&Value, &Record) -> String + Send + Sync + 'static,
    {
        self.cell_renderer = Some(Arc::new(renderer));
        self
    }

    /// Returns the column id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the header label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns `true` if the column can be sorted.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Returns `true` if the column has a custom renderer.
    pub fn has_renderer(&self) -> bool {
        self.cell_renderer.is_some()
    }

    /// Renders the record's cell for this column.
    ///
    /// Applies the custom renderer if one is set, otherwise the default
    /// display text. Missing fields render through the renderer as `Null`.
    pub fn render_cell(&self, record: &Record) -> String {
        match &self.cell_renderer {
            Some(renderer) => {
                let value = record.get(&self.id).cloned().unwrap_or(Value::Null);
                renderer(&value, record)
            }
            None => record.cell_text(&self.id),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("cell_renderer", &self.cell_renderer.as_ref().map(|_| ".."))
            .finish()
    }
}
