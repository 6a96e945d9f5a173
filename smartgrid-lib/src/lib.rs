//! Headless grid controller library
//!
//! A reusable, in-memory tabular data grid: filterable, sortable, paginated,
//! inline-editable, with CSV/JSON export. The library owns the data and state
//! logic only; rendering is left entirely to the host (terminal, GUI, web).
//!
//! The central type is [`GridController`], which owns the source records and
//! every piece of transient state (filters, sort, pagination, theme, the
//! in-flight edit) and derives the visible slice on demand:
//!
//! ```
//! use smartgrid_lib::GridController;
//! use smartgrid_lib::model::{Column, Record};
//!
//! let columns = vec![
//!     Column::new("id", "ID"),
//!     Column::new("name", "Name").sortable(true),
//! ];
//! let data = vec![
//!     Record::new().set("id", 1i64).set("name", "Alice"),
//!     Record::new().set("id", 2i64).set("name", "Bob"),
//! ];
//!
//! let mut grid = GridController::builder()
//!     .data(data)
//!     .columns(columns)
//!     .page_size(10)
//!     .build();
//!
//! grid.set_filter("name", "ali");
//! assert_eq!(grid.visible_rows().len(), 1);
//! ```

pub mod edit;
pub mod error;
pub mod export;
pub mod model;
pub mod pipeline;
pub mod sample;
pub mod theme;

mod grid;

pub use grid::*;
