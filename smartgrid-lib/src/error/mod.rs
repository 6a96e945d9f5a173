//! Error types

mod export;
mod field;
mod grid;

pub use export::*;
pub use field::*;
pub use grid::*;
