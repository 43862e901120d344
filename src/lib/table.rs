//! Sortable, selectable data table.

mod column;
mod data_table;
mod selection;
mod sort;

pub use column::*;
pub use data_table::*;
pub use selection::*;
pub use sort::*;
