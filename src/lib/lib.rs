//! Terminal widgets built on [ratatui]
//!
//! Two independent leaf components:
//!
//! - [`input::InputField`]: a single-line text or password input with a
//!   label, helper/error text, a clear action and a password reveal toggle.
//!   The field is either controlled (the caller owns the value and is notified
//!   of every change) or uncontrolled (the field owns its value).
//! - [`table::DataTable`]: a table over arbitrary [`record::Row`] records with
//!   per-column sort toggling and multi-row selection.
//!
//! # Examples
//!
//! ```
//! use r_widgets::{
//!     record::Row,
//!     table::{Column, DataTable},
//! };
//!
//! let rows = vec![
//!     Row::new().with("name", "Ankur").with("age", 21),
//!     Row::new().with("name", "Kunal").with("age", 22),
//! ];
//!
//! let columns = vec![
//!     Column::new("name", "Name", "name").sortable(),
//!     Column::new("age", "Age", "age").sortable(),
//! ];
//!
//! let mut table = DataTable::new(rows, columns).unwrap().selectable(true);
//! table.toggle_sort("name").unwrap();
//! table.toggle_select(0).unwrap();
//! assert_eq!(table.selected_rows().len(), 1);
//! ```

#![deny(missing_docs)]
pub mod colors;
pub mod error;
pub mod input;
pub mod record;
pub mod table;
pub mod traits;
