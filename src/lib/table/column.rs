//! Column descriptors.

use crate::record::Row;

/// Placeholder rendered for a field the row does not carry.
pub const MISSING_PLACEHOLDER: &str = "-";

/// Describes one table column and the row field it projects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Unique key among the table's columns
    pub key: String,
    /// Header label
    pub title: String,
    /// Name of the row field shown in this column
    pub data_index: String,
    /// Whether selecting the header toggles sorting by this column
    pub sortable: bool,
    /// Preferred width in cells. Columns without one share the remaining
    /// space.
    pub width: Option<u16>,
}

impl Column {
    /// Creates a non-sortable column.
    pub fn new(key: &str, title: &str, data_index: &str) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            data_index: data_index.to_string(),
            sortable: false,
            width: None,
        }
    }

    /// Marks the column as sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Sets a preferred width in cells.
    pub fn width(mut self, w: u16) -> Self {
        self.width = Some(w);
        self
    }

    /// Value compared when sorting by this column. Missing fields compare as
    /// empty text.
    pub fn sort_value(&self, row: &Row) -> String {
        row.project(&self.data_index).unwrap_or_default()
    }

    /// Text shown in this column's cell for `row`.
    pub fn cell_text(&self, row: &Row) -> String {
        row.project(&self.data_index)
            .unwrap_or_else(|| MISSING_PLACEHOLDER.to_string())
    }
}
