//! Single-column sort state and display ordering.

use std::cmp::Ordering;

use crate::record::Row;

use super::column::Column;

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest text first
    Ascending,
    /// Largest text first
    Descending,
}

impl SortDirection {
    /// Glyph shown next to the active column's title.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }

    /// Returns the opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Which column, if any, the table is sorted by.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<(String, SortDirection)>,
}

impl SortState {
    /// Toggles sorting for `key`: flips the direction when `key` is already
    /// active, otherwise activates `key` ascending.
    pub fn toggle(&mut self, key: &str) {
        self.active = match self.active.take() {
            Some((active, direction)) if active == key => {
                Some((active, direction.flipped()))
            }
            _ => Some((key.to_string(), SortDirection::Ascending)),
        };
    }

    /// Key of the active column.
    pub fn active_key(&self) -> Option<&str> {
        self.active.as_ref().map(|(k, _)| k.as_str())
    }

    /// Direction of the active sort.
    pub fn direction(&self) -> Option<SortDirection> {
        self.active.as_ref().map(|(_, d)| *d)
    }

    /// Direction for `key` if it is the active column.
    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        match &self.active {
            Some((active, direction)) if active == key => Some(*direction),
            _ => None,
        }
    }

    /// Returns true unless the active sort is descending.
    pub fn is_ascending(&self) -> bool {
        self.direction() != Some(SortDirection::Descending)
    }
}

/// Computes the display order of `rows` as indices into `rows`.
///
/// Values are compared as text, so numbers sort lexicographically. Letter
/// case only breaks ties, lowercase first, so `apple` precedes `Banana`. The
/// sort is stable: rows with equal text keep their input order in either
/// direction. With no column the input order is returned.
pub fn display_order(
    rows: &[Row],
    column: Option<&Column>,
    direction: SortDirection,
) -> Vec<usize> {
    let mut order = (0..rows.len()).collect::<Vec<_>>();

    let Some(column) = column else {
        return order;
    };

    let keys = rows
        .iter()
        .map(|r| {
            let value = column.sort_value(r);
            (value.to_lowercase(), value)
        })
        .collect::<Vec<_>>();

    order.sort_by(|a, b| {
        let ord = compare_text(&keys[*a], &keys[*b]);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    order
}

// Case-insensitive first. Texts differing only in case put the lowercase
// form first.
fn compare_text(a: &(String, String), b: &(String, String)) -> Ordering {
    a.0.cmp(&b.0).then_with(|| b.1.cmp(&a.1))
}

#[cfg(test)]
#[path = "./sort_tests.rs"]
mod tests;
