//! Positional row selection.

use crate::record::Row;

/// Set of selected display positions, kept in the order they were selected.
///
/// Positions refer to the display order at the time of the toggle. Changing
/// the data or the sort does not touch the set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    positions: Vec<usize>,
}

impl Selection {
    /// Flips membership of `position`. Returns true if the position is now
    /// selected.
    pub fn toggle(&mut self, position: usize) -> bool {
        match self.positions.iter().position(|p| *p == position) {
            Some(idx) => {
                self.positions.remove(idx);
                false
            }
            None => {
                self.positions.push(position);
                true
            }
        }
    }

    /// Returns true if `position` is selected.
    pub fn contains(&self, position: usize) -> bool {
        self.positions.contains(&position)
    }

    /// Selected positions in selection order.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Number of selected positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Removes every position.
    pub fn clear(&mut self) {
        self.positions.clear();
    }

    /// Resolves the selected positions against `display`. Positions beyond
    /// the end of `display` are skipped.
    pub fn resolve(&self, display: &[&Row]) -> Vec<Row> {
        self.positions
            .iter()
            .filter_map(|p| display.get(*p).map(|r| (*r).clone()))
            .collect()
    }
}

#[cfg(test)]
#[path = "./selection_tests.rs"]
mod tests;
