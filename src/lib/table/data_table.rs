//! Data table widget: sort toggling, positional selection and rendering.

use std::{cell::RefCell, collections::HashSet, fmt};

#[cfg(test)]
use mockall::automock;
use ratatui::{
    buffer::Buffer,
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style, Stylize},
    text::Text,
    widgets::{
        Block, BorderType, Cell, Padding, Paragraph, Row as TableRow,
        StatefulWidget, Table as RatatuiTable, TableState, Widget,
    },
};
use unicode_width::UnicodeWidthStr;

use crate::{
    error::{Result, WidgetError},
    record::Row,
    traits::{CustomWidgetContext, CustomWidgetRef, EventHandler},
};

use super::{
    column::Column,
    selection::Selection,
    sort::{SortDirection, SortState, display_order},
};

/// Shown instead of the table while loading.
pub const LOADING_TEXT: &str = "Loading...";
/// Shown instead of the table when there are no rows.
pub const EMPTY_TEXT: &str = "No Data Found";
/// Checkbox of a selected row.
pub const CHECKED: &str = "[x]";
/// Checkbox of an unselected row.
pub const UNCHECKED: &str = "[ ]";

/// Used for overflow when a cell exceeds its column width
const ELLIPSIS: &str = "…";
/// Width of the leading checkbox column
const CHECKBOX_WIDTH: u16 = 4;
const COLUMN_SPACING: u16 = 1;

/// Receives the selected rows after every selection toggle.
#[cfg_attr(test, automock)]
pub trait SelectListener {
    /// Called with the currently selected rows, resolved against the current
    /// display order.
    fn on_row_select(&mut self, rows: &[Row]);
}

impl<F> SelectListener for F
where
    F: FnMut(&[Row]),
{
    fn on_row_select(&mut self, rows: &[Row]) {
        self(rows)
    }
}

/// Header cell of the rendered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// Column title
    pub title: String,
    /// Whether the column can be sorted
    pub sortable: bool,
    /// Direction glyph source when this column is the active sort
    pub indicator: Option<SortDirection>,
}

impl HeaderCell {
    /// Title followed by the direction glyph, if any.
    pub fn label(&self) -> String {
        match self.indicator {
            Some(direction) => {
                format!("{} {}", self.title, direction.indicator())
            }
            None => self.title.clone(),
        }
    }
}

/// Body row of the rendered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyRow {
    /// Checkbox state. None when the table is not selectable.
    pub checked: Option<bool>,
    /// Projected text of each column
    pub cells: Vec<String>,
}

/// What the table renders for its current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    /// Only the loading placeholder
    Loading,
    /// Only the empty-state placeholder
    Empty,
    /// Header row followed by one row per displayed record
    Rows {
        /// Whether a leading checkbox column is present
        selectable: bool,
        /// One cell per column
        header: Vec<HeaderCell>,
        /// One row per record in display order
        body: Vec<BodyRow>,
    },
}

/// Table over arbitrary rows with single-column sorting and positional
/// multi-row selection.
pub struct DataTable {
    rows: Vec<Row>,
    columns: Vec<Column>,
    loading: bool,
    selectable: bool,
    on_row_select: Option<Box<dyn SelectListener>>,
    sort: SortState,
    selection: Selection,
    header_focus: usize,
    table_state: RefCell<TableState>,
}

impl fmt::Debug for DataTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("loading", &self.loading)
            .field("selectable", &self.selectable)
            .field("sort", &self.sort)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl DataTable {
    /// Creates a table over `rows`. Column keys must be unique.
    pub fn new(rows: Vec<Row>, columns: Vec<Column>) -> Result<Self> {
        let mut seen = HashSet::new();

        for column in columns.iter() {
            if !seen.insert(column.key.as_str()) {
                return Err(WidgetError::DuplicateColumnKey(
                    column.key.clone(),
                ));
            }
        }

        let table_state = if rows.is_empty() {
            TableState::new()
        } else {
            TableState::new().with_selected(Some(0))
        };

        Ok(Self {
            rows,
            columns,
            loading: false,
            selectable: false,
            on_row_select: None,
            sort: SortState::default(),
            selection: Selection::default(),
            header_focus: 0,
            table_state: RefCell::new(table_state),
        })
    }

    /// Sets the loading flag.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Enables or disables row selection.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Registers the listener notified after every selection toggle.
    pub fn on_row_select(
        mut self,
        listener: impl SelectListener + 'static,
    ) -> Self {
        self.on_row_select = Some(Box::new(listener));
        self
    }

    /// Rows in input order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Column descriptors.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Current sort state.
    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns true while the loading flag is set.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns true if rows can be selected.
    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    /// Display position under the keyboard cursor.
    pub fn cursor(&self) -> Option<usize> {
        self.table_state.borrow().selected()
    }

    /// Index of the column whose header has keyboard focus.
    pub fn header_focus(&self) -> usize {
        self.header_focus
    }

    /// Updates the loading flag.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Replaces the rows. The selection keeps its positions, so it now refers
    /// to whichever rows land at those positions.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        let mut table_state = self.table_state.borrow_mut();

        if rows.is_empty() {
            table_state.select(None);
        } else {
            match table_state.selected() {
                Some(current) if current >= rows.len() => {
                    table_state.select(Some(rows.len() - 1))
                }
                None => table_state.select(Some(0)),
                _ => {}
            }
        }

        log::debug!(
            "table rows replaced: {} rows, {} positions still selected",
            rows.len(),
            self.selection.len()
        );

        self.rows = rows;
    }

    /// Toggles sorting by the column with `key`. Non-sortable columns are
    /// left untouched.
    pub fn toggle_sort(&mut self, key: &str) -> Result<()> {
        let column = self
            .columns
            .iter()
            .find(|c| c.key == key)
            .ok_or_else(|| WidgetError::UnknownColumn(key.to_string()))?;

        if !column.sortable {
            log::debug!("ignoring sort toggle for non-sortable column {key}");
            return Ok(());
        }

        self.sort.toggle(key);

        log::debug!(
            "table sorted by {key}: {:?}",
            self.sort.direction().unwrap_or(SortDirection::Ascending)
        );

        Ok(())
    }

    /// Indices into [`DataTable::rows`] in display order.
    pub fn display_order(&self) -> Vec<usize> {
        let column = self
            .sort
            .active_key()
            .and_then(|key| self.columns.iter().find(|c| c.key == key));

        display_order(
            &self.rows,
            column,
            self.sort.direction().unwrap_or(SortDirection::Ascending),
        )
    }

    /// Rows in display order.
    pub fn display_rows(&self) -> Vec<&Row> {
        self.display_order()
            .into_iter()
            .map(|i| &self.rows[i])
            .collect()
    }

    /// Flips selection of the row at display `position` and notifies the
    /// listener. Returns true if the row is now selected.
    pub fn toggle_select(&mut self, position: usize) -> Result<bool> {
        if !self.selectable {
            return Err(WidgetError::SelectionDisabled);
        }

        let len = self.rows.len();

        if position >= len {
            return Err(WidgetError::RowOutOfRange { position, len });
        }

        let selected = self.selection.toggle(position);

        log::debug!(
            "row {position} {}",
            if selected { "selected" } else { "deselected" }
        );

        let rows = self.selected_rows();

        if let Some(listener) = self.on_row_select.as_mut() {
            listener.on_row_select(&rows);
        }

        Ok(selected)
    }

    /// Removes every row from the selection without notifying the listener.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Selected rows resolved against the current display order, in the
    /// order they were selected.
    pub fn selected_rows(&self) -> Vec<Row> {
        self.selection.resolve(&self.display_rows())
    }

    /// Resolves what the table renders in its current state.
    pub fn view(&self) -> TableView {
        if self.loading {
            return TableView::Loading;
        }

        if self.rows.is_empty() {
            return TableView::Empty;
        }

        let header = self
            .columns
            .iter()
            .map(|c| HeaderCell {
                title: c.title.clone(),
                sortable: c.sortable,
                indicator: self.sort.direction_for(&c.key),
            })
            .collect();

        let body = self
            .display_rows()
            .into_iter()
            .enumerate()
            .map(|(position, row)| BodyRow {
                checked: self
                    .selectable
                    .then(|| self.selection.contains(position)),
                cells: self.columns.iter().map(|c| c.cell_text(row)).collect(),
            })
            .collect();

        TableView::Rows {
            selectable: self.selectable,
            header,
            body,
        }
    }

    /// Moves the cursor to the next row.
    pub fn next(&mut self) {
        if self.rows.is_empty() {
            return;
        }

        let mut table_state = self.table_state.borrow_mut();

        let i = match table_state.selected() {
            // don't wrap
            Some(i) => (i + 1).min(self.rows.len() - 1),
            None => 0,
        };

        table_state.select(Some(i));
    }

    /// Moves the cursor to the previous row.
    pub fn previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }

        let mut table_state = self.table_state.borrow_mut();

        let i = match table_state.selected() {
            // prevent wrap with saturating_sub
            Some(i) => i.saturating_sub(1),
            None => 0,
        };

        table_state.select(Some(i));
    }

    /// Moves header focus one column to the right.
    pub fn focus_next_column(&mut self) {
        if !self.columns.is_empty() {
            self.header_focus =
                (self.header_focus + 1).min(self.columns.len() - 1);
        }
    }

    /// Moves header focus one column to the left.
    pub fn focus_previous_column(&mut self) {
        self.header_focus = self.header_focus.saturating_sub(1);
    }

    fn sort_focused_column(&mut self) -> Result<()> {
        match self.columns.get(self.header_focus) {
            Some(column) => {
                let key = column.key.clone();
                self.toggle_sort(&key)
            }
            None => Ok(()),
        }
    }

    // Resolves each data column to a fixed width: explicit widths are kept
    // and the remaining space is shared by the others.
    fn column_widths(&self, total: u16) -> Vec<u16> {
        let leading = if self.selectable { 1 } else { 0 };
        let count =
            u16::try_from(self.columns.len() + leading).unwrap_or(u16::MAX);
        let spacing = count.saturating_sub(1).saturating_mul(COLUMN_SPACING);
        let fixed = self
            .columns
            .iter()
            .filter_map(|c| c.width)
            .fold(0u16, |acc, w| acc.saturating_add(w));
        let checkbox = if self.selectable { CHECKBOX_WIDTH } else { 0 };

        let fill_count = self.columns.iter().filter(|c| c.width.is_none()).count();
        let fill_count = u16::try_from(fill_count).unwrap_or(u16::MAX);
        let free = total
            .saturating_sub(fixed)
            .saturating_sub(checkbox)
            .saturating_sub(spacing);

        let mut remainder = if fill_count > 0 { free % fill_count } else { 0 };
        let share = if fill_count > 0 { free / fill_count } else { 0 };

        self.columns
            .iter()
            .map(|c| match c.width {
                Some(w) => w,
                None => {
                    let extra = if remainder > 0 {
                        remainder -= 1;
                        1
                    } else {
                        0
                    };
                    share + extra
                }
            })
            .collect()
    }

    fn render_placeholder(
        &self,
        text: &str,
        area: Rect,
        buf: &mut Buffer,
        ctx: &CustomWidgetContext,
    ) {
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(ctx.colors.muted).bg(ctx.colors.buffer_bg))
            .block(Block::new().padding(Padding::vertical(1)))
            .render(area, buf);
    }

    fn render_rows(
        &self,
        selectable: bool,
        header: Vec<HeaderCell>,
        body: Vec<BodyRow>,
        area: Rect,
        buf: &mut Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let border_color = if ctx.focused {
            ctx.colors.focus_border
        } else {
            ctx.colors.border
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(ctx.colors.buffer_bg));

        let inner = block.inner(area);
        block.render(area, buf);

        let widths = self.column_widths(inner.width);

        let header_style = Style::default()
            .fg(ctx.colors.header_fg)
            .bg(ctx.colors.header_bg)
            .add_modifier(Modifier::BOLD);

        let mut header_cells = Vec::new();

        if selectable {
            header_cells.push(Cell::from(""));
        }

        header.iter().enumerate().for_each(|(i, h)| {
            let mut cell = Cell::from(format!(" {}", h.label()));
            if ctx.focused && i == self.header_focus {
                cell = cell.style(Style::default().add_modifier(
                    if h.sortable {
                        Modifier::UNDERLINED
                    } else {
                        Modifier::DIM
                    },
                ));
            }
            header_cells.push(cell);
        });

        let header_row = TableRow::new(header_cells).style(header_style).height(1);

        let rows = body
            .into_iter()
            .map(|r| {
                let mut cells = Vec::new();

                if let Some(checked) = r.checked {
                    cells.push(Cell::from(format!(
                        " {}",
                        if checked { CHECKED } else { UNCHECKED }
                    )));
                }

                r.cells.iter().zip(widths.iter()).for_each(|(content, w)| {
                    let formatted = fit_to_width(content, w.saturating_sub(1));
                    cells.push(Cell::from(Text::from(format!(" {formatted}"))));
                });

                let mut style =
                    Style::new().fg(ctx.colors.text).bg(ctx.colors.buffer_bg);

                if r.checked == Some(true) {
                    style = style.bg(ctx.colors.selected_row_bg);
                }

                TableRow::new(cells).style(style).height(1)
            })
            .collect::<Vec<_>>();

        let mut constraints = Vec::new();

        if selectable {
            constraints.push(Constraint::Length(CHECKBOX_WIDTH));
        }

        constraints.extend(widths.iter().map(|w| Constraint::Length(*w)));

        let mut highlight = Style::default()
            .fg(ctx.colors.cursor_row_fg)
            .add_modifier(Modifier::BOLD);

        if ctx.focused {
            highlight = highlight.add_modifier(Modifier::REVERSED);
        }

        let t = RatatuiTable::new(rows, constraints)
            .header(header_row)
            .column_spacing(COLUMN_SPACING)
            .row_highlight_style(highlight)
            .bg(ctx.colors.buffer_bg);

        StatefulWidget::render(
            t,
            inner,
            buf,
            &mut self.table_state.borrow_mut(),
        );
    }
}

impl CustomWidgetRef for DataTable {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        match self.view() {
            TableView::Loading => {
                self.render_placeholder(LOADING_TEXT, area, buf, ctx)
            }
            TableView::Empty => {
                self.render_placeholder(EMPTY_TEXT, area, buf, ctx)
            }
            TableView::Rows {
                selectable,
                header,
                body,
            } => self.render_rows(selectable, header, body, area, buf, ctx),
        }

        Ok(())
    }
}

impl EventHandler for DataTable {
    fn process_event(&mut self, evt: &Event) -> Result<bool> {
        if self.loading {
            return Ok(false);
        }

        let Event::Key(key) = evt else {
            return Ok(false);
        };

        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.next();
                Ok(true)
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous();
                Ok(true)
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.focus_next_column();
                Ok(true)
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.focus_previous_column();
                Ok(true)
            }
            KeyCode::Char('s') | KeyCode::Enter => {
                self.sort_focused_column()?;
                Ok(true)
            }
            KeyCode::Char(' ') => match self.cursor() {
                Some(position) if self.selectable => {
                    self.toggle_select(position)?;
                    Ok(true)
                }
                _ => Ok(false),
            },
            _ => Ok(false),
        }
    }
}

fn fit_to_width(content: &str, max_width: u16) -> String {
    let max_width = usize::from(max_width);

    if content.width() <= max_width {
        return content.to_string();
    }

    let budget = max_width.saturating_sub(ELLIPSIS.width());

    let mut value = String::new();
    let mut used = 0;

    for c in content.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        value.push(c);
    }

    value = value.trim_end().to_string();
    value.push_str(ELLIPSIS);
    value
}

#[cfg(test)]
#[path = "./data_table_tests.rs"]
mod tests;
