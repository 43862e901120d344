//! Vertical stack of widgets with keyboard focus cycling.

use std::sync::mpsc::{Receiver, Sender, channel};

use color_eyre::eyre::Result;
use itertools::Itertools;
use r_widgets::{
    input::{InputField, InputFieldProps},
    record::Row,
    table::DataTable,
    traits::{CustomWidgetContext, CustomWidgetRef, EventHandler},
};
use ratatui::{
    buffer::Buffer,
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
};

use crate::ui::components::header::Header;

/// Derives props such as `invalid` from a newly echoed value.
pub type Validate = fn(&str, &mut InputFieldProps);

/// Notifications produced by the widgets of a stack.
#[derive(Debug, Clone, PartialEq)]
pub enum StackEvent {
    /// A controlled field at `slot` produced a new value
    FieldChanged { slot: usize, value: String },
    /// The selection of a table changed
    RowsSelected(Vec<Row>),
}

/// One entry of the stack.
pub enum Slot {
    Heading(String),
    Field {
        field: InputField,
        validate: Option<Validate>,
    },
    Table(DataTable),
}

impl Slot {
    fn focusable(&self) -> bool {
        !matches!(self, Slot::Heading(_))
    }

    fn constraint(&self) -> Constraint {
        match self {
            Slot::Heading(_) => Constraint::Length(1),
            Slot::Field { field, .. } => Constraint::Length(field.height()),
            Slot::Table(_) => Constraint::Min(6),
        }
    }
}

/// Widgets drawn top to bottom. Tab and BackTab move focus between the
/// focusable slots, every other event goes to the focused one.
pub struct WidgetStack {
    slots: Vec<Slot>,
    focus: Option<usize>,
    selected: Option<Vec<Row>>,
    tx: Sender<StackEvent>,
    rx: Receiver<StackEvent>,
}

impl Default for WidgetStack {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetStack {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self {
            slots: Vec::new(),
            focus: None,
            selected: None,
            tx,
            rx,
        }
    }

    pub fn heading(mut self, title: &str) -> Self {
        self.slots.push(Slot::Heading(title.to_string()));
        self
    }

    /// Adds a field that owns its value.
    pub fn field(self, props: InputFieldProps) -> Self {
        self.push(Slot::Field {
            field: InputField::uncontrolled(props),
            validate: None,
        })
    }

    /// Adds a field whose value is held by the stack. Every change is
    /// forwarded through the stack channel and echoed back on `sync`.
    pub fn controlled_field(
        self,
        props: InputFieldProps,
        validate: Option<Validate>,
    ) -> Self {
        let slot = self.slots.len();
        let tx = self.tx.clone();

        let field = InputField::controlled(props, "", move |value: &str| {
            let evt = StackEvent::FieldChanged {
                slot,
                value: value.to_string(),
            };
            if let Err(e) = tx.send(evt) {
                log::error!("failed to forward field change: {}", e);
            }
        });

        self.push(Slot::Field { field, validate })
    }

    /// Adds a table. Selectable tables report their selection through the
    /// stack channel.
    pub fn table(self, table: DataTable) -> Self {
        let table = if table.is_selectable() {
            let tx = self.tx.clone();
            table.on_row_select(move |rows: &[Row]| {
                if let Err(e) = tx.send(StackEvent::RowsSelected(rows.to_vec()))
                {
                    log::error!("failed to forward selection: {}", e);
                }
            })
        } else {
            table
        };

        self.push(Slot::Table(table))
    }

    fn push(mut self, slot: Slot) -> Self {
        if self.focus.is_none() && slot.focusable() {
            self.focus = Some(self.slots.len());
        }
        self.slots.push(slot);
        self
    }

    #[cfg(test)]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[cfg(test)]
    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    /// Last selection reported by a table, if any.
    #[cfg(test)]
    pub fn selected(&self) -> Option<&[Row]> {
        self.selected.as_deref()
    }

    #[cfg(test)]
    pub fn field_at(&self, slot: usize) -> Option<&InputField> {
        match self.slots.get(slot) {
            Some(Slot::Field { field, .. }) => Some(field),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn table_at(&self, slot: usize) -> Option<&DataTable> {
        match self.slots.get(slot) {
            Some(Slot::Table(table)) => Some(table),
            _ => None,
        }
    }

    pub fn focus_next(&mut self) {
        self.cycle_focus(1);
    }

    pub fn focus_previous(&mut self) {
        self.cycle_focus(self.slots.len().saturating_sub(1));
    }

    fn cycle_focus(&mut self, step: usize) {
        let Some(current) = self.focus else {
            return;
        };

        let len = self.slots.len();
        let mut idx = current;

        for _ in 0..len {
            idx = (idx + step) % len;
            if self.slots[idx].focusable() {
                self.focus = Some(idx);
                return;
            }
        }
    }

    /// Drains pending notifications: echoes controlled values back into their
    /// fields and records the latest table selection.
    pub fn sync(&mut self) -> Result<()> {
        while let Ok(evt) = self.rx.try_recv() {
            match evt {
                StackEvent::FieldChanged { slot, value } => {
                    if let Some(Slot::Field { field, validate }) =
                        self.slots.get_mut(slot)
                    {
                        if let Some(validate) = validate {
                            validate(&value, field.props_mut());
                        }
                        field.set_value(value)?;
                    }
                }
                StackEvent::RowsSelected(rows) => {
                    log::debug!("{} rows selected", rows.len());
                    self.selected = Some(rows);
                }
            }
        }

        Ok(())
    }

    /// Status line describing the latest selection.
    pub fn selection_summary(&self) -> Option<String> {
        self.selected.as_ref().map(|rows| {
            let names = rows
                .iter()
                .map(|r| r.project("name").unwrap_or_else(|| "?".to_string()))
                .join(", ");
            format!("Selected {}: {}", rows.len(), names)
        })
    }
}

impl CustomWidgetRef for WidgetStack {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut Buffer,
        ctx: &CustomWidgetContext,
    ) -> r_widgets::error::Result<()> {
        let mut constraints = self
            .slots
            .iter()
            .map(Slot::constraint)
            .collect::<Vec<_>>();
        // status line
        constraints.push(Constraint::Length(1));

        let areas = Layout::vertical(constraints).spacing(1).split(area);

        for (idx, slot) in self.slots.iter().enumerate() {
            let slot_ctx = CustomWidgetContext {
                colors: ctx.colors,
                focused: ctx.focused && self.focus == Some(idx),
            };

            match slot {
                Slot::Heading(title) => {
                    Header::new(title).render_ref(areas[idx], buf, &slot_ctx)?
                }
                Slot::Field { field, .. } => {
                    field.render_ref(areas[idx], buf, &slot_ctx)?
                }
                Slot::Table(table) => {
                    table.render_ref(areas[idx], buf, &slot_ctx)?
                }
            }
        }

        if let Some(summary) = self.selection_summary() {
            Header::muted(&summary).render_ref(
                areas[self.slots.len()],
                buf,
                ctx,
            )?;
        }

        Ok(())
    }
}

impl EventHandler for WidgetStack {
    fn process_event(&mut self, evt: &Event) -> r_widgets::error::Result<bool> {
        if let Event::Key(key) = evt
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Tab => {
                    self.focus_next();
                    return Ok(true);
                }
                KeyCode::BackTab => {
                    self.focus_previous();
                    return Ok(true);
                }
                _ => {}
            }
        }

        let Some(focus) = self.focus else {
            return Ok(false);
        };

        match self.slots.get_mut(focus) {
            Some(Slot::Field { field, .. }) => field.process_event(evt),
            Some(Slot::Table(table)) => table.process_event(evt),
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
#[path = "./stack_tests.rs"]
mod tests;
