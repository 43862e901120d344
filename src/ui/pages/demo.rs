//! Page composing every widget the way a host application would.

use color_eyre::eyre::Result;
use r_widgets::{
    input::{InputFieldProps, InputType},
    record::Row,
    table::DataTable,
    traits::{CustomWidgetContext, CustomWidgetRef, EventHandler},
};
use ratatui::{buffer::Buffer, crossterm::event::Event, layout::Rect};

use crate::ui::stack::WidgetStack;

use super::{Page, sample_columns, validate_password};

#[cfg(test)]
pub const NAME_SLOT: usize = 1;
#[cfg(test)]
pub const PASSWORD_SLOT: usize = 2;
#[cfg(test)]
pub const TABLE_SLOT: usize = 6;

pub struct DemoPage {
    stack: WidgetStack,
}

impl DemoPage {
    pub fn new(rows: Vec<Row>) -> Result<Self> {
        let name = InputFieldProps::builder()
            .label("Your Name")
            .placeholder("Enter name")
            .helper_text("Type your full name")
            .clearable(true)
            .build()?;

        let password = InputFieldProps::builder()
            .label("Password")
            .placeholder("Enter password")
            .input_type(InputType::Password)
            .error_message("Min 6 characters")
            .build()?;

        let disabled = InputFieldProps::builder()
            .label("Disabled")
            .placeholder("Disabled field")
            .disabled(true)
            .build()?;

        let loading = InputFieldProps::builder()
            .label("Loading")
            .placeholder("Loading...")
            .loading(true)
            .build()?;

        let table = DataTable::new(rows, sample_columns())?.selectable(true);

        let stack = WidgetStack::new()
            .heading("Input Fields")
            .controlled_field(name, None)
            .controlled_field(password, Some(validate_password))
            .field(disabled)
            .field(loading)
            .heading("Data Table")
            .table(table);

        Ok(Self { stack })
    }

    #[cfg(test)]
    pub fn stack(&self) -> &WidgetStack {
        &self.stack
    }
}

impl Page for DemoPage {
    fn legend(&self) -> &str {
        "(tab) next widget | (space) select row | (enter) sort column"
    }

    fn sync(&mut self) -> Result<()> {
        self.stack.sync()
    }
}

impl CustomWidgetRef for DemoPage {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut Buffer,
        ctx: &CustomWidgetContext,
    ) -> r_widgets::error::Result<()> {
        self.stack.render_ref(area, buf, ctx)
    }
}

impl EventHandler for DemoPage {
    fn process_event(&mut self, evt: &Event) -> r_widgets::error::Result<bool> {
        self.stack.process_event(evt)
    }
}

#[cfg(test)]
#[path = "./demo_tests.rs"]
mod tests;
