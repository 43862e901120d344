//! Browsable catalog of widget configurations.

use color_eyre::eyre::Result;
use r_widgets::{
    input::{InputFieldProps, InputType, Size, Variant},
    table::DataTable,
    traits::{CustomWidgetContext, CustomWidgetRef, EventHandler},
};
use ratatui::{
    buffer::Buffer,
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{
        Block, BorderType, List, ListItem, ListState, StatefulWidget, Widget,
    },
};
use strum::Display;

use crate::ui::stack::WidgetStack;

use super::{Page, sample_columns, sample_rows};

const STORY_LIST_WIDTH: u16 = 28;

/// A single configuration shown by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Story {
    #[strum(to_string = "InputField / Default")]
    InputDefault,
    #[strum(to_string = "InputField / Password")]
    InputPassword,
    #[strum(to_string = "InputField / Variants")]
    InputVariants,
    #[strum(to_string = "InputField / Sizes")]
    InputSizes,
    #[strum(to_string = "InputField / States")]
    InputStates,
    #[strum(to_string = "DataTable / Default")]
    TableDefault,
    #[strum(to_string = "DataTable / Selectable")]
    TableSelectable,
    #[strum(to_string = "DataTable / Loading")]
    TableLoading,
    #[strum(to_string = "DataTable / Empty")]
    TableEmpty,
}

impl Story {
    pub const ALL: [Story; 9] = [
        Story::InputDefault,
        Story::InputPassword,
        Story::InputVariants,
        Story::InputSizes,
        Story::InputStates,
        Story::TableDefault,
        Story::TableSelectable,
        Story::TableLoading,
        Story::TableEmpty,
    ];

    fn position(self) -> usize {
        Story::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Builds the widgets of this story.
    pub fn build(self) -> Result<WidgetStack> {
        let stack = WidgetStack::new().heading(&self.to_string());

        let stack = match self {
            Story::InputDefault => stack.controlled_field(
                InputFieldProps::builder()
                    .label("Default Input")
                    .placeholder("Type here")
                    .helper_text("Helper text example")
                    .clearable(true)
                    .build()?,
                None,
            ),
            Story::InputPassword => stack.controlled_field(
                InputFieldProps::builder()
                    .label("Password")
                    .placeholder("Enter password")
                    .input_type(InputType::Password)
                    .error_message("Too short")
                    .build()?,
                Some(validate_short_password),
            ),
            Story::InputVariants => {
                let mut stack = stack;
                for variant in Variant::ALL {
                    stack = stack.field(
                        InputFieldProps::builder()
                            .label(capitalize(&variant.to_string()))
                            .placeholder("Type...")
                            .variant(variant)
                            .build()?,
                    );
                }
                stack
            }
            Story::InputSizes => {
                let mut stack = stack;
                for (size, name) in
                    Size::ALL.into_iter().zip(["Small", "Medium", "Large"])
                {
                    stack = stack.field(
                        InputFieldProps::builder()
                            .label(name)
                            .placeholder(format!("{name} input"))
                            .size(size)
                            .build()?,
                    );
                }
                stack
            }
            Story::InputStates => stack
                .field(
                    InputFieldProps::builder()
                        .label("Disabled")
                        .placeholder("Can't type")
                        .disabled(true)
                        .build()?,
                )
                .field(
                    InputFieldProps::builder()
                        .label("Loading")
                        .placeholder("Loading...")
                        .loading(true)
                        .build()?,
                )
                .field(
                    InputFieldProps::builder()
                        .label("Invalid")
                        .placeholder("Error state")
                        .invalid(true)
                        .error_message("Something went wrong")
                        .build()?,
                ),
            Story::TableDefault => {
                stack.table(DataTable::new(sample_rows(), sample_columns())?)
            }
            Story::TableSelectable => stack.table(
                DataTable::new(sample_rows(), sample_columns())?
                    .selectable(true),
            ),
            Story::TableLoading => stack.table(
                DataTable::new(Vec::new(), sample_columns())?.loading(true),
            ),
            Story::TableEmpty => {
                stack.table(DataTable::new(Vec::new(), sample_columns())?)
            }
        };

        Ok(stack)
    }
}

// The error message is cleared once the password is long enough.
fn validate_short_password(value: &str, props: &mut InputFieldProps) {
    let len = value.chars().count();
    props.invalid = len > 0 && len < 6;
    props.error_message = Some(if len < 6 { "Too short" } else { "" }.into());
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub struct CatalogPage {
    story: Story,
    stack: WidgetStack,
}

impl CatalogPage {
    pub fn new() -> Result<Self> {
        let story = Story::InputDefault;
        Ok(Self {
            story,
            stack: story.build()?,
        })
    }

    #[cfg(test)]
    pub fn story(&self) -> Story {
        self.story
    }

    #[cfg(test)]
    pub fn stack(&self) -> &WidgetStack {
        &self.stack
    }

    /// Shows the story after the current one. Stops at the last story.
    pub fn next_story(&mut self) -> Result<()> {
        let idx = (self.story.position() + 1).min(Story::ALL.len() - 1);
        self.show(Story::ALL[idx])
    }

    /// Shows the story before the current one. Stops at the first story.
    pub fn previous_story(&mut self) -> Result<()> {
        let idx = self.story.position().saturating_sub(1);
        self.show(Story::ALL[idx])
    }

    fn show(&mut self, story: Story) -> Result<()> {
        if story != self.story {
            log::debug!("showing story {}", story);
            self.stack = story.build()?;
            self.story = story;
        }
        Ok(())
    }

    fn render_story_list(
        &self,
        area: Rect,
        buf: &mut Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let items = Story::ALL
            .iter()
            .map(|s| ListItem::new(s.to_string()))
            .collect::<Vec<_>>();

        let list = List::new(items)
            .block(
                Block::bordered()
                    .title(" Stories ")
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(ctx.colors.border)),
            )
            .style(
                Style::default().fg(ctx.colors.text).bg(ctx.colors.buffer_bg),
            )
            .highlight_style(
                Style::default()
                    .bg(ctx.colors.selected_row_bg)
                    .fg(ctx.colors.cursor_row_fg)
                    .add_modifier(Modifier::BOLD),
            );

        let mut state =
            ListState::default().with_selected(Some(self.story.position()));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}

impl Page for CatalogPage {
    fn legend(&self) -> &str {
        "([/]) previous/next story | (tab) next widget"
    }

    fn sync(&mut self) -> Result<()> {
        self.stack.sync()
    }
}

impl CustomWidgetRef for CatalogPage {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut Buffer,
        ctx: &CustomWidgetContext,
    ) -> r_widgets::error::Result<()> {
        let [list_area, story_area] = Layout::horizontal([
            Constraint::Length(STORY_LIST_WIDTH),
            Constraint::Min(0),
        ])
        .spacing(2)
        .areas(area);

        self.render_story_list(list_area, buf, ctx);
        Block::new()
            .style(Style::default().bg(ctx.colors.buffer_bg))
            .render(story_area, buf);
        self.stack.render_ref(story_area, buf, ctx)
    }
}

impl EventHandler for CatalogPage {
    fn process_event(&mut self, evt: &Event) -> r_widgets::error::Result<bool> {
        if let Event::Key(key) = evt
            && key.kind == KeyEventKind::Press
        {
            let step = match key.code {
                KeyCode::Char(']') | KeyCode::PageDown => Some(true),
                KeyCode::Char('[') | KeyCode::PageUp => Some(false),
                _ => None,
            };

            if let Some(forward) = step {
                let res = if forward {
                    self.next_story()
                } else {
                    self.previous_story()
                };

                if let Err(e) = res {
                    log::error!("failed to build story: {}", e);
                }

                return Ok(true);
            }
        }

        self.stack.process_event(evt)
    }
}

#[cfg(test)]
#[path = "./catalog_tests.rs"]
mod tests;
