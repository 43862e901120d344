//! Input field widget: value handling, affordances and rendering.

use derive_builder::Builder;
use ratatui::{
    buffer::Buffer,
    crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers},
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    error::{Result, WidgetError},
    traits::{CustomWidgetContext, CustomWidgetRef, EventHandler},
};

use super::{
    appearance::{InputType, Size, Variant},
    value::{ChangeListener, ValueMode},
    visual::{Message, VisualState, visual_state},
};

/// Character drawn in place of each obscured character.
pub const MASK_CHAR: char = '•';
/// Glyph of the clear action.
pub const CLEAR_GLYPH: &str = "✕";
/// Label of the reveal action while the password is hidden.
pub const SHOW_LABEL: &str = "show";
/// Label of the reveal action while the password is shown.
pub const HIDE_LABEL: &str = "hide";

/// Declarative configuration of an input field. Every flag is independent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(setter(into), default)]
pub struct InputFieldProps {
    /// Label drawn above the box
    #[builder(setter(into, strip_option))]
    pub label: Option<String>,
    /// Text shown while the value is empty
    #[builder(setter(into, strip_option))]
    pub placeholder: Option<String>,
    /// Text below the box while the field is valid
    #[builder(setter(into, strip_option))]
    pub helper_text: Option<String>,
    /// Text below the box while the field is invalid
    #[builder(setter(into, strip_option))]
    pub error_message: Option<String>,
    /// Plain text or password
    pub input_type: InputType,
    /// Blocks input and removes every affordance
    pub disabled: bool,
    /// Marks the value as invalid
    pub invalid: bool,
    /// Applies the loading treatment without blocking input
    pub loading: bool,
    /// Offers the clear action while the value is non-empty
    pub clearable: bool,
    /// Box style
    pub variant: Variant,
    /// Box size
    pub size: Size,
}

impl InputFieldProps {
    /// Returns a new instance of InputFieldPropsBuilder.
    pub fn builder() -> InputFieldPropsBuilder {
        InputFieldPropsBuilder::default()
    }
}

/// Single-line text or password input.
#[derive(Debug)]
pub struct InputField {
    props: InputFieldProps,
    mode: ValueMode,
    revealed: bool,
}

impl InputField {
    /// Creates a field whose mode follows from `value`: a supplied value
    /// makes the field controlled, otherwise it owns its value.
    pub fn new(
        props: InputFieldProps,
        value: Option<String>,
        on_change: Option<Box<dyn ChangeListener>>,
    ) -> Self {
        let mode = match value {
            Some(value) => ValueMode::Controlled { value, on_change },
            None => ValueMode::Uncontrolled {
                value: String::new(),
            },
        };

        Self {
            props,
            mode,
            revealed: false,
        }
    }

    /// Creates a field that owns its value, starting empty.
    pub fn uncontrolled(props: InputFieldProps) -> Self {
        Self::new(props, None, None)
    }

    /// Creates a field whose value is owned by the caller.
    pub fn controlled(
        props: InputFieldProps,
        value: impl Into<String>,
        on_change: impl ChangeListener + 'static,
    ) -> Self {
        Self::new(props, Some(value.into()), Some(Box::new(on_change)))
    }

    /// Current props.
    pub fn props(&self) -> &InputFieldProps {
        &self.props
    }

    /// Mutable access to the props, for flags the caller derives from the
    /// value such as `invalid`.
    pub fn props_mut(&mut self) -> &mut InputFieldProps {
        &mut self.props
    }

    /// Displayed value.
    pub fn value(&self) -> &str {
        self.mode.value()
    }

    /// Returns true if the caller owns the value.
    pub fn is_controlled(&self) -> bool {
        self.mode.is_controlled()
    }

    /// Returns true while a password is shown in clear text.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Visual state for the current props, value and reveal flag.
    pub fn visual_state(&self) -> VisualState {
        visual_state(&self.props, self.value(), self.revealed)
    }

    /// Pushes the caller-owned value into a controlled field.
    pub fn set_value(&mut self, new_value: impl Into<String>) -> Result<()> {
        match &mut self.mode {
            ValueMode::Controlled { value, .. } => {
                *value = new_value.into();
                Ok(())
            }
            ValueMode::Uncontrolled { .. } => Err(WidgetError::NotControlled),
        }
    }

    /// Handles a value typed by the user. Returns false when the field is
    /// disabled and the value was dropped.
    pub fn input(&mut self, new_value: impl Into<String>) -> bool {
        if self.props.disabled {
            return false;
        }

        self.mode.request(new_value.into());
        true
    }

    /// Appends `c` to the current value.
    pub fn insert_char(&mut self, c: char) -> bool {
        let mut next = self.value().to_string();
        next.push(c);
        self.input(next)
    }

    /// Removes the last character of the current value.
    pub fn delete_char(&mut self) -> bool {
        let mut next = self.value().to_string();
        if next.pop().is_none() {
            return false;
        }
        self.input(next)
    }

    /// Resets the value to empty, as if the user erased it.
    pub fn clear(&mut self) -> Result<()> {
        if !self.visual_state().show_clear {
            return Err(WidgetError::ClearUnavailable);
        }

        log::debug!("clearing input {:?}", self.props.label);
        self.mode.request(String::new());
        Ok(())
    }

    /// Shows or hides the password text. The value is unchanged.
    pub fn toggle_reveal(&mut self) -> Result<()> {
        if !self.visual_state().show_reveal {
            return Err(WidgetError::RevealUnavailable);
        }

        self.revealed = !self.revealed;
        log::debug!("password revealed: {}", self.revealed);
        Ok(())
    }

    /// Value as drawn: masked while obscured.
    pub fn display_text(&self) -> String {
        if self.visual_state().obscured {
            MASK_CHAR.to_string().repeat(self.value().chars().count())
        } else {
            self.value().to_string()
        }
    }

    /// Rows needed to draw the field.
    pub fn height(&self) -> u16 {
        let label = u16::from(self.props.label.is_some());
        let message = u16::from(
            self.props.helper_text.is_some()
                || self.props.error_message.is_some(),
        );
        label
            + self.props.variant.border_height()
            + self.props.size.content_height()
            + message
    }

    fn affordances(&self, state: &VisualState) -> Vec<&'static str> {
        let mut items = Vec::new();

        if state.show_reveal {
            items.push(if self.revealed { HIDE_LABEL } else { SHOW_LABEL });
        }

        if state.show_clear {
            items.push(CLEAR_GLYPH);
        }

        items
    }

    fn text_style(
        &self,
        state: &VisualState,
        ctx: &CustomWidgetContext,
    ) -> Style {
        let mut style = Style::default().fg(ctx.colors.text);

        if state.error_tint {
            style = style.fg(ctx.colors.error);
        }

        if state.loading {
            style = style
                .fg(ctx.colors.loading)
                .add_modifier(Modifier::SLOW_BLINK);
        }

        if state.dimmed {
            style = style.fg(ctx.colors.disabled).add_modifier(Modifier::DIM);
        }

        style
    }

    fn render_box(
        &self,
        state: &VisualState,
        area: Rect,
        buf: &mut Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let variant = self.props.variant;

        let border_color = if state.error_tint {
            ctx.colors.error
        } else if ctx.focused && state.editable {
            ctx.colors.focus_border
        } else if state.dimmed {
            ctx.colors.disabled
        } else {
            ctx.colors.border
        };

        let bg = match variant {
            Variant::Filled => ctx.colors.fill_bg,
            _ => ctx.colors.buffer_bg,
        };

        let block = Block::new()
            .borders(variant.borders())
            .border_type(variant.border_type())
            .border_style(Style::default().fg(border_color))
            .padding(self.props.size.padding())
            .style(Style::default().bg(bg));

        let inner = block.inner(area);
        block.render(area, buf);

        let affordances = self.affordances(state).join(" ");
        let affordance_width = if affordances.is_empty() {
            0
        } else {
            affordances.width() as u16 + 1
        };

        let [text_area, action_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(affordance_width),
        ])
        .areas(inner);

        let mut spans = Vec::new();

        if self.value().is_empty() {
            if let Some(placeholder) = &self.props.placeholder {
                spans.push(Span::styled(
                    placeholder.as_str(),
                    Style::default().fg(ctx.colors.muted),
                ));
            }
        } else {
            spans.push(Span::styled(
                self.display_text(),
                self.text_style(state, ctx),
            ));
        }

        if ctx.focused && state.editable {
            spans.insert(
                if self.value().is_empty() { 0 } else { spans.len() },
                Span::styled(
                    " ",
                    Style::default().add_modifier(Modifier::REVERSED),
                ),
            );
        }

        Paragraph::new(Line::from(spans)).render(text_area, buf);

        if affordance_width > 0 {
            Paragraph::new(format!(" {affordances}"))
                .style(Style::default().fg(ctx.colors.muted))
                .render(action_area, buf);
        }
    }
}

impl CustomWidgetRef for InputField {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let state = self.visual_state();

        let label_height = u16::from(self.props.label.is_some());
        let box_height = self.props.variant.border_height()
            + self.props.size.content_height();

        let [label_area, box_area, message_area] = Layout::vertical([
            Constraint::Length(label_height),
            Constraint::Length(box_height),
            Constraint::Min(0),
        ])
        .areas(area);

        if let Some(label) = &self.props.label {
            let mut style = Style::default()
                .fg(ctx.colors.label)
                .add_modifier(Modifier::BOLD);
            if state.dimmed {
                style = style.fg(ctx.colors.disabled);
            }
            Paragraph::new(label.as_str())
                .style(style)
                .render(label_area, buf);
        }

        self.render_box(&state, box_area, buf, ctx);

        match &state.message {
            Some(Message::Error(text)) => {
                Paragraph::new(text.as_str())
                    .style(Style::default().fg(ctx.colors.error))
                    .render(message_area, buf);
            }
            Some(Message::Helper(text)) => {
                Paragraph::new(text.as_str())
                    .style(Style::default().fg(ctx.colors.muted))
                    .render(message_area, buf);
            }
            None => {}
        }

        Ok(())
    }
}

impl EventHandler for InputField {
    fn process_event(&mut self, evt: &Event) -> Result<bool> {
        let Event::Key(key) = evt else {
            return Ok(false);
        };

        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('x') if self.visual_state().show_clear => {
                    self.clear()?;
                    Ok(true)
                }
                KeyCode::Char('r') if self.visual_state().show_reveal => {
                    self.toggle_reveal()?;
                    Ok(true)
                }
                _ => Ok(false),
            };
        }

        match key.code {
            KeyCode::Char(c) => Ok(self.insert_char(c)),
            KeyCode::Backspace => Ok(self.delete_char()),
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
#[path = "./input_field_tests.rs"]
mod tests;
