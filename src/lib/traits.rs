//! Rendering and event handling traits shared by the widgets.

use ratatui::{buffer::Buffer, crossterm::event::Event, layout::Rect};

use crate::{colors::Colors, error::Result};

/// Context passed to widgets while rendering.
pub struct CustomWidgetContext<'a> {
    /// palette for the current theme
    pub colors: &'a Colors,
    /// whether the widget being rendered currently owns keyboard focus
    pub focused: bool,
}

/// Widgets that render by reference so their state survives the frame.
pub trait CustomWidgetRef {
    /// Renders the widget into `buf` within `area`.
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()>;
}

/// Widgets that react to terminal input.
pub trait EventHandler {
    /// Processes a terminal event. Returns true if the event was consumed.
    fn process_event(&mut self, evt: &Event) -> Result<bool>;
}
