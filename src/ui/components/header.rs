//! Header component for section titles.

use r_widgets::{
    error::Result,
    traits::{CustomWidgetContext, CustomWidgetRef},
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

/// Single line of styled text.
pub struct Header {
    title: String,
    muted: bool,
}

impl Header {
    /// Bold section title.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            muted: false,
        }
    }

    /// Status text in the muted color.
    pub fn muted(title: &str) -> Self {
        Self {
            title: title.to_string(),
            muted: true,
        }
    }
}

impl CustomWidgetRef for Header {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let style = if self.muted {
            Style::default().fg(ctx.colors.muted)
        } else {
            Style::default()
                .fg(ctx.colors.header_fg)
                .bg(ctx.colors.header_bg)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Line::from(self.title.as_str()))
            .style(style)
            .render(area, buf);

        Ok(())
    }
}

#[cfg(test)]
#[path = "./header_tests.rs"]
mod tests;
