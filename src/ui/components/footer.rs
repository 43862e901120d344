use r_widgets::{
    error::Result,
    traits::{CustomWidgetContext, CustomWidgetRef},
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Paragraph, Widget},
};

/// Key legend drawn at the bottom of the screen.
pub struct InfoFooter {
    content: String,
}

impl InfoFooter {
    pub fn new(content: String) -> Self {
        Self { content }
    }
}

impl CustomWidgetRef for InfoFooter {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let info_footer = Paragraph::new(Line::from(self.content.as_str()))
            .style(Style::new().fg(ctx.colors.text).bg(ctx.colors.buffer_bg))
            .centered()
            .block(
                Block::bordered()
                    .border_type(BorderType::Double)
                    .border_style(Style::new().fg(ctx.colors.border)),
            );

        info_footer.render(area, buf);

        Ok(())
    }
}

#[cfg(test)]
#[path = "./footer_tests.rs"]
mod tests;
