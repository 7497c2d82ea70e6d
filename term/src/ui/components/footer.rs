//! Footer showing the key legend.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::ui::traits::{CustomWidget, CustomWidgetContext};

/// Bordered, centered line of help text.
pub struct InfoFooter {
    content: String,
}

impl InfoFooter {
    /// Creates a footer with the given content.
    pub fn new(content: String) -> Self {
        Self { content }
    }
}

impl CustomWidget for InfoFooter {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let info_footer = Paragraph::new(Line::from(self.content.as_str()))
            .style(Style::new().fg(ctx.colors.text).bg(ctx.colors.buffer_bg))
            .centered()
            .block(
                Block::bordered()
                    .border_type(BorderType::Double)
                    .border_style(Style::new().fg(ctx.colors.border_color)),
            );

        info_footer.render(area, buf)
    }
}

#[cfg(test)]
#[path = "./footer_tests.rs"]
mod tests;
