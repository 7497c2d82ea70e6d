//! Horizontal strip of pages following the pager's scroll offset.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::traits::{CustomWidget, CustomWidgetContext};

/// Renders the one or two pages visible at the given scroll offset.
pub struct PageStrip<'a> {
    titles: &'a [String],
    scroll_x: i32,
}

impl<'a> PageStrip<'a> {
    /// Creates a strip over `titles`, scrolled by `scroll_x` cells.
    pub fn new(titles: &'a [String], scroll_x: i32) -> Self {
        Self { titles, scroll_x }
    }

    fn page_lines(&self, page: usize, ctx: &CustomWidgetContext) -> Vec<Line<'a>> {
        let title_style = Style::new()
            .fg(ctx.colors.page_title)
            .add_modifier(Modifier::BOLD);
        let text_style = Style::new().fg(ctx.colors.text);
        let muted_style = Style::new().fg(ctx.colors.gray);

        vec![
            Line::default(),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(self.titles[page].as_str(), title_style),
            ]),
            Line::from(Span::styled(
                format!("  page {} of {}", page + 1, self.titles.len()),
                muted_style,
            )),
            Line::default(),
            Line::from(Span::styled(
                "  Drag with the mouse or use the arrow keys",
                text_style,
            )),
            Line::from(Span::styled(
                "  to move between pages.",
                text_style,
            )),
        ]
    }
}

impl CustomWidget for PageStrip<'_> {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        if area.is_empty() || self.titles.is_empty() {
            return;
        }

        let width = area.width as i32;
        let first = self.scroll_x.div_euclid(width);

        for page in first..=first + 1 {
            if page < 0 || page as usize >= self.titles.len() {
                continue;
            }

            let left = page * width - self.scroll_x;
            let visible_left = left.max(0);
            let visible_right = (left + width).min(width);

            if visible_right <= visible_left {
                continue;
            }

            let page_area = Rect::new(
                area.x + visible_left as u16,
                area.y,
                (visible_right - visible_left) as u16,
                area.height,
            );

            // columns of this page scrolled off the left edge
            let hidden = (visible_left - left) as u16;

            Paragraph::new(self.page_lines(page as usize, ctx))
                .style(Style::new().bg(ctx.colors.buffer_bg))
                .scroll((0, hidden))
                .render(page_area, buf);
        }
    }
}

#[cfg(test)]
#[path = "./pages_tests.rs"]
mod tests;
