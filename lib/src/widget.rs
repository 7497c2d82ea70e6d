//! Ratatui rendering of the title bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::StatefulWidget,
};
use unicode_width::UnicodeWidthChar;

use crate::{
    layout::{DrawCommand, Geometry, LayoutEngine, PositionPolicy, StyleKind},
    measure::CellWidth,
    scroll::PageBarState,
    text::TextProvider,
};

/// Color used for the centered title when none is configured
pub const DEFAULT_HIGHLIGHT_COLOR: Color = Color::Yellow;

/// Normal and highlighted label styles.
///
/// The highlighted style is derived from the base style once, when the
/// bar is configured, and reused for every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBarStyle {
    normal: Style,
    highlighted: Style,
}

impl Default for PageBarStyle {
    fn default() -> Self {
        Self::new(Style::default(), DEFAULT_HIGHLIGHT_COLOR)
    }
}

impl PageBarStyle {
    /// Resolves a bold, `highlight` colored variant of `base`
    pub fn new(base: Style, highlight: Color) -> Self {
        Self {
            normal: base,
            highlighted: base.fg(highlight).add_modifier(Modifier::BOLD),
        }
    }

    /// Style used to draw labels of the given kind
    pub fn resolve(&self, kind: StyleKind) -> Style {
        match kind {
            StyleKind::Normal => self.normal,
            StyleKind::Highlighted => self.highlighted,
        }
    }
}

/// Title bar mirroring a paged view.
///
/// ```
/// use pagebar::{scroll::PageBarState, widget::PageBar};
/// use ratatui::{buffer::Buffer, layout::Rect, widgets::StatefulWidget};
///
/// let titles = ["Inbox", "Sent", "Drafts"];
/// let mut state = PageBarState::new(1);
/// let area = Rect::new(0, 0, 30, 1);
/// let mut buf = Buffer::empty(area);
///
/// PageBar::new(&titles).padding(1, 1).render(area, &mut buf, &mut state);
/// ```
#[derive(Clone, Copy)]
pub struct PageBar<'a> {
    titles: Option<&'a dyn TextProvider>,
    style: PageBarStyle,
    padding_left: u16,
    padding_right: u16,
    baseline: u16,
    engine: LayoutEngine,
}

impl Default for PageBar<'_> {
    fn default() -> Self {
        Self {
            titles: None,
            style: PageBarStyle::default(),
            padding_left: 0,
            padding_right: 0,
            baseline: 0,
            engine: LayoutEngine::default(),
        }
    }
}

impl<'a> PageBar<'a> {
    /// Creates a bar showing the given titles
    pub fn new(titles: &'a dyn TextProvider) -> Self {
        Self {
            titles: Some(titles),
            ..Default::default()
        }
    }

    /// Sets or clears the titles
    pub fn titles(mut self, titles: Option<&'a dyn TextProvider>) -> Self {
        self.titles = titles;
        self
    }

    /// Sets label styles
    pub fn style(mut self, style: PageBarStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets horizontal padding in cells
    pub fn padding(mut self, left: u16, right: u16) -> Self {
        self.padding_left = left;
        self.padding_right = right;
        self
    }

    /// Row within the area that labels are drawn on
    pub fn baseline(mut self, row: u16) -> Self {
        self.baseline = row;
        self
    }

    /// Sets how a position outside the titles is handled
    pub fn policy(mut self, policy: PositionPolicy) -> Self {
        self.engine = LayoutEngine::new(policy);
        self
    }

    fn draw(&self, area: Rect, buf: &mut Buffer, command: &DrawCommand) {
        if command.y < 0 || command.y >= area.height as i32 {
            return;
        }

        let (x, text) = clip_left(command.text, command.x);

        if text.is_empty() || x >= area.width as i32 {
            return;
        }

        buf.set_stringn(
            area.x + x as u16,
            area.y + command.y as u16,
            text,
            (area.width as i32 - x) as usize,
            self.style.resolve(command.style),
        );
    }
}

impl StatefulWidget for PageBar<'_> {
    type State = PageBarState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.set_width(area.width as i32);

        if area.is_empty() {
            return;
        }

        buf.set_style(area, self.style.resolve(StyleKind::Normal));

        let geometry = Geometry::new(area.width as i32)
            .with_padding(self.padding_left as i32, self.padding_right as i32)
            .with_baseline(self.baseline as i32);

        let commands = match self.engine.layout(
            state.scroll(),
            self.titles,
            &geometry,
            &CellWidth,
        ) {
            Ok(commands) => commands,
            Err(e) => {
                log::warn!("skipping page bar frame: {e}");
                return;
            }
        };

        for command in commands.iter() {
            self.draw(area, buf, command);
        }
    }
}

/// Drops the leading cells of `text` that fall left of column zero
fn clip_left(text: &str, x: i32) -> (i32, &str) {
    let mut x = x;

    for (index, ch) in text.char_indices() {
        if x >= 0 {
            return (x, &text[index..]);
        }
        x += ch.width().unwrap_or(0) as i32;
    }

    (x.max(0), "")
}

#[cfg(test)]
#[path = "./widget_tests.rs"]
mod tests;
