//! Theme and color palette definitions for the terminal UI.

use ratatui::style::{Color, palette::tailwind};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Color palette derived from the current theme.
#[derive(Clone, Debug, PartialEq)]
pub struct Colors {
    pub buffer_bg: Color,
    pub bar_bg: Color,
    pub highlight: Color,
    pub page_title: Color,
    pub text: Color,
    pub border_color: Color,
    pub gray: Color,
}

impl Colors {
    /// True color set around a tailwind accent palette.
    fn tailwind(accent: &tailwind::Palette) -> Self {
        Self {
            buffer_bg: tailwind::SLATE.c950,
            bar_bg: accent.c900,
            highlight: tailwind::AMBER.c400,
            page_title: accent.c400,
            text: tailwind::SLATE.c200,
            border_color: accent.c600,
            gray: tailwind::SLATE.c500,
        }
    }

    /// 16 color set for terminals without true color.
    fn basic(accent_light: Color, accent_dark: Color) -> Self {
        Self {
            buffer_bg: Color::Black,
            bar_bg: accent_dark,
            highlight: Color::LightYellow,
            page_title: accent_light,
            text: Color::White,
            border_color: accent_light,
            gray: Color::DarkGray,
        }
    }
}

/// Available color themes for the application.
#[derive(
    Debug, Eq, PartialEq, Copy, Clone, Display, EnumString, EnumIter,
)]
pub enum Theme {
    Blue,
    Emerald,
    Indigo,
    Red,
}

impl Theme {
    /// Parses a theme from its string name, defaulting to Blue.
    pub fn from_string(value: &str) -> Theme {
        value.parse().unwrap_or(Theme::Blue)
    }

    /// The theme following this one, wrapping around.
    pub fn next(self) -> Theme {
        Theme::iter()
            .cycle()
            .skip_while(|t| *t != self)
            .nth(1)
            .unwrap_or(Theme::Blue)
    }

    fn accent(self) -> &'static tailwind::Palette {
        match self {
            Theme::Blue => &tailwind::BLUE,
            Theme::Emerald => &tailwind::EMERALD,
            Theme::Indigo => &tailwind::INDIGO,
            Theme::Red => &tailwind::RED,
        }
    }

    // (light, dark) basic colors standing in for the accent palette
    fn basic_accent(self) -> (Color, Color) {
        match self {
            Theme::Blue => (Color::LightCyan, Color::Blue),
            Theme::Emerald => (Color::LightGreen, Color::Green),
            Theme::Indigo => (Color::LightMagenta, Color::Magenta),
            Theme::Red => (Color::LightRed, Color::Red),
        }
    }

    /// Resolves the full color set for this theme, using basic colors if
    /// true color is not supported.
    pub fn colors(self, true_color_enabled: bool) -> Colors {
        if true_color_enabled {
            return Colors::tailwind(self.accent());
        }

        let (light, dark) = self.basic_accent();
        Colors::basic(light, dark)
    }
}

/// Whether stdout supports 24-bit color.
pub fn true_color_enabled() -> bool {
    match supports_color::on(supports_color::Stream::Stdout) {
        Some(support) => support.has_16m,
        _ => false,
    }
}

#[cfg(test)]
#[path = "./colors_tests.rs"]
mod tests;
