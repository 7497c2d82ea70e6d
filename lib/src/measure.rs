//! Text measurement used to size title labels

use unicode_width::UnicodeWidthStr;

/// Measures the rendered width of a string.
///
/// Widths are sub-pixel floats. The layout truncates them toward zero when
/// widening a label's bounds.
pub trait Measure {
    /// Width of `text` when drawn
    fn measure(&self, text: &str) -> f32;
}

impl<F> Measure for F
where
    F: Fn(&str) -> f32,
{
    fn measure(&self, text: &str) -> f32 {
        self(text)
    }
}

/// Terminal measurement: one unit per display cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CellWidth;

impl Measure for CellWidth {
    fn measure(&self, text: &str) -> f32 {
        text.width() as f32
    }
}

#[cfg(test)]
#[path = "./measure_tests.rs"]
mod tests;
