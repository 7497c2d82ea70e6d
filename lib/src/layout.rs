//! Per-frame layout of the previous, current and next title labels
//!
//! The layout is a pure function of the scroll state, the titles and the
//! viewport geometry. Nothing is retained between frames.
//!
//! Each label gets a bounds rectangle whose width is the measured text
//! width plus the horizontal padding. The current label is centered and
//! shifted by the scroll offset, then clamped to the viewport. The
//! neighbouring labels start flush against the viewport edges and are
//! pushed outward so they never overlap the current label.
//!
//! Coordinate arithmetic wraps on overflow. Positions and offsets are taken
//! as reported, so extreme values draw degenerately instead of panicking.

use serde::{Deserialize, Serialize};

use crate::{
    error::{PageBarError, Result},
    measure::Measure,
    scroll::ScrollState,
    text::TextProvider,
};

/// What to do when the scroll position does not address a title, e.g. after
/// the number of titles shrinks under a settled page.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionPolicy {
    /// Clamp the position into the range of available titles
    #[default]
    Clamp,
    /// Report [`PageBarError::PositionOutOfRange`]
    Strict,
}

/// Styling applied to a drawn label.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleKind {
    /// Regular text
    #[default]
    Normal,
    /// The current label sits on the visual center of the bar
    Highlighted,
}

/// Which page a label belongs to, relative to the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The page before the current one
    Previous,
    /// The current page
    Current,
    /// The page after the current one
    Next,
}

/// Working rectangle of a label in pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// left edge
    pub left: i32,
    /// top edge
    pub top: i32,
    /// right edge
    pub right: i32,
    /// bottom edge
    pub bottom: i32,
}

impl Bounds {
    /// Creates a rectangle from its edges
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Horizontal extent
    pub fn width(&self) -> i32 {
        self.right.wrapping_sub(self.left)
    }

    /// Moves the rectangle horizontally by `dx`
    pub fn offset(&mut self, dx: i32) {
        self.left = self.left.wrapping_add(dx);
        self.right = self.right.wrapping_add(dx);
    }

    /// Moves the rectangle so its left edge is at `x`, keeping its width
    pub fn offset_to(&mut self, x: i32) {
        self.offset(x.wrapping_sub(self.left));
    }

    /// Widens the rectangle to the right by a measured text width,
    /// truncated toward zero.
    fn widened(mut self, text_width: f32) -> Self {
        self.right = self.right.wrapping_add(text_width as i32);
        self
    }
}

/// Viewport geometry supplied by the host for one frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Width of the bar
    pub width: i32,
    /// Left padding, added to every label's x position
    pub padding_left: i32,
    /// Right padding
    pub padding_right: i32,
    /// y coordinate used for every drawn label
    pub baseline: i32,
}

impl Geometry {
    /// Creates a geometry of the given width with no padding and a zero
    /// baseline
    pub fn new(width: i32) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Sets left and right padding
    pub fn with_padding(mut self, left: i32, right: i32) -> Self {
        self.padding_left = left;
        self.padding_right = right;
        self
    }

    /// Sets the baseline
    pub fn with_baseline(mut self, baseline: i32) -> Self {
        self.baseline = baseline;
        self
    }

    /// Padding-only box every label's bounds starts from
    fn empty_bounds(&self) -> Bounds {
        Bounds::new(
            0,
            0,
            self.padding_left.wrapping_add(self.padding_right),
            self.baseline,
        )
    }
}

/// A label to draw at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand<'a> {
    /// Page the label belongs to
    pub slot: Slot,
    /// Title text, borrowed from the provider
    pub text: &'a str,
    /// Left edge of the text
    pub x: i32,
    /// Baseline
    pub y: i32,
    /// Styling to draw with
    pub style: StyleKind,
}

/// Computes draw commands for the bar's labels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEngine {
    policy: PositionPolicy,
}

impl LayoutEngine {
    /// Creates an engine using the given out-of-range policy
    pub fn new(policy: PositionPolicy) -> Self {
        Self { policy }
    }

    /// Out-of-range policy in use
    pub fn policy(&self) -> PositionPolicy {
        self.policy
    }

    /// Produces up to three draw commands, in draw order: previous, next,
    /// current. An absent or empty provider produces none.
    pub fn layout<'a>(
        &self,
        scroll: &ScrollState,
        titles: Option<&'a dyn TextProvider>,
        geometry: &Geometry,
        measure: &dyn Measure,
    ) -> Result<Vec<DrawCommand<'a>>> {
        let Some(titles) = titles else {
            return Ok(Vec::new());
        };

        let count = titles.count();

        if count == 0 {
            return Ok(Vec::new());
        }

        let position = self.resolve_position(scroll.position(), count)?;
        let width = geometry.width;
        let center_x = width / 2;
        let empty_bounds = geometry.empty_bounds();
        let mut commands = Vec::with_capacity(3);

        let center_text = titles.text_at(position);
        let mut bounds = empty_bounds.widened(measure.measure(center_text));
        bounds.offset(
            center_x
                .wrapping_sub(bounds.width() / 2)
                .wrapping_sub(scroll.offset_pixels()),
        );

        // right edge first so labels wider than the bar stay flush left
        if bounds.right > width {
            bounds.offset_to(width.wrapping_sub(bounds.width()));
        }

        if bounds.left < 0 {
            bounds.offset_to(0);
        }

        let center_bounds = bounds;

        if position > 0 {
            let text = titles.text_at(position - 1);
            let mut bounds = empty_bounds.widened(measure.measure(text));

            if bounds.right > center_bounds.left {
                bounds.offset(center_bounds.left.wrapping_sub(bounds.right));
            }

            if bounds.right > geometry.padding_left {
                commands.push(DrawCommand {
                    slot: Slot::Previous,
                    text,
                    x: bounds.left.wrapping_add(geometry.padding_left),
                    y: geometry.baseline,
                    style: StyleKind::Normal,
                });
            }
        }

        if position + 1 < count {
            let text = titles.text_at(position + 1);
            let mut bounds = empty_bounds.widened(measure.measure(text));
            bounds.offset_to(width.wrapping_sub(bounds.width()));

            if bounds.left < center_bounds.right {
                bounds.offset(center_bounds.right.wrapping_sub(bounds.left));
            }

            if bounds.left < width.wrapping_sub(geometry.padding_right) {
                commands.push(DrawCommand {
                    slot: Slot::Next,
                    text,
                    x: bounds.left.wrapping_add(geometry.padding_left),
                    y: geometry.baseline,
                    style: StyleKind::Normal,
                });
            }
        }

        let style = if center_bounds.left < center_x && center_bounds.right > center_x {
            StyleKind::Highlighted
        } else {
            StyleKind::Normal
        };

        commands.push(DrawCommand {
            slot: Slot::Current,
            text: center_text,
            x: center_bounds.left.wrapping_add(geometry.padding_left),
            y: geometry.baseline,
            style,
        });

        Ok(commands)
    }

    fn resolve_position(&self, position: i32, count: usize) -> Result<usize> {
        let last = count - 1;

        match self.policy {
            PositionPolicy::Clamp => {
                let clamped = position.max(0) as usize;
                if clamped > last {
                    log::trace!("clamping stale position {position} to {last}");
                }
                Ok(clamped.min(last))
            }
            PositionPolicy::Strict => {
                if position < 0 || position as usize > last {
                    Err(PageBarError::PositionOutOfRange { position, count })
                } else {
                    Ok(position as usize)
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "./layout_tests.rs"]
mod tests;
