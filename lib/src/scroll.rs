//! Scroll tracking for the title bar
//!
//! A paged view reports its progress through [`PageChangeListener`]. The
//! bar keeps only the two numbers it needs to lay out its labels: the
//! settled page and how far the viewport has moved away from it.

#[cfg(test)]
use mockall::automock;

use serde::{Deserialize, Serialize};

/// Page index and pixel displacement of the paged view.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollState {
    position: i32,
    offset_pixels: i32,
}

impl ScrollState {
    /// Creates a state at `position` with no displacement
    pub fn new(position: i32) -> Self {
        Self {
            position,
            offset_pixels: 0,
        }
    }

    /// The settled page (or the page being left during a transition)
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Signed displacement from [`ScrollState::position`]. Positive values
    /// move toward higher page indices.
    pub fn offset_pixels(&self) -> i32 {
        self.offset_pixels
    }

    /// Records scroll progress. The offset is recomputed from scratch
    /// relative to the settled position, never accumulated.
    pub fn on_scrolled(
        &mut self,
        new_position: i32,
        sub_pixel_offset: i32,
        viewport_width: i32,
    ) {
        // wraps on overflow, a stale position draws degenerately
        self.offset_pixels = new_position
            .wrapping_sub(self.position)
            .wrapping_mul(viewport_width)
            .wrapping_add(sub_pixel_offset);
    }

    /// Makes `new_position` the settled page. The offset is left untouched
    /// until the next scroll notification.
    pub fn on_page_settled(&mut self, new_position: i32) {
        self.position = new_position;
    }
}

/// Motion state of the paged view.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollPhase {
    /// Resting on a page
    #[default]
    Idle,
    /// User is dragging
    Dragging,
    /// Animating toward a page after a drag or programmatic change
    Settling,
}

/// Callbacks a paged view delivers while it moves between pages.
#[cfg_attr(test, automock)]
pub trait PageChangeListener {
    /// Called for every change in scroll position. `position` is the page
    /// at the left edge of the viewport, `offset` the fraction (0..1) of
    /// the next page showing and `offset_pixels` the same in pixels.
    fn on_page_scrolled(&mut self, position: i32, offset: f32, offset_pixels: i32);

    /// Called once when a page becomes the new current page.
    fn on_page_selected(&mut self, position: i32);

    /// Called when the view starts or stops dragging or settling.
    fn on_page_scroll_state_changed(&mut self, _phase: ScrollPhase) {}
}

/// State of a [`crate::widget::PageBar`] across frames.
///
/// Holds the scroll state plus the width the bar was last drawn with,
/// which converts page positions into pixel offsets.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PageBarState {
    scroll: ScrollState,
    width: i32,
    phase: ScrollPhase,
}

impl PageBarState {
    /// Creates a state resting on `position`
    pub fn new(position: i32) -> Self {
        Self {
            scroll: ScrollState::new(position),
            ..Default::default()
        }
    }

    /// Current scroll state
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Width of the last rendered frame
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Last reported scroll phase
    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    /// Updates the viewport width. Called by the widget on every render.
    pub fn set_width(&mut self, width: i32) {
        self.width = width;
    }
}

impl PageChangeListener for PageBarState {
    fn on_page_scrolled(&mut self, position: i32, _offset: f32, offset_pixels: i32) {
        self.scroll.on_scrolled(position, offset_pixels, self.width);
    }

    fn on_page_selected(&mut self, position: i32) {
        log::debug!("page selected: {position}");
        self.scroll.on_page_settled(position);
    }

    fn on_page_scroll_state_changed(&mut self, phase: ScrollPhase) {
        self.phase = phase;
    }
}

#[cfg(test)]
#[path = "./scroll_tests.rs"]
mod tests;
