//! Minimal paged container that drives the title bar
//!
//! The pager owns a horizontal scroll offset over `page_count` pages of
//! `page_width` pixels each. Dragging moves the offset directly; releasing
//! or selecting a page starts a settle animation advanced by [`Pager::tick`].
//! Every movement is reported to the subscribed [`PageChangeListener`]s.

use derive_builder::Builder;
use std::{cell::RefCell, rc::Rc};

use crate::{
    error::{PageBarError, Result},
    scroll::{PageChangeListener, ScrollPhase},
};

/// Fraction of the remaining distance covered on each animation tick
pub const DEFAULT_SETTLE_FRACTION: f32 = 0.35;

/// Fraction of a page that must be revealed for a release to move to it
pub const DEFAULT_SNAP_THRESHOLD: f32 = 0.5;

/// Shared handle to a listener notified by the pager
pub type SharedListener = Rc<RefCell<dyn PageChangeListener>>;

/// Data structure representing a horizontally paged view
#[derive(Builder)]
#[builder(build_fn(private, name = "_build"))]
pub struct Pager {
    /// Number of pages
    page_count: usize,
    /// Width of every page
    #[builder(default)]
    page_width: i32,
    /// Page shown when the pager is created
    #[builder(default)]
    initial_page: usize,
    /// Fraction of the remaining distance covered per tick while settling
    #[builder(default = "DEFAULT_SETTLE_FRACTION")]
    settle_fraction: f32,
    /// Fraction of the next page that must be showing on release to move
    /// to it
    #[builder(default = "DEFAULT_SNAP_THRESHOLD")]
    snap_threshold: f32,
    #[builder(setter(skip))]
    current: usize,
    #[builder(setter(skip))]
    scroll_x: i32,
    #[builder(setter(skip))]
    target_x: i32,
    #[builder(setter(skip))]
    phase: ScrollPhase,
    #[builder(setter(skip))]
    listeners: Vec<SharedListener>,
}

impl PagerBuilder {
    /// Builds the pager, validating the initial page
    pub fn build(&self) -> Result<Pager> {
        let mut pager = self._build()?;

        if pager.page_count > 0 && pager.initial_page >= pager.page_count {
            return Err(PageBarError::PageOutOfRange {
                page: pager.initial_page,
                count: pager.page_count,
            });
        }

        pager.settle_fraction = pager.settle_fraction.clamp(0.01, 1.0);
        pager.current = pager.initial_page;
        pager.scroll_x = pager.page_x(pager.current);
        pager.target_x = pager.scroll_x;

        Ok(pager)
    }
}

impl Pager {
    /// Returns builder for Pager
    pub fn builder() -> PagerBuilder {
        PagerBuilder::default()
    }

    /// Pager showing the first of `page_count` pages, with default
    /// animation settings. Pages have no width until [`Pager::set_page_width`].
    pub fn new(page_count: usize) -> Self {
        Self {
            page_count,
            page_width: 0,
            initial_page: 0,
            settle_fraction: DEFAULT_SETTLE_FRACTION,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            current: 0,
            scroll_x: 0,
            target_x: 0,
            phase: ScrollPhase::Idle,
            listeners: Vec::new(),
        }
    }

    /// Registers a listener for scroll, selection and phase changes
    pub fn subscribe(&mut self, listener: SharedListener) {
        self.listeners.push(listener);
    }

    /// Number of pages
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Index of the selected page
    pub fn current_page(&self) -> usize {
        self.current
    }

    /// Width of a page
    pub fn page_width(&self) -> i32 {
        self.page_width
    }

    /// Horizontal scroll offset of the viewport
    pub fn scroll_x(&self) -> i32 {
        self.scroll_x
    }

    /// Current motion state
    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    /// True while a settle animation is running
    pub fn is_settling(&self) -> bool {
        self.phase == ScrollPhase::Settling
    }

    /// Resizes pages, snapping the viewport back onto the current page
    pub fn set_page_width(&mut self, width: i32) -> Result<()> {
        if width == self.page_width {
            return Ok(());
        }

        self.page_width = width.max(0);
        self.scroll_x = self.page_x(self.current);
        self.target_x = self.scroll_x;
        self.set_phase(ScrollPhase::Idle)?;
        self.dispatch_scrolled()
    }

    /// Changes the number of pages. A current page beyond the new count
    /// moves to the last page.
    pub fn set_page_count(&mut self, count: usize) -> Result<()> {
        self.page_count = count;

        let last = count.saturating_sub(1);

        if self.current > last {
            self.select(last)?;
        }

        let max_x = self.max_x();

        if self.scroll_x > max_x {
            self.scroll_x = max_x;
            self.dispatch_scrolled()?;
        }

        self.jump_to_target()
    }

    /// Starts a user drag, interrupting any settle animation
    pub fn begin_drag(&mut self) -> Result<()> {
        self.target_x = self.scroll_x;
        self.set_phase(ScrollPhase::Dragging)
    }

    /// Moves the viewport by `dx` pixels, within the first and last pages
    pub fn drag_by(&mut self, dx: i32) -> Result<()> {
        if self.phase != ScrollPhase::Dragging {
            self.begin_drag()?;
        }

        let scroll_x = (self.scroll_x + dx).clamp(0, self.max_x());

        if scroll_x == self.scroll_x {
            return Ok(());
        }

        self.scroll_x = scroll_x;
        self.target_x = scroll_x;
        self.dispatch_scrolled()
    }

    /// Releases a drag and settles on the nearest page
    pub fn end_drag(&mut self) -> Result<()> {
        if self.phase != ScrollPhase::Dragging {
            return Ok(());
        }

        let (position, offset, _) = self.scroll_position();
        let mut target = position.max(0) as usize;

        if offset >= self.snap_threshold {
            target += 1;
        }

        self.settle_to(target.min(self.page_count.saturating_sub(1)))
    }

    /// Selects `page`, animating toward it when `smooth` is set
    pub fn set_current_page(&mut self, page: usize, smooth: bool) -> Result<()> {
        if page >= self.page_count {
            return Err(PageBarError::PageOutOfRange {
                page,
                count: self.page_count,
            });
        }

        if smooth {
            return self.settle_to(page);
        }

        self.select(page)?;
        self.jump_to_target()
    }

    /// Selects the next page, if any
    pub fn next_page(&mut self, smooth: bool) -> Result<()> {
        if self.current + 1 < self.page_count {
            self.set_current_page(self.current + 1, smooth)?;
        }
        Ok(())
    }

    /// Selects the previous page, if any
    pub fn previous_page(&mut self, smooth: bool) -> Result<()> {
        if self.current > 0 {
            self.set_current_page(self.current - 1, smooth)?;
        }
        Ok(())
    }

    /// Advances a settle animation by one step. Returns whether the
    /// viewport moved.
    pub fn tick(&mut self) -> Result<bool> {
        if self.phase != ScrollPhase::Settling {
            return Ok(false);
        }

        let remaining = self.target_x - self.scroll_x;
        let mut step = (remaining as f32 * self.settle_fraction) as i32;

        if step == 0 {
            step = remaining.signum();
        }

        self.scroll_x += step;
        self.dispatch_scrolled()?;

        if self.scroll_x == self.target_x {
            self.set_phase(ScrollPhase::Idle)?;
        }

        Ok(step != 0)
    }

    fn settle_to(&mut self, page: usize) -> Result<()> {
        self.select(page)?;
        self.target_x = self.page_x(page);

        if self.scroll_x == self.target_x {
            self.set_phase(ScrollPhase::Idle)
        } else {
            self.set_phase(ScrollPhase::Settling)
        }
    }

    fn jump_to_target(&mut self) -> Result<()> {
        self.target_x = self.page_x(self.current);

        if self.scroll_x != self.target_x {
            self.scroll_x = self.target_x;
            self.dispatch_scrolled()?;
        }

        self.set_phase(ScrollPhase::Idle)
    }

    fn select(&mut self, page: usize) -> Result<()> {
        if page == self.current {
            return Ok(());
        }

        self.current = page;
        let position = page as i32;
        self.notify(|l| l.on_page_selected(position))
    }

    fn set_phase(&mut self, phase: ScrollPhase) -> Result<()> {
        if phase == self.phase {
            return Ok(());
        }

        log::trace!("pager phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        self.notify(|l| l.on_page_scroll_state_changed(phase))
    }

    fn dispatch_scrolled(&self) -> Result<()> {
        let (position, offset, offset_pixels) = self.scroll_position();
        self.notify(|l| l.on_page_scrolled(position, offset, offset_pixels))
    }

    /// Page at the left edge of the viewport, the fraction of the following
    /// page that is showing, and the same in pixels
    fn scroll_position(&self) -> (i32, f32, i32) {
        if self.page_width <= 0 {
            return (self.current as i32, 0.0, 0);
        }

        let position = self.scroll_x.div_euclid(self.page_width);
        let offset_pixels = self.scroll_x.rem_euclid(self.page_width);
        let offset = offset_pixels as f32 / self.page_width as f32;

        (position, offset, offset_pixels)
    }

    fn page_x(&self, page: usize) -> i32 {
        page as i32 * self.page_width
    }

    fn max_x(&self) -> i32 {
        self.page_x(self.page_count.saturating_sub(1))
    }

    fn notify<F>(&self, f: F) -> Result<()>
    where
        F: Fn(&mut dyn PageChangeListener),
    {
        for listener in self.listeners.iter() {
            let mut listener = listener.try_borrow_mut()?;
            f(&mut *listener);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "./pager_tests.rs"]
mod tests;
