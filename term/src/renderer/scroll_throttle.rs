use std::{
    cell::RefCell,
    time::{Duration, Instant},
};

use ratatui::crossterm::event::{Event, KeyCode, KeyEventKind};

/// Default minimum interval between page turns in the same direction.
const DEFAULT_SCROLL_THROTTLE_DURATION: Duration = Duration::from_millis(20);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

/// Drops page turn key presses that arrive faster than the throttle
/// duration, so held arrow keys don't queue a backlog of page changes.
pub struct ScrollThrottle {
    last_left: RefCell<Instant>,
    last_right: RefCell<Instant>,
    throttle_duration: Duration,
}

impl Default for ScrollThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THROTTLE_DURATION)
    }
}

impl ScrollThrottle {
    /// Creates a new ScrollThrottle with a custom throttle duration.
    pub fn new(throttle_duration: Duration) -> Self {
        // start beyond the window so the first turn always fires
        let past =
            Instant::now() - throttle_duration - Duration::from_millis(1);
        Self {
            last_left: RefCell::new(past),
            last_right: RefCell::new(past),
            throttle_duration,
        }
    }

    pub fn throttled(&self, evt: &Event) -> bool {
        let last = match direction(evt) {
            Some(Direction::Left) => &self.last_left,
            Some(Direction::Right) => &self.last_right,
            None => return false,
        };

        if last.borrow().elapsed() <= self.throttle_duration {
            return true;
        }

        last.replace(Instant::now());
        false
    }
}

fn direction(evt: &Event) -> Option<Direction> {
    let Event::Key(key) = evt else {
        return None;
    };

    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(Direction::Right),
        _ => None,
    }
}

#[cfg(test)]
#[path = "./scroll_throttle_tests.rs"]
mod tests;
