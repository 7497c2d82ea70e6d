//! Main application loop and terminal management.

use color_eyre::eyre::{Context, Result, eyre};
use ratatui::{
    Terminal,
    crossterm::{
        event::{
            self, DisableMouseCapture, EnableMouseCapture,
            Event as CrossTermEvent, KeyCode, KeyEventKind, KeyModifiers,
        },
        execute,
        terminal::{
            EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
            enable_raw_mode,
        },
    },
    prelude::Backend,
};
use std::{io, time::Duration};

use crate::ui::{
    app::App,
    traits::{CustomWidgetContext, CustomWidgetRef, EventHandler},
};

pub mod scroll_throttle;

use scroll_throttle::ScrollThrottle;

/// How long to wait for input when nothing is animating.
const IDLE_POLL_DURATION: Duration = Duration::from_millis(250);

/// Drives the terminal: draws frames, reads input and advances the page
/// settle animation.
pub struct Renderer<B: Backend + io::Write> {
    terminal: Terminal<B>,
    app: App,
    tick: Duration,
    scroll_throttle: ScrollThrottle,
}

impl<B: Backend + io::Write> Renderer<B> {
    /// Creates a renderer advancing animations every `tick`.
    pub fn new(terminal: Terminal<B>, app: App, tick: Duration) -> Self {
        Self {
            terminal,
            app,
            tick,
            scroll_throttle: ScrollThrottle::default(),
        }
    }

    /// Initializes the terminal and starts the render loop. Returns when the
    /// user quits.
    pub fn start_render_loop(&mut self) -> Result<()> {
        self.enable_terminal_raw_mode()?;
        let res = self.start_loop();
        // restore the terminal even when the loop failed
        self.exit()?;
        res
    }

    fn start_loop(&mut self) -> Result<()> {
        self.render_frame()?;

        loop {
            let timeout = if self.app.is_animating() {
                self.tick
            } else {
                IDLE_POLL_DURATION
            };

            if event::poll(timeout)? {
                let evt = event::read()?;

                if self.handle_event(&evt)? {
                    return Ok(());
                }
            }

            if self.app.is_animating() {
                self.app.tick()?;
            }

            self.render_frame()?;
        }
    }

    /// Routes an input event to the app. Returns true when the user asked to
    /// quit.
    fn handle_event(&mut self, evt: &CrossTermEvent) -> Result<bool> {
        if let CrossTermEvent::Key(key) = evt
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
                KeyCode::Char('c') if key.modifiers == KeyModifiers::CONTROL => {
                    log::debug!("received control-c sequence");
                    return Ok(true);
                }
                _ => {}
            }
        }

        if self.scroll_throttle.throttled(evt) {
            return Ok(false);
        }

        self.app.process_event(evt)?;
        Ok(false)
    }

    fn render_frame(&mut self) -> Result<()> {
        let size = self
            .terminal
            .size()
            .map_err(|e| eyre!("failed to read terminal size: {}", e))?;

        self.app.resize(size.width)?;

        let app = &self.app;

        self.terminal
            .draw(|f| {
                let ctx = CustomWidgetContext {
                    colors: app.colors(),
                };
                app.render_ref(f.area(), f.buffer_mut(), &ctx);
            })
            .map_err(|e| eyre!("failed to render: {}", e))?;

        Ok(())
    }

    fn enable_terminal_raw_mode(&self) -> Result<()> {
        enable_raw_mode().wrap_err("failed to enter raw mode")?;
        // must use io::stdout() directly, a borrowed backend exits
        // immediately
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .wrap_err("failed to enter alternate screen")?;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal
            .show_cursor()
            .map_err(|e| eyre!("failed to show terminal cursor: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "./renderer_tests.rs"]
mod tests;
