//! Top level view: title bar, page strip and legend.

use color_eyre::eyre::Result;
use pagebar::{
    pager::{Pager, SharedListener},
    scroll::PageBarState,
    widget::{PageBar, PageBarStyle},
};
use ratatui::{
    crossterm::event::{
        Event as CrossTermEvent, KeyCode, KeyEvent, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, StatefulWidget, Widget},
};
use std::{cell::RefCell, rc::Rc};

use crate::{
    config::{Config, ConfigManager},
    ui::{
        colors::{Colors, Theme},
        components::{footer::InfoFooter, pages::PageStrip},
        traits::{
            CustomWidget, CustomWidgetContext, CustomWidgetRef, EventHandler,
        },
    },
};

const LEGEND: &str =
    "(←/→) page | ([/]) nudge | (space) release | (t) theme | (d/a) remove/add | (q) quit";

/// Resolves title bar styles for a set of theme colors.
fn bar_style(colors: &Colors) -> PageBarStyle {
    PageBarStyle::new(
        Style::new().fg(colors.text).bg(colors.bar_bg),
        colors.highlight,
    )
}

pub struct App {
    config: Config,
    titles: Vec<String>,
    removed: Vec<String>,
    pager: Pager,
    bar_state: Rc<RefCell<PageBarState>>,
    bar_style: PageBarStyle,
    theme: Theme,
    true_color_enabled: bool,
    colors: Colors,
    // last column seen while the left mouse button is held
    drag_column: Option<u16>,
    config_manager: Option<ConfigManager>,
}

impl App {
    pub fn new(
        config: Config,
        true_color_enabled: bool,
        config_manager: Option<ConfigManager>,
    ) -> Result<Self> {
        let theme = Theme::from_string(&config.theme);
        let colors = theme.colors(true_color_enabled);
        let titles = config.titles.clone();

        let mut pager = Pager::builder()
            .page_count(titles.len())
            .settle_fraction(config.settle_fraction)
            .build()?;

        let bar_state = Rc::new(RefCell::new(PageBarState::new(0)));
        let listener: SharedListener = bar_state.clone();
        pager.subscribe(listener);

        Ok(Self {
            config,
            titles,
            removed: Vec::new(),
            pager,
            bar_state,
            bar_style: bar_style(&colors),
            theme,
            true_color_enabled,
            colors,
            drag_column: None,
            config_manager,
        })
    }

    #[cfg(test)]
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    #[cfg(test)]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    #[cfg(test)]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn colors(&self) -> &Colors {
        &self.colors
    }

    /// True while the pager is animating toward a page.
    pub fn is_animating(&self) -> bool {
        self.pager.is_settling()
    }

    /// Matches page width to the terminal width. The bar must know the new
    /// width before the pager reports the re-snapped offset.
    pub fn resize(&mut self, width: u16) -> Result<()> {
        self.bar_state.borrow_mut().set_width(width as i32);
        self.pager.set_page_width(width as i32)?;
        Ok(())
    }

    /// Advances the settle animation one step.
    pub fn tick(&mut self) -> Result<bool> {
        Ok(self.pager.tick()?)
    }

    fn cycle_theme(&mut self) -> Result<()> {
        self.theme = self.theme.next();
        self.colors = self.theme.colors(self.true_color_enabled);
        self.bar_style = bar_style(&self.colors);
        self.config.theme = self.theme.to_string();

        log::debug!("switched theme to {}", self.theme);

        if let Some(manager) = self.config_manager.as_mut() {
            manager.update(self.config.clone())?;
        }

        Ok(())
    }

    fn remove_page(&mut self) -> Result<()> {
        if let Some(title) = self.titles.pop() {
            log::debug!("removed page {title}");
            self.removed.push(title);
            self.pager.set_page_count(self.titles.len())?;
        }
        Ok(())
    }

    fn add_page(&mut self) -> Result<()> {
        let title = self
            .removed
            .pop()
            .unwrap_or_else(|| format!("Page {}", self.titles.len() + 1));

        log::debug!("added page {title}");
        self.titles.push(title);
        self.pager.set_page_count(self.titles.len())?;
        Ok(())
    }

    fn nudge_step(&self) -> i32 {
        (self.pager.page_width() / 8).max(1)
    }

    fn process_key_event(&mut self, key: &KeyEvent) -> Result<bool> {
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }

        match key.code {
            KeyCode::Right | KeyCode::Char('l') => self.pager.next_page(true)?,
            KeyCode::Left | KeyCode::Char('h') => {
                self.pager.previous_page(true)?
            }
            KeyCode::Home | KeyCode::Char('g') => {
                if self.pager.page_count() > 0 {
                    self.pager.set_current_page(0, true)?;
                }
            }
            KeyCode::End | KeyCode::Char('G') => {
                if let Some(last) = self.pager.page_count().checked_sub(1) {
                    self.pager.set_current_page(last, true)?;
                }
            }
            KeyCode::Char(']') => self.pager.drag_by(self.nudge_step())?,
            KeyCode::Char('[') => self.pager.drag_by(-self.nudge_step())?,
            KeyCode::Char(' ') => self.pager.end_drag()?,
            KeyCode::Char('t') => self.cycle_theme()?,
            KeyCode::Char('d') => self.remove_page()?,
            KeyCode::Char('a') => self.add_page()?,
            _ => return Ok(false),
        }

        Ok(true)
    }

    fn process_mouse_event(&mut self, mouse: &MouseEvent) -> Result<bool> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.drag_column = Some(mouse.column);
                self.pager.begin_drag()?;
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(previous) = self.drag_column else {
                    return Ok(false);
                };
                // content follows the pointer
                let dx = previous as i32 - mouse.column as i32;
                self.drag_column = Some(mouse.column);
                self.pager.drag_by(dx)?;
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.drag_column.take().is_none() {
                    return Ok(false);
                }
                self.pager.end_drag()?;
            }
            _ => return Ok(false),
        }

        Ok(true)
    }
}

impl EventHandler for App {
    fn process_event(&mut self, evt: &CrossTermEvent) -> Result<bool> {
        match evt {
            CrossTermEvent::Key(key) => self.process_key_event(key),
            CrossTermEvent::Mouse(mouse) => self.process_mouse_event(mouse),
            _ => Ok(false),
        }
    }
}

impl CustomWidgetRef for App {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let [bar_area, _, pages_area, footer_area] = Layout::vertical([
            Constraint::Length(1), // title bar
            Constraint::Length(1), // spacer
            Constraint::Min(0),    // pages
            Constraint::Length(3), // legend
        ])
        .areas(area);

        Block::new()
            .style(Style::new().bg(ctx.colors.buffer_bg))
            .render(area, buf);

        PageBar::new(&self.titles)
            .style(self.bar_style)
            .padding(self.config.padding_left, self.config.padding_right)
            .policy(self.config.position_policy)
            .render(bar_area, buf, &mut self.bar_state.borrow_mut());

        PageStrip::new(&self.titles, self.pager.scroll_x())
            .render(pages_area, buf, ctx);

        InfoFooter::new(LEGEND.to_string()).render(footer_area, buf, ctx);
    }
}

#[cfg(test)]
#[path = "./app_tests.rs"]
mod tests;
