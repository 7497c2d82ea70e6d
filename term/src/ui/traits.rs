use color_eyre::eyre::Result;
use ratatui::{crossterm::event::Event as CrossTermEvent, layout::Rect};

use crate::ui::colors::Colors;

pub trait EventHandler {
    fn process_event(&mut self, evt: &CrossTermEvent) -> Result<bool>;
}

pub struct CustomWidgetContext<'a> {
    // resolved theme colors
    pub colors: &'a Colors,
}

pub trait CustomWidget {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    );
}

pub trait CustomWidgetRef {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    );
}
