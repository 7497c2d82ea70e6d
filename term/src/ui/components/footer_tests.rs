use ratatui::{Terminal, backend::TestBackend};

use super::*;
use crate::ui::colors::Theme;

#[test]
fn renders_legend_inside_double_border() {
    let colors = Theme::Blue.colors(true);
    let mut terminal = Terminal::new(TestBackend::new(12, 3)).unwrap();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                colors: &colors,
            };

            InfoFooter::new("q: quit".to_string()).render(
                frame.area(),
                frame.buffer_mut(),
                &ctx,
            );
        })
        .unwrap();

    let buf = terminal.backend().buffer();
    let rows = (0..3)
        .map(|y| (0..12).map(|x| buf[(x, y)].symbol()).collect::<String>())
        .collect::<Vec<String>>();

    assert_eq!(rows, vec!["╔══════════╗", "║ q: quit  ║", "╚══════════╝"]);
    assert_eq!(buf[(2, 1)].fg, colors.text);
    assert_eq!(buf[(0, 0)].fg, colors.border_color);
}
