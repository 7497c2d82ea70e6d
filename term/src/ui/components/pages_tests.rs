use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use super::*;
use crate::ui::colors::Theme;

fn titles() -> Vec<String> {
    vec!["Alpha".to_string(), "Beta".to_string(), "Gamma".to_string()]
}

fn render(titles: &[String], scroll_x: i32) -> Buffer {
    let colors = Theme::Blue.colors(true);
    let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                colors: &colors,
            };

            PageStrip::new(titles, scroll_x).render(
                frame.area(),
                frame.buffer_mut(),
                &ctx,
            );
        })
        .unwrap();

    terminal.backend().buffer().clone()
}

fn row(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
}

#[test]
fn renders_current_page() {
    let titles = titles();
    let buf = render(&titles, 20);

    assert_eq!(row(&buf, 1), "  Beta              ");
    assert_eq!(row(&buf, 2), "  page 2 of 3       ");
}

#[test]
fn renders_two_pages_mid_scroll() {
    let titles = titles();
    let buf = render(&titles, 12);

    // last 8 columns of the first page, first 12 of the second
    assert_eq!(row(&buf, 1), "          Beta      ");
    assert_eq!(row(&buf, 2), "3         page 2 of ");
}

#[test]
fn renders_clipped_page_text() {
    let titles = titles();
    let buf = render(&titles, 3);

    assert_eq!(row(&buf, 1), "pha                B");
}

#[test]
fn renders_nothing_without_pages() {
    let buf = render(&[], 0);
    assert_eq!(row(&buf, 1), " ".repeat(20));
}
