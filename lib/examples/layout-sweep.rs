use color_eyre::eyre::Result;
use itertools::Itertools;
use log::*;
use pagebar::{
    layout::{Geometry, LayoutEngine, Slot, StyleKind},
    measure::CellWidth,
    pager::Pager,
    scroll::PageBarState,
    text::TextProvider,
};
use std::{cell::RefCell, rc::Rc};

const WIDTH: i32 = 48;

fn initialize_logger() -> Result<()> {
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

fn print_frame(state: &PageBarState, titles: &dyn TextProvider) -> Result<()> {
    let geometry = Geometry::new(WIDTH).with_padding(1, 1);
    let commands = LayoutEngine::default().layout(
        state.scroll(),
        Some(titles),
        &geometry,
        &CellWidth,
    )?;

    let mut line = vec![' '; WIDTH as usize];

    for command in commands.iter() {
        for (i, ch) in command.text.chars().enumerate() {
            let x = command.x + i as i32;
            if (0..WIDTH).contains(&x) {
                // upper case stands in for the highlight color
                line[x as usize] = match command.style {
                    StyleKind::Highlighted => ch.to_ascii_uppercase(),
                    StyleKind::Normal => ch,
                };
            }
        }
    }

    let labels = commands
        .iter()
        .map(|c| match c.slot {
            Slot::Previous => format!("<{}", c.x),
            Slot::Current => format!("={}", c.x),
            Slot::Next => format!(">{}", c.x),
        })
        .join(" ");

    info!(
        "|{}| offset={:>4} {}",
        line.into_iter().collect::<String>(),
        state.scroll().offset_pixels(),
        labels
    );

    Ok(())
}

fn main() -> Result<()> {
    initialize_logger()?;

    let titles = vec!["inbox", "starred", "sent", "drafts", "archive"];
    let state = Rc::new(RefCell::new(PageBarState::new(0)));
    state.borrow_mut().set_width(WIDTH);

    let mut pager = Pager::builder()
        .page_count(titles.len())
        .page_width(WIDTH)
        .build()?;

    pager.subscribe(state.clone());

    // drag three quarters of a page forward, then let it settle
    for _ in 0..9 {
        pager.drag_by(4)?;
        print_frame(&state.borrow(), &titles)?;
    }

    pager.end_drag()?;

    while pager.is_settling() {
        pager.tick()?;
        print_frame(&state.borrow(), &titles)?;
    }

    info!("settled on page {}", pager.current_page());

    Ok(())
}
