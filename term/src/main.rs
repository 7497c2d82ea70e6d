//! Terminal demo of a paged view with a scroll-driven title bar
//!
//! Pages slide horizontally under a one-row title bar. The bar keeps the
//! current page's title centered and highlighted while the neighbouring
//! titles slide in from the edges as you drag between pages.
//!
//! # Examples
//!
//! ```bash
//! # show help menu
//! pagebar-term --help
//!
//! # launch with custom titles
//! pagebar-term --titles Inbox,Sent,Drafts --theme Emerald
//!
//! # log a headless swipe instead of starting the UI
//! pagebar-term --debug
//! ```

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use config::{Config, ConfigManager};
use directories::ProjectDirs;
use itertools::Itertools;
use pagebar::{
    layout::{Geometry, LayoutEngine},
    measure::CellWidth,
    pager::Pager,
    scroll::PageBarState,
    text::TextProvider,
};
use ratatui::{Terminal, prelude::CrosstermBackend};
use std::{cell::RefCell, fs, io, rc::Rc};

use crate::{
    renderer::Renderer,
    ui::{app::App, colors},
};

#[doc(hidden)]
mod config;
#[doc(hidden)]
mod renderer;
#[doc(hidden)]
mod ui;

/// Page width used for the headless swipe in debug mode
const DEBUG_PAGE_WIDTH: i32 = 40;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run in debug mode - Only prints logs foregoing UI
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Comma separated list of page titles
    #[arg(short, long, use_value_delimiter = true)]
    titles: Option<Vec<String>>,

    /// Color theme (Blue, Emerald, Indigo, Red)
    #[arg(long)]
    theme: Option<String>,

    /// Path to the config file
    #[arg(short, long)]
    config: Option<String>,

    /// Write debug logs to this file while the UI runs
    #[arg(long)]
    log_file: Option<String>,
}

#[doc(hidden)]
fn initialize_logger(args: &Args) -> Result<()> {
    if let Some(path) = args.log_file.as_ref() {
        simplelog::WriteLogger::init(
            simplelog::LevelFilter::Debug,
            simplelog::Config::default(),
            fs::File::create(path)?,
        )?;
        return Ok(());
    }

    let filter = if args.debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Off
    };

    simplelog::TermLogger::init(
        filter,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[doc(hidden)]
fn get_project_config_path() -> Result<String> {
    let project_dir = ProjectDirs::from("", "", "pagebar-term")
        .ok_or(eyre!("failed to get project directory"))?;
    let config_dir = project_dir.config_dir();
    fs::create_dir_all(config_dir)?;
    let config_file_path = config_dir
        .join("config.yml")
        .to_str()
        .ok_or(eyre!("unable to construct config file path"))?
        .to_string();
    Ok(config_file_path)
}

#[doc(hidden)]
fn create_config_manager(args: &Args) -> Result<ConfigManager> {
    let path = match args.config.as_ref() {
        Some(path) => path.clone(),
        None => get_project_config_path()?,
    };

    ConfigManager::builder().path(path).build()
}

/// Applies command line overrides on top of the stored configuration.
#[doc(hidden)]
fn apply_overrides(mut config: Config, args: &Args) -> Config {
    if let Some(titles) = args.titles.as_ref() {
        config.titles = titles
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
    }

    if let Some(theme) = args.theme.as_ref() {
        config.theme = colors::Theme::from_string(theme).to_string();
    }

    config
}

/// Drags across every page and logs the bar layout of each frame.
#[doc(hidden)]
fn run_headless_swipe(config: &Config) -> Result<()> {
    let state = Rc::new(RefCell::new(PageBarState::new(0)));
    state.borrow_mut().set_width(DEBUG_PAGE_WIDTH);

    let mut pager = Pager::builder()
        .page_count(config.titles.len())
        .page_width(DEBUG_PAGE_WIDTH)
        .settle_fraction(config.settle_fraction)
        .build()?;

    pager.subscribe(state.clone());

    let engine = LayoutEngine::new(config.position_policy);
    let geometry = Geometry::new(DEBUG_PAGE_WIDTH)
        .with_padding(config.padding_left as i32, config.padding_right as i32);

    let titles: &dyn TextProvider = &config.titles;

    let log_frame = |state: &PageBarState| -> Result<()> {
        let commands = engine.layout(
            state.scroll(),
            Some(titles),
            &geometry,
            &CellWidth,
        )?;

        log::debug!(
            "position={} offset={} [{}]",
            state.scroll().position(),
            state.scroll().offset_pixels(),
            commands
                .iter()
                .map(|c| {
                    format!("{:?} {:?}@{} {:?}", c.slot, c.text, c.x, c.style)
                })
                .join(", ")
        );

        Ok(())
    };

    log_frame(&state.borrow())?;

    for _ in 1..config.titles.len() {
        // drag most of a page, release and let it settle
        for _ in 0..3 {
            pager.drag_by(DEBUG_PAGE_WIDTH / 4)?;
            log_frame(&state.borrow())?;
        }

        pager.end_drag()?;

        while pager.is_settling() {
            pager.tick()?;
            log_frame(&state.borrow())?;
        }

        log::info!("settled on page {}", pager.current_page());
    }

    Ok(())
}

#[doc(hidden)]
fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(&args)?;

    let config_manager = create_config_manager(&args)?;
    let config = apply_overrides(config_manager.get(), &args);

    if args.debug {
        return run_headless_swipe(&config);
    }

    let tick = config.tick_duration()?;
    let app = App::new(
        config,
        colors::true_color_enabled(),
        Some(config_manager),
    )?;

    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;

    let mut renderer = Renderer::new(terminal, app, tick);
    renderer.start_render_loop()
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;
