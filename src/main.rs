mod app;
mod bus;
mod cli;
mod error;
mod event;
mod filter;
mod logging;
mod model;
mod output;
mod pagination;
mod ui;

use std::io::{self, Write};
use std::time::Duration;

use clap::Parser;
use cli::CliArgs;
use error::{FolioError, Result};
use filter::FilterCriteria;
use logging::{init_logging, LogConfig};
use model::Dataset;
use output::OutputFormatter;
use tracing::{debug, info};
use ui::projection::BookDetail;
use ui::theme::ThemeController;

use app::action::map_key_to_action;
use app::catalog::CatalogState;
use app::{Action, AppState};
use event::{AppEvent, EventHandler};

fn main() {
    let args = CliArgs::parse();

    // The TUI owns the terminal, so only log there when a file was given.
    let log_config = LogConfig::from_verbosity(args.verbose)
        .with_log_file(args.log_file.clone())
        .with_stderr(!args.interactive);
    if let Err(e) = init_logging(&log_config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let dataset = match load_dataset(&args) {
        Ok(ds) => ds,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if args.interactive {
        if let Err(e) = run_tui(dataset, &args) {
            ratatui::restore();
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = run_once(&dataset, &args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_dataset(args: &CliArgs) -> Result<Dataset> {
    match &args.data {
        Some(path) => Dataset::load(path),
        None => {
            debug!("no dataset given, using the built-in sample");
            Dataset::sample()
        }
    }
}

fn run_once(dataset: &Dataset, args: &CliArgs) -> Result<()> {
    let criteria = FilterCriteria::from_cli(args);
    let mut catalog = CatalogState::new(dataset, args.page_size as usize);
    if !criteria.is_empty() {
        catalog.apply_filter(dataset, &criteria);
    }

    let formatter = OutputFormatter::from_cli(args);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(id) = &args.show {
        let book = catalog
            .find(id)
            .ok_or_else(|| FolioError::BookNotFound(id.clone()))?;
        let detail = BookDetail::from_book(book, dataset);
        formatter.print_detail(&mut out, &detail)?;
        return Ok(());
    }

    catalog.jump_to(usize::try_from(args.page).unwrap_or(usize::MAX));
    formatter.print_catalog(&mut out, &catalog, dataset)?;
    out.flush()?;
    Ok(())
}

fn run_tui(dataset: Dataset, args: &CliArgs) -> Result<()> {
    let theme = match args.theme {
        Some(name) => ThemeController::new(name),
        None => ThemeController::from_environment(|key| std::env::var(key).ok()),
    };
    info!(theme = %theme.current(), books = dataset.books.len(), "starting browser");

    let mut state = AppState::new(dataset, args.page_size as usize, theme);
    let event_handler = EventHandler::new(Duration::from_millis(100));

    // Initialize terminal
    let mut terminal = ratatui::init();

    loop {
        terminal.draw(|frame| {
            ui::render(frame, &mut state);
        })?;

        match event_handler.next()? {
            AppEvent::Key(key) => {
                if let Some(action) = map_key_to_action(key, state.mode, state.overlay.is_open()) {
                    dispatch_action(&mut state, action);
                }
            }
            AppEvent::Resize(w, h) => {
                debug!(w, h, "terminal resized");
            }
            AppEvent::Tick => {}
        }

        if state.should_quit {
            break;
        }
    }

    // Restore terminal
    ratatui::restore();
    Ok(())
}

fn dispatch_action(state: &mut AppState, action: Action) {
    match action {
        Action::Quit => {
            state.should_quit = true;
        }
        Action::MoveUp => state.move_up(),
        Action::MoveDown => state.move_down(),
        Action::MoveLeft => state.move_left(),
        Action::MoveRight => state.move_right(),
        Action::Select => state.activate_current(),
        Action::ShowMore => state.show_more(),
        Action::CloseOverlay => state.close_overlay(),
        Action::OpenSearch => state.open_search(),
        Action::SearchInput(c) => state.search_form.input(c),
        Action::SearchBackspace => state.search_form.backspace(),
        Action::SearchClear => state.search_form.clear_title(),
        Action::SearchNextField => state.search_form.next_field(),
        Action::SearchPrevField => state.search_form.prev_field(),
        Action::SearchCycle(delta) => state.search_form.cycle(delta),
        Action::SubmitSearch => state.submit_search(),
        Action::CancelSearch => state.cancel_search(),
        Action::OpenSettings => state.open_settings(),
        Action::ToggleTheme => state.settings_form.toggle(),
        Action::SubmitSettings => state.submit_settings(),
        Action::CancelSettings => state.cancel_settings(),
    }

    // Selections published during the action are handled before the next draw
    state.process_notifications();
}
