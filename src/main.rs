// ABOUTME: Main entry point for slide-picker with TUI and CLI support
//
// Binary: slide-picker
// Usage: slide-picker [COMMAND]
// - No command: launches the presentation wizard
// - catalog: print the base slide catalog for a client type
// - products: print the product catalog tree
// - history: print the presentation history

#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, prelude::*, Terminal};
use std::{
    io::{self, IsTerminal},
    time::{Duration, Instant},
};
use tracing::{info, warn};

use slide_picker::app::{App, EventHandler};
use slide_picker::catalog::MockCatalog;
use slide_picker::cli::{self, Commands};
use slide_picker::components::LayoutComponent;
use slide_picker::config::AppConfig;
use slide_picker::models::PresentationHistory;

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Unified terminal cleanup that works with a terminal instance
fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(terminal: &mut Terminal<B>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();
    setup_panic_handler();

    let args = cli::Cli::parse();

    let result = match args.command {
        Some(Commands::Catalog(catalog_args)) => {
            cli::catalog::execute_catalog(&catalog_args, args.format, &MockCatalog::new())
        }
        Some(Commands::Products) => cli::catalog::execute_products(args.format, &MockCatalog::new()),
        Some(Commands::History) => cli::history::execute(&PresentationHistory::with_demo_entries(), args.format),

        // TUI mode (explicit or default)
        Some(Commands::Tui) | None => {
            let config = AppConfig::load().unwrap_or_else(|e| {
                warn!("Failed to load config, using defaults: {:#}", e);
                AppConfig::default()
            });
            let mut app = App::new(config);
            let mut layout = LayoutComponent::new();

            run_tui(&mut app, &mut layout).await
        }
    };

    // Ensure terminal is cleaned up on any error
    if result.is_err() {
        cleanup_terminal();
    }

    result
}

async fn run_tui(app: &mut App, layout: &mut LayoutComponent) -> Result<()> {
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal.\n\
             Try running directly in a terminal instead of redirecting output."
        ));
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("Starting presentation wizard");
    let result = run_tui_loop(app, layout, &mut terminal).await;

    // Dropping a pending task aborts it
    app.state.cancel_pending_tasks();

    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    result
}

async fn run_tui_loop(
    app: &mut App,
    layout: &mut LayoutComponent,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let tick_rate = app.state.config.tick_rate();
    let mut last_tick = Instant::now();
    let mut needs_draw = true;

    loop {
        if needs_draw || app.needs_ui_refresh() {
            terminal.draw(|frame| {
                layout.render(frame, &app.state);
            })?;
            needs_draw = false;
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    if let Some(app_event) = EventHandler::handle_key_event(key_event, &mut app.state) {
                        EventHandler::process_event(app_event, &mut app.state);
                    }
                    needs_draw = true;
                }
                Event::Resize(_, _) => needs_draw = true,
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
            needs_draw = true;
        }

        if app.state.should_quit {
            info!("Quit requested, leaving the wizard");
            break;
        }

        tokio::task::yield_now().await;
    }

    Ok(())
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use std::path::PathBuf;
    use tracing_subscriber::prelude::*;

    let log_dir = AppConfig::get_user_data_dir()
        .map(|dir| dir.join("logs"))
        .unwrap_or_else(|_| PathBuf::from(".slide-picker/logs"));

    let _ = std::fs::create_dir_all(&log_dir);

    // Create JSONL log file with timestamp
    let log_file = log_dir.join(format!(
        "slide-picker-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "slide_picker=info".into());

    // The terminal belongs to the TUI, so without a log file logging is off
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(filter)
        .init();
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
