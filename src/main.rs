//! formsmith - terminal form builder
//!
//! Compose forms from a palette of elements, edit their settings, try them
//! in a live preview and export them as JSON or a standalone HTML page.

mod app;
mod config;
mod export;
mod platform;
mod render;
mod state;
mod storage;
mod ui;

use anyhow::Result;
use app::App;
use config::BuilderConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use storage::JsonFileLibrary;
use tracing_subscriber::{fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Log file in the data directory, falling back to stderr
fn log_writer() -> BoxMakeWriter {
    let file = BuilderConfig::data_dir().and_then(|dir| {
        fs::create_dir_all(&dir).ok()?;
        File::create(dir.join("formsmith.log")).ok()
    });
    match file {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(io::stderr),
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "formsmith=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_writer()),
        )
        .init();

    let (config, config_error) = match BuilderConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (BuilderConfig::default(), Some(err)),
    };
    let library_path = config
        .library_path
        .clone()
        .or_else(JsonFileLibrary::default_path)
        .unwrap_or_else(|| "forms.json".into());
    let library = JsonFileLibrary::new(library_path);
    tracing::info!(library = %library.path().display(), "starting formsmith");

    let mut app = App::new(config, Box::new(library));
    if let Some(err) = config_error {
        app.push_error(format!("Failed to load config, using defaults: {err}"));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!(error = %err, "exiting on error");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            // Resize needs nothing beyond the redraw at the top of the loop
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }

        if app.should_quit() {
            tracing::info!("quit requested");
            return Ok(());
        }
    }
}
