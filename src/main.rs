//! Formsmith TUI - terminal form builder
//!
//! Sign in (or sign up) against a GoTrue-compatible identity provider, then
//! compose a form from short-answer, multiple-choice, checkbox, and
//! file-upload questions.

mod app;
mod auth;
mod config;
mod picker;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use auth::GoTrueClient;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Send logs to `log_path`. Without a path nothing is logged, since the
/// terminal belongs to the UI.
fn init_logging(log_path: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let Some(path) = log_path else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "formsmith_tui=info".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    Ok(Some(guard))
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = TuiConfig::load()?;
    let _log_guard = init_logging(config.log_path().as_deref())?;

    let client = GoTrueClient::from_config(&config);
    if !client.is_configured() {
        tracing::warn!(
            "Identity provider not configured; set {} and {}",
            config::AUTH_URL_ENV,
            config::AUTH_ANON_KEY_ENV
        );
    }
    let mut app = App::new(&config, Arc::new(client));

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

    if let Err(err) = &result {
        tracing::error!(error = %err, "Exiting after error");
    }
    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Apply the auth result before drawing so the screen never lags it
        app.poll_auth();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll faster while a request is in flight
        let poll_duration = if app.is_waiting() {
            Duration::from_millis(30)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    app.request_quit();
                } else {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
