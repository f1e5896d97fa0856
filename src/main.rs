//! Lead Form TUI - terminal contact form for Legartis
//!
//! Collects a lead, validates it locally, and forwards it to the
//! configured intake webhook with HTTP basic authentication.

mod app;
mod config;
mod intake;
mod logging;
mod platform;
mod state;
mod submit;
mod ui;
mod validation;

use anyhow::{Context, Result};
use app::App;
use config::IntakeConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use intake::IntakeClient;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let log_path = logging::init();
    tracing::info!(log_path = ?log_path, "starting lead-form-tui");

    // Fail before touching the terminal so the message stays readable
    let config = IntakeConfig::load().context("failed to load intake configuration")?;
    let client = IntakeClient::from_provider(&config)?;
    tracing::info!(endpoint = %client.endpoint(), "intake client ready");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(Arc::new(client));
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!("event loop failed: {err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll faster while a submission is outstanding so its result shows promptly
        let poll_duration = if app.is_sending() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        app.poll_submissions();

        if app.should_quit() {
            return Ok(());
        }

        // Let spawned submissions make progress between frames
        tokio::task::yield_now().await;
    }
}
