mod app;
mod config;
mod content;
mod logging;
mod ui;
mod view;

use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::content::PanelRegistry;
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    logging::init(&cfg.logging);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting edgeai-showcase");

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "exiting with error");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    tracing::info!("exiting");
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let registry = PanelRegistry::builtin()?;
    let mut state = AppState::new(cfg, registry);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(e)) => {
                    tracing::warn!(error = %e, "terminal input stream failed");
                    break;
                }
                None => break,
            }
        }
    });

    // Spawn interrupt task (SIGINT outside raw-mode key handling)
    let signal_tx = event_tx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = signal_tx.send(AppEvent::Interrupt);
        }
    });
    drop(event_tx);

    // Initial render
    terminal
        .draw(|f| ui::render(f, &state))
        .context("Failed to draw initial frame")?;
    state.dirty = false;

    // Main event loop: one event at a time, at most one redraw per event
    while let Some(event) = event_rx.recv().await {
        for action in handler::handle_event(&state, event) {
            state.dispatch(action);
        }

        if state.should_quit {
            break;
        }

        if state.dirty {
            terminal
                .draw(|f| ui::render(f, &state))
                .context("Failed to draw frame")?;
            state.dirty = false;
            tracing::trace!(revision = state.view.revision(), "frame drawn");
        }
    }

    Ok(())
}
