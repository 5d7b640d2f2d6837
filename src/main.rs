mod app;
mod config;
mod counter;
mod ui;

use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use anyhow::Result;
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::filter::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cfg = config::load_config()?;

    // Optional positional start timestamp overrides the config
    let start_override = std::env::args().nth(1);

    run_app(cfg, start_override).await
}

/// Initialize logging to stderr; stdout belongs to the status line.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_app(cfg: config::AppConfig, start_override: Option<String>) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(cfg, start_override);
    state.counter.start();
    info!(start = %state.counter.start_datetime(), "session counter running");

    // Spawn stdin command task
    let cmd_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if cmd_tx.send(AppEvent::Command(line)).is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(_) => break,
            }
        }
    });

    // Spawn status refresh task (1s)
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Forward loading-region changes into the event loop
    let mut changes = state.loading.subscribe();
    let change_tx = event_tx.clone();
    tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            if change_tx.send(AppEvent::RegionsChanged).is_err() {
                break;
            }
        }
    });

    // Ctrl-C requests shutdown
    let quit_tx = event_tx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = quit_tx.send(AppEvent::Quit);
        }
    });

    // Initial render
    ui::draw(&state);

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        handler::handle_event(&mut state, event);

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            ui::draw(&state);
            state.dirty = false;
        }
    }

    state.counter.stop();
    println!();
    info!(elapsed = state.counter.duration(), "session stopped");

    Ok(())
}
