use std::path::PathBuf;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::state::AppState;
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod cleanup;
pub mod init;
mod tick_handler;

use background::{spawn_event_thread, spawn_tick_worker};
use channels::Channels;
use cleanup::cleanup_on_exit;
use init::initialize_app_state;
use tick_handler::handle_tick;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Options for an interactive session.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Catalog file given on the command line; overrides `catalog_path`.
    pub catalog: Option<PathBuf>,
}

/// What: Run the craftlist TUI end-to-end.
///
/// Inputs:
/// - `opts`: Session options from the command line
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on terminal failures.
///
/// Details:
/// - With `CRAFTLIST_TEST_HEADLESS=1` the terminal is left untouched and no input thread runs.
/// - State mutation happens only on this task; workers talk to it through channels.
pub async fn run(opts: RunOptions) -> Result<()> {
    let headless = crate::util::is_headless();
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::default();
    initialize_app_state(&mut app, opts.catalog.as_deref(), headless);

    let mut channels = Channels::new();
    spawn_tick_worker(channels.tick_tx.clone());
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );
    tracing::info!(
        servers = app.catalog.len(),
        locale = %app.locale,
        headless,
        "craftlist started"
    );

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
        }
        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(ev, &mut app, &channels.clip_tx) {
                    break;
                }
            }
            Some(outcome) = channels.clip_rx.recv() => {
                crate::events::apply_copy_outcome(&mut app, outcome);
            }
            Some(()) = channels.tick_rx.recv() => {
                handle_tick(&mut app);
            }
            else => break,
        }
    }

    cleanup_on_exit(&channels);
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
