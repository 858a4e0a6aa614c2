use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;
use tokio::time::Duration;

/// Interval between UI ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// What: Spawn the periodic tick worker.
///
/// Inputs:
/// - `tick_tx`: Channel sender for tick events
///
/// Details:
/// - Stops when the receiving side is dropped.
pub fn spawn_tick_worker(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn the blocking thread that reads terminal input.
///
/// Inputs:
/// - `headless`: When `true`, no thread is spawned
/// - `event_tx`: Channel sender for terminal events
/// - `cancelled`: Flag checked between polls to exit promptly
///
/// Details:
/// - Polls with a 50ms timeout so cancellation is noticed quickly.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => {
                    let Ok(ev) = crossterm::event::read() else {
                        continue;
                    };
                    if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                        break;
                    }
                }
                Ok(false) => {}
                Err(e) => {
                    tracing::debug!(error = %e, "[Runtime] terminal poll failed");
                }
            }
        }
        tracing::debug!("[Runtime] input thread exited");
    });
}
