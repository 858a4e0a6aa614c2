use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::util::clipboard::CopyOutcome;

/// What: Channels connecting the main loop with the input thread, ticker and clipboard workers.
pub struct Channels {
    /// Terminal events from the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiving side drained by the main loop.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the input thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Periodic ticks for toast expiry.
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Receiving side of the ticker.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
    /// Clipboard outcomes from copy threads.
    pub clip_tx: mpsc::UnboundedSender<CopyOutcome>,
    /// Receiving side of clipboard outcomes.
    pub clip_rx: mpsc::UnboundedReceiver<CopyOutcome>,
}

impl Channels {
    /// What: Create every runtime channel.
    #[must_use]
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();
        let (clip_tx, clip_rx) = mpsc::unbounded_channel::<CopyOutcome>();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            tick_tx,
            tick_rx,
            clip_tx,
            clip_rx,
        }
    }
}

impl Default for Channels {
    fn default() -> Self {
        Self::new()
    }
}
