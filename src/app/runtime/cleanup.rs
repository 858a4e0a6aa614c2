use std::sync::atomic::Ordering;

use super::channels::Channels;

/// What: Shut down background work after the main loop exits.
///
/// Details:
/// - Signals the input thread to stop; the ticker stops once its receiver drops.
pub fn cleanup_on_exit(channels: &Channels) {
    tracing::debug!("[Runtime] main loop exited");
    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
}
