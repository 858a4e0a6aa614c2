use std::time::Instant;

use crate::state::AppState;

/// What: Periodic housekeeping run on every tick.
///
/// Inputs:
/// - `app`: Application state
///
/// Details:
/// - Clears the toast once its deadline has passed.
pub fn handle_tick(app: &mut AppState) {
    if let Some(deadline) = app.toast_expires_at
        && Instant::now() >= deadline
    {
        app.toast_message = None;
        app.toast_expires_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    /// What: Expired toasts are cleared, live ones stay
    ///
    /// - Input: Toast with a future deadline, then a past deadline
    /// - Output: Kept, then cleared
    fn tick_clears_expired_toast() {
        let mut app = AppState::default();
        app.show_toast("IP copied!");
        handle_tick(&mut app);
        assert!(app.toast_message.is_some());

        app.toast_expires_at = Instant::now().checked_sub(Duration::from_millis(1));
        handle_tick(&mut app);
        assert!(app.toast_message.is_none());
        assert!(app.toast_expires_at.is_none());
    }
}
