use crate::state::{AppState, Tab};

/// Move the selection in the active tab by `delta`.
///
/// Behavior:
/// - Clamps the selection to the valid range of the active view.
/// - Does nothing when the active view is empty.
pub fn move_sel(app: &mut AppState, delta: isize) {
    let (len, state) = match app.tab {
        Tab::Catalog => (app.results.len(), &mut app.results_state),
        Tab::Top => (app.top.len(), &mut app.top_state),
    };
    if len == 0 {
        return;
    }
    let cur = state.selected().unwrap_or(0);
    let idx = if delta < 0 {
        cur.saturating_sub(delta.unsigned_abs())
    } else {
        cur.saturating_add(delta.unsigned_abs()).min(len - 1)
    };
    state.select(Some(idx));
}

/// Jump to the first entry of the active view.
pub fn select_first(app: &mut AppState) {
    move_sel(app, isize::MIN);
}

/// Jump to the last entry of the active view.
pub fn select_last(app: &mut AppState) {
    move_sel(app, isize::MAX);
}
