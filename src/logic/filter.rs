use crate::state::{AppState, ServerRecord};
use ratatui::widgets::ListState;

/// What: Rebuild the catalog and leaderboard views from `app.catalog`.
///
/// Inputs:
/// - `app`: Mutable application state containing the catalog, search text and mode filter
///
/// Output:
/// - Replaces `app.results` and `app.top`, preserving each list's selection when possible.
///
/// Details:
/// - Views are recomputed in full; they are never edited in place.
/// - Selection is restored by record id when still visible; otherwise clamped or cleared.
pub fn refresh_views(app: &mut AppState) {
    let prev_result = selected_id(&app.results, &app.results_state);
    let prev_top = selected_id(&app.top, &app.top_state);

    let records = app.catalog.records();
    app.results = crate::logic::filter_and_sort(records, &app.input, &app.mode_filter)
        .into_iter()
        .cloned()
        .collect();
    app.top = crate::logic::top_ranked(records, app.leaderboard_size)
        .into_iter()
        .cloned()
        .collect();

    restore_selection(&app.results, &mut app.results_state, prev_result);
    restore_selection(&app.top, &mut app.top_state, prev_top);
    tracing::debug!(
        query = %app.input,
        mode = app.mode_filter.as_key(),
        results = app.results.len(),
        top = app.top.len(),
        "[Logic] Views refreshed"
    );
}

/// What: Id of the currently selected record in a list.
fn selected_id(items: &[ServerRecord], state: &ListState) -> Option<u32> {
    state.selected().and_then(|i| items.get(i)).map(|r| r.id)
}

/// What: Re-select `prev` by id, falling back to a clamped index or no selection.
fn restore_selection(items: &[ServerRecord], state: &mut ListState, prev: Option<u32>) {
    if items.is_empty() {
        state.select(None);
        return;
    }
    if let Some(id) = prev
        && let Some(pos) = items.iter().position(|r| r.id == id)
    {
        state.select(Some(pos));
        return;
    }
    let idx = state.selected().unwrap_or(0).min(items.len() - 1);
    state.select(Some(idx));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ModeFilter;

    #[test]
    /// What: Selection follows the same record across a narrowing search
    ///
    /// - Input: Select the Survival server, then type "master"
    /// - Output: Survival server still selected at its new position
    fn refresh_preserves_selection_by_id() {
        let mut app = AppState::default();
        let pos = app
            .results
            .iter()
            .position(|r| r.id == 3)
            .expect("seed has id 3");
        app.results_state.select(Some(pos));
        app.input = "master".into();
        refresh_views(&mut app);
        assert_eq!(app.results.len(), 1);
        assert_eq!(app.results_state.selected(), Some(0));
        assert_eq!(app.selected_record().map(|r| r.id), Some(3));
    }

    #[test]
    /// What: Empty view clears the selection; widening restores a valid one
    ///
    /// - Input: Mode filter with no matches, then back to All
    /// - Output: No selection, then a clamped selection
    fn refresh_clears_and_restores_selection() {
        let mut app = AppState::default();
        app.mode_filter = ModeFilter::parse("creative");
        refresh_views(&mut app);
        assert!(app.results.is_empty());
        assert_eq!(app.results_state.selected(), None);
        app.mode_filter = ModeFilter::All;
        refresh_views(&mut app);
        assert_eq!(app.results_state.selected(), Some(0));
    }

    #[test]
    /// What: Leaderboard ignores the search state
    ///
    /// - Input: Query that matches nothing
    /// - Output: Leaderboard still lists the whole seed catalog
    fn refresh_top_independent_of_query() {
        let mut app = AppState::default();
        app.input = "zzzz".into();
        refresh_views(&mut app);
        assert!(app.results.is_empty());
        assert_eq!(app.top.len(), app.catalog.len());
    }
}
