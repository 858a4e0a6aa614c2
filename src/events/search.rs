//! Search field editing, mode filter cycling and list navigation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic::{move_sel, refresh_views, select_first, select_last};
use crate::state::AppState;

/// Rows moved by PageUp/PageDown.
const PAGE_STEP: isize = 10;

/// What: Apply a key press to the search field, filter or selection.
///
/// Inputs:
/// - `ke`: Key press not consumed by global handling
/// - `app`: Mutable application state
///
/// Details:
/// - Any change to the text or filter recomputes both views.
pub(super) fn handle_search_key(ke: KeyEvent, app: &mut AppState) {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    let alt = ke.modifiers.contains(KeyModifiers::ALT);
    match ke.code {
        KeyCode::Char('u') if ctrl => set_input(app, String::new()),
        KeyCode::Char(c) if !ctrl && !alt => {
            let mut next = app.input.clone();
            next.push(c);
            set_input(app, next);
        }
        KeyCode::Backspace => {
            let mut next = app.input.clone();
            if next.pop().is_some() {
                set_input(app, next);
            }
        }
        KeyCode::Esc if !app.input.is_empty() => set_input(app, String::new()),
        KeyCode::Right => {
            app.mode_filter = app.mode_filter.cycle_next();
            on_filter_changed(app);
        }
        KeyCode::Left | KeyCode::BackTab => {
            app.mode_filter = app.mode_filter.cycle_prev();
            on_filter_changed(app);
        }
        KeyCode::Up => move_sel(app, -1),
        KeyCode::Down => move_sel(app, 1),
        KeyCode::PageUp => move_sel(app, -PAGE_STEP),
        KeyCode::PageDown => move_sel(app, PAGE_STEP),
        KeyCode::Home => select_first(app),
        KeyCode::End => select_last(app),
        _ => {}
    }
}

/// Replace the search text and recompute the views.
fn set_input(app: &mut AppState, input: String) {
    if app.input == input {
        return;
    }
    app.input = input;
    refresh_views(app);
}

/// Recompute views after a mode filter change.
fn on_filter_changed(app: &mut AppState) {
    tracing::debug!(mode = app.mode_filter.as_key(), "[Events] mode filter changed");
    refresh_views(app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ModeFilter, Tab};

    fn press(app: &mut AppState, code: KeyCode) {
        handle_search_key(KeyEvent::new(code, KeyModifiers::NONE), app);
    }

    fn result_ids(app: &AppState) -> Vec<u32> {
        app.results.iter().map(|r| r.id).collect()
    }

    #[test]
    /// What: Typing narrows the catalog; Backspace and Ctrl+U widen it again
    ///
    /// - Input: "pvp", Backspace x3, "sky", Ctrl+U
    /// - Output: [2], all four, [1], all four
    fn search_typing_recomputes_views() {
        let mut app = AppState::default();
        for c in "pvp".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(result_ids(&app), vec![2]);
        for _ in 0..3 {
            press(&mut app, KeyCode::Backspace);
        }
        assert_eq!(result_ids(&app), vec![4, 1, 2, 3]);
        for c in "sky".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(result_ids(&app), vec![1]);
        handle_search_key(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            &mut app,
        );
        assert!(app.input.is_empty());
        assert_eq!(app.results.len(), 4);
        assert_eq!(app.top.len(), 4);
    }

    #[test]
    /// What: Left/Right cycle the mode filter through the vocabulary
    ///
    /// - Input: Right, Right (survival, skyblock), Left, BackTab
    /// - Output: Filter and results follow; BackTab returns to All
    fn search_mode_cycling() {
        let mut app = AppState::default();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.mode_filter, ModeFilter::parse("survival"));
        assert_eq!(result_ids(&app), vec![3]);
        press(&mut app, KeyCode::Right);
        assert_eq!(result_ids(&app), vec![1]);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.mode_filter, ModeFilter::All);
        assert_eq!(app.results.len(), 4);
    }

    #[test]
    /// What: Selection survives a narrowing search when the record stays visible
    ///
    /// - Input: Select id 2 (third in catalog), type "war"
    /// - Output: id 2 remains selected at index 0
    fn search_preserves_selection_by_id() {
        let mut app = AppState::default();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_record().map(|r| r.id), Some(2));
        for c in "war".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.results_state.selected(), Some(0));
        assert_eq!(app.selected_record().map(|r| r.id), Some(2));
    }

    #[test]
    /// What: Navigation keys act on the active tab and Esc clears the search
    ///
    /// - Input: Top tab End/Home/PageDown; search text then Esc
    /// - Output: Leaderboard selection moves; search cleared
    fn search_navigation_and_escape() {
        let mut app = AppState {
            tab: Tab::Top,
            ..Default::default()
        };
        press(&mut app, KeyCode::End);
        assert_eq!(app.top_state.selected(), Some(3));
        press(&mut app, KeyCode::Home);
        assert_eq!(app.top_state.selected(), Some(0));
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.top_state.selected(), Some(3));
        assert_eq!(app.results_state.selected(), Some(0));

        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Esc);
        assert!(app.input.is_empty());
    }
}
