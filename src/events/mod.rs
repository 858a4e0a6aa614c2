//! Event handling layer for craftlist's TUI.
//!
//! `handle_event` owns modal handling and global shortcuts, then delegates
//! search editing and list navigation to [`search`].

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind};
use tokio::sync::mpsc;

use crate::state::{AppState, Modal};
use crate::util::clipboard::CopyOutcome;

mod global;
mod search;

pub use global::{apply_copy_outcome, reload_catalog};

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    clip_tx: &mpsc::UnboundedSender<CopyOutcome>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }

    match &app.modal {
        Modal::Alert { .. } => {
            if matches!(ke.code, KeyCode::Enter | KeyCode::Esc) {
                app.modal = Modal::None;
            }
            return false;
        }
        Modal::Help => {
            if matches!(ke.code, KeyCode::Enter | KeyCode::Esc | KeyCode::F(1)) {
                app.modal = Modal::None;
            } else if global::is_quit(&ke) {
                return true;
            }
            return false;
        }
        Modal::None => {}
    }

    if let Some(exit) = global::handle_global_key(ke, app, clip_tx) {
        return exit;
    }
    search::handle_search_key(ke, app);
    false
}
