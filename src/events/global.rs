//! Global shortcuts: quit, help, tab switching, reload and copy.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::catalog::Catalog;
use crate::i18n::{t, t_fmt1};
use crate::logic::refresh_views;
use crate::state::{AppState, Modal};
use crate::util::clipboard::{CopyOutcome, spawn_copy};

/// Whether the key combination quits the application.
pub(super) fn is_quit(ke: &KeyEvent) -> bool {
    ke.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(ke.code, KeyCode::Char('c' | 'q'))
}

/// What: Handle keys that act regardless of the search field.
///
/// Inputs:
/// - `ke`: Key press
/// - `app`: Mutable application state
/// - `clip_tx`: Channel receiving clipboard outcomes
///
/// Output:
/// - `Some(exit)` when the key was consumed, `None` to let search handling run
pub(super) fn handle_global_key(
    ke: KeyEvent,
    app: &mut AppState,
    clip_tx: &mpsc::UnboundedSender<CopyOutcome>,
) -> Option<bool> {
    if is_quit(&ke) {
        return Some(true);
    }
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    match ke.code {
        KeyCode::F(1) => app.modal = Modal::Help,
        KeyCode::Char('?') if app.input.is_empty() && !ctrl => app.modal = Modal::Help,
        KeyCode::Tab => {
            app.tab = app.tab.toggled();
            tracing::debug!(tab = ?app.tab, "[Events] tab switched");
        }
        KeyCode::Char('r') if ctrl => reload_catalog(app),
        KeyCode::Enter => copy_selected(app, clip_tx),
        KeyCode::Char('y') if ctrl => copy_selected(app, clip_tx),
        _ => return None,
    }
    Some(false)
}

/// What: Start copying the selected server's address.
///
/// Details:
/// - No-op when nothing is selected; the toast arrives with the outcome.
fn copy_selected(app: &AppState, clip_tx: &mpsc::UnboundedSender<CopyOutcome>) {
    let Some(record) = app.selected_record() else {
        return;
    };
    tracing::debug!(id = record.id, ip = %record.ip, "[Events] copy requested");
    spawn_copy(record.ip.clone(), clip_tx.clone());
}

/// What: Turn a finished clipboard copy into a toast.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `outcome`: Result reported by the clipboard thread
pub fn apply_copy_outcome(app: &mut AppState, outcome: CopyOutcome) {
    let msg = match outcome {
        CopyOutcome::Copied(ip) => t_fmt1(app, "app.toasts.ip_copied", ip),
        CopyOutcome::Failed(_) => t(app, "app.toasts.clipboard_failed"),
    };
    app.show_toast(msg);
}

/// What: Replace the catalog with a fresh read of its file.
///
/// Inputs:
/// - `app`: Mutable application state
///
/// Details:
/// - Success swaps the catalog, recomputes views and shows a toast.
/// - Failure keeps the current catalog and opens an alert.
/// - `theme.conf` is re-read on the same key; its errors are only logged.
pub fn reload_catalog(app: &mut AppState) {
    if let Err(msg) = crate::theme::reload_theme() {
        tracing::debug!(error = %msg, "[Events] theme not reloaded");
    }
    let Some(path) = app.catalog_path.clone() else {
        let msg = t(app, "app.toasts.no_catalog_path");
        app.show_toast(msg);
        return;
    };
    match Catalog::load_from_path(&path) {
        Ok(catalog) => {
            let count = catalog.len();
            app.catalog = catalog;
            refresh_views(app);
            let msg = t_fmt1(app, "app.toasts.catalog_reloaded", count);
            app.show_toast(msg);
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "catalog reload failed");
            app.modal = Modal::Alert {
                message: t_fmt1(app, "app.alerts.reload_failed", &e),
            };
        }
    }
}
