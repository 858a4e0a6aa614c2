//! Integration tests driving the TUI through key events, without a terminal.

use std::fs;

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use craftlist::events::{apply_copy_outcome, handle_event};
use craftlist::state::{AppState, Modal, ModeFilter, Tab};
use craftlist::util::clipboard::CopyOutcome;

fn key(code: KeyCode) -> CEvent {
    CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> CEvent {
    CEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn type_text(app: &mut AppState, tx: &mpsc::UnboundedSender<CopyOutcome>, text: &str) {
    for c in text.chars() {
        assert!(!handle_event(key(KeyCode::Char(c)), app, tx));
    }
}

fn result_ids(app: &AppState) -> Vec<u32> {
    app.results.iter().map(|r| r.id).collect()
}

#[test]
/// What: Typing, mode cycling and clearing drive the catalog view
///
/// - Input: Type "ЖЖЖ" (no match), clear, Right x3 to pvp, Tab, Ctrl+Q
/// - Output: Empty view, full view, only CraftWars PvP, Top tab untouched by filters, exit
fn events_search_filter_and_quit() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut app = AppState::default();
    assert_eq!(result_ids(&app), vec![4, 1, 2, 3]);

    type_text(&mut app, &tx, "ЖЖЖ");
    assert!(app.results.is_empty());
    handle_event(ctrl('u'), &mut app, &tx);
    assert!(app.input.is_empty());
    assert_eq!(app.results.len(), 4);

    for _ in 0..3 {
        handle_event(key(KeyCode::Right), &mut app, &tx);
    }
    assert_eq!(app.mode_filter, ModeFilter::parse("pvp"));
    assert_eq!(result_ids(&app), vec![2]);

    handle_event(key(KeyCode::Tab), &mut app, &tx);
    assert_eq!(app.tab, Tab::Top);
    assert_eq!(app.top.len(), 4);

    assert!(handle_event(ctrl('q'), &mut app, &tx));
}

#[test]
/// What: Enter copies the selected address and the outcome becomes a toast
///
/// - Input: Headless mode, Down then Enter
/// - Output: Headless failure reported on the channel; guidance toast shown
fn events_copy_reports_through_channel() {
    unsafe {
        std::env::set_var("CRAFTLIST_TEST_HEADLESS", "1");
    }
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = AppState::default();
    handle_event(key(KeyCode::Down), &mut app, &tx);
    assert_eq!(app.selected_record().map(|r| r.id), Some(1));
    assert!(!handle_event(key(KeyCode::Enter), &mut app, &tx));
    let outcome = rx.blocking_recv().expect("copy outcome");
    assert!(matches!(outcome, CopyOutcome::Failed(_)));
    apply_copy_outcome(&mut app, outcome);
    assert!(
        app.toast_message
            .as_deref()
            .is_some_and(|m| m.starts_with("Clipboard tool not found"))
    );
}

#[test]
/// What: Ctrl+R reloads the catalog file and reports failures in an alert
///
/// - Input: Catalog file with one server, Ctrl+R; file corrupted, Ctrl+R, then Esc
/// - Output: Reload toast and one result; alert with the error, old catalog kept, alert closed
fn events_reload_success_and_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("servers.json");
    fs::write(
        &path,
        r#"[{"id":9,"name":"Solo","ip":"solo:25565","mode":"Creative","maxPlayers":8,"rating":5.0,"votes":2}]"#,
    )
    .expect("write");

    let (tx, _rx) = mpsc::unbounded_channel();
    let mut app = AppState::default();
    app.catalog_path = Some(path.clone());
    handle_event(ctrl('r'), &mut app, &tx);
    assert_eq!(result_ids(&app), vec![9]);
    assert_eq!(
        app.toast_message.as_deref(),
        Some("Catalog reloaded: 1 servers")
    );

    fs::write(&path, "[{").expect("corrupt");
    handle_event(ctrl('r'), &mut app, &tx);
    match &app.modal {
        Modal::Alert { message } => assert!(message.starts_with("Failed to reload catalog:")),
        other => panic!("expected alert, got {other:?}"),
    }
    assert_eq!(result_ids(&app), vec![9]);

    type_text(&mut app, &tx, "x");
    assert!(app.input.is_empty(), "alert swallows typing");
    handle_event(key(KeyCode::Esc), &mut app, &tx);
    assert_eq!(app.modal, Modal::None);
}

#[test]
/// What: Reload without a configured file only shows a toast
///
/// - Input: Default state (no catalog path), Ctrl+R
/// - Output: "No catalog file configured" toast; seed untouched
fn events_reload_without_path() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut app = AppState::default();
    handle_event(ctrl('r'), &mut app, &tx);
    assert_eq!(
        app.toast_message.as_deref(),
        Some("No catalog file configured")
    );
    assert_eq!(app.catalog.len(), 4);
    assert_eq!(app.modal, Modal::None);
}
