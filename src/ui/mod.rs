//! Rendering for the single-screen catalog UI.
//!
//! [`ui`] splits the frame into header, search bar, body (list plus details)
//! and footer, then draws overlays (toast, modals) on top.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
};

use crate::state::AppState;
use crate::theme::theme;

mod details;
mod footer;
mod header;
mod lists;
mod modals;
mod toast;

/// Rows used by the tab header.
const HEADER_H: u16 = 3;
/// Rows used by the search bar.
const SEARCH_H: u16 = 3;

/// What: Render one frame of the application.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Application state; list selection state is updated for scrolling
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let footer_h = u16::from(app.show_keybinds_footer);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_H),
            Constraint::Length(SEARCH_H),
            Constraint::Min(3),
            Constraint::Length(footer_h),
        ])
        .split(area);

    header::render_tabs(f, app, rows[0]);
    header::render_search(f, app, rows[1]);
    render_body(f, app, rows[2]);
    if app.show_keybinds_footer {
        footer::render_footer(f, app, rows[3]);
    }

    toast::render_toast(f, app, area);
    modals::render_modals(f, app, area);
}

/// What: Split the body between the active list and the details pane.
fn render_body(f: &mut Frame, app: &mut AppState, area: Rect) {
    let pct = app.details_pane_pct.clamp(20, 70);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(100 - pct), Constraint::Percentage(pct)])
        .split(area);
    lists::render_active_list(f, app, cols[0]);
    details::render_details(f, app, cols[1]);
}

/// What: Rectangle of `width` x `height` centered in `area`, clipped to it.
#[must_use]
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
