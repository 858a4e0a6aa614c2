use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::i18n::t;
use crate::state::{AppState, ServerRecord, Tab};
use crate::theme::{Theme, theme};
use crate::util::{format_score, truncate_to_width};

/// What: Accent color for a gameplay mode.
pub(super) fn mode_color(th: &Theme, mode: &str) -> Color {
    match mode.to_lowercase().as_str() {
        "survival" => th.green,
        "skyblock" => th.sapphire,
        "pvp" => th.red,
        "minigames" => th.yellow,
        "creative" => th.mauve,
        _ => th.subtext0,
    }
}

/// What: One list row: optional rank, name, mode, players and rating.
fn server_item<'a>(th: &Theme, rec: &ServerRecord, rank: Option<usize>, width: u16) -> ListItem<'a> {
    let mut segs: Vec<Span> = Vec::with_capacity(6);
    if let Some(r) = rank {
        let style = if r <= 3 {
            Style::default().fg(th.yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.overlay2)
        };
        segs.push(Span::styled(format!("#{r:<3}"), style));
    }
    let name_w = usize::from(width).saturating_sub(40).max(12);
    segs.push(Span::styled(
        crate::util::pad_to_width(&rec.name, name_w),
        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
    ));
    segs.push(Span::styled(
        format!(" {:<10}", truncate_to_width(&rec.mode, 10)),
        Style::default().fg(mode_color(th, &rec.mode)),
    ));
    segs.push(Span::styled(
        format!(" {:>5}/{:<5}", rec.players, rec.max_players),
        Style::default().fg(th.subtext1),
    ));
    segs.push(Span::styled(
        format!(" ★ {:.1}", rec.rating),
        Style::default().fg(th.yellow),
    ));
    if rank.is_some() {
        segs.push(Span::styled(
            format!("  {}", format_score(rec.score())),
            Style::default().fg(th.overlay1),
        ));
    }
    ListItem::new(Line::from(segs))
}

/// What: Message shown instead of an empty list, if any.
///
/// Output:
/// - `Some(text)` when the active view is empty
fn empty_message(app: &AppState) -> Option<String> {
    let empty = match app.tab {
        Tab::Catalog => app.results.is_empty(),
        Tab::Top => app.top.is_empty(),
    };
    if !empty {
        return None;
    }
    if app.catalog.is_empty() || app.tab == Tab::Top || !app.has_active_query() {
        Some(t(app, "app.empty.catalog"))
    } else {
        Some(t(app, "app.empty.no_matches"))
    }
}

/// What: Render the catalog or leaderboard list, whichever tab is active.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state; the active `ListState` drives scrolling
/// - `area`: Target rectangle
pub fn render_active_list(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let title = match app.tab {
        Tab::Catalog => t(app, "app.titles.catalog"),
        Tab::Top => t(app, "app.titles.top"),
    };
    let block = Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2));

    if let Some(msg) = empty_message(app) {
        let inner_pad = area.height.saturating_sub(3) / 2;
        let mut lines: Vec<Line> = (0..inner_pad).map(|_| Line::from("")).collect();
        lines.push(Line::from(Span::styled(
            msg,
            Style::default().fg(th.overlay2).add_modifier(Modifier::ITALIC),
        )));
        let p = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(th.base))
            .block(block);
        f.render_widget(p, area);
        return;
    }

    let width = area.width.saturating_sub(4);
    let (items, state) = match app.tab {
        Tab::Catalog => (
            app.results
                .iter()
                .map(|r| server_item(&th, r, None, width))
                .collect::<Vec<_>>(),
            &mut app.results_state,
        ),
        Tab::Top => (
            app.top
                .iter()
                .enumerate()
                .map(|(i, r)| server_item(&th, r, Some(i + 1), width))
                .collect::<Vec<_>>(),
            &mut app.top_state,
        ),
    };
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .highlight_style(Style::default().fg(th.text).bg(th.surface1))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ModeFilter;

    #[test]
    /// What: Empty views pick the right placeholder text
    ///
    /// - Input: Non-matching search; empty catalog; populated view
    /// - Output: "No servers match your search"; "Catalog is empty"; None
    fn lists_empty_message_variants() {
        let mut app = AppState::default();
        assert_eq!(empty_message(&app), None);

        app.input = "zzzz".into();
        crate::logic::refresh_views(&mut app);
        assert_eq!(
            empty_message(&app).as_deref(),
            Some("No servers match your search")
        );

        app.input.clear();
        app.mode_filter = ModeFilter::All;
        app.catalog = crate::catalog::Catalog::default();
        crate::logic::refresh_views(&mut app);
        assert_eq!(empty_message(&app).as_deref(), Some("Catalog is empty"));
    }
}
