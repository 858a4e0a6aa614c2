use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs},
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::state::{AppState, ModeFilter, Tab};
use crate::theme::theme;

/// What: Draw the tab bar with view titles and counts.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (active tab, view sizes)
/// - `area`: Target rectangle
pub fn render_tabs(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let titles = vec![
        Line::from(format!(
            " {} ({}) ",
            t(app, "app.titles.catalog"),
            app.results.len()
        )),
        Line::from(format!(" {} ({}) ", t(app, "app.titles.top"), app.top.len())),
    ];
    let selected = match app.tab {
        Tab::Catalog => 0,
        Tab::Top => 1,
    };
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(th.subtext0).bg(th.base))
        .highlight_style(
            Style::default()
                .fg(th.crust)
                .bg(th.mauve)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("|", Style::default().fg(th.overlay1)))
        .block(
            Block::default()
                .title(Span::styled(
                    " craftlist ",
                    Style::default().fg(th.lavender).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface2)),
        );
    f.render_widget(tabs, area);
}

/// What: Human label for a mode filter.
///
/// Details:
/// - Known modes are translated; unknown ones are shown as typed.
pub(super) fn mode_label(app: &AppState, filter: &ModeFilter) -> String {
    let key = format!("app.modes.{}", filter.as_key());
    let label = t(app, &key);
    if label == key {
        filter.as_key().to_string()
    } else {
        label
    }
}

/// What: Draw the search input and the mode selector.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (input text, mode filter)
/// - `area`: Target rectangle
///
/// Details:
/// - Shows a placeholder when the input is empty and places the cursor after the text.
pub fn render_search(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let mode_text = format!("< {} >", mode_label(app, &app.mode_filter));
    let mode_w = u16::try_from(mode_text.width()).unwrap_or(u16::MAX).saturating_add(4);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(mode_w)])
        .split(area);

    let block = |title: String| {
        Block::default()
            .title(Span::styled(
                format!(" {title} "),
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface2))
    };

    let input_line = if app.input.is_empty() {
        Line::from(Span::styled(
            t(app, "app.search.placeholder"),
            Style::default().fg(th.overlay1),
        ))
    } else {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(th.sapphire)),
            Span::styled(app.input.clone(), Style::default().fg(th.text)),
        ])
    };
    f.render_widget(
        Paragraph::new(input_line)
            .style(Style::default().bg(th.base))
            .block(block(t(app, "app.titles.search"))),
        cols[0],
    );
    if app.modal == crate::state::Modal::None {
        let offset = if app.input.is_empty() {
            0
        } else {
            2 + u16::try_from(app.input.width()).unwrap_or(u16::MAX)
        };
        let x = (cols[0].x + 1 + offset).min(cols[0].right().saturating_sub(2));
        f.set_cursor_position(Position::new(x, cols[0].y + 1));
    }

    let mode_style = if app.mode_filter == ModeFilter::All {
        Style::default().fg(th.subtext1)
    } else {
        Style::default().fg(th.yellow).add_modifier(Modifier::BOLD)
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(mode_text, mode_style)))
            .style(Style::default().bg(th.base))
            .block(block(t(app, "app.labels.mode"))),
        cols[1],
    );
}
