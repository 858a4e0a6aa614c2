use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap},
};

use crate::i18n::t;
use crate::state::{AppState, ServerRecord};
use crate::theme::{Theme, theme};
use crate::util::format_score;

use super::lists::mode_color;

/// What: `label: value` line in the details pane.
fn field<'a>(th: &Theme, label: String, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(th.sapphire)),
        Span::styled(value, Style::default().fg(th.text)),
    ])
}

/// What: Build the text lines describing one server.
fn detail_lines<'a>(app: &AppState, th: &Theme, rec: &ServerRecord) -> Vec<Line<'a>> {
    let owner = rec
        .owner
        .clone()
        .unwrap_or_else(|| t(app, "app.labels.owner_none"));
    vec![
        Line::from(Span::styled(
            rec.name.clone(),
            Style::default().fg(th.lavender).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field(th, t(app, "app.labels.address"), rec.ip.clone()),
        Line::from(vec![
            Span::styled(
                format!("{}: ", t(app, "app.labels.mode")),
                Style::default().fg(th.sapphire),
            ),
            Span::styled(
                rec.mode.clone(),
                Style::default().fg(mode_color(th, &rec.mode)),
            ),
        ]),
        field(th, t(app, "app.labels.version"), rec.version.clone()),
        field(
            th,
            t(app, "app.labels.rating"),
            format!("★ {:.1} / 5", rec.rating),
        ),
        field(th, t(app, "app.labels.votes"), rec.votes.to_string()),
        field(th, t(app, "app.labels.score"), format_score(rec.score())),
        field(th, t(app, "app.labels.owner"), owner),
        Line::from(""),
        Line::from(Span::styled(
            t(app, "app.labels.description"),
            Style::default().fg(th.sapphire),
        )),
        Line::from(Span::styled(
            rec.description.clone(),
            Style::default().fg(th.subtext1),
        )),
    ]
}

/// What: Render the details pane for the selected server.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state
/// - `area`: Target rectangle
///
/// Details:
/// - The player gauge is clamped to 100% when a record reports more players than slots.
pub fn render_details(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", t(app, "app.titles.details")),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(rec) = app.selected_record() else {
        f.render_widget(
            Paragraph::new(Span::styled(
                t(app, "app.empty.no_selection"),
                Style::default().fg(th.overlay2),
            )),
            inner,
        );
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    let ratio = rec.fill_ratio();
    let gauge = Gauge::default()
        .block(Block::default().title(Span::styled(
            t(app, "app.labels.players"),
            Style::default().fg(th.sapphire),
        )))
        .gauge_style(Style::default().fg(th.green).bg(th.surface1))
        .ratio(ratio)
        .label(format!(
            "{}/{} ({:.0}%)",
            rec.players,
            rec.max_players,
            ratio * 100.0
        ));
    f.render_widget(gauge, rows[0]);

    let p = Paragraph::new(detail_lines(app, &th, rec))
        .style(Style::default().bg(th.base))
        .wrap(Wrap { trim: true });
    f.render_widget(p, rows[1]);
}
