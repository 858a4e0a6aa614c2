use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::i18n::t;
use crate::state::{AppState, Modal};
use crate::theme::theme;

use super::centered_rect;

/// Help lines in display order.
const HELP_KEYS: [&str; 9] = [
    "app.help.lines.tab",
    "app.help.lines.type",
    "app.help.lines.clear",
    "app.help.lines.mode",
    "app.help.lines.move",
    "app.help.lines.copy",
    "app.help.lines.reload",
    "app.help.lines.help",
    "app.help.lines.quit",
];

/// What: Render the open modal (help or alert), if any.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state
/// - `area`: Full frame area; the modal is centered in it
pub fn render_modals(f: &mut Frame, app: &AppState, area: Rect) {
    match &app.modal {
        Modal::None => {}
        Modal::Help => render_help(f, app, area),
        Modal::Alert { message } => render_alert(f, app, area, message),
    }
}

/// What: Draw the keybinding overview box.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (locale for the help lines)
/// - `area`: Full frame area
///
/// Details:
/// - One line per [`HELP_KEYS`] entry plus the close hint, in a mauve double border.
fn render_help(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let height = u16::try_from(HELP_KEYS.len()).unwrap_or(u16::MAX) + 4;
    let rect = centered_rect(area, 72, height);
    f.render_widget(Clear, rect);
    let mut lines: Vec<Line> = HELP_KEYS
        .iter()
        .map(|k| Line::from(Span::styled(t(app, k), Style::default().fg(th.text))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        t(app, "app.alerts.close_hint"),
        Style::default().fg(th.overlay1),
    )));
    let p = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(
                format!(" {} ", t(app, "app.titles.help")),
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(th.mauve))
            .style(Style::default().bg(th.mantle)),
    );
    f.render_widget(p, rect);
}

/// What: Draw a blocking alert with `message` and the close hint.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (locale for title and hint)
/// - `area`: Full frame area
/// - `message`: Text shown wrapped inside the red box
fn render_alert(f: &mut Frame, app: &AppState, area: Rect, message: &str) {
    let th = theme();
    let rect = centered_rect(area, 70, 8);
    f.render_widget(Clear, rect);
    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(th.text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            t(app, "app.alerts.close_hint"),
            Style::default().fg(th.overlay1),
        )),
    ];
    let p = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Span::styled(
                format!(" {} ", t(app, "app.titles.alert")),
                Style::default().fg(th.red).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(th.red))
            .style(Style::default().bg(th.mantle)),
    );
    f.render_widget(p, rect);
}
