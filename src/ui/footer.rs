use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::i18n::t;
use crate::state::AppState;
use crate::theme::theme;

/// Footer hint keys in display order.
const FOOTER_KEYS: [&str; 5] = [
    "app.footer.tab",
    "app.footer.mode",
    "app.footer.copy",
    "app.footer.help",
    "app.footer.quit",
];

/// What: Render the one-line keybinds footer.
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let mut spans: Vec<Span> = Vec::with_capacity(FOOTER_KEYS.len() * 2);
    for (i, key) in FOOTER_KEYS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ·  ", Style::default().fg(th.surface2)));
        }
        spans.push(Span::styled(t(app, key), Style::default().fg(th.subtext0)));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(th.mantle)),
        area,
    );
}
