use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::AppState;
use crate::theme::theme;

/// What: Draw the active toast in the bottom-right corner.
///
/// Details:
/// - Expiry is handled by the tick loop; this only draws what is set.
pub fn render_toast(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(msg) = app.toast_message.as_deref() else {
        return;
    };
    let th = theme();
    let text_w = u16::try_from(msg.width()).unwrap_or(u16::MAX);
    let w = text_w.saturating_add(4).min(area.width);
    let h = 3u16.min(area.height);
    let rect = Rect {
        x: area.right().saturating_sub(w + 1).max(area.x),
        y: area.bottom().saturating_sub(h + 1).max(area.y),
        width: w,
        height: h,
    };
    f.render_widget(Clear, rect);
    let p = Paragraph::new(Span::styled(msg.to_string(), Style::default().fg(th.text))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.green))
            .style(Style::default().bg(th.mantle)),
    );
    f.render_widget(p, rect);
}
