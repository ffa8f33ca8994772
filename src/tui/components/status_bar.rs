// Status bar component
//
// Latest captured log line on the left, caravan count and key hints on the
// right.

use crate::tui::app::App;
use crate::tui::traits::Interactive;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const KEY_HINTS: &str = "Tab:storage [/]:temp space:pause q:quit";

/// Render the status bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(app.theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut right = format!(" 🐪 {} │ {}", app.caravan.len(), KEY_HINTS);
    if let Some(hint) = app.panel.focus_hint() {
        right = format!("{} {}", right, hint);
    }
    let right_width = (right.width() as u16 + 1).min(inner.width);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right_width)])
        .split(inner);

    let latest = app
        .log_ring
        .latest()
        .map(|entry| {
            format!(
                " {} {:<5} {}",
                entry.timestamp.format("%H:%M:%S"),
                entry.level,
                entry.message
            )
        })
        .unwrap_or_default();

    f.render_widget(
        Paragraph::new(latest).style(Style::default().fg(app.theme.muted)),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(Line::from(right).right_aligned())
            .style(Style::default().fg(app.theme.status_bar)),
        chunks[1],
    );
}
