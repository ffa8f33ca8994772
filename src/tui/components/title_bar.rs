// Title bar component
//
// Renders the app name, the world clock and the outdoor temperature.

use crate::i18n::{TICKS_PER_DAY, TICKS_PER_HOUR};
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let paused = if app.paused { " ⏸" } else { "" };
    let title_text = format!(
        " 🏚 larder ──── {}{} ──── outdoors {}",
        clock_text(app.clock),
        paused,
        app.strings
            .temperature(app.outdoor_temperature, app.temperature_unit)
    );

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title)),
        );

    f.render_widget(title, area);
}

/// "Day 3, 14h" for a tick count, counting days from 1
pub fn clock_text(ticks: u64) -> String {
    let day = ticks / TICKS_PER_DAY + 1;
    let hour = (ticks % TICKS_PER_DAY) / TICKS_PER_HOUR;
    format!("Day {}, {:02}h", day, hour)
}
