// Modal overlay rendering
//
// Modals are rendered on top of the main content:
// - Info card: a thing's label and description, opened from its row
// - Help modal: keyboard shortcuts and current config

use crate::panel::host::InfoCard;
use crate::tui::app::App;
use crate::tui::host::wrap_lines;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const INFO_CARD_WIDTH: u16 = 48;

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render the info card overlay
pub fn render_info_card(f: &mut Frame, card: &InfoCard, app: &App) {
    let text_width = INFO_CARD_WIDTH.saturating_sub(4) as usize;
    let label_style = Style::default().fg(app.theme.muted);
    let value_style = Style::default().fg(app.theme.foreground);

    let mut lines = vec![Line::raw("")];
    lines.extend(
        wrap_lines(&card.description, text_width)
            .into_iter()
            .map(|line| Line::from(Span::styled(format!("  {}", line), value_style))),
    );
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  Id: ", label_style),
        Span::styled(card.id.to_string(), value_style),
    ]));
    if app.caravan.contains(card.id) {
        lines.push(Line::from(Span::styled(
            "  Selected for caravan",
            Style::default().fg(app.theme.highlight),
        )));
    }

    let height = lines.len() as u16 + 2;
    let area = centered_rect(INFO_CARD_WIDTH, height, f.area());

    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(Text::from(lines))
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(Span::styled(
                    format!(" {} ", card.label),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .title_bottom(Line::from(" Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

/// Render the help modal overlay
pub fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.button);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.border);

    // "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Storage", header_style)),
        kb("Tab", "Next storage"),
        kb("[ / ]", "Outdoor temperature -/+"),
        kb("space", "Pause / resume clock"),
        Line::raw(""),
        Line::from(Span::styled("  Contents", header_style)),
        kb("↑/↓, j/k", "Scroll list"),
        kb("PgUp/PgDn", "Scroll a page"),
        kb("Home/End", "Jump to start/end"),
        kb("Esc", "Close info card"),
        Line::raw(""),
        Line::from(Span::styled("  Mouse", header_style)),
        kb("(i)", "Info card, select for caravan"),
        kb("[⏏]", "Eject stack"),
        kb("[✓]/[✗]", "Allow / forbid"),
        kb("Wheel", "Scroll list"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(&app.theme.name, key_style),
            Span::styled("  |  Units: ", desc_style),
            Span::styled(app.temperature_unit.as_str(), key_style),
        ]),
    ]);

    let width = 44;
    let height = 28;
    let area = centered_rect(width, height, f.area());

    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect(20, 4, area), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_rect(60, 20, area), Rect::new(0, 0, 40, 10));
    }
}
