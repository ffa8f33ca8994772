// Storage tab strip
//
// One tab per storage in the world, the selected one highlighted. Drawn on
// the row the panel reserves above its heading.

use crate::theme::Theme;
use crate::world::{Stockpile, Storage};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, world: &[Stockpile], selected: Option<usize>, theme: &Theme) {
    let mut spans = Vec::with_capacity(world.len() * 2);
    for (i, storage) in world.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(theme.border)));
        }
        let style = if selected == Some(i) {
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.muted)
        };
        spans.push(Span::styled(storage.label().to_string(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
