// Terminal host for the contents panel
//
// Implements the panel's immediate-mode `Ui` contract on top of a ratatui
// `Frame`. Pointer input for the frame (position, click, wheel) is handed in
// up front; hit-testing happens against the rects as they are drawn.
//
// Inside a scroll view, content rects are shifted up by the scroll offset
// and clipped to the view. Anything fully outside is neither drawn nor
// clickable.

use crate::panel::host::{ButtonGlyph, Highlight, InfoCard, Tone, Ui};
use crate::panel::scroll::ScrollState;
use crate::theme::Theme;
use crate::tui::components::scrollbar::render_scrollbar;
use crate::world::ThingId;
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Widest a tooltip popup gets, borders included
const TOOLTIP_MAX_WIDTH: u16 = 44;

/// Pointer input for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerInput {
    pub position: Option<Position>,
    /// Left button went down since the last frame
    pub clicked: bool,
    /// Wheel rows since the last frame; positive scrolls down
    pub wheel: i32,
}

/// Requests the panel made of the host during a frame
#[derive(Debug, Default)]
pub struct HostOutcome {
    pub info_card: Option<InfoCard>,
    pub highlighted: Option<ThingId>,
}

#[derive(Debug, Clone, Copy)]
struct ScrollView {
    viewport: Rect,
    offset: u16,
}

/// `Ui` implementation drawing into a ratatui frame
pub struct TerminalUi<'a, 'f> {
    frame: &'a mut Frame<'f>,
    theme: &'a Theme,
    pointer: PointerInput,
    scroll: Option<ScrollView>,
    tooltips: Vec<(Rect, String)>,
    outcome: HostOutcome,
}

impl<'a, 'f> TerminalUi<'a, 'f> {
    pub fn new(frame: &'a mut Frame<'f>, theme: &'a Theme, pointer: PointerInput) -> Self {
        Self {
            frame,
            theme,
            pointer,
            scroll: None,
            tooltips: Vec::new(),
            outcome: HostOutcome::default(),
        }
    }

    /// Draw the tooltip under the pointer and hand back the frame's requests
    pub fn finish(self) -> HostOutcome {
        let Self {
            frame,
            theme,
            pointer,
            tooltips,
            outcome,
            ..
        } = self;

        if let Some(position) = pointer.position {
            if let Some(text) = pick_tooltip(&tooltips, position) {
                render_tooltip(frame, theme, position, text);
            }
        }
        outcome
    }

    /// Where `rect` lands on screen, if anywhere
    fn place(&self, rect: Rect) -> Option<Rect> {
        let area = self.frame.area();
        let placed = match self.scroll {
            Some(view) => {
                let top = i32::from(rect.y) - i32::from(view.offset);
                let bottom = top + i32::from(rect.height);
                let clip_top = top.max(i32::from(view.viewport.y));
                let clip_bottom = bottom.min(i32::from(view.viewport.bottom()));
                if clip_bottom <= clip_top {
                    return None;
                }
                let shifted = Rect::new(
                    rect.x,
                    u16::try_from(clip_top).ok()?,
                    rect.width,
                    u16::try_from(clip_bottom - clip_top).ok()?,
                );
                shifted.intersection(view.viewport)
            }
            None => rect,
        }
        .intersection(area);

        (!placed.is_empty()).then_some(placed)
    }

    fn hit(&self, placed: Option<Rect>) -> bool {
        match (placed, self.pointer.position) {
            (Some(rect), Some(position)) => rect.contains(position),
            _ => false,
        }
    }

    fn tone_style(&self, tone: Tone) -> Style {
        match tone {
            Tone::Normal => Style::default().fg(self.theme.foreground),
            Tone::Muted => Style::default().fg(self.theme.muted),
            Tone::Heading => Style::default()
                .fg(self.theme.heading)
                .add_modifier(Modifier::BOLD),
        }
    }

    fn text(&mut self, rect: Rect, text: &str, style: Style) {
        if let Some(area) = self.place(rect) {
            self.frame
                .render_widget(Paragraph::new(text.to_string()).style(style), area);
        }
    }
}

impl Ui for TerminalUi<'_, '_> {
    fn mouse_over(&self, rect: Rect) -> bool {
        self.hit(self.place(rect))
    }

    fn draw_highlight(&mut self, rect: Rect, highlight: Highlight) {
        let color = match highlight {
            Highlight::Selected | Highlight::Hover => self.theme.selection,
            Highlight::Light => self.theme.stripe,
        };
        if let Some(area) = self.place(rect) {
            self.frame
                .buffer_mut()
                .set_style(area, Style::default().bg(color));
        }
    }

    fn label(&mut self, rect: Rect, text: &str, tone: Tone) {
        let style = self.tone_style(tone);
        self.text(rect, text, style);
    }

    fn separator(&mut self, rect: Rect) {
        let rule = "─".repeat(usize::from(rect.width));
        let style = Style::default().fg(self.theme.border);
        self.text(rect, &rule, style);
    }

    fn icon(&mut self, rect: Rect, glyph: char) {
        let style = Style::default().fg(self.theme.foreground);
        self.text(rect, &glyph.to_string(), style);
    }

    fn button(&mut self, rect: Rect, glyph: ButtonGlyph) -> bool {
        let face = match glyph {
            ButtonGlyph::Info => "(i)",
            ButtonGlyph::Eject => "[⏏]",
        };
        let style = Style::default().fg(self.theme.button);
        self.text(rect, face, style);
        self.pointer.clicked && self.hit(self.place(rect))
    }

    fn checkbox(&mut self, rect: Rect, checked: &mut bool) {
        let (face, color) = if *checked {
            ("[✓]", self.theme.checkbox_on)
        } else {
            ("[✗]", self.theme.checkbox_off)
        };
        self.text(rect, face, Style::default().fg(color));
        if self.pointer.clicked && self.hit(self.place(rect)) {
            *checked = !*checked;
        }
    }

    fn tooltip(&mut self, rect: Rect, text: String) {
        if let Some(area) = self.place(rect) {
            self.tooltips.push((area, text));
        }
    }

    fn begin_scroll_view(&mut self, outer: Rect, scroll: &mut ScrollState, content: Rect) {
        scroll.update_dimensions(usize::from(content.height), usize::from(outer.height));
        if self.pointer.wheel != 0 && self.hit(self.place(outer)) {
            scroll.scroll_by(self.pointer.wheel);
            self.pointer.wheel = 0;
        }

        let viewport = outer.intersection(self.frame.area());
        render_scrollbar(self.frame, viewport, scroll);

        self.scroll = Some(ScrollView {
            viewport,
            offset: u16::try_from(scroll.offset()).unwrap_or(u16::MAX),
        });
    }

    fn end_scroll_view(&mut self) {
        self.scroll = None;
    }

    fn open_info_card(&mut self, card: InfoCard) {
        self.outcome.info_card = Some(card);
    }

    fn highlight_target(&mut self, id: ThingId) {
        self.outcome.highlighted = Some(id);
    }
}

/// The most specific tooltip under the pointer; later registrations win ties
fn pick_tooltip(tooltips: &[(Rect, String)], position: Position) -> Option<&str> {
    tooltips
        .iter()
        .enumerate()
        .filter(|(_, (rect, _))| rect.contains(position))
        .min_by_key(|(index, (rect, _))| (rect.area(), usize::MAX - index))
        .map(|(_, (_, text))| text.as_str())
}

fn render_tooltip(frame: &mut Frame, theme: &Theme, pointer: Position, text: &str) {
    let area = frame.area();
    let max_inner = usize::from(TOOLTIP_MAX_WIDTH.min(area.width).saturating_sub(2));
    if max_inner == 0 {
        return;
    }

    let lines = wrap_lines(text, max_inner);
    let inner_width = lines.iter().map(|l| l.width()).max().unwrap_or(0);
    let width = u16::try_from(inner_width + 2).unwrap_or(u16::MAX).min(area.width);
    let height = u16::try_from(lines.len() + 2)
        .unwrap_or(u16::MAX)
        .min(area.height);

    // Below-right of the pointer, flipped when it would leave the screen
    let x = pointer
        .x
        .saturating_add(1)
        .min(area.right().saturating_sub(width));
    let below = pointer.y.saturating_add(1);
    let y = if below.saturating_add(height) <= area.bottom() {
        below
    } else {
        pointer.y.saturating_sub(height)
    };
    let popup = Rect::new(x, y, width, height).intersection(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.tooltip_border))
        .style(Style::default().bg(theme.background));
    let body = Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>())
        .style(Style::default().fg(theme.foreground))
        .block(block);

    frame.render_widget(Clear, popup);
    frame.render_widget(body, popup);
}

/// Greedy word wrap by display width; overlong words are split
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if line.is_empty() {
                word.width()
            } else {
                line.width() + 1 + word.width()
            };
            if needed > width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            for ch in word.chars() {
                if line.width() + unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0) > width
                    && !line.is_empty()
                {
                    lines.push(std::mem::take(&mut line));
                }
                line.push(ch);
            }
        }
        lines.push(line);
    }
    lines
}
