//! Recording `Ui` host for panel tests
//!
//! Records every call as an [`Op`] and answers hit-tests from a fixed pointer
//! position and a list of click positions. Scroll views are recorded but do
//! not translate coordinates.

use super::host::{ButtonGlyph, Highlight, InfoCard, Tone, Ui};
use super::scroll::ScrollState;
use crate::world::ThingId;
use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Highlight(Rect, Highlight),
    Label(Rect, String, Tone),
    Separator(Rect),
    Icon(Rect, char),
    Button(Rect, ButtonGlyph),
    /// Checkbox as drawn, before any click is applied
    Checkbox(Rect, bool),
    Tooltip(Rect, String),
    BeginScroll { outer: Rect, content: Rect },
    EndScroll,
    InfoCard(InfoCard),
    HighlightTarget(ThingId),
}

#[derive(Debug, Default)]
pub struct RecordingUi {
    pub ops: Vec<Op>,
    pointer: Option<Position>,
    clicks: Vec<Position>,
}

impl RecordingUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_at(mut self, position: Position) -> Self {
        self.pointer = Some(position);
        self
    }

    /// Click at `position`; the pointer moves there too
    pub fn click_at(mut self, position: Position) -> Self {
        self.pointer = Some(position);
        self.clicks.push(position);
        self
    }

    fn clicked(&self, rect: Rect) -> bool {
        self.clicks.iter().any(|p| rect.contains(*p))
    }

    pub fn labels(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Label(_, text, _) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn tooltips(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Tooltip(_, text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn highlights(&self) -> Vec<Highlight> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Highlight(_, h) => Some(*h),
                _ => None,
            })
            .collect()
    }

    pub fn opened_scroll_view(&self) -> bool {
        self.ops.iter().any(|op| matches!(op, Op::BeginScroll { .. }))
    }
}

impl Ui for RecordingUi {
    fn mouse_over(&self, rect: Rect) -> bool {
        self.pointer.is_some_and(|p| rect.contains(p))
    }

    fn draw_highlight(&mut self, rect: Rect, highlight: Highlight) {
        self.ops.push(Op::Highlight(rect, highlight));
    }

    fn label(&mut self, rect: Rect, text: &str, tone: Tone) {
        self.ops.push(Op::Label(rect, text.to_string(), tone));
    }

    fn separator(&mut self, rect: Rect) {
        self.ops.push(Op::Separator(rect));
    }

    fn icon(&mut self, rect: Rect, glyph: char) {
        self.ops.push(Op::Icon(rect, glyph));
    }

    fn button(&mut self, rect: Rect, glyph: ButtonGlyph) -> bool {
        self.ops.push(Op::Button(rect, glyph));
        self.clicked(rect)
    }

    fn checkbox(&mut self, rect: Rect, checked: &mut bool) {
        self.ops.push(Op::Checkbox(rect, *checked));
        if self.clicked(rect) {
            *checked = !*checked;
        }
    }

    fn tooltip(&mut self, rect: Rect, text: String) {
        self.ops.push(Op::Tooltip(rect, text));
    }

    fn begin_scroll_view(&mut self, outer: Rect, scroll: &mut ScrollState, content: Rect) {
        scroll.update_dimensions(usize::from(content.height), usize::from(outer.height));
        self.ops.push(Op::BeginScroll { outer, content });
    }

    fn end_scroll_view(&mut self) {
        self.ops.push(Op::EndScroll);
    }

    fn open_info_card(&mut self, card: InfoCard) {
        self.ops.push(Op::InfoCard(card));
    }

    fn highlight_target(&mut self, id: ThingId) {
        self.ops.push(Op::HighlightTarget(id));
    }
}
