//! Host toolkit contract
//!
//! The panel is written against this trait instead of a concrete renderer.
//! It follows the immediate-mode style: every call both draws and reports
//! interaction for the current frame, and nothing is retained between frames
//! except what the caller passes back in (the scroll state).
//!
//! # Coordinate space
//!
//! Outside a scroll view, rects are in host coordinates. Between
//! [`Ui::begin_scroll_view`] and [`Ui::end_scroll_view`] they are in content
//! coordinates: the host shifts them by the scroll offset and clips them to
//! the scroll view, and hit-testing (`mouse_over`, buttons, checkboxes) uses
//! the shifted, clipped rect.

use super::scroll::ScrollState;
use crate::util::truncate_to_width;
use crate::world::ThingId;
use ratatui::layout::Rect;

/// Background emphasis for a rect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Pointer is over the row
    Selected,
    /// Alternating row stripe
    Light,
    /// Pointer is over a non-row region such as the heading
    Hover,
}

/// Text emphasis for a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Muted,
    Heading,
}

/// Image buttons the panel uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonGlyph {
    Info,
    Eject,
}

/// Everything the host needs to show a thing's info card
#[derive(Debug, Clone, PartialEq)]
pub struct InfoCard {
    pub id: ThingId,
    pub label: String,
    pub description: String,
}

/// Immediate-mode widget host
pub trait Ui {
    /// Whether the pointer is inside `rect` this frame
    fn mouse_over(&self, rect: Rect) -> bool;

    fn draw_highlight(&mut self, rect: Rect, highlight: Highlight);

    fn label(&mut self, rect: Rect, text: &str, tone: Tone);

    /// Horizontal rule across `rect`
    fn separator(&mut self, rect: Rect);

    fn icon(&mut self, rect: Rect, glyph: char);

    /// Draw an image button; true when it was clicked this frame
    fn button(&mut self, rect: Rect, glyph: ButtonGlyph) -> bool;

    /// Draw a checkbox and flip `checked` when it was clicked this frame
    fn checkbox(&mut self, rect: Rect, checked: &mut bool);

    /// Register a tooltip shown while the pointer rests on `rect`
    fn tooltip(&mut self, rect: Rect, text: String);

    /// Open a scroll view over `outer` showing `content`
    ///
    /// The host refreshes `scroll`'s dimensions and applies pending wheel
    /// input to it before positioning the content.
    fn begin_scroll_view(&mut self, outer: Rect, scroll: &mut ScrollState, content: Rect);

    fn end_scroll_view(&mut self);

    fn open_info_card(&mut self, card: InfoCard);

    /// Point the player at a thing in the world
    fn highlight_target(&mut self, id: ThingId);

    /// Shorten text to fit `width` host units
    fn truncate(&self, text: &str, width: u16) -> String {
        truncate_to_width(text, usize::from(width))
    }
}
