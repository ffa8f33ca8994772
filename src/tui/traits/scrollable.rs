//! Scrollable trait for components with scrollable content

use crate::panel::scroll::ScrollState;
use crate::panel::ContentsPanel;

/// Trait for components with scrollable content
///
/// Components own their `ScrollState` and expose it through this trait;
/// navigation delegates to it.
pub trait Scrollable {
    /// Get immutable reference to scroll state
    fn scroll_state(&self) -> &ScrollState;

    /// Get mutable reference to scroll state
    fn scroll_state_mut(&mut self) -> &mut ScrollState;

    // ─────────────────────────────────────────────────────────────
    // Navigation - default implementations delegate to ScrollState
    // ─────────────────────────────────────────────────────────────

    /// Scroll up by one row
    fn scroll_up(&mut self) {
        self.scroll_state_mut().scroll_up();
    }

    /// Scroll down by one row
    fn scroll_down(&mut self) {
        self.scroll_state_mut().scroll_down();
    }

    /// Jump to the top of content
    fn scroll_to_top(&mut self) {
        self.scroll_state_mut().scroll_to_top();
    }

    /// Jump to the bottom of content
    fn scroll_to_bottom(&mut self) {
        self.scroll_state_mut().scroll_to_bottom();
    }

    /// Scroll up by a page
    fn page_up(&mut self) {
        self.scroll_state_mut().page_up();
    }

    /// Scroll down by a page
    fn page_down(&mut self) {
        self.scroll_state_mut().page_down();
    }

    /// Get current scroll offset
    fn scroll_offset(&self) -> usize {
        self.scroll_state().offset()
    }
}

impl Scrollable for ContentsPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.render_state().scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.render_state_mut().scroll
    }
}
