// Scroll position of the contents list
//
// The panel owns this state across frames; the host's scroll view reads and
// clamps it every frame and applies wheel input to it. Units are terminal
// rows, so with one-row items the offset is also the first visible index.

/// Scroll state for the contents list
///
/// Owns position, content size and viewport size. Dimensions are refreshed
/// by the host each frame, which re-clamps the offset when the list shrinks.
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Rows scrolled past the top of the viewport
    offset: usize,

    /// Total content height in rows
    total: usize,

    /// Visible height in rows
    viewport: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update content and viewport dimensions
    /// Call this each render frame with current sizes
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        // If dimensions not set (total=0), allow unbounded scroll
        // The next frame clamps to actual content size
        if self.total == 0 || self.offset < self.max_offset() {
            self.offset += 1;
        }
    }

    /// Scroll by a signed number of rows (mouse wheel)
    pub fn scroll_by(&mut self, delta: i32) {
        let target = self.offset as i64 + i64::from(delta);
        self.offset = (target.max(0) as usize).min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        let page = self.viewport.max(1);
        self.offset = self.offset.saturating_sub(page);
    }

    pub fn page_down(&mut self) {
        let page = self.viewport.max(1);
        self.offset = (self.offset + page).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get visible range (start_row, end_row)
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.offset;
        let end = (self.offset + self.viewport).min(self.total);
        (start, end)
    }

    /// Check if content overflows viewport (scrollbar needed)
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_clamped_when_content_shrinks() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(30, 10);
        scroll.scroll_to_bottom();
        assert_eq!(scroll.offset(), 20);

        // Three stacks ejected
        scroll.update_dimensions(27, 10);
        assert_eq!(scroll.offset(), 17);
    }

    #[test]
    fn test_wheel_scroll_is_bounded() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);

        scroll.scroll_by(-3);
        assert_eq!(scroll.offset(), 0);

        scroll.scroll_by(9);
        assert_eq!(scroll.offset(), 9);

        scroll.scroll_by(100);
        assert_eq!(scroll.offset(), 15);
    }

    #[test]
    fn test_visible_range() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(100, 10);

        let (start, end) = scroll.visible_range();
        assert_eq!(start, 0);
        assert_eq!(end, 10);

        scroll.scroll_to_bottom();
        let (start, end) = scroll.visible_range();
        assert_eq!(start, 90);
        assert_eq!(end, 100);
    }

    #[test]
    fn test_paging() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(25, 10);

        scroll.page_down();
        assert_eq!(scroll.offset(), 10);
        scroll.page_down();
        assert_eq!(scroll.offset(), 15);
        scroll.page_up();
        assert_eq!(scroll.offset(), 5);
    }

    #[test]
    fn test_short_list_needs_no_scrollbar() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(4, 10);
        assert!(!scroll.needs_scrollbar());
        scroll.scroll_down();
        assert_eq!(scroll.offset(), 0);
    }
}
