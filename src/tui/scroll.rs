// Scroll state for the page viewport
//
// Owns position, content size and viewport size for the single scrolling
// document. Manual keys move the offset directly; section jumps go through
// `animate_to`, which eases toward the target over a few ticks.
//
// Integration: App calls update_dimensions() every frame from the page
// view and tick() on every tick event.

use crate::navigation::Viewport;

/// Scroll state for the page
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Current scroll offset (line at top of viewport)
    offset: usize,

    /// Total number of lines in the document
    total: usize,

    /// Number of lines visible in viewport
    viewport: usize,

    /// Line the viewport is easing toward, if animating
    target: Option<usize>,

    /// When false, animate_to jumps immediately
    smooth: bool,
}

impl ScrollState {
    pub fn new(smooth: bool) -> Self {
        Self {
            offset: 0,
            total: 0,
            viewport: 0,
            target: None,
            smooth,
        }
    }

    /// Update content and viewport dimensions
    /// Call this each render frame with current sizes
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;
        self.offset = self.offset.min(self.max_offset());
        if let Some(target) = self.target {
            self.target = Some(target.min(self.max_offset()));
        }
    }

    /// Scroll up by one line (cancels any animation)
    pub fn scroll_up(&mut self) {
        self.target = None;
        self.offset = self.offset.saturating_sub(1);
    }

    /// Scroll down by one line (cancels any animation)
    pub fn scroll_down(&mut self) {
        self.target = None;
        // If dimensions not set (total=0), allow unbounded scroll
        // Render will clamp to actual content size
        if self.total == 0 || self.offset < self.max_offset() {
            self.offset += 1;
        }
    }

    /// Scroll up by a page
    pub fn page_up(&mut self) {
        self.target = None;
        let page = self.viewport.max(1);
        self.offset = self.offset.saturating_sub(page);
    }

    /// Scroll down by a page
    pub fn page_down(&mut self) {
        self.target = None;
        let page = self.viewport.max(1);
        self.offset = (self.offset + page).min(self.max_offset());
    }

    /// Jump to top
    pub fn scroll_to_top(&mut self) {
        self.target = None;
        self.offset = 0;
    }

    /// Jump to bottom
    pub fn scroll_to_bottom(&mut self) {
        self.target = None;
        self.offset = self.max_offset();
    }

    /// Advance the animation one step. Returns true while still moving.
    ///
    /// Each step covers a third of the remaining distance (at least one
    /// line), which gives an ease-out curve.
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };

        let distance = target.abs_diff(self.offset);
        let step = (distance / 3).max(1);
        if distance <= step {
            self.offset = target;
            self.target = None;
            return false;
        }

        if target > self.offset {
            self.offset += step;
        } else {
            self.offset -= step;
        }
        true
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Get current scroll offset
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get visible range (start_index, end_index)
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.offset;
        let end = (self.offset + self.viewport).min(self.total);
        (start, end)
    }

    /// Check if content overflows viewport (scrollbar needed)
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    /// Maximum valid offset
    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }

    /// Get total content size
    pub fn total(&self) -> usize {
        self.total
    }

    /// Get viewport size
    pub fn viewport(&self) -> usize {
        self.viewport
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Viewport for ScrollState {
    fn animate_to(&mut self, line: usize) {
        let line = if self.total > 0 {
            line.min(self.max_offset())
        } else {
            line
        };

        if self.smooth {
            self.target = Some(line);
        } else {
            self.target = None;
            self.offset = line;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animate_reaches_target_over_ticks() {
        let mut scroll = ScrollState::new(true);
        scroll.update_dimensions(200, 20);

        scroll.animate_to(90);
        assert_eq!(scroll.offset(), 0);
        assert!(scroll.is_animating());

        let mut ticks = 0;
        while scroll.tick() {
            ticks += 1;
            assert!(ticks < 100, "animation never finished");
        }
        assert_eq!(scroll.offset(), 90);
        assert!(!scroll.is_animating());
        assert!(ticks > 1);
    }

    #[test]
    fn test_animate_upward() {
        let mut scroll = ScrollState::new(true);
        scroll.update_dimensions(200, 20);
        scroll.page_down();
        scroll.page_down();
        assert_eq!(scroll.offset(), 40);

        scroll.animate_to(5);
        while scroll.tick() {}
        assert_eq!(scroll.offset(), 5);
    }

    #[test]
    fn test_without_smooth_jumps_immediately() {
        let mut scroll = ScrollState::new(false);
        scroll.update_dimensions(200, 20);

        scroll.animate_to(50);
        assert_eq!(scroll.offset(), 50);
        assert!(!scroll.tick());
    }

    #[test]
    fn test_target_clamped_to_last_page() {
        let mut scroll = ScrollState::new(false);
        scroll.update_dimensions(100, 30);

        scroll.animate_to(95);
        assert_eq!(scroll.offset(), 70);
    }

    #[test]
    fn test_manual_scroll_cancels_animation() {
        let mut scroll = ScrollState::new(true);
        scroll.update_dimensions(200, 20);

        scroll.animate_to(120);
        scroll.tick();
        let at = scroll.offset();
        scroll.scroll_up();

        assert!(!scroll.is_animating());
        assert_eq!(scroll.offset(), at - 1);
    }

    #[test]
    fn test_visible_range() {
        let mut scroll = ScrollState::default();
        scroll.update_dimensions(100, 10);

        let (start, end) = scroll.visible_range();
        assert_eq!((start, end), (0, 10));

        scroll.scroll_to_bottom();
        let (start, end) = scroll.visible_range();
        assert_eq!((start, end), (90, 100));
    }
}
