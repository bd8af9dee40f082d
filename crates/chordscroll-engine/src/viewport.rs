//! Scrollable viewports.

/// Something with a scroll offset that can be moved.
pub trait Viewport {
    /// Current scroll offset `(x, y)`.
    fn offset(&self) -> (i64, i64);
    /// Scroll to an absolute offset. Implementations clamp out-of-range values.
    fn scroll_to(&mut self, x: i64, y: i64);
}

/// A simulated page: a fixed-size window over fixed-size content.
///
/// Offsets are clamped to `[0, content - view]` on each axis, the way a
/// browser clamps `scrollTo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageViewport {
    x: i64,
    y: i64,
    view: (i64, i64),
    content: (i64, i64),
}

impl PageViewport {
    /// A page scrolled to the origin.
    pub fn new(view_w: i64, view_h: i64, content_w: i64, content_h: i64) -> Self {
        Self {
            x: 0,
            y: 0,
            view: (view_w, view_h),
            content: (content_w, content_h),
        }
    }

    /// Largest reachable offset on each axis.
    pub fn max_offset(&self) -> (i64, i64) {
        (
            self.content.0.saturating_sub(self.view.0).max(0),
            self.content.1.saturating_sub(self.view.1).max(0),
        )
    }
}

impl Default for PageViewport {
    fn default() -> Self {
        Self::new(1280, 800, 1280, 10_000)
    }
}

impl Viewport for PageViewport {
    fn offset(&self) -> (i64, i64) {
        (self.x, self.y)
    }

    fn scroll_to(&mut self, x: i64, y: i64) {
        let (mx, my) = self.max_offset();
        self.x = x.clamp(0, mx);
        self.y = y.clamp(0, my);
    }
}
