//! Viewport state for the table's scroll container.

/// Fraction of the window's inner height given to the table container.
pub const VIEWPORT_HEIGHT_RATIO: f32 = 0.74;

/// Viewport state - the fixed-height scroll container holding one page of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Vertical scroll position inside the container
    pub scroll_top: f32,
    /// Container height in CSS pixels
    pub height: f32,
    /// Height of one rendered row in CSS pixels
    pub row_height: f32,
}

impl Viewport {
    /// Create a viewport scrolled to the top.
    pub fn new(height: f32, row_height: f32) -> Self {
        Self {
            scroll_top: 0.0,
            height: sanitize(height),
            row_height: sanitize(row_height),
        }
    }

    /// Size the container from the window's inner height.
    pub fn from_window_height(window_height: f32, row_height: f32) -> Self {
        Self::new(window_height * VIEWPORT_HEIGHT_RATIO, row_height)
    }

    /// Apply a host resize. The scroll offset is re-clamped against the
    /// content currently shown.
    pub fn resize(&mut self, height: f32, visible_rows: usize) {
        self.height = sanitize(height);
        self.scroll_top = self.scroll_top.clamp(0.0, self.max_scroll(visible_rows));
    }

    /// Height of the inner area holding `visible_rows` rows.
    #[allow(clippy::cast_precision_loss)]
    pub fn content_height(&self, visible_rows: usize) -> f32 {
        visible_rows as f32 * self.row_height
    }

    /// Largest scroll offset that still keeps content in view.
    pub fn max_scroll(&self, visible_rows: usize) -> f32 {
        (self.content_height(visible_rows) - self.height).max(0.0)
    }

    /// Scroll to `y`, clamped to the content. Returns the applied delta.
    pub fn scroll_to(&mut self, y: f32, visible_rows: usize) -> f32 {
        let target = if y.is_finite() { y } else { 0.0 };
        let new_top = target.clamp(0.0, self.max_scroll(visible_rows));
        let delta = new_top - self.scroll_top;
        self.scroll_top = new_top;
        delta
    }

    pub fn reset_scroll(&mut self) {
        self.scroll_top = 0.0;
    }
}

fn sanitize(px: f32) -> f32 {
    if px.is_finite() {
        px.max(0.0)
    } else {
        0.0
    }
}
