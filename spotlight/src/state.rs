/// A lightweight, serializable snapshot of the host's vertical scroll state for one pass.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollFrame {
    /// Raw vertical content offset reported by the scroll container. Negative while the host
    /// is overscrolling (bouncing) past the top.
    pub content_offset_y: f64,
    pub top_inset: f64,
    /// Overwritten to `0` by every non-empty pass: the engine owns the vertical extent.
    pub bottom_inset: f64,
    pub viewport_height: f64,
}

impl ScrollFrame {
    pub fn new(content_offset_y: f64, viewport_height: f64) -> Self {
        Self {
            content_offset_y,
            viewport_height,
            ..Self::default()
        }
    }

    pub fn with_insets(mut self, top_inset: f64, bottom_inset: f64) -> Self {
        self.top_inset = top_inset;
        self.bottom_inset = bottom_inset;
        self
    }

    /// The effective scroll offset the engine classifies items against
    /// (`content_offset_y + top_inset`).
    pub fn scroll_offset(&self) -> f64 {
        self.content_offset_y + self.top_inset
    }

    /// Sets the raw content offset so that the effective scroll offset equals `offset`.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.content_offset_y = offset - self.top_inset;
    }
}
