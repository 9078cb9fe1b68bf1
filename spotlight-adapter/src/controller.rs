use alloc::vec::Vec;

use spotlight::{
    ItemGeometry, ItemUpdate, PassSummary, ScrollFrame, SpotlightEngine, SpotlightOptions,
    apply_updates,
};

use crate::{SpotlightAnchor, apply_anchor, capture_spotlight_anchor};

/// A framework-neutral controller that owns a `spotlight::SpotlightEngine`, the host's item
/// geometry and the scroll state, and runs one layout pass per change.
///
/// This type does not hold any UI objects. Hosts drive it by calling:
/// - `set_items` when their ordinary layout produced new geometry
/// - `on_scroll` / `on_viewport_height` / `on_insets` when UI events occur
/// - `scroll_to_item` / `apply_anchor` for programmatic scrolls
///
/// After each call, `items()` holds the applied rectangles and `updates()` the changes of the
/// last pass (useful to invalidate only the cells that moved).
#[derive(Clone, Debug)]
pub struct Controller {
    engine: SpotlightEngine,
    items: Vec<ItemGeometry>,
    frame: ScrollFrame,
    updates: Vec<ItemUpdate>,
}

impl Controller {
    pub fn new(options: SpotlightOptions) -> Self {
        Self::from_engine(SpotlightEngine::new(options))
    }

    pub fn from_engine(engine: SpotlightEngine) -> Self {
        Self {
            engine,
            items: Vec::new(),
            frame: ScrollFrame::default(),
            updates: Vec::new(),
        }
    }

    pub fn engine(&self) -> &SpotlightEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SpotlightEngine {
        &mut self.engine
    }

    pub fn into_engine(self) -> SpotlightEngine {
        self.engine
    }

    pub fn items(&self) -> &[ItemGeometry] {
        &self.items
    }

    pub fn frame(&self) -> ScrollFrame {
        self.frame
    }

    /// Updates reported by the last pass.
    pub fn updates(&self) -> &[ItemUpdate] {
        &self.updates
    }

    pub fn content_height(&self) -> Option<f64> {
        self.engine.content_height()
    }

    /// Replaces the item geometry (rects are reset to their originals) and runs a pass.
    pub fn set_items(&mut self, items: Vec<ItemGeometry>) -> Option<PassSummary> {
        self.items = items;
        for item in &mut self.items {
            item.reset_rect();
        }
        self.layout()
    }

    /// Replaces the item geometry while keeping the spotlighted item (by identifier) at the same
    /// relative scroll position.
    ///
    /// Returns `true` when the previous spotlight item was found in the new items.
    pub fn replace_items_anchored(&mut self, items: Vec<ItemGeometry>) -> bool {
        let anchor = self.capture_spotlight_anchor();
        self.set_items(items);
        match anchor {
            Some(anchor) => self.apply_anchor(&anchor),
            None => false,
        }
    }

    pub fn on_viewport_height(&mut self, viewport_height: f64) -> Option<PassSummary> {
        self.frame.viewport_height = viewport_height;
        self.layout()
    }

    pub fn on_insets(&mut self, top_inset: f64, bottom_inset: f64) -> Option<PassSummary> {
        self.frame.top_inset = top_inset;
        self.frame.bottom_inset = bottom_inset;
        self.layout()
    }

    /// Call this when the UI reports a content offset change (e.g. user drag).
    ///
    /// The offset is not clamped: overscroll reaches the engine as reported.
    pub fn on_scroll(&mut self, content_offset_y: f64) -> Option<PassSummary> {
        self.frame.content_offset_y = content_offset_y;
        self.layout()
    }

    /// Runs one pass over the owned items: register, recompute, apply.
    ///
    /// Returns `None` when no item participates (or the engine is disabled).
    pub fn layout(&mut self) -> Option<PassSummary> {
        self.updates.clear();
        let participants = self.engine.register_all(&self.items);
        atrace!(
            content_offset_y = self.frame.content_offset_y,
            participants,
            "Controller::layout"
        );
        if participants == 0 || !self.engine.enabled() {
            return None;
        }
        self.engine
            .recompute_into(&self.items, &mut self.frame, &mut self.updates);
        apply_updates(&mut self.items, &self.updates);
        self.engine.last_summary()
    }

    /// Returns the content offset range `(min, max)` the host's scroll container allows.
    ///
    /// `min` is `-top_inset`; `max` follows from the last computed content height. Before the
    /// first pass, `max` equals `min`.
    pub fn content_offset_bounds(&self) -> (f64, f64) {
        let min = -self.frame.top_inset;
        let max = self
            .engine
            .content_height()
            .map_or(min, |h| {
                (h + self.frame.bottom_inset - self.frame.viewport_height).max(min)
            });
        (min, max)
    }

    pub fn clamp_content_offset(&self, offset: f64) -> f64 {
        let (min, max) = self.content_offset_bounds();
        offset.clamp(min, max)
    }

    /// Content offset that brings the original top of the item at `index` to the top of the
    /// viewport (clamped). `None` for an out-of-bounds index.
    pub fn scroll_to_item_offset(&self, index: usize) -> Option<f64> {
        let item = self.items.get(index)?;
        Some(self.clamp_content_offset(item.original_rect.min_y() - self.frame.top_inset))
    }

    /// Scrolls so that the item at `index` enters the spotlight. Returns the applied content
    /// offset.
    pub fn scroll_to_item(&mut self, index: usize) -> Option<f64> {
        let offset = self.scroll_to_item_offset(index)?;
        self.scroll_to_offset(offset);
        Some(offset)
    }

    /// Applies a content offset. Returns the applied (clamped) offset.
    pub fn scroll_to_offset(&mut self, offset: f64) -> f64 {
        self.frame.content_offset_y = self.clamp_content_offset(offset);
        self.layout();
        self.frame.content_offset_y
    }

    pub fn capture_spotlight_anchor(&self) -> Option<SpotlightAnchor> {
        capture_spotlight_anchor(&self.engine, &self.items, &self.frame)
    }

    /// Applies a previously captured anchor (clamped) and runs a pass.
    pub fn apply_anchor(&mut self, anchor: &SpotlightAnchor) -> bool {
        if !apply_anchor(&mut self.frame, &self.items, anchor) {
            adebug!(identifier = %anchor.identifier, "apply_anchor: item not found");
            return false;
        }
        self.frame.content_offset_y = self.clamp_content_offset(self.frame.content_offset_y);
        self.layout();
        true
    }
}
