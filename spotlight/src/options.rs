use alloc::sync::Arc;

use crate::ItemGeometry;

/// The collapsed-height oracle.
///
/// Returns the height an item shrinks to once it leaves the spotlight, or `None` when the item
/// does not take part in the spotlight effect at all. The answer must be stable within a pass.
pub type SmallHeightFn = Arc<dyn Fn(&ItemGeometry) -> Option<f64> + Send + Sync>;

/// Per-section inset lookup (the gap that follows each item of a section).
///
/// `None` means "no answer": the engine keeps the last inset it saw.
pub type SectionInsetFn = Arc<dyn Fn(usize) -> Option<f64> + Send + Sync>;

/// Configuration for [`crate::SpotlightEngine`].
///
/// Cheap to clone: callbacks are stored in `Arc`s, so hosts can flip a flag and call
/// `SpotlightEngine::set_options` without reallocating closures.
pub struct SpotlightOptions {
    pub small_height: SmallHeightFn,
    pub section_inset: Option<SectionInsetFn>,

    /// Pads the content height so the last participating item's original top can be scrolled
    /// to the top of the viewport.
    pub scroll_last_item_to_top: bool,

    /// Lets the last participating item absorb the collapse of its predecessor instead of
    /// shrinking. Ignored for passes with fewer than 3 participating items.
    pub last_item_stretchy: bool,

    /// When set, items that the scroll position has not reached yet rest at their collapsed
    /// height instead of their original height.
    pub collapse_below: bool,

    /// Enables/disables the engine. When disabled, `recompute` leaves every item untouched.
    pub enabled: bool,
}

impl Clone for SpotlightOptions {
    fn clone(&self) -> Self {
        Self {
            small_height: Arc::clone(&self.small_height),
            section_inset: self.section_inset.clone(),
            scroll_last_item_to_top: self.scroll_last_item_to_top,
            last_item_stretchy: self.last_item_stretchy,
            collapse_below: self.collapse_below,
            enabled: self.enabled,
        }
    }
}

impl SpotlightOptions {
    /// Creates options from a collapsed-height oracle.
    ///
    /// `small_height(item)` should return `Some(height)` for items taking part in the spotlight
    /// effect. Items answered with `None` are left to the host's ordinary layout.
    pub fn new(
        small_height: impl Fn(&ItemGeometry) -> Option<f64> + Send + Sync + 'static,
    ) -> Self {
        Self {
            small_height: Arc::new(small_height),
            section_inset: None,
            scroll_last_item_to_top: true,
            last_item_stretchy: false,
            collapse_below: false,
            enabled: true,
        }
    }

    /// Every item participates with the same collapsed height.
    pub fn uniform(small_height: f64) -> Self {
        Self::new(move |_| Some(small_height))
    }

    pub fn with_small_height(
        mut self,
        small_height: impl Fn(&ItemGeometry) -> Option<f64> + Send + Sync + 'static,
    ) -> Self {
        self.small_height = Arc::new(small_height);
        self
    }

    pub fn with_section_inset(
        mut self,
        section_inset: impl Fn(usize) -> Option<f64> + Send + Sync + 'static,
    ) -> Self {
        self.section_inset = Some(Arc::new(section_inset) as SectionInsetFn);
        self
    }

    /// Uses the same inset for every section.
    pub fn with_uniform_section_inset(self, inset: f64) -> Self {
        self.with_section_inset(move |_| Some(inset))
    }

    /// Drops the section inset lookup (every item then uses an inset of `0`).
    pub fn clear_section_inset(mut self) -> Self {
        self.section_inset = None;
        self
    }

    pub fn with_scroll_last_item_to_top(mut self, scroll_last_item_to_top: bool) -> Self {
        self.scroll_last_item_to_top = scroll_last_item_to_top;
        self
    }

    pub fn with_last_item_stretchy(mut self, last_item_stretchy: bool) -> Self {
        self.last_item_stretchy = last_item_stretchy;
        self
    }

    pub fn with_collapse_below(mut self, collapse_below: bool) -> Self {
        self.collapse_below = collapse_below;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub(crate) fn small_height_for(&self, item: &ItemGeometry) -> Option<f64> {
        (self.small_height)(item)
    }

    pub(crate) fn section_inset_for(&self, section: usize) -> Option<f64> {
        self.section_inset.as_ref().and_then(|f| f(section))
    }
}

impl core::fmt::Debug for SpotlightOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpotlightOptions")
            .field("has_section_inset", &self.section_inset.is_some())
            .field("scroll_last_item_to_top", &self.scroll_last_item_to_top)
            .field("last_item_stretchy", &self.last_item_stretchy)
            .field("collapse_below", &self.collapse_below)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
