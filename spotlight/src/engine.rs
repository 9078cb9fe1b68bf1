use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{
    IndexPath, ItemGeometry, ItemUpdate, PassSummary, Rect, ScrollFrame, SectionInsetFn,
    SpotlightOptions,
};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Participant {
    index: usize,
    path: IndexPath,
    small_height: f64,
}

/// A headless spotlight layout engine.
///
/// As a list scrolls, the item crossing the top of the viewport is kept at (at least) its full
/// height while the items above it collapse to a small height and the item after it grows back
/// as it approaches the top.
///
/// The engine holds no UI objects. Each layout pass, the host:
/// - calls [`Self::reset`] (or [`Self::register_all`]),
/// - registers its items in layout order,
/// - calls [`Self::recompute`] with the current [`ScrollFrame`], applies the reported
///   [`ItemUpdate`]s and the returned content height.
///
/// For a host-side driver that owns the items and scroll state, see the `spotlight-adapter`
/// crate.
#[derive(Clone, Debug)]
pub struct SpotlightEngine {
    options: SpotlightOptions,
    participants: Vec<Participant>,
    spotlight_index: usize,
    content_height: Option<f64>,
    last_summary: Option<PassSummary>,

    rects: Vec<Rect>, // per participant, rebuilt by every pass
}

impl SpotlightEngine {
    pub fn new(options: SpotlightOptions) -> Self {
        sdebug!(
            scroll_last_item_to_top = options.scroll_last_item_to_top,
            last_item_stretchy = options.last_item_stretchy,
            "SpotlightEngine::new"
        );
        Self {
            options,
            participants: Vec::new(),
            spotlight_index: 0,
            content_height: None,
            last_summary: None,
            rects: Vec::new(),
        }
    }

    pub fn options(&self) -> &SpotlightOptions {
        &self.options
    }

    /// Replaces the options. Registered items are kept; the new oracle applies from the next
    /// registration on.
    pub fn set_options(&mut self, options: SpotlightOptions) {
        self.options = options;
        strace!(options = ?self.options, "SpotlightEngine::set_options");
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut SpotlightOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_small_height(
        &mut self,
        f: impl Fn(&ItemGeometry) -> Option<f64> + Send + Sync + 'static,
    ) {
        self.options.small_height = Arc::new(f);
    }

    pub fn set_section_inset(
        &mut self,
        f: impl Fn(usize) -> Option<f64> + Send + Sync + 'static,
    ) {
        self.options.section_inset = Some(Arc::new(f) as SectionInsetFn);
    }

    /// Removes the section inset lookup; every item then uses an inset of `0`.
    pub fn clear_section_inset(&mut self) {
        self.options.section_inset = None;
    }

    pub fn set_scroll_last_item_to_top(&mut self, scroll_last_item_to_top: bool) {
        self.options.scroll_last_item_to_top = scroll_last_item_to_top;
    }

    pub fn set_last_item_stretchy(&mut self, last_item_stretchy: bool) {
        self.options.last_item_stretchy = last_item_stretchy;
    }

    pub fn set_collapse_below(&mut self, collapse_below: bool) {
        self.options.collapse_below = collapse_below;
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.options.enabled = enabled;
    }

    /// Clears the participating items. Call once per layout pass, before registering.
    pub fn reset(&mut self) {
        self.participants.clear();
    }

    /// Registers the item at `index` of the host's item slice.
    ///
    /// Returns `true` when the oracle gave the item a collapsed height, i.e. the item takes part
    /// in this pass. Out-of-bounds indexes are ignored (and debug-asserted).
    pub fn register(&mut self, items: &[ItemGeometry], index: usize) -> bool {
        let Some(item) = items.get(index) else {
            swarn!(index, len = items.len(), "register: out-of-bounds item index");
            debug_assert!(
                index < items.len(),
                "register: out-of-bounds item index (i={index}, len={})",
                items.len()
            );
            return false;
        };
        self.register_item(index, item)
    }

    /// Registers `item`, which lives at `index` of the slice later passed to `recompute`.
    ///
    /// Items must be registered in layout order.
    pub fn register_item(&mut self, index: usize, item: &ItemGeometry) -> bool {
        match self.options.small_height_for(item) {
            Some(small_height) if small_height.is_finite() => {
                debug_assert!(
                    self.participants.last().is_none_or(|p| p.index < index),
                    "register: items must be registered in layout order"
                );
                self.participants.push(Participant {
                    index,
                    path: item.path,
                    small_height,
                });
                true
            }
            Some(_) => {
                swarn!(
                    index,
                    section = item.path.section,
                    row = item.path.row,
                    "register: non-finite collapsed height; item excluded"
                );
                false
            }
            None => false,
        }
    }

    /// Resets, then registers every item of `items` in order. Returns the participant count.
    pub fn register_all(&mut self, items: &[ItemGeometry]) -> usize {
        self.reset();
        for (index, item) in items.iter().enumerate() {
            self.register_item(index, item);
        }
        self.participants.len()
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Host item indexes of the participating items, in layout order.
    pub fn participants(&self) -> impl Iterator<Item = usize> + '_ {
        self.participants.iter().map(|p| p.index)
    }

    pub fn is_participating(&self, index: usize) -> bool {
        self.participants.iter().any(|p| p.index == index)
    }

    /// Index into the participating list of the item last placed in the spotlight.
    ///
    /// Only meaningful after a pass; carried over between passes as a hint.
    pub fn spotlight_index(&self) -> usize {
        self.spotlight_index
    }

    /// Host item index of the item in the spotlight, if it is still registered.
    pub fn spotlight_item(&self) -> Option<usize> {
        self.participants.get(self.spotlight_index).map(|p| p.index)
    }

    /// Content height computed by the last non-empty pass.
    pub fn content_height(&self) -> Option<f64> {
        self.content_height
    }

    pub fn last_summary(&self) -> Option<PassSummary> {
        self.last_summary
    }

    /// Whether the stretchy last item mode applies to the registered items.
    pub fn stretchy_in_effect(&self) -> bool {
        self.options.last_item_stretchy && self.participants.len() >= 3
    }

    /// Recomputes every participating item's rectangle for the scroll position in `frame`.
    ///
    /// `on_update` is called synchronously, in layout order, for every item whose new rectangle
    /// differs from `items[index].rect`. `items` is not modified; see [`apply_updates`].
    ///
    /// Sets `frame.bottom_inset` to `0` and returns the content height. With no participating
    /// items (or a disabled engine) nothing changes and the previous content height is returned.
    pub fn recompute(
        &mut self,
        items: &[ItemGeometry],
        frame: &mut ScrollFrame,
        on_update: impl FnMut(ItemUpdate),
    ) -> Option<f64> {
        self.run_pass(items, frame, on_update);
        self.content_height
    }

    /// Collects the updates of a pass into `out` (clears `out` first).
    ///
    /// This is a convenience wrapper around [`Self::recompute`].
    pub fn recompute_into(
        &mut self,
        items: &[ItemGeometry],
        frame: &mut ScrollFrame,
        out: &mut Vec<ItemUpdate>,
    ) -> Option<f64> {
        out.clear();
        self.recompute(items, frame, |u| out.push(u))
    }

    /// Runs a full pass over a host-owned item slice: registers every item, recomputes, and
    /// applies the updates in place.
    ///
    /// Returns `None` when no item participates.
    pub fn layout(
        &mut self,
        items: &mut [ItemGeometry],
        frame: &mut ScrollFrame,
    ) -> Option<PassSummary> {
        self.register_all(items);
        let mut updates = Vec::new();
        let summary = self.run_pass(items, frame, |u| updates.push(u))?;
        apply_updates(items, &updates);
        Some(summary)
    }

    fn run_pass(
        &mut self,
        items: &[ItemGeometry],
        frame: &mut ScrollFrame,
        mut on_update: impl FnMut(ItemUpdate),
    ) -> Option<PassSummary> {
        if !self.options.enabled {
            strace!("recompute: engine disabled");
            return None;
        }
        let Some(&first) = self.participants.first() else {
            strace!("recompute: no participating items");
            return None;
        };
        let len = items.len();
        if let Some(stale) = self.participants.iter().find(|p| p.index >= len) {
            swarn!(
                index = stale.index,
                len,
                "recompute: registered item is outside the item slice"
            );
            debug_assert!(
                stale.index < len,
                "recompute: registered item is outside the item slice (i={}, len={len})",
                stale.index
            );
            return None;
        }

        let count = self.participants.len();
        let stretchy = self.stretchy_in_effect();
        if self.options.last_item_stretchy && !stretchy {
            sdebug!(
                participants = count,
                "last_item_stretchy needs 3 participating items; off for this pass"
            );
        }

        let offset = frame.scroll_offset();
        frame.bottom_inset = 0.0;
        strace!(offset, participants = count, stretchy, "recompute");

        let first_original = items[first.index].original_rect;
        // The first participant sits at or below the top of the viewport: it keeps the
        // spotlight and nothing after it collapses.
        let first_below_top = first_original.min_y() >= offset;
        let first_is_leading = first.path.is_leading_row();

        let mut section_inset = 0.0;
        let mut current_y = 0.0;
        let mut prev_in_spotlight = false;
        let mut updated = 0usize;

        self.rects.clear();
        self.rects.reserve(count);

        for i in 0..count {
            let participant = self.participants[i];
            let item = &items[participant.index];
            if let Some(inset) = self.options.section_inset_for(participant.path.section) {
                section_inset = inset;
            }

            let original = item.original_rect;
            let with_inset = original.with_height(original.height + section_inset);
            let small = participant.small_height;

            let is_above = with_inset.max_y() <= offset;
            let is_below = with_inset.min_y() > offset;
            let in_spotlight =
                (!is_above && !is_below) || (i == 0 && (offset < 0.0 || first_below_top));

            let (y, height) = if in_spotlight {
                self.spotlight_index = i;
                if first_below_top && !first_is_leading {
                    // Inherited the spotlight from the boundary rule: don't stretch.
                    (with_inset.min_y(), with_inset.height)
                } else {
                    let height = small.max(with_inset.max_y() - offset);
                    (with_inset.max_y() - height, height)
                }
            } else if prev_in_spotlight && !first_below_top {
                let prev = self.rects[i - 1];
                if stretchy && self.spotlight_index == count - 2 {
                    let lost = with_inset.height - prev.height;
                    (prev.max_y() + section_inset, with_inset.height + lost)
                } else {
                    let ratio = ratio(with_inset.min_y() - offset, with_inset.height);
                    let grown = (with_inset.height - small) * (1.0 - ratio);
                    (
                        current_y + (section_inset - grown).max(0.0),
                        small + grown,
                    )
                }
            } else if is_above {
                (with_inset.max_y() - small, small)
            } else {
                match i.checked_sub(1) {
                    Some(prev_i) if stretchy && self.spotlight_index == count - 3 => {
                        let prev_original = items[self.participants[prev_i].index].original_rect;
                        let prev = self.rects[prev_i];
                        let ratio = ratio(prev_original.min_y() - offset, with_inset.height);
                        let grown = (with_inset.height - small) * (1.0 - ratio);
                        (prev.max_y() + section_inset, small + grown)
                    }
                    _ if self.options.collapse_below => (current_y + section_inset, small),
                    _ => (current_y + section_inset, original.height),
                }
            };

            let height = if height < 0.0 {
                swarn!(
                    index = participant.index,
                    height,
                    "recompute: negative height clamped to 0"
                );
                0.0
            } else {
                height
            };

            let old_rect = item.rect;
            let new_rect = old_rect.with_y(y).with_height(height);
            self.rects.push(new_rect);

            current_y = new_rect.max_y();
            // Overscroll pins the first item, but the next item must not treat it as a
            // spotlight predecessor.
            prev_in_spotlight = in_spotlight && offset >= 0.0;

            if new_rect != old_rect {
                updated += 1;
                on_update(ItemUpdate {
                    index: participant.index,
                    path: participant.path,
                    old_rect,
                    new_rect,
                });
            }
        }

        let last = self.participants[count - 1];
        if let Some(inset) = self.options.section_inset_for(last.path.section) {
            section_inset = inset;
        }
        let last_original = items[last.index].original_rect;
        let content_height = if self.options.scroll_last_item_to_top {
            last_original.min_y() + frame.viewport_height + section_inset
        } else if stretchy {
            last_original.max_y()
        } else {
            last_original.max_y() - first_original.height + section_inset
        };

        let summary = PassSummary {
            content_height,
            spotlight_index: self.spotlight_index,
            stretchy_applied: stretchy,
            participants: count,
            updated,
        };
        sdebug!(
            content_height,
            spotlight_index = self.spotlight_index,
            updated,
            "recompute: done"
        );
        self.content_height = Some(content_height);
        self.last_summary = Some(summary);
        Some(summary)
    }
}

/// Fraction of `extent` that `distance` covers, clamped to `[0, 1]`; `0` for an empty extent.
///
/// An item shorter than its distance to the scroll line stays at its collapsed height.
fn ratio(distance: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        (distance / extent).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Applies updates reported by [`SpotlightEngine::recompute`] to the host's item slice.
///
/// Updates whose index is out of bounds are ignored.
pub fn apply_updates(items: &mut [ItemGeometry], updates: &[ItemUpdate]) {
    for update in updates {
        if let Some(item) = items.get_mut(update.index) {
            item.rect = update.new_rect;
        }
    }
}
