use alloc::string::String;

use spotlight::{ItemGeometry, ScrollFrame, SpotlightEngine};

/// A scroll anchor that keeps the same item in the spotlight across data reloads.
///
/// Typical use cases:
/// - items are inserted above the spotlight (e.g. a feed loading newer entries)
/// - the host rebuilds its geometry after a size change and positions shift
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpotlightAnchor {
    pub identifier: String,
    /// Distance from the item's original top to the effective scroll offset.
    pub offset_in_item: f64,
}

/// Captures an anchor for the item currently in the spotlight.
///
/// Returns `None` before the engine has run a pass, or when the spotlighted item is no longer
/// part of `items`.
pub fn capture_spotlight_anchor(
    engine: &SpotlightEngine,
    items: &[ItemGeometry],
    frame: &ScrollFrame,
) -> Option<SpotlightAnchor> {
    engine.last_summary()?;
    let item = items.get(engine.spotlight_item()?)?;
    Some(SpotlightAnchor {
        identifier: item.identifier.clone(),
        offset_in_item: frame.scroll_offset() - item.original_rect.min_y(),
    })
}

/// Applies a previously captured anchor to `frame`, looking the item up by identifier.
///
/// Returns `true` when the anchor item was found. The resulting offset is not clamped.
pub fn apply_anchor(
    frame: &mut ScrollFrame,
    items: &[ItemGeometry],
    anchor: &SpotlightAnchor,
) -> bool {
    let Some(item) = items.iter().find(|it| it.identifier == anchor.identifier) else {
        return false;
    };
    frame.set_scroll_offset(item.original_rect.min_y() + anchor.offset_in_item);
    true
}
