use crate::*;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use spotlight::{IndexPath, ItemGeometry, Rect, SpotlightOptions};

fn item(row: usize, identifier: String, y: f64, height: f64) -> ItemGeometry {
    ItemGeometry::new(
        IndexPath::new(0, row),
        identifier,
        Rect::new(0.0, y, 320.0, height),
    )
}

/// `count` rows of 100pt, identified by `prefix-<n>` (n starting at `first_id`).
fn rows(count: usize, prefix: &str, first_id: usize) -> Vec<ItemGeometry> {
    (0..count)
        .map(|row| {
            item(
                row,
                format!("{prefix}-{}", first_id + row),
                row as f64 * 100.0,
                100.0,
            )
        })
        .collect()
}

fn controller() -> Controller {
    let mut c = Controller::new(SpotlightOptions::uniform(20.0));
    c.on_viewport_height(600.0);
    c.set_items(rows(4, "item", 0));
    c
}

#[test]
fn scroll_runs_a_pass_and_applies_rects() {
    let mut c = controller();
    assert_eq!(c.content_height(), Some(900.0));

    let summary = c.on_scroll(150.0).unwrap();
    assert_eq!(summary.spotlight_index, 1);
    assert_eq!(summary.participants, 4);
    assert!(!c.updates().is_empty());

    let r: Vec<Rect> = c.items().iter().map(|it| it.rect).collect();
    assert_eq!((r[0].y, r[0].height), (80.0, 20.0));
    assert_eq!((r[1].y, r[1].height), (150.0, 50.0));
    assert_eq!((r[2].y, r[2].height), (200.0, 60.0));
    assert_eq!((r[3].y, r[3].height), (260.0, 100.0));

    // Same position again: the applied rects are already up to date.
    let summary = c.on_scroll(150.0).unwrap();
    assert_eq!(summary.updated, 0);
    assert!(c.updates().is_empty());
}

#[test]
fn insets_shift_item_offsets() {
    let mut c = controller();
    c.on_insets(64.0, 30.0);
    // Every pass hands the bottom inset back to zero.
    assert_eq!(c.frame().bottom_inset, 0.0);
    assert_eq!(c.content_offset_bounds(), (-64.0, 300.0));

    assert_eq!(c.scroll_to_item_offset(2), Some(136.0));
    assert_eq!(c.scroll_to_item_offset(9), None);

    assert_eq!(c.scroll_to_item(2), Some(136.0));
    assert_eq!(c.frame().scroll_offset(), 200.0);
    assert_eq!(c.engine().spotlight_item(), Some(2));
}

#[test]
fn explicit_scrolls_are_clamped_but_user_scrolls_are_not() {
    let mut c = controller();
    assert_eq!(c.scroll_to_offset(1000.0), 300.0);
    assert_eq!(c.scroll_to_offset(-50.0), 0.0);

    // Overscroll reported by the host is laid out as-is.
    c.on_scroll(-40.0);
    assert_eq!(c.frame().content_offset_y, -40.0);
    let first = c.items()[0].rect;
    assert_eq!((first.y, first.height), (-40.0, 140.0));
}

#[test]
fn scroll_to_item_puts_it_in_the_spotlight() {
    let mut c = controller();
    assert_eq!(c.scroll_to_item(2), Some(200.0));
    assert_eq!(c.engine().spotlight_item(), Some(2));
    let r = c.items()[2].rect;
    assert_eq!((r.y, r.height), (200.0, 100.0));

    // The last item cannot reach the top: the offset stops at the end of the content.
    assert_eq!(c.content_offset_bounds(), (0.0, 300.0));
    assert_eq!(c.scroll_to_item(3), Some(300.0));
    assert_eq!(c.engine().spotlight_item(), Some(3));
}

#[test]
fn anchor_keeps_spotlight_item_across_prepend() {
    let mut c = controller();
    assert!(c.capture_spotlight_anchor().is_some());

    c.on_scroll(250.0);
    let anchor = c.capture_spotlight_anchor().unwrap();
    assert_eq!(anchor.identifier, "item-2");
    assert_eq!(anchor.offset_in_item, 50.0);

    // Two rows are inserted above; the old rows move down by 200pt.
    let mut next = rows(2, "new", 0);
    next.extend(rows(4, "item", 0).into_iter().enumerate().map(|(i, mut it)| {
        it.path.row = i + 2;
        it.original_rect.y += 200.0;
        it.rect = it.original_rect;
        it
    }));

    assert!(c.replace_items_anchored(next));
    assert_eq!(c.frame().content_offset_y, 450.0);
    assert_eq!(c.engine().spotlight_item(), Some(4));
    assert_eq!(c.items()[4].identifier, "item-2");
}

#[test]
fn anchor_for_removed_item_is_not_applied() {
    let mut c = controller();
    c.on_scroll(250.0);
    let anchor = c.capture_spotlight_anchor().unwrap();

    c.set_items(rows(4, "other", 0));
    assert!(!c.apply_anchor(&anchor));
    assert_eq!(c.frame().content_offset_y, 250.0);
}

#[test]
fn capture_needs_a_pass() {
    let c = Controller::new(SpotlightOptions::uniform(20.0));
    assert_eq!(c.capture_spotlight_anchor(), None);

    let mut frame = c.frame();
    let items = rows(2, "item", 0);
    assert_eq!(capture_spotlight_anchor(c.engine(), &items, &frame), None);

    let anchor = SpotlightAnchor {
        identifier: "item-1".into(),
        offset_in_item: 30.0,
    };
    assert!(apply_anchor(&mut frame, &items, &anchor));
    assert_eq!(frame.scroll_offset(), 130.0);
}

#[test]
fn no_participants_or_disabled_engine_skip_the_pass() {
    let mut c = Controller::new(SpotlightOptions::new(|_| None));
    assert_eq!(c.set_items(rows(3, "item", 0)), None);
    assert_eq!(c.content_height(), None);

    let mut c = controller();
    c.on_scroll(150.0);
    let before: Vec<Rect> = c.items().iter().map(|it| it.rect).collect();

    c.engine_mut().set_enabled(false);
    assert_eq!(c.on_scroll(250.0), None);
    assert!(c.updates().is_empty());
    let after: Vec<Rect> = c.items().iter().map(|it| it.rect).collect();
    assert_eq!(before, after);
}
