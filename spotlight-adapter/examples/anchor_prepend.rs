use spotlight::{IndexPath, ItemGeometry, Rect, SpotlightOptions};
use spotlight_adapter::Controller;

fn feed(ids: &[u32]) -> Vec<ItemGeometry> {
    ids.iter()
        .enumerate()
        .map(|(row, id)| {
            ItemGeometry::new(
                IndexPath::new(0, row),
                format!("post-{id}"),
                Rect::new(0.0, row as f64 * 120.0, 375.0, 120.0),
            )
        })
        .collect()
}

fn main() {
    // Example: keep the spotlighted post in place while newer posts are inserted above it.
    let mut c = Controller::new(SpotlightOptions::uniform(40.0));
    c.on_viewport_height(667.0);
    c.set_items(feed(&[10, 11, 12, 13, 14]));
    c.on_scroll(300.0);

    println!(
        "before: offset={} anchor={:?}",
        c.frame().content_offset_y,
        c.capture_spotlight_anchor()
    );

    let ok = c.replace_items_anchored(feed(&[7, 8, 9, 10, 11, 12, 13, 14]));
    println!(
        "after: ok={ok} offset={} anchor={:?}",
        c.frame().content_offset_y,
        c.capture_spotlight_anchor()
    );
}
