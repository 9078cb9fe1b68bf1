use spotlight::{IndexPath, ItemGeometry, Rect, SpotlightOptions};
use spotlight_adapter::Controller;

fn main() {
    // Example: feed scroll events to the controller and jump to a row.
    //
    // A UI layer would copy `items()` (or only the rows listed in `updates()`) to its cells.
    let items = (0..10)
        .map(|row| {
            ItemGeometry::new(
                IndexPath::new(0, row),
                format!("row-{row}"),
                Rect::new(0.0, row as f64 * 90.0, 375.0, 90.0),
            )
        })
        .collect();

    let mut c = Controller::new(SpotlightOptions::uniform(24.0));
    c.on_insets(44.0, 0.0);
    c.on_viewport_height(667.0);
    c.set_items(items);

    // A drag that starts with a small bounce past the top.
    for content_offset_y in [-64.0, -44.0, 0.0, 30.0, 75.0, 140.0] {
        if let Some(summary) = c.on_scroll(content_offset_y) {
            println!(
                "offset={content_offset_y:>6.1} spotlight={} changed={}",
                summary.spotlight_index,
                c.updates().len()
            );
        }
    }

    if let Some(offset) = c.scroll_to_item(6) {
        println!(
            "scroll_to_item(6): offset={offset} spotlight={:?} bounds={:?}",
            c.engine().spotlight_item(),
            c.content_offset_bounds()
        );
    }
}
