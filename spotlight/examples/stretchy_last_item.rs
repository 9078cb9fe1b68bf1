// Example: a stretchy last item absorbing its predecessor's collapse.
use spotlight::{IndexPath, ItemGeometry, Rect, ScrollFrame, SpotlightEngine, SpotlightOptions};

fn main() {
    let items: Vec<ItemGeometry> = (0..4)
        .map(|row| {
            ItemGeometry::new(
                IndexPath::new(0, row),
                format!("card-{row}"),
                Rect::new(0.0, row as f64 * 100.0, 320.0, 100.0),
            )
        })
        .collect();

    let mut engine = SpotlightEngine::new(
        SpotlightOptions::uniform(20.0)
            .with_last_item_stretchy(true)
            .with_scroll_last_item_to_top(false),
    );
    engine.register_all(&items);

    // Drive the engine by hand and print the updates as a host would consume them.
    let mut updates = Vec::new();
    for offset in [150.0, 200.0, 250.0, 290.0] {
        let mut frame = ScrollFrame::new(offset, 480.0);
        let content_height = engine.recompute_into(&items, &mut frame, &mut updates);
        println!("offset={offset} content_height={content_height:?}");
        for u in &updates {
            println!(
                "  #{} y {:.1} -> {:.1}, h {:.1} -> {:.1}",
                u.index, u.old_rect.y, u.new_rect.y, u.old_rect.height, u.new_rect.height
            );
        }
    }
}
