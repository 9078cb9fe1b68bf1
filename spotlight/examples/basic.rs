use spotlight::{IndexPath, ItemGeometry, Rect, ScrollFrame, SpotlightEngine, SpotlightOptions};

fn main() {
    // Five 120pt rows, 8pt apart. Every row collapses to 32pt once scrolled past.
    let mut items: Vec<ItemGeometry> = (0..5)
        .map(|row| {
            let y = row as f64 * 128.0;
            ItemGeometry::new(
                IndexPath::new(0, row),
                format!("row-{row}"),
                Rect::new(0.0, y, 375.0, 120.0),
            )
        })
        .collect();

    let mut engine = SpotlightEngine::new(
        SpotlightOptions::uniform(32.0).with_uniform_section_inset(8.0),
    );

    for offset in [-20.0, 0.0, 64.0, 128.0, 200.0, 400.0] {
        // A host rebuilds its geometry every pass; `layout` registers, recomputes and applies.
        for item in &mut items {
            item.reset_rect();
        }
        let mut frame = ScrollFrame::new(offset, 667.0);
        let Some(summary) = engine.layout(&mut items, &mut frame) else {
            continue;
        };

        println!(
            "offset={offset} spotlight={} content_height={}",
            summary.spotlight_index, summary.content_height
        );
        for item in &items {
            println!("  {} y={:.1} h={:.1}", item.identifier, item.rect.y, item.rect.height);
        }
    }
}
