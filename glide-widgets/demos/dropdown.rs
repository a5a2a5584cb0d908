//! Headless dropdown walkthrough: a scroll region full of selectable rows,
//! driven by synthetic events.

use std::fs::File;
use std::sync::{Arc, Mutex};

use simplelog::{Config, LevelFilter, WriteLogger};

use glide::{hit_test, Color, Element, LayoutResult, Rect, ScrollValues};
use glide_widgets::{ItemVariant, ListItem, ScrollRegion, ScrollRegionState};

const BUCKETS: [&str; 6] = [
    "telegraf",
    "website-metrics",
    "sensor-fleet",
    "build-stats",
    "edge-gateways",
    "retention-audit",
];

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("dropdown-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let picked = Arc::new(Mutex::new(None::<String>));

    let items: Vec<ListItem<String>> = BUCKETS
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let picked = Arc::clone(&picked);
            ListItem::new(name.to_string())
                .id(format!("bucket-{i}"))
                .variant(ItemVariant::Dot)
                .selected(i == 0)
                .on_click(move |value: &String| {
                    *picked.lock().unwrap() = Some(value.clone());
                })
                .child(Element::text(*name))
        })
        .collect();

    let mut state = ScrollRegionState::new();
    let region = ScrollRegion::new()
        .id("bucket-menu")
        .auto_hide(true)
        .thumb_colors(
            Color::rgba(0, 128, 255, 0.6),
            Color::rgba(0, 64, 128, 0.6),
        )
        .on_scroll(|values, _prev| log::debug!("menu scrolled to {}", values.top))
        .children(items.iter().map(|item| item.build()));

    // The container reports its first layout: 6 rows behind a 4-row viewport.
    region.handle_update(
        &mut state,
        ScrollValues {
            top: 0,
            left: 0,
            content_width: 24,
            content_height: 6,
            viewport_width: 24,
            viewport_height: 4,
        },
    );

    let markup = region.build(&mut state);
    println!("menu class: {}", markup.class_string());

    // Host layout pass, by hand: each visible row is one cell tall.
    let mut layout = LayoutResult::new();
    layout.insert("bucket-menu".into(), Rect::new(0, 0, 25, 4));
    layout.insert("bucket-menu--wrapper".into(), Rect::new(0, 0, 24, 4));
    layout.insert("bucket-menu--content".into(), Rect::new(0, 0, 24, 4));
    for i in 0..4u16 {
        layout.insert(format!("bucket-{i}"), Rect::new(0, i, 24, 1));
    }

    // Click the third row.
    if let Some(target) = hit_test(&layout, &markup, 3, 2) {
        if let Some(item) = items
            .iter()
            .enumerate()
            .find_map(|(i, item)| (target == format!("bucket-{i}")).then_some(item))
        {
            item.handle_click();
        }
    }

    println!("picked: {:?}", picked.lock().unwrap().clone());
    Ok(())
}
