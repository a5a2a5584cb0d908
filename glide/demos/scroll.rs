//! Headless scroll walkthrough: builds a scrollable column, feeds it raw
//! mouse-wheel events, and prints the offsets ScrollState tracks.

use std::fs::File;

use crossterm::event::{Event as CrosstermEvent, KeyModifiers, MouseEvent, MouseEventKind};
use simplelog::{Config, LevelFilter, WriteLogger};

use glide::{translate, Element, LayoutResult, Overflow, Rect, ScrollState, ScrollValues, Size};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("scroll-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut scroll = ScrollState::new();

    let root = ui(&scroll);

    // Host-side layout pass, done by hand here: the viewport shows 10 of
    // 40 content rows.
    let mut layout = LayoutResult::new();
    layout.insert("root".into(), Rect::new(0, 0, 40, 12));
    layout.insert("feed".into(), Rect::new(0, 0, 40, 10));
    layout.set_content_size("feed", 40, 40);
    layout.set_viewport_size("feed", 40, 10);

    // Five wheel ticks over the feed.
    for _ in 0..5 {
        let raw = CrosstermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 5,
            row: 5,
            modifiers: KeyModifiers::NONE,
        });
        if let Some(event) = translate(&raw) {
            scroll.process_events(&[event], &root, &layout);
        }
    }

    let values = ScrollValues::capture("feed", &scroll, &layout)
        .expect("layout recorded both sizes");
    println!(
        "feed scrolled to top={} of {} rows ({} visible)",
        values.top, values.content_height, values.viewport_height
    );

    Ok(())
}

fn ui(scroll: &ScrollState) -> Element {
    let offset = scroll.get("feed");

    let rows = (0..40).map(|i| Element::text(format!("row {i}")));

    Element::col()
        .id("root")
        .child(
            Element::col()
                .id("feed")
                .height(Size::Fixed(10))
                .overflow_y(Overflow::Scroll)
                .scrollable(true)
                .scroll_offset(offset.x, offset.y)
                .children(rows),
        )
}
