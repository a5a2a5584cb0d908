use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind,
};
use glide::{
    find_by_class, find_element, hit_test, hit_test_any, translate, Element, Event, Key,
    LayoutResult, MouseButton, Rect,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_point_inside() {
    let root = Element::box_()
        .id("root")
        .clickable(true)
        .child(Element::text("Click me").id("btn").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("btn", Rect::new(10, 10, 30, 3)),
    ]);

    // Click inside btn
    assert_eq!(hit_test(&layout, &root, 15, 11), Some("btn".to_string()));

    // Click inside root but outside btn
    assert_eq!(hit_test(&layout, &root, 5, 5), Some("root".to_string()));

    // Click outside everything
    assert_eq!(hit_test(&layout, &root, 150, 150), None);
}

#[test]
fn test_hit_test_overlapping_elements() {
    // Later children should be "on top"
    let root = Element::box_()
        .id("root")
        .child(Element::box_().id("bottom").clickable(true))
        .child(Element::box_().id("top").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 100)),
        ("bottom", Rect::new(10, 10, 50, 50)),
        ("top", Rect::new(30, 30, 50, 50)),
    ]);

    assert_eq!(hit_test(&layout, &root, 40, 40), Some("top".to_string()));
    assert_eq!(hit_test(&layout, &root, 15, 15), Some("bottom".to_string()));
}

#[test]
fn test_hit_test_only_clickable() {
    let root = Element::box_()
        .id("root")
        .child(Element::text("Not clickable").id("text"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("text", Rect::new(10, 10, 30, 3)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 11), None);
}

#[test]
fn test_hit_test_any() {
    let root = Element::box_()
        .id("root")
        .child(Element::text("Not clickable").id("text"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("text", Rect::new(10, 10, 30, 3)),
    ]);

    assert_eq!(
        hit_test_any(&layout, &root, 15, 11),
        Some("text".to_string())
    );
}

// ============================================================================
// Tree lookup
// ============================================================================

#[test]
fn test_find_element_nested() {
    let root = Element::box_()
        .id("root")
        .child(Element::box_().id("a").child(Element::text("x").id("a1")));

    assert!(find_element(&root, "a1").is_some());
    assert!(find_element(&root, "nope").is_none());
}

#[test]
fn test_find_by_class() {
    let root = Element::box_()
        .id("root")
        .child(Element::box_().class("menu").child(Element::text("x").class("menu--item")));

    assert!(find_by_class(&root, "menu--item").is_some());
    assert!(find_by_class(&root, "missing").is_none());
}

// ============================================================================
// Raw event translation
// ============================================================================

#[test]
fn test_translate_key_press() {
    let raw = CrosstermEvent::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
    let event = translate(&raw).expect("key press translates");
    match event {
        Event::Key { key, modifiers, .. } => {
            assert_eq!(key, Key::Char('q'));
            assert!(modifiers.none());
        }
        other => panic!("expected key event, got {other:?}"),
    }
}

#[test]
fn test_translate_unmapped_key_dropped() {
    let raw = CrosstermEvent::Key(KeyEvent::new(KeyCode::CapsLock, KeyModifiers::NONE));
    assert_eq!(translate(&raw), None);
}

#[test]
fn test_translate_click() {
    let raw = CrosstermEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(crossterm::event::MouseButton::Left),
        column: 7,
        row: 3,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(
        translate(&raw),
        Some(Event::Click {
            target: None,
            x: 7,
            y: 3,
            button: MouseButton::Left,
        })
    );
}

#[test]
fn test_translate_scroll_wheel() {
    let raw = CrosstermEvent::Mouse(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 1,
        row: 2,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(
        translate(&raw),
        Some(Event::Scroll {
            target: None,
            x: 1,
            y: 2,
            delta_x: 0,
            delta_y: 1,
        })
    );

    let raw = CrosstermEvent::Mouse(MouseEvent {
        kind: MouseEventKind::ScrollLeft,
        column: 1,
        row: 2,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(
        translate(&raw),
        Some(Event::Scroll {
            target: None,
            x: 1,
            y: 2,
            delta_x: -1,
            delta_y: 0,
        })
    );
}

#[test]
fn test_translate_resize() {
    let raw = CrosstermEvent::Resize(80, 24);
    assert_eq!(
        translate(&raw),
        Some(Event::Resize {
            width: 80,
            height: 24
        })
    );
}
