use std::sync::{Arc, Mutex};

use glide::{find_by_class, find_element, Color, Content, Overflow, ScrollValues, Size};
use glide_widgets::{ScrollRegion, ScrollRegionState};

fn values(top: u16, left: u16) -> ScrollValues {
    ScrollValues {
        top,
        left,
        content_width: 20,
        content_height: 30,
        viewport_width: 20,
        viewport_height: 10,
    }
}

fn rows(n: usize) -> Vec<glide::Element> {
    (0..n)
        .map(|i| glide::Element::text(format!("row {i}")))
        .collect()
}

// ============================================================================
// Controlled position
// ============================================================================

#[test]
fn test_first_build_adopts_controlled_position() {
    let mut state = ScrollRegionState::new();
    let region = ScrollRegion::new().id("r").scroll_top(5).scroll_left(2);
    region.build(&mut state);

    let position = state.position();
    assert_eq!((position.x, position.y), (2, 5));
}

#[test]
fn test_rebuild_with_unchanged_props_keeps_scrolled_position() {
    let mut state = ScrollRegionState::new();

    let region = ScrollRegion::new().id("r").scroll_top(5).scroll_left(2);
    region.build(&mut state);

    // The user scrolls away from the controlled position.
    region.handle_scroll(&mut state, values(9, 0));
    assert_eq!((state.position().x, state.position().y), (0, 9));

    // Rebuilding with the same props must not snap back.
    let region = ScrollRegion::new().id("r").scroll_top(5).scroll_left(2);
    let markup = region.build(&mut state);
    assert_eq!((state.position().x, state.position().y), (0, 9));

    let content = find_element(&markup, "r--content").unwrap();
    assert_eq!(content.scroll_offset, (0, 9));
}

#[test]
fn test_changed_props_reset_position() {
    let mut state = ScrollRegionState::new();

    ScrollRegion::new().scroll_top(5).scroll_left(2).build(&mut state);
    let region = ScrollRegion::new().scroll_top(5).scroll_left(2);
    region.handle_scroll(&mut state, values(9, 0));

    ScrollRegion::new().scroll_top(7).scroll_left(2).build(&mut state);
    assert_eq!((state.position().x, state.position().y), (2, 7));
}

// ============================================================================
// Callbacks
// ============================================================================

#[test]
fn test_on_scroll_receives_previous_payload() {
    let mut state = ScrollRegionState::new();
    let seen: Arc<Mutex<Vec<(ScrollValues, Option<ScrollValues>)>>> =
        Arc::new(Mutex::new(Vec::new()));

    let seen_clone = Arc::clone(&seen);
    let region = ScrollRegion::new().on_scroll(move |values, previous| {
        seen_clone
            .lock()
            .unwrap()
            .push((*values, previous.copied()));
    });
    region.build(&mut state);

    let result = region.handle_scroll(&mut state, values(3, 0));
    assert!(result.is_consumed());
    region.handle_scroll(&mut state, values(6, 0));

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    // First delivery has nothing to compare against.
    assert_eq!(seen[0], (values(3, 0), None));
    // Second delivery sees the first payload, not the updated state.
    assert_eq!(seen[1], (values(6, 0), Some(values(3, 0))));
}

#[test]
fn test_on_update_leaves_position_untouched() {
    let mut state = ScrollRegionState::new();
    let region = ScrollRegion::new().scroll_top(4);
    region.build(&mut state);

    region.handle_update(&mut state, values(0, 0));
    assert_eq!((state.position().x, state.position().y), (0, 4));
    assert_eq!(state.layout(), Some(&values(0, 0)));
}

#[test]
fn test_update_payload_feeds_next_scroll_previous() {
    let mut state = ScrollRegionState::new();
    let previous_seen: Arc<Mutex<Option<Option<ScrollValues>>>> = Arc::new(Mutex::new(None));

    let previous_clone = Arc::clone(&previous_seen);
    let region = ScrollRegion::new().on_scroll(move |_, previous| {
        *previous_clone.lock().unwrap() = Some(previous.copied());
    });
    region.build(&mut state);

    region.handle_update(&mut state, values(0, 0));
    region.handle_scroll(&mut state, values(2, 0));

    assert_eq!(*previous_seen.lock().unwrap(), Some(Some(values(0, 0))));
}

#[test]
fn test_handle_scroll_without_handler_still_consumes() {
    let mut state = ScrollRegionState::new();
    let region = ScrollRegion::new();
    region.build(&mut state);

    assert!(region.handle_scroll(&mut state, values(1, 0)).is_consumed());
    assert_eq!(state.position().y, 1);
}

// ============================================================================
// Markup
// ============================================================================

#[test]
fn test_root_classes() {
    let mut state = ScrollRegionState::new();
    let markup = ScrollRegion::new()
        .id("menu")
        .auto_hide(true)
        .class("bucket-menu")
        .build(&mut state);

    assert_eq!(markup.id, "menu");
    assert_eq!(
        markup.class_string(),
        "scroll-region scroll-region--autohide bucket-menu"
    );
    assert!(find_element(&markup, "menu--wrapper").is_some());
    assert!(find_by_class(&markup, "scroll-region--content").is_some());
}

#[test]
fn test_default_overflow_is_auto() {
    let mut state = ScrollRegionState::new();
    let markup = ScrollRegion::new().id("r").children(rows(5)).build(&mut state);

    let content = find_element(&markup, "r--content").unwrap();
    assert_eq!(content.overflow_x, Overflow::Auto);
    assert_eq!(content.overflow_y, Overflow::Auto);
    assert!(content.scrollable);
}

#[test]
fn test_no_scroll_hides_both_axes() {
    let mut state = ScrollRegionState::new();
    let markup = ScrollRegion::new()
        .id("r")
        .no_scroll(true)
        .children(rows(5))
        .build(&mut state);

    let content = find_element(&markup, "r--content").unwrap();
    assert_eq!(content.overflow_x, Overflow::Hidden);
    assert_eq!(content.overflow_y, Overflow::Hidden);
    assert!(!content.scrollable);
}

#[test]
fn test_no_scroll_y_hides_only_vertical() {
    let mut state = ScrollRegionState::new();
    let markup = ScrollRegion::new()
        .id("r")
        .no_scroll_y(true)
        .build(&mut state);

    let content = find_element(&markup, "r--content").unwrap();
    assert_eq!(content.overflow_x, Overflow::Auto);
    assert_eq!(content.overflow_y, Overflow::Hidden);
    assert!(content.scrollable);
}

#[test]
fn test_keep_tracks_uses_scroll_overflow() {
    let mut state = ScrollRegionState::new();
    let markup = ScrollRegion::new()
        .id("r")
        .remove_tracks_when_not_used(false)
        .build(&mut state);

    let content = find_element(&markup, "r--content").unwrap();
    assert_eq!(content.overflow_x, Overflow::Scroll);
    assert_eq!(content.overflow_y, Overflow::Scroll);
}

// ============================================================================
// Track visibility
// ============================================================================

#[test]
fn test_tracks_hidden_before_first_layout() {
    let mut state = ScrollRegionState::new();
    let markup = ScrollRegion::new().id("r").children(rows(30)).build(&mut state);

    assert!(find_element(&markup, "r--track-y").is_none());
    assert!(find_element(&markup, "r--track-x").is_none());
}

#[test]
fn test_track_appears_only_on_overflowing_axis() {
    let mut state = ScrollRegionState::new();
    let region = ScrollRegion::new().id("r").children(rows(30));
    region.build(&mut state);

    // 30 content rows against a 10 row viewport; width fits.
    region.handle_update(&mut state, values(0, 0));
    let markup = region.build(&mut state);

    assert!(find_element(&markup, "r--track-y").is_some());
    assert!(find_element(&markup, "r--track-x").is_none());
}

#[test]
fn test_track_removed_when_content_fits() {
    let mut state = ScrollRegionState::new();
    let region = ScrollRegion::new().id("r").children(rows(5));
    region.build(&mut state);

    region.handle_update(
        &mut state,
        ScrollValues {
            content_width: 20,
            content_height: 5,
            viewport_width: 20,
            viewport_height: 10,
            ..Default::default()
        },
    );
    let markup = region.build(&mut state);

    assert!(find_element(&markup, "r--track-y").is_none());
}

#[test]
fn test_keep_tracks_shows_track_before_layout() {
    let mut state = ScrollRegionState::new();
    let markup = ScrollRegion::new()
        .id("r")
        .remove_tracks_when_not_used(false)
        .build(&mut state);

    assert!(find_element(&markup, "r--track-y").is_some());
    assert!(find_element(&markup, "r--track-x").is_some());
}

#[test]
fn test_no_scroll_suppresses_tracks_even_when_kept() {
    let mut state = ScrollRegionState::new();
    let markup = ScrollRegion::new()
        .id("r")
        .no_scroll(true)
        .remove_tracks_when_not_used(false)
        .build(&mut state);

    assert!(find_element(&markup, "r--track-y").is_none());
    assert!(find_element(&markup, "r--track-x").is_none());
}

// ============================================================================
// Thumb geometry and styling
// ============================================================================

#[test]
fn test_thumb_proportional_to_viewport() {
    let mut state = ScrollRegionState::new();
    let region = ScrollRegion::new().id("r").children(rows(30));
    region.build(&mut state);
    region.handle_update(&mut state, values(0, 0));
    let markup = region.build(&mut state);

    let track = find_element(&markup, "r--track-y").unwrap();
    assert_eq!(track.height, Size::Fixed(10));

    // round(10/30 * 10) = 3 cells of thumb
    let thumb = find_element(&markup, "r--thumb-y").unwrap();
    assert_eq!(thumb.height, Size::Fixed(3));
}

#[test]
fn test_thumb_reaches_track_end_at_max_scroll() {
    let mut state = ScrollRegionState::new();
    let region = ScrollRegion::new().id("r").children(rows(30));
    region.build(&mut state);
    // Scrolled to the bottom: top == content - viewport.
    region.handle_scroll(&mut state, values(20, 0));
    let markup = region.build(&mut state);

    let track = find_element(&markup, "r--track-y").unwrap();
    let Content::Children(children) = &track.content else {
        panic!("track has no children");
    };
    // Spacer pushes the 3 cell thumb to the last slot of the 10 cell track.
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].height, Size::Fixed(7));
    assert_eq!(children[1].id, "r--thumb-y");
}

#[test]
fn test_thumb_default_gradient() {
    let mut state = ScrollRegionState::new();
    let region = ScrollRegion::new().id("r").children(rows(30));
    region.build(&mut state);
    region.handle_update(&mut state, values(0, 0));
    let markup = region.build(&mut state);

    let thumb = find_element(&markup, "r--thumb-y").unwrap();
    assert_eq!(
        thumb.get_data("style").map(String::as_str),
        Some(
            "linear-gradient(to bottom, rgba(255, 255, 255, 0.25) 0%, \
             rgba(255, 255, 255, 0.25) 100%)"
        )
    );
}

#[test]
fn test_thumb_custom_gradient() {
    let mut state = ScrollRegionState::new();
    let region = ScrollRegion::new()
        .id("r")
        .thumb_colors(Color::rgb(10, 20, 30), Color::rgb(40, 50, 60))
        .children(rows(30));
    region.build(&mut state);
    region.handle_update(&mut state, values(0, 0));
    let markup = region.build(&mut state);

    let thumb = find_element(&markup, "r--thumb-y").unwrap();
    assert_eq!(
        thumb.get_data("style").map(String::as_str),
        Some("linear-gradient(to bottom, rgb(10, 20, 30) 0%, rgb(40, 50, 60) 100%)")
    );
}

// ============================================================================
// Sizing
// ============================================================================

#[test]
fn test_default_size_fills() {
    let mut state = ScrollRegionState::new();
    let markup = ScrollRegion::new().id("r").children(rows(3)).build(&mut state);
    assert_eq!(markup.width, Size::Fill);
    assert_eq!(markup.height, Size::Fill);
}

#[test]
fn test_auto_size_measures_content() {
    let mut state = ScrollRegionState::new();
    let markup = ScrollRegion::new()
        .id("r")
        .auto_size(true)
        .children(rows(3))
        .build(&mut state);

    // Widest row is "row 0" (5 columns), 3 rows tall.
    assert_eq!(markup.width, Size::Fixed(5));
    assert_eq!(markup.height, Size::Fixed(3));
}

#[test]
fn test_auto_size_height_leaves_width_filling() {
    let mut state = ScrollRegionState::new();
    let markup = ScrollRegion::new()
        .id("r")
        .auto_size_height(true)
        .children(rows(3))
        .build(&mut state);

    assert_eq!(markup.width, Size::Fill);
    assert_eq!(markup.height, Size::Fixed(3));
}
