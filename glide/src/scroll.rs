use std::collections::HashMap;

use crate::element::{Content, Element};
use crate::event::Event;
use crate::layout::{LayoutResult, Rect};
use crate::types::Overflow;

/// Scroll offset for a scrollable element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollOffset {
    pub x: u16,
    pub y: u16,
}

impl ScrollOffset {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// The merged scroll payload delivered to widget callbacks: current
/// position plus the content and viewport dimensions it was computed
/// against. Callers treat it as opaque.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollValues {
    pub top: u16,
    pub left: u16,
    pub content_width: u16,
    pub content_height: u16,
    pub viewport_width: u16,
    pub viewport_height: u16,
}

impl ScrollValues {
    /// Build the payload for a scrollable element from recorded layout.
    /// Returns `None` until the layout pass has recorded both sizes.
    pub fn capture(id: &str, state: &ScrollState, layout: &LayoutResult) -> Option<Self> {
        let (content_width, content_height) = layout.content_size(id)?;
        let (viewport_width, viewport_height) = layout.viewport_size(id)?;
        let offset = state.get(id);
        Some(Self {
            top: offset.y,
            left: offset.x,
            content_width,
            content_height,
            viewport_width,
            viewport_height,
        })
    }

    /// Whether content overflows the viewport horizontally.
    pub fn overflows_x(&self) -> bool {
        self.content_width > self.viewport_width
    }

    /// Whether content overflows the viewport vertically.
    pub fn overflows_y(&self) -> bool {
        self.content_height > self.viewport_height
    }
}

/// Tracks scroll offsets for scrollable elements.
///
/// User-managed state that persists across frames; the element tree is
/// rebuilt each frame and reads its offsets back from here.
#[derive(Debug, Default)]
pub struct ScrollState {
    offsets: HashMap<String, ScrollOffset>,
    /// Content sizes recorded during event processing (id -> (w, h)).
    content_sizes: HashMap<String, (u16, u16)>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the scroll offset for an element.
    pub fn get(&self, id: &str) -> ScrollOffset {
        self.offsets.get(id).copied().unwrap_or_default()
    }

    /// Set the scroll offset for an element.
    pub fn set(&mut self, id: &str, x: u16, y: u16) {
        self.offsets.insert(id.to_string(), ScrollOffset::new(x, y));
    }

    /// Scroll an element by a delta amount.
    /// Returns true if the scroll offset changed.
    pub fn scroll_by(&mut self, id: &str, dx: i16, dy: i16) -> bool {
        let current = self.get(id);
        let new_x = (current.x as i32 + dx as i32).max(0) as u16;
        let new_y = (current.y as i32 + dy as i32).max(0) as u16;

        if new_x != current.x || new_y != current.y {
            self.offsets
                .insert(id.to_string(), ScrollOffset::new(new_x, new_y));
            true
        } else {
            false
        }
    }

    /// Clamp an element's offset to the valid range for the given container
    /// and content sizes. Call after layout so offsets stay in bounds.
    pub fn clamp(&mut self, id: &str, container: Rect, content_width: u16, content_height: u16) {
        let max_x = content_width.saturating_sub(container.width);
        let max_y = content_height.saturating_sub(container.height);

        if let Some(offset) = self.offsets.get_mut(id) {
            offset.x = offset.x.min(max_x);
            offset.y = offset.y.min(max_y);
        }

        self.content_sizes
            .insert(id.to_string(), (content_width, content_height));
    }

    /// Get the content size recorded for a scrollable element.
    pub fn content_size(&self, id: &str) -> Option<(u16, u16)> {
        self.content_sizes.get(id).copied()
    }

    /// Process events and update scroll offsets.
    /// Returns the events that were consumed.
    pub fn process_events(
        &mut self,
        events: &[Event],
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut consumed = Vec::new();

        for event in events {
            let Event::Scroll {
                delta_x,
                delta_y,
                x,
                y,
                ..
            } = event
            else {
                continue;
            };

            let Some(scrollable_id) = find_scrollable_at(root, layout, *x, *y) else {
                continue;
            };
            let Some((content_width, content_height)) = layout.content_size(&scrollable_id) else {
                continue;
            };
            let Some((inner_width, inner_height)) = layout.viewport_size(&scrollable_id) else {
                continue;
            };

            let current = self.get(&scrollable_id);
            let mut new_x = current.x;
            let mut new_y = current.y;

            if *delta_y != 0 && content_height > inner_height {
                let max_y = content_height - inner_height;
                new_y = (current.y as i32 + *delta_y as i32).clamp(0, max_y as i32) as u16;
            }

            if *delta_x != 0 && content_width > inner_width {
                let max_x = content_width - inner_width;
                new_x = (current.x as i32 + *delta_x as i32).clamp(0, max_x as i32) as u16;
            }

            if new_x != current.x || new_y != current.y {
                log::debug!(
                    "[scroll] {scrollable_id}: ({}, {}) -> ({new_x}, {new_y})",
                    current.x,
                    current.y
                );
                self.offsets
                    .insert(scrollable_id.clone(), ScrollOffset::new(new_x, new_y));
                consumed.push(event.clone());
            }

            self.content_sizes
                .insert(scrollable_id, (content_width, content_height));
        }

        consumed
    }
}

/// Find the innermost scrollable element at the given coordinates.
pub fn find_scrollable_at(
    root: &Element,
    layout: &LayoutResult,
    x: u16,
    y: u16,
) -> Option<String> {
    let rect = layout.get(&root.id)?;
    if !rect.contains(x, y) {
        return None;
    }

    // Children first, in reverse paint order, so the innermost wins.
    if let Content::Children(children) = &root.content {
        for child in children.iter().rev() {
            if let Some(id) = find_scrollable_at(child, layout, x, y) {
                return Some(id);
            }
        }
    }

    if is_scrollable(root) {
        return Some(root.id.clone());
    }

    None
}

/// Collect all scrollable element IDs.
pub fn collect_scrollable(element: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_scrollable_recursive(element, &mut result);
    result
}

fn collect_scrollable_recursive(element: &Element, result: &mut Vec<String>) {
    if is_scrollable(element) {
        result.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_scrollable_recursive(child, result);
        }
    }
}

fn is_scrollable(element: &Element) -> bool {
    matches!(element.overflow_x, Overflow::Scroll | Overflow::Auto)
        || matches!(element.overflow_y, Overflow::Scroll | Overflow::Auto)
}
