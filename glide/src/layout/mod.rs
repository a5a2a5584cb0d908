mod rect;

pub use rect::Rect;

use std::collections::HashMap;

use crate::element::{Content, Element};
use crate::text;
use crate::types::{Direction, Size, TextWrap};

/// Computed layout: element id to screen rect, plus recorded content and
/// viewport sizes for scrollable elements. Populated by the host after its
/// layout pass; tests populate it by hand.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
    content_sizes: HashMap<String, (u16, u16)>,
    viewport_sizes: HashMap<String, (u16, u16)>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: String, rect: Rect) {
        self.rects.insert(id, rect);
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }

    /// Record the intrinsic content size of a scrollable element.
    pub fn set_content_size(&mut self, id: impl Into<String>, width: u16, height: u16) {
        self.content_sizes.insert(id.into(), (width, height));
    }

    pub fn content_size(&self, id: &str) -> Option<(u16, u16)> {
        self.content_sizes.get(id).copied()
    }

    /// Record the inner viewport size of a scrollable element.
    pub fn set_viewport_size(&mut self, id: impl Into<String>, width: u16, height: u16) {
        self.viewport_sizes.insert(id.into(), (width, height));
    }

    pub fn viewport_size(&self, id: &str) -> Option<(u16, u16)> {
        self.viewport_sizes.get(id).copied()
    }
}

/// Intrinsic content size of an element tree at the given available width.
///
/// Text obeys the element's wrap mode; rows and columns accumulate children
/// plus gaps; fixed sizes override the measured result on their axis.
pub fn measure(element: &Element, max_width: u16) -> (u16, u16) {
    let (mut width, mut height) = match &element.content {
        Content::None => (0, 0),
        Content::Text(s) => measure_text(s, element.text_wrap, max_width),
        Content::Children(children) => {
            let mut w: u16 = 0;
            let mut h: u16 = 0;
            for (i, child) in children.iter().enumerate() {
                let (cw, ch) = measure(child, max_width);
                match element.direction {
                    Direction::Column => {
                        w = w.max(cw);
                        h = h.saturating_add(ch);
                        if i > 0 {
                            h = h.saturating_add(element.gap);
                        }
                    }
                    Direction::Row => {
                        h = h.max(ch);
                        w = w.saturating_add(cw);
                        if i > 0 {
                            w = w.saturating_add(element.gap);
                        }
                    }
                }
            }
            (w, h)
        }
    };

    if let Size::Fixed(fixed) = element.width {
        width = fixed;
    }
    if let Size::Fixed(fixed) = element.height {
        height = fixed;
    }

    (width, height)
}

fn measure_text(s: &str, wrap: TextWrap, max_width: u16) -> (u16, u16) {
    match wrap {
        TextWrap::Wrap => {
            let lines = text::wrap_words(s, max_width as usize);
            let width = lines
                .iter()
                .map(|l| text::display_width(l))
                .max()
                .unwrap_or(0);
            (width as u16, lines.len() as u16)
        }
        TextWrap::NoWrap | TextWrap::Truncate => {
            let mut width = 0usize;
            let mut height = 0u16;
            for line in s.split('\n') {
                width = width.max(text::display_width(line));
                height += 1;
            }
            if wrap == TextWrap::Truncate {
                width = width.min(max_width as usize);
            }
            (width as u16, height)
        }
    }
}
