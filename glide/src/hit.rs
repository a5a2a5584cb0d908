use crate::element::{Content, Element};
use crate::layout::LayoutResult;

/// Find the topmost clickable element at the given coordinates.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_filtered(layout, root, x, y, &|el| el.clickable)
}

/// Find the topmost element at the given coordinates, clickable or not.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_filtered(layout, root, x, y, &|_| true)
}

fn hit_test_filtered(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    accepts: &dyn Fn(&Element) -> bool,
) -> Option<String> {
    let rect = layout.get(&element.id)?;
    if !rect.contains(x, y) {
        return None;
    }

    // Later children render on top, so test them first.
    if let Content::Children(children) = &element.content {
        for child in children.iter().rev() {
            if let Some(id) = hit_test_filtered(layout, child, x, y, accepts) {
                return Some(id);
            }
        }
    }

    if accepts(element) {
        return Some(element.id.clone());
    }

    None
}
