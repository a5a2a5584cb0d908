//! Track and thumb markup for the ScrollRegion widget.

use glide::{Axis, Element, Gradient, ScrollValues, Size, Style};

const THUMB_CELL: &str = "█";

/// Build a track element with its gradient thumb for one axis.
///
/// Thumb size is proportional to the viewport/content ratio, its position
/// to the scroll progress. With no recorded layout the track renders with
/// an empty thumb; geometry fills in after the first update.
pub(crate) fn build_track(
    region_id: &str,
    axis: Axis,
    gradient: &Gradient,
    values: Option<&ScrollValues>,
) -> Element {
    let values = values.copied().unwrap_or_default();

    let (track_size, content_size, offset) = match axis {
        Axis::Horizontal => (values.viewport_width, values.content_width, values.left),
        Axis::Vertical => (values.viewport_height, values.content_height, values.top),
    };

    let thumb_size = if content_size == 0 {
        track_size
    } else {
        let ratio = track_size as f32 / content_size as f32;
        ((ratio * track_size as f32).round() as u16).clamp(1, track_size.max(1))
    };

    let max_offset = content_size.saturating_sub(track_size);
    let thumb_pos = if max_offset == 0 {
        0
    } else {
        let progress = offset as f32 / max_offset as f32;
        let available = track_size.saturating_sub(thumb_size);
        (progress * available as f32).round() as u16
    };

    match axis {
        Axis::Horizontal => build_horizontal(region_id, gradient, track_size, thumb_size, thumb_pos),
        Axis::Vertical => build_vertical(region_id, gradient, track_size, thumb_size, thumb_pos),
    }
}

fn build_vertical(
    region_id: &str,
    gradient: &Gradient,
    track_size: u16,
    thumb_size: u16,
    thumb_pos: u16,
) -> Element {
    let thumb = Element::col()
        .id(format!("{region_id}--thumb-y"))
        .class("scroll-region--thumb-y")
        .width(Size::Fixed(1))
        .height(Size::Fixed(thumb_size))
        .data("style", gradient.to_dsl())
        .children(thumb_cells(gradient, thumb_size));

    let mut track = Element::col()
        .id(format!("{region_id}--track-y"))
        .class("scroll-region--track-y")
        .width(Size::Fixed(1))
        .height(Size::Fixed(track_size));

    if thumb_pos > 0 {
        track = track.child(Element::box_().height(Size::Fixed(thumb_pos)));
    }
    track.child(thumb)
}

fn build_horizontal(
    region_id: &str,
    gradient: &Gradient,
    track_size: u16,
    thumb_size: u16,
    thumb_pos: u16,
) -> Element {
    let thumb = Element::row()
        .id(format!("{region_id}--thumb-x"))
        .class("scroll-region--thumb-x")
        .width(Size::Fixed(thumb_size))
        .height(Size::Fixed(1))
        .data("style", gradient.to_dsl())
        .children(thumb_cells(gradient, thumb_size));

    let mut track = Element::row()
        .id(format!("{region_id}--track-x"))
        .class("scroll-region--track-x")
        .width(Size::Fixed(track_size))
        .height(Size::Fixed(1));

    if thumb_pos > 0 {
        track = track.child(Element::box_().width(Size::Fixed(thumb_pos)));
    }
    track.child(thumb)
}

fn thumb_cells(gradient: &Gradient, thumb_size: u16) -> Vec<Element> {
    (0..thumb_size)
        .map(|i| {
            let t = if thumb_size <= 1 {
                0.0
            } else {
                i as f32 / (thumb_size - 1) as f32
            };
            let color = gradient.sample(t);
            Element::text(THUMB_CELL).style(Style::new().foreground(color.into()))
        })
        .collect()
}
