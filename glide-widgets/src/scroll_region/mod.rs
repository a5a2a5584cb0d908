//! ScrollRegion: a styled scroll container wrapping the glide viewport
//! primitive, normalizing its callbacks into a stable shape.
//!
//! The widget is rebuilt each frame; [`ScrollRegionState`] carries the
//! scroll position across builds. Controlled `scroll_top`/`scroll_left`
//! props re-synchronize the position whenever they change; in between,
//! scroll events own it.
//!
//! # Example
//!
//! ```ignore
//! let mut state = ScrollRegionState::new();
//!
//! let region = ScrollRegion::new()
//!     .id("sidebar")
//!     .auto_hide(true)
//!     .thumb_colors(Color::rgba(0, 128, 255, 0.6), Color::rgba(0, 64, 128, 0.6))
//!     .on_scroll(|values, _prev| log::debug!("top={}", values.top))
//!     .children(rows);
//!
//! let markup = region.build(&mut state);
//! ```

mod events;
mod render;
mod state;

pub use state::ScrollRegionState;

use glide::{measure, Axis, Color, Element, Gradient, Overflow, Size};

use crate::events::ScrollHandler;

fn default_thumb_color() -> Color {
    Color::rgba(255, 255, 255, 0.25)
}

/// Builder for the scroll region widget. All props have safe defaults.
pub struct ScrollRegion {
    id: Option<String>,
    class: Option<String>,
    remove_tracks_when_not_used: bool,
    remove_track_x_when_not_used: bool,
    remove_track_y_when_not_used: bool,
    no_scroll: bool,
    no_scroll_x: bool,
    no_scroll_y: bool,
    auto_hide: bool,
    auto_size: bool,
    auto_size_width: bool,
    auto_size_height: bool,
    scroll_top: u16,
    scroll_left: u16,
    thumb_start_color: Color,
    thumb_stop_color: Color,
    pub(crate) on_scroll: Option<ScrollHandler>,
    pub(crate) on_update: Option<ScrollHandler>,
    children: Vec<Element>,
}

impl Default for ScrollRegion {
    fn default() -> Self {
        Self {
            id: None,
            class: None,
            remove_tracks_when_not_used: true,
            remove_track_x_when_not_used: true,
            remove_track_y_when_not_used: true,
            no_scroll: false,
            no_scroll_x: false,
            no_scroll_y: false,
            auto_hide: false,
            auto_size: false,
            auto_size_width: false,
            auto_size_height: false,
            scroll_top: 0,
            scroll_left: 0,
            thumb_start_color: default_thumb_color(),
            thumb_stop_color: default_thumb_color(),
            on_scroll: None,
            on_update: None,
            children: Vec::new(),
        }
    }
}

impl ScrollRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Extra class appended to the computed class list.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Remove both tracks when no scrolling is necessary.
    pub fn remove_tracks_when_not_used(mut self, remove: bool) -> Self {
        self.remove_tracks_when_not_used = remove;
        self
    }

    /// Remove the horizontal track when no scrolling is necessary.
    pub fn remove_track_x_when_not_used(mut self, remove: bool) -> Self {
        self.remove_track_x_when_not_used = remove;
        self
    }

    /// Remove the vertical track when no scrolling is necessary.
    pub fn remove_track_y_when_not_used(mut self, remove: bool) -> Self {
        self.remove_track_y_when_not_used = remove;
        self
    }

    /// Disable scrolling entirely.
    pub fn no_scroll(mut self, no_scroll: bool) -> Self {
        self.no_scroll = no_scroll;
        self
    }

    /// Disable horizontal scrolling.
    pub fn no_scroll_x(mut self, no_scroll: bool) -> Self {
        self.no_scroll_x = no_scroll;
        self
    }

    /// Disable vertical scrolling.
    pub fn no_scroll_y(mut self, no_scroll: bool) -> Self {
        self.no_scroll_y = no_scroll;
        self
    }

    /// Hide the scrollbar when not actively scrolling.
    pub fn auto_hide(mut self, auto_hide: bool) -> Self {
        self.auto_hide = auto_hide;
        self
    }

    /// Grow to fit the content width and height.
    pub fn auto_size(mut self, auto_size: bool) -> Self {
        self.auto_size = auto_size;
        self
    }

    /// Grow to fit the content width.
    pub fn auto_size_width(mut self, auto_size: bool) -> Self {
        self.auto_size_width = auto_size;
        self
    }

    /// Grow to fit the content height.
    pub fn auto_size_height(mut self, auto_size: bool) -> Self {
        self.auto_size_height = auto_size;
        self
    }

    /// Controlled vertical scroll position.
    pub fn scroll_top(mut self, top: u16) -> Self {
        self.scroll_top = top;
        self
    }

    /// Controlled horizontal scroll position.
    pub fn scroll_left(mut self, left: u16) -> Self {
        self.scroll_left = left;
        self
    }

    /// Gradient start color for both thumbs.
    pub fn thumb_start_color(mut self, color: Color) -> Self {
        self.thumb_start_color = color;
        self
    }

    /// Gradient stop color for both thumbs.
    pub fn thumb_stop_color(mut self, color: Color) -> Self {
        self.thumb_stop_color = color;
        self
    }

    /// Both gradient endpoints at once.
    pub fn thumb_colors(mut self, start: Color, stop: Color) -> Self {
        self.thumb_start_color = start;
        self.thumb_stop_color = stop;
        self
    }

    /// Called on every scroll event, before the internal position updates.
    pub fn on_scroll<F>(mut self, handler: F) -> Self
    where
        F: Fn(&glide::ScrollValues, Option<&glide::ScrollValues>) + Send + Sync + 'static,
    {
        self.on_scroll = Some(std::sync::Arc::new(handler));
        self
    }

    /// Called whenever the scroll container recomputes layout.
    pub fn on_update<F>(mut self, handler: F) -> Self
    where
        F: Fn(&glide::ScrollValues, Option<&glide::ScrollValues>) + Send + Sync + 'static,
    {
        self.on_update = Some(std::sync::Arc::new(handler));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    fn x_disabled(&self) -> bool {
        self.no_scroll || self.no_scroll_x
    }

    fn y_disabled(&self) -> bool {
        self.no_scroll || self.no_scroll_y
    }

    fn remove_track_x(&self) -> bool {
        self.remove_tracks_when_not_used && self.remove_track_x_when_not_used
    }

    fn remove_track_y(&self) -> bool {
        self.remove_tracks_when_not_used && self.remove_track_y_when_not_used
    }

    /// Build the markup for this frame.
    ///
    /// Re-synchronizes the state position from the controlled props when
    /// they changed since the previous build.
    pub fn build(&self, state: &mut ScrollRegionState) -> Element {
        state.sync_controlled(self.scroll_top, self.scroll_left);
        let position = state.position();

        let region_id = self.id.clone().unwrap_or_else(|| "scroll-region".into());

        let mut classes = vec!["scroll-region".to_string()];
        if self.auto_hide {
            classes.push("scroll-region--autohide".to_string());
        }
        if let Some(class) = &self.class {
            classes.push(class.clone());
        }

        let content = Element::col()
            .id(format!("{region_id}--content"))
            .class("scroll-region--content")
            .overflow_x(axis_overflow(self.x_disabled(), self.remove_track_x()))
            .overflow_y(axis_overflow(self.y_disabled(), self.remove_track_y()))
            .scrollable(!(self.x_disabled() && self.y_disabled()))
            .scroll_offset(position.x, position.y)
            .children(self.children.clone());

        let (width, height) = self.region_size(&content);

        let wrapper = Element::box_()
            .id(format!("{region_id}--wrapper"))
            .class("scroll-region--wrapper")
            .child(content);

        let mut root = Element::box_()
            .id(region_id.clone())
            .classes(classes)
            .width(width)
            .height(height)
            .child(wrapper);

        if self.show_track(self.x_disabled(), self.remove_track_x(), state, Axis::Horizontal) {
            let gradient = Gradient::horizontal(
                self.thumb_start_color.clone(),
                self.thumb_stop_color.clone(),
            );
            root = root.child(render::build_track(
                &region_id,
                Axis::Horizontal,
                &gradient,
                state.layout(),
            ));
        }

        if self.show_track(self.y_disabled(), self.remove_track_y(), state, Axis::Vertical) {
            let gradient = Gradient::vertical(
                self.thumb_start_color.clone(),
                self.thumb_stop_color.clone(),
            );
            root = root.child(render::build_track(
                &region_id,
                Axis::Vertical,
                &gradient,
                state.layout(),
            ));
        }

        root
    }

    fn show_track(
        &self,
        disabled: bool,
        remove_when_unused: bool,
        state: &ScrollRegionState,
        axis: Axis,
    ) -> bool {
        if disabled {
            return false;
        }
        if !remove_when_unused {
            return true;
        }
        // Removal-when-unused defers to the container's reported overflow;
        // until the first layout report the track stays hidden.
        match state.layout() {
            Some(values) => match axis {
                Axis::Horizontal => values.overflows_x(),
                Axis::Vertical => values.overflows_y(),
            },
            None => false,
        }
    }

    fn region_size(&self, content: &Element) -> (Size, Size) {
        if !(self.auto_size || self.auto_size_width || self.auto_size_height) {
            return (Size::Fill, Size::Fill);
        }
        let (content_width, content_height) = measure(content, u16::MAX);
        let width = if self.auto_size || self.auto_size_width {
            Size::Fixed(content_width)
        } else {
            Size::Fill
        };
        let height = if self.auto_size || self.auto_size_height {
            Size::Fixed(content_height)
        } else {
            Size::Fill
        };
        (width, height)
    }
}

fn axis_overflow(disabled: bool, remove_when_unused: bool) -> Overflow {
    if disabled {
        Overflow::Hidden
    } else if remove_when_unused {
        Overflow::Auto
    } else {
        Overflow::Scroll
    }
}
