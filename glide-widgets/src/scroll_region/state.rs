//! Persistent state for the ScrollRegion widget.

use glide::{ScrollOffset, ScrollValues};

/// Scroll position owned by a ScrollRegion across frames.
///
/// The position is overwritten the moment the controlled props change, but
/// scroll-driven updates between prop changes survive rebuilds, so a
/// re-render never snaps the viewport back.
#[derive(Debug, Clone, Default)]
pub struct ScrollRegionState {
    position: ScrollOffset,
    /// Controlled (top, left) pair seen at the last build.
    controlled: Option<(u16, u16)>,
    /// Last payload delivered through either callback channel.
    previous: Option<ScrollValues>,
    /// Dimensions most recently reported by the scroll container.
    layout: Option<ScrollValues>,
}

impl ScrollRegionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current internal scroll position.
    pub fn position(&self) -> ScrollOffset {
        self.position
    }

    /// The previously delivered payload, if any.
    pub fn previous(&self) -> Option<&ScrollValues> {
        self.previous.as_ref()
    }

    /// The most recent dimensions reported by the scroll container.
    pub fn layout(&self) -> Option<&ScrollValues> {
        self.layout.as_ref()
    }

    /// Re-synchronize the position from the controlled props.
    ///
    /// Resets only when the pair differs from the one seen at the previous
    /// build. Returns true when a reset happened.
    pub(crate) fn sync_controlled(&mut self, top: u16, left: u16) -> bool {
        if self.controlled == Some((top, left)) {
            return false;
        }
        log::debug!(
            "[scroll-region] controlled position ({}, {}) -> ({top}, {left})",
            self.position.y,
            self.position.x
        );
        self.controlled = Some((top, left));
        self.position = ScrollOffset::new(left, top);
        true
    }

    /// Record a scroll event: adopt its position and remember the payload.
    pub(crate) fn record_scroll(&mut self, values: ScrollValues) {
        self.position = ScrollOffset::new(values.left, values.top);
        self.layout = Some(values);
        self.previous = Some(values);
    }

    /// Record a layout update: remember the payload, leave position alone.
    pub(crate) fn record_update(&mut self, values: ScrollValues) {
        self.layout = Some(values);
        self.previous = Some(values);
    }
}
