//! Event handling for the ScrollRegion widget.

use glide::ScrollValues;

use super::{ScrollRegion, ScrollRegionState};
use crate::events::EventResult;

impl ScrollRegion {
    /// Handle a scroll event from the wrapped container.
    ///
    /// The caller's `on_scroll` fires first, with the payload that
    /// triggered the update and the previously delivered payload; the
    /// internal position then adopts the event's reported position.
    pub fn handle_scroll(&self, state: &mut ScrollRegionState, values: ScrollValues) -> EventResult {
        log::trace!(
            "[scroll-region] scroll top={} left={}",
            values.top,
            values.left
        );
        if let Some(on_scroll) = &self.on_scroll {
            on_scroll(&values, state.previous());
        }
        state.record_scroll(values);
        EventResult::Consumed
    }

    /// Handle a layout recomputation report from the wrapped container.
    ///
    /// Fires `on_update` with the same payload shape; the internal
    /// position is left untouched.
    pub fn handle_update(&self, state: &mut ScrollRegionState, values: ScrollValues) {
        log::trace!(
            "[scroll-region] update content={}x{} viewport={}x{}",
            values.content_width,
            values.content_height,
            values.viewport_width,
            values.viewport_height
        );
        if let Some(on_update) = &self.on_update {
            on_update(&values, state.previous());
        }
        state.record_update(values);
    }
}
