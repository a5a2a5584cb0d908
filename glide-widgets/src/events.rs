//! Dispatch results and shared handler signatures.

use std::sync::Arc;

use glide::ScrollValues;

/// Result of a widget handling an input event.
///
/// `Consumed` stops further dispatch, the equivalent of suppressing the
/// default handling for the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventResult {
    /// Event was not handled by this widget.
    #[default]
    Ignored,
    /// Event was handled; do not propagate further.
    Consumed,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Callback receiving the merged scroll payload plus the previously
/// delivered payload, if any.
pub type ScrollHandler = Arc<dyn Fn(&ScrollValues, Option<&ScrollValues>) + Send + Sync>;

/// Callback receiving the row's associated value on click.
pub type ClickHandler<T> = Arc<dyn Fn(&T) + Send + Sync>;
