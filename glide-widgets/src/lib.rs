//! Presentational widgets built on the `glide` viewport primitives.
//!
//! Two leaf components, neither depending on the other:
//! - [`ScrollRegion`]: a styled scroll container with gradient thumbs,
//!   per-axis locking, auto-hide/auto-size, and normalized callbacks.
//! - [`ListItem`]: a clickable row reporting an opaque value, with three
//!   indicator variants.

pub mod events;
pub mod list_item;
pub mod scroll_region;

pub use events::{ClickHandler, EventResult, ScrollHandler};
pub use list_item::{ItemVariant, ListItem};
pub use scroll_region::{ScrollRegion, ScrollRegionState};
