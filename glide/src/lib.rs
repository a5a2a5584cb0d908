pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod scroll;
pub mod text;
pub mod types;

pub use element::{collect_by_class, find_by_class, find_element, Content, Element};
pub use event::{translate, Event, Key, Modifiers, MouseButton};
pub use hit::{hit_test, hit_test_any};
pub use layout::{measure, LayoutResult, Rect};
pub use scroll::{collect_scrollable, ScrollOffset, ScrollState, ScrollValues};
pub use types::*;
