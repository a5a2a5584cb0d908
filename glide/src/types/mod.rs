mod color;
mod enums;
mod gradient;
mod style;

pub use color::{Color, ColorOp, Rgba};
pub use enums::{Direction, Overflow, Size, TextStyle, TextWrap};
pub use gradient::{Axis, Gradient};
pub use style::Style;
