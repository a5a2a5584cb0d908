use super::color::{mix_rgba, Color, Rgba};

/// Orientation of a linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    Horizontal,
    #[default]
    Vertical,
}

impl Axis {
    fn to_dsl(self) -> &'static str {
        match self {
            Self::Horizontal => "to right",
            Self::Vertical => "to bottom",
        }
    }
}

/// A two-color linear gradient.
///
/// The DSL form preserves the caller's exact color strings; `sample`
/// interpolates between the resolved endpoints for cell-by-cell painting.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    start: Color,
    stop: Color,
    axis: Axis,
}

impl Gradient {
    pub fn new(start: Color, stop: Color, axis: Axis) -> Self {
        Self { start, stop, axis }
    }

    pub fn horizontal(start: Color, stop: Color) -> Self {
        Self::new(start, stop, Axis::Horizontal)
    }

    pub fn vertical(start: Color, stop: Color) -> Self {
        Self::new(start, stop, Axis::Vertical)
    }

    pub fn start(&self) -> &Color {
        &self.start
    }

    pub fn stop(&self) -> &Color {
        &self.stop
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Render the CSS-style string form of this gradient.
    pub fn to_dsl(&self) -> String {
        format!(
            "linear-gradient({}, {} 0%, {} 100%)",
            self.axis.to_dsl(),
            self.start.to_dsl(),
            self.stop.to_dsl()
        )
    }

    /// Color at position `t` along the gradient, with `t` clamped to 0..=1.
    pub fn sample(&self, t: f32) -> Rgba {
        mix_rgba(self.start.resolve(), self.stop.resolve(), t)
    }
}
