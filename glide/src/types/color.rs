use palette::{LinSrgba, Mix, Srgba};

/// A color as supplied by callers: plain rgb/rgba, or a base color with
/// derivation ops applied at resolve time.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    Derived { base: Box<Color>, ops: Vec<ColorOp> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColorOp {
    Lighten(f32),
    Darken(f32),
    Alpha(f32),
    Mix(Color, f32),
}

/// A fully resolved color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::Rgba { r, g, b, a }
    }

    pub fn lighten(self, amount: f32) -> Self {
        self.with_op(ColorOp::Lighten(amount))
    }

    pub fn darken(self, amount: f32) -> Self {
        self.with_op(ColorOp::Darken(amount))
    }

    pub fn alpha(self, a: f32) -> Self {
        self.with_op(ColorOp::Alpha(a))
    }

    pub fn mix(self, other: Color, amount: f32) -> Self {
        self.with_op(ColorOp::Mix(other, amount))
    }

    fn with_op(self, op: ColorOp) -> Self {
        match self {
            Self::Derived { base, mut ops } => {
                ops.push(op);
                Self::Derived { base, ops }
            }
            other => Self::Derived {
                base: Box::new(other),
                ops: vec![op],
            },
        }
    }

    /// Render the CSS-style string form of this color.
    pub fn to_dsl(&self) -> String {
        match self {
            Self::Rgb { r, g, b } => format!("rgb({r}, {g}, {b})"),
            Self::Rgba { r, g, b, a } => format!("rgba({r}, {g}, {b}, {a})"),
            Self::Derived { .. } => {
                let Rgba { r, g, b, a } = self.resolve();
                if a >= 1.0 {
                    format!("rgb({r}, {g}, {b})")
                } else {
                    format!("rgba({r}, {g}, {b}, {a})")
                }
            }
        }
    }

    /// Resolve to a concrete rgba value, applying derivation ops.
    pub fn resolve(&self) -> Rgba {
        match self {
            Self::Rgb { r, g, b } => Rgba::new(*r, *g, *b, 1.0),
            Self::Rgba { r, g, b, a } => Rgba::new(*r, *g, *b, *a),
            Self::Derived { base, ops } => {
                let mut current = base.resolve().into_linear();
                for op in ops {
                    current = op.apply(current);
                }
                from_linear(current)
            }
        }
    }
}

impl ColorOp {
    fn apply(&self, color: LinSrgba<f32>) -> LinSrgba<f32> {
        match self {
            Self::Lighten(amount) => {
                let white = LinSrgba::new(1.0, 1.0, 1.0, color.alpha);
                color.mix(white, *amount)
            }
            Self::Darken(amount) => {
                let black = LinSrgba::new(0.0, 0.0, 0.0, color.alpha);
                color.mix(black, *amount)
            }
            Self::Alpha(a) => {
                let mut c = color;
                c.alpha = a.clamp(0.0, 1.0);
                c
            }
            Self::Mix(other, amount) => color.mix(other.resolve().into_linear(), *amount),
        }
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        if c.a >= 1.0 {
            Self::Rgb {
                r: c.r,
                g: c.g,
                b: c.b,
            }
        } else {
            Self::Rgba {
                r: c.r,
                g: c.g,
                b: c.b,
                a: c.a,
            }
        }
    }
}

/// Mix two resolved colors in linear space.
pub(crate) fn mix_rgba(start: Rgba, stop: Rgba, factor: f32) -> Rgba {
    let mixed = start
        .into_linear()
        .mix(stop.into_linear(), factor.clamp(0.0, 1.0));
    from_linear(mixed)
}

impl Rgba {
    fn into_linear(self) -> LinSrgba<f32> {
        Srgba::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a,
        )
        .into_linear()
    }
}

fn from_linear(linear: LinSrgba<f32>) -> Rgba {
    let srgb: Srgba<f32> = Srgba::from_linear(linear);
    Rgba::new(
        (srgb.red * 255.0).round().clamp(0.0, 255.0) as u8,
        (srgb.green * 255.0).round().clamp(0.0, 255.0) as u8,
        (srgb.blue * 255.0).round().clamp(0.0, 255.0) as u8,
        srgb.alpha,
    )
}
