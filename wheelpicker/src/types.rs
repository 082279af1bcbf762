#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A color in either OKLCH or sRGB form. Operations resolve eagerly through
/// OKLCH so lightness adjustments stay perceptually uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn lighten(self, amount: f32) -> Self {
        let (l, c, h) = self.to_oklch();
        Self::Oklch {
            l: (l + amount).clamp(0.0, 1.0),
            c,
            h,
        }
    }

    pub fn darken(self, amount: f32) -> Self {
        self.lighten(-amount)
    }

    /// Mix toward `other` by `amount` in [0, 1], interpolating L and C
    /// linearly and hue along the shortest arc.
    pub fn mix(self, other: Color, amount: f32) -> Self {
        let t = amount.clamp(0.0, 1.0);
        let (l0, c0, h0) = self.to_oklch();
        let (l1, c1, h1) = other.to_oklch();

        let mut dh = h1 - h0;
        if dh > 180.0 {
            dh -= 360.0;
        } else if dh < -180.0 {
            dh += 360.0;
        }

        Self::Oklch {
            l: l0 + (l1 - l0) * t,
            c: c0 + (c1 - c0) * t,
            h: (h0 + dh * t).rem_euclid(360.0),
        }
    }

    pub fn to_oklch(&self) -> (f32, f32, f32) {
        match self {
            Self::Oklch { l, c, h } => (*l, *c, *h),
            Self::Rgb { r, g, b } => {
                use palette::{IntoColor, Oklch, Srgb};
                let srgb = Srgb::new(
                    *r as f32 / 255.0,
                    *g as f32 / 255.0,
                    *b as f32 / 255.0,
                );
                let oklch: Oklch = srgb.into_color();
                (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
            }
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h } => {
                use palette::{IntoColor, Oklch, Srgb};
                let srgb: Srgb = Oklch::new(*l, *c, *h).into_color();
                let (r, g, b) = srgb.into_format::<u8>().into_components();
                Rgb::new(r, g, b)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }
}

/// Named colors for the wheel. Like bare terminal defaults - dark surface,
/// light text, a slightly raised band behind the selected row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerTheme {
    /// Fill behind the whole wheel.
    pub background: Color,
    /// Band behind the selected (center) row.
    pub selection_band: Color,
    /// Label color at the center row.
    pub foreground: Color,
    /// Label color at the farthest visible rows; rows in between are mixed
    /// toward this by distance from center.
    pub muted: Color,
}

impl PickerTheme {
    pub const fn new() -> Self {
        Self {
            background: Color::oklch(0.15, 0.01, 250.0),
            selection_band: Color::oklch(0.28, 0.02, 250.0),
            foreground: Color::oklch(0.95, 0.0, 0.0),
            muted: Color::oklch(0.45, 0.0, 0.0),
        }
    }
}

impl Default for PickerTheme {
    fn default() -> Self {
        Self::new()
    }
}
