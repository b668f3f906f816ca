//! Linear RGB color values and sRGB gamma encoding

use crate::io::error::{Result, invalid_parameter};

/// An immutable RGB color with channels in `[0, 1]`
///
/// Channels are stored linearly; gamma encoding happens only at the
/// output boundary via [`srgb_encode`] and [`Color::as_packed_rgb`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

impl Color {
    /// Pure black
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Pure white
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Pure red
    pub const RED: Self = Self {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };

    /// Pure green
    pub const GREEN: Self = Self {
        r: 0.0,
        g: 1.0,
        b: 0.0,
    };

    /// Pure blue
    pub const BLUE: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };

    /// Create a color from its red, green, and blue channels
    ///
    /// # Errors
    ///
    /// Returns an error if any channel is outside `[0, 1]`.
    pub fn new(r: f64, g: f64, b: f64) -> Result<Self> {
        for (name, channel) in [("r", r), ("g", g), ("b", b)] {
            if !(0.0..=1.0).contains(&channel) {
                return Err(invalid_parameter(
                    name,
                    &channel,
                    &"color channels must lie in [0, 1]",
                ));
            }
        }

        Ok(Self { r, g, b })
    }

    /// The red channel
    pub const fn red(&self) -> f64 {
        self.r
    }

    /// The green channel
    pub const fn green(&self) -> f64 {
        self.g
    }

    /// The blue channel
    pub const fn blue(&self) -> f64 {
        self.b
    }

    /// Linearly interpolate toward another color
    ///
    /// `proportion` weights `other`; `1 - proportion` weights `self`, so a
    /// proportion of zero returns `self` and one returns `other`.
    ///
    /// # Errors
    ///
    /// Returns an error if `proportion` is outside `[0, 1]`.
    pub fn mix_with(&self, other: Self, proportion: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&proportion) {
            return Err(invalid_parameter(
                "proportion",
                &proportion,
                &"mixing proportion must lie in [0, 1]",
            ));
        }

        Self::new(
            other.r * proportion + (1.0 - proportion) * self.r,
            other.g * proportion + (1.0 - proportion) * self.g,
            other.b * proportion + (1.0 - proportion) * self.b,
        )
    }

    /// The color as a 24-bit integer `0xRRGGBB` with sRGB-encoded channels
    pub fn as_packed_rgb(&self) -> u32 {
        (srgb_encode(self.r, 255) << 16) | (srgb_encode(self.g, 255) << 8) | srgb_encode(self.b, 255)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Color({:.2}, {:.2}, {:.2})", self.r, self.g, self.b)
    }
}

/// Apply the sRGB transfer function to one linear channel
///
/// Encodes `v` in `[0, 1]` into the integer range `0..=max` using the
/// standard piecewise curve: the linear segment below 0.0031308, the
/// power segment above it, truncated to an integer.
pub fn srgb_encode(v: f64, max: u32) -> u32 {
    let encoded = if v <= 0.003_130_8 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    };

    (f64::from(max) * encoded) as u32
}
