//! Color representation and palette lookup
//!
//! This module contains the color-mapping math:
//! - Linear RGB color values with sRGB gamma encoding
//! - Palettes mapping a scalar index in `[0, 1]` to a color

/// Palettes mapping a scalar index to a color
pub mod palette;
/// Linear RGB color values and sRGB encoding
pub mod value;

pub use palette::{InterpolatedPalette, Palette, RandomPalette};
pub use value::{Color, srgb_encode};
