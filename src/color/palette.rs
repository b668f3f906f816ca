//! Palettes mapping a scalar index in `[0, 1]` to a color

use rand::Rng;

use crate::color::value::Color;
use crate::io::error::{Result, invalid_parameter};

/// A mapping from a real index in `[0, 1]` to a color
pub trait Palette {
    /// Look up the color for an index in `[0, 1]`
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is outside `[0, 1]`.
    fn color_for_index(&self, index: f64) -> Result<Color>;
}

/// A palette interpolating linearly between a list of anchor colors
///
/// The anchors are spread evenly over `[0, 1]`; an index between two
/// anchors mixes them by its fractional position.
#[derive(Debug, Clone)]
pub struct InterpolatedPalette {
    colors: Vec<Color>,
}

impl InterpolatedPalette {
    /// Create a palette from its anchor colors
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two colors are given.
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.len() < 2 {
            return Err(invalid_parameter(
                "colors",
                &colors.len(),
                &"palette must contain at least two colors",
            ));
        }

        Ok(Self { colors })
    }
}

impl Palette for InterpolatedPalette {
    fn color_for_index(&self, index: f64) -> Result<Color> {
        if !(0.0..=1.0).contains(&index) {
            return Err(invalid_parameter(
                "index",
                &index,
                &"palette index must lie in [0, 1]",
            ));
        }

        let scaled = index * (self.colors.len() - 1) as f64;
        let out_of_range = || invalid_parameter("index", &index, &"palette index out of range");

        let lower = self
            .colors
            .get(scaled.floor() as usize)
            .copied()
            .ok_or_else(out_of_range)?;
        let upper = self
            .colors
            .get(scaled.ceil() as usize)
            .copied()
            .ok_or_else(out_of_range)?;

        lower.mix_with(upper, scaled.fract())
    }
}

/// An interpolated palette over uniformly random anchor colors
///
/// The random source is injected so callers can seed it for
/// reproducible palettes.
#[derive(Debug, Clone)]
pub struct RandomPalette {
    palette: InterpolatedPalette,
}

impl RandomPalette {
    /// Create a palette of `amount` random colors
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` is less than two.
    pub fn new<R: Rng>(amount: usize, rng: &mut R) -> Result<Self> {
        if amount < 2 {
            return Err(invalid_parameter(
                "amount",
                &amount,
                &"palette must contain at least two colors",
            ));
        }

        let colors = (0..amount)
            .map(|_| Color::new(rng.random(), rng.random(), rng.random()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            palette: InterpolatedPalette::new(colors)?,
        })
    }
}

impl Palette for RandomPalette {
    fn color_for_index(&self, index: f64) -> Result<Color> {
        self.palette.color_for_index(index)
    }
}
