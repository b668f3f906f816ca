//! The flame fractal and its chaos-game computation
//!
//! A flame is an ordered list of transformations. The chaos game walks a
//! running point through randomly chosen transformations and accumulates
//! every landing position, together with a running color index, into a
//! density grid.

use rand::Rng;

use crate::flame::accumulator::{FlameAccumulator, FlameAccumulatorBuilder};
use crate::flame::transformation::{FlameTransformation, FlameTransformationBuilder};
use crate::flame::variation::Variation;
use crate::geometry::{AffineTransformation, Point, Rectangle};
use crate::io::error::{RenderError, Result};

/// Unplotted iterations performed before any point is accumulated, so the
/// running point reaches the attractor before a pixel is touched
const BURN_IN_ITERATIONS: usize = 20;

/// The color index assigned to the transformation at position `n`
///
/// A van-der-Corput-style bit-reversal sequence: `0 → 0`, `1 → 1`, and
/// for `n ≥ 2` the value `-1 + 2^(-ceil(log2 n)) · (2n - 1)`. Successive
/// positions land far apart in `[0, 1]`, so colors stay spread evenly no
/// matter how many transformations a flame has.
pub fn transform_color_index(n: usize) -> f64 {
    match n {
        0 => 0.0,
        1 => 1.0,
        _ => {
            let exponent = (n as f64).log2().ceil() as i32;
            2f64.powi(-exponent).mul_add(2.0 * n as f64 - 1.0, -1.0)
        }
    }
}

/// A flame fractal: an ordered list of flame transformations
///
/// The order is irrelevant to the fractal's shape (transformations are
/// chosen uniformly at random) but determines each transformation's
/// color index, so reordering recolors the fractal.
#[derive(Debug, Clone, PartialEq)]
pub struct Flame {
    transformations: Vec<FlameTransformation>,
}

impl Flame {
    /// Create a flame from its transformations
    pub const fn new(transformations: Vec<FlameTransformation>) -> Self {
        Self { transformations }
    }

    /// The number of transformations in the flame
    pub fn transformation_count(&self) -> usize {
        self.transformations.len()
    }

    /// Compute the fractal over the given viewport into a fresh accumulator
    ///
    /// Plots `density · width · height` points using the chaos game and
    /// freezes the result. The random source is injected so callers can
    /// seed it for reproducible renders.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` or `height` is zero.
    pub fn compute<R: Rng>(
        &self,
        frame: Rectangle,
        width: usize,
        height: usize,
        density: usize,
        rng: &mut R,
    ) -> Result<FlameAccumulator> {
        let mut builder = FlameAccumulatorBuilder::new(frame, width, height)?;
        self.compute_partial(density * width * height, &mut builder, rng);
        Ok(builder.build())
    }

    /// Fold `amount` more plotted points into an existing accumulator builder
    ///
    /// The resumable form of the chaos game: callers drive progressive
    /// rendering by invoking this repeatedly and snapshotting the builder
    /// between calls. Each call performs its own burn-in before plotting.
    /// A flame without transformations leaves the builder untouched.
    pub fn compute_partial<R: Rng>(
        &self,
        amount: usize,
        builder: &mut FlameAccumulatorBuilder,
        rng: &mut R,
    ) {
        if self.transformations.is_empty() {
            return;
        }

        let indexes: Vec<f64> = (0..self.transformations.len())
            .map(transform_color_index)
            .collect();

        let mut point = Point::ORIGIN;
        let mut color_index = 0.0;

        for _ in 0..BURN_IN_ITERATIONS {
            (point, color_index) = self.advance(&indexes, point, color_index, rng);
        }

        for _ in 0..amount {
            (point, color_index) = self.advance(&indexes, point, color_index, rng);
            builder.hit(point, color_index);
        }
    }

    /// One chaos-game step: pick a transformation uniformly at random,
    /// transform the point, and pull the color index toward the chosen
    /// transformation's precomputed index by midpoint average
    fn advance<R: Rng>(
        &self,
        indexes: &[f64],
        point: Point,
        color_index: f64,
        rng: &mut R,
    ) -> (Point, f64) {
        let chosen = rng.random_range(0..self.transformations.len());

        let point = self
            .transformations
            .get(chosen)
            .map_or(point, |transformation| {
                transformation.transform_point(point)
            });
        let color_index = indexes
            .get(chosen)
            .map_or(color_index, |index| (color_index + index) * 0.5);

        (point, color_index)
    }
}

/// Mutable working state for assembling a [`Flame`]
///
/// Wraps one transformation builder per position; `build` snapshots them
/// all into an immutable flame.
#[derive(Debug, Clone, Default)]
pub struct FlameBuilder {
    builders: Vec<FlameTransformationBuilder>,
}

impl FlameBuilder {
    /// Create a builder seeded from an existing flame
    pub fn new(flame: &Flame) -> Self {
        Self {
            builders: flame
                .transformations
                .iter()
                .map(FlameTransformationBuilder::new)
                .collect(),
        }
    }

    /// The number of transformations currently in the builder
    pub fn transformation_count(&self) -> usize {
        self.builders.len()
    }

    /// Append a transformation
    pub fn add_transformation(&mut self, transformation: FlameTransformation) {
        self.builders
            .push(FlameTransformationBuilder::new(&transformation));
    }

    /// Remove the transformation at `index`
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn remove_transformation(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.builders.remove(index);
        Ok(())
    }

    /// The affine part of the transformation at `index`
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn affine_transformation(&self, index: usize) -> Result<AffineTransformation> {
        self.builder_at(index)
            .map(FlameTransformationBuilder::affine_transformation)
    }

    /// Replace the affine part of the transformation at `index`
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn set_affine_transformation(
        &mut self,
        index: usize,
        transformation: AffineTransformation,
    ) -> Result<()> {
        self.builder_at_mut(index)?
            .set_affine_transformation(transformation);
        Ok(())
    }

    /// The weight of `variation` in the transformation at `index`
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn variation_weight(&self, index: usize, variation: Variation) -> Result<f64> {
        Ok(self.builder_at(index)?.variation_weight(variation))
    }

    /// Set the weight of `variation` in the transformation at `index`
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn set_variation_weight(
        &mut self,
        index: usize,
        variation: Variation,
        weight: f64,
    ) -> Result<()> {
        self.builder_at_mut(index)?
            .set_variation_weight(variation, weight);
        Ok(())
    }

    /// Snapshot the working state into an immutable flame
    pub fn build(&self) -> Flame {
        Flame::new(
            self.builders
                .iter()
                .map(FlameTransformationBuilder::build)
                .collect(),
        )
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.builders.len() {
            return Err(RenderError::TransformationIndex {
                index,
                count: self.builders.len(),
            });
        }
        Ok(())
    }

    fn builder_at(&self, index: usize) -> Result<&FlameTransformationBuilder> {
        self.builders
            .get(index)
            .ok_or(RenderError::TransformationIndex {
                index,
                count: self.builders.len(),
            })
    }

    fn builder_at_mut(&mut self, index: usize) -> Result<&mut FlameTransformationBuilder> {
        let count = self.builders.len();
        self.builders
            .get_mut(index)
            .ok_or(RenderError::TransformationIndex { index, count })
    }
}
