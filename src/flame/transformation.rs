//! One step of the fractal: an affine transform followed by a weighted
//! blend of variations

use crate::flame::variation::{VARIATION_COUNT, Variation};
use crate::geometry::{AffineTransformation, Point};

/// A flame transformation: an affine part plus one weight per variation
///
/// The weight array is indexed by [`Variation::index`]; its fixed size
/// keeps it in lockstep with the closed catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlameTransformation {
    affine: AffineTransformation,
    weights: [f64; VARIATION_COUNT],
}

impl FlameTransformation {
    /// Create a transformation from its affine part and variation weights
    pub const fn new(affine: AffineTransformation, weights: [f64; VARIATION_COUNT]) -> Self {
        Self { affine, weights }
    }

    /// Apply the transformation to a point
    ///
    /// The affine part is applied first; the result is the weighted sum
    /// of each variation of the affine image. Zero-weight variations are
    /// skipped entirely, so a non-finite variation output never taints
    /// the sum through a `0 × NaN` product.
    pub fn transform_point(&self, p: Point) -> Point {
        let affine_image = self.affine.transform_point(p);

        let mut x = 0.0;
        let mut y = 0.0;
        for variation in Variation::ALL {
            let weight = self
                .weights
                .get(variation.index())
                .copied()
                .unwrap_or_default();
            if weight != 0.0 {
                let warped = variation.transform_point(affine_image);
                x += warped.x * weight;
                y += warped.y * weight;
            }
        }

        Point::new(x, y)
    }
}

/// Mutable working state for assembling a [`FlameTransformation`]
#[derive(Debug, Clone)]
pub struct FlameTransformationBuilder {
    affine: AffineTransformation,
    weights: [f64; VARIATION_COUNT],
}

impl FlameTransformationBuilder {
    /// Create a builder seeded from an existing transformation
    pub const fn new(transformation: &FlameTransformation) -> Self {
        Self {
            affine: transformation.affine,
            weights: transformation.weights,
        }
    }

    /// The affine part of the transformation
    pub const fn affine_transformation(&self) -> AffineTransformation {
        self.affine
    }

    /// Replace the affine part of the transformation
    pub const fn set_affine_transformation(&mut self, transformation: AffineTransformation) {
        self.affine = transformation;
    }

    /// The weight of the given variation
    pub fn variation_weight(&self, variation: Variation) -> f64 {
        self.weights
            .get(variation.index())
            .copied()
            .unwrap_or_default()
    }

    /// Set the weight of the given variation
    pub fn set_variation_weight(&mut self, variation: Variation, weight: f64) {
        if let Some(slot) = self.weights.get_mut(variation.index()) {
            *slot = weight;
        }
    }

    /// Snapshot the working state into an immutable transformation
    pub const fn build(&self) -> FlameTransformation {
        FlameTransformation::new(self.affine, self.weights)
    }
}
