//! The iterated function system and its chaos-game computation

use rand::Rng;

use crate::geometry::{AffineTransformation, Point, Rectangle};
use crate::ifs::accumulator::{IfsAccumulator, IfsAccumulatorBuilder};
use crate::io::error::Result;

/// Unplotted iterations before any cell is marked, matching the flame
/// pipeline's burn-in
const BURN_IN_ITERATIONS: usize = 20;

/// An iterated function system: an ordered list of affine transformations
#[derive(Debug, Clone, PartialEq)]
pub struct Ifs {
    transformations: Vec<AffineTransformation>,
}

impl Ifs {
    /// Create a system from its transformations
    pub const fn new(transformations: Vec<AffineTransformation>) -> Self {
        Self { transformations }
    }

    /// The number of transformations in the system
    pub fn transformation_count(&self) -> usize {
        self.transformations.len()
    }

    /// Compute the fractal over the given viewport into a fresh accumulator
    ///
    /// The same chaos game as the flame pipeline without the color
    /// thread: burn in, then plot `density · width · height` points
    /// chosen by uniformly random transformation application.
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
    ) -> Result<IfsAccumulator> {
        let mut builder = IfsAccumulatorBuilder::new(frame, width, height)?;
        if self.transformations.is_empty() {
            return Ok(builder.build());
        }

        let mut point = Point::ORIGIN;

        for _ in 0..BURN_IN_ITERATIONS {
            point = self.advance(point, rng);
        }

        for _ in 0..density * width * height {
            point = self.advance(point, rng);
            builder.hit(point);
        }

        Ok(builder.build())
    }

    fn advance<R: Rng>(&self, point: Point, rng: &mut R) -> Point {
        let chosen = rng.random_range(0..self.transformations.len());
        self.transformations
            .get(chosen)
            .map_or(point, |transformation| {
                transformation.transform_point(point)
            })
    }
}

/// The Sierpinski triangle
pub fn sierpinski_triangle() -> Ifs {
    Ifs::new(vec![
        AffineTransformation::new(0.5, 0.0, 0.0, 0.0, 0.5, 0.0),
        AffineTransformation::new(0.5, 0.0, 0.5, 0.0, 0.5, 0.0),
        AffineTransformation::new(0.5, 0.0, 0.25, 0.0, 0.5, 0.5),
    ])
}

/// Barnsley's fern
pub fn barnsley_fern() -> Ifs {
    Ifs::new(vec![
        AffineTransformation::new(0.0, 0.0, 0.0, 0.0, 0.16, 0.0),
        AffineTransformation::new(0.2, -0.26, 0.0, 0.23, 0.22, 1.6),
        AffineTransformation::new(-0.15, 0.28, 0.0, 0.26, 0.24, 0.44),
        AffineTransformation::new(0.85, 0.04, 0.0, -0.04, 0.85, 1.6),
    ])
}
