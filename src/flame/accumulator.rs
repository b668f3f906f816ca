//! Density/color accumulation grid and its intensity/color mapping
//!
//! The chaos game writes into a mutable builder owning per-cell hit
//! counts and color-index sums; freezing the builder yields an immutable
//! snapshot that maps raw hit statistics to final colors.

use ndarray::Array2;

use crate::color::{Color, Palette};
use crate::geometry::{AffineTransformation, Point, Rectangle};
use crate::io::error::{RenderError, Result, invalid_parameter};

/// An immutable snapshot of accumulated fractal density
///
/// Holds per-cell hit counts and summed color indices, plus the cached
/// logarithmic normalizer `ln(max_hit + 1)` used by [`intensity`].
///
/// [`intensity`]: FlameAccumulator::intensity
#[derive(Debug, Clone)]
pub struct FlameAccumulator {
    hit_count: Array2<u64>,
    color_index_sum: Array2<f64>,
    normalizer: f64,
}

impl FlameAccumulator {
    fn new(hit_count: Array2<u64>, color_index_sum: Array2<f64>) -> Self {
        let max_hit = hit_count.iter().copied().max().unwrap_or_default();
        let normalizer = ((max_hit + 1) as f64).ln();

        Self {
            hit_count,
            color_index_sum,
            normalizer,
        }
    }

    /// The grid width in cells
    pub fn width(&self) -> usize {
        self.hit_count.dim().0
    }

    /// The grid height in cells
    pub fn height(&self) -> usize {
        self.hit_count.dim().1
    }

    /// The number of hits accumulated in cell `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns an error if `(x, y)` is outside the grid.
    pub fn hit_count(&self, x: usize, y: usize) -> Result<u64> {
        self.hit_count
            .get([x, y])
            .copied()
            .ok_or_else(|| self.out_of_bounds(x, y))
    }

    /// The logarithmically compressed brightness of cell `(x, y)`
    ///
    /// `ln(hits + 1) / ln(max_hits + 1)`, a value in `[0, 1]` saturating
    /// at 1 for the most-hit cell. The compression keeps sparse but
    /// nonzero cells visible next to a dominant peak.
    ///
    /// # Errors
    ///
    /// Returns an error if `(x, y)` is outside the grid.
    pub fn intensity(&self, x: usize, y: usize) -> Result<f64> {
        let hits = self.hit_count(x, y)?;
        Ok(((hits + 1) as f64).ln() / self.normalizer)
    }

    /// The final color of cell `(x, y)`
    ///
    /// An unhit cell is exactly the background. A hit cell looks up the
    /// palette at the cell's average color index and fades it toward the
    /// background by `1 - intensity`, so dense cells are dominated by the
    /// palette color and sparse cells recede.
    ///
    /// # Errors
    ///
    /// Returns an error if `(x, y)` is outside the grid.
    pub fn color(
        &self,
        palette: &dyn Palette,
        background: Color,
        x: usize,
        y: usize,
    ) -> Result<Color> {
        let hits = self.hit_count(x, y)?;
        if hits == 0 {
            return Ok(background);
        }

        let index_sum = self
            .color_index_sum
            .get([x, y])
            .copied()
            .ok_or_else(|| self.out_of_bounds(x, y))?;

        palette
            .color_for_index(index_sum / hits as f64)?
            .mix_with(background, 1.0 - self.intensity(x, y)?)
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> RenderError {
        RenderError::CellOutOfBounds {
            x,
            y,
            width: self.width(),
            height: self.height(),
        }
    }
}

/// Mutable accumulation grids plus the world-to-grid mapping
///
/// Created once per rendering pass (or per incremental session), mutated
/// by repeated [`hit`] calls, and frozen into snapshots via [`build`] as
/// often as the caller likes.
///
/// [`hit`]: FlameAccumulatorBuilder::hit
/// [`build`]: FlameAccumulatorBuilder::build
#[derive(Debug, Clone)]
pub struct FlameAccumulatorBuilder {
    hit_count: Array2<u64>,
    color_index_sum: Array2<f64>,
    frame: Rectangle,
    grid_transformation: AffineTransformation,
}

impl FlameAccumulatorBuilder {
    /// Create a builder for the given viewport and grid dimensions
    ///
    /// Derives the world-to-grid map by translating the frame's lower-left
    /// corner to the origin, then scaling the frame onto the grid.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` or `height` is zero.
    pub fn new(frame: Rectangle, width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "dimensions",
                &format!("{width}x{height}"),
                &"accumulator dimensions must be greater than zero",
            ));
        }

        let scale_x = width as f64 / frame.width();
        let scale_y = height as f64 / frame.height();
        let grid_transformation = AffineTransformation::new_translation(-frame.left(), -frame.bottom())
            .compose_with(&AffineTransformation::new_scaling(scale_x, scale_y));

        Ok(Self {
            hit_count: Array2::zeros((width, height)),
            color_index_sum: Array2::zeros((width, height)),
            frame,
            grid_transformation,
        })
    }

    /// Accumulate one chaos-game landing
    ///
    /// Points outside the frame are silently discarded; the attractor
    /// wandering outside the viewport is expected and frequent, and
    /// non-finite coordinates fail the containment check the same way.
    /// In-frame points are mapped to grid space, truncated to a cell, and
    /// bounds-checked once more since rounding at the frame boundary can
    /// push a coordinate out by one cell.
    pub fn hit(&mut self, point: Point, color_index: f64) {
        if !self.frame.contains(point) {
            return;
        }

        let mapped = self.grid_transformation.transform_point(point);
        let x = mapped.x as isize;
        let y = mapped.y as isize;
        if x < 0 || y < 0 {
            return;
        }

        let cell = [x as usize, y as usize];
        if let Some(hits) = self.hit_count.get_mut(cell) {
            *hits += 1;
        }
        if let Some(sum) = self.color_index_sum.get_mut(cell) {
            *sum += color_index;
        }
    }

    /// Freeze the current grids into an immutable snapshot
    ///
    /// The grids are deep-copied, so the builder can keep accumulating
    /// and be frozen again later; progressive rendering snapshots the
    /// builder repeatedly this way.
    pub fn build(&self) -> FlameAccumulator {
        FlameAccumulator::new(self.hit_count.clone(), self.color_index_sum.clone())
    }
}
