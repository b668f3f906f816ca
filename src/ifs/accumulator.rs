//! Bit-per-cell accumulator for bi-level fractals

use bitvec::prelude::BitVec;

use crate::geometry::{AffineTransformation, Point, Rectangle};
use crate::io::error::{RenderError, Result, invalid_parameter};

/// An immutable snapshot of which cells the chaos game touched
///
/// One bit per cell; no density, no color. The grid is stored
/// column-major so a cell's index is `x · height + y`.
#[derive(Debug, Clone)]
pub struct IfsAccumulator {
    cells: BitVec,
    width: usize,
    height: usize,
}

impl IfsAccumulator {
    /// The grid width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// The grid height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether cell `(x, y)` was ever hit
    ///
    /// # Errors
    ///
    /// Returns an error if `(x, y)` is outside the grid.
    pub fn is_hit(&self, x: usize, y: usize) -> Result<bool> {
        if x >= self.width || y >= self.height {
            return Err(RenderError::CellOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok(self.cells.get(x * self.height + y).as_deref() == Some(&true))
    }
}

/// Mutable hit grid plus the world-to-grid mapping
///
/// The same frame-containment, affine-map, truncate, bounds-check
/// pipeline as the flame accumulator, reduced to a single bit per cell.
#[derive(Debug, Clone)]
pub struct IfsAccumulatorBuilder {
    cells: BitVec,
    width: usize,
    height: usize,
    frame: Rectangle,
    grid_transformation: AffineTransformation,
}

impl IfsAccumulatorBuilder {
    /// Create a builder for the given viewport and grid dimensions
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
            cells: BitVec::repeat(false, width * height),
            width,
            height,
            frame,
            grid_transformation,
        })
    }

    /// Mark the cell containing `point`, if the frame contains it
    pub fn hit(&mut self, point: Point) {
        if !self.frame.contains(point) {
            return;
        }

        let mapped = self.grid_transformation.transform_point(point);
        let x = mapped.x as isize;
        let y = mapped.y as isize;
        if x < 0 || y < 0 {
            return;
        }

        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.cells.set(x * self.height + y, true);
        }
    }

    /// Freeze the current grid into an immutable snapshot
    pub fn build(&self) -> IfsAccumulator {
        IfsAccumulator {
            cells: self.cells.clone(),
            width: self.width,
            height: self.height,
        }
    }
}
