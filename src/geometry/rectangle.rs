//! Axis-aligned rectangle with half-open containment semantics

use crate::geometry::point::Point;
use crate::io::error::{Result, invalid_parameter};

/// An axis-aligned rectangle described by its center and dimensions
///
/// Both dimensions are strictly positive; construction fails otherwise.
/// Containment is half-open: the left and bottom edges belong to the
/// rectangle, the right and top edges do not, so adjacent rectangles
/// tile the plane without double-counting boundary points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    center: Point,
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Create a new rectangle from its center and dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if `width` or `height` is not strictly positive.
    pub fn new(center: Point, width: f64, height: f64) -> Result<Self> {
        if width <= 0.0 {
            return Err(invalid_parameter(
                "width",
                &width,
                &"rectangle dimensions must be greater than zero",
            ));
        }
        if height <= 0.0 {
            return Err(invalid_parameter(
                "height",
                &height,
                &"rectangle dimensions must be greater than zero",
            ));
        }

        Ok(Self {
            center,
            width,
            height,
        })
    }

    /// The center of the rectangle
    pub const fn center(&self) -> Point {
        self.center
    }

    /// The width of the rectangle
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// The height of the rectangle
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// The minimum x coordinate
    pub const fn left(&self) -> f64 {
        self.center.x - self.width / 2.0
    }

    /// The maximum x coordinate
    pub const fn right(&self) -> f64 {
        self.center.x + self.width / 2.0
    }

    /// The minimum y coordinate
    pub const fn bottom(&self) -> f64 {
        self.center.y - self.height / 2.0
    }

    /// The maximum y coordinate
    pub const fn top(&self) -> f64 {
        self.center.y + self.height / 2.0
    }

    /// The ratio of width to height
    pub const fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Whether a point lies inside the rectangle
    ///
    /// Half-open bounds: `left <= x < right` and `bottom <= y < top`.
    /// Non-finite coordinates fail the comparisons and are reported as
    /// outside.
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.bottom() && p.y < self.top()
    }

    /// The smallest enclosing rectangle with the same center and the
    /// requested aspect ratio
    ///
    /// Grows the width when the target ratio exceeds the current one,
    /// otherwise grows the height. Never shrinks either dimension.
    ///
    /// # Errors
    ///
    /// Returns an error if `aspect_ratio` is not strictly positive.
    pub fn expand_to_aspect_ratio(&self, aspect_ratio: f64) -> Result<Self> {
        if aspect_ratio <= 0.0 {
            return Err(invalid_parameter(
                "aspect_ratio",
                &aspect_ratio,
                &"aspect ratio must be greater than zero",
            ));
        }

        if aspect_ratio > self.aspect_ratio() {
            let new_width = self.width * aspect_ratio / self.aspect_ratio();
            Self::new(self.center, new_width, self.height)
        } else {
            let new_height = self.height * self.aspect_ratio() / aspect_ratio;
            Self::new(self.center, self.width, new_height)
        }
    }
}

impl std::fmt::Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {:.2}, {:.2})", self.center, self.width, self.height)
    }
}
