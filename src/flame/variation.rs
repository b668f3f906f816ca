//! Fixed catalog of nonlinear point-warping functions
//!
//! Each variation is a pure function applied to the already
//! affine-transformed point. The catalog is closed: the six kinds carry
//! stable indices 0-5 used to address per-transformation weight arrays.

use crate::geometry::Point;

/// Number of variations in the catalog
pub const VARIATION_COUNT: usize = 6;

/// A named nonlinear point-warping function
///
/// Division by zero at the origin is not special-cased; non-finite
/// results flow through and are discarded later by the accumulator's
/// containment checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variation {
    /// The identity warp `(x, y)`
    Linear,
    /// `(sin x, sin y)`
    Sinusoidal,
    /// Inversion through the unit circle, `(x/r², y/r²)`
    Spherical,
    /// Rotation by the squared radius, `(x·sin r² − y·cos r², x·cos r² + y·sin r²)`
    Swirl,
    /// `((x−y)(x+y)/r, 2xy/r)`
    Horseshoe,
    /// `(4x/(r²+4), 4y/(r²+4))`
    Bubble,
}

impl Variation {
    /// All variations in catalog order
    pub const ALL: [Self; VARIATION_COUNT] = [
        Self::Linear,
        Self::Sinusoidal,
        Self::Spherical,
        Self::Swirl,
        Self::Horseshoe,
        Self::Bubble,
    ];

    /// The stable catalog index of this variation
    pub const fn index(self) -> usize {
        match self {
            Self::Linear => 0,
            Self::Sinusoidal => 1,
            Self::Spherical => 2,
            Self::Swirl => 3,
            Self::Horseshoe => 4,
            Self::Bubble => 5,
        }
    }

    /// The display name of this variation
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Sinusoidal => "Sinusoidal",
            Self::Spherical => "Spherical",
            Self::Swirl => "Swirl",
            Self::Horseshoe => "Horseshoe",
            Self::Bubble => "Bubble",
        }
    }

    /// Apply the variation to a point
    pub fn transform_point(self, p: Point) -> Point {
        match self {
            Self::Linear => p,
            Self::Sinusoidal => Point::new(p.x.sin(), p.y.sin()),
            Self::Spherical => {
                let r2 = p.r() * p.r();
                Point::new(p.x / r2, p.y / r2)
            }
            Self::Swirl => {
                let r2 = p.r() * p.r();
                let (sin_r2, cos_r2) = (r2.sin(), r2.cos());
                Point::new(
                    p.x * sin_r2 - p.y * cos_r2,
                    p.x * cos_r2 + p.y * sin_r2,
                )
            }
            Self::Horseshoe => Point::new((p.x - p.y) * (p.x + p.y) / p.r(), 2.0 * p.x * p.y / p.r()),
            Self::Bubble => {
                let r2 = p.r() * p.r();
                Point::new(4.0 * p.x / (r2 + 4.0), 4.0 * p.y / (r2 + 4.0))
            }
        }
    }
}
