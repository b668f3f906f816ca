//! Built-in flame fractal definitions
//!
//! Seed data the engine ships with. The transformation coefficients are
//! fixed; changing them changes every reference image, so treat them as
//! read-only configuration.

use std::f64::consts::{FRAC_PI_4, PI, SQRT_2};

use crate::flame::chaos::Flame;
use crate::flame::transformation::FlameTransformation;
use crate::geometry::{AffineTransformation, Point, Rectangle};
use crate::io::error::Result;

/// A built-in flame fractal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlamePreset {
    /// Three swirling transformations blending linear and swirl warps
    Turbulence,
    /// A fin shape built from linear, sinusoidal, horseshoe, and bubble warps
    Sharkfin,
    /// The Sierpinski triangle as a purely linear flame
    SierpinskiTriangle,
    /// The Sierpinski carpet as a purely linear flame
    SierpinskiCarpet,
    /// Barnsley's fern as a purely linear flame
    BarnsleyFern,
    /// The Heighway dragon curve as a purely linear flame
    DragonCurve,
}

impl FlamePreset {
    /// All built-in fractals
    pub const ALL: [Self; 6] = [
        Self::Turbulence,
        Self::Sharkfin,
        Self::SierpinskiTriangle,
        Self::SierpinskiCarpet,
        Self::BarnsleyFern,
        Self::DragonCurve,
    ];

    /// The preset's name, suitable for output file stems
    pub const fn name(self) -> &'static str {
        match self {
            Self::Turbulence => "turbulence",
            Self::Sharkfin => "sharkfin",
            Self::SierpinskiTriangle => "sierpinski-triangle",
            Self::SierpinskiCarpet => "sierpinski-carpet",
            Self::BarnsleyFern => "barnsley-fern",
            Self::DragonCurve => "dragon-curve",
        }
    }

    /// Build the preset's flame
    pub fn flame(self) -> Flame {
        match self {
            Self::Turbulence => turbulence(),
            Self::Sharkfin => sharkfin(),
            Self::SierpinskiTriangle => sierpinski_triangle(),
            Self::SierpinskiCarpet => sierpinski_carpet(),
            Self::BarnsleyFern => barnsley_fern(),
            Self::DragonCurve => dragon_curve(),
        }
    }

    /// A viewport enclosing the preset's attractor
    ///
    /// # Errors
    ///
    /// Never fails for the shipped dimensions; the `Result` comes from
    /// rectangle validation.
    pub fn reference_frame(self) -> Result<Rectangle> {
        match self {
            Self::Turbulence => Rectangle::new(Point::new(0.1, 0.1), 3.0, 3.0),
            Self::Sharkfin => Rectangle::new(Point::new(-0.25, 0.0), 5.0, 4.0),
            Self::SierpinskiTriangle => Rectangle::new(Point::new(1.0, 1.0), 2.2, 2.2),
            Self::SierpinskiCarpet => Rectangle::new(Point::new(0.5, 0.5), 1.1, 1.1),
            Self::BarnsleyFern => Rectangle::new(Point::new(0.0, 4.5), 6.0, 10.0),
            Self::DragonCurve => Rectangle::new(Point::new(0.45, 0.15), 1.8, 1.4),
        }
    }
}

/// The turbulence fractal
pub fn turbulence() -> Flame {
    Flame::new(vec![
        FlameTransformation::new(
            AffineTransformation::new(
                0.712_480_7,
                -0.411_350_9,
                -0.3,
                0.411_351_3,
                0.712_480_8,
                -0.7,
            ),
            [0.5, 0.0, 0.0, 0.4, 0.0, 0.0],
        ),
        FlameTransformation::new(
            AffineTransformation::new(
                0.373_107_9,
                -0.646_241_7,
                0.4,
                0.646_241_4,
                0.373_107_6,
                0.3,
            ),
            [1.0, 0.0, 0.1, 0.0, 0.0, 0.0],
        ),
        FlameTransformation::new(
            AffineTransformation::new(
                0.084_264_1,
                -0.314_478,
                -0.1,
                0.314_478,
                0.084_264_1,
                0.3,
            ),
            [1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        ),
    ])
}

/// The sharkfin fractal
pub fn sharkfin() -> Flame {
    Flame::new(vec![
        FlameTransformation::new(
            AffineTransformation::new(
                -0.411_350_4,
                -0.712_480_4,
                -0.4,
                0.712_479_5,
                -0.411_350_8,
                0.8,
            ),
            [1.0, 0.1, 0.0, 0.0, 0.0, 0.0],
        ),
        FlameTransformation::new(
            AffineTransformation::new(-0.395_733_9, 0.0, -1.6, 0.0, -0.395_733_7, 0.2),
            [0.0, 0.0, 0.0, 0.0, 0.8, 1.0],
        ),
        FlameTransformation::new(
            AffineTransformation::new(0.481_016_9, 0.0, 1.0, 0.0, 0.481_016_9, 0.9),
            [1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        ),
    ])
}

/// The Sierpinski triangle rendered through the flame pipeline
pub fn sierpinski_triangle() -> Flame {
    Flame::new(vec![
        linear_only(AffineTransformation::new(0.5, 0.0, 0.0, 0.0, 0.5, 0.0)),
        linear_only(AffineTransformation::new(0.5, 0.0, 1.0, 0.0, 0.5, 0.0)),
        linear_only(AffineTransformation::new(0.5, 0.0, 0.0, 0.0, 0.5, 1.0)),
    ])
}

/// The Sierpinski carpet rendered through the flame pipeline
pub fn sierpinski_carpet() -> Flame {
    let third = 1.0 / 3.0;
    let offsets = [
        (0.0, 0.0),
        (third, 0.0),
        (2.0 * third, 0.0),
        (0.0, third),
        (2.0 * third, third),
        (0.0, 2.0 * third),
        (third, 2.0 * third),
        (2.0 * third, 2.0 * third),
    ];

    Flame::new(
        offsets
            .iter()
            .map(|&(dx, dy)| {
                linear_only(AffineTransformation::new(third, 0.0, dx, 0.0, third, dy))
            })
            .collect(),
    )
}

/// Barnsley's fern rendered through the flame pipeline
pub fn barnsley_fern() -> Flame {
    Flame::new(vec![
        linear_only(AffineTransformation::new(0.0, 0.0, 0.0, 0.0, 0.16, 0.0)),
        linear_only(AffineTransformation::new(0.85, 0.04, 0.0, -0.04, 0.85, 1.6)),
        linear_only(AffineTransformation::new(0.2, -0.26, 0.0, 0.23, 0.22, 1.6)),
        linear_only(AffineTransformation::new(-0.15, 0.28, 0.0, 0.26, 0.24, 0.44)),
    ])
}

/// The Heighway dragon curve rendered through the flame pipeline
pub fn dragon_curve() -> Flame {
    let quarter_turn = FRAC_PI_4;
    let three_quarter_turn = 0.75 * PI;

    Flame::new(vec![
        linear_only(AffineTransformation::new(
            quarter_turn.cos() / SQRT_2,
            -quarter_turn.sin() / SQRT_2,
            0.0,
            quarter_turn.sin() / SQRT_2,
            quarter_turn.cos() / SQRT_2,
            0.0,
        )),
        linear_only(AffineTransformation::new(
            three_quarter_turn.cos() / SQRT_2,
            -three_quarter_turn.sin() / SQRT_2,
            1.0,
            three_quarter_turn.sin() / SQRT_2,
            three_quarter_turn.cos() / SQRT_2,
            0.0,
        )),
    ])
}

/// A transformation carrying only the linear variation at full weight
fn linear_only(affine: AffineTransformation) -> FlameTransformation {
    FlameTransformation::new(affine, [1.0, 0.0, 0.0, 0.0, 0.0, 0.0])
}
