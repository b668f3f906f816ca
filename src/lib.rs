//! Flame fractal rendering engine built on the chaos game algorithm
//!
//! The system iterates a randomly chosen nonlinear transformation over a running
//! point, accumulates where the point lands in a density/color grid, and maps the
//! accumulated statistics to gamma-encoded colors.

#![forbid(unsafe_code)]

/// Color values, gamma encoding, and index-to-color palettes
pub mod color;
/// Flame transformations, the chaos game, and the density/color accumulator
pub mod flame;
/// Immutable 2D primitives and affine linear algebra
pub mod geometry;
/// Bi-level iterated function systems, the reduced hit/no-hit variant
pub mod ifs;
/// Input/output operations and error handling
pub mod io;

pub use io::error::{RenderError, Result};
