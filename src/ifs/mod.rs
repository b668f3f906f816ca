//! Bi-level iterated function systems
//!
//! The reduced sibling of the flame pipeline: plain affine
//! transformations iterated by the same chaos game, accumulating only
//! hit/no-hit per cell instead of density and color.

/// Bit-per-cell hit accumulator
pub mod accumulator;
/// The iterated function system and its chaos-game computation
pub mod system;

pub use accumulator::{IfsAccumulator, IfsAccumulatorBuilder};
pub use system::Ifs;
