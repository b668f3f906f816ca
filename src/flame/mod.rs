//! Flame fractal model and the chaos game
//!
//! This module contains the fractal computation core:
//! - The fixed catalog of nonlinear variations
//! - Flame transformations blending variations behind an affine part
//! - The chaos-game iteration loop, one-shot and resumable
//! - The density/color accumulator and its intensity/color mapping
//! - Built-in fractal definitions

/// Density/color accumulation grid and color mapping
pub mod accumulator;
/// The flame fractal and its chaos-game computation
pub mod chaos;
/// Built-in fractal definitions with reference viewports
pub mod presets;
/// One step of the fractal: affine part plus weighted variations
pub mod transformation;
/// Fixed catalog of nonlinear point-warping functions
pub mod variation;

pub use accumulator::{FlameAccumulator, FlameAccumulatorBuilder};
pub use chaos::{Flame, FlameBuilder, transform_color_index};
pub use presets::FlamePreset;
pub use transformation::{FlameTransformation, FlameTransformationBuilder};
pub use variation::{VARIATION_COUNT, Variation};
