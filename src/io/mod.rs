//! Input/output operations and error handling
//!
//! Consumers of the engine live here: the command-line renderer, the
//! plain-text and PNG image writers, progress reporting, and the
//! progressive-refinement GIF capture.

/// Command-line interface for rendering built-in fractals
pub mod cli;
/// Rendering constants and runtime configuration defaults
pub mod configuration;
/// Error types for engine and rendering operations
pub mod error;
/// PNG export of rendered accumulators
pub mod image;
/// Plain-text netpbm writers (PPM for flames, PBM for bi-level systems)
pub mod netpbm;
/// Render progress reporting
pub mod progress;
/// Frame capture and GIF generation for progressive refinement
pub mod visualization;
