//! Rendering constants and runtime configuration defaults

// Default values for configurable parameters
/// Fixed seed for reproducible renders
pub const DEFAULT_SEED: u64 = 42;

/// Default accumulator width in cells
pub const DEFAULT_WIDTH: usize = 500;

/// Default accumulator height in cells
pub const DEFAULT_HEIGHT: usize = 500;

/// Default points plotted per grid cell
pub const DEFAULT_DENSITY: usize = 50;

// Progressive rendering settings
/// Points folded into the accumulator per resumable step
pub const RENDER_CHUNK_POINTS: usize = 250_000;

// Output settings
/// Maximum channel value written by the plain-text PPM format
pub const PPM_CHANNEL_MAX: u32 = 100;

/// Number of refinement snapshots captured for an animated export
pub const VISUALIZATION_FRAME_COUNT: usize = 40;

/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 80;

/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
