//! Frame capture and GIF generation for progressive refinement
//!
//! The interactive rendering loop snapshots the accumulator between
//! resumable computation steps; capturing those snapshots as frames
//! yields an animation of the fractal sharpening as points accumulate.

use std::path::Path;

use image::codecs::gif::GifEncoder;
use image::{Delay, Frame};

use crate::color::{Color, Palette};
use crate::flame::FlameAccumulator;
use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{RenderError, Result, invalid_parameter};
use crate::io::image::render_accumulator;

/// Captures accumulator snapshots for an animated refinement export
pub struct RefinementCapture {
    frames: Vec<Frame>,
    frame_delay_ms: u32,
}

impl RefinementCapture {
    /// Create a capture with the given delay between frames
    ///
    /// Delays below what common viewers support are clamped up.
    pub const fn new(frame_delay_ms: u32) -> Self {
        let clamped = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS
        } else {
            frame_delay_ms
        };

        Self {
            frames: Vec::new(),
            frame_delay_ms: clamped,
        }
    }

    /// Render an accumulator snapshot and append it as a frame
    ///
    /// # Errors
    ///
    /// Returns an error if a palette lookup fails while rendering.
    pub fn record_snapshot(
        &mut self,
        accumulator: &FlameAccumulator,
        palette: &dyn Palette,
        background: Color,
    ) -> Result<()> {
        let image = render_accumulator(accumulator, palette, background)?;
        let delay = Delay::from_numer_denom_ms(self.frame_delay_ms, 1);
        self.frames.push(Frame::from_parts(image, 0, 0, delay));

        Ok(())
    }

    /// The number of frames captured so far
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured frames as an animated GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, path: &Path) -> Result<()> {
        if self.frames.is_empty() {
            return Err(invalid_parameter(
                "frames",
                &0,
                &"no refinement snapshots captured for visualization",
            ));
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| RenderError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(path).map_err(|e| RenderError::FileSystem {
            path: path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = GifEncoder::new(file);
        encoder
            .encode_frames(self.frames.iter().cloned())
            .map_err(|e| RenderError::ImageExport {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }
}
