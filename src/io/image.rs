//! PNG export of rendered accumulators

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::color::{Color, Palette, srgb_encode};
use crate::flame::FlameAccumulator;
use crate::io::error::{RenderError, Result};

/// Render an accumulator into an 8-bit RGBA image
///
/// Each cell's color is sRGB-encoded into bytes; grid row `height - 1`
/// becomes the top image row so y increases upward in the output.
///
/// # Errors
///
/// Returns an error if a palette lookup fails.
pub fn render_accumulator(
    accumulator: &FlameAccumulator,
    palette: &dyn Palette,
    background: Color,
) -> Result<RgbaImage> {
    let width = accumulator.width();
    let height = accumulator.height();
    let mut img = RgbaImage::new(width as u32, height as u32);

    for y in 0..height {
        for x in 0..width {
            let color = accumulator.color(palette, background, x, y)?;
            let pixel = Rgba([
                srgb_encode(color.red(), 255) as u8,
                srgb_encode(color.green(), 255) as u8,
                srgb_encode(color.blue(), 255) as u8,
                u8::MAX,
            ]);
            img.put_pixel(x as u32, (height - 1 - y) as u32, pixel);
        }
    }

    Ok(img)
}

/// Export an accumulator as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - A palette lookup fails
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_accumulator_png(
    accumulator: &FlameAccumulator,
    palette: &dyn Palette,
    background: Color,
    path: &Path,
) -> Result<()> {
    let img = render_accumulator(accumulator, palette, background)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| RenderError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(path).map_err(|e| RenderError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
