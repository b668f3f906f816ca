//! Plain-text netpbm writers
//!
//! PPM (`P3`) for flame accumulators and PBM (`P1`) for bi-level
//! accumulators. Rows are written top-down, so grid row `height - 1`
//! comes first and the image appears with y increasing upward.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::color::{Color, Palette, srgb_encode};
use crate::flame::FlameAccumulator;
use crate::ifs::IfsAccumulator;
use crate::io::configuration::PPM_CHANNEL_MAX;
use crate::io::error::{RenderError, Result};

/// Write a flame accumulator as a plain-text PPM image
///
/// Each pixel is three space-separated integers in `0..=100`, produced
/// by sRGB-encoding the accumulator's color for that cell.
///
/// # Errors
///
/// Returns an error if the palette lookup fails or the file cannot be
/// created or written.
pub fn write_flame_ppm(
    accumulator: &FlameAccumulator,
    palette: &dyn Palette,
    background: Color,
    path: &Path,
) -> Result<()> {
    let mut out = BufWriter::new(create_file(path)?);

    write_result(path, writeln!(out, "P3"))?;
    write_result(
        path,
        writeln!(out, "{} {}", accumulator.width(), accumulator.height()),
    )?;
    write_result(path, writeln!(out, "{PPM_CHANNEL_MAX}"))?;

    for y in (0..accumulator.height()).rev() {
        for x in 0..accumulator.width() {
            let color = accumulator.color(palette, background, x, y)?;
            write_result(
                path,
                write!(
                    out,
                    "{} {} {} ",
                    srgb_encode(color.red(), PPM_CHANNEL_MAX),
                    srgb_encode(color.green(), PPM_CHANNEL_MAX),
                    srgb_encode(color.blue(), PPM_CHANNEL_MAX)
                ),
            )?;
        }
        write_result(path, writeln!(out))?;
    }

    write_result(path, out.flush())
}

/// Write a bi-level accumulator as a plain-text PBM image
///
/// Hit cells become `1`, unhit cells `0`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_ifs_pbm(accumulator: &IfsAccumulator, path: &Path) -> Result<()> {
    let mut out = BufWriter::new(create_file(path)?);

    write_result(path, writeln!(out, "P1"))?;
    write_result(
        path,
        writeln!(out, "{} {}", accumulator.width(), accumulator.height()),
    )?;

    for y in (0..accumulator.height()).rev() {
        for x in 0..accumulator.width() {
            let bit = u8::from(accumulator.is_hit(x, y)?);
            write_result(path, write!(out, "{bit}"))?;
        }
        write_result(path, writeln!(out))?;
    }

    write_result(path, out.flush())
}

fn create_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| RenderError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    File::create(path).map_err(|e| RenderError::FileSystem {
        path: path.to_path_buf(),
        operation: "create file",
        source: e,
    })
}

fn write_result(path: &Path, result: std::io::Result<()>) -> Result<()> {
    result.map_err(|e| RenderError::FileSystem {
        path: path.to_path_buf(),
        operation: "write image",
        source: e,
    })
}
