//! Command-line interface for rendering built-in fractals to image files

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::color::{Color, InterpolatedPalette, Palette, RandomPalette};
use crate::flame::{FlameAccumulatorBuilder, FlamePreset};
use crate::io::configuration::{
    DEFAULT_DENSITY, DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH, GIF_FRAME_DELAY_MS,
    RENDER_CHUNK_POINTS, VISUALIZATION_FRAME_COUNT,
};
use crate::io::error::Result;
use crate::io::image::export_accumulator_png;
use crate::io::netpbm::write_flame_ppm;
use crate::io::progress::ProgressManager;
use crate::io::visualization::RefinementCapture;

/// Selectable built-in fractal
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Fractal {
    /// Three swirling transformations blending linear and swirl warps
    Turbulence,
    /// A fin shape built from linear, sinusoidal, horseshoe, and bubble warps
    Sharkfin,
    /// The Sierpinski triangle
    SierpinskiTriangle,
    /// The Sierpinski carpet
    SierpinskiCarpet,
    /// Barnsley's fern
    BarnsleyFern,
    /// The Heighway dragon curve
    DragonCurve,
}

impl Fractal {
    /// The engine preset backing this selection
    pub const fn preset(self) -> FlamePreset {
        match self {
            Self::Turbulence => FlamePreset::Turbulence,
            Self::Sharkfin => FlamePreset::Sharkfin,
            Self::SierpinskiTriangle => FlamePreset::SierpinskiTriangle,
            Self::SierpinskiCarpet => FlamePreset::SierpinskiCarpet,
            Self::BarnsleyFern => FlamePreset::BarnsleyFern,
            Self::DragonCurve => FlamePreset::DragonCurve,
        }
    }
}

#[derive(Parser)]
#[command(name = "flamegen")]
#[command(
    author,
    version,
    about = "Render flame fractals with the chaos game algorithm"
)]
/// Command-line arguments for the fractal rendering tool
pub struct Cli {
    /// Built-in fractal to render
    #[arg(value_enum, value_name = "FRACTAL")]
    pub fractal: Fractal,

    /// Output image path; .ppm selects the plain-text format, anything
    /// else is PNG (defaults to <fractal>.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Accumulator width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Accumulator height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Points plotted per grid cell
    #[arg(short, long, default_value_t = DEFAULT_DENSITY)]
    pub density: usize,

    /// Random seed for reproducible renders
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Use a random palette with this many colors instead of the
    /// default red-green-blue gradient
    #[arg(short = 'p', long, value_name = "COLORS")]
    pub random_palette: Option<usize>,

    /// Export the progressive refinement as an animated GIF alongside
    /// the image
    #[arg(short = 'a', long)]
    pub animate: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates a render from preset selection to file export
pub struct Renderer {
    cli: Cli,
}

impl Renderer {
    /// Create a renderer from the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Render the selected fractal and write the output files
    ///
    /// Drives the resumable chaos game in chunks so progress can be
    /// reported and refinement snapshots captured between steps.
    ///
    /// # Errors
    ///
    /// Returns an error if viewport or palette construction fails, or if
    /// an output file cannot be written.
    pub fn render(&self) -> Result<()> {
        let preset = self.cli.fractal.preset();
        let flame = preset.flame();

        let target_ratio = self.cli.width as f64 / self.cli.height as f64;
        let frame = preset
            .reference_frame()?
            .expand_to_aspect_ratio(target_ratio)?;

        let mut rng = StdRng::seed_from_u64(self.cli.seed);
        let palette = self.build_palette(&mut rng)?;
        let background = Color::BLACK;

        let mut builder = FlameAccumulatorBuilder::new(frame, self.cli.width, self.cli.height)?;

        let total_points = self.cli.density * self.cli.width * self.cli.height;
        let total_chunks = total_points.div_ceil(RENDER_CHUNK_POINTS).max(1);
        let snapshot_stride = (total_chunks / VISUALIZATION_FRAME_COUNT).max(1);

        let progress = self
            .cli
            .should_show_progress()
            .then(|| ProgressManager::new(preset.name(), total_points));
        let mut capture = self
            .cli
            .animate
            .then(|| RefinementCapture::new(GIF_FRAME_DELAY_MS));

        let mut remaining = total_points;
        let mut chunk_index = 0;
        while remaining > 0 {
            let amount = remaining.min(RENDER_CHUNK_POINTS);
            flame.compute_partial(amount, &mut builder, &mut rng);
            remaining -= amount;
            chunk_index += 1;

            if let Some(ref bar) = progress {
                bar.advance(amount);
            }
            if let Some(ref mut frames) = capture {
                if chunk_index % snapshot_stride == 0 || remaining == 0 {
                    frames.record_snapshot(&builder.build(), palette.as_ref(), background)?;
                }
            }
        }

        if let Some(ref bar) = progress {
            bar.finish();
        }

        let accumulator = builder.build();
        let output = self.output_path(preset);

        if output.extension().and_then(|ext| ext.to_str()) == Some("ppm") {
            write_flame_ppm(&accumulator, palette.as_ref(), background, &output)?;
        } else {
            export_accumulator_png(&accumulator, palette.as_ref(), background, &output)?;
        }

        if let Some(ref frames) = capture {
            if frames.frame_count() > 0 {
                frames.export_gif(&output.with_extension("gif"))?;
            }
        }

        Ok(())
    }

    fn build_palette(&self, rng: &mut StdRng) -> Result<Box<dyn Palette>> {
        match self.cli.random_palette {
            Some(amount) => Ok(Box::new(RandomPalette::new(amount, rng)?)),
            None => Ok(Box::new(InterpolatedPalette::new(vec![
                Color::RED,
                Color::GREEN,
                Color::BLUE,
            ])?)),
        }
    }

    fn output_path(&self, preset: FlamePreset) -> PathBuf {
        self.cli
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.png", preset.name())))
    }
}
