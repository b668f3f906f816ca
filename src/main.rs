//! CLI entry point for the flame fractal renderer

use clap::Parser;
use flamegen::io::cli::{Cli, Renderer};

fn main() -> flamegen::Result<()> {
    let cli = Cli::parse();
    Renderer::new(cli).render()
}
