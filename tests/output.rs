//! Validates the file writers: plain-text netpbm output, PNG export,
//! and the progressive-refinement GIF capture

use flamegen::color::{Color, InterpolatedPalette};
use flamegen::flame::presets;
use flamegen::geometry::{Point, Rectangle};
use flamegen::ifs::system;
use flamegen::io::configuration::GIF_FRAME_DELAY_MS;
use flamegen::io::image::export_accumulator_png;
use flamegen::io::netpbm::{write_flame_ppm, write_ifs_pbm};
use flamegen::io::visualization::RefinementCapture;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rgb_palette() -> InterpolatedPalette {
    InterpolatedPalette::new(vec![Color::RED, Color::GREEN, Color::BLUE])
        .expect("Failed to construct palette")
}

fn small_turbulence_render() -> flamegen::flame::FlameAccumulator {
    let mut rng = StdRng::seed_from_u64(42);
    let frame = presets::FlamePreset::Turbulence
        .reference_frame()
        .expect("Failed to construct frame");
    presets::turbulence()
        .compute(frame, 16, 16, 5, &mut rng)
        .expect("Failed to compute accumulator")
}

#[test]
fn test_ppm_writer_produces_a_parseable_image() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("turbulence.ppm");

    let accumulator = small_turbulence_render();
    write_flame_ppm(&accumulator, &rgb_palette(), Color::BLACK, &path)
        .expect("Failed to write PPM");

    let contents = std::fs::read_to_string(&path).expect("Failed to read PPM back");
    let mut tokens = contents.split_whitespace();

    assert_eq!(tokens.next(), Some("P3"));
    assert_eq!(tokens.next(), Some("16"));
    assert_eq!(tokens.next(), Some("16"));
    assert_eq!(tokens.next(), Some("100"));

    let samples: Vec<u32> = tokens
        .map(|token| token.parse().expect("Non-numeric sample in PPM body"))
        .collect();
    assert_eq!(samples.len(), 16 * 16 * 3);
    assert!(samples.iter().all(|&sample| sample <= 100));
}

#[test]
fn test_pbm_writer_produces_a_parseable_image() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("triangle.pbm");

    let mut rng = StdRng::seed_from_u64(42);
    let frame =
        Rectangle::new(Point::new(0.5, 0.5), 1.0, 1.0).expect("Failed to construct frame");
    let accumulator = system::sierpinski_triangle()
        .compute(frame, 12, 12, 10, &mut rng)
        .expect("Failed to compute accumulator");

    write_ifs_pbm(&accumulator, &path).expect("Failed to write PBM");

    let contents = std::fs::read_to_string(&path).expect("Failed to read PBM back");
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("P1"));
    assert_eq!(lines.next(), Some("12 12"));

    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 12);
    assert!(
        rows.iter()
            .all(|row| row.len() == 12 && row.chars().all(|c| c == '0' || c == '1'))
    );
}

#[test]
fn test_png_export_writes_a_decodable_file() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("nested").join("turbulence.png");

    let accumulator = small_turbulence_render();
    export_accumulator_png(&accumulator, &rgb_palette(), Color::BLACK, &path)
        .expect("Failed to export PNG");

    let decoded = image::open(&path).expect("Failed to decode exported PNG");
    assert_eq!(decoded.width(), 16);
    assert_eq!(decoded.height(), 16);
}

#[test]
fn test_refinement_capture_collects_and_exports_frames() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("refinement.gif");

    let mut capture = RefinementCapture::new(GIF_FRAME_DELAY_MS);
    assert_eq!(capture.frame_count(), 0);
    assert!(capture.export_gif(&path).is_err(), "empty capture must not export");

    let accumulator = small_turbulence_render();
    let palette = rgb_palette();
    for _ in 0..3 {
        capture
            .record_snapshot(&accumulator, &palette, Color::BLACK)
            .expect("Failed to record snapshot");
    }
    assert_eq!(capture.frame_count(), 3);

    capture.export_gif(&path).expect("Failed to export GIF");
    assert!(path.exists());
}
