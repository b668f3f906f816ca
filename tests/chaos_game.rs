//! Validates the chaos game: color-index assignment, burn-in, uniform
//! selection plumbing, and resumable computation

use flamegen::flame::{
    Flame, FlameBuilder, FlameTransformation, Variation, transform_color_index,
};
use flamegen::geometry::{AffineTransformation, Point, Rectangle};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A flame whose only transformation maps every point to the origin's
/// orbit: identity affine, full linear weight, nothing else
fn stationary_flame() -> Flame {
    Flame::new(vec![FlameTransformation::new(
        AffineTransformation::IDENTITY,
        [1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    )])
}

fn unit_frame() -> Rectangle {
    Rectangle::new(Point::ORIGIN, 2.0, 2.0).expect("Failed to construct frame")
}

#[test]
fn test_color_index_bit_reversal_sequence() {
    let expected = [(0, 0.0), (1, 1.0), (2, 0.5), (3, 0.25), (4, 0.75)];
    for (n, value) in expected {
        let computed = transform_color_index(n);
        assert!(
            (computed - value).abs() < f64::EPSILON,
            "color index for transformation {n} should be {value}, got {computed}"
        );
    }

    // Further positions keep filling gaps between earlier ones
    assert!((transform_color_index(5) - 0.125).abs() < f64::EPSILON);
    assert!((transform_color_index(6) - 0.375).abs() < f64::EPSILON);
    assert!((transform_color_index(7) - 0.625).abs() < f64::EPSILON);
    assert!((transform_color_index(8) - 0.875).abs() < f64::EPSILON);
}

#[test]
fn test_empty_flame_plots_nothing() {
    let mut rng = StdRng::seed_from_u64(42);
    let accumulator = Flame::new(Vec::new())
        .compute(unit_frame(), 8, 8, 20, &mut rng)
        .expect("Failed to compute accumulator");

    for x in 0..8 {
        for y in 0..8 {
            assert_eq!(accumulator.hit_count(x, y).expect("Cell out of range"), 0);
        }
    }
}

#[test]
fn test_stationary_flame_accumulates_all_points_in_center_cell() {
    let mut rng = StdRng::seed_from_u64(42);
    let density = 3;
    let accumulator = stationary_flame()
        .compute(unit_frame(), 5, 5, density, &mut rng)
        .expect("Failed to compute accumulator");

    // Every plotted point is the origin, which lands in the center cell
    // of an odd-sized grid; burn-in iterations are not plotted
    let expected = (density * 5 * 5) as u64;
    assert_eq!(
        accumulator.hit_count(2, 2).expect("Cell out of range"),
        expected
    );

    for x in 0..5 {
        for y in 0..5 {
            if (x, y) != (2, 2) {
                assert_eq!(accumulator.hit_count(x, y).expect("Cell out of range"), 0);
            }
        }
    }

    assert!(
        (accumulator.intensity(2, 2).expect("Cell out of range") - 1.0).abs() < f64::EPSILON
    );
}

#[test]
fn test_partial_computation_matches_single_pass() {
    use flamegen::flame::FlameAccumulatorBuilder;

    let flame = stationary_flame();

    let mut split = FlameAccumulatorBuilder::new(unit_frame(), 5, 5).expect("Failed to build");
    let mut rng = StdRng::seed_from_u64(7);
    flame.compute_partial(50, &mut split, &mut rng);
    flame.compute_partial(50, &mut split, &mut rng);

    let mut single = FlameAccumulatorBuilder::new(unit_frame(), 5, 5).expect("Failed to build");
    let mut rng = StdRng::seed_from_u64(7);
    flame.compute_partial(100, &mut single, &mut rng);

    let split = split.build();
    let single = single.build();
    for x in 0..5 {
        for y in 0..5 {
            assert_eq!(
                split.hit_count(x, y).expect("Cell out of range"),
                single.hit_count(x, y).expect("Cell out of range"),
                "accumulators diverge at cell ({x}, {y})"
            );
        }
    }
}

#[test]
fn test_zero_weights_are_skipped() {
    // Spherical divides by r², so the origin maps to NaN; with a zero
    // weight that variation must not taint the sum
    let transformation = FlameTransformation::new(
        AffineTransformation::IDENTITY,
        [1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    );
    let image = transformation.transform_point(Point::ORIGIN);
    assert_eq!(image, Point::ORIGIN);

    // With a nonzero spherical weight the non-finite result flows through
    let tainted = FlameTransformation::new(
        AffineTransformation::IDENTITY,
        [0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
    );
    let warped = tainted.transform_point(Point::ORIGIN);
    assert!(warped.x.is_nan() && warped.y.is_nan());
}

#[test]
fn test_variation_formulas() {
    let p = Point::new(0.5, 0.25);
    let r2 = p.r() * p.r();

    let spherical = Variation::Spherical.transform_point(p);
    assert!((spherical.x - p.x / r2).abs() < f64::EPSILON);
    assert!((spherical.y - p.y / r2).abs() < f64::EPSILON);

    let horseshoe = Variation::Horseshoe.transform_point(p);
    assert!((horseshoe.x - (p.x - p.y) * (p.x + p.y) / p.r()).abs() < f64::EPSILON);
    assert!((horseshoe.y - 2.0 * p.x * p.y / p.r()).abs() < f64::EPSILON);

    let bubble = Variation::Bubble.transform_point(p);
    assert!((bubble.x - 4.0 * p.x / (r2 + 4.0)).abs() < f64::EPSILON);
    assert!((bubble.y - 4.0 * p.y / (r2 + 4.0)).abs() < f64::EPSILON);

    assert_eq!(Variation::Linear.transform_point(p), p);
}

#[test]
fn test_builder_round_trips_and_validates_indices() {
    let mut builder = FlameBuilder::new(&stationary_flame());
    assert_eq!(builder.transformation_count(), 1);

    builder.add_transformation(FlameTransformation::new(
        AffineTransformation::new_scaling(0.5, 0.5),
        [0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
    ));
    assert_eq!(builder.transformation_count(), 2);

    builder
        .set_variation_weight(1, Variation::Swirl, 0.25)
        .expect("Failed to set weight");
    assert!(
        (builder
            .variation_weight(1, Variation::Swirl)
            .expect("Failed to read weight")
            - 0.25)
            .abs()
            < f64::EPSILON
    );

    let rotation = AffineTransformation::new_rotation(0.5);
    builder
        .set_affine_transformation(0, rotation)
        .expect("Failed to set affine part");
    assert_eq!(
        builder
            .affine_transformation(0)
            .expect("Failed to read affine part"),
        rotation
    );

    // Out-of-range indices are rejected before any mutation
    assert!(builder.remove_transformation(2).is_err());
    assert!(builder.affine_transformation(5).is_err());
    assert!(builder.variation_weight(2, Variation::Linear).is_err());
    assert!(
        builder
            .set_variation_weight(9, Variation::Bubble, 1.0)
            .is_err()
    );

    builder
        .remove_transformation(0)
        .expect("Failed to remove transformation");
    assert_eq!(builder.build().transformation_count(), 1);
}

#[test]
fn test_presets_carry_valid_seed_data() {
    use flamegen::flame::FlamePreset;

    for preset in FlamePreset::ALL {
        let flame = preset.flame();
        assert!(
            flame.transformation_count() >= 2,
            "{} should ship with at least two transformations",
            preset.name()
        );

        let frame = preset.reference_frame().expect("Invalid reference frame");
        assert!(frame.width() > 0.0 && frame.height() > 0.0);
    }

    assert_eq!(FlamePreset::Turbulence.flame().transformation_count(), 3);
    assert_eq!(
        FlamePreset::SierpinskiCarpet.flame().transformation_count(),
        8
    );
    assert_eq!(FlamePreset::DragonCurve.flame().transformation_count(), 2);
}

#[test]
fn test_variation_catalog_indices_are_stable() {
    for (position, variation) in Variation::ALL.iter().enumerate() {
        assert_eq!(variation.index(), position);
    }
    assert_eq!(Variation::Swirl.name(), "Swirl");
}
