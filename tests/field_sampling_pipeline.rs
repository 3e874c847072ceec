use cymatica::core::blend::compute_blend;
use cymatica::core::catalog::ModeCatalog;
use cymatica::core::mode::PlateShape;
use cymatica::core::sampler::FieldSampler;
use cymatica::core::summary::summarize;

#[test]
fn identical_parameters_give_identical_point_sets() {
    let mut cat = ModeCatalog::build(PlateShape::Square);
    cat.set_plate_size(0.9);
    let blend = compute_blend(PlateShape::Square, 1234.5, 0.9, &cat);
    let mut sampler = FieldSampler::new(160);
    let first = sampler.sample(&blend, &cat, 0.08);
    let second = sampler.sample(&blend, &cat, 0.08);
    assert_eq!(first, second);
}

#[test]
fn every_frame_in_a_sweep_is_renderable() {
    let mut cat = ModeCatalog::build(PlateShape::Circle);
    cat.set_plate_size(1.0);
    let mut sampler = FieldSampler::new(96);
    for step in 0..40 {
        let hz = 20.0 * (1000.0f32).powf(step as f32 / 39.0);
        let blend = compute_blend(PlateShape::Circle, hz, 1.0, &cat);
        let field = sampler.sample(&blend, &cat, 0.08);
        assert!(field.nodal_points.len() <= 96 * 96);
        assert!(field.max_abs.is_finite());
        // A genuine mode blend always leaves some near-zero locus.
        assert!(!field.nodal_points.is_empty(), "no nodal points at {hz} Hz");
    }
}

#[test]
fn summary_and_field_agree_on_the_blend() {
    let mut cat = ModeCatalog::build(PlateShape::Square);
    cat.set_plate_size(1.1);
    let blend = compute_blend(PlateShape::Square, 440.0, 1.1, &cat);
    let summary = summarize(&blend, &cat);
    let pair = blend.pair.unwrap();
    let primary = summary.primary.unwrap();
    let secondary = summary.secondary.unwrap();
    assert!(primary.weight >= secondary.weight);
    assert!(primary.index == pair.i0 || primary.index == pair.i1);
    assert!((primary.weight + secondary.weight - 1.0).abs() < 1e-6);
}

#[test]
fn square_and_circle_share_the_same_pipeline_shape() {
    for shape in [PlateShape::Square, PlateShape::Circle] {
        let cat = ModeCatalog::build(shape);
        let blend = compute_blend(shape, 880.0, 1.0, &cat);
        let mut sampler = FieldSampler::new(64);
        let field = sampler.sample(&blend, &cat, 0.08);
        assert!(field.max_abs > 0.0, "{shape}: blended field is not degenerate");
        assert!(!field.nodal_points.is_empty());
    }
}
