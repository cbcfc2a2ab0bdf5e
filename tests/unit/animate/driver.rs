use super::*;

fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0).unwrap()
}

fn coefficients() -> Vec<Coefficient> {
    vec![
        Coefficient::from_parts(0, 1.0, 0.0),
        Coefficient::from_parts(1, 0.5, 0.0),
        Coefficient::from_parts(-1, 0.25, 0.0),
    ]
}

fn ready_driver() -> CompositionDriver {
    let mut driver = CompositionDriver::new(viewport(), AnimatorOptions::default()).unwrap();
    driver.add_glyph("a", Point::new(100.0, 100.0)).unwrap();
    driver.resolve_glyph("a", Ok(coefficients())).unwrap();
    driver
}

#[test]
fn options_are_validated_up_front() {
    let bad = AnimatorOptions {
        period: Duration::ZERO,
        ..AnimatorOptions::default()
    };
    assert!(CompositionDriver::new(viewport(), bad).is_err());

    let bad = AnimatorOptions {
        scale: 0.0,
        ..AnimatorOptions::default()
    };
    assert!(CompositionDriver::new(viewport(), bad).is_err());

    let bad = AnimatorOptions {
        coefficients_used: 0,
        ..AnimatorOptions::default()
    };
    assert!(CompositionDriver::new(viewport(), bad).is_err());
}

#[test]
fn duplicate_glyph_ids_are_rejected() {
    let mut driver = CompositionDriver::new(viewport(), AnimatorOptions::default()).unwrap();
    driver.add_glyph("a", Point::ORIGIN).unwrap();
    let err = driver.add_glyph("a", Point::ORIGIN).unwrap_err();
    assert!(err.to_string().contains("already registered"));
}

#[test]
fn start_refuses_until_every_glyph_is_ready() {
    let mut driver = CompositionDriver::new(viewport(), AnimatorOptions::default()).unwrap();
    driver.add_glyph("a", Point::ORIGIN).unwrap();
    driver.add_glyph("b", Point::ORIGIN).unwrap();
    driver.resolve_glyph("a", Ok(coefficients())).unwrap();

    assert!(!driver.all_ready());
    assert_eq!(driver.pending_glyphs(), vec!["b"]);
    // The refusal names the glyph holding the barrier.
    let err = driver.start().unwrap_err();
    assert!(err.to_string().contains("b"), "{err}");

    driver.resolve_glyph("b", Ok(coefficients())).unwrap();
    assert!(driver.all_ready());
    driver.start().unwrap();
}

#[test]
fn resolution_misuse_is_an_error() {
    let mut driver = CompositionDriver::new(viewport(), AnimatorOptions::default()).unwrap();
    driver.add_glyph("a", Point::ORIGIN).unwrap();

    assert!(driver.resolve_glyph("nope", Ok(coefficients())).is_err());
    driver.resolve_glyph("a", Ok(coefficients())).unwrap();
    let err = driver.resolve_glyph("a", Ok(coefficients())).unwrap_err();
    assert!(err.to_string().contains("already resolved"));
}

#[test]
fn failed_glyphs_are_recorded_not_silent() {
    let mut driver = CompositionDriver::new(viewport(), AnimatorOptions::default()).unwrap();
    driver.add_glyph("good", Point::ORIGIN).unwrap();
    driver.add_glyph("bad", Point::ORIGIN).unwrap();
    driver.resolve_glyph("good", Ok(coefficients())).unwrap();
    driver
        .resolve_glyph("bad", Err(GlyphcycleError::extraction("no path element")))
        .unwrap();

    let failed = driver.failed_glyphs();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].0, "bad");
    assert!(failed[0].1.to_string().contains("no path element"));

    // The full barrier still refuses, but the explicit subset start runs.
    assert!(driver.start().is_err());
    driver.start_ready_subset().unwrap();
    let scene = driver.tick(Duration::ZERO).unwrap();
    assert_eq!(scene.glyphs.len(), 1);
    assert_eq!(scene.glyphs[0].id, "good");
}

#[test]
fn subset_start_still_waits_for_loading_glyphs() {
    let mut driver = CompositionDriver::new(viewport(), AnimatorOptions::default()).unwrap();
    driver.add_glyph("a", Point::ORIGIN).unwrap();
    let err = driver.start_ready_subset().unwrap_err();
    assert!(err.to_string().contains("still loading"));
}

#[test]
fn tick_requires_a_running_animation() {
    let mut driver = ready_driver();
    assert!(driver.tick(Duration::ZERO).is_err());

    driver.start().unwrap();
    driver.tick(Duration::ZERO).unwrap();

    driver.stop();
    driver.stop(); // idempotent
    let err = driver.tick(Duration::ZERO).unwrap_err();
    assert!(err.to_string().contains("stopped"));
}

#[test]
fn elapsed_time_wraps_at_the_period() {
    let options = AnimatorOptions::default();
    let mut driver = ready_driver();
    driver.start().unwrap();

    let quarter = options.period / 4;
    let a = driver.tick(quarter).unwrap();
    let b = driver.tick(options.period + quarter).unwrap();
    let (pa, pb) = (a.glyphs[0].frame.pen, b.glyphs[0].frame.pen);
    assert!((pa.x - pb.x).abs() < 1e-9);
    assert!((pa.y - pb.y).abs() < 1e-9);
}

#[test]
fn resize_moves_the_viewport_but_not_the_anchors() {
    let mut driver = ready_driver();
    driver.start().unwrap();
    let before = driver.tick(Duration::ZERO).unwrap();

    driver.resize(Viewport::new(1920.0, 1080.0).unwrap());
    assert_eq!(driver.viewport().width, 1920.0);

    let after = driver.tick(Duration::ZERO).unwrap();
    assert_eq!(after.viewport.width, 1920.0);
    assert_eq!(
        before.glyphs[0].frame.anchor,
        after.glyphs[0].frame.anchor
    );
}
