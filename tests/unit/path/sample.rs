use super::*;
use crate::path::segment::parse_path_data;

fn fixed(d: &str) -> Vec<Point> {
    sample_path(&parse_path_data(d).unwrap(), SampleStrategy::FixedSteps).unwrap()
}

#[test]
fn straight_segments_emit_endpoints_only() {
    let points = fixed("M0 0 L10 0 L10 10 L0 10 Z");
    assert_eq!(
        points,
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(0.0, 0.0),
        ]
    );
}

#[test]
fn horizontal_and_vertical_lines_keep_the_other_axis() {
    let points = fixed("M1 2 H5 V7");
    assert_eq!(points[1], Point::new(5.0, 2.0));
    assert_eq!(points[2], Point::new(5.0, 7.0));
}

#[test]
fn cubic_curve_emits_fixed_step_samples_without_the_start() {
    let points = fixed("M0 0 C0 10 10 10 10 0");
    // Move point plus 15 curve samples, t = 0 skipped.
    assert_eq!(points.len(), 1 + 15);
    assert_eq!(*points.last().unwrap(), Point::new(10.0, 0.0));
    // Symmetric control polygon makes the curve symmetric about x = 5.
    let mid = points[1 + 7]; // t ≈ 0.53, near the apex
    assert!(mid.y > 5.0);
}

#[test]
fn quadratic_curve_uses_fewer_samples() {
    let points = fixed("M0 0 Q5 10 10 0");
    assert_eq!(points.len(), 1 + 10);
    assert_eq!(*points.last().unwrap(), Point::new(10.0, 0.0));
}

#[test]
fn smooth_cubic_reflects_the_previous_control_point() {
    let points = fixed("M0 0 C0 10 10 10 10 0 S20 -10 20 0");
    assert_eq!(points.len(), 1 + 15 + 15);
    // The reflected control of (10, 10) about (10, 0) is (10, -10); check the
    // first smooth sample against a direct Bernstein evaluation.
    let expected = cubic_point(
        Point::new(10.0, 0.0),
        Point::new(10.0, -10.0),
        Point::new(20.0, -10.0),
        Point::new(20.0, 0.0),
        1.0 / 15.0,
    );
    let got = points[1 + 15];
    assert!((got.x - expected.x).abs() < 1e-12);
    assert!((got.y - expected.y).abs() < 1e-12);
}

#[test]
fn smooth_after_line_reflects_the_current_point() {
    let points = fixed("M0 0 L10 0 S20 10 20 0");
    // No previous curve: the first control collapses onto (10, 0).
    let expected = cubic_point(
        Point::new(10.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(20.0, 10.0),
        Point::new(20.0, 0.0),
        1.0 / 15.0,
    );
    let got = points[2];
    assert!((got.x - expected.x).abs() < 1e-12);
    assert!((got.y - expected.y).abs() < 1e-12);
}

#[test]
fn arc_is_approximated_by_its_endpoint() {
    let points = fixed("M0 0 A5 5 0 0 1 10 0");
    assert_eq!(points, vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
}

#[test]
fn close_path_returns_to_the_first_point() {
    let points = fixed("M3 4 L10 4 Z");
    assert_eq!(*points.last().unwrap(), Point::new(3.0, 4.0));
}

#[test]
fn pointless_path_is_a_geometry_error() {
    let err = sample_path(&[PathSegment::ClosePath], SampleStrategy::FixedSteps).unwrap_err();
    assert!(err.to_string().contains("geometry error"));
}

#[test]
fn arc_length_strategy_spaces_samples_uniformly() {
    let segments = parse_path_data("M0 0 H10 V10 H0 Z").unwrap();
    let points = sample_path(&segments, SampleStrategy::ArcLength).unwrap();
    // Perimeter 40 is short, so the adaptive count bottoms out at 100.
    assert_eq!(points.len(), 101);
    assert_eq!(points[0], Point::new(0.0, 0.0));
    // Every sample lies on the square's boundary.
    for p in &points {
        let on_boundary = (p.x.abs() < 1e-6 || (p.x - 10.0).abs() < 1e-6)
            || (p.y.abs() < 1e-6 || (p.y - 10.0).abs() < 1e-6);
        assert!(on_boundary, "{p:?} is off the square outline");
    }
    // Quarter of the way along the perimeter is the first corner.
    let quarter = points[25];
    assert!((quarter.x - 10.0).abs() < 1e-6);
    assert!(quarter.y.abs() < 1e-6);
}

#[test]
fn arc_length_strategy_rejects_zero_length_paths() {
    let err = sample_path(
        &[PathSegment::MoveTo { x: 1.0, y: 1.0 }],
        SampleStrategy::ArcLength,
    )
    .unwrap_err();
    assert!(err.to_string().contains("geometry error"));
}
