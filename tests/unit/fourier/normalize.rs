use super::*;

#[test]
fn square_maps_to_unit_span_with_flipped_y() {
    let square = [
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ];
    let out = normalize_points(&square);
    // Top-left in path coordinates becomes top-left in y-up coordinates.
    assert_eq!(out[0], Point::new(-1.0, 1.0));
    assert_eq!(out[1], Point::new(1.0, 1.0));
    assert_eq!(out[2], Point::new(1.0, -1.0));
    assert_eq!(out[3], Point::new(-1.0, -1.0));
}

#[test]
fn aspect_ratio_is_preserved() {
    let rect = [
        Point::new(0.0, 0.0),
        Point::new(20.0, 0.0),
        Point::new(20.0, 10.0),
        Point::new(0.0, 10.0),
    ];
    let out = normalize_points(&rect);
    // Longer axis spans 2, shorter spans 1, same uniform scale.
    assert_eq!(out[0], Point::new(-1.0, 0.5));
    assert_eq!(out[2], Point::new(1.0, -0.5));
}

#[test]
fn second_application_changes_no_bounds() {
    // One application centers and bounds the shape; a second one finds a box
    // already centered at the origin with span 2, so scale and translation
    // are both identity (only the y flip reapplies).
    let points = [
        Point::new(3.0, 7.0),
        Point::new(12.0, -4.0),
        Point::new(-8.0, 2.5),
    ];
    let once = normalize_points(&points);
    let twice = normalize_points(&once);
    for (a, b) in once.iter().zip(&twice) {
        assert!((a.x - b.x).abs() < 1e-12, "{a:?} vs {b:?}");
        assert!((a.y + b.y).abs() < 1e-12, "{a:?} vs {b:?}");
    }
}

#[test]
fn idempotent_on_symmetric_shapes() {
    // With every point on the horizontal axis the reapplied flip is
    // invisible and the operation is a fixpoint.
    let points = [
        Point::new(-4.0, 0.0),
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
    ];
    let once = normalize_points(&points);
    let twice = normalize_points(&once);
    assert_eq!(once, twice);
}

#[test]
fn degenerate_box_only_translates() {
    let out = normalize_points(&[Point::new(5.0, 5.0), Point::new(5.0, 5.0)]);
    assert_eq!(out, vec![Point::ORIGIN, Point::ORIGIN]);
}

#[test]
fn empty_input_stays_empty() {
    assert!(normalize_points(&[]).is_empty());
}
