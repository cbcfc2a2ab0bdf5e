use kurbo::{BezPath, ParamCurve, ParamCurveArclen, PathSeg};

use crate::foundation::core::Point;
use crate::foundation::error::{GlyphcycleError, GlyphcycleResult};
use crate::path::segment::PathSegment;

/// Parameter steps used when sampling a cubic bezier segment.
const CUBIC_SAMPLES: usize = 15;
/// Parameter steps used when sampling a quadratic bezier segment.
const QUAD_SAMPLES: usize = 10;
/// Arc-length accuracy for the [`SampleStrategy::ArcLength`] walk.
const ARCLEN_ACCURACY: f64 = 1e-4;

/// How a segment list is turned into a point sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SampleStrategy {
    /// Sample each curve at a fixed number of parameter steps.
    ///
    /// Point density follows segment count, not geometry, so long segments are
    /// sampled as sparsely as short ones.
    #[default]
    FixedSteps,
    /// Walk the whole path at uniform arc-length offsets, with an adaptive
    /// sample count of `max(100, floor(length / 2))`.
    ArcLength,
}

/// Convert absolute path segments into an ordered point sequence.
///
/// Fails with a geometry error when the path yields no points: there is no
/// meaningful shape to transform.
pub fn sample_path(
    segments: &[PathSegment],
    strategy: SampleStrategy,
) -> GlyphcycleResult<Vec<Point>> {
    let points = match strategy {
        SampleStrategy::FixedSteps => sample_fixed_steps(segments),
        SampleStrategy::ArcLength => sample_arc_length(segments)?,
    };
    if points.is_empty() {
        return Err(GlyphcycleError::geometry(
            "no points could be extracted from the path",
        ));
    }
    Ok(points)
}

/// Evaluate a cubic bezier at `t` via the Bernstein basis.
fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let mt3 = mt2 * mt;
    let t2 = t * t;
    let t3 = t2 * t;
    Point::new(
        mt3 * p0.x + 3.0 * mt2 * t * p1.x + 3.0 * mt * t2 * p2.x + t3 * p3.x,
        mt3 * p0.y + 3.0 * mt2 * t * p1.y + 3.0 * mt * t2 * p2.y + t3 * p3.y,
    )
}

/// Evaluate a quadratic bezier at `t` via the Bernstein basis.
fn quad_point(p0: Point, p1: Point, p2: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let t2 = t * t;
    Point::new(
        mt2 * p0.x + 2.0 * mt * t * p1.x + t2 * p2.x,
        mt2 * p0.y + 2.0 * mt * t * p1.y + t2 * p2.y,
    )
}

/// Emit `steps` samples of a curve, skipping `t = 0`.
///
/// The first sample is always the current point, which the caller has already
/// emitted as the previous segment's endpoint.
fn push_curve_samples(out: &mut Vec<Point>, steps: usize, eval: impl Fn(f64) -> Point) {
    for i in 1..=steps {
        out.push(eval(i as f64 / steps as f64));
    }
}

fn sample_fixed_steps(segments: &[PathSegment]) -> Vec<Point> {
    let mut points: Vec<Point> = Vec::new();
    let mut current = Point::ORIGIN;
    let mut subpath_start = Point::ORIGIN;
    // Last control point of the previous curve segment, for smooth-curve
    // reflection. Non-curve segments set it to the current point, so a smooth
    // segment after a line reflects the current point onto itself.
    let mut last_control = Point::ORIGIN;

    for seg in segments {
        match *seg {
            PathSegment::MoveTo { x, y } => {
                current = Point::new(x, y);
                subpath_start = current;
                last_control = current;
                points.push(current);
            }
            PathSegment::LineTo { x, y } => {
                current = Point::new(x, y);
                last_control = current;
                points.push(current);
            }
            PathSegment::HorizontalLineTo { x } => {
                current.x = x;
                last_control = current;
                points.push(current);
            }
            PathSegment::VerticalLineTo { y } => {
                current.y = y;
                last_control = current;
                points.push(current);
            }
            PathSegment::CubicCurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let (p1, p2, p3) = (Point::new(x1, y1), Point::new(x2, y2), Point::new(x, y));
                let p0 = current;
                push_curve_samples(&mut points, CUBIC_SAMPLES, |t| {
                    cubic_point(p0, p1, p2, p3, t)
                });
                last_control = p2;
                current = p3;
            }
            PathSegment::SmoothCubicCurveTo { x2, y2, x, y } => {
                let p1 = reflect(last_control, current);
                let (p2, p3) = (Point::new(x2, y2), Point::new(x, y));
                let p0 = current;
                push_curve_samples(&mut points, CUBIC_SAMPLES, |t| {
                    cubic_point(p0, p1, p2, p3, t)
                });
                last_control = p2;
                current = p3;
            }
            PathSegment::QuadraticCurveTo { x1, y1, x, y } => {
                let (p1, p2) = (Point::new(x1, y1), Point::new(x, y));
                let p0 = current;
                push_curve_samples(&mut points, QUAD_SAMPLES, |t| quad_point(p0, p1, p2, t));
                last_control = p1;
                current = p2;
            }
            PathSegment::SmoothQuadraticCurveTo { x, y } => {
                let p1 = reflect(last_control, current);
                let p2 = Point::new(x, y);
                let p0 = current;
                push_curve_samples(&mut points, QUAD_SAMPLES, |t| quad_point(p0, p1, p2, t));
                last_control = p1;
                current = p2;
            }
            PathSegment::ArcTo { x, y, .. } => {
                // Endpoint-only approximation; see the variant docs.
                current = Point::new(x, y);
                last_control = current;
                points.push(current);
            }
            PathSegment::ClosePath => {
                // The loop is closed back to the path's very first point (not
                // the subpath start) so the traced outline forms one cycle;
                // the current point still follows SVG close semantics.
                if let Some(&first) = points.first() {
                    points.push(first);
                }
                current = subpath_start;
                last_control = current;
            }
        }
    }

    points
}

/// Reflection of `control` about `current`.
fn reflect(control: Point, current: Point) -> Point {
    Point::new(2.0 * current.x - control.x, 2.0 * current.y - control.y)
}

/// Walk the path at uniform arc-length offsets.
fn sample_arc_length(segments: &[PathSegment]) -> GlyphcycleResult<Vec<Point>> {
    let path = to_bez_path(segments);
    let segs: Vec<PathSeg> = path.segments().collect();
    if segs.is_empty() {
        return Ok(Vec::new());
    }

    let lengths: Vec<f64> = segs.iter().map(|s| s.arclen(ARCLEN_ACCURACY)).collect();
    let total: f64 = lengths.iter().sum();
    if total <= 0.0 {
        return Ok(Vec::new());
    }

    let num_samples = (total / 2.0).floor().max(100.0) as usize;
    let mut points = Vec::with_capacity(num_samples + 1);

    let mut seg_idx = 0;
    let mut consumed = 0.0;
    for i in 0..=num_samples {
        let offset = total * (i as f64) / (num_samples as f64);
        // Offsets are monotonic, so the segment cursor only moves forward.
        while seg_idx + 1 < segs.len() && offset > consumed + lengths[seg_idx] {
            consumed += lengths[seg_idx];
            seg_idx += 1;
        }
        let local = (offset - consumed).clamp(0.0, lengths[seg_idx]);
        let t = if lengths[seg_idx] > 0.0 {
            segs[seg_idx].inv_arclen(local, ARCLEN_ACCURACY)
        } else {
            0.0
        };
        points.push(segs[seg_idx].eval(t));
    }

    Ok(points)
}

/// Lower absolute segments into a `kurbo::BezPath`.
///
/// Smooth variants are resolved to explicit control points here so kurbo sees
/// plain cubics/quadratics; arcs keep the endpoint-only approximation.
fn to_bez_path(segments: &[PathSegment]) -> BezPath {
    let mut path = BezPath::new();
    let mut current = Point::ORIGIN;
    let mut subpath_start = Point::ORIGIN;
    let mut last_control = Point::ORIGIN;
    let mut started = false;

    // kurbo panics on drawing commands before the first MoveTo; real glyph
    // data always starts with one, but tolerate stragglers.
    let mut ensure_start = |path: &mut BezPath, started: &mut bool, at: Point| {
        if !*started {
            path.move_to(at);
            *started = true;
        }
    };

    for seg in segments {
        match *seg {
            PathSegment::MoveTo { x, y } => {
                current = Point::new(x, y);
                subpath_start = current;
                last_control = current;
                path.move_to(current);
                started = true;
            }
            PathSegment::LineTo { x, y } => {
                ensure_start(&mut path, &mut started, current);
                current = Point::new(x, y);
                last_control = current;
                path.line_to(current);
            }
            PathSegment::HorizontalLineTo { x } => {
                ensure_start(&mut path, &mut started, current);
                current.x = x;
                last_control = current;
                path.line_to(current);
            }
            PathSegment::VerticalLineTo { y } => {
                ensure_start(&mut path, &mut started, current);
                current.y = y;
                last_control = current;
                path.line_to(current);
            }
            PathSegment::CubicCurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                ensure_start(&mut path, &mut started, current);
                let (p1, p2, p3) = (Point::new(x1, y1), Point::new(x2, y2), Point::new(x, y));
                path.curve_to(p1, p2, p3);
                last_control = p2;
                current = p3;
            }
            PathSegment::SmoothCubicCurveTo { x2, y2, x, y } => {
                ensure_start(&mut path, &mut started, current);
                let p1 = reflect(last_control, current);
                let (p2, p3) = (Point::new(x2, y2), Point::new(x, y));
                path.curve_to(p1, p2, p3);
                last_control = p2;
                current = p3;
            }
            PathSegment::QuadraticCurveTo { x1, y1, x, y } => {
                ensure_start(&mut path, &mut started, current);
                let (p1, p2) = (Point::new(x1, y1), Point::new(x, y));
                path.quad_to(p1, p2);
                last_control = p1;
                current = p2;
            }
            PathSegment::SmoothQuadraticCurveTo { x, y } => {
                ensure_start(&mut path, &mut started, current);
                let p1 = reflect(last_control, current);
                let p2 = Point::new(x, y);
                path.quad_to(p1, p2);
                last_control = p1;
                current = p2;
            }
            PathSegment::ArcTo { x, y, .. } => {
                ensure_start(&mut path, &mut started, current);
                current = Point::new(x, y);
                last_control = current;
                path.line_to(current);
            }
            PathSegment::ClosePath => {
                if started {
                    path.close_path();
                }
                current = subpath_start;
                last_control = current;
            }
        }
    }

    path
}

#[cfg(test)]
#[path = "../../tests/unit/path/sample.rs"]
mod tests;
