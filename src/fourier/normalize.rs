use crate::foundation::core::Point;

/// Rescale and recenter a point sequence into the canonical frame.
///
/// The output is centered at the origin and uniformly scaled so the longer
/// axis of the bounding box spans exactly 2 (aspect ratio preserved). The
/// vertical axis is flipped: path data has y increasing downward, while the
/// angle math of the animator treats y as increasing upward. Callers must
/// apply this before resampling.
///
/// Degenerate inputs keep their shape: an empty slice maps to an empty vector
/// and a single repeated point is only translated (scale falls back to 1).
pub fn normalize_points(points: &[Point]) -> Vec<Point> {
    if points.is_empty() {
        return Vec::new();
    }

    let mut min = points[0];
    let mut max = points[0];
    for p in points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }

    let center = Point::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0);
    let max_dimension = (max.x - min.x).max(max.y - min.y);
    let scale = if max_dimension > 0.0 {
        2.0 / max_dimension
    } else {
        1.0
    };

    points
        .iter()
        .map(|p| Point::new((p.x - center.x) * scale, -(p.y - center.y) * scale))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/fourier/normalize.rs"]
mod tests;
