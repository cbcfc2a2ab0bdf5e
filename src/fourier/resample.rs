use crate::foundation::core::Point;

/// Resample a closed polyline to exactly `num_samples` points.
///
/// The input is treated as closed: the last point connects back to the first.
/// Samples are spaced by traversal-index fraction, not true arc length, so
/// densely subdivided regions of the input attract proportionally more output
/// samples. Feeding this arc-length-sampled input (see
/// `SampleStrategy::ArcLength`) makes the spacing uniform in geometry too.
///
/// `num_samples` must be a power of two before the result is fed to the
/// transform; this function does not enforce that (the transform does), and
/// callers round up with `usize::next_power_of_two`. An empty input yields an
/// empty output.
///
/// Sample 0 falls exactly on `points[0]`.
pub fn resample_closed(points: &[Point], num_samples: usize) -> Vec<Point> {
    if points.is_empty() {
        return Vec::new();
    }

    let len = points.len();
    let mut resampled = Vec::with_capacity(num_samples);
    for i in 0..num_samples {
        let position = (len as f64) * (i as f64) / (num_samples as f64);
        let index = position.floor() as usize;
        let next_index = (index + 1) % len;
        let amt = position - (index as f64);
        resampled.push(points[index].lerp(points[next_index], amt));
    }
    resampled
}

#[cfg(test)]
#[path = "../../tests/unit/fourier/resample.rs"]
mod tests;
