use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use crate::foundation::core::Point;
use crate::foundation::error::{GlyphcycleError, GlyphcycleResult};

/// One frequency-domain coefficient of a transformed outline.
///
/// `magnitude` and `phase` are the polar form of `real + i·imag`; magnitude is
/// the epicycle's radius and phase its starting angle. Frequency 0 is the DC
/// term, equal to the path's centroid. It is always present and excluded from
/// the animated arms at render time only, never at selection time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coefficient {
    /// Signed frequency bin, in `[-N/2, N/2)`.
    pub frequency: i64,
    /// Real part, normalized by the sample count.
    pub real: f64,
    /// Imaginary part, normalized by the sample count.
    pub imag: f64,
    /// `sqrt(real² + imag²)`.
    pub magnitude: f64,
    /// `atan2(imag, real)`.
    pub phase: f64,
}

impl Coefficient {
    /// Build a coefficient from its rectangular form, deriving polar fields.
    pub fn from_parts(frequency: i64, real: f64, imag: f64) -> Self {
        Self {
            frequency,
            real,
            imag,
            magnitude: (real * real + imag * imag).sqrt(),
            phase: imag.atan2(real),
        }
    }
}

/// Reinterpret 2D points as complex samples (`re = x`, `im = y`).
pub fn points_to_samples(points: &[Point]) -> Vec<Complex<f64>> {
    points.iter().map(|p| Complex::new(p.x, p.y)).collect()
}

/// Forward DFT over a complex sample sequence.
///
/// Output coefficients are normalized by the sample count, so summing every
/// coefficient's contribution at a sample instant reproduces the original
/// sample without further scaling (see [`reconstruct_point`]).
///
/// The output ordering alternates between the low and high halves of the raw
/// transform, which interleaves positive and negative frequencies of equal
/// rank. Only iteration order is affected; each coefficient's value depends
/// solely on its own bin.
///
/// An empty input yields an empty output. A sample count that is not a power
/// of two is a validation error; callers round up before resampling.
pub fn fourier_coefficients(samples: &[Complex<f64>]) -> GlyphcycleResult<Vec<Coefficient>> {
    if samples.is_empty() {
        return Ok(Vec::new());
    }
    let n = samples.len();
    if !n.is_power_of_two() {
        return Err(GlyphcycleError::validation(format!(
            "sample count must be a power of two, got {n}"
        )));
    }

    let mut buffer = samples.to_vec();
    let mut planner = FftPlanner::<f64>::new();
    planner.plan_fft_forward(n).process(&mut buffer);

    let scale = 1.0 / (n as f64);
    let mut coefficients = Vec::with_capacity(n);
    for i in 0..n {
        // Alternately pick from the front and back halves so frequencies come
        // out as 0, -1, 1, -2, 2, ...
        let j = if i % 2 == 0 { i / 2 } else { n - (i + 1) / 2 };
        let frequency = (((j + n / 2) % n) as i64) - ((n / 2) as i64);
        coefficients.push(Coefficient::from_parts(
            frequency,
            buffer[j].re * scale,
            buffer[j].im * scale,
        ));
    }
    Ok(coefficients)
}

/// Half-spectrum DFT of a real-valued wave.
///
/// Only the first `N/2` bins are returned (the rest mirror them), with
/// amplitudes doubled to fold the mirrored half back in.
pub fn real_fourier_coefficients(samples: &[f64]) -> GlyphcycleResult<Vec<Coefficient>> {
    if samples.is_empty() {
        return Ok(Vec::new());
    }
    let n = samples.len();
    if !n.is_power_of_two() {
        return Err(GlyphcycleError::validation(format!(
            "sample count must be a power of two, got {n}"
        )));
    }

    let mut buffer: Vec<Complex<f64>> = samples.iter().map(|&v| Complex::new(v, 0.0)).collect();
    let mut planner = FftPlanner::<f64>::new();
    planner.plan_fft_forward(n).process(&mut buffer);

    let scale = 2.0 / (n as f64);
    Ok((0..n / 2)
        .map(|i| Coefficient::from_parts(i as i64, buffer[i].re * scale, buffer[i].im * scale))
        .collect())
}

/// Evaluate the Fourier series at cycle fraction `t` in mathematical
/// coordinates (y up).
///
/// With every coefficient of a transform included, `t = i/N` lands back on
/// resampled point `i` up to floating-point error. The animator applies the
/// screen-space y flip on top of this; tests and reconstruction use this form
/// directly.
pub fn reconstruct_point(coefficients: &[Coefficient], t: f64) -> Point {
    let mut x = 0.0;
    let mut y = 0.0;
    for c in coefficients {
        let angle = std::f64::consts::TAU * (c.frequency as f64) * t + c.phase;
        x += c.magnitude * angle.cos();
        y += c.magnitude * angle.sin();
    }
    Point::new(x, y)
}

#[cfg(test)]
#[path = "../../tests/unit/fourier/dft.rs"]
mod tests;
