//! The glyph pipeline: SVG text in, normalized Fourier coefficients out.
//!
//! Stages run in fixed order: extract the path data, parse it to absolute
//! segments, sample to points, normalize, resample to a power-of-two count,
//! transform. Each stage's failure is local to the glyph being processed.

use std::path::Path;

use crate::foundation::core::Point;
use crate::foundation::error::{GlyphcycleError, GlyphcycleResult};
use crate::fourier::codegen::round_coefficient;
use crate::fourier::dft::{fourier_coefficients, points_to_samples, Coefficient};
use crate::fourier::normalize::normalize_points;
use crate::fourier::resample::resample_closed;
use crate::path::extract::extract_path_data;
use crate::path::sample::{sample_path, SampleStrategy};
use crate::path::segment::parse_path_data;

/// Knobs for one glyph's load-and-transform run.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlyphOptions {
    /// Desired resample count; rounded up to the next power of two.
    pub target_points: usize,
    /// Decimal places kept on coefficient real/imag/magnitude parts.
    pub precision: u32,
    /// Whether to canonicalize points before resampling. Skipping this keeps
    /// raw path coordinates, which is only useful for diagnostics.
    pub normalize: bool,
    /// How the glyph outline is sampled from its segments.
    pub strategy: SampleStrategy,
}

impl Default for GlyphOptions {
    fn default() -> Self {
        Self {
            target_points: 256,
            precision: 3,
            normalize: true,
            strategy: SampleStrategy::FixedSteps,
        }
    }
}

/// Bookkeeping about one pipeline run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GlyphMetadata {
    /// Points produced by the geometry sampler.
    pub original_point_count: usize,
    /// Points after resampling (a power of two).
    pub resampled_point_count: usize,
    /// Coefficients produced by the transform.
    pub coefficient_count: usize,
    /// Rounding precision applied to the coefficients.
    pub precision: u32,
    /// Whether normalization ran.
    pub normalized: bool,
}

/// Output of the full pipeline for one glyph.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlyphFourier {
    /// Sampled (and possibly normalized) outline points.
    pub original_points: Vec<Point>,
    /// The evenly respaced closed outline fed to the transform.
    pub resampled_points: Vec<Point>,
    /// Full coefficient list, rounded to the configured precision.
    pub coefficients: Vec<Coefficient>,
    /// Run bookkeeping.
    pub metadata: GlyphMetadata,
}

/// Run the pipeline over in-memory SVG markup.
#[tracing::instrument(skip(svg))]
pub fn process_svg_str(svg: &str, options: &GlyphOptions) -> GlyphcycleResult<GlyphFourier> {
    if options.target_points == 0 {
        return Err(GlyphcycleError::validation("target point count must be > 0"));
    }

    let path_data = extract_path_data(svg)?;
    let segments = parse_path_data(&path_data)?;
    let mut points = sample_path(&segments, options.strategy)?;
    if options.normalize {
        points = normalize_points(&points);
    }

    let resampled_count = options.target_points.next_power_of_two();
    let resampled = resample_closed(&points, resampled_count);
    let coefficients: Vec<Coefficient> = fourier_coefficients(&points_to_samples(&resampled))?
        .iter()
        .map(|c| round_coefficient(c, options.precision))
        .collect();

    tracing::debug!(
        original_points = points.len(),
        resampled_points = resampled.len(),
        coefficients = coefficients.len(),
        "glyph transformed"
    );

    Ok(GlyphFourier {
        metadata: GlyphMetadata {
            original_point_count: points.len(),
            resampled_point_count: resampled.len(),
            coefficient_count: coefficients.len(),
            precision: options.precision,
            normalized: options.normalize,
        },
        original_points: points,
        resampled_points: resampled,
        coefficients,
    })
}

/// Run the pipeline over an SVG file on disk.
pub fn process_svg_file(path: &Path, options: &GlyphOptions) -> GlyphcycleResult<GlyphFourier> {
    let svg = std::fs::read_to_string(path)
        .map_err(|e| GlyphcycleError::load(format!("read svg '{}': {e}", path.display())))?;
    process_svg_str(&svg, options)
}
