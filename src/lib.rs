//! Glyphcycle reconstructs SVG glyph outlines with Fourier epicycles.
//!
//! An outline is pulled from an SVG path, sampled to points, canonicalized,
//! resampled to a power-of-two count, and run through a discrete Fourier
//! transform. The strongest coefficients become a chain of rotating vectors
//! whose tip retraces the outline over one animation cycle.
//!
//! # Pipeline overview
//!
//! 1. **Extract**: first path element's `d` attribute ([`extract_path_data`])
//! 2. **Parse**: path data to absolute segments ([`parse_path_data`])
//! 3. **Sample**: segments to an ordered point sequence ([`sample_path`])
//! 4. **Normalize**: center, scale, and flip into a canonical frame
//!    ([`normalize_points`])
//! 5. **Resample**: exactly N points, N a power of two ([`resample_closed`])
//! 6. **Transform**: complex DFT, normalized by N ([`fourier_coefficients`])
//! 7. **Select**: top-K coefficients by magnitude ([`select_top_k`])
//! 8. **Animate**: [`CompositionDriver`] gates on every glyph loading, then
//!    turns elapsed wall-clock time into [`Scene`] render descriptions
//!
//! Steps 1–6 are bundled by [`process_svg_str`] / [`process_svg_file`];
//! selection and animation are driven by [`CompositionDriver`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animate;
pub(crate) mod fourier;
pub(crate) mod path;

/// The glyph load-and-transform pipeline.
pub mod pipeline;

pub use crate::foundation::core::{Point, Rect, Vec2, Viewport};
pub use crate::foundation::error::{GlyphcycleError, GlyphcycleResult};

pub use crate::animate::driver::{AnimatorOptions, CompositionDriver, GlyphState};
pub use crate::animate::epicycle::{evaluate_arms, Arm, ArmChain};
pub use crate::animate::scene::{Circle, GlyphFrame, Line, Scene, SceneGlyph};
pub use crate::animate::state::GlyphAnimation;
pub use crate::fourier::codegen::{
    coefficients_json, coefficients_rust_literal, round_coefficient,
};
pub use crate::fourier::dft::{
    fourier_coefficients, points_to_samples, real_fourier_coefficients, reconstruct_point,
    Coefficient,
};
pub use crate::fourier::normalize::normalize_points;
pub use crate::fourier::resample::resample_closed;
pub use crate::fourier::select::select_top_k;
pub use crate::path::extract::extract_path_data;
pub use crate::path::sample::{sample_path, SampleStrategy};
pub use crate::path::segment::{parse_path_data, PathSegment};
pub use crate::pipeline::{
    process_svg_file, process_svg_str, GlyphFourier, GlyphMetadata, GlyphOptions,
};
