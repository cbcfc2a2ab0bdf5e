//! Developer-convenience output for a computed coefficient array.
//!
//! Precomputing a glyph's coefficients once and pasting the literal into
//! application code skips the whole load-and-transform pipeline at runtime.
//! This is a debug channel, not a runtime contract.

use crate::foundation::error::{GlyphcycleError, GlyphcycleResult};
use crate::fourier::dft::Coefficient;

/// Round `real`/`imag`/`magnitude` to `precision` decimal places.
///
/// Phase keeps full precision: a rounded phase visibly desynchronizes arms
/// over a cycle, while rounded magnitudes only soften the outline.
pub fn round_coefficient(c: &Coefficient, precision: u32) -> Coefficient {
    let factor = 10f64.powi(precision as i32);
    let round = |v: f64| (v * factor).round() / factor;
    Coefficient {
        frequency: c.frequency,
        real: round(c.real),
        imag: round(c.imag),
        magnitude: round(c.magnitude),
        phase: c.phase,
    }
}

/// Render a coefficient array as a Rust `const` slice literal.
///
/// The emitted phase is recomputed from the rounded parts
/// (`imag.atan2(real)`) so the pasted data stays internally consistent.
pub fn coefficients_rust_literal(coefficients: &[Coefficient], precision: u32) -> String {
    let mut out = String::from("const COEFFICIENTS: &[Coefficient] = &[\n");
    for c in coefficients {
        let r = round_coefficient(c, precision);
        out.push_str(&format!(
            "    Coefficient {{ frequency: {}, real: {}, imag: {}, magnitude: {}, phase: ({}f64).atan2({}) }},\n",
            r.frequency,
            fmt_f64(r.real),
            fmt_f64(r.imag),
            fmt_f64(r.magnitude),
            fmt_f64(r.imag),
            fmt_f64(r.real),
        ));
    }
    out.push_str("];");
    out
}

/// Serialize a coefficient array as pretty-printed JSON.
pub fn coefficients_json(coefficients: &[Coefficient], precision: u32) -> GlyphcycleResult<String> {
    let rounded: Vec<Coefficient> = coefficients
        .iter()
        .map(|c| round_coefficient(c, precision))
        .collect();
    serde_json::to_string_pretty(&rounded)
        .map_err(|e| GlyphcycleError::serde(format!("serialize coefficients: {e}")))
}

/// Format an `f64` so it re-parses as a float literal (`5` becomes `5.0`).
fn fmt_f64(v: f64) -> String {
    if v.fract() == 0.0 && v.is_finite() {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}
