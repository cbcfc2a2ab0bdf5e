use crate::foundation::core::Point;
use crate::fourier::dft::Coefficient;

/// One rotating vector in the chain at a frozen instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Arm {
    /// Where this arm rotates around (the previous arm's tip).
    pub center: Point,
    /// Tip of this arm; the next arm's center.
    pub tip: Point,
    /// Arm length after display scaling (`magnitude * scale`).
    pub radius: f64,
    /// Frequency of the coefficient driving this arm.
    pub frequency: i64,
}

/// The evaluated arm chain for one glyph at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArmChain {
    /// Arms in selection order, chained tip-to-tail from the anchor.
    pub arms: Vec<Arm>,
    /// Position after summing every arm; where the trail is drawn.
    pub pen: Point,
}

/// Evaluate the epicycle chain at cycle fraction `t` in `[0, 1)`.
///
/// Each coefficient contributes `angle = 2π·frequency·t + phase` and advances
/// the position by `(m·scale·cos, −m·scale·sin)`. The y component is negated
/// because screen coordinates grow downward while the coefficients were
/// computed in a y-up frame (the normalizer's flip, undone here).
pub fn evaluate_arms(coefficients: &[Coefficient], anchor: Point, scale: f64, t: f64) -> ArmChain {
    let mut position = anchor;
    let mut arms = Vec::with_capacity(coefficients.len());

    for c in coefficients {
        let angle = std::f64::consts::TAU * (c.frequency as f64) * t + c.phase;
        let center = position;
        position.x += c.magnitude * scale * angle.cos();
        position.y -= c.magnitude * scale * angle.sin();
        arms.push(Arm {
            center,
            tip: position,
            radius: c.magnitude * scale,
            frequency: c.frequency,
        });
    }

    ArmChain {
        arms,
        pen: position,
    }
}
