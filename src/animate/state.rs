use std::collections::VecDeque;

use crate::animate::epicycle::evaluate_arms;
use crate::animate::scene::{Circle, GlyphFrame, Line};
use crate::foundation::core::Point;
use crate::foundation::error::{GlyphcycleError, GlyphcycleResult};
use crate::fourier::dft::Coefficient;

/// Display floor for epicycle circles so near-zero arms stay visible.
const MIN_CIRCLE_RADIUS: f64 = 0.5;

/// Owned per-glyph animation state.
///
/// Created once a glyph's coefficients are loaded and selected, mutated every
/// frame by [`GlyphAnimation::advance`], and dropped when the composition
/// stops. Nothing here is shared between glyphs.
#[derive(Clone, Debug)]
pub struct GlyphAnimation {
    /// Retained coefficients in selection order (descending magnitude).
    coefficients: Vec<Coefficient>,
    /// Fixed anchor the arm chain hangs off.
    anchor: Point,
    /// Sliding window of recent pen positions, oldest at the front.
    trail: VecDeque<Point>,
    /// Total points ever appended to the trail (not capped).
    points_drawn: u64,
    /// Trail length cap; beyond it the oldest points are evicted.
    max_trail_len: usize,
}

impl GlyphAnimation {
    /// Create animation state for one glyph.
    pub fn new(
        coefficients: Vec<Coefficient>,
        anchor: Point,
        max_trail_len: usize,
    ) -> GlyphcycleResult<Self> {
        if coefficients.is_empty() {
            return Err(GlyphcycleError::animation(
                "glyph animation needs at least one coefficient",
            ));
        }
        if max_trail_len == 0 {
            return Err(GlyphcycleError::animation("trail length cap must be > 0"));
        }
        Ok(Self {
            trail: VecDeque::with_capacity(max_trail_len.min(4096)),
            coefficients,
            anchor,
            points_drawn: 0,
            max_trail_len,
        })
    }

    /// The glyph's fixed anchor point.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Retained coefficients in selection order.
    pub fn coefficients(&self) -> &[Coefficient] {
        &self.coefficients
    }

    /// Number of points currently stored in the trail.
    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    /// Total points ever drawn, including evicted ones.
    pub fn points_drawn(&self) -> u64 {
        self.points_drawn
    }

    /// Advance to cycle fraction `t` and return this frame's render
    /// description.
    ///
    /// This is the whole per-frame mutation: evaluate the arm chain, extend
    /// the trail at the pen, evict past the cap. Skipped frames need no
    /// catch-up; a later `t` simply draws a longer jump in the trail.
    pub fn advance(&mut self, t: f64, scale: f64) -> GlyphFrame {
        let chain = evaluate_arms(&self.coefficients, self.anchor, scale, t);
        self.extend_trail(chain.pen);

        let circles = chain
            .arms
            .iter()
            .filter(|arm| arm.frequency != 0)
            .map(|arm| Circle {
                center: arm.center,
                radius: arm.radius.max(MIN_CIRCLE_RADIUS),
            })
            .collect();
        let lines = chain
            .arms
            .iter()
            .map(|arm| Line {
                from: arm.center,
                to: arm.tip,
            })
            .collect();

        GlyphFrame {
            circles,
            lines,
            anchor: self.anchor,
            pen: chain.pen,
            trail: self.trail.iter().copied().collect(),
        }
    }

    /// Append a pen position, evicting the oldest point past the cap.
    fn extend_trail(&mut self, pen: Point) {
        self.trail.push_back(pen);
        self.points_drawn += 1;
        while self.trail.len() > self.max_trail_len {
            self.trail.pop_front();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animate/state.rs"]
mod tests;
