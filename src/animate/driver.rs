//! Composition driver: the load-barrier state machine and the frame loop.
//!
//! The driver is single-threaded and cooperative. The host schedules frame
//! callbacks (at most one in flight) and hands each one a wall-clock elapsed
//! time; [`CompositionDriver::tick`] does only synchronous work and returns a
//! [`Scene`]. There is no backpressure: a slow frame makes the next `tick` see
//! a later elapsed time and the drawing visually jumps instead of queueing
//! catch-up work.

use std::path::Path;
use std::time::Duration;

use crate::animate::scene::{Scene, SceneGlyph};
use crate::animate::state::GlyphAnimation;
use crate::foundation::core::{Point, Viewport};
use crate::foundation::error::{GlyphcycleError, GlyphcycleResult};
use crate::fourier::dft::Coefficient;
use crate::fourier::select::select_top_k;
use crate::pipeline::{process_svg_file, GlyphOptions};

/// Tunables shared by every glyph in a composition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimatorOptions {
    /// Wall-clock duration of one full drawing cycle.
    pub period: Duration,
    /// Display scale applied to every coefficient magnitude.
    pub scale: f64,
    /// Trail length cap per glyph (FIFO eviction past it).
    pub max_trail_len: usize,
    /// How many top-magnitude coefficients each glyph retains.
    pub coefficients_used: usize,
}

impl Default for AnimatorOptions {
    fn default() -> Self {
        Self {
            period: Duration::from_millis(9100),
            scale: 40.0,
            max_trail_len: 1000,
            coefficients_used: 20,
        }
    }
}

impl AnimatorOptions {
    fn validate(&self) -> GlyphcycleResult<()> {
        if self.period.is_zero() {
            return Err(GlyphcycleError::validation("animation period must be > 0"));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(GlyphcycleError::validation("display scale must be > 0"));
        }
        if self.max_trail_len == 0 {
            return Err(GlyphcycleError::validation("trail length cap must be > 0"));
        }
        if self.coefficients_used == 0 {
            return Err(GlyphcycleError::validation(
                "retained coefficient count must be > 0",
            ));
        }
        Ok(())
    }
}

/// Loading lifecycle of one glyph.
///
/// `Loading → Ready` happens exactly once, when the glyph's coefficients
/// resolve. A failed load parks the glyph in `Failed` with its error instead
/// of silently never resolving.
#[derive(Debug)]
pub enum GlyphState {
    /// Registered, coefficients not resolved yet.
    Loading,
    /// Coefficients selected, animation state built.
    Ready(GlyphAnimation),
    /// The glyph's pipeline failed; the error is kept for reporting.
    Failed(GlyphcycleError),
}

#[derive(Debug)]
struct GlyphSlot {
    id: String,
    anchor: Point,
    state: GlyphState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Loading,
    Animating,
    Stopped,
}

/// Drives a set of glyph animations against a shared clock.
#[derive(Debug)]
pub struct CompositionDriver {
    viewport: Viewport,
    options: AnimatorOptions,
    glyphs: Vec<GlyphSlot>,
    phase: Phase,
}

impl CompositionDriver {
    /// Create a driver with validated options.
    pub fn new(viewport: Viewport, options: AnimatorOptions) -> GlyphcycleResult<Self> {
        options.validate()?;
        Ok(Self {
            viewport,
            options,
            glyphs: Vec::new(),
            phase: Phase::Loading,
        })
    }

    /// Register a glyph at a fixed anchor, in `Loading` state.
    pub fn add_glyph(&mut self, id: impl Into<String>, anchor: Point) -> GlyphcycleResult<()> {
        if self.phase != Phase::Loading {
            return Err(GlyphcycleError::animation(
                "glyphs can only be added before the animation starts",
            ));
        }
        let id = id.into();
        if self.glyphs.iter().any(|g| g.id == id) {
            return Err(GlyphcycleError::animation(format!(
                "glyph '{id}' is already registered"
            )));
        }
        self.glyphs.push(GlyphSlot {
            id,
            anchor,
            state: GlyphState::Loading,
        });
        Ok(())
    }

    /// Resolve a glyph's load with its full coefficient list or its error.
    ///
    /// On success the top coefficients are selected and the glyph becomes
    /// `Ready`. On failure the error is recorded in the glyph's slot; other
    /// glyphs are unaffected. Either way resolution itself succeeds; an error
    /// is returned only for driver misuse (unknown id, already resolved).
    pub fn resolve_glyph(
        &mut self,
        id: &str,
        result: GlyphcycleResult<Vec<Coefficient>>,
    ) -> GlyphcycleResult<()> {
        let max_trail_len = self.options.max_trail_len;
        let coefficients_used = self.options.coefficients_used;
        let slot = self
            .glyphs
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| {
                GlyphcycleError::animation(format!("glyph '{id}' is not registered"))
            })?;
        if !matches!(slot.state, GlyphState::Loading) {
            return Err(GlyphcycleError::animation(format!(
                "glyph '{id}' was already resolved"
            )));
        }

        slot.state = match result.and_then(|coefficients| {
            let selected = select_top_k(&coefficients, coefficients_used);
            GlyphAnimation::new(selected, slot.anchor, max_trail_len)
        }) {
            Ok(animation) => {
                tracing::debug!(glyph = %id, "glyph ready");
                GlyphState::Ready(animation)
            }
            Err(err) => {
                tracing::warn!(glyph = %id, error = %err, "glyph load failed");
                GlyphState::Failed(err)
            }
        };
        Ok(())
    }

    /// Run the whole load-and-transform pipeline for one SVG file and resolve
    /// the glyph with the outcome.
    ///
    /// A pipeline failure is recorded in the glyph's slot rather than
    /// returned, so loading several glyphs in a loop does not abort on the
    /// first bad file; inspect [`CompositionDriver::failed_glyphs`] afterward.
    pub fn load_svg_file(
        &mut self,
        id: impl Into<String>,
        anchor: Point,
        path: &Path,
        options: &GlyphOptions,
    ) -> GlyphcycleResult<()> {
        let id = id.into();
        self.add_glyph(id.clone(), anchor)?;
        let result = process_svg_file(path, options).map(|glyph| glyph.coefficients);
        self.resolve_glyph(&id, result)
    }

    /// `true` once every registered glyph is `Ready`.
    pub fn all_ready(&self) -> bool {
        !self.glyphs.is_empty()
            && self
                .glyphs
                .iter()
                .all(|g| matches!(g.state, GlyphState::Ready(_)))
    }

    /// Ids of glyphs still waiting for their coefficients.
    pub fn pending_glyphs(&self) -> Vec<&str> {
        self.glyphs
            .iter()
            .filter(|g| matches!(g.state, GlyphState::Loading))
            .map(|g| g.id.as_str())
            .collect()
    }

    /// Failed glyphs with their recorded errors.
    pub fn failed_glyphs(&self) -> Vec<(&str, &GlyphcycleError)> {
        self.glyphs
            .iter()
            .filter_map(|g| match &g.state {
                GlyphState::Failed(err) => Some((g.id.as_str(), err)),
                _ => None,
            })
            .collect()
    }

    /// Start the shared timer once every glyph is `Ready`.
    ///
    /// This is the readiness barrier: if any glyph is still loading or has
    /// failed, starting is refused and the error names the culprits instead
    /// of waiting indefinitely.
    pub fn start(&mut self) -> GlyphcycleResult<()> {
        if self.phase != Phase::Loading {
            return Err(GlyphcycleError::animation("animation was already started"));
        }
        if self.glyphs.is_empty() {
            return Err(GlyphcycleError::animation("no glyphs registered"));
        }

        let blocked: Vec<&str> = self
            .glyphs
            .iter()
            .filter(|g| !matches!(g.state, GlyphState::Ready(_)))
            .map(|g| g.id.as_str())
            .collect();
        if !blocked.is_empty() {
            return Err(GlyphcycleError::animation(format!(
                "glyphs not ready: {}",
                blocked.join(", ")
            )));
        }

        self.phase = Phase::Animating;
        Ok(())
    }

    /// Start over the ready subset, explicitly skipping failed glyphs.
    ///
    /// Glyphs still in `Loading` state block this too; only `Failed` glyphs
    /// may be left behind, and only because the caller said so.
    pub fn start_ready_subset(&mut self) -> GlyphcycleResult<()> {
        if self.phase != Phase::Loading {
            return Err(GlyphcycleError::animation("animation was already started"));
        }
        if !self.pending_glyphs().is_empty() {
            return Err(GlyphcycleError::animation(format!(
                "glyphs still loading: {}",
                self.pending_glyphs().join(", ")
            )));
        }
        if !self
            .glyphs
            .iter()
            .any(|g| matches!(g.state, GlyphState::Ready(_)))
        {
            return Err(GlyphcycleError::animation("no glyphs are ready"));
        }
        self.phase = Phase::Animating;
        Ok(())
    }

    /// Advance every ready glyph to the cycle fraction implied by `elapsed`
    /// and return the composed frame.
    pub fn tick(&mut self, elapsed: Duration) -> GlyphcycleResult<Scene> {
        match self.phase {
            Phase::Animating => {}
            Phase::Loading => {
                return Err(GlyphcycleError::animation("animation was not started"));
            }
            Phase::Stopped => {
                return Err(GlyphcycleError::animation("animation was stopped"));
            }
        }

        let t = (elapsed.as_secs_f64() / self.options.period.as_secs_f64()).fract();
        let scale = self.options.scale;

        let mut glyphs = Vec::new();
        for slot in &mut self.glyphs {
            if let GlyphState::Ready(animation) = &mut slot.state {
                glyphs.push(SceneGlyph {
                    id: slot.id.clone(),
                    frame: animation.advance(t, scale),
                });
            }
        }

        Ok(Scene {
            viewport: self.viewport,
            glyphs,
        })
    }

    /// Cooperatively stop the animation. Idempotent; later `tick` calls fail.
    pub fn stop(&mut self) {
        self.phase = Phase::Stopped;
    }

    /// Update canvas dimensions on a window resize.
    ///
    /// Only the viewport changes: anchors and coefficients are fixed at glyph
    /// creation time, so glyph positions do not reflow with the window.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Current canvas dimensions.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animate/driver.rs"]
mod tests;
