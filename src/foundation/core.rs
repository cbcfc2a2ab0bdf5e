use crate::foundation::error::{GlyphcycleError, GlyphcycleResult};

pub use kurbo::{Point, Rect, Vec2};

/// Output canvas dimensions in CSS pixels.
///
/// The viewport only scopes the rendered SVG document; glyph anchors are
/// expressed in the same coordinate space but are not derived from it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a validated viewport with finite, positive dimensions.
    pub fn new(width: f64, height: f64) -> GlyphcycleResult<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(GlyphcycleError::validation("Viewport width must be > 0"));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(GlyphcycleError::validation("Viewport height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Center of the viewport.
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}
