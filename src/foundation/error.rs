/// Convenience result type used across the crate.
pub type GlyphcycleResult<T> = Result<T, GlyphcycleError>;

/// Top-level error taxonomy.
///
/// Every failure is local to one glyph's pipeline; callers decide whether one
/// failed glyph aborts a whole composition (see `animate::driver`).
#[derive(thiserror::Error, Debug)]
pub enum GlyphcycleError {
    /// Reading glyph source data failed (missing file, unreadable bytes).
    #[error("load error: {0}")]
    Load(String),

    /// No usable path data could be extracted or parsed from the SVG markup.
    #[error("extraction error: {0}")]
    Extraction(String),

    /// The path geometry is degenerate (for example it yields zero points).
    #[error("geometry error: {0}")]
    Geometry(String),

    /// An invariant on user-provided values was violated.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while driving the epicycle animation state machine.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors when serializing coefficient or scene data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlyphcycleError {
    /// Build a [`GlyphcycleError::Load`] value.
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Build a [`GlyphcycleError::Extraction`] value.
    pub fn extraction(msg: impl Into<String>) -> Self {
        Self::Extraction(msg.into())
    }

    /// Build a [`GlyphcycleError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`GlyphcycleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlyphcycleError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`GlyphcycleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
