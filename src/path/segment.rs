use svgtypes::PathParser;

use crate::foundation::error::{GlyphcycleError, GlyphcycleResult};

/// One absolute path command.
///
/// Every coordinate is absolute: [`parse_path_data`] resolves relative
/// commands against the running current point before the sampler ever sees a
/// segment. A curve segment's implicit start is the previous segment's
/// endpoint, initialized to `(0, 0)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum PathSegment {
    /// Start a new subpath at `(x, y)`.
    MoveTo {
        /// Endpoint x.
        x: f64,
        /// Endpoint y.
        y: f64,
    },
    /// Straight line to `(x, y)`.
    LineTo {
        /// Endpoint x.
        x: f64,
        /// Endpoint y.
        y: f64,
    },
    /// Horizontal line to `x` (y carried over from the current point).
    HorizontalLineTo {
        /// Endpoint x.
        x: f64,
    },
    /// Vertical line to `y` (x carried over from the current point).
    VerticalLineTo {
        /// Endpoint y.
        y: f64,
    },
    /// Cubic bezier with both control points explicit.
    CubicCurveTo {
        /// First control point x.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x.
        x2: f64,
        /// Second control point y.
        y2: f64,
        /// Endpoint x.
        x: f64,
        /// Endpoint y.
        y: f64,
    },
    /// Cubic bezier whose first control point is the reflection of the
    /// previous segment's last control point about the current point.
    SmoothCubicCurveTo {
        /// Second control point x.
        x2: f64,
        /// Second control point y.
        y2: f64,
        /// Endpoint x.
        x: f64,
        /// Endpoint y.
        y: f64,
    },
    /// Quadratic bezier with an explicit control point.
    QuadraticCurveTo {
        /// Control point x.
        x1: f64,
        /// Control point y.
        y1: f64,
        /// Endpoint x.
        x: f64,
        /// Endpoint y.
        y: f64,
    },
    /// Quadratic bezier with a reflected control point.
    SmoothQuadraticCurveTo {
        /// Endpoint x.
        x: f64,
        /// Endpoint y.
        y: f64,
    },
    /// Elliptical arc.
    ///
    /// The full parameter set is carried so an exact arc sampler needs no
    /// data-model change, but the sampler currently approximates arcs by their
    /// endpoint only. Glyph outlines in practice are bezier-only.
    ArcTo {
        /// X radius.
        rx: f64,
        /// Y radius.
        ry: f64,
        /// Rotation of the ellipse's x axis, in degrees.
        x_axis_rotation: f64,
        /// Large-arc flag.
        large_arc: bool,
        /// Sweep flag.
        sweep: bool,
        /// Endpoint x.
        x: f64,
        /// Endpoint y.
        y: f64,
    },
    /// Close the current subpath.
    ClosePath,
}

/// Parse SVG path data into absolute [`PathSegment`]s.
///
/// Relative commands are resolved against the current point as they are
/// parsed, mirroring what `ClosePath` implies for the current point (it moves
/// back to the subpath start).
pub fn parse_path_data(d: &str) -> GlyphcycleResult<Vec<PathSegment>> {
    let mut segments = Vec::new();

    // Current point and start of the current subpath, both absolute.
    let mut cx = 0.0;
    let mut cy = 0.0;
    let mut sx = 0.0;
    let mut sy = 0.0;

    for parsed in PathParser::from(d) {
        let seg = parsed
            .map_err(|e| GlyphcycleError::extraction(format!("malformed path data: {e}")))?;

        use svgtypes::PathSegment as Svg;
        let abs = match seg {
            Svg::MoveTo { abs, mut x, mut y } => {
                if !abs {
                    x += cx;
                    y += cy;
                }
                (cx, cy) = (x, y);
                (sx, sy) = (x, y);
                PathSegment::MoveTo { x, y }
            }
            Svg::LineTo { abs, mut x, mut y } => {
                if !abs {
                    x += cx;
                    y += cy;
                }
                (cx, cy) = (x, y);
                PathSegment::LineTo { x, y }
            }
            Svg::HorizontalLineTo { abs, mut x } => {
                if !abs {
                    x += cx;
                }
                cx = x;
                PathSegment::HorizontalLineTo { x }
            }
            Svg::VerticalLineTo { abs, mut y } => {
                if !abs {
                    y += cy;
                }
                cy = y;
                PathSegment::VerticalLineTo { y }
            }
            Svg::CurveTo {
                abs,
                mut x1,
                mut y1,
                mut x2,
                mut y2,
                mut x,
                mut y,
            } => {
                if !abs {
                    x1 += cx;
                    y1 += cy;
                    x2 += cx;
                    y2 += cy;
                    x += cx;
                    y += cy;
                }
                (cx, cy) = (x, y);
                PathSegment::CubicCurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                }
            }
            Svg::SmoothCurveTo {
                abs,
                mut x2,
                mut y2,
                mut x,
                mut y,
            } => {
                if !abs {
                    x2 += cx;
                    y2 += cy;
                    x += cx;
                    y += cy;
                }
                (cx, cy) = (x, y);
                PathSegment::SmoothCubicCurveTo { x2, y2, x, y }
            }
            Svg::Quadratic {
                abs,
                mut x1,
                mut y1,
                mut x,
                mut y,
            } => {
                if !abs {
                    x1 += cx;
                    y1 += cy;
                    x += cx;
                    y += cy;
                }
                (cx, cy) = (x, y);
                PathSegment::QuadraticCurveTo { x1, y1, x, y }
            }
            Svg::SmoothQuadratic { abs, mut x, mut y } => {
                if !abs {
                    x += cx;
                    y += cy;
                }
                (cx, cy) = (x, y);
                PathSegment::SmoothQuadraticCurveTo { x, y }
            }
            Svg::EllipticalArc {
                abs,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                mut x,
                mut y,
            } => {
                if !abs {
                    x += cx;
                    y += cy;
                }
                (cx, cy) = (x, y);
                PathSegment::ArcTo {
                    rx,
                    ry,
                    x_axis_rotation,
                    large_arc,
                    sweep,
                    x,
                    y,
                }
            }
            Svg::ClosePath { abs: _ } => {
                (cx, cy) = (sx, sy);
                PathSegment::ClosePath
            }
        };

        segments.push(abs);
    }

    if segments.is_empty() {
        return Err(GlyphcycleError::extraction("path data has no commands"));
    }
    Ok(segments)
}

#[cfg(test)]
#[path = "../../tests/unit/path/segment.rs"]
mod tests;
