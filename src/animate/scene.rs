//! Declarative render description produced by the per-frame update.
//!
//! The animator never draws; it returns a [`Scene`] and a backend turns that
//! into output. The only backend shipped here writes SVG markup, which is the
//! vector-canvas output the animation ultimately targets.

use std::fmt::Write as _;

use crate::foundation::core::{Point, Viewport};

/// A circle outline showing one epicycle's radius.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Circle {
    /// Circle center (the arm's rotation center).
    pub center: Point,
    /// Display radius.
    pub radius: f64,
}

/// A straight connector from an arm's center to its tip.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Line {
    /// Segment start.
    pub from: Point,
    /// Segment end.
    pub to: Point,
}

/// Everything needed to draw one glyph for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlyphFrame {
    /// Epicycle outlines. The DC arm is excluded: a circle centered on the
    /// anchor with the centroid's magnitude is visual noise, not information.
    pub circles: Vec<Circle>,
    /// Center-to-tip connector for every arm, DC included.
    pub lines: Vec<Line>,
    /// The glyph's fixed anchor point.
    pub anchor: Point,
    /// Current drawing position (tip of the last arm).
    pub pen: Point,
    /// Recent pen positions, oldest first.
    pub trail: Vec<Point>,
}

/// One glyph's frame tagged with its identifier.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneGlyph {
    /// Caller-chosen glyph identifier (stable across frames).
    pub id: String,
    /// The glyph's render description for this frame.
    pub frame: GlyphFrame,
}

/// A full frame of the composition.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Canvas dimensions.
    pub viewport: Viewport,
    /// Per-glyph frames in registration order.
    pub glyphs: Vec<SceneGlyph>,
}

impl Scene {
    /// Serialize the scene as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.0}\" height=\"{:.0}\" \
             viewBox=\"0 0 {:.0} {:.0}\">\n",
            self.viewport.width, self.viewport.height, self.viewport.width, self.viewport.height,
        );

        for glyph in &self.glyphs {
            let _ = writeln!(out, "  <g class=\"glyph-{}\">", glyph.id);
            let f = &glyph.frame;
            for c in &f.circles {
                let _ = writeln!(
                    out,
                    "    <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" \
                     stroke=\"#fff\" stroke-opacity=\"0.15\" stroke-width=\"1.5\"/>",
                    fmt(c.center.x),
                    fmt(c.center.y),
                    fmt(c.radius),
                );
            }
            for l in &f.lines {
                let _ = writeln!(
                    out,
                    "    <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" \
                     stroke=\"#fff\" stroke-opacity=\"0.1\" stroke-width=\"0.5\"/>",
                    fmt(l.from.x),
                    fmt(l.from.y),
                    fmt(l.to.x),
                    fmt(l.to.y),
                );
            }
            if f.trail.len() >= 2 {
                let mut points = String::new();
                for p in &f.trail {
                    let _ = write!(points, "{},{} ", fmt(p.x), fmt(p.y));
                }
                let _ = writeln!(
                    out,
                    "    <polyline points=\"{}\" fill=\"none\" stroke=\"#fff\" \
                     stroke-opacity=\"0.9\" stroke-width=\"1.5\" stroke-linecap=\"round\" \
                     stroke-linejoin=\"round\"/>",
                    points.trim_end(),
                );
            }
            let _ = writeln!(
                out,
                "    <circle cx=\"{}\" cy=\"{}\" r=\"2\" fill=\"#fff\"/>",
                fmt(f.pen.x),
                fmt(f.pen.y),
            );
            let _ = writeln!(out, "  </g>");
        }

        out.push_str("</svg>\n");
        out
    }
}

fn fmt(v: f64) -> String {
    // Two decimals keeps documents small without visible quantization.
    format!("{v:.2}")
}
