//! Portal shape glyph.
//!
//! Two concentric regular polygons. The outer one turns with the animation
//! angle; the inner one is drawn in a frame turned a further `-2 * angle`, so
//! it spins the opposite way at the same rate. Detailed glyphs add spokes, a
//! center dot and a pulsing ring, all in the inner frame.

use lumaura_core::{regular_polygon, Canvas, DrawCommand, Point, Stroke};

use crate::portal::PortalVisual;

/// Outer polygon line width.
pub const OUTER_LINE_WIDTH: f32 = 2.0;
/// Inner polygon and spoke line width.
pub const INNER_LINE_WIDTH: f32 = 1.0;
/// Ring line width.
pub const RING_LINE_WIDTH: f32 = 2.0;
/// Spoke alpha, independent of the stroke color's own alpha.
pub const SPOKE_ALPHA: f32 = 0.3;
/// Ring alpha, independent of the stroke color's own alpha.
pub const RING_ALPHA: f32 = 0.2;
/// Center dot radius as a fraction of the base radius.
pub const CENTER_DOT_RATIO: f32 = 0.1;

/// Extra elements of a detailed glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphDetail {
    /// Outer vertex i to inner vertex i, relative to the glyph center.
    pub spokes: Vec<(Point, Point)>,
    /// Radius of the filled center dot.
    pub center_dot_radius: f32,
    /// Radius of the pulsing ring this frame.
    pub ring_radius: f32,
}

/// Glyph geometry for one frame, relative to the glyph center.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// Outer polygon vertices.
    pub outer: Vec<Point>,
    /// Inner polygon vertices.
    pub inner: Vec<Point>,
    /// Present only for detailed glyphs.
    pub detail: Option<GlyphDetail>,
}

impl Glyph {
    /// Builds the glyph for base radius `radius` at rotation `angle`.
    ///
    /// `now_secs` is wall-clock time and only drives the ring pulse.
    #[must_use]
    pub fn build(
        visual: &PortalVisual,
        radius: f32,
        angle: f32,
        detailed: bool,
        now_secs: f64,
    ) -> Self {
        let outer_rotation = angle + visual.extra_rotation;
        let inner_rotation = outer_rotation - 2.0 * angle;
        let outer_radius = radius * visual.size_scale;
        let inner_radius = outer_radius * visual.inner_ratio;

        let outer = regular_polygon(visual.sides, outer_radius, outer_rotation);
        let inner = regular_polygon(visual.sides, inner_radius, inner_rotation);

        let detail = detailed.then(|| {
            let spokes = regular_polygon(visual.sides, outer_radius, inner_rotation)
                .into_iter()
                .zip(inner.iter().copied())
                .collect();
            GlyphDetail {
                spokes,
                center_dot_radius: radius * CENTER_DOT_RATIO,
                ring_radius: pulse_ring_radius(radius, now_secs),
            }
        });

        Self { outer, inner, detail }
    }

    /// Records the glyph into `canvas` around `center`.
    pub fn draw(&self, canvas: &mut Canvas, center: Point, visual: &PortalVisual) {
        let stroke = visual.stroke();
        let fill = visual.fill();
        let place = |points: &[Point]| points.iter().map(|p| p.offset(center)).collect::<Vec<_>>();

        canvas.push(DrawCommand::Polygon {
            points: place(&self.outer),
            fill: Some(fill),
            stroke: Some(Stroke::new(stroke, OUTER_LINE_WIDTH)),
        });
        canvas.push(DrawCommand::Polygon {
            points: place(&self.inner),
            fill: Some(fill),
            stroke: Some(Stroke::new(stroke, INNER_LINE_WIDTH)),
        });

        if let Some(detail) = &self.detail {
            canvas.push(DrawCommand::Lines {
                segments: detail
                    .spokes
                    .iter()
                    .map(|(from, to)| (from.offset(center), to.offset(center)))
                    .collect(),
                stroke: Stroke::new(stroke.with_alpha(SPOKE_ALPHA), INNER_LINE_WIDTH),
            });
            canvas.fill_circle(center, detail.center_dot_radius, stroke);
            canvas.stroke_circle(
                center,
                detail.ring_radius,
                Stroke::new(stroke.with_alpha(RING_ALPHA), RING_LINE_WIDTH),
            );
        }
    }
}

/// Ring radius `0.3 * radius * (1 + 0.2 * sin(2t))`.
#[must_use]
pub fn pulse_ring_radius(radius: f32, now_secs: f64) -> f32 {
    let pulse = (2.0 * now_secs).sin() as f32;
    0.3 * radius * (1.0 + 0.2 * pulse)
}
