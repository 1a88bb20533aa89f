//! Radial backdrops painted behind fields and holograms.

use lumaura_core::{Canvas, Color, Paint, RadialGradient};

/// Backdrop alpha at the canvas center.
pub const CENTER_ALPHA: f32 = 0.2;
/// Backdrop alpha at the gradient edge.
pub const EDGE_ALPHA: f32 = 0.05;
/// Used when a portal accent color cannot be read.
pub const NEUTRAL_GRAY: Color = Color::rgb(30, 30, 30);

/// Fills the canvas with a gradient centered on it, reaching `width / 2`.
pub fn paint_radial(canvas: &mut Canvas, inner: Color, outer: Color) {
    let gradient = RadialGradient::two_stop(
        canvas.center(),
        canvas.width() as f32 / 2.0,
        inner,
        outer,
    );
    canvas.fill_background(Paint::Radial(gradient));
}

/// Backdrop stops derived from a single accent color's channels.
#[must_use]
pub fn accent_stops(accent: Color) -> (Color, Color) {
    (accent.with_alpha(CENTER_ALPHA), accent.with_alpha(EDGE_ALPHA))
}
