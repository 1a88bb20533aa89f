//! Canvas-space geometry.
//!
//! Coordinates are canvas pixels: origin top-left, y grows downwards, angles in
//! radians with positive rotation turning +x towards +y (the 2D canvas
//! convention).

use std::f32::consts::TAU;

/// A point in canvas pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Rotates the point about the origin.
    #[must_use]
    pub fn rotated(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Translates the point by `offset`.
    #[must_use]
    pub fn offset(self, offset: Self) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y)
    }

    /// Distance from the origin.
    #[must_use]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }
}

/// A rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle covering a `width` x `height` surface.
    #[must_use]
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width as f32, height as f32)
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

/// Vertices of a regular polygon centered on the origin.
///
/// Vertex `i` sits at angle `2πi / sides` before `rotation` is applied, so the
/// first vertex points along +x for an unrotated polygon.
#[must_use]
pub fn regular_polygon(sides: u32, radius: f32, rotation: f32) -> Vec<Point> {
    (0..sides)
        .map(|i| {
            let a = (i as f32 / sides as f32) * TAU;
            Point::new(a.cos() * radius, a.sin() * radius).rotated(rotation)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_rotation_quarter_turn() {
        let p = Point::new(1.0, 0.0).rotated(FRAC_PI_2);
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_regular_polygon_on_circle() {
        let vertices = regular_polygon(8, 10.0, 0.3);
        assert_eq!(vertices.len(), 8);
        for v in &vertices {
            assert!((v.length() - 10.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_rect_center() {
        let rect = Rect::from_size(300, 150);
        assert_eq!(rect.center(), Point::new(150.0, 75.0));
    }
}
