//! Canvas surfaces and draw commands.
//!
//! A [`Canvas`] is the drawing surface a component owns. Components record
//! [`DrawCommand`]s into it every frame; the host rasterizes the recorded list
//! (browser canvas, GPU, image encoder). All coordinates are absolute canvas
//! pixels, transforms are already applied.

use crate::color::Color;
use crate::geometry::{Point, Rect};

/// A color stop on a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Position along the gradient (0-1).
    pub offset: f32,
    /// Color at this position.
    pub color: Color,
}

/// Radial gradient between two concentric circles.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    /// Center of both circles.
    pub center: Point,
    /// Radius where offset 0 sits.
    pub inner_radius: f32,
    /// Radius where offset 1 sits.
    pub outer_radius: f32,
    /// Color stops in ascending offset order.
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    /// Two-stop gradient from the center point outwards.
    #[must_use]
    pub fn two_stop(center: Point, outer_radius: f32, inner: Color, outer: Color) -> Self {
        Self {
            center,
            inner_radius: 0.0,
            outer_radius,
            stops: vec![
                ColorStop { offset: 0.0, color: inner },
                ColorStop { offset: 1.0, color: outer },
            ],
        }
    }
}

/// How an area is filled.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// Flat color.
    Solid(Color),
    /// Radial gradient.
    Radial(RadialGradient),
}

/// Outline style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Line color.
    pub color: Color,
    /// Line width in pixels.
    pub width: f32,
}

impl Stroke {
    /// Creates a stroke.
    #[must_use]
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Reset the whole surface to transparent.
    Clear {
        /// Cleared area.
        bounds: Rect,
    },
    /// Fill an axis-aligned rectangle.
    FillRect {
        /// Area.
        bounds: Rect,
        /// Fill.
        paint: Paint,
    },
    /// Closed polygon, filled then stroked.
    Polygon {
        /// Vertices in drawing order.
        points: Vec<Point>,
        /// Fill color.
        fill: Option<Color>,
        /// Outline.
        stroke: Option<Stroke>,
    },
    /// Independent line segments stroked as one path.
    Lines {
        /// Segment endpoints.
        segments: Vec<(Point, Point)>,
        /// Outline.
        stroke: Stroke,
    },
    /// Full circle.
    Circle {
        /// Center.
        center: Point,
        /// Radius.
        radius: f32,
        /// Fill color.
        fill: Option<Color>,
        /// Outline.
        stroke: Option<Stroke>,
    },
}

/// A drawing surface owned by exactly one component.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl Canvas {
    /// Creates a surface of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::with_capacity(256),
            frames: 0,
        }
    }

    /// Surface width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Rectangle covering the surface.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Center of the surface.
    #[must_use]
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Resizes the surface.
    ///
    /// Assigning a size resets the surface, so whatever was recorded is gone
    /// even when the size is unchanged.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.commands.clear();
    }

    /// Starts a new frame: drops the previous frame and records a clear.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.frames += 1;
        let bounds = self.bounds();
        self.commands.push(DrawCommand::Clear { bounds });
    }

    /// Records a command.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Fills the whole surface.
    pub fn fill_background(&mut self, paint: Paint) {
        let bounds = self.bounds();
        self.push(DrawCommand::FillRect { bounds, paint });
    }

    /// Fills a circle.
    pub fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.push(DrawCommand::Circle {
            center,
            radius,
            fill: Some(color),
            stroke: None,
        });
    }

    /// Strokes a circle outline.
    pub fn stroke_circle(&mut self, center: Point, radius: f32, stroke: Stroke) {
        self.push(DrawCommand::Circle {
            center,
            radius,
            fill: None,
            stroke: Some(stroke),
        });
    }

    /// Commands recorded since the last [`Canvas::begin_frame`].
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames started on this surface.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}
