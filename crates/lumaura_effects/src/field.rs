//! Ambient particle field.
//!
//! Background effect for hero sections: a violet-to-teal backdrop, white
//! particles bouncing off the canvas edges and a slowly breathing glow ring.

use lumaura_core::{Animated, Canvas, Color, Stroke};

use crate::backdrop;
use crate::particle::{particle_rng, EdgeBehavior, Particle, SpawnRanges};

/// Particles seeded into every field.
pub const FIELD_PARTICLE_COUNT: usize = 100;
/// Backdrop color at the center.
pub const BACKDROP_INNER: Color = Color::rgba(98, 0, 234, 0.2);
/// Backdrop color at the edge.
pub const BACKDROP_OUTER: Color = Color::rgba(3, 218, 198, 0.05);
/// Glow ring color.
pub const GLOW_STROKE: Stroke = Stroke::new(Color::rgba(3, 218, 198, 0.2), 2.0);

/// Ambient background particles over a radial backdrop.
pub struct ParticleField {
    canvas: Canvas,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Creates a field sized to its container.
    #[must_use]
    pub fn new(width: u32, height: u32, seed: u64) -> Self {
        let mut rng = particle_rng(seed);
        let particles = (0..FIELD_PARTICLE_COUNT)
            .map(|_| Particle::spawn(&mut rng, width, height, &SpawnRanges::AMBIENT, Color::WHITE))
            .collect();

        Self {
            canvas: Canvas::new(width, height),
            particles,
        }
    }

    /// Current particles.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

impl Animated for ParticleField {
    fn draw_frame(&mut self, now_secs: f64) {
        self.canvas.begin_frame();
        backdrop::paint_radial(&mut self.canvas, BACKDROP_INNER, BACKDROP_OUTER);

        let (width, height) = (self.canvas.width(), self.canvas.height());
        for particle in &mut self.particles {
            self.canvas.fill_circle(
                particle.position(),
                particle.size,
                Color::WHITE.with_alpha(particle.opacity),
            );
            particle.step(EdgeBehavior::Bounce, width, height);
        }

        let center = self.canvas.center();
        let radius = glow_ring_radius(width, now_secs);
        self.canvas.stroke_circle(center, radius, GLOW_STROKE);
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.resize(width, height);
    }

    fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

/// Glow ring radius `(width / 3) * (0.9 + 0.1 * sin(t))`.
#[must_use]
pub fn glow_ring_radius(width: u32, now_secs: f64) -> f32 {
    let pulse = now_secs.sin() as f32;
    (width as f32 / 3.0) * (0.9 + 0.1 * pulse)
}
