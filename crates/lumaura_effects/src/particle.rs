//! Particles and their edge behavior.
//!
//! All three components share the same particle: a circle moving with a
//! constant velocity. They differ only in what happens at the canvas edge.

use lumaura_core::{Color, Point};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random stream owned by a single component.
pub type ParticleRng = ChaCha8Rng;

/// Creates a component's random stream from a seed.
#[must_use]
pub fn particle_rng(seed: u64) -> ParticleRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Lowest opacity a particle is seeded with.
pub const OPACITY_MIN: f32 = 0.25;
/// Width of the opacity range, so opacities land in [0.25, 0.75).
pub const OPACITY_SPAN: f32 = 0.5;

/// Distributions particles are seeded from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRanges {
    /// Smallest radius (inclusive).
    pub size_min: f32,
    /// Largest radius (exclusive).
    pub size_max: f32,
    /// Speed magnitude: each velocity component lands in [-speed/2, speed/2).
    pub speed: f32,
}

impl SpawnRanges {
    /// Field and hologram particles: radius [1, 4), velocity ±0.25.
    pub const AMBIENT: Self = Self {
        size_min: 1.0,
        size_max: 4.0,
        speed: 0.5,
    };
}

/// What a particle does when it leaves the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeBehavior {
    /// Flip the velocity component on the axis that left `[0, dimension]`.
    Bounce,
    /// Reappear on the opposite edge once fully off-canvas.
    Wrap,
}

/// A single particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// X position in canvas pixels.
    pub x: f32,
    /// Y position in canvas pixels.
    pub y: f32,
    /// Radius.
    pub size: f32,
    /// Horizontal velocity in pixels per frame.
    pub speed_x: f32,
    /// Vertical velocity in pixels per frame.
    pub speed_y: f32,
    /// Opacity (0-1).
    pub opacity: f32,
    /// Base color.
    pub color: Color,
}

impl Particle {
    /// Seeds a particle uniformly over a `width` x `height` surface.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        width: u32,
        height: u32,
        ranges: &SpawnRanges,
        color: Color,
    ) -> Self {
        let x = rng.gen::<f32>() * width as f32;
        let y = rng.gen::<f32>() * height as f32;
        let size = if ranges.size_max > ranges.size_min {
            rng.gen_range(ranges.size_min..ranges.size_max)
        } else {
            ranges.size_min
        };
        let (speed_x, speed_y) = random_velocity(rng, ranges.speed);
        let opacity = rng.gen::<f32>() * OPACITY_SPAN + OPACITY_MIN;

        Self {
            x,
            y,
            size,
            speed_x,
            speed_y,
            opacity,
            color,
        }
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Replaces the velocity with a fresh random one.
    pub fn randomize_velocity<R: Rng + ?Sized>(&mut self, rng: &mut R, speed: f32) {
        (self.speed_x, self.speed_y) = random_velocity(rng, speed);
    }

    /// Moves the particle by one frame of velocity and applies the edge rule.
    pub fn step(&mut self, edges: EdgeBehavior, width: u32, height: u32) {
        self.x += self.speed_x;
        self.y += self.speed_y;

        let (w, h) = (width as f32, height as f32);
        match edges {
            EdgeBehavior::Bounce => {
                if self.x < 0.0 || self.x > w {
                    self.speed_x = -self.speed_x;
                }
                if self.y < 0.0 || self.y > h {
                    self.speed_y = -self.speed_y;
                }
            }
            EdgeBehavior::Wrap => {
                if self.x < -self.size {
                    self.x = w + self.size;
                }
                if self.x > w + self.size {
                    self.x = -self.size;
                }
                if self.y < -self.size {
                    self.y = h + self.size;
                }
                if self.y > h + self.size {
                    self.y = -self.size;
                }
            }
        }
    }
}

/// Velocity with both components in `[-speed/2, speed/2)`.
pub fn random_velocity<R: Rng + ?Sized>(rng: &mut R, speed: f32) -> (f32, f32) {
    let half = speed * 0.5;
    if half <= 0.0 {
        return (0.0, 0.0);
    }
    (rng.gen_range(-half..half), rng.gen_range(-half..half))
}
