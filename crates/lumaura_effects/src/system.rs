//! Host-controllable particle system.
//!
//! Unlike the field and hologram, a particle system hands its owner a
//! [`ParticleSystemHandle`] that can change count, speed and color while the
//! loop keeps running. Particles wrap around the canvas edges.
//!
//! ```text
//!   ParticleSystem (loop side)          ParticleSystemHandle (host side)
//!   ├─ Canvas (owned)                   │
//!   └─ Arc<Mutex<SystemState>> ◀────────┘  set_particle_count / speed / color
//! ```
//!
//! Mutations land between frames and show up on the next one; the canvas is
//! never recreated.

use std::sync::Arc;

use lumaura_core::{Animated, Canvas, Color, Paint};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EffectsError, EffectsResult};
use crate::particle::{particle_rng, EdgeBehavior, Particle, ParticleRng, SpawnRanges};

/// Construction options. Every field has a default; unknown keys in a scene
/// file are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleSystemOptions {
    /// Number of particles.
    pub particle_count: usize,
    /// Base color; each particle is drawn with it at its own opacity.
    pub particle_color: Color,
    /// Radius range `[min, max)`.
    pub particle_size: [f32; 2],
    /// Speed magnitude; velocity components land in `[-speed/2, speed/2)`.
    pub particle_speed: f32,
    /// Background fill. Fully transparent skips the background step.
    pub background_color: Color,
}

impl Default for ParticleSystemOptions {
    fn default() -> Self {
        Self {
            particle_count: 100,
            particle_color: Color::rgba(255, 255, 255, 0.5),
            particle_size: [1.0, 3.0],
            particle_speed: 0.5,
            background_color: Color::TRANSPARENT,
        }
    }
}

impl ParticleSystemOptions {
    /// Checks ranges before anything is seeded.
    ///
    /// # Errors
    ///
    /// Returns an error for an inverted, negative or non-finite size range, or
    /// a negative or non-finite speed.
    pub fn validate(&self) -> EffectsResult<()> {
        let [min, max] = self.particle_size;
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            return Err(EffectsError::InvalidSizeRange { min, max });
        }
        validate_speed(self.particle_speed)
    }

    fn spawn_ranges(&self) -> SpawnRanges {
        SpawnRanges {
            size_min: self.particle_size[0],
            size_max: self.particle_size[1],
            speed: self.particle_speed,
        }
    }
}

fn validate_speed(speed: f32) -> EffectsResult<()> {
    if speed.is_finite() && speed >= 0.0 {
        Ok(())
    } else {
        Err(EffectsError::InvalidSpeed(speed))
    }
}

/// State shared between the loop and its handles.
struct SystemState {
    options: ParticleSystemOptions,
    particles: Vec<Particle>,
    rng: ParticleRng,
    /// Mirror of the canvas size, used to seed particles added from the handle.
    surface: (u32, u32),
}

impl SystemState {
    fn spawn(&mut self) -> Particle {
        let (width, height) = self.surface;
        let ranges = self.options.spawn_ranges();
        Particle::spawn(
            &mut self.rng,
            width,
            height,
            &ranges,
            self.options.particle_color,
        )
    }
}

/// A particle engine drawing into its own canvas.
pub struct ParticleSystem {
    canvas: Canvas,
    shared: Arc<Mutex<SystemState>>,
}

impl ParticleSystem {
    /// Validates `options` and seeds the particles.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `options` are out of range.
    pub fn new(
        width: u32,
        height: u32,
        options: ParticleSystemOptions,
        seed: u64,
    ) -> EffectsResult<Self> {
        options.validate()?;

        let mut state = SystemState {
            particles: Vec::with_capacity(options.particle_count),
            options,
            rng: particle_rng(seed),
            surface: (width, height),
        };
        for _ in 0..state.options.particle_count {
            let particle = state.spawn();
            state.particles.push(particle);
        }

        Ok(Self {
            canvas: Canvas::new(width, height),
            shared: Arc::new(Mutex::new(state)),
        })
    }

    /// A control handle for this system.
    #[must_use]
    pub fn handle(&self) -> ParticleSystemHandle {
        ParticleSystemHandle {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl Animated for ParticleSystem {
    fn draw_frame(&mut self, _now_secs: f64) {
        let mut state = self.shared.lock();
        self.canvas.begin_frame();

        let background = state.options.background_color;
        if !background.is_transparent() {
            self.canvas.fill_background(Paint::Solid(background));
        }

        let (width, height) = (self.canvas.width(), self.canvas.height());
        for particle in &mut state.particles {
            self.canvas.fill_circle(
                particle.position(),
                particle.size,
                particle.color.with_alpha(particle.opacity),
            );
            particle.step(EdgeBehavior::Wrap, width, height);
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.resize(width, height);
        self.shared.lock().surface = (width, height);
    }

    fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

/// Host-side controls of a running [`ParticleSystem`].
#[derive(Clone)]
pub struct ParticleSystemHandle {
    shared: Arc<Mutex<SystemState>>,
}

impl std::fmt::Debug for ParticleSystemHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParticleSystemHandle")
            .field("particles", &self.particle_count())
            .finish()
    }
}

impl ParticleSystemHandle {
    /// Grows by appending freshly seeded particles or truncates to the first
    /// `count`. Surviving particles are not touched.
    pub fn set_particle_count(&self, count: usize) {
        let mut state = self.shared.lock();
        let current = state.particles.len();
        if count > current {
            state.particles.reserve(count - current);
            for _ in current..count {
                let particle = state.spawn();
                state.particles.push(particle);
            }
        } else {
            state.particles.truncate(count);
        }
        state.options.particle_count = count;
        debug!(from = current, to = count, "particle count changed");
    }

    /// Stores the new speed and re-randomizes every particle's velocity
    /// within `[-speed/2, speed/2)`.
    ///
    /// # Errors
    ///
    /// Returns [`EffectsError::InvalidSpeed`] for a negative or non-finite
    /// speed; nothing changes in that case.
    pub fn set_particle_speed(&self, speed: f32) -> EffectsResult<()> {
        validate_speed(speed)?;

        let mut state = self.shared.lock();
        state.options.particle_speed = speed;
        let SystemState { particles, rng, .. } = &mut *state;
        for particle in particles.iter_mut() {
            particle.randomize_velocity(rng, speed);
        }
        Ok(())
    }

    /// Stores the new color and assigns it to every particle.
    pub fn set_particle_color(&self, color: Color) {
        let mut state = self.shared.lock();
        state.options.particle_color = color;
        for particle in &mut state.particles {
            particle.color = color;
        }
    }

    /// Parses `color` and applies it like [`Self::set_particle_color`].
    ///
    /// # Errors
    ///
    /// Returns the parse error; nothing changes in that case.
    pub fn set_particle_color_str(&self, color: &str) -> EffectsResult<()> {
        let color: Color = color.parse()?;
        self.set_particle_color(color);
        Ok(())
    }

    /// Number of particles.
    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.shared.lock().particles.len()
    }

    /// Copy of the current particles.
    #[must_use]
    pub fn particles(&self) -> Vec<Particle> {
        self.shared.lock().particles.clone()
    }

    /// Copy of the current options.
    #[must_use]
    pub fn options(&self) -> ParticleSystemOptions {
        self.shared.lock().options.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumaura_core::DrawCommand;

    fn system(options: ParticleSystemOptions) -> ParticleSystem {
        ParticleSystem::new(400, 300, options, 42).unwrap()
    }

    #[test]
    fn test_defaults() {
        let options = ParticleSystemOptions::default();
        assert_eq!(options.particle_count, 100);
        assert_eq!(options.particle_color, Color::rgba(255, 255, 255, 0.5));
        assert_eq!(options.particle_size, [1.0, 3.0]);
        assert!((options.particle_speed - 0.5).abs() < f32::EPSILON);
        assert!(options.background_color.is_transparent());
    }

    #[test]
    fn test_partial_options_take_defaults() {
        let options: ParticleSystemOptions = toml::from_str(
            r#"
            particle_count = 12
            particle_color = "rgb(255, 0, 0)"
            unknown_option = true
            "#,
        )
        .unwrap();
        assert_eq!(options.particle_count, 12);
        assert_eq!(options.particle_color, Color::rgb(255, 0, 0));
        assert_eq!(options.particle_size, [1.0, 3.0]);
    }

    #[test]
    fn test_invalid_options_rejected() {
        let inverted = ParticleSystemOptions {
            particle_size: [3.0, 1.0],
            ..Default::default()
        };
        assert!(matches!(
            ParticleSystem::new(10, 10, inverted, 0),
            Err(EffectsError::InvalidSizeRange { .. })
        ));

        let negative = ParticleSystemOptions {
            particle_speed: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            ParticleSystem::new(10, 10, negative, 0),
            Err(EffectsError::InvalidSpeed(_))
        ));
    }

    #[test]
    fn test_seeded_within_size_range() {
        let sys = system(ParticleSystemOptions {
            particle_size: [2.0, 5.0],
            ..Default::default()
        });
        for p in sys.handle().particles() {
            assert!((2.0..5.0).contains(&p.size));
            assert!((-0.25..0.25).contains(&p.speed_x));
        }
    }

    #[test]
    fn test_transparent_background_skipped() {
        let mut sys = system(ParticleSystemOptions::default());
        sys.draw_frame(0.0);
        let commands = sys.canvas().commands();
        assert_eq!(commands.len(), 1 + 100);
        assert!(!commands.iter().any(|c| matches!(c, DrawCommand::FillRect { .. })));
    }

    #[test]
    fn test_opaque_background_painted() {
        let mut sys = system(ParticleSystemOptions {
            background_color: Color::rgba(0, 0, 20, 0.8),
            ..Default::default()
        });
        sys.draw_frame(0.0);
        assert_eq!(
            sys.canvas().commands()[1],
            DrawCommand::FillRect {
                bounds: sys.canvas().bounds(),
                paint: Paint::Solid(Color::rgba(0, 0, 20, 0.8)),
            }
        );
    }

    #[test]
    fn test_particle_alpha_composited_per_frame() {
        let mut sys = system(ParticleSystemOptions {
            particle_count: 3,
            particle_color: Color::rgb(10, 20, 30),
            ..Default::default()
        });
        let before = sys.handle().particles();
        sys.draw_frame(0.0);

        for (command, particle) in sys.canvas().commands()[1..].iter().zip(&before) {
            match command {
                DrawCommand::Circle { fill: Some(color), .. } => {
                    assert_eq!(*color, Color::rgba(10, 20, 30, particle.opacity));
                }
                other => panic!("unexpected command {other:?}"),
            }
        }
    }

    #[test]
    fn test_mutations_show_on_next_frame() {
        let mut sys = system(ParticleSystemOptions::default());
        let handle = sys.handle();
        sys.draw_frame(0.0);

        handle.set_particle_count(10);
        handle.set_particle_color(Color::rgb(0, 255, 0));
        sys.draw_frame(0.016);

        let commands = sys.canvas().commands();
        assert_eq!(commands.len(), 1 + 10);
        assert_eq!(sys.canvas().frame_count(), 2);
        for command in &commands[1..] {
            if let DrawCommand::Circle { fill: Some(color), .. } = command {
                assert_eq!((color.r, color.g, color.b), (0, 255, 0));
            }
        }
    }

    #[test]
    fn test_bad_color_text_changes_nothing() {
        let sys = system(ParticleSystemOptions::default());
        let handle = sys.handle();
        assert!(handle.set_particle_color_str("green").is_err());
        assert_eq!(handle.options().particle_color, Color::rgba(255, 255, 255, 0.5));

        handle.set_particle_color_str("rgba(1, 2, 3, 0.4)").unwrap();
        assert!(handle
            .particles()
            .iter()
            .all(|p| p.color == Color::rgba(1, 2, 3, 0.4)));
    }

    #[test]
    fn test_invalid_speed_changes_nothing() {
        let sys = system(ParticleSystemOptions::default());
        let handle = sys.handle();
        let before = handle.particles();
        assert!(handle.set_particle_speed(f32::NAN).is_err());
        assert_eq!(handle.particles(), before);
    }

    #[test]
    fn test_resize_updates_spawn_surface() {
        let mut sys = system(ParticleSystemOptions {
            particle_count: 0,
            ..Default::default()
        });
        sys.resize(20, 10);
        let handle = sys.handle();
        handle.set_particle_count(200);
        for p in handle.particles() {
            assert!(p.x < 20.0 && p.y < 10.0);
        }
    }
}
