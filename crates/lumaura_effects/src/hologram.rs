//! Portal hologram.
//!
//! Per-portal visualization: a backdrop tinted with the portal's primary
//! color, the rotating shape glyph and a particle overlay in the portal's two
//! colors. Particles bounce off the canvas edges.

use lumaura_core::{Animated, Canvas, Color};
use rand::Rng;
use tracing::{debug, warn};

use crate::backdrop;
use crate::glyph::Glyph;
use crate::particle::{particle_rng, EdgeBehavior, Particle, SpawnRanges};
use crate::portal::PortalVisual;

/// Particles in a compact hologram.
pub const PARTICLE_COUNT: usize = 75;
/// Particles in a detailed hologram.
pub const DETAILED_PARTICLE_COUNT: usize = 150;
/// Rotation added every frame, in radians.
pub const ANGLE_STEP: f32 = 0.01;

/// Rotation and pulse state, advanced once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationState {
    /// Accumulated glyph rotation in radians.
    pub angle: f32,
    /// Wall-clock seconds of the last drawn frame.
    pub pulse_phase: f64,
}

/// Animated visualization of a single portal.
pub struct PortalHologram {
    canvas: Canvas,
    portal_id: String,
    visual: &'static PortalVisual,
    detailed: bool,
    backdrop: (Color, Color),
    particles: Vec<Particle>,
    state: AnimationState,
}

impl PortalHologram {
    /// Creates a hologram for `portal_id` sized to its container.
    #[must_use]
    pub fn new(width: u32, height: u32, portal_id: &str, detailed: bool, seed: u64) -> Self {
        if !PortalVisual::is_known(portal_id) {
            debug!(portal_id, "unknown portal, using default visual");
        }
        let visual = PortalVisual::lookup(portal_id);

        let count = if detailed {
            DETAILED_PARTICLE_COUNT
        } else {
            PARTICLE_COUNT
        };
        let mut rng = particle_rng(seed);
        let particles = (0..count)
            .map(|_| {
                let mut particle =
                    Particle::spawn(&mut rng, width, height, &SpawnRanges::AMBIENT, visual.primary);
                if rng.gen::<f32>() <= 0.5 {
                    particle.color = visual.secondary;
                }
                particle
            })
            .collect();

        Self {
            canvas: Canvas::new(width, height),
            portal_id: portal_id.to_string(),
            visual,
            detailed,
            backdrop: backdrop::accent_stops(visual.primary),
            particles,
            state: AnimationState::default(),
        }
    }

    /// Tints the backdrop with a host-supplied accent instead of the
    /// portal's primary color. Unreadable text falls back to neutral gray.
    #[must_use]
    pub fn with_accent(mut self, accent: &str) -> Self {
        let color = match accent.parse::<Color>() {
            Ok(color) => color,
            Err(err) => {
                warn!(
                    portal_id = %self.portal_id,
                    %err,
                    "accent color unreadable, using neutral backdrop"
                );
                backdrop::NEUTRAL_GRAY
            }
        };
        self.backdrop = backdrop::accent_stops(color);
        self
    }

    /// Identifier this hologram was created for.
    #[must_use]
    pub fn portal_id(&self) -> &str {
        &self.portal_id
    }

    /// Resolved visual.
    #[must_use]
    pub fn visual(&self) -> &'static PortalVisual {
        self.visual
    }

    /// Whether detail elements are drawn.
    #[must_use]
    pub fn is_detailed(&self) -> bool {
        self.detailed
    }

    /// Backdrop center and edge colors.
    #[must_use]
    pub fn backdrop(&self) -> (Color, Color) {
        self.backdrop
    }

    /// Current particles.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Current animation state.
    #[must_use]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Glyph base radius: a third of the canvas width.
    #[must_use]
    pub fn base_radius(&self) -> f32 {
        self.canvas.width() as f32 / 3.0
    }
}

impl Animated for PortalHologram {
    fn draw_frame(&mut self, now_secs: f64) {
        self.canvas.begin_frame();
        let (inner, outer) = self.backdrop;
        backdrop::paint_radial(&mut self.canvas, inner, outer);

        let glyph = Glyph::build(
            self.visual,
            self.base_radius(),
            self.state.angle,
            self.detailed,
            now_secs,
        );
        let center = self.canvas.center();
        glyph.draw(&mut self.canvas, center, self.visual);

        let (width, height) = (self.canvas.width(), self.canvas.height());
        for particle in &mut self.particles {
            self.canvas
                .fill_circle(particle.position(), particle.size, particle.color);
            particle.step(EdgeBehavior::Bounce, width, height);
        }

        self.state.angle += ANGLE_STEP;
        self.state.pulse_phase = now_secs;
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.resize(width, height);
    }

    fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}
