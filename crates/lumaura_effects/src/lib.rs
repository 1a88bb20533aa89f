//! # LUMAURA Effects
//!
//! The three portal visualizations. Each one owns a canvas, records a frame
//! per [`Animated::draw_frame`](lumaura_core::Animated::draw_frame) call and
//! re-sizes its canvas on [`Animated::resize`](lumaura_core::Animated::resize).
//!
//! | component | particles | edges | extras |
//! |---|---|---|---|
//! | [`ParticleField`] | 100 white | bounce | violet/teal backdrop, glow ring |
//! | [`PortalHologram`] | 75 / 150 in portal colors | bounce | tinted backdrop, shape glyph |
//! | [`ParticleSystem`] | configurable | wrap | live count/speed/color control |

#![deny(unsafe_code)]

pub mod backdrop;
pub mod error;
pub mod field;
pub mod glyph;
pub mod hologram;
pub mod particle;
pub mod portal;
pub mod system;

pub use error::{EffectsError, EffectsResult};
pub use field::ParticleField;
pub use glyph::{Glyph, GlyphDetail};
pub use hologram::{AnimationState, PortalHologram};
pub use particle::{EdgeBehavior, Particle, SpawnRanges};
pub use portal::{PortalVisual, DEFAULT_VISUAL, PORTAL_VISUALS};
pub use system::{ParticleSystem, ParticleSystemHandle, ParticleSystemOptions};
