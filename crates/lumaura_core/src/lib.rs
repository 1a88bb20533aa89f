//! # LUMAURA Core
//!
//! Primitives shared by every portal visualization:
//! - [`Color`] - structured RGBA, parsed once from `rgb()`/`rgba()` text
//! - [`Canvas`] - an owned surface recording [`DrawCommand`]s per frame
//! - [`Mount`] / [`Document`] - containers a canvas is sized against
//! - [`Clock`] - wall-clock seconds for pulse effects
//! - [`AnimationLoop`] - the Created → Running → Stopped state machine
//!
//! ## Frame Pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Host frame → AnimationLoop::tick → Animated::draw_frame │
//! │                                         ↓                │
//! │                  Canvas::begin_frame → DrawCommand list  │
//! │                                         ↓                │
//! │                          Host rasterizes the commands    │
//! └──────────────────────────────────────────────────────────┘
//! ```

#![deny(unsafe_code)]

pub mod clock;
pub mod color;
pub mod error;
pub mod geometry;
pub mod lifecycle;
pub mod mount;
pub mod render;

pub use clock::{Clock, ManualClock, SystemClock};
pub use color::{Color, ColorParseError};
pub use error::{VizError, VizResult};
pub use geometry::{regular_polygon, Point, Rect};
pub use lifecycle::{Animated, AnimationLoop, LoopState};
pub use mount::{Document, Mount, MountRef, StaticDocument, StaticMount};
pub use render::{Canvas, ColorStop, DrawCommand, Paint, RadialGradient, Stroke};
