//! Per-component animation loop.
//!
//! ```text
//!   new()          start()            stop()
//!  ───────▶ Created ───────▶ Running ───────▶ Stopped
//!              │                                 ▲
//!              └───────────── stop() ────────────┘
//! ```
//!
//! Only a Running loop draws. A Stopped loop is detached for good: it ignores
//! frames and resizes, and cannot be restarted.

use tracing::debug;

use crate::error::{VizError, VizResult};
use crate::render::Canvas;

/// Something that draws into its own canvas once per frame.
pub trait Animated: Send {
    /// Draws one frame and advances the animation state.
    fn draw_frame(&mut self, now_secs: f64);

    /// Applies new container dimensions to the canvas.
    fn resize(&mut self, width: u32, height: u32);

    /// The surface this component draws into.
    fn canvas(&self) -> &Canvas;
}

impl<A: Animated + ?Sized> Animated for Box<A> {
    fn draw_frame(&mut self, now_secs: f64) {
        (**self).draw_frame(now_secs);
    }

    fn resize(&mut self, width: u32, height: u32) {
        (**self).resize(width, height);
    }

    fn canvas(&self) -> &Canvas {
        (**self).canvas()
    }
}

/// Lifecycle state of an [`AnimationLoop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    /// Built, not drawing yet.
    #[default]
    Created,
    /// Drawing every frame.
    Running,
    /// Torn down, never draws again.
    Stopped,
}

/// Wraps a component with the Created → Running → Stopped state machine.
#[derive(Debug)]
pub struct AnimationLoop<A> {
    inner: A,
    state: LoopState,
    frames: u64,
}

impl<A: Animated> AnimationLoop<A> {
    /// Wraps a component in the Created state.
    #[must_use]
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            state: LoopState::Created,
            frames: 0,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Starts the loop and draws the first frame immediately.
    ///
    /// Starting a Running loop is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`VizError::InvalidTransition`] if the loop was stopped.
    pub fn start(&mut self, now_secs: f64) -> VizResult<()> {
        match self.state {
            LoopState::Created => {
                self.state = LoopState::Running;
                self.tick(now_secs);
                Ok(())
            }
            LoopState::Running => Ok(()),
            LoopState::Stopped => {
                debug!("refusing to restart a stopped animation loop");
                Err(VizError::InvalidTransition {
                    from: LoopState::Stopped,
                    to: LoopState::Running,
                })
            }
        }
    }

    /// Draws one frame if running. Returns whether a frame was drawn.
    pub fn tick(&mut self, now_secs: f64) -> bool {
        if self.state != LoopState::Running {
            return false;
        }
        self.inner.draw_frame(now_secs);
        self.frames += 1;
        true
    }

    /// Forwards a resize unless stopped. Returns whether it was applied.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if self.state == LoopState::Stopped {
            return false;
        }
        self.inner.resize(width, height);
        true
    }

    /// Stops the loop for good.
    pub fn stop(&mut self) {
        if self.state != LoopState::Stopped {
            debug!(from = ?self.state, frames = self.frames, "animation loop stopped");
        }
        self.state = LoopState::Stopped;
    }

    /// Frames drawn by this loop.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The wrapped component.
    #[must_use]
    pub fn inner(&self) -> &A {
        &self.inner
    }
}
