//! # Core Error Types

use thiserror::Error;

use crate::color::ColorParseError;
use crate::lifecycle::LoopState;

/// Errors raised by the core primitives.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VizError {
    /// A lifecycle transition that the state machine does not allow.
    #[error("invalid animation loop transition: {from:?} -> {to:?}")]
    InvalidTransition {
        /// State before the request.
        from: LoopState,
        /// Requested state.
        to: LoopState,
    },

    /// Color text could not be parsed.
    #[error(transparent)]
    Color(#[from] ColorParseError),
}

/// Result type for core operations.
pub type VizResult<T> = Result<T, VizError>;
