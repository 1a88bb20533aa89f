//! # Effects Error Types

use lumaura_core::ColorParseError;
use thiserror::Error;

/// Errors raised while configuring or controlling effects.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EffectsError {
    /// Size range is not `0 <= min <= max` with finite bounds.
    #[error("invalid particle size range: [{min}, {max})")]
    InvalidSizeRange {
        /// Lower bound.
        min: f32,
        /// Upper bound.
        max: f32,
    },

    /// Speed is negative or not finite.
    #[error("invalid particle speed: {0}")]
    InvalidSpeed(f32),

    /// Color text could not be parsed.
    #[error(transparent)]
    Color(#[from] ColorParseError),
}

/// Result type for effects operations.
pub type EffectsResult<T> = Result<T, EffectsError>;
