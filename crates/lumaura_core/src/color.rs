//! Structured RGBA color.
//!
//! Colors arrive as CSS-style `rgb(...)` / `rgba(...)` text in scene files and
//! component options. They are parsed once into [`Color`]; per-frame code only
//! ever derives new values with [`Color::with_alpha`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while parsing color text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Text does not start with `rgb(` or `rgba(`.
    #[error("unsupported color form: {0:?}")]
    UnsupportedForm(String),

    /// Missing closing parenthesis.
    #[error("unterminated color: {0:?}")]
    Unterminated(String),

    /// Wrong number of comma separated components.
    #[error("expected {expected} color components, found {found}")]
    ComponentCount {
        /// Components required by the form.
        expected: usize,
        /// Components present in the text.
        found: usize,
    },

    /// A channel is not an integer in 0..=255.
    #[error("invalid color channel: {0:?}")]
    InvalidChannel(String),

    /// Alpha is not a number in [0, 1].
    #[error("invalid alpha: {0:?}")]
    InvalidAlpha(String),
}

/// RGBA color with 8-bit channels and a real alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha (0-1).
    pub a: f32,
}

impl Color {
    /// Fully transparent black, the "no background" marker.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Creates a color from channels and alpha.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Returns the same channels with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// True when painting this color has no visible effect.
    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (body, has_alpha) = if let Some(rest) = text.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = text.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(ColorParseError::UnsupportedForm(text.to_string()));
        };

        let body = body
            .strip_suffix(')')
            .ok_or_else(|| ColorParseError::Unterminated(text.to_string()))?;

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if has_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(ColorParseError::ComponentCount {
                expected,
                found: parts.len(),
            });
        }

        let channel = |part: &str| {
            part.parse::<u8>()
                .map_err(|_| ColorParseError::InvalidChannel(part.to_string()))
        };

        let alpha = if has_alpha {
            let raw = parts[3];
            let a: f32 = raw
                .parse()
                .map_err(|_| ColorParseError::InvalidAlpha(raw.to_string()))?;
            if !(0.0..=1.0).contains(&a) {
                return Err(ColorParseError::InvalidAlpha(raw.to_string()));
            }
            a
        } else {
            1.0
        };

        Ok(Self::rgba(
            channel(parts[0])?,
            channel(parts[1])?,
            channel(parts[2])?,
            alpha,
        ))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
