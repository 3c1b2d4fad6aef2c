//! Error types for color parsing
//!
//! This module provides the error returned when a CSS color string or a
//! color format name cannot be understood.

use std::fmt;

/// Error type for parsing CSS color strings.
///
/// Returned when a string is not one of the supported notations: hex,
/// `rgb()`/`rgba()`, `hsl()`/`hsla()`, `hwb()`, or a named keyword.
#[derive(Debug)]
pub enum ParseColorError {
    /// Input was empty after trimming
    Empty,
    /// Not a notation found in stylesheets (bad hex length, unknown function)
    Unsupported(String),
    /// A supported notation with malformed contents
    Invalid(csscolorparser::ParseColorError),
    /// Identifier is not a CSS color keyword
    UnknownKeyword(String),
    /// Name is not one of the supported output notations
    UnknownFormat(String),
}

impl From<csscolorparser::ParseColorError> for ParseColorError {
    fn from(err: csscolorparser::ParseColorError) -> Self {
        ParseColorError::Invalid(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::Empty => write!(f, "empty color string"),
            ParseColorError::Unsupported(text) => {
                write!(f, "unsupported color notation: {}", text)
            }
            ParseColorError::Invalid(err) => write!(f, "malformed color: {}", err),
            ParseColorError::UnknownKeyword(name) => write!(f, "unknown color keyword: {}", name),
            ParseColorError::UnknownFormat(name) => write!(
                f,
                "unknown color format '{}' (expected hexString, rgbString, percentString, hslString, hwbString or keyword)",
                name
            ),
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::Invalid(err) => Some(err),
            _ => None,
        }
    }
}
