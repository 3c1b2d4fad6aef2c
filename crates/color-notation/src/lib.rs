//! color-notation: CSS color parsing, conversion and serialization
//!
//! This library reads the CSS color notations found in stylesheets and
//! re-encodes them into the notations used for palette reports. Parsing,
//! the named-color table and the HSL/HWB conversions come from
//! `csscolorparser`; this crate restricts input to stylesheet notations and
//! owns the output formatting and the achromatic and darkness predicates.
//!
//! # Quick Start
//!
//! ```
//! use color_notation::{ColorFormat, Rgba};
//!
//! let color: Rgba = "rgb(255, 165, 0)".parse().unwrap();
//! assert_eq!(ColorFormat::HexString.encode(color), "#FFA500");
//! assert_eq!(ColorFormat::Keyword.encode(color), "orange");
//! assert!(!color.is_dark());
//! ```
//!
//! # Achromatic Colors
//!
//! Two predicates classify colors without hue:
//!
//! - [`Rgba::is_grey`]: equal channels, excluding pure black and pure white
//! - [`Rgba::is_monochrome`]: equal channels, including black and white
//!
//! # Darkness
//!
//! [`Rgba::is_dark`] uses YIQ brightness (`(299 R + 587 G + 114 B) / 1000`)
//! with a threshold of 128. It is a property of the color, not of its
//! notation, so every encoding of the same color gives the same answer.

pub mod color;
pub mod error;
pub mod format;
pub mod parse;


pub use color::{Hsl, Hwb, Rgba};
pub use error::ParseColorError;
pub use format::ColorFormat;
pub use parse::{is_color_function, named_color, parse_color};
