//! Color types
//!
//! [`Rgba`] is the canonical representation. [`Hsl`] and [`Hwb`] are read
//! off it for serializing the cylindrical CSS notations and for hue sorting;
//! the conversion math is `csscolorparser`'s.
//!
//! # Example
//!
//! ```
//! use color_notation::Rgba;
//!
//! let orange = Rgba::rgb(255, 165, 0);
//! let hsl = orange.to_hsl();
//! assert_eq!(hsl.h.round(), 39.0);
//! assert_eq!(hsl.l.round(), 50.0);
//! ```

mod rgba;

pub use rgba::Rgba;

/// A color in HSL.
///
/// - `h`: hue in degrees, 0.0..360.0 (0 for achromatic colors)
/// - `s`: saturation in percent, 0.0..=100.0
/// - `l`: lightness in percent, 0.0..=100.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub alpha: f32,
}

/// A color in HWB. Whiteness and blackness are in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hwb {
    pub h: f32,
    pub w: f32,
    pub b: f32,
    pub alpha: f32,
}

/// Wrap a hue angle into 0.0..360.0. Achromatic colors have no hue.
pub(crate) fn normalize_hue(h: f32) -> f32 {
    if h.is_nan() {
        0.0
    } else {
        h.rem_euclid(360.0)
    }
}
