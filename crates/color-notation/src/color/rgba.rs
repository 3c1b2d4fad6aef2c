//! sRGB color with alpha
//!
//! The canonical in-memory form of every parsed CSS color. Parsing and the
//! cylindrical conversions go through [`csscolorparser::Color`]; this type
//! keeps the 8-bit channels palette reports work with.

use std::str::FromStr;

use csscolorparser::Color;

use super::{normalize_hue, Hsl, Hwb};
use crate::error::ParseColorError;
use crate::parse;

/// A color in sRGB with an alpha channel.
///
/// Channels are 8-bit, matching the precision CSS serializers use. Alpha is
/// in the range 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
    /// Opacity (0.0 transparent ..= 1.0 opaque)
    pub alpha: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        alpha: 0.0,
    };

    /// Create a color from channels and alpha. Alpha is clamped to 0.0..=1.0.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self {
            r,
            g,
            b,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color.
    ///
    /// # Example
    /// ```
    /// use color_notation::Rgba;
    /// let red = Rgba::rgb(255, 0, 0);
    /// assert_eq!(red.alpha, 1.0);
    /// ```
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    /// Create an opaque color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::rgb(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B], dropping alpha.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Whether the color is fully opaque.
    #[inline]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    /// YIQ brightness (0..=255).
    pub fn luminosity(self) -> f32 {
        (self.r as f32 * 299.0 + self.g as f32 * 587.0 + self.b as f32 * 114.0) / 1000.0
    }

    /// Whether light text should be used on top of this color.
    ///
    /// Uses YIQ brightness with a threshold of 128. Alpha is ignored, so the
    /// answer is the same for `#000` and `rgba(0,0,0,0.1)`.
    ///
    /// # Example
    /// ```
    /// use color_notation::Rgba;
    /// assert!(Rgba::rgb(0, 0, 128).is_dark());
    /// assert!(!Rgba::rgb(255, 255, 0).is_dark());
    /// ```
    pub fn is_dark(self) -> bool {
        self.luminosity() < 128.0
    }

    /// Achromatic: all three channels equal, including black and white.
    pub fn is_monochrome(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Achromatic, excluding pure black and pure white.
    pub fn is_grey(self) -> bool {
        self.is_monochrome() && self.r != 0 && self.r != 255
    }

    /// The CSS keyword naming exactly this color, if any.
    ///
    /// Translucent colors have no name. Synonyms (`aqua`/`cyan`,
    /// `gray`/`grey`, …) resolve to whichever spelling `csscolorparser`
    /// reports.
    pub fn name(self) -> Option<&'static str> {
        if self.is_opaque() {
            Color::from(self).name()
        } else {
            None
        }
    }

    /// Convert to HSL.
    pub fn to_hsl(self) -> Hsl {
        let [h, s, l, alpha] = Color::from(self).to_hsla();
        Hsl {
            h: normalize_hue(h),
            s: s * 100.0,
            l: l * 100.0,
            alpha,
        }
    }

    /// Convert to HWB.
    pub fn to_hwb(self) -> Hwb {
        let [h, w, b, alpha] = Color::from(self).to_hwba();
        Hwb {
            h: normalize_hue(h),
            w: w * 100.0,
            b: b * 100.0,
            alpha,
        }
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let [r, g, b, _] = color.to_rgba8();
        Self::new(r, g, b, color.a)
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color::new(
            c.r as f32 / 255.0,
            c.g as f32 / 255.0,
            c.b as f32 / 255.0,
            c.alpha,
        )
    }
}

impl From<[u8; 3]> for Rgba {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    /// Parse any supported CSS color notation.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_notation::Rgba;
    ///
    /// let white: Rgba = "#FFF".parse().unwrap();
    /// assert_eq!(white, Rgba::WHITE);
    ///
    /// let red: Rgba = "hsl(0, 100%, 50%)".parse().unwrap();
    /// assert_eq!(red.to_bytes(), [255, 0, 0]);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_color(s)
    }
}
