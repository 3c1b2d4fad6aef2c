//! Serialization of colors into CSS notations
//!
//! Output follows the conventions of the classic JavaScript color tooling
//! that front-end palettes are usually audited with: uppercase hex,
//! comma-and-space separated functional notations, integer components, and
//! alpha appended only when the color is translucent.

use std::fmt;
use std::str::FromStr;

use crate::color::{Hsl, Hwb, Rgba};
use crate::error::ParseColorError;

/// Target notation for re-encoding a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// `#FF0000` (alpha is dropped)
    HexString,
    /// `rgb(255, 0, 0)` / `rgba(255, 0, 0, 0.5)`
    RgbString,
    /// `rgb(100%, 0%, 0%)` / `rgba(100%, 0%, 0%, 0.5)`
    PercentString,
    /// `hsl(0, 100%, 50%)` / `hsla(0, 100%, 50%, 0.5)`
    HslString,
    /// `hwb(0, 0%, 0%)` / `hwb(0, 0%, 0%, 0.5)`
    HwbString,
    /// `red`; falls back to hex when no keyword matches exactly
    Keyword,
}

impl ColorFormat {
    /// All formats, in CLI documentation order.
    pub const ALL: [ColorFormat; 6] = [
        ColorFormat::HexString,
        ColorFormat::RgbString,
        ColorFormat::PercentString,
        ColorFormat::HslString,
        ColorFormat::HwbString,
        ColorFormat::Keyword,
    ];

    /// The name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            ColorFormat::HexString => "hexString",
            ColorFormat::RgbString => "rgbString",
            ColorFormat::PercentString => "percentString",
            ColorFormat::HslString => "hslString",
            ColorFormat::HwbString => "hwbString",
            ColorFormat::Keyword => "keyword",
        }
    }

    /// Encode a color in this notation.
    ///
    /// # Example
    /// ```
    /// use color_notation::{ColorFormat, Rgba};
    ///
    /// let red = Rgba::rgb(255, 0, 0);
    /// assert_eq!(ColorFormat::HexString.encode(red), "#FF0000");
    /// assert_eq!(ColorFormat::HslString.encode(red), "hsl(0, 100%, 50%)");
    /// assert_eq!(ColorFormat::Keyword.encode(red), "red");
    /// ```
    pub fn encode(self, color: Rgba) -> String {
        match self {
            ColorFormat::HexString => hex_string(color),
            ColorFormat::RgbString => rgb_string(color),
            ColorFormat::PercentString => percent_string(color),
            ColorFormat::HslString => hsl_string(color.to_hsl()),
            ColorFormat::HwbString => hwb_string(color.to_hwb()),
            ColorFormat::Keyword => keyword(color),
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFormat {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| ParseColorError::UnknownFormat(s.to_string()))
    }
}

/// Alpha rounded to two decimals, printed without trailing zeros.
fn alpha_component(alpha: f32) -> String {
    let rounded = (alpha * 100.0).round() / 100.0;
    format!("{rounded}")
}

fn pct(channel: u8) -> i32 {
    (channel as f32 / 255.0 * 100.0).round() as i32
}

fn hex_string(c: Rgba) -> String {
    format!("#{:02X}{:02X}{:02X}", c.r, c.g, c.b)
}

fn rgb_string(c: Rgba) -> String {
    if c.is_opaque() {
        format!("rgb({}, {}, {})", c.r, c.g, c.b)
    } else {
        format!(
            "rgba({}, {}, {}, {})",
            c.r,
            c.g,
            c.b,
            alpha_component(c.alpha)
        )
    }
}

fn percent_string(c: Rgba) -> String {
    let (r, g, b) = (pct(c.r), pct(c.g), pct(c.b));
    if c.is_opaque() {
        format!("rgb({r}%, {g}%, {b}%)")
    } else {
        format!("rgba({r}%, {g}%, {b}%, {})", alpha_component(c.alpha))
    }
}

fn hsl_string(c: Hsl) -> String {
    let (h, s, l) = (c.h.round() % 360.0, c.s.round(), c.l.round());
    if c.alpha >= 1.0 {
        format!("hsl({h}, {s}%, {l}%)")
    } else {
        format!("hsla({h}, {s}%, {l}%, {})", alpha_component(c.alpha))
    }
}

fn hwb_string(c: Hwb) -> String {
    let (h, w, b) = (c.h.round() % 360.0, c.w.round(), c.b.round());
    if c.alpha >= 1.0 {
        format!("hwb({h}, {w}%, {b}%)")
    } else {
        format!("hwb({h}, {w}%, {b}%, {})", alpha_component(c.alpha))
    }
}

fn keyword(c: Rgba) -> String {
    if c == Rgba::TRANSPARENT {
        return "transparent".to_string();
    }
    match c.name() {
        Some(name) => name.to_string(),
        None => hex_string(c),
    }
}
