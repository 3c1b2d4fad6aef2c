//! Parsing of CSS color notations
//!
//! Supported forms:
//! - `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - `rgb()` / `rgba()` with numbers or percentages
//! - `hsl()` / `hsla()` with optional hue units (`deg`, `rad`, `grad`, `turn`)
//! - `hwb()`
//! - the 148 named colors and `transparent`
//!
//! The notation itself is read by `csscolorparser`. This module narrows it
//! to what a stylesheet can contain: `csscolorparser` also takes bare hex
//! digits and non-CSS functions such as `hsv()`, which are refused here.

use csscolorparser::Color;

use crate::color::Rgba;
use crate::error::ParseColorError;

/// Parse a CSS color string. Leading and trailing whitespace is ignored.
pub fn parse_color(input: &str) -> Result<Rgba, ParseColorError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ParseColorError::Empty);
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    if let Some(open) = s.find('(') {
        let name = s[..open].trim();
        if !is_color_function(name) {
            return Err(ParseColorError::Unsupported(s.to_string()));
        }
        return read(s);
    }

    named_color(s)
        .or_else(|| s.eq_ignore_ascii_case("transparent").then_some(Rgba::TRANSPARENT))
        .ok_or_else(|| ParseColorError::UnknownKeyword(s.to_string()))
}

/// Parse the digits of a hex color (without the leading `#`).
pub fn parse_hex(hex: &str) -> Result<Rgba, ParseColorError> {
    if !matches!(hex.len(), 3 | 4 | 6 | 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ParseColorError::Unsupported(format!("#{hex}")));
    }
    read(&format!("#{hex}"))
}

/// Look up a named color keyword, ignoring ASCII case.
///
/// `transparent` and `currentcolor` are not named colors. Identifiers made
/// only of hex digits (`add`, `beef`) are refused even though
/// `csscolorparser` would read them as hex.
pub fn named_color(name: &str) -> Option<Rgba> {
    if name.eq_ignore_ascii_case("transparent") || name.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    name.parse::<Color>().ok().map(Rgba::from)
}

/// Whether `name` introduces a color function this crate can parse.
pub fn is_color_function(name: &str) -> bool {
    matches!(
        name.to_ascii_lowercase().as_str(),
        "rgb" | "rgba" | "hsl" | "hsla" | "hwb"
    )
}

fn read(s: &str) -> Result<Rgba, ParseColorError> {
    Ok(s.parse::<Color>()?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_forms() {
        assert_eq!(parse_color("#fff").unwrap(), Rgba::WHITE);
        assert_eq!(parse_color("#FF0000").unwrap(), Rgba::rgb(255, 0, 0));
        assert_eq!(parse_color("#ABC").unwrap(), Rgba::rgb(0xAA, 0xBB, 0xCC));

        let translucent = parse_color("#ff000080").unwrap();
        assert_eq!(translucent.to_bytes(), [255, 0, 0]);
        assert!((translucent.alpha - 128.0 / 255.0).abs() < 1e-3);

        let short_alpha = parse_color("#f008").unwrap();
        assert!((short_alpha.alpha - 0x88 as f32 / 255.0).abs() < 1e-3);
    }

    #[test]
    fn test_hex_errors() {
        assert!(matches!(parse_color("#GGG"), Err(ParseColorError::Unsupported(_))));
        assert!(matches!(parse_color("#FFFFF"), Err(ParseColorError::Unsupported(_))));
        assert!(matches!(parse_color("#"), Err(ParseColorError::Unsupported(_))));
        assert!(matches!(parse_color("  "), Err(ParseColorError::Empty)));
    }

    #[test]
    fn test_rgb_functions() {
        assert_eq!(parse_color("rgb(255,0,0)").unwrap(), Rgba::rgb(255, 0, 0));
        assert_eq!(parse_color("rgb(255, 0, 0)").unwrap(), Rgba::rgb(255, 0, 0));
        assert_eq!(parse_color("RGB(100%, 0%, 0%)").unwrap(), Rgba::rgb(255, 0, 0));
        assert_eq!(parse_color("rgb(255 0 0)").unwrap(), Rgba::rgb(255, 0, 0));

        let rgba = parse_color("rgba(0, 0, 0, 0.5)").unwrap();
        assert_eq!(rgba.alpha, 0.5);

        let slash = parse_color("rgb(0 0 0 / 25%)").unwrap();
        assert_eq!(slash.alpha, 0.25);
    }

    #[test]
    fn test_hsl_and_hwb_functions() {
        assert_eq!(parse_color("hsl(0, 100%, 50%)").unwrap(), Rgba::rgb(255, 0, 0));
        assert_eq!(parse_color("hsl(120deg 100% 25%)").unwrap(), Rgba::rgb(0, 128, 0));
        assert_eq!(parse_color("hsl(0.5turn, 100%, 50%)").unwrap(), Rgba::rgb(0, 255, 255));
        assert_eq!(parse_color("hsla(240, 100%, 50%, 1)").unwrap(), Rgba::rgb(0, 0, 255));
        assert_eq!(parse_color("hwb(0 0% 0%)").unwrap(), Rgba::rgb(255, 0, 0));
    }

    #[test]
    fn test_function_errors() {
        assert!(matches!(
            parse_color("rgb(a, b, c)"),
            Err(ParseColorError::Invalid(_))
        ));
        assert!(matches!(
            parse_color("lab(50 20 20)"),
            Err(ParseColorError::Unsupported(_))
        ));
        assert!(matches!(
            parse_color("hsv(0, 100%, 100%)"),
            Err(ParseColorError::Unsupported(_))
        ));
    }

    #[test]
    fn test_keywords() {
        assert_eq!(parse_color("red").unwrap(), Rgba::rgb(255, 0, 0));
        assert_eq!(parse_color("  Navy ").unwrap(), Rgba::rgb(0, 0, 128));
        assert_eq!(parse_color("transparent").unwrap(), Rgba::TRANSPARENT);
        assert!(matches!(
            parse_color("bluish"),
            Err(ParseColorError::UnknownKeyword(name)) if name == "bluish"
        ));
    }

    #[test]
    fn test_named_color() {
        assert_eq!(named_color("RebeccaPurple"), Some(Rgba::rgb(102, 51, 153)));
        assert_eq!(named_color("RED"), Some(Rgba::rgb(255, 0, 0)));
        assert_eq!(named_color("transparent"), None);
        assert_eq!(named_color("currentcolor"), None);
        assert_eq!(named_color("bad"), None);
        assert_eq!(named_color("inherit"), None);
    }

    #[test]
    fn test_is_color_function() {
        assert!(is_color_function("rgba"));
        assert!(is_color_function("HSL"));
        assert!(!is_color_function("linear-gradient"));
        assert!(!is_color_function("var"));
    }
}
