//! Color parsing, conversion and derived colors.
//!
//! Derived colors are computed in HSL and returned as upper-case hex.
//!
//! # Example
//!
//! ```
//! use stylekit::color::{analogous, complementary, darken, to_rgba};
//!
//! assert_eq!(complementary("#FF0000").unwrap(), "#00FFFF");
//! assert_eq!(analogous("#FF0000", 30.0).unwrap(), "#FF8000");
//! assert_eq!(darken("#FFFFFF", 100.0).unwrap(), "#000000");
//! assert_eq!(to_rgba("red", 0.5).unwrap(), "rgba(255, 0, 0, 0.5)");
//! ```

mod convert;
mod parse;

pub use convert::{Hsla, Rgba};
pub use parse::parse_color;

use convert::round;

use crate::types::format_number;
use crate::{Error, Result};

/// Whether a string parses as a color.
pub fn is_valid_color(color: &str) -> bool {
    parse_color(color).is_ok()
}

/// Format a color as `rgba(r, g, b, alpha)` with `alpha` clamped to `[0, 1]`.
pub fn to_rgba(color: &str, alpha: f64) -> Result<String> {
    let [r, g, b] = parse_color(color)?.to_rgb8();
    let alpha = alpha.clamp(0.0, 1.0);
    Ok(format!("rgba({r}, {g}, {b}, {})", format_number(alpha)))
}

/// Raise HSL lightness by `amount` percentage points.
pub fn lighten(color: &str, amount: f64) -> Result<String> {
    let hsl = parse_color(color)?.to_hsla();
    Ok(hsl.shift_lightness(amount).to_rgba().to_hex())
}

/// Lower HSL lightness by `amount` percentage points.
pub fn darken(color: &str, amount: f64) -> Result<String> {
    let hsl = parse_color(color)?.to_hsla();
    Ok(hsl.shift_lightness(-amount).to_rgba().to_hex())
}

/// The color on the opposite side of the hue wheel.
pub fn complementary(color: &str) -> Result<String> {
    let hsl = parse_color(color)?.to_hsla();
    Ok(hsl.rotate(180.0).to_rgba().to_hex())
}

/// Rotate the hue by `angle` degrees, which must lie strictly between 0
/// and 360. The conventional angle is 30.
pub fn analogous(color: &str, angle: f64) -> Result<String> {
    let hsl = parse_color(color)?.to_hsla();
    if !(angle > 0.0 && angle < 360.0) {
        return Err(Error::out_of_range(
            "Angle must be between 1 and 359 degrees.",
            angle,
        ));
    }
    Ok(hsl.rotate(angle).to_rgba().to_hex())
}

/// Parse any color into rounded `[r, g, b]`.
pub fn parse_rgb(color: &str) -> Result<[u8; 3]> {
    Ok(parse_color(color)?.to_rgb8())
}

/// Parse a `#`-prefixed hex color into `[r, g, b]`.
pub fn hex_to_rgb(hex: &str) -> Result<[u8; 3]> {
    hex.trim()
        .strip_prefix('#')
        .and_then(parse::parse_hex)
        .map(Rgba::to_rgb8)
        .ok_or_else(|| Error::invalid_color(hex))
}

/// Round then clamp each channel and format as `#RRGGBB`.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    Rgba::rgb(round(r), round(g), round(b)).to_hex()
}

/// HSL (degrees, percent, percent) to rounded `[r, g, b]`.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [u8; 3] {
    Hsla::new(h, s, l, 1.0).to_rgba().to_rgb8()
}

/// RGB to rounded `[h, s, l]`.
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> [u16; 3] {
    let hsl = Rgba::rgb(r, g, b).to_hsla();
    [round(hsl.h), round(hsl.s), round(hsl.l)].map(|v| v as u16)
}

/// HSL (degrees, percent, percent) to `#RRGGBB`.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    Hsla::new(h, s, l, 1.0).to_rgba().to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_value(hex: &str) -> u32 {
        u32::from_str_radix(&hex[1..], 16).unwrap()
    }

    #[test]
    fn rgba_strings() {
        assert_eq!(to_rgba("#FF0000", 1.0).unwrap(), "rgba(255, 0, 0, 1)");
        assert_eq!(to_rgba("rgb(0, 255, 0)", 1.0).unwrap(), "rgba(0, 255, 0, 1)");
        assert_eq!(to_rgba("hsl(240, 100%, 50%)", 1.0).unwrap(), "rgba(0, 0, 255, 1)");
        assert_eq!(to_rgba("#FF0000", 1.5).unwrap(), "rgba(255, 0, 0, 1)");
        assert_eq!(to_rgba("#FF0000", -0.5).unwrap(), "rgba(255, 0, 0, 0)");
        assert_eq!(to_rgba("#FFFFFF", 1.0).unwrap(), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn invalid_colors_are_rejected_everywhere() {
        let err = Error::InvalidColor("not-a-color".into());
        assert_eq!(to_rgba("not-a-color", 1.0), Err(err.clone()));
        assert_eq!(lighten("not-a-color", 20.0), Err(err.clone()));
        assert_eq!(darken("not-a-color", 20.0), Err(err.clone()));
        assert_eq!(complementary("not-a-color"), Err(err.clone()));
        assert_eq!(analogous("not-a-color", 30.0), Err(err.clone()));
        assert!(err.to_string().contains("Invalid color format"));
    }

    #[test]
    fn lighten_and_darken() {
        for color in ["#000000", "#800000", "#FF0000", "#FFFFFF"] {
            assert!(hex_value(&lighten(color, 20.0).unwrap()) >= hex_value(color));
            assert!(hex_value(&darken(color, 20.0).unwrap()) <= hex_value(color));
        }
        assert_eq!(lighten("#000000", 100.0).unwrap(), "#FFFFFF");
        assert_eq!(lighten("#FFFFFF", 20.0).unwrap(), "#FFFFFF");
        assert_eq!(lighten("#800000", 0.0).unwrap(), "#800000");
        assert_eq!(darken("#000000", 20.0).unwrap(), "#000000");
        assert_eq!(darken("#800000", 0.0).unwrap(), "#800000");
    }

    #[test]
    fn complementary_colors() {
        assert_eq!(complementary("#FF0000").unwrap(), "#00FFFF");
        assert_eq!(complementary("rgb(0, 255, 0)").unwrap(), "#FF00FF");
        assert_eq!(complementary("hsl(60, 100%, 50%)").unwrap(), "#0000FF");
        assert_eq!(complementary("#808080").unwrap(), "#808080");
        assert_eq!(complementary("#000000").unwrap(), "#000000");
    }

    #[test]
    fn analogous_colors() {
        assert_eq!(analogous("#FF0000", 30.0).unwrap(), "#FF8000");
        assert_eq!(analogous("#00FF00", 30.0).unwrap(), "#00FF80");
        assert_eq!(analogous("#0000FF", 30.0).unwrap(), "#8000FF");
        assert_eq!(analogous("#FF0000", 60.0).unwrap(), "#FFFF00");
        assert_eq!(analogous("#00FF00", 45.0).unwrap(), "#00FFBF");
        assert_eq!(analogous("#0000FF", 90.0).unwrap(), "#FF0080");
        assert_eq!(analogous("rgb(255, 0, 0)", 30.0).unwrap(), "#FF8000");
        assert_eq!(analogous("hsl(0, 100%, 50%)", 30.0).unwrap(), "#FF8000");
    }

    #[test]
    fn analogous_matches_manual_rotation() {
        let [r, g, b] = parse_rgb("#0000FF").unwrap();
        let [h, s, l] = rgb_to_hsl(f64::from(r), f64::from(g), f64::from(b));
        let [er, eg, eb] = hsl_to_rgb(
            f64::from((h + 90) % 360),
            f64::from(s),
            f64::from(l),
        );
        let expected = rgb_to_hex(f64::from(er), f64::from(eg), f64::from(eb));
        assert_eq!(analogous("#0000FF", 90.0).unwrap(), expected);
    }

    #[test]
    fn analogous_angle_bounds() {
        assert!(matches!(
            analogous("#FF0000", 0.0),
            Err(Error::OutOfRange { .. })
        ));
        assert!(analogous("#FF0000", 360.0).is_err());
        assert!(analogous("#FF0000", f64::NAN).is_err());
    }

    #[test]
    fn conversions() {
        assert_eq!(rgb_to_hex(255.0, 0.0, 0.0), "#FF0000");
        assert_eq!(rgb_to_hex(300.0, -50.0, 1000.0), "#FF00FF");
        assert_eq!(rgb_to_hex(128.4, 0.6, 255.9), "#8001FF");

        assert_eq!(hex_to_rgb("#00FF00").unwrap(), [0, 255, 0]);
        assert_eq!(hex_to_rgb("#F00").unwrap(), [255, 0, 0]);
        assert!(hex_to_rgb("#GG0000").is_err());
        assert!(hex_to_rgb("red").is_err());

        assert_eq!(rgb_to_hsl(255.0, 0.0, 0.0), [0, 100, 50]);
        assert_eq!(rgb_to_hsl(0.0, 255.0, 0.0), [120, 100, 50]);
        assert_eq!(rgb_to_hsl(128.0, 128.0, 128.0), [0, 0, 50]);
        assert_eq!(rgb_to_hsl(255.0, 255.0, 255.0), [0, 0, 100]);

        assert_eq!(hsl_to_rgb(240.0, 100.0, 50.0), [0, 0, 255]);
        assert_eq!(hsl_to_rgb(0.0, 0.0, 50.0), [128, 128, 128]);
        assert_eq!(hsl_to_rgb(-360.0, 100.0, 50.0), [255, 0, 0]);

        assert_eq!(hsl_to_hex(120.0, 100.0, 50.0), "#00FF00");
        assert_eq!(hsl_to_hex(0.0, 0.0, 50.0), "#808080");
        assert_eq!(hsl_to_hex(0.0, 0.0, 100.0), "#FFFFFF");
    }

    #[test]
    fn validity() {
        assert!(is_valid_color("rebeccapurple"));
        assert!(is_valid_color("#abcd"));
        assert!(!is_valid_color("#abcde"));
    }
}
