//! RGB and HSL color models.

use std::fmt::Write as _;

/// An sRGB color with unrounded channels in `0..=255` and alpha in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// A color in HSL: hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

/// Round half up, the way JavaScript's `Math.round` does.
pub(crate) fn round(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn channel(value: f64) -> u8 {
    round(value).clamp(0.0, 255.0) as u8
}

impl Rgba {
    /// Create a color from channels and alpha. Channels are clamped to
    /// `0..=255` and alpha to `0..=1`.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: r.clamp(0.0, 255.0),
            g: g.clamp(0.0, 255.0),
            b: b.clamp(0.0, 255.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// An opaque color.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Rounded channels.
    pub fn to_rgb8(self) -> [u8; 3] {
        [channel(self.r), channel(self.g), channel(self.b)]
    }

    /// Upper-case hex: `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(self) -> String {
        let mut hex = String::with_capacity(9);
        hex.push('#');
        for c in self.to_rgb8() {
            let _ = write!(hex, "{c:02X}");
        }
        if self.a < 1.0 {
            let _ = write!(hex, "{:02X}", channel(self.a * 255.0));
        }
        hex
    }

    /// Convert to HSL.
    pub fn to_hsla(self) -> Hsla {
        let r = self.r / 255.0;
        let g = self.g / 255.0;
        let b = self.b / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return Hsla {
                h: 0.0,
                s: 0.0,
                l: l * 100.0,
                a: self.a,
            };
        }

        let s = delta / (1.0 - (2.0 * l - 1.0).abs());
        let h = if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        Hsla {
            h,
            s: s * 100.0,
            l: l * 100.0,
            a: self.a,
        }
    }
}

impl From<[u8; 3]> for Rgba {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(f64::from(r), f64::from(g), f64::from(b))
    }
}

impl Hsla {
    /// Create an HSL color. The hue wraps modulo 360; saturation and
    /// lightness are clamped to `0..=100`.
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Rotate the hue by `degrees`.
    pub fn rotate(self, degrees: f64) -> Self {
        Self::new(self.h + degrees, self.s, self.l, self.a)
    }

    /// Shift lightness by `amount` percentage points, clamped.
    pub fn shift_lightness(self, amount: f64) -> Self {
        Self::new(self.h, self.s, self.l + amount, self.a)
    }

    /// Convert to RGB.
    pub fn to_rgba(self) -> Rgba {
        let h = self.h.rem_euclid(360.0);
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match (h / 60.0) as u8 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgba::new((r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_rounds_up() {
        assert_eq!(round(127.5), 128.0);
        assert_eq!(round(0.4), 0.0);
        assert_eq!(round(-0.5), 0.0);
    }

    #[test]
    fn hex_output() {
        assert_eq!(Rgba::rgb(255.0, 0.0, 128.0).to_hex(), "#FF0080");
        assert_eq!(Rgba::new(0.0, 0.0, 0.0, 0.5).to_hex(), "#00000080");
    }

    #[test]
    fn primary_hues() {
        let hsl = Rgba::rgb(0.0, 0.0, 255.0).to_hsla();
        assert_eq!((hsl.h, hsl.s, hsl.l), (240.0, 100.0, 50.0));
        assert_eq!(Hsla::new(120.0, 100.0, 50.0, 1.0).to_rgba().to_rgb8(), [0, 255, 0]);
    }

    #[test]
    fn hue_wraps() {
        let red = [255, 0, 0];
        assert_eq!(Hsla::new(360.0, 100.0, 50.0, 1.0).to_rgba().to_rgb8(), red);
        assert_eq!(Hsla::new(-360.0, 100.0, 50.0, 1.0).to_rgba().to_rgb8(), red);
        assert_eq!(Hsla::new(0.0, 100.0, 50.0, 1.0).rotate(720.0).to_rgba().to_rgb8(), red);
    }

    #[test]
    fn lightness_is_clamped() {
        let white = Hsla::new(0.0, 0.0, 100.0, 1.0).shift_lightness(20.0);
        assert_eq!(white.l, 100.0);
        assert_eq!(white.to_rgba().to_hex(), "#FFFFFF");
    }
}
