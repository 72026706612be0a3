//! Color spaces used by the formatter.
//!
//! Everything converts through gamma-encoded sRGB ([`Srgb`]):
//!
//! ```text
//! hsl ──┐                     ┌── hex / rgb()
//!       ├── Srgb ── linear ───┤
//! oklch ┘    (OKLab via LMS)  └── hsl / oklch
//! ```
//!
//! OKLab uses Björn Ottosson's published matrices; HSL is the usual hexcone
//! model. Channels are `f64` in `0.0..=1.0` and are only quantized to 8 bits
//! when a hex or `rgb()` string is produced.

/// Chroma below this is treated as achromatic (no hue).
const ACHROMATIC_EPSILON: f64 = 1e-6;

// ─── sRGB ───────────────────────────────────────────────────────────────────

/// A gamma-encoded sRGB color with alpha, channels in `0.0..=1.0`.
///
/// Channels may fall slightly outside the unit range after converting from a
/// wider space; [`clamped`](Srgb::clamped) brings them back into gamut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub alpha: f64,
}

impl Srgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    /// Creates a color from 8-bit channels.
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Clips every channel into `0.0..=1.0`.
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            alpha: self.alpha.clamp(0.0, 1.0),
        }
    }

    /// Quantized 8-bit channels.
    pub fn to_u8(self) -> (u8, u8, u8) {
        let c = self.clamped();
        (to_byte(c.r), to_byte(c.g), to_byte(c.b))
    }

    /// `#rrggbb`, lowercase. Alpha is dropped.
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_u8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// `rgb(r, g, b)`, or `rgba(r, g, b, a)` when translucent.
    pub fn to_rgb_function(self) -> String {
        let (r, g, b) = self.to_u8();
        if self.alpha < 1.0 {
            format!("rgba({}, {}, {}, {})", r, g, b, format_alpha(self.alpha))
        } else {
            format!("rgb({}, {}, {})", r, g, b)
        }
    }

    pub fn to_hsl(self) -> Hsl {
        let c = self.clamped();
        let max = c.r.max(c.g).max(c.b);
        let min = c.r.min(c.g).min(c.b);
        let l = (max + min) / 2.0;
        let d = max - min;

        if d == 0.0 {
            return Hsl {
                h: None,
                s: 0.0,
                l,
                alpha: c.alpha,
            };
        }

        let s = d / (1.0 - (max + min - 1.0).abs());
        let h = if max == c.r {
            (c.g - c.b) / d + if c.g < c.b { 6.0 } else { 0.0 }
        } else if max == c.g {
            (c.b - c.r) / d + 2.0
        } else {
            (c.r - c.g) / d + 4.0
        };

        Hsl {
            h: Some(normalize_hue(h * 60.0)),
            s,
            l,
            alpha: c.alpha,
        }
    }

    pub fn to_oklab(self) -> Oklab {
        let r = srgb_to_linear(self.r);
        let g = srgb_to_linear(self.g);
        let b = srgb_to_linear(self.b);

        let l = (0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b).cbrt();
        let m = (0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b).cbrt();
        let s = (0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b).cbrt();

        Oklab {
            l: 0.2104542553 * l + 0.7936177850 * m - 0.0040720468 * s,
            a: 1.9779984951 * l - 2.4285922050 * m + 0.4505937099 * s,
            b: 0.0259040371 * l + 0.7827717662 * m - 0.8086757660 * s,
            alpha: self.alpha,
        }
    }

    pub fn to_oklch(self) -> Oklch {
        self.to_oklab().to_oklch()
    }
}

fn to_byte(c: f64) -> u8 {
    (c * 255.0).round() as u8
}

/// Convert a gamma-encoded sRGB channel to linear light.
fn srgb_to_linear(c: f64) -> f64 {
    let abs = c.abs();
    if abs <= 0.04045 {
        c / 12.92
    } else {
        c.signum() * ((abs + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear light channel back to gamma-encoded sRGB (unclamped).
fn linear_to_srgb(c: f64) -> f64 {
    let abs = c.abs();
    if abs <= 0.0031308 {
        12.92 * c
    } else {
        c.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
    }
}

fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// Alpha as a short decimal: `0.5`, `0.125`, `0`.
pub(crate) fn format_alpha(alpha: f64) -> String {
    let rounded = (alpha * 1000.0).round() / 1000.0;
    let s = format!("{:.3}", rounded);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

// ─── HSL ────────────────────────────────────────────────────────────────────

/// Hue in degrees (`None` for grays), saturation and lightness in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: Option<f64>,
    pub s: f64,
    pub l: f64,
    pub alpha: f64,
}

impl Hsl {
    pub fn to_srgb(self) -> Srgb {
        let h = self.h.map(normalize_hue).unwrap_or(0.0);
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        let channel = |n: f64| {
            let k = (n + h / 30.0) % 12.0;
            let a = s * l.min(1.0 - l);
            l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
        };

        Srgb {
            r: channel(0.0),
            g: channel(8.0),
            b: channel(4.0),
            alpha: self.alpha,
        }
    }
}

// ─── OKLab / OKLCH ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
    pub alpha: f64,
}

impl Oklab {
    pub fn to_oklch(self) -> Oklch {
        let c = (self.a * self.a + self.b * self.b).sqrt();
        if c < ACHROMATIC_EPSILON {
            return Oklch {
                l: self.l,
                c: 0.0,
                h: None,
                alpha: self.alpha,
            };
        }
        Oklch {
            l: self.l,
            c,
            h: Some(normalize_hue(self.b.atan2(self.a).to_degrees())),
            alpha: self.alpha,
        }
    }

    pub fn to_srgb(self) -> Srgb {
        let l = self.l + 0.3963377774 * self.a + 0.2158037573 * self.b;
        let m = self.l - 0.1055613458 * self.a - 0.0638541728 * self.b;
        let s = self.l - 0.0894841775 * self.a - 1.2914855480 * self.b;

        let (l, m, s) = (l * l * l, m * m * m, s * s * s);

        Srgb {
            r: linear_to_srgb(4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s),
            g: linear_to_srgb(-1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s),
            b: linear_to_srgb(-0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s),
            alpha: self.alpha,
        }
    }
}

/// Lightness `0.0..=1.0`, chroma (roughly `0.0..=0.4`), hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: Option<f64>,
    pub alpha: f64,
}

impl Oklch {
    pub fn to_oklab(self) -> Oklab {
        let h = self.h.unwrap_or(0.0).to_radians();
        Oklab {
            l: self.l,
            a: self.c * h.cos(),
            b: self.c * h.sin(),
            alpha: self.alpha,
        }
    }

    pub fn to_srgb(self) -> Srgb {
        self.to_oklab().to_srgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {} ± {}, got {}",
            expected,
            tolerance,
            actual
        );
    }

    /// Assert that sRGB → OKLCH → sRGB lands on the same 8-bit color.
    fn assert_oklch_roundtrip(r: u8, g: u8, b: u8) {
        let color = Srgb::from_u8(r, g, b);
        let back = color.to_oklch().to_srgb();
        assert_eq!(back.to_u8(), (r, g, b), "via {:?}", color.to_oklch());
    }

    #[test]
    fn oklch_roundtrip_primaries() {
        assert_oklch_roundtrip(0, 0, 0);
        assert_oklch_roundtrip(255, 255, 255);
        assert_oklch_roundtrip(255, 0, 0);
        assert_oklch_roundtrip(0, 255, 0);
        assert_oklch_roundtrip(0, 0, 255);
    }

    #[test]
    fn oklch_roundtrip_arbitrary() {
        assert_oklch_roundtrip(200, 100, 50);
        assert_oklch_roundtrip(64, 128, 192);
        assert_oklch_roundtrip(17, 34, 51);
    }

    #[test]
    fn white_is_achromatic_full_lightness() {
        let white = Srgb::new(1.0, 1.0, 1.0).to_oklch();
        assert_close(white.l, 1.0, 1e-6);
        assert_eq!(white.c, 0.0);
        assert!(white.h.is_none());
    }

    #[test]
    fn grays_have_no_hue() {
        let gray = Srgb::from_u8(128, 128, 128).to_oklch();
        assert!(gray.h.is_none());
        assert!(Srgb::from_u8(128, 128, 128).to_hsl().h.is_none());
    }

    #[test]
    fn red_known_oklch() {
        let red = Srgb::new(1.0, 0.0, 0.0).to_oklch();
        assert_close(red.l, 0.6279, 1e-3);
        assert_close(red.c, 0.2577, 1e-3);
        assert_close(red.h.unwrap(), 29.23, 0.05);
    }

    #[test]
    fn hsl_known_values() {
        let hsl = Srgb::from_u8(64, 128, 192).to_hsl();
        assert_close(hsl.h.unwrap(), 210.0, 1e-9);
        assert_close(hsl.s, 128.0 / 254.0, 1e-9);
        assert_close(hsl.l, 0.5019607843, 1e-9);
    }

    #[test]
    fn hsl_roundtrip() {
        for (r, g, b) in [(255, 0, 0), (12, 200, 99), (250, 250, 2), (0, 0, 0)] {
            let back = Srgb::from_u8(r, g, b).to_hsl().to_srgb();
            assert_eq!(back.to_u8(), (r, g, b));
        }
    }

    #[test]
    fn hex_and_rgb_output() {
        let color = Srgb::from_u8(64, 128, 192);
        assert_eq!(color.to_hex(), "#4080c0");
        assert_eq!(color.to_rgb_function(), "rgb(64, 128, 192)");
        assert_eq!(
            color.with_alpha(0.5).to_rgb_function(),
            "rgba(64, 128, 192, 0.5)"
        );
    }

    #[test]
    fn out_of_gamut_is_clipped_for_output() {
        let vivid = Oklch {
            l: 0.7,
            c: 0.4,
            h: Some(150.0),
            alpha: 1.0,
        }
        .to_srgb();
        assert!(vivid.r < 0.0);
        let (r, _, _) = vivid.to_u8();
        assert_eq!(r, 0);
    }

    #[test]
    fn alpha_formatting() {
        assert_eq!(format_alpha(0.5), "0.5");
        assert_eq!(format_alpha(0.1), "0.1");
        assert_eq!(format_alpha(0.125), "0.125");
        assert_eq!(format_alpha(0.0), "0");
        assert_eq!(format_alpha(1.0), "1");
    }
}
