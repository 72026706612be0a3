//! Color formatting for CSS variable output.
//!
//! [`format_color`] takes any CSS color a theme might store (hex, `rgb()`,
//! `hsl()`, `oklch()`, keywords) and rewrites it in the requested
//! [`ColorFormat`], following the conventions of the target
//! [`TailwindVersion`]:
//!
//! | Format | Tailwind v3 | Tailwind v4 |
//! |--------|-------------|-------------|
//! | `hex` | `#4080c0` | `#4080c0` |
//! | `rgb` | `rgb(64, 128, 192)` | `rgb(64, 128, 192)` |
//! | `hsl` | `210 50.3937% 50.1961%` | `hsl(210 50.3937% 50.1961%)` |
//! | `oklch` | `oklch(0.5872 0.1186 250.534)` | same |
//!
//! Tailwind v3 configs wrap HSL variables themselves (`hsl(var(--primary))`),
//! so v3 output is the bare channel triple.
//!
//! # Number formatting
//!
//! Channels are rounded to four decimals, then print as integers when that
//! leaves no fraction and without trailing zeros otherwise. Zero and undefined
//! values (the hue of a gray) print as `0`.
//!
//! # Leniency
//!
//! A value that doesn't parse as a color is returned unchanged. Generation
//! never fails because of a single bad token.

mod named;
mod parse;
mod space;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use parse::parse_color;
pub use space::{Hsl, Oklab, Oklch, Srgb};

/// Output color syntax.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    #[default]
    Oklch,
    Hsl,
    Rgb,
    Hex,
}

impl ColorFormat {
    pub const ALL: [ColorFormat; 4] = [
        ColorFormat::Oklch,
        ColorFormat::Hsl,
        ColorFormat::Rgb,
        ColorFormat::Hex,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorFormat::Oklch => "oklch",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Hex => "hex",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ColorFormat::ALL
            .into_iter()
            .find(|f| f.as_str() == lower)
            .ok_or_else(|| format!("unknown color format '{}' (expected oklch, hsl, rgb or hex)", s))
    }
}

/// Target Tailwind CSS variable conventions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TailwindVersion {
    #[serde(rename = "3")]
    V3,
    #[default]
    #[serde(rename = "4")]
    V4,
}

impl TailwindVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            TailwindVersion::V3 => "3",
            TailwindVersion::V4 => "4",
        }
    }
}

impl fmt::Display for TailwindVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TailwindVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches(['v', 'V']) {
            "3" => Ok(TailwindVersion::V3),
            "4" => Ok(TailwindVersion::V4),
            _ => Err(format!("unknown Tailwind version '{}' (expected 3 or 4)", s)),
        }
    }
}

/// Rewrites a CSS color in the given format.
///
/// Unparseable input is returned as-is.
///
/// # Example
///
/// ```rust
/// use themecss::{format_color, ColorFormat, TailwindVersion};
///
/// assert_eq!(format_color("#fff", ColorFormat::Oklch, TailwindVersion::V4), "oklch(1 0 0)");
/// assert_eq!(format_color("#ff0000", ColorFormat::Hsl, TailwindVersion::V4), "hsl(0 100% 50%)");
/// assert_eq!(format_color("#ff0000", ColorFormat::Hsl, TailwindVersion::V3), "0 100% 50%");
/// assert_eq!(format_color("rgb(64 128 192)", ColorFormat::Hex, TailwindVersion::V4), "#4080c0");
/// ```
pub fn format_color(value: &str, format: ColorFormat, version: TailwindVersion) -> String {
    let Some(color) = parse_color(value) else {
        if !value.trim().is_empty() {
            tracing::warn!(value, %format, "failed to convert color, keeping it as written");
        }
        return value.to_string();
    };

    match format {
        ColorFormat::Hex => color.to_hex(),
        ColorFormat::Rgb => color.to_rgb_function(),
        ColorFormat::Hsl => {
            let hsl = color.to_hsl();
            let channels = format!(
                "{} {}% {}%",
                format_number(hsl.h.unwrap_or(0.0)),
                format_number(hsl.s * 100.0),
                format_number(hsl.l * 100.0)
            );
            match version {
                TailwindVersion::V3 => channels,
                TailwindVersion::V4 => format!("hsl({}{})", channels, alpha_suffix(hsl.alpha)),
            }
        }
        ColorFormat::Oklch => {
            let oklch = color.to_oklch();
            format!(
                "oklch({} {} {}{})",
                format_number(oklch.l),
                format_number(oklch.c),
                format_number(oklch.h.unwrap_or(0.0)),
                alpha_suffix(oklch.alpha)
            )
        }
    }
}

/// `0` for zero, the integer for integral values, up to four decimals
/// otherwise.
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return "0".to_string();
    }
    let rounded = (n * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        let s = format!("{:.4}", rounded);
        s.trim_end_matches('0').to_string()
    }
}

fn alpha_suffix(alpha: f64) -> String {
    if alpha < 1.0 {
        format!(" / {}", space::format_alpha(alpha))
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const V3: TailwindVersion = TailwindVersion::V3;
    const V4: TailwindVersion = TailwindVersion::V4;

    #[test]
    fn test_oklch_white_and_black() {
        assert_eq!(format_color("#fff", ColorFormat::Oklch, V4), "oklch(1 0 0)");
        assert_eq!(format_color("#000", ColorFormat::Oklch, V4), "oklch(0 0 0)");
    }

    #[test]
    fn test_oklch_same_in_both_versions() {
        let v3 = format_color("#4080c0", ColorFormat::Oklch, V3);
        let v4 = format_color("#4080c0", ColorFormat::Oklch, V4);
        assert_eq!(v3, v4);
        assert!(v4.starts_with("oklch(0.5"));
    }

    #[test]
    fn test_oklch_keeps_alpha() {
        assert_eq!(
            format_color("oklch(1 0 0 / 10%)", ColorFormat::Oklch, V4),
            "oklch(1 0 0 / 0.1)"
        );
    }

    #[test]
    fn test_hsl_versions() {
        assert_eq!(format_color("red", ColorFormat::Hsl, V4), "hsl(0 100% 50%)");
        assert_eq!(format_color("red", ColorFormat::Hsl, V3), "0 100% 50%");
        assert_eq!(format_color("#ffffff", ColorFormat::Hsl, V4), "hsl(0 0% 100%)");
        assert_eq!(
            format_color("#4080c0", ColorFormat::Hsl, V4),
            "hsl(210 50.3937% 50.1961%)"
        );
    }

    #[test]
    fn test_rgb_and_hex() {
        assert_eq!(format_color("#4080c0", ColorFormat::Rgb, V4), "rgb(64, 128, 192)");
        assert_eq!(format_color("hsl(0 100% 50%)", ColorFormat::Hex, V3), "#ff0000");
        assert_eq!(format_color("oklch(1 0 0)", ColorFormat::Hex, V4), "#ffffff");
        assert_eq!(
            format_color("rgba(0, 0, 0, 0.5)", ColorFormat::Rgb, V4),
            "rgba(0, 0, 0, 0.5)"
        );
    }

    #[test]
    fn test_unparseable_is_returned_unchanged() {
        assert_eq!(format_color("", ColorFormat::Oklch, V4), "");
        assert_eq!(
            format_color("var(--brand)", ColorFormat::Hex, V4),
            "var(--brand)"
        );
        assert_eq!(format_color("0 0% 100%", ColorFormat::Hsl, V3), "0 0% 100%");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::NAN), "0");
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(0.145), "0.145");
        assert_eq!(format_number(-1.5), "-1.5");
        assert_eq!(format_number(29.23391), "29.2339");
        assert_eq!(format_number(209.999_999_999), "210");
        assert_eq!(format_number(0.000_01), "0");
    }

    #[test]
    fn test_oklch_fractions_drop_trailing_zeros() {
        assert_eq!(
            format_color("oklch(0.6 0.1 120)", ColorFormat::Oklch, V4),
            "oklch(0.6 0.1 120)"
        );
        assert_eq!(
            format_color("oklch(0.145 0 0)", ColorFormat::Oklch, V3),
            "oklch(0.145 0 0)"
        );
    }

    #[test]
    fn test_parse_format_and_version() {
        assert_eq!("OKLCH".parse::<ColorFormat>(), Ok(ColorFormat::Oklch));
        assert_eq!("hex".parse::<ColorFormat>(), Ok(ColorFormat::Hex));
        assert!("lab".parse::<ColorFormat>().is_err());

        assert_eq!("3".parse::<TailwindVersion>(), Ok(TailwindVersion::V3));
        assert_eq!("v4".parse::<TailwindVersion>(), Ok(TailwindVersion::V4));
        assert!("5".parse::<TailwindVersion>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ColorFormat::default(), ColorFormat::Oklch);
        assert_eq!(TailwindVersion::default(), TailwindVersion::V4);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&TailwindVersion::V3).unwrap(), "\"3\"");
        assert_eq!(serde_json::to_string(&ColorFormat::Hsl).unwrap(), "\"hsl\"");
        let v: TailwindVersion = serde_json::from_str("\"4\"").unwrap();
        assert_eq!(v, TailwindVersion::V4);
    }
}
