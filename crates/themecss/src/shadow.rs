//! Shadow scale computation.
//!
//! A theme describes its shadow with six parameters (`shadow-color`,
//! `shadow-opacity`, `shadow-blur`, `shadow-spread`, `shadow-offset-x`,
//! `shadow-offset-y`). From those, [`compute_shadow_scale`] derives the eight
//! Tailwind shadow sizes:
//!
//! | Size | Layers |
//! |------|--------|
//! | `2xs`, `xs` | base at half opacity |
//! | `sm`, default | base + `1px 2px` layer |
//! | `md` | base + `2px 4px` layer |
//! | `lg` | base + `4px 6px` layer |
//! | `xl` | base + `8px 10px` layer |
//! | `2xl` | base at 2.5× opacity |
//!
//! The second layer keeps the base x offset, replaces the y offset and blur
//! with the fixed values above, and shrinks the spread by one pixel.

use crate::color::{format_number, parse_color};
use crate::config::{ThemeMode, ThemeObject, ThemeProperties};
use crate::presets::DEFAULT_SHADOWS;
use crate::tokens::{
    SHADOW_BLUR, SHADOW_COLOR, SHADOW_OFFSET_X, SHADOW_OFFSET_Y, SHADOW_OPACITY, SHADOW_SCALE,
    SHADOW_SPREAD,
};

/// Settings for [`compute_shadow_scale`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowScaleOptions {
    /// Shadow parameters used for any the theme doesn't set.
    pub defaults: ThemeProperties,
}

impl Default for ShadowScaleOptions {
    fn default() -> Self {
        Self {
            defaults: DEFAULT_SHADOWS.iter().copied().collect(),
        }
    }
}

/// The eight computed shadow values, in [`SHADOW_SCALE`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowScale {
    entries: Vec<(&'static str, String)>,
}

impl ShadowScale {
    /// Returns the value for a scale name such as `"shadow-md"`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(n, v)| (*n, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolved shadow parameters for one mode.
struct ShadowParams<'a> {
    color: &'a str,
    opacity: f64,
    blur: &'a str,
    spread: &'a str,
    offset_x: &'a str,
    offset_y: &'a str,
}

impl<'a> ShadowParams<'a> {
    fn resolve(props: Option<&'a ThemeProperties>, defaults: &'a ThemeProperties) -> Self {
        let lookup = |token: &str| -> &'a str {
            props
                .and_then(|p| p.non_empty(token))
                .or_else(|| defaults.get(token))
                .unwrap_or("")
        };

        let default_opacity = defaults
            .get(SHADOW_OPACITY)
            .and_then(parse_finite)
            .unwrap_or(0.1);

        Self {
            color: lookup(SHADOW_COLOR),
            opacity: parse_finite(lookup(SHADOW_OPACITY)).unwrap_or(default_opacity),
            blur: lookup(SHADOW_BLUR),
            spread: lookup(SHADOW_SPREAD),
            offset_x: lookup(SHADOW_OFFSET_X),
            offset_y: lookup(SHADOW_OFFSET_Y),
        }
    }

    /// The shadow color as `hsl(H S% L% / alpha)`.
    fn color(&self, opacity_multiplier: f64) -> String {
        let alpha = format!("{:.2}", self.opacity * opacity_multiplier);
        // Any alpha the color carries is replaced by the computed one.
        match parse_color(self.color) {
            Some(color) => {
                let hsl = color.to_hsl();
                format!(
                    "hsl({} {}% {}% / {})",
                    format_number(hsl.h.unwrap_or(0.0)),
                    format_number(hsl.s * 100.0),
                    format_number(hsl.l * 100.0),
                    alpha
                )
            }
            None => self.color.to_string(),
        }
    }

    fn base_layer(&self, opacity_multiplier: f64) -> String {
        format!(
            "{} {} {} {} {}",
            self.offset_x,
            self.offset_y,
            self.blur,
            self.spread,
            self.color(opacity_multiplier)
        )
    }

    fn second_layer(&self, offset_y: &str, blur: &str) -> String {
        let spread = parse_finite(self.spread.trim().trim_end_matches("px")).unwrap_or(0.0) - 1.0;
        format!(
            "{} {} {} {}px {}",
            self.offset_x,
            offset_y,
            blur,
            format_number(spread),
            self.color(1.0)
        )
    }

    fn layered(&self, offset_y: &str, blur: &str) -> String {
        format!("{}, {}", self.base_layer(1.0), self.second_layer(offset_y, blur))
    }
}

/// Parses a number, rejecting `NaN` and infinities.
fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Computes the eight shadow sizes for a mode.
///
/// Parameters missing from the mode's map (or the whole mode) fall back to
/// `options.defaults`.
///
/// # Example
///
/// ```rust
/// use themecss::{compute_shadow_scale, ShadowScaleOptions, ThemeMode, ThemeObject, ThemeProperties};
///
/// let theme = ThemeObject::new(ThemeProperties::new(), ThemeProperties::new());
/// let scale = compute_shadow_scale(&theme, ThemeMode::Light, &ShadowScaleOptions::default());
/// assert_eq!(scale.get("shadow-2xs"), Some("0 1px 3px 0px hsl(0 0% 0% / 0.05)"));
/// ```
pub fn compute_shadow_scale(
    theme_object: &ThemeObject,
    mode: ThemeMode,
    options: &ShadowScaleOptions,
) -> ShadowScale {
    let params = ShadowParams::resolve(theme_object.mode(mode), &options.defaults);

    let entries = SHADOW_SCALE
        .iter()
        .map(|&name| {
            let value = match name {
                "shadow-2xs" | "shadow-xs" => params.base_layer(0.5),
                "shadow-2xl" => params.base_layer(2.5),
                "shadow-md" => params.layered("2px", "4px"),
                "shadow-lg" => params.layered("4px", "6px"),
                "shadow-xl" => params.layered("8px", "10px"),
                // shadow-sm and the default shadow
                _ => params.layered("1px", "2px"),
            };
            (name, value)
        })
        .collect();

    ShadowScale { entries }
}
