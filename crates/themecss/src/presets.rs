//! Built-in defaults and the neutral starter theme.
//!
//! Font stacks and shadow parameters mirror Tailwind's own `theme.css`; the
//! neutral palette is the shadcn/ui neutral base in OKLCH.

use std::collections::BTreeMap;

use crate::config::{ThemeConfig, ThemeFonts, ThemeObject, ThemeProperties};

pub const DEFAULT_RADIUS: &str = "0.625rem";

pub const DEFAULT_SURFACE: &str = "default";

/// Tailwind's base spacing unit.
pub const DEFAULT_SPACING: &str = "0.25rem";

pub const DEFAULT_BUTTON_PADDING: &str = "0.5rem 1rem";
pub const DEFAULT_BUTTON_PADDING_Y: &str = "0.5rem";
pub const DEFAULT_BUTTON_PADDING_X: &str = "1rem";
pub const DEFAULT_INPUT_PADDING_Y: &str = "0.5rem";
pub const DEFAULT_INPUT_PADDING_X: &str = "0.75rem";
pub const DEFAULT_CARD_PADDING: &str = "1.5rem";
pub const DEFAULT_SECTION_PADDING_Y: &str = "4rem";
pub const DEFAULT_SECTION_PADDING_X: &str = "1rem";

/// Default value for each spacing token.
pub const SPACING_DEFAULTS: [(&str, &str); 9] = [
    ("spacing", DEFAULT_SPACING),
    ("button-padding", DEFAULT_BUTTON_PADDING),
    ("button-padding-y", DEFAULT_BUTTON_PADDING_Y),
    ("button-padding-x", DEFAULT_BUTTON_PADDING_X),
    ("input-padding-y", DEFAULT_INPUT_PADDING_Y),
    ("input-padding-x", DEFAULT_INPUT_PADDING_X),
    ("card-padding", DEFAULT_CARD_PADDING),
    ("section-padding-y", DEFAULT_SECTION_PADDING_Y),
    ("section-padding-x", DEFAULT_SECTION_PADDING_X),
];

/// Tailwind's system font stacks.
pub struct DefaultFonts {
    pub sans: &'static str,
    pub serif: &'static str,
    pub mono: &'static str,
}

pub const DEFAULT_FONTS: DefaultFonts = DefaultFonts {
    sans: "ui-sans-serif, system-ui, sans-serif, 'Apple Color Emoji', 'Segoe UI Emoji', 'Segoe UI Symbol',\n    'Noto Color Emoji'",
    serif: "ui-serif, Georgia, Cambria, 'Times New Roman', Times, serif",
    mono: "ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, 'Liberation Mono', 'Courier New',\n    monospace",
};

/// Tailwind's `shadow-sm` decomposed into shadow parameters.
pub const DEFAULT_SHADOWS: [(&str, &str); 6] = [
    ("shadow-color", "hsl(0 0% 0%)"),
    ("shadow-opacity", "0.1"),
    ("shadow-blur", "3px"),
    ("shadow-spread", "0px"),
    ("shadow-offset-x", "0"),
    ("shadow-offset-y", "1px"),
];

const NEUTRAL_LIGHT: &[(&str, &str)] = &[
    ("background", "oklch(1 0 0)"),
    ("foreground", "oklch(0.145 0 0)"),
    ("card", "oklch(1 0 0)"),
    ("card-foreground", "oklch(0.145 0 0)"),
    ("popover", "oklch(1 0 0)"),
    ("popover-foreground", "oklch(0.145 0 0)"),
    ("primary", "oklch(0.205 0 0)"),
    ("primary-foreground", "oklch(0.985 0 0)"),
    ("secondary", "oklch(0.97 0 0)"),
    ("secondary-foreground", "oklch(0.205 0 0)"),
    ("muted", "oklch(0.97 0 0)"),
    ("muted-foreground", "oklch(0.556 0 0)"),
    ("accent", "oklch(0.97 0 0)"),
    ("accent-foreground", "oklch(0.205 0 0)"),
    ("destructive", "oklch(0.577 0.245 27.325)"),
    ("border", "oklch(0.922 0 0)"),
    ("input", "oklch(0.922 0 0)"),
    ("ring", "oklch(0.708 0 0)"),
    ("chart-1", "oklch(0.646 0.222 41.116)"),
    ("chart-2", "oklch(0.6 0.118 184.704)"),
    ("chart-3", "oklch(0.398 0.07 227.392)"),
    ("chart-4", "oklch(0.828 0.189 84.429)"),
    ("chart-5", "oklch(0.769 0.188 70.08)"),
    ("sidebar", "oklch(0.985 0 0)"),
    ("sidebar-foreground", "oklch(0.145 0 0)"),
    ("sidebar-primary", "oklch(0.205 0 0)"),
    ("sidebar-primary-foreground", "oklch(0.985 0 0)"),
    ("sidebar-accent", "oklch(0.97 0 0)"),
    ("sidebar-accent-foreground", "oklch(0.205 0 0)"),
    ("sidebar-border", "oklch(0.922 0 0)"),
    ("sidebar-ring", "oklch(0.708 0 0)"),
];

const NEUTRAL_DARK: &[(&str, &str)] = &[
    ("background", "oklch(0.145 0 0)"),
    ("foreground", "oklch(0.985 0 0)"),
    ("card", "oklch(0.205 0 0)"),
    ("card-foreground", "oklch(0.985 0 0)"),
    ("popover", "oklch(0.205 0 0)"),
    ("popover-foreground", "oklch(0.985 0 0)"),
    ("primary", "oklch(0.922 0 0)"),
    ("primary-foreground", "oklch(0.205 0 0)"),
    ("secondary", "oklch(0.269 0 0)"),
    ("secondary-foreground", "oklch(0.985 0 0)"),
    ("muted", "oklch(0.269 0 0)"),
    ("muted-foreground", "oklch(0.708 0 0)"),
    ("accent", "oklch(0.269 0 0)"),
    ("accent-foreground", "oklch(0.985 0 0)"),
    ("destructive", "oklch(0.704 0.191 22.216)"),
    ("border", "oklch(1 0 0 / 10%)"),
    ("input", "oklch(1 0 0 / 15%)"),
    ("ring", "oklch(0.556 0 0)"),
    ("chart-1", "oklch(0.488 0.243 264.376)"),
    ("chart-2", "oklch(0.696 0.17 162.48)"),
    ("chart-3", "oklch(0.769 0.188 70.08)"),
    ("chart-4", "oklch(0.627 0.265 303.9)"),
    ("chart-5", "oklch(0.645 0.246 16.439)"),
    ("sidebar", "oklch(0.205 0 0)"),
    ("sidebar-foreground", "oklch(0.985 0 0)"),
    ("sidebar-primary", "oklch(0.488 0.243 264.376)"),
    ("sidebar-primary-foreground", "oklch(0.985 0 0)"),
    ("sidebar-accent", "oklch(0.269 0 0)"),
    ("sidebar-accent-foreground", "oklch(0.985 0 0)"),
    ("sidebar-border", "oklch(1 0 0 / 10%)"),
    ("sidebar-ring", "oklch(0.556 0 0)"),
];

/// The neutral starter theme with Tailwind's default fonts, shadows and
/// spacing filled in.
///
/// Light mode carries every shadow parameter; dark mode only overrides the
/// shadow color. Both modes carry all spacing tokens.
pub fn default_theme_config() -> ThemeConfig {
    let spacing: ThemeProperties = SPACING_DEFAULTS.iter().copied().collect();

    let mut light: ThemeProperties = NEUTRAL_LIGHT.iter().copied().collect();
    light.merge(&DEFAULT_SHADOWS.iter().copied().collect());
    light.merge(&spacing);

    let mut dark: ThemeProperties = NEUTRAL_DARK.iter().copied().collect();
    dark.insert("shadow-color", DEFAULT_SHADOWS[0].1);
    dark.merge(&spacing);

    ThemeConfig {
        radius: DEFAULT_RADIUS.to_string(),
        surface: DEFAULT_SURFACE.to_string(),
        fonts: Some(ThemeFonts {
            sans: Some(DEFAULT_FONTS.sans.to_string()),
            serif: Some(DEFAULT_FONTS.serif.to_string()),
            mono: Some(DEFAULT_FONTS.mono.to_string()),
        }),
        theme_object: ThemeObject::new(light, dark),
    }
}

/// Maps token names to CSS custom property names (`background` → `--background`).
pub fn css_vars_from_properties(properties: &ThemeProperties) -> BTreeMap<String, String> {
    properties
        .iter()
        .map(|(name, value)| (format!("--{}", name), value.to_string()))
        .collect()
}
