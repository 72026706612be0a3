//! Ordered token tables.
//!
//! Every list of variable names the generator emits lives here, once. The
//! per-mode declaration blocks and the Tailwind v4 `@theme inline` alias block
//! both iterate these tables, so a token can't be declared without also being
//! aliased (or the other way around).

use crate::color::TailwindVersion;

/// A semantic color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorToken {
    /// Variable name without the leading `--`.
    pub name: &'static str,
    /// Versions whose conventions include this token.
    pub availability: Availability,
}

/// Which framework versions a token is emitted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// Always emitted; a missing value still produces a line.
    Always,
    /// Emitted only for the given version, and only when the theme sets it.
    OnlyIfPresent(TailwindVersion),
}

impl ColorToken {
    const fn always(name: &'static str) -> Self {
        Self {
            name,
            availability: Availability::Always,
        }
    }

    const fn optional(name: &'static str, version: TailwindVersion) -> Self {
        Self {
            name,
            availability: Availability::OnlyIfPresent(version),
        }
    }

    /// Whether this token belongs to the given version's variable set.
    pub fn applies_to(&self, version: TailwindVersion) -> bool {
        match self.availability {
            Availability::Always => true,
            Availability::OnlyIfPresent(v) => v == version,
        }
    }
}

/// Semantic color tokens, in declaration order.
pub const COLOR_TOKENS: &[ColorToken] = &[
    ColorToken::always("background"),
    ColorToken::always("foreground"),
    ColorToken::always("card"),
    ColorToken::always("card-foreground"),
    ColorToken::always("popover"),
    ColorToken::always("popover-foreground"),
    ColorToken::always("primary"),
    ColorToken::always("primary-foreground"),
    ColorToken::always("secondary"),
    ColorToken::always("secondary-foreground"),
    ColorToken::always("muted"),
    ColorToken::always("muted-foreground"),
    ColorToken::always("accent"),
    ColorToken::always("accent-foreground"),
    ColorToken::always("destructive"),
    // shadcn dropped this token in its Tailwind v4 conventions.
    ColorToken::optional("destructive-foreground", TailwindVersion::V3),
    ColorToken::always("border"),
    ColorToken::always("input"),
    ColorToken::always("ring"),
    ColorToken::always("chart-1"),
    ColorToken::always("chart-2"),
    ColorToken::always("chart-3"),
    ColorToken::always("chart-4"),
    ColorToken::always("chart-5"),
    ColorToken::always("sidebar"),
    ColorToken::always("sidebar-foreground"),
    ColorToken::always("sidebar-primary"),
    ColorToken::always("sidebar-primary-foreground"),
    ColorToken::always("sidebar-accent"),
    ColorToken::always("sidebar-accent-foreground"),
    ColorToken::always("sidebar-border"),
    ColorToken::always("sidebar-ring"),
];

/// Font family variables, in declaration order.
pub const FONT_TOKENS: &[&str] = &["font-sans", "font-serif", "font-mono"];

/// Static `@theme inline` font aliases used when theme fonts aren't inlined.
pub const FONT_ALIAS_FALLBACK: &[&str] = &["font-sans", "font-mono", "font-serif"];

/// Shadow parameter tokens read from a mode's property map.
pub const SHADOW_COLOR: &str = "shadow-color";
pub const SHADOW_OPACITY: &str = "shadow-opacity";
pub const SHADOW_BLUR: &str = "shadow-blur";
pub const SHADOW_SPREAD: &str = "shadow-spread";
pub const SHADOW_OFFSET_X: &str = "shadow-offset-x";
pub const SHADOW_OFFSET_Y: &str = "shadow-offset-y";

/// Shadow scale variable names, smallest to largest.
pub const SHADOW_SCALE: [&str; 8] = [
    "shadow-2xs",
    "shadow-xs",
    "shadow-sm",
    "shadow",
    "shadow-md",
    "shadow-lg",
    "shadow-xl",
    "shadow-2xl",
];

/// Base spacing unit token.
pub const SPACING: &str = "spacing";

/// Spacing tokens, emitted only when present in a mode's map.
pub const SPACING_TOKENS: &[&str] = &[
    SPACING,
    "button-padding",
    "button-padding-y",
    "button-padding-x",
    "input-padding-y",
    "input-padding-x",
    "card-padding",
    "section-padding-y",
    "section-padding-x",
];

/// Multipliers for the derived `--spacing-N` scale.
pub const SPACING_SCALE: [u32; 13] = [0, 1, 2, 3, 4, 5, 6, 8, 10, 12, 16, 20, 24];

/// Radius aliases for `@theme inline`: (suffix, expression).
pub const RADIUS_ALIASES: [(&str, &str); 4] = [
    ("sm", "calc(var(--radius) - 4px)"),
    ("md", "calc(var(--radius) - 2px)"),
    ("lg", "var(--radius)"),
    ("xl", "calc(var(--radius) + 4px)"),
];

/// Name of the `N`th derived spacing variable.
pub fn spacing_step_name(step: u32) -> String {
    format!("spacing-{}", step)
}
