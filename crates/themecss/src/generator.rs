//! Stylesheet generation.
//!
//! [`generate`] turns a [`ThemeConfig`] into up to three CSS blocks:
//!
//! ```css
//! :root {            /* fonts, radius, light colors, shadows, spacing */ }
//!
//! .dark {            /* dark colors, shadows, spacing */ }
//!
//! @theme inline {    /* Tailwind v4 only: --color-*, --radius-*, ... aliases */ }
//! ```
//!
//! Every block is built from the ordered tables in [`crate::tokens`], so the
//! declarations and their `@theme inline` aliases always list the same names.
//!
//! # Optional groups
//!
//! [`ThemeVarsOptions`] switches optional groups on:
//!
//! - `font_vars` declares `--font-sans/serif/mono` in `:root` and inlines the
//!   theme's font stacks in `@theme inline`. When off, `@theme inline` still
//!   aliases the three font variables to themselves.
//! - `shadow_vars` declares `--shadow-color` in both modes, the shadow scale in
//!   `:root`, and the shadow aliases.
//! - `spacing_vars` only adds the spacing aliases. Spacing declarations follow
//!   the theme: a spacing token is declared exactly when the mode sets it.

use serde::{Deserialize, Serialize};

use crate::color::{format_color, ColorFormat, TailwindVersion};
use crate::config::{ThemeConfig, ThemeMode, ThemeProperties};
use crate::error::{Result, ThemeError};
use crate::presets::DEFAULT_FONTS;
use crate::shadow::{compute_shadow_scale, ShadowScaleOptions};
use crate::tokens::{
    spacing_step_name, Availability, COLOR_TOKENS, FONT_ALIAS_FALLBACK, FONT_TOKENS,
    RADIUS_ALIASES, SHADOW_COLOR, SHADOW_SCALE, SPACING, SPACING_SCALE, SPACING_TOKENS,
};

/// Used for `--shadow-color` when the mode doesn't set one.
const FALLBACK_SHADOW_COLOR: &str = "#000000";

/// Optional variable groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeVarsOptions {
    pub font_vars: bool,
    pub shadow_vars: bool,
    pub spacing_vars: bool,
}

/// Output settings for [`generate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateOptions {
    pub color_format: ColorFormat,
    pub tailwind_version: TailwindVersion,
    /// Optional groups. `None` leaves every group off.
    pub inline: Option<ThemeVarsOptions>,
}

impl GenerateOptions {
    pub fn new(color_format: ColorFormat, tailwind_version: TailwindVersion) -> Self {
        Self {
            color_format,
            tailwind_version,
            inline: None,
        }
    }

    pub fn with_inline(mut self, inline: ThemeVarsOptions) -> Self {
        self.inline = Some(inline);
        self
    }
}

/// Generates the theme stylesheet.
///
/// The result is the `:root` block and the `.dark` block separated by a blank
/// line, followed for Tailwind v4 by the `@theme inline` alias block. Output is
/// a pure function of the inputs.
///
/// # Errors
///
/// Returns [`ThemeError::InvalidTheme`] if the theme object lacks a `light` or
/// `dark` map. Nothing else fails: colors that can't be parsed are emitted
/// as written.
///
/// # Example
///
/// ```rust
/// use themecss::{default_theme_config, generate, GenerateOptions};
///
/// let css = generate(&default_theme_config(), &GenerateOptions::default()).unwrap();
/// assert!(css.starts_with(":root {"));
/// assert!(css.contains("\n\n.dark {\n"));
/// assert!(css.contains("--color-background: var(--background);"));
/// ```
pub fn generate(config: &ThemeConfig, options: &GenerateOptions) -> Result<String> {
    let (Some(light), Some(dark)) = (
        config.theme_object.light.as_ref(),
        config.theme_object.dark.as_ref(),
    ) else {
        return Err(ThemeError::InvalidTheme);
    };

    let groups = options.inline.unwrap_or_default();
    tracing::debug!(
        format = %options.color_format,
        version = %options.tailwind_version,
        font_vars = groups.font_vars,
        shadow_vars = groups.shadow_vars,
        spacing_vars = groups.spacing_vars,
        "generating theme stylesheet"
    );

    let light_block = mode_block(config, ThemeMode::Light, light, options, groups);
    let dark_block = mode_block(config, ThemeMode::Dark, dark, options, groups);

    match options.tailwind_version {
        TailwindVersion::V3 => Ok(format!("{}\n\n{}", light_block, dark_block)),
        TailwindVersion::V4 => Ok(format!(
            "{}\n\n{}\n\n{}",
            light_block,
            dark_block,
            theme_inline_block(config, groups)
        )),
    }
}

/// Like [`generate`], for callers that may not have a theme at all.
///
/// # Errors
///
/// Returns [`ThemeError::InvalidTheme`] for `None` and for themes missing a mode.
pub fn generate_from(config: Option<&ThemeConfig>, options: &GenerateOptions) -> Result<String> {
    match config {
        Some(config) => generate(config, options),
        None => Err(ThemeError::InvalidTheme),
    }
}

fn mode_block(
    config: &ThemeConfig,
    mode: ThemeMode,
    props: &ThemeProperties,
    options: &GenerateOptions,
    groups: ThemeVarsOptions,
) -> String {
    let colors = color_declarations(props, options.color_format, options.tailwind_version);
    let shadows = if groups.shadow_vars {
        shadow_declarations(config, mode, props, options.color_format)
    } else {
        String::new()
    };
    let spacing = spacing_declarations(props, mode);

    match mode {
        ThemeMode::Light => {
            let fonts = if groups.font_vars {
                font_declarations(config)
            } else {
                String::new()
            };
            format!(
                ":root {{{}\n  --radius: {};\n  {}{}{}\n}}",
                fonts, config.radius, colors, shadows, spacing
            )
        }
        ThemeMode::Dark => format!(".dark {{\n  {}{}{}\n}}", colors, shadows, spacing),
    }
}

/// Color lines joined by newline + indent, without a leading indent.
fn color_declarations(
    props: &ThemeProperties,
    format: ColorFormat,
    version: TailwindVersion,
) -> String {
    COLOR_TOKENS
        .iter()
        .filter_map(|token| {
            let raw = match token.availability {
                Availability::Always => props.get(token.name).unwrap_or(""),
                Availability::OnlyIfPresent(v) if v == version => props.non_empty(token.name)?,
                Availability::OnlyIfPresent(_) => return None,
            };
            Some(format!(
                "--{}: {};",
                token.name,
                format_color(raw, format, version)
            ))
        })
        .collect::<Vec<_>>()
        .join("\n  ")
}

fn resolved_fonts(config: &ThemeConfig) -> [&str; 3] {
    let fonts = config.fonts.as_ref();
    [
        fonts.and_then(|f| f.sans.as_deref()).unwrap_or(DEFAULT_FONTS.sans),
        fonts.and_then(|f| f.serif.as_deref()).unwrap_or(DEFAULT_FONTS.serif),
        fonts.and_then(|f| f.mono.as_deref()).unwrap_or(DEFAULT_FONTS.mono),
    ]
}

/// Wraps declarations in the font group framing: each on its own line, then a
/// trailing newline that leaves a blank line before the next group.
fn font_group<I: IntoIterator<Item = String>>(lines: I) -> String {
    let mut out: String = lines.into_iter().map(|l| format!("\n  {}", l)).collect();
    out.push('\n');
    out
}

fn font_declarations(config: &ThemeConfig) -> String {
    font_group(
        FONT_TOKENS
            .iter()
            .zip(resolved_fonts(config))
            .map(|(name, value)| format!("--{}: {};", name, value)),
    )
}

fn shadow_declarations(
    config: &ThemeConfig,
    mode: ThemeMode,
    props: &ThemeProperties,
    format: ColorFormat,
) -> String {
    let color = props.non_empty(SHADOW_COLOR).unwrap_or(FALLBACK_SHADOW_COLOR);
    // --shadow-color always follows v4 syntax; the scale embeds it in hsl().
    let mut out = format!(
        "\n\n  --{}: {};",
        SHADOW_COLOR,
        format_color(color, format, TailwindVersion::V4)
    );

    if mode == ThemeMode::Light {
        let scale = compute_shadow_scale(&config.theme_object, mode, &ShadowScaleOptions::default());
        for (name, value) in scale.iter() {
            out.push_str(&format!("\n  --{}: {};", name, value));
        }
    }
    out
}

fn spacing_declarations(props: &ThemeProperties, mode: ThemeMode) -> String {
    let mut out = String::new();
    for &token in SPACING_TOKENS {
        let Some(value) = props.non_empty(token) else {
            continue;
        };
        out.push_str(&format!("\n  --{}: {};", token, value));

        if token == SPACING && mode == ThemeMode::Light {
            for step in SPACING_SCALE {
                let value = match step {
                    0 => "0rem".to_string(),
                    n => format!("calc(var(--{}) * {})", SPACING, n),
                };
                out.push_str(&format!("\n  --{}: {};", spacing_step_name(step), value));
            }
        }
    }
    out
}

/// `--name: var(--name);`
fn self_alias(name: &str) -> String {
    format!("--{}: var(--{});", name, name)
}

fn theme_inline_block(config: &ThemeConfig, groups: ThemeVarsOptions) -> String {
    let fonts = if groups.font_vars {
        font_declarations(config)
    } else {
        font_group(FONT_ALIAS_FALLBACK.iter().map(|name| self_alias(name)))
    };

    let radius = RADIUS_ALIASES
        .iter()
        .map(|(size, expr)| format!("--radius-{}: {};", size, expr))
        .collect::<Vec<_>>()
        .join("\n  ");

    let colors = COLOR_TOKENS
        .iter()
        .filter(|token| token.applies_to(TailwindVersion::V4))
        .map(|token| format!("--color-{}: var(--{});", token.name, token.name))
        .collect::<Vec<_>>()
        .join("\n  ");

    let shadows = if groups.shadow_vars {
        let aliases: Vec<_> = SHADOW_SCALE.iter().map(|name| self_alias(name)).collect();
        format!("\n\n  {}", aliases.join("\n  "))
    } else {
        String::new()
    };

    let spacing = if groups.spacing_vars {
        let aliases: Vec<_> = std::iter::once(SPACING.to_string())
            .chain(SPACING_SCALE.iter().map(|&step| spacing_step_name(step)))
            .map(|name| self_alias(&name))
            .collect();
        format!("\n\n  {}", aliases.join("\n  "))
    } else {
        String::new()
    };

    format!(
        "@theme inline {{{}\n  {}\n  {}{}{}\n}}",
        fonts, radius, colors, shadows, spacing
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ThemeFonts, ThemeObject};

    fn theme(light: ThemeProperties, dark: ThemeProperties) -> ThemeConfig {
        ThemeConfig {
            radius: "0.5rem".to_string(),
            surface: String::new(),
            fonts: None,
            theme_object: ThemeObject::new(light, dark),
        }
    }

    fn simple_theme() -> ThemeConfig {
        theme(
            ThemeProperties::new()
                .with("background", "#ffffff")
                .with("foreground", "#000000"),
            ThemeProperties::new()
                .with("background", "#000000")
                .with("foreground", "#ffffff"),
        )
    }

    fn opts(format: ColorFormat, version: TailwindVersion) -> GenerateOptions {
        GenerateOptions::new(format, version)
    }

    fn all_groups() -> ThemeVarsOptions {
        ThemeVarsOptions {
            font_vars: true,
            shadow_vars: true,
            spacing_vars: true,
        }
    }

    fn split_blocks(css: &str) -> Vec<&str> {
        css.split("\n}\n\n").collect()
    }

    #[test]
    fn test_light_block_layout() {
        let css = generate(&simple_theme(), &opts(ColorFormat::Hex, TailwindVersion::V3)).unwrap();
        assert!(css.starts_with(
            ":root {\n  --radius: 0.5rem;\n  --background: #ffffff;\n  --foreground: #000000;\n  --card: ;"
        ));
        assert!(css.contains("\n  --sidebar-ring: ;\n}\n\n.dark {\n  --background: #000000;"));
        assert!(css.ends_with("--sidebar-ring: ;\n}"));
    }

    #[test]
    fn test_oklch_white_and_black() {
        let css = generate(&simple_theme(), &GenerateOptions::default()).unwrap();
        assert!(css.contains(":root {\n  --radius: 0.5rem;\n  --background: oklch(1 0 0);\n  --foreground: oklch(0 0 0);"));
        assert!(css.contains(".dark {\n  --background: oklch(0 0 0);\n  --foreground: oklch(1 0 0);"));
    }

    #[test]
    fn test_v3_has_two_blocks_v4_has_three() {
        let v3 = generate(&simple_theme(), &opts(ColorFormat::Hsl, TailwindVersion::V3)).unwrap();
        assert_eq!(split_blocks(&v3).len(), 2);
        assert!(!v3.contains("@theme inline"));

        let v4 = generate(&simple_theme(), &opts(ColorFormat::Hsl, TailwindVersion::V4)).unwrap();
        let blocks = split_blocks(&v4);
        assert_eq!(blocks.len(), 3);
        assert!(blocks[2].starts_with("@theme inline {"));
        assert!(v4.ends_with("--color-sidebar-ring: var(--sidebar-ring);\n}"));
    }

    #[test]
    fn test_hsl_v3_is_bare() {
        let css = generate(&simple_theme(), &opts(ColorFormat::Hsl, TailwindVersion::V3)).unwrap();
        assert!(css.contains("--background: 0 0% 100%;"));
        let css = generate(&simple_theme(), &opts(ColorFormat::Hsl, TailwindVersion::V4)).unwrap();
        assert!(css.contains("--background: hsl(0 0% 100%);"));
    }

    #[test]
    fn test_missing_mode_is_invalid() {
        let mut config = simple_theme();
        config.theme_object.dark = None;
        let err = generate(&config, &GenerateOptions::default()).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidTheme));
        assert_eq!(err.to_string(), "Invalid theme styles: missing light or dark mode");

        let mut config = simple_theme();
        config.theme_object.light = None;
        assert!(generate(&config, &GenerateOptions::default()).is_err());
    }

    #[test]
    fn test_generate_from_none() {
        assert!(matches!(
            generate_from(None, &GenerateOptions::default()),
            Err(ThemeError::InvalidTheme)
        ));
        let config = simple_theme();
        assert_eq!(
            generate_from(Some(&config), &GenerateOptions::default()).unwrap(),
            generate(&config, &GenerateOptions::default()).unwrap()
        );
    }

    #[test]
    fn test_destructive_foreground_v3_only_when_present() {
        let with = theme(
            ThemeProperties::new().with("destructive-foreground", "#ffffff"),
            ThemeProperties::new(),
        );
        let v3 = generate(&with, &opts(ColorFormat::Hex, TailwindVersion::V3)).unwrap();
        assert_eq!(v3.matches("--destructive-foreground: #ffffff;").count(), 1);
        assert!(v3.contains("--destructive: ;\n  --destructive-foreground: #ffffff;\n  --border: ;"));

        let v4 = generate(&with, &opts(ColorFormat::Hex, TailwindVersion::V4)).unwrap();
        assert!(!v4.contains("destructive-foreground"));

        let without = generate(&simple_theme(), &opts(ColorFormat::Hex, TailwindVersion::V3)).unwrap();
        assert!(!without.contains("destructive-foreground"));
        assert!(without.contains("--destructive: ;\n  --border: ;"));
    }

    #[test]
    fn test_font_vars_in_root_and_inline() {
        let mut config = simple_theme();
        config.fonts = Some(ThemeFonts {
            sans: Some("Inter, sans-serif".to_string()),
            serif: None,
            mono: None,
        });
        let options = GenerateOptions::default().with_inline(ThemeVarsOptions {
            font_vars: true,
            ..Default::default()
        });
        let css = generate(&config, &options).unwrap();

        let expected_fonts = format!(
            "\n  --font-sans: Inter, sans-serif;\n  --font-serif: {};\n  --font-mono: {};\n",
            DEFAULT_FONTS.serif, DEFAULT_FONTS.mono
        );
        assert!(css.starts_with(&format!(":root {{{}\n  --radius: 0.5rem;", expected_fonts)));
        assert!(css.contains(&format!("@theme inline {{{}\n  --radius-sm:", expected_fonts)));
        assert!(!split_blocks(&css)[1].contains("--font-"));
    }

    #[test]
    fn test_font_fallback_aliases_without_font_vars() {
        let css = generate(&simple_theme(), &GenerateOptions::default()).unwrap();
        assert!(css.contains(
            "@theme inline {\n  --font-sans: var(--font-sans);\n  --font-mono: var(--font-mono);\n  --font-serif: var(--font-serif);\n\n  --radius-sm: calc(var(--radius) - 4px);\n  --radius-md: calc(var(--radius) - 2px);\n  --radius-lg: var(--radius);\n  --radius-xl: calc(var(--radius) + 4px);\n  --color-background: var(--background);"
        ));
        assert!(!css.starts_with(":root {\n  --font-sans"));
    }

    #[test]
    fn test_font_flag_changes_only_font_lines() {
        let config = simple_theme();
        let off = generate(&config, &GenerateOptions::default()).unwrap();
        let on = generate(
            &config,
            &GenerateOptions::default().with_inline(ThemeVarsOptions {
                font_vars: true,
                ..Default::default()
            }),
        )
        .unwrap();
        let non_font = |css: &str| -> Vec<String> {
            css.lines()
                .filter(|l| !l.contains("--font-") && !l.trim().is_empty() && !l.starts_with("    "))
                .map(str::to_string)
                .collect()
        };
        assert_eq!(non_font(&off), non_font(&on));
    }

    #[test]
    fn test_shadow_vars() {
        let light = ThemeProperties::new().with("shadow-color", "#ff0000");
        let config = theme(light, ThemeProperties::new());
        let options = opts(ColorFormat::Hex, TailwindVersion::V4).with_inline(ThemeVarsOptions {
            shadow_vars: true,
            ..Default::default()
        });
        let css = generate(&config, &options).unwrap();
        let blocks = split_blocks(&css);

        assert!(blocks[0].contains("--sidebar-ring: ;\n\n  --shadow-color: #ff0000;\n  --shadow-2xs: "));
        assert!(blocks[0].contains("\n  --shadow-2xl: 0 1px 3px 0px hsl(0 100% 50% / 0.25);"));
        assert!(blocks[1].contains("\n\n  --shadow-color: #000000;"));
        assert!(!blocks[1].contains("--shadow-sm"));
        assert!(blocks[2].contains(
            "--color-sidebar-ring: var(--sidebar-ring);\n\n  --shadow-2xs: var(--shadow-2xs);"
        ));
        assert!(blocks[2].contains("--shadow-2xl: var(--shadow-2xl);\n}"));
    }

    #[test]
    fn test_shadow_color_uses_v4_syntax_for_v3() {
        let config = theme(
            ThemeProperties::new().with("shadow-color", "#ff0000"),
            ThemeProperties::new(),
        );
        let options = opts(ColorFormat::Hsl, TailwindVersion::V3).with_inline(ThemeVarsOptions {
            shadow_vars: true,
            ..Default::default()
        });
        let css = generate(&config, &options).unwrap();
        assert!(css.contains("--shadow-color: hsl(0 100% 50%);"));
    }

    #[test]
    fn test_no_shadows_without_flag() {
        let css = generate(&crate::presets::default_theme_config(), &GenerateOptions::default()).unwrap();
        assert!(!css.contains("--shadow"));
    }

    #[test]
    fn test_sparse_spacing() {
        let light = ThemeProperties::new()
            .with("card-padding", "2rem")
            .with("button-padding-x", "")
            .with("section-padding-y", "5rem");
        let config = theme(light, ThemeProperties::new());
        let css = generate(&config, &opts(ColorFormat::Hex, TailwindVersion::V3)).unwrap();

        assert!(css.contains("--sidebar-ring: ;\n  --card-padding: 2rem;\n  --section-padding-y: 5rem;\n}"));
        assert!(!css.contains("--button-padding-x"));
        assert!(!css.contains("--spacing"));
    }

    #[test]
    fn test_spacing_scale_light_only() {
        let props = ThemeProperties::new().with("spacing", "0.3rem");
        let config = theme(props.clone(), props);
        let css = generate(&config, &opts(ColorFormat::Hex, TailwindVersion::V3)).unwrap();
        let blocks = split_blocks(&css);

        assert!(blocks[0].contains(
            "\n  --spacing: 0.3rem;\n  --spacing-0: 0rem;\n  --spacing-1: calc(var(--spacing) * 1);"
        ));
        assert!(blocks[0].contains("\n  --spacing-24: calc(var(--spacing) * 24);"));
        assert!(!blocks[0].contains("--spacing-7"));
        assert!(blocks[1].contains("\n  --spacing: 0.3rem;\n}"));
        assert!(!blocks[1].contains("--spacing-0"));
    }

    #[test]
    fn test_spacing_scale_comes_before_other_spacing_tokens() {
        let light = ThemeProperties::new()
            .with("spacing", "0.25rem")
            .with("button-padding", "0.5rem 1rem");
        let css = generate(
            &theme(light, ThemeProperties::new()),
            &opts(ColorFormat::Hex, TailwindVersion::V3),
        )
        .unwrap();
        assert!(css.contains("--spacing-24: calc(var(--spacing) * 24);\n  --button-padding: 0.5rem 1rem;"));
    }

    #[test]
    fn test_spacing_aliases() {
        let options = GenerateOptions::default().with_inline(ThemeVarsOptions {
            spacing_vars: true,
            ..Default::default()
        });
        let css = generate(&simple_theme(), &options).unwrap();
        assert!(css.contains(
            "--color-sidebar-ring: var(--sidebar-ring);\n\n  --spacing: var(--spacing);\n  --spacing-0: var(--spacing-0);\n  --spacing-1: var(--spacing-1);"
        ));
        assert!(css.ends_with("--spacing-24: var(--spacing-24);\n}"));
        // Declarations still follow the theme, which sets no spacing.
        assert!(!split_blocks(&css)[0].contains("--spacing: "));
    }

    #[test]
    fn test_inline_aliases_cover_v4_colors() {
        let css = generate(&simple_theme(), &GenerateOptions::default()).unwrap();
        let inline = split_blocks(&css)[2];
        for token in COLOR_TOKENS.iter().filter(|t| t.applies_to(TailwindVersion::V4)) {
            let alias = format!("--color-{}: var(--{});", token.name, token.name);
            assert_eq!(inline.matches(&alias).count(), 1, "{}", alias);
        }
        assert!(!inline.contains("destructive-foreground"));
    }

    #[test]
    fn test_all_groups_order() {
        let css = generate(
            &crate::presets::default_theme_config(),
            &GenerateOptions::default().with_inline(all_groups()),
        )
        .unwrap();
        let inline = split_blocks(&css)[2];
        let radius = inline.find("--radius-sm").unwrap();
        let color = inline.find("--color-background").unwrap();
        let shadow = inline.find("--shadow-2xs").unwrap();
        let spacing = inline.find("--spacing:").unwrap();
        assert!(radius < color && color < shadow && shadow < spacing);
    }

    #[test]
    fn test_deterministic() {
        let config = crate::presets::default_theme_config();
        let options = GenerateOptions::default().with_inline(all_groups());
        assert_eq!(generate(&config, &options).unwrap(), generate(&config, &options).unwrap());
    }

    #[test]
    fn test_options_serde() {
        let options: GenerateOptions = serde_json::from_str(
            r#"{ "colorFormat": "hsl", "tailwindVersion": "3", "inline": { "fontVars": true } }"#,
        )
        .unwrap();
        assert_eq!(options.color_format, ColorFormat::Hsl);
        assert_eq!(options.tailwind_version, TailwindVersion::V3);
        assert_eq!(
            options.inline,
            Some(ThemeVarsOptions {
                font_vars: true,
                shadow_vars: false,
                spacing_vars: false,
            })
        );

        let defaults: GenerateOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(defaults, GenerateOptions::default());
    }
}
