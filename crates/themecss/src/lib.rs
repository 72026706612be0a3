//! themecss - CSS custom properties from light/dark theme configurations.
//!
//! Given a [`ThemeConfig`] (radius, fonts and a property map per display
//! mode), themecss produces the CSS variable blocks a Tailwind project
//! expects:
//!
//! - `:root { ... }` with fonts, radius, light colors, shadows and spacing
//! - `.dark { ... }` with the dark overrides
//! - `@theme inline { ... }` (Tailwind v4 only) aliasing every token into
//!   Tailwind's `--color-*`, `--radius-*`, `--shadow-*` and `--spacing-*`
//!   namespaces
//!
//! Colors are rewritten in the requested [`ColorFormat`] (`oklch`, `hsl`,
//! `rgb` or `hex`) following each [`TailwindVersion`]'s conventions.
//!
//! # Quick Start
//!
//! ```rust
//! use themecss::{generate, ColorFormat, GenerateOptions, TailwindVersion, ThemeConfig};
//!
//! let config = ThemeConfig::from_json(r##"{
//!     "radius": "0.5rem",
//!     "themeObject": {
//!         "light": { "background": "#ffffff", "primary": "#4080c0", "spacing": "0.25rem" },
//!         "dark":  { "background": "#000000", "primary": "#80b0e0" }
//!     }
//! }"##).unwrap();
//!
//! let css = generate(&config, &GenerateOptions::default()).unwrap();
//! assert!(css.starts_with(":root {\n  --radius: 0.5rem;\n  --background: oklch(1 0 0);"));
//! assert!(css.contains("--spacing-4: calc(var(--spacing) * 4);"));
//! assert!(css.contains("@theme inline {"));
//!
//! // Tailwind v3 wants bare HSL channels and has no @theme block.
//! let v3 = GenerateOptions::new(ColorFormat::Hsl, TailwindVersion::V3);
//! let css = generate(&config, &v3).unwrap();
//! assert!(css.contains("--background: 0 0% 100%;"));
//! assert!(!css.contains("@theme"));
//! ```
//!
//! # Modules
//!
//! - [`config`]: theme types and JSON/YAML loading
//! - [`color`]: color parsing and [`format_color`]
//! - [`shadow`]: the eight-step shadow scale
//! - [`presets`]: defaults and the neutral starter theme
//! - [`extract`]: reading custom properties back out of CSS
//! - [`tokens`]: the ordered variable-name tables every block is built from

pub mod color;
pub mod config;
mod error;
pub mod extract;
mod generator;
pub mod presets;
pub mod shadow;
pub mod tokens;

pub use color::{format_color, parse_color, ColorFormat, TailwindVersion};
pub use config::{ThemeConfig, ThemeFonts, ThemeMode, ThemeObject, ThemeProperties};
pub use error::{Result, ThemeError};
pub use extract::{parse_css_variables, CssBlock, CssVariables};
pub use generator::{generate, generate_from, GenerateOptions, ThemeVarsOptions};
pub use presets::{css_vars_from_properties, default_theme_config};
pub use shadow::{compute_shadow_scale, ShadowScale, ShadowScaleOptions};
