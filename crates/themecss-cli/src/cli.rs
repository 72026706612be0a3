//! Command-line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use themecss::{ColorFormat, GenerateOptions, TailwindVersion, ThemeVarsOptions};

/// Generate Tailwind CSS variables from a light/dark theme file.
#[derive(Debug, Parser)]
#[command(name = "themecss", version, about)]
pub struct Cli {
    /// Log debug output to stderr (same as THEMECSS_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the theme stylesheet
    Generate(GenerateArgs),

    /// Print the built-in neutral theme
    Preset(PresetArgs),

    /// List the custom properties declared in a stylesheet
    Inspect(InspectArgs),
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Theme file (.json, .yaml or .yml). Uses the neutral preset when omitted.
    #[arg(value_name = "THEME_FILE")]
    pub theme: Option<PathBuf>,

    /// Color syntax: oklch, hsl, rgb or hex
    #[arg(short, long, default_value_t = ColorFormat::Oklch)]
    pub format: ColorFormat,

    /// Tailwind version whose conventions to follow: 3 or 4
    #[arg(short, long, default_value_t = TailwindVersion::V4)]
    pub tailwind: TailwindVersion,

    /// Declare font families and inline them in @theme
    #[arg(long)]
    pub font_vars: bool,

    /// Declare the shadow color and scale
    #[arg(long)]
    pub shadow_vars: bool,

    /// Alias the spacing scale in @theme
    #[arg(long)]
    pub spacing_vars: bool,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    pub fn options(&self) -> GenerateOptions {
        let options = GenerateOptions::new(self.format, self.tailwind);
        if self.font_vars || self.shadow_vars || self.spacing_vars {
            options.with_inline(ThemeVarsOptions {
                font_vars: self.font_vars,
                shadow_vars: self.shadow_vars,
                spacing_vars: self.spacing_vars,
            })
        } else {
            options
        }
    }
}

#[derive(Debug, Args)]
pub struct PresetArgs {
    /// Print YAML instead of JSON
    #[arg(long)]
    pub yaml: bool,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Stylesheet to read
    #[arg(value_name = "CSS_FILE")]
    pub css: PathBuf,
}
