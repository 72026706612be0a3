//! Command implementations.
//!
//! Each command renders its output to a `String`; [`run`] decides where it
//! goes.

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use themecss::{default_theme_config, generate, parse_css_variables, ThemeConfig};

use crate::cli::{Cli, Command, GenerateArgs, InspectArgs, PresetArgs};

/// Runs a parsed command line, writing results to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    match &cli.command {
        Command::Generate(args) => {
            let css = generate_css(args)?;
            match &args.output {
                Some(path) => {
                    std::fs::write(path, &css)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    tracing::info!(path = %path.display(), bytes = css.len(), "wrote stylesheet");
                }
                None => writeln!(out, "{}", css)?,
            }
        }
        Command::Preset(args) => write!(out, "{}", preset_text(args)?)?,
        Command::Inspect(args) => write!(out, "{}", inspect_text(args)?)?,
    }
    Ok(())
}

/// Loads the requested theme (or the preset) and generates its stylesheet.
pub fn generate_css(args: &GenerateArgs) -> Result<String> {
    let config = match &args.theme {
        Some(path) => load_theme(path)?,
        None => {
            tracing::debug!("no theme file given, using the neutral preset");
            default_theme_config()
        }
    };
    let css = generate(&config, &args.options())?;
    Ok(css)
}

fn load_theme(path: &Path) -> Result<ThemeConfig> {
    ThemeConfig::from_file(path)
        .with_context(|| format!("failed to load theme from {}", path.display()))
}

/// The neutral preset as JSON or YAML.
pub fn preset_text(args: &PresetArgs) -> Result<String> {
    let config = default_theme_config();
    if args.yaml {
        Ok(config.to_yaml()?)
    } else {
        let mut json = config.to_json()?;
        json.push('\n');
        Ok(json)
    }
}

/// One section per rule: the selector, then `name: value` per variable.
pub fn inspect_text(args: &InspectArgs) -> Result<String> {
    let css = std::fs::read_to_string(&args.css)
        .with_context(|| format!("failed to read {}", args.css.display()))?;
    let vars = parse_css_variables(&css)
        .with_context(|| format!("failed to parse {}", args.css.display()))?;

    let mut text = String::new();
    for (i, block) in vars.iter().enumerate() {
        if i > 0 {
            text.push('\n');
        }
        let _ = writeln!(
            text,
            "{} ({} variables)",
            console::style(&block.selector).bold(),
            block.len()
        );
        for (name, value) in &block.declarations {
            // Multi-line values (font stacks) print on one line.
            let value = value.split_whitespace().collect::<Vec<_>>().join(" ");
            let _ = writeln!(text, "  {}: {}", name, value);
        }
    }
    Ok(text)
}
