//! Theme configuration types.
//!
//! A [`ThemeConfig`] carries the mode-independent settings (radius, fonts) and a
//! [`ThemeObject`] with one [`ThemeProperties`] map per display mode. The shape
//! matches the JSON documents themes are stored as:
//!
//! ```json
//! {
//!   "radius": "0.625rem",
//!   "surface": "default",
//!   "fonts": { "sans": "Inter, sans-serif" },
//!   "themeObject": {
//!     "light": { "background": "#ffffff", "foreground": "#0a0a0a" },
//!     "dark":  { "background": "#0a0a0a", "foreground": "#fafafa" }
//!   }
//! }
//! ```
//!
//! Both modes are optional at the type level so that a document missing one of
//! them can still be loaded and then rejected by [`ThemeObject::validate`].

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};

/// Light or dark display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Both modes, in output order.
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token name → CSS value for a single mode.
///
/// Keys are token names without the leading `--` (`background`, `chart-1`,
/// `shadow-blur`, `button-padding-y`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeProperties(BTreeMap<String, String>);

impl ThemeProperties {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns the raw value for a token, if set.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.0.get(token).map(String::as_str)
    }

    /// Returns the value for a token only if it is set and non-empty.
    ///
    /// Empty strings are treated the same as missing tokens wherever output
    /// is conditional on a token being present.
    pub fn non_empty(&self, token: &str) -> Option<&str> {
        self.get(token).filter(|v| !v.is_empty())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains_key(token)
    }

    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(token.into(), value.into())
    }

    pub fn remove(&mut self, token: &str) -> Option<String> {
        self.0.remove(token)
    }

    /// Adds a token, returning `self` for chaining.
    pub fn with(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(token, value);
        self
    }

    /// Overlays `other` on top of this map; keys in `other` win.
    pub fn merge(&mut self, other: &ThemeProperties) {
        for (k, v) in other.iter() {
            self.0.insert(k.to_string(), v.to_string());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ThemeProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Per-mode property maps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<ThemeProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<ThemeProperties>,
}

impl ThemeObject {
    pub fn new(light: ThemeProperties, dark: ThemeProperties) -> Self {
        Self {
            light: Some(light),
            dark: Some(dark),
        }
    }

    /// Returns the property map for a mode, if present.
    pub fn mode(&self, mode: ThemeMode) -> Option<&ThemeProperties> {
        match mode {
            ThemeMode::Light => self.light.as_ref(),
            ThemeMode::Dark => self.dark.as_ref(),
        }
    }

    /// Checks that both modes are present.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidTheme`] if `light` or `dark` is missing.
    pub fn validate(&self) -> Result<()> {
        if self.light.is_none() || self.dark.is_none() {
            return Err(ThemeError::InvalidTheme);
        }
        Ok(())
    }
}

/// Optional font-family overrides. Unset families fall back to the system stacks
/// in [`DEFAULT_FONTS`](crate::presets::DEFAULT_FONTS).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeFonts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sans: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serif: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mono: Option<String>,
}

/// A complete theme: mode-independent settings plus per-mode tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub radius: String,
    #[serde(default)]
    pub surface: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts: Option<ThemeFonts>,
    pub theme_object: ThemeObject,
}

impl ThemeConfig {
    /// Parses a theme from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Parse`] if the document doesn't match the theme shape.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a theme from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a theme file, choosing the parser from the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnsupportedFormat`] for unknown extensions,
    /// [`ThemeError::Load`] if the file can't be read, and
    /// [`ThemeError::Parse`] if its content is malformed.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let config = themecss::ThemeConfig::from_file("./themes/ocean.json")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let parse: fn(&str) -> Result<Self> = match ext.as_deref() {
            Some("json") => Self::from_json,
            Some("yaml") | Some("yml") => Self::from_yaml,
            _ => {
                return Err(ThemeError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded theme file");
        parse(&content)
    }

    /// Serializes the theme as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serializes the theme as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
