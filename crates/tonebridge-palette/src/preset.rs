//! Framework preset rendering.
//!
//! A preset nests the palette under `theme.extend.colors`, the shape the
//! framework's configuration loader merges over its own theme.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Banner written at the top of the JavaScript formats.
pub const GENERATED_BANNER: &str = "// Generated by tonebridge. Do not edit by hand.";

/// Output encoding for a preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// ES module with a default export.
    Esm,
    /// CommonJS `module.exports`.
    Cjs,
}

impl PresetFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Esm => "esm",
            Self::Cjs => "cjs",
        }
    }

    /// Conventional file extension for the format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Esm => "mjs",
            Self::Cjs => "cjs",
        }
    }
}

impl fmt::Display for PresetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresetFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "esm" | "mjs" => Ok(Self::Esm),
            "cjs" | "commonjs" => Ok(Self::Cjs),
            other => Err(format!("unknown preset format `{other}` (expected json, esm or cjs)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preset<C> {
    pub theme: PresetTheme<C>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetTheme<C> {
    pub extend: PresetExtend<C>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetExtend<C> {
    pub colors: C,
}

impl<C: Serialize> Preset<C> {
    #[must_use]
    pub const fn new(colors: C) -> Self {
        Self {
            theme: PresetTheme {
                extend: PresetExtend { colors },
            },
        }
    }

    /// Render the preset, always ending with a newline.
    ///
    /// # Errors
    ///
    /// Fails only if the palette cannot be serialized.
    pub fn render(&self, format: PresetFormat) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(match format {
            PresetFormat::Json => format!("{json}\n"),
            PresetFormat::Esm => {
                format!("{GENERATED_BANNER}\nconst preset = {json};\n\nexport default preset;\n")
            }
            PresetFormat::Cjs => format!("{GENERATED_BANNER}\nmodule.exports = {json};\n"),
        })
    }
}
