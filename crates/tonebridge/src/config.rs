//! File-based configuration for preset builds.
//!
//! Captures every knob the commands accept as a single [`ToneConfig`] loaded
//! from TOML at startup. Command-line flags override the file; the file
//! overrides the defaults.
//!
//! ```toml
//! # tonebridge.toml
//! [source]
//! path = "design/carbon-colors.json"
//!
//! [defaults]
//! merge = true
//!
//! [remap]
//! missing_step = "reject"
//!
//! [output]
//! format = "esm"
//! path = "src/lib/tailwind.carbon.mjs"
//! ```
//!
//! Relative paths are resolved against the directory holding the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tonebridge_palette::{MissingStepPolicy, PresetFormat};

use crate::error::{Result, ToneError};

/// File name picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "tonebridge.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToneConfig {
    pub source: SourceSection,
    pub defaults: DefaultsSection,
    pub remap: RemapSection,
    pub output: OutputSection,
}

/// Where the design-system palette comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceSection {
    /// Palette JSON; the bundled palette when unset.
    pub path: Option<PathBuf>,
}

/// The framework's default palette and whether to merge over it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsSection {
    /// Palette JSON; the bundled defaults when unset.
    pub path: Option<PathBuf>,
    /// Emit defaults plus derived ramps instead of derived ramps alone.
    pub merge: bool,
}

impl Default for DefaultsSection {
    fn default() -> Self {
        Self {
            path: None,
            merge: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemapSection {
    pub missing_step: MissingStepPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    pub format: PresetFormat,
    /// Preset file; stdout when unset.
    pub path: Option<PathBuf>,
}

impl ToneConfig {
    /// Load from a TOML string. Relative paths are left as written.
    pub fn from_toml_str(s: &str, origin: &Path) -> Result<Self> {
        toml::from_str(s).map_err(|source| ToneError::Toml {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load from a TOML file, resolving relative paths against its directory.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content, path)?;
        if let Some(base) = path.parent() {
            config.rebase(base);
        }
        Ok(config)
    }

    /// Resolve the configuration to use.
    ///
    /// An explicit path must exist. Without one, `tonebridge.toml` in `cwd`
    /// is used when present, otherwise the defaults.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        let candidate = match explicit {
            Some(path) => {
                crate::util::ensure_exists(path)?;
                path.to_path_buf()
            }
            None => {
                let implicit = cwd.join(DEFAULT_CONFIG_FILE);
                if !implicit.is_file() {
                    tracing::debug!("no config file found, using defaults");
                    return Ok(Self::default());
                }
                implicit
            }
        };

        tracing::info!(path = %candidate.display(), "loading config");
        let config = Self::from_toml_file(&candidate)?;
        let problems = config.validate();
        if problems.is_empty() {
            Ok(config)
        } else {
            Err(ToneError::InvalidConfig {
                path: candidate,
                problems,
            })
        }
    }

    /// Check referenced input files. An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        for (key, path) in [
            ("source.path", &self.source.path),
            ("defaults.path", &self.defaults.path),
        ] {
            if let Some(path) = path {
                if !path.is_file() {
                    problems.push(format!("{key} does not exist: {}", path.display()));
                }
            }
        }
        if let Some(path) = &self.output.path {
            if path.is_dir() {
                problems.push(format!("output.path is a directory: {}", path.display()));
            }
        }
        problems
    }

    fn rebase(&mut self, base: &Path) {
        for path in [
            &mut self.source.path,
            &mut self.defaults.path,
            &mut self.output.path,
        ]
        .into_iter()
        .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
