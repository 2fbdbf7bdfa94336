//! Input resolution shared by every subcommand.

use std::path::{Path, PathBuf};

use clap::Args;
use tonebridge_palette::{FrameworkPalette, MissingStepPolicy, SourcePalette, builtin};

use crate::config::ToneConfig;
use crate::error::Result;
use crate::util::ensure_exists;

#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Configuration file (defaults to ./tonebridge.toml when present).
    #[arg(long, env = "TONEBRIDGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Design-system palette JSON (defaults to the bundled palette).
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Framework default palette JSON (defaults to the bundled palette).
    #[arg(long)]
    pub defaults: Option<PathBuf>,
}

/// Remap policy flag, only on commands that remap.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct PolicyArgs {
    /// How to treat ramps missing a required step: reject or propagate.
    #[arg(long)]
    pub missing_step: Option<MissingStepPolicy>,
}

impl PolicyArgs {
    /// Override the configured policy when the flag was given.
    pub fn apply(self, loaded: &mut LoadedInputs) {
        if let Some(policy) = self.missing_step {
            loaded.policy = policy;
        }
    }
}

/// Palettes and settings after applying flags over the config file.
#[derive(Debug, Clone)]
pub struct LoadedInputs {
    pub config: ToneConfig,
    pub source: SourcePalette,
    pub defaults: FrameworkPalette,
    pub policy: MissingStepPolicy,
}

impl InputArgs {
    /// Load the config from the current directory and both palettes.
    pub fn load(&self) -> Result<LoadedInputs> {
        let cwd = std::env::current_dir()?;
        self.load_from(&cwd)
    }

    pub fn load_from(&self, cwd: &Path) -> Result<LoadedInputs> {
        let config = ToneConfig::discover(self.config.as_deref(), cwd)?;

        let source_path = self.source.as_ref().or(config.source.path.as_ref());
        let source = match source_path {
            Some(path) => {
                ensure_exists(path)?;
                tracing::info!(path = %path.display(), "loading source palette");
                SourcePalette::from_json_file(path)?
            }
            None => builtin::carbon()?,
        };

        let defaults_path = self.defaults.as_ref().or(config.defaults.path.as_ref());
        let defaults = match defaults_path {
            Some(path) => {
                ensure_exists(path)?;
                tracing::info!(path = %path.display(), "loading framework defaults");
                FrameworkPalette::from_json_file(path)?
            }
            None => builtin::tailwind_defaults()?,
        };

        let policy = config.remap.missing_step;

        Ok(LoadedInputs {
            config,
            source,
            defaults,
            policy,
        })
    }
}
