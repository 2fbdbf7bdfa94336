use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, ToneError};

/// Environment variable selecting machine-readable error output.
pub const OUTPUT_ENV: &str = "TONEBRIDGE_OUTPUT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    #[must_use]
    pub fn detect() -> Self {
        Self::from_env_value(std::env::var(OUTPUT_ENV).ok().as_deref())
    }

    #[must_use]
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(|raw| raw.trim().to_ascii_lowercase()) {
            Some(mode) if mode == "json" => Self::Json,
            _ => Self::Human,
        }
    }

    #[must_use]
    pub fn should_emit_json(self) -> bool {
        self == Self::Json
    }
}

pub fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(ToneError::MissingPath {
            path: path.to_path_buf(),
        })
    }
}

pub fn write_string(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;
    Ok(())
}

/// Write `content` to `path`, or to stdout when `path` is `None` or `-`.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) if path != Path::new("-") => write_string(path, content),
        _ => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
