use std::path::PathBuf;

use thiserror::Error;
use tonebridge_palette::PaletteError;

pub type Result<T> = std::result::Result<T, ToneError>;

#[derive(Debug, Error)]
pub enum ToneError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{0}")]
    Palette(#[from] PaletteError),

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("invalid config {path}:\n  {}", .problems.join("\n  "))]
    InvalidConfig { path: PathBuf, problems: Vec<String> },

    #[error("required path does not exist: {path}")]
    MissingPath { path: PathBuf },

    #[error("{message}")]
    Exit { code: i32, message: String },
}

impl ToneError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Exit { code, .. } => *code,
            _ => 1,
        }
    }

    #[must_use]
    pub fn exit(code: i32, message: impl Into<String>) -> Self {
        Self::Exit {
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
