use thiserror::Error;

use crate::step::SourceStep;

pub type Result<T> = std::result::Result<T, PaletteError>;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("palette root must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("hue `{hue}` is missing required step {step}")]
    MissingStep { hue: String, step: SourceStep },

    #[error("unknown hue: {hue}")]
    UnknownHue { hue: String },

    #[error("`{hue}` is a single color, not a ramp")]
    NotARamp { hue: String },
}

impl PaletteError {
    #[must_use]
    pub fn unknown_hue(hue: impl Into<String>) -> Self {
        Self::UnknownHue { hue: hue.into() }
    }
}
