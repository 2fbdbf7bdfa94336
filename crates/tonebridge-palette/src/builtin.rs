//! Bundled palette data.
//!
//! Both palettes are stored as JSON and go through the same loader as
//! user-supplied files, so a bundled palette behaves exactly like the same
//! file passed on the command line.

use crate::error::Result;
use crate::palette::{FrameworkPalette, SourcePalette};

const CARBON_JSON: &str = include_str!("../data/carbon.json");
const TAILWIND_JSON: &str = include_str!("../data/tailwind.json");

/// The design system's color package: twelve hue families plus the
/// `black`/`white` singletons and their numbered aliases.
pub fn carbon() -> Result<SourcePalette> {
    SourcePalette::from_json_str(CARBON_JSON)
}

/// The framework's default colors: twenty-two eleven-step hue families plus
/// the keyword and black/white singletons.
pub fn tailwind_defaults() -> Result<FrameworkPalette> {
    FrameworkPalette::from_json_str(TAILWIND_JSON)
}
