#![forbid(unsafe_code)]

//! Remap design-system color ramps into a utility framework's palette shape.
//!
//! # Role in tonebridge
//! `tonebridge-palette` is the whole transform. The `tonebridge` binary only
//! loads files, applies configuration and writes the result.
//!
//! # This crate provides
//! - [`SourceStep`] / [`TargetStep`] and the fixed [`STEP_CORRESPONDENCE`].
//! - [`SourceScale`] / [`TargetScale`] and the tagged [`PaletteEntry`].
//! - [`classify`], [`remap`] and [`build_palette`], plus [`init`] over the
//!   bundled data.
//! - [`merge_into_defaults`] and [`Preset`] for the framework's config loader.
//! - [`lint_palette`] for catching ramps that do not darken monotonically.
//!
//! # How it fits in the system
//! ```text
//! source JSON ──► SourcePalette ──► build_palette ──► DerivedPalette
//!                                        ▲                 │
//! defaults JSON ─► FrameworkPalette ─────┴──► merge ◄──────┘
//!                                              │
//!                                              ▼
//!                                  Preset { theme.extend.colors }
//! ```

/// Bundled design-system and framework palettes.
pub mod builtin;
/// sRGB parsing and luminance.
pub mod color;
pub mod error;
/// Lightness-order checks over derived ramps.
pub mod lint;
/// Loading, deriving and merging named palettes.
pub mod palette;
/// Preset output in JSON and JavaScript module formats.
pub mod preset;
/// The ramp remapper.
pub mod remap;
/// Ramp types and the palette entry variant.
pub mod scale;
/// Step identifiers and the correspondence table.
pub mod step;

pub use color::{Rgb, relative_luminance};
pub use error::{PaletteError, Result};
pub use lint::{LintIssue, lint_palette, lint_scale};
pub use palette::{
    DerivedPalette, FrameworkPalette, Palette, SourcePalette, ThemePalette, build_palette, init,
    merge_into_defaults,
};
pub use preset::{Preset, PresetFormat};
pub use remap::{MissingStepPolicy, remap};
pub use scale::{PaletteEntry, Ramp, SourceScale, TargetScale, classify};
pub use step::{STEP_CORRESPONDENCE, SourceStep, TargetStep};
