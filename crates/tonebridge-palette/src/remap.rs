// SPDX-License-Identifier: Apache-2.0
//! Convert one design-system ramp into the framework's ramp shape.
//!
//! Every mapped step is copied verbatim through
//! [`STEP_CORRESPONDENCE`](crate::step::STEP_CORRESPONDENCE).
//! The extra darkest step (`950`) comes from the framework's own default for
//! the same hue name when it has one, otherwise it repeats the source's
//! darkest color.
//!
//! Design invariants:
//! - **Fixed shape**: the result always holds all eleven target steps.
//! - **Order preserving**: the correspondence is monotonic, so lighter target
//!   steps always read from lighter source steps.
//! - **No color math**: values are opaque strings and are never rewritten.

use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};
use crate::palette::FrameworkPalette;
use crate::scale::{SourceScale, TargetScale};
use crate::step::{SourceStep, TargetStep};

/// What to do when a ramp lacks one of the ten required source steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingStepPolicy {
    /// Fail the whole build with [`PaletteError::MissingStep`].
    #[default]
    Reject,
    /// Keep the step with no color and log a warning.
    Propagate,
}

impl MissingStepPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Propagate => "propagate",
        }
    }
}

impl std::str::FromStr for MissingStepPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "propagate" => Ok(Self::Propagate),
            other => Err(format!(
                "unknown missing-step policy `{other}` (expected reject or propagate)"
            )),
        }
    }
}

/// Remap `scale`, the design-system ramp named `hue`, into a framework ramp.
///
/// `defaults` is consulted only for the `950` step of the same hue name.
///
/// # Errors
///
/// With [`MissingStepPolicy::Reject`], returns [`PaletteError::MissingStep`]
/// for the lightest required step that `scale` lacks.
pub fn remap(
    scale: &SourceScale,
    hue: &str,
    defaults: &FrameworkPalette,
    policy: MissingStepPolicy,
) -> Result<TargetScale> {
    let missing = scale.missing_steps();
    if let Some(&step) = missing.first() {
        match policy {
            MissingStepPolicy::Reject => {
                return Err(PaletteError::MissingStep {
                    hue: hue.to_string(),
                    step,
                });
            }
            MissingStepPolicy::Propagate => {
                tracing::warn!(
                    hue,
                    missing = ?missing.iter().map(|s| s.code()).collect::<Vec<_>>(),
                    "ramp is missing steps; leaving them unresolved"
                );
            }
        }
    }

    let darkest = defaults
        .darkest(hue)
        .or_else(|| scale.get(SourceStep::DARKEST))
        .map(str::to_string);

    let mapped = TargetScale::from_fn(|target| match target.source_step() {
        Some(source) => scale.get(source).map(str::to_string),
        None => darkest.clone(),
    });

    debug_assert_eq!(mapped.len(), TargetStep::ALL.len());

    Ok(mapped)
}
