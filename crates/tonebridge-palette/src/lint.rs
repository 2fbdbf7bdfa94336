// SPDX-License-Identifier: Apache-2.0
//! Sanity checks over a derived palette.
//!
//! The remapper copies colors without looking at them. This pass parses the
//! colors and checks that each ramp gets darker from `50` to `950`. The
//! common finding is a framework-supplied `950` that is lighter than the
//! design system's darkest step.

use std::fmt;

use serde::Serialize;

use crate::color::Rgb;
use crate::palette::DerivedPalette;
use crate::scale::TargetScale;
use crate::step::TargetStep;

/// Luminance slack before a pair of steps counts as inverted.
const LUMINANCE_EPSILON: f64 = 1e-9;

/// One problem found in a derived ramp.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LintIssue {
    /// A step has no color.
    Missing { hue: String, step: TargetStep },
    /// A step's color could not be parsed as sRGB.
    Unparseable {
        hue: String,
        step: TargetStep,
        value: String,
    },
    /// `step` is lighter than `previous` even though it comes after it.
    Inverted {
        hue: String,
        previous: TargetStep,
        step: TargetStep,
    },
}

impl LintIssue {
    #[must_use]
    pub fn hue(&self) -> &str {
        match self {
            Self::Missing { hue, .. } | Self::Unparseable { hue, .. } | Self::Inverted { hue, .. } => {
                hue
            }
        }
    }
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { hue, step } => write!(f, "{hue}-{step}: no color"),
            Self::Unparseable { hue, step, value } => {
                write!(f, "{hue}-{step}: cannot parse color `{value}`")
            }
            Self::Inverted {
                hue,
                previous,
                step,
            } => write!(f, "{hue}-{step} is lighter than {hue}-{previous}"),
        }
    }
}

/// Check one ramp. Steps that are missing or unparseable are reported and
/// skipped for the ordering check.
#[must_use]
pub fn lint_scale(hue: &str, scale: &TargetScale) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    let mut previous: Option<(TargetStep, f64)> = None;

    for step in TargetStep::ALL {
        let Some(value) = scale.get(step) else {
            issues.push(LintIssue::Missing {
                hue: hue.to_string(),
                step,
            });
            continue;
        };
        let Some(rgb) = Rgb::parse(value) else {
            issues.push(LintIssue::Unparseable {
                hue: hue.to_string(),
                step,
                value: value.to_string(),
            });
            continue;
        };

        let luminance = rgb.relative_luminance();
        if let Some((previous_step, previous_luminance)) = previous {
            if luminance > previous_luminance + LUMINANCE_EPSILON {
                issues.push(LintIssue::Inverted {
                    hue: hue.to_string(),
                    previous: previous_step,
                    step,
                });
            }
        }
        previous = Some((step, luminance));
    }
    issues
}

/// Check every ramp, in hue name order.
#[must_use]
pub fn lint_palette(palette: &DerivedPalette) -> Vec<LintIssue> {
    let issues: Vec<LintIssue> = palette
        .iter()
        .flat_map(|(hue, scale)| lint_scale(hue, scale))
        .collect();
    tracing::debug!(hues = palette.len(), issues = issues.len(), "linted palette");
    issues
}
