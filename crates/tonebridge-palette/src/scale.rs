// SPDX-License-Identifier: Apache-2.0
//! Color ramps and the tagged palette entry.
//!
//! Palette data arrives as loosely typed JSON where each named entry is
//! either a ramp object (`{"10": "#edf5ff", …}`) or a bare color string
//! (`"black": "#000000"`). The shape is decided once, at the loading
//! boundary, and recorded in [`PaletteEntry`]. Downstream code matches on
//! the variant and never probes structure again.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::step::{SourceStep, TargetStep};

// ── Ramp abstraction ───────────────────────────────────────────────────

/// A ramp keyed by one of the two step conventions.
pub trait Ramp: Sized {
    /// Step type used as the ramp's key.
    type Step: Copy + Ord + FromStr + Display;

    /// Lightest and darkest keys whose presence identifies a ramp object.
    const BOUNDARY: (Self::Step, Self::Step);

    /// Build a ramp from already-parsed steps.
    fn from_steps(steps: BTreeMap<Self::Step, String>) -> Self;
}

/// Whether `candidate` is a JSON object carrying both of `R`'s boundary keys.
#[must_use]
pub fn conforms<R: Ramp>(candidate: &Value) -> bool {
    let Value::Object(map) = candidate else {
        return false;
    };
    let (lightest, darkest) = R::BOUNDARY;
    map.contains_key(&lightest.to_string()) && map.contains_key(&darkest.to_string())
}

/// Whether `candidate` structurally qualifies as a [`SourceScale`].
///
/// Checks only for the boundary keys `"10"` and `"100"`; intermediate steps
/// are validated later by the remapper.
#[must_use]
pub fn classify(candidate: &Value) -> bool {
    conforms::<SourceScale>(candidate)
}

/// Parse the step keys of a ramp object, dropping keys that are not steps
/// of `R` or whose value is not a string.
pub(crate) fn parse_ramp<R: Ramp>(name: &str, map: &Map<String, Value>) -> R {
    let mut steps = BTreeMap::new();
    for (key, value) in map {
        let Ok(step) = key.parse::<R::Step>() else {
            tracing::warn!(hue = name, key = key.as_str(), "ignoring unrecognized step key");
            continue;
        };
        if step.to_string() != *key {
            tracing::warn!(
                hue = name,
                key = key.as_str(),
                step = %step,
                "ignoring non-canonical step key"
            );
            continue;
        }
        match value {
            Value::String(color) => {
                steps.insert(step, color.clone());
            }
            other => {
                tracing::warn!(
                    hue = name,
                    step = %step,
                    value = %other,
                    "ignoring non-string step value"
                );
            }
        }
    }
    R::from_steps(steps)
}

// ── Source scale ───────────────────────────────────────────────────────

/// One hue family in the design system, keyed `10..=100`.
///
/// A loaded scale is not guaranteed to be complete: only the boundary keys
/// are checked at load time. See [`SourceScale::missing_steps`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceScale {
    steps: BTreeMap<SourceStep, String>,
}

impl SourceScale {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scale from `(step, color)` pairs.
    pub fn from_pairs<I, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (SourceStep, C)>,
        C: Into<String>,
    {
        Self {
            steps: pairs
                .into_iter()
                .map(|(step, color)| (step, color.into()))
                .collect(),
        }
    }

    /// Build a complete scale from ten colors, lightest first.
    #[must_use]
    pub fn from_array<C: Into<String>>(colors: [C; 10]) -> Self {
        Self::from_pairs(SourceStep::ALL.into_iter().zip(colors))
    }

    #[must_use]
    pub fn get(&self, step: SourceStep) -> Option<&str> {
        self.steps.get(&step).map(String::as_str)
    }

    /// Set a step, returning the previous color.
    pub fn insert(&mut self, step: SourceStep, color: impl Into<String>) -> Option<String> {
        self.steps.insert(step, color.into())
    }

    pub fn remove(&mut self, step: SourceStep) -> Option<String> {
        self.steps.remove(&step)
    }

    /// Steps in lightness order that have no color.
    #[must_use]
    pub fn missing_steps(&self) -> Vec<SourceStep> {
        SourceStep::ALL
            .into_iter()
            .filter(|step| !self.steps.contains_key(step))
            .collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.steps.len() == SourceStep::ALL.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SourceStep, &str)> {
        self.steps.iter().map(|(step, color)| (*step, color.as_str()))
    }
}

impl Ramp for SourceScale {
    type Step = SourceStep;

    const BOUNDARY: (SourceStep, SourceStep) = (SourceStep::LIGHTEST, SourceStep::DARKEST);

    fn from_steps(steps: BTreeMap<SourceStep, String>) -> Self {
        Self { steps }
    }
}

// ── Target scale ───────────────────────────────────────────────────────

/// One hue family in the framework's palette shape, keyed `50..=950`.
///
/// Scales produced by the remapper always hold every [`TargetStep`]; a step
/// whose color could not be resolved is present with `None` and serializes
/// as `null`. Scales loaded from framework defaults hold whatever steps the
/// data provides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetScale {
    steps: BTreeMap<TargetStep, Option<String>>,
}

impl TargetScale {
    /// Build a scale holding every target step, resolving each with `f`.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(TargetStep) -> Option<String>,
    {
        Self {
            steps: TargetStep::ALL
                .into_iter()
                .map(|step| (step, f(step)))
                .collect(),
        }
    }

    /// Build a complete scale from eleven colors, lightest first.
    #[must_use]
    pub fn from_array<C: Into<String>>(colors: [C; 11]) -> Self {
        Self {
            steps: TargetStep::ALL
                .into_iter()
                .zip(colors)
                .map(|(step, color)| (step, Some(color.into())))
                .collect(),
        }
    }

    /// Color at `step`, if the step is present and resolved.
    #[must_use]
    pub fn get(&self, step: TargetStep) -> Option<&str> {
        self.steps.get(&step).and_then(Option::as_deref)
    }

    #[must_use]
    pub fn contains_step(&self, step: TargetStep) -> bool {
        self.steps.contains_key(&step)
    }

    /// Number of step keys, resolved or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps that are present but hold no color.
    #[must_use]
    pub fn unresolved_steps(&self) -> Vec<TargetStep> {
        self.steps
            .iter()
            .filter(|(_, color)| color.is_none())
            .map(|(step, _)| *step)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TargetStep, Option<&str>)> {
        self.steps
            .iter()
            .map(|(step, color)| (*step, color.as_deref()))
    }
}

impl Ramp for TargetScale {
    type Step = TargetStep;

    // Older framework palettes stop at 900.
    const BOUNDARY: (TargetStep, TargetStep) = (TargetStep::T50, TargetStep::T900);

    fn from_steps(steps: BTreeMap<TargetStep, String>) -> Self {
        Self {
            steps: steps
                .into_iter()
                .map(|(step, color)| (step, Some(color)))
                .collect(),
        }
    }
}

// ── Tagged entry ───────────────────────────────────────────────────────

/// A named palette entry: a full ramp or a single color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PaletteEntry<S> {
    Scale(S),
    Singleton(String),
}

impl<S> PaletteEntry<S> {
    #[must_use]
    pub const fn as_scale(&self) -> Option<&S> {
        match self {
            Self::Scale(scale) => Some(scale),
            Self::Singleton(_) => None,
        }
    }

    #[must_use]
    pub fn as_singleton(&self) -> Option<&str> {
        match self {
            Self::Scale(_) => None,
            Self::Singleton(color) => Some(color),
        }
    }

    #[must_use]
    pub const fn is_scale(&self) -> bool {
        matches!(self, Self::Scale(_))
    }
}

impl<S: Ramp> PaletteEntry<S> {
    /// Decide the variant for a raw JSON value.
    ///
    /// Returns `None` for values that are neither a conforming ramp object
    /// nor a string.
    #[must_use]
    pub fn from_value(name: &str, value: &Value) -> Option<Self> {
        match value {
            Value::String(color) => Some(Self::Singleton(color.clone())),
            Value::Object(map) if conforms::<S>(value) => Some(Self::Scale(parse_ramp(name, map))),
            _ => None,
        }
    }
}
