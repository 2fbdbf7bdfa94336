// SPDX-License-Identifier: Apache-2.0
//! Named palettes: loading, deriving and merging.
//!
//! - [`SourcePalette`]: the design system's colors, ramps keyed `10..=100`.
//! - [`FrameworkPalette`]: the framework's default colors, ramps keyed
//!   `50..=950`. Also the shape of the merged theme ([`ThemePalette`]).
//! - [`DerivedPalette`]: remapped design-system ramps only.
//!
//! Design invariants:
//! - **Deterministic ordering**: every palette is keyed by a sorted map, so
//!   output is reproducible byte for byte.
//! - **Immutable result**: [`build_palette`] returns a fresh value and keeps
//!   no state between calls.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::builtin;
use crate::error::{PaletteError, Result};
use crate::remap::{MissingStepPolicy, remap};
use crate::scale::{PaletteEntry, Ramp, SourceScale, TargetScale};
use crate::step::TargetStep;

// ── Loaded palettes ────────────────────────────────────────────────────

/// A palette of named entries, each a ramp of type `S` or a single color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette<S> {
    entries: BTreeMap<String, PaletteEntry<S>>,
    skipped: Vec<String>,
}

/// The design system's palette.
pub type SourcePalette = Palette<SourceScale>;

/// The framework's default palette.
pub type FrameworkPalette = Palette<TargetScale>;

/// Framework defaults with derived ramps layered over them.
pub type ThemePalette = Palette<TargetScale>;

impl<S> Default for Palette<S> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            skipped: Vec::new(),
        }
    }
}

impl<S> Palette<S> {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PaletteEntry<S>> {
        self.entries.get(name)
    }

    /// Insert or replace an entry, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, entry: PaletteEntry<S>) -> Option<PaletteEntry<S>> {
        self.entries.insert(name.into(), entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PaletteEntry<S>)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Ramp entries in name order.
    pub fn scales(&self) -> impl Iterator<Item = (&str, &S)> {
        self.iter()
            .filter_map(|(name, entry)| entry.as_scale().map(|scale| (name, scale)))
    }

    /// Single-color entries in name order.
    pub fn singletons(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .filter_map(|(name, entry)| entry.as_singleton().map(|color| (name, color)))
    }

    /// Names dropped at load time because they were neither ramps nor colors.
    #[must_use]
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Ramp> Palette<S> {
    /// Sort raw JSON entries into ramps and single colors.
    ///
    /// # Errors
    ///
    /// Fails when `value` is not a JSON object.
    pub fn from_json_value(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(PaletteError::NotAnObject {
                found: json_kind(value),
            });
        };

        let mut palette = Self::default();
        for (name, raw) in map {
            match PaletteEntry::from_value(name, raw) {
                Some(entry) => {
                    palette.entries.insert(name.clone(), entry);
                }
                None => {
                    tracing::warn!(
                        name = name.as_str(),
                        kind = json_kind(raw),
                        "skipping entry that is neither a ramp nor a color"
                    );
                    palette.skipped.push(name.clone());
                }
            }
        }
        Ok(palette)
    }

    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_json_value(&value)
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }
}

impl FrameworkPalette {
    /// The default `950` color for `hue`, if the framework defines one.
    #[must_use]
    pub fn darkest(&self, hue: &str) -> Option<&str> {
        self.get(hue)?.as_scale()?.get(TargetStep::DARKEST)
    }
}

impl<S: Serialize> Serialize for Palette<S> {
    fn serialize<Z: Serializer>(&self, serializer: Z) -> std::result::Result<Z::Ok, Z::Error> {
        self.entries.serialize(serializer)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ── Derived palette ────────────────────────────────────────────────────

/// Remapped design-system ramps keyed by hue name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DerivedPalette {
    scales: BTreeMap<String, TargetScale>,
}

impl DerivedPalette {
    #[must_use]
    pub fn get(&self, hue: &str) -> Option<&TargetScale> {
        self.scales.get(hue)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TargetScale)> {
        self.scales.iter().map(|(name, scale)| (name.as_str(), scale))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scales.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}

impl FromIterator<(String, TargetScale)> for DerivedPalette {
    fn from_iter<I: IntoIterator<Item = (String, TargetScale)>>(iter: I) -> Self {
        Self {
            scales: iter.into_iter().collect(),
        }
    }
}

// ── Public API ─────────────────────────────────────────────────────────

/// Remap every ramp in `source` into the framework's shape.
///
/// Single-color entries are left out. `defaults` supplies the `950` step for
/// hue names the framework already knows.
///
/// # Errors
///
/// Propagates [`PaletteError::MissingStep`] under
/// [`MissingStepPolicy::Reject`].
pub fn build_palette(
    source: &SourcePalette,
    defaults: &FrameworkPalette,
    policy: MissingStepPolicy,
) -> Result<DerivedPalette> {
    let derived = source
        .scales()
        .map(|(name, scale)| -> Result<(String, TargetScale)> {
            Ok((name.to_string(), remap(scale, name, defaults, policy)?))
        })
        .collect::<Result<DerivedPalette>>()?;

    tracing::debug!(
        hues = derived.len(),
        singletons = source.singletons().count(),
        skipped = source.skipped().len(),
        policy = policy.as_str(),
        "built derived palette"
    );
    Ok(derived)
}

/// Layer `derived` over `defaults`: same-named entries are replaced, new
/// names are added, everything else in `defaults` is kept.
#[must_use]
pub fn merge_into_defaults(defaults: &FrameworkPalette, derived: &DerivedPalette) -> ThemePalette {
    let mut theme = ThemePalette {
        entries: defaults.entries.clone(),
        skipped: Vec::new(),
    };
    let mut replaced = 0usize;
    for (name, scale) in derived.iter() {
        if theme
            .insert(name, PaletteEntry::Scale(scale.clone()))
            .is_some()
        {
            replaced += 1;
        }
    }
    tracing::debug!(
        defaults = defaults.len(),
        derived = derived.len(),
        replaced,
        total = theme.len(),
        "merged derived palette into defaults"
    );
    theme
}

/// Build the derived palette from the bundled design-system and framework
/// data.
///
/// # Errors
///
/// Fails only if the bundled data cannot be parsed or `policy` rejects it.
pub fn init(policy: MissingStepPolicy) -> Result<DerivedPalette> {
    let source = builtin::carbon()?;
    let defaults = builtin::tailwind_defaults()?;
    build_palette(&source, &defaults, policy)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::step::SourceStep;

    fn tiny_source() -> SourcePalette {
        SourcePalette::from_json_value(&json!({
            "black": "#000000",
            "white": "#ffffff",
            "mono": {
                "10": "#fff", "20": "#eee", "30": "#ddd", "40": "#ccc", "50": "#bbb",
                "60": "#999", "70": "#777", "80": "#555", "90": "#333", "100": "#000"
            },
            "count": 3
        }))
        .unwrap()
    }

    fn tiny_defaults() -> FrameworkPalette {
        FrameworkPalette::from_json_value(&json!({
            "black": "#000",
            "mono": { "50": "#fafafa", "900": "#111", "950": "#050505" },
            "slate": { "50": "#f8fafc", "900": "#0f172a", "950": "#020617" }
        }))
        .unwrap()
    }

    #[test]
    fn loader_sorts_entries_into_variants() {
        let source = tiny_source();
        assert_eq!(source.scales().count(), 1);
        assert_eq!(
            source.singletons().collect::<Vec<_>>(),
            vec![("black", "#000000"), ("white", "#ffffff")]
        );
        assert_eq!(source.skipped(), ["count".to_string()]);
    }

    #[test]
    fn loader_rejects_non_object_root() {
        let error = SourcePalette::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(error, PaletteError::NotAnObject { found: "array" }));
    }

    #[test]
    fn loader_surfaces_json_syntax_errors() {
        let error = SourcePalette::from_json_str("{ nope").unwrap_err();
        assert!(matches!(error, PaletteError::Json(_)));
    }

    #[test]
    fn darkest_reads_only_scales() {
        let defaults = tiny_defaults();
        assert_eq!(defaults.darkest("slate"), Some("#020617"));
        assert_eq!(defaults.darkest("black"), None);
        assert_eq!(defaults.darkest("rose"), None);
    }

    #[test]
    fn build_excludes_singletons() {
        let derived = build_palette(&tiny_source(), &tiny_defaults(), MissingStepPolicy::Reject)
            .unwrap();
        assert_eq!(derived.names().collect::<Vec<_>>(), vec!["mono"]);
        assert!(derived.get("black").is_none());
        assert!(derived.get("white").is_none());
    }

    #[test]
    fn build_uses_default_950_for_known_hue() {
        let derived = build_palette(&tiny_source(), &tiny_defaults(), MissingStepPolicy::Reject)
            .unwrap();
        let mono = derived.get("mono").unwrap();
        assert_eq!(mono.get(TargetStep::T950), Some("#050505"));
        assert_eq!(mono.get(TargetStep::T900), Some("#000"));
    }

    #[test]
    fn build_rejects_incomplete_scale_by_default() {
        let source = SourcePalette::from_json_value(&json!({
            "gappy": { "10": "#fff", "100": "#000" }
        }))
        .unwrap();
        let error = build_palette(&source, &FrameworkPalette::default(), MissingStepPolicy::Reject)
            .unwrap_err();
        assert!(matches!(
            error,
            PaletteError::MissingStep { step: SourceStep::S20, .. }
        ));
    }

    #[test]
    fn build_is_repeatable() {
        let source = tiny_source();
        let defaults = tiny_defaults();
        let first = build_palette(&source, &defaults, MissingStepPolicy::Reject).unwrap();
        let second = build_palette(&source, &defaults, MissingStepPolicy::Reject).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn merge_overwrites_and_keeps_defaults() {
        let defaults = tiny_defaults();
        let derived = build_palette(&tiny_source(), &defaults, MissingStepPolicy::Reject).unwrap();
        let theme = merge_into_defaults(&defaults, &derived);

        assert_eq!(theme.len(), 3);
        assert_eq!(theme.get("black").and_then(PaletteEntry::as_singleton), Some("#000"));
        let mono = theme.get("mono").and_then(PaletteEntry::as_scale).unwrap();
        assert_eq!(mono.len(), 11);
        assert_eq!(mono.get(TargetStep::T50), Some("#fff"));
        assert_eq!(theme.get("slate"), defaults.get("slate"));
    }

    #[test]
    fn palette_serializes_as_flat_map() {
        let json = serde_json::to_value(tiny_defaults()).unwrap();
        assert_eq!(json["black"], json!("#000"));
        assert_eq!(json["slate"]["950"], json!("#020617"));
    }

    #[tracing_test::traced_test]
    #[test]
    fn build_logs_summary() {
        build_palette(&tiny_source(), &tiny_defaults(), MissingStepPolicy::Reject).unwrap();
        assert!(logs_contain("built derived palette"));
    }
}
