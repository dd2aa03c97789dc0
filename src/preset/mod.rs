//! Preset creation, validation, and conversion.
//!
//! Presets arrive as loosely-typed documents (JSON or TOML preset files, or
//! values built in code). [`create_preset`] fills defaults, validates, and
//! produces a typed [`LayoutPreset`]; [`html`] projects it to `<lay-out>`
//! attributes and markup.

pub mod html;
pub mod validator;

pub use html::{
    escape_html, preset_to_attributes, preset_to_html, preset_to_html_with_children,
    AttributeValue, Attributes,
};
pub use validator::{validate_preset, PresetValidation};

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::models::LayoutPreset;
pub use crate::models::{is_layout_pattern, parse_layout_pattern, ParsedPattern};

/// Default values for optional preset fields.
pub struct PresetDefaults;

impl PresetDefaults {
    /// Column gap
    pub const COL_GAP: f64 = 1.0;
    /// Row gap
    pub const ROW_GAP: f64 = 1.0;
    /// Space below
    pub const SPACE_BOTTOM: f64 = 0.0;
    /// Space above
    pub const SPACE_TOP: f64 = 0.0;
    /// Padding below
    pub const PAD_BOTTOM: f64 = 0.0;
    /// Padding above
    pub const PAD_TOP: f64 = 0.0;
    /// Inline padding
    pub const PAD_INLINE: f64 = 0.0;
    /// Maximum width
    pub const MAX_WIDTH: &'static str = "100vw";
    /// `place-self`
    pub const SELF: &'static str = "auto";
    /// Gap decorations
    pub const GAP_DECORATIONS: bool = false;

    /// Returns the defaults as `(field, value)` pairs.
    fn entries() -> [(&'static str, Value); 10] {
        [
            ("colGap", Value::from(Self::COL_GAP)),
            ("rowGap", Value::from(Self::ROW_GAP)),
            ("spaceBottom", Value::from(Self::SPACE_BOTTOM)),
            ("spaceTop", Value::from(Self::SPACE_TOP)),
            ("padBottom", Value::from(Self::PAD_BOTTOM)),
            ("padTop", Value::from(Self::PAD_TOP)),
            ("padInline", Value::from(Self::PAD_INLINE)),
            ("maxWidth", Value::from(Self::MAX_WIDTH)),
            ("self", Value::from(Self::SELF)),
            ("gapDecorations", Value::from(Self::GAP_DECORATIONS)),
        ]
    }
}

/// Fills defaults for fields that are absent.
///
/// Fields explicitly set to `null` are left alone and validated as given.
pub fn merge_preset_defaults(config: &Value) -> Value {
    let mut merged = config.as_object().cloned().unwrap_or_default();
    for (field, default) in PresetDefaults::entries() {
        if !merged.contains_key(field) {
            merged.insert(field.to_string(), default);
        }
    }
    Value::Object(merged)
}

/// Creates a validated preset.
///
/// All validation errors are reported together in one error.
///
/// # Examples
///
/// ```
/// use laybuild::preset::create_preset;
/// use serde_json::json;
///
/// let preset = create_preset(&json!({
///     "id": "hero",
///     "name": "Hero Layout",
///     "breakpoints": { "md": "columns(2)", "lg": "bento(4a)" },
///     "spaceTop": 2
/// }))?;
/// assert_eq!(preset.space_top, 2.0);
/// assert_eq!(preset.col_gap, 1.0);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn create_preset(config: &Value) -> Result<LayoutPreset> {
    let merged = merge_preset_defaults(config);

    let validation = validate_preset(&merged);
    for warning in &validation.warnings {
        tracing::warn!("{warning}");
    }
    if !validation.is_valid() {
        anyhow::bail!("Invalid preset: {}", validation.errors.join(", "));
    }

    serde_json::from_value(merged).context("Invalid preset: failed to read preset fields")
}

/// Merges an override document into a preset and re-validates the result.
///
/// Top-level fields of `overrides` replace the base; breakpoints are merged
/// key by key with the override winning.
pub fn merge_presets(base: &LayoutPreset, overrides: &Value) -> Result<LayoutPreset> {
    let mut merged = match serde_json::to_value(base).context("Failed to serialize preset")? {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    if let Some(overrides) = overrides.as_object() {
        for (field, value) in overrides {
            if field == "breakpoints" {
                if let (Some(Value::Object(target)), Value::Object(extra)) =
                    (merged.get_mut("breakpoints"), value)
                {
                    for (breakpoint, pattern) in extra {
                        target.insert(breakpoint.clone(), pattern.clone());
                    }
                    continue;
                }
            }
            merged.insert(field.clone(), value.clone());
        }
    }

    create_preset(&Value::Object(merged))
}

/// Loads and creates a preset from a JSON or TOML file (chosen by extension).
pub fn load_preset(path: &Path) -> Result<LayoutPreset> {
    let value = read_preset_document(path)?;
    create_preset(&value).with_context(|| format!("Failed to create preset from {}", path.display()))
}

/// Reads a preset file into an unvalidated document.
pub fn read_preset_document(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read preset file: {}", path.display()))?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse preset TOML: {}", path.display()))
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse preset JSON: {}", path.display()))
    }
}
