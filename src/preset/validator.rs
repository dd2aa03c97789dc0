//! Preset validation.
//!
//! Validation works on the raw document so that type mismatches (a string
//! gap, a `null` flag) are reported instead of failing deserialization.

// Allow format! appended to String - more readable for building messages
#![allow(clippy::format_push_string)]

use serde::Serialize;
use serde_json::Value;

use crate::models::{OverflowMode, WidthToken};
use crate::preset::is_layout_pattern;

/// Fields that must be numbers when present.
const NUMERIC_FIELDS: [&str; 8] = [
    "colGap",
    "rowGap",
    "spaceBottom",
    "spaceTop",
    "padBottom",
    "padTop",
    "padInline",
    "bleed",
];

/// Validation result with errors and warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PresetValidation {
    /// Whether the preset has no errors
    pub valid: bool,
    /// Problems that make the preset unusable
    pub errors: Vec<String>,
    /// Non-blocking issues
    pub warnings: Vec<String>,
}

impl PresetValidation {
    /// Returns true if there are no errors (warnings are allowed).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Formats the result as a user-friendly message.
    pub fn format_message(&self) -> String {
        let mut message = String::new();

        if !self.errors.is_empty() {
            message.push_str(&format!("✗ {} preset errors:\n", self.errors.len()));
            for (idx, error) in self.errors.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, error));
            }
        }

        if !self.warnings.is_empty() {
            message.push_str(&format!("⚠ {} warnings:\n", self.warnings.len()));
            for (idx, warning) in self.warnings.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, warning));
            }
        }

        message
    }
}

/// Validates a preset document. Never fails; problems are collected.
///
/// A document that is not an object is checked as if it were empty.
pub fn validate_preset(preset: &Value) -> PresetValidation {
    let empty = serde_json::Map::new();
    let fields = preset.as_object().unwrap_or(&empty);

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    // Required fields
    if !is_non_empty_string(fields.get("id")) {
        errors.push("Preset must have a valid \"id\" string".to_string());
    }
    if !is_non_empty_string(fields.get("name")) {
        errors.push("Preset must have a valid \"name\" string".to_string());
    }
    match fields.get("breakpoints") {
        Some(Value::Object(breakpoints)) => {
            if breakpoints.is_empty() {
                errors.push("Preset must have at least one breakpoint definition".to_string());
            }

            for (breakpoint, pattern) in breakpoints {
                match pattern {
                    Value::String(pattern) if !is_layout_pattern(pattern) => {
                        warnings.push(format!(
                            "Breakpoint \"{breakpoint}\" pattern \"{pattern}\" doesn't match expected format: layoutType(id)"
                        ));
                    }
                    Value::String(_) => {}
                    _ => errors.push(format!(
                        "Breakpoint \"{breakpoint}\" must have a string pattern"
                    )),
                }
            }
        }
        _ => errors.push("Preset must have a \"breakpoints\" object".to_string()),
    }

    // Numeric fields; null counts as present
    for field in NUMERIC_FIELDS {
        match fields.get(field) {
            None => {}
            Some(Value::Number(number)) => {
                if field == "bleed" {
                    let bleed = number.as_f64().unwrap_or(f64::NAN);
                    if !(0.0..=100.0).contains(&bleed) {
                        errors.push("Field \"bleed\" must be between 0 and 100".to_string());
                    }
                }
            }
            Some(_) => errors.push(format!("Field \"{field}\" must be a number")),
        }
    }

    if let Some(width) = fields.get("width") {
        let known = width
            .as_str()
            .is_some_and(|w| WidthToken::ALL.iter().any(|token| token.as_str() == w));
        if !known {
            let tokens: Vec<&str> = WidthToken::ALL.iter().map(|t| t.as_str()).collect();
            errors.push(format!(
                "Field \"width\" must be one of: {}",
                tokens.join(", ")
            ));
        }
    }

    if let Some(overflow) = fields.get("overflow") {
        let known = overflow
            .as_str()
            .is_some_and(|o| OverflowMode::ALL.iter().any(|mode| mode.as_str() == o));
        if !known {
            let modes: Vec<&str> = OverflowMode::ALL
                .iter()
                .map(|mode| match mode.as_str() {
                    "" => "(empty string)",
                    other => other,
                })
                .collect();
            errors.push(format!(
                "Field \"overflow\" must be one of: {}",
                modes.join(", ")
            ));
        }
    }

    if let Some(gap_decorations) = fields.get("gapDecorations") {
        if !gap_decorations.is_boolean() {
            errors.push("Field \"gapDecorations\" must be a boolean".to_string());
        }
    }

    PresetValidation {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}

fn is_non_empty_string(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty())
}
