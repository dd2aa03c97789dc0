//! Layout preset data structures.
//!
//! A preset is the complete configuration of one `<lay-out>` instance across
//! breakpoints. Presets are built and validated by [`crate::preset::create_preset`];
//! once built they are only read.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::parser::scalar::deserialize_optional_scalar;

/// Maximum-width token a layout can opt into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthToken {
    /// Extra small
    Xs,
    /// Small
    Sm,
    /// Medium
    Md,
    /// Large
    Lg,
    /// Extra large
    Xl,
    /// Extra extra large
    Xxl,
}

impl WidthToken {
    /// All tokens in ascending order.
    pub const ALL: [Self; 6] = [Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl, Self::Xxl];

    /// Returns the attribute spelling of the token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "xxl",
        }
    }
}

impl std::fmt::Display for WidthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overflow behaviour of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverflowMode {
    /// Regular wrapping grid (empty attribute value)
    #[default]
    #[serde(rename = "")]
    Unset,
    /// Horizontal scroller that shows a peek of the next item
    #[serde(rename = "preview")]
    Preview,
    /// Scroller that adapts the item count to the viewport
    #[serde(rename = "dynamic")]
    Dynamic,
    /// Scroller without preview
    #[serde(rename = "none")]
    None,
}

impl OverflowMode {
    /// All modes, in attribute order.
    pub const ALL: [Self; 4] = [Self::Unset, Self::Preview, Self::Dynamic, Self::None];

    /// Returns the attribute spelling of the mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Preview => "preview",
            Self::Dynamic => "dynamic",
            Self::None => "none",
        }
    }
}

/// A validated layout preset.
///
/// Optional string fields use `None` for an explicit `null` in the source
/// document; absent fields have already been filled with their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPreset {
    /// Preset identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Breakpoint name → layout pattern (e.g., "md" → "columns(2)")
    pub breakpoints: IndexMap<String, String>,
    /// Explicit column count/template
    #[serde(
        default,
        deserialize_with = "deserialize_optional_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub columns: Option<String>,
    /// Explicit row count/template
    #[serde(
        default,
        deserialize_with = "deserialize_optional_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub rows: Option<String>,
    /// Column gap multiplier
    pub col_gap: f64,
    /// Row gap multiplier
    pub row_gap: f64,
    /// Margin below the layout
    pub space_bottom: f64,
    /// Margin above the layout
    pub space_top: f64,
    /// Padding below the layout
    pub pad_bottom: f64,
    /// Padding above the layout
    pub pad_top: f64,
    /// Inline padding
    pub pad_inline: f64,
    /// Maximum width as a CSS length
    #[serde(default, deserialize_with = "deserialize_optional_scalar")]
    pub max_width: Option<String>,
    /// Maximum-width token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<WidthToken>,
    /// Bleed percentage (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bleed: Option<f64>,
    /// `place-self` token
    #[serde(rename = "self", default, deserialize_with = "deserialize_optional_scalar")]
    pub place_self: Option<String>,
    /// Draw gap decorations
    pub gap_decorations: bool,
    /// Overflow mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overflow: Option<OverflowMode>,
    /// Theme name
    #[serde(
        default,
        deserialize_with = "deserialize_optional_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub theme: Option<String>,
    /// Animation name
    #[serde(
        default,
        deserialize_with = "deserialize_optional_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub animation: Option<String>,
}

impl LayoutPreset {
    /// Returns the breakpoint names in declaration order.
    pub fn breakpoint_names(&self) -> Vec<&str> {
        self.breakpoints.keys().map(String::as_str).collect()
    }

    /// Returns true if the preset defines a layout for the breakpoint.
    pub fn has_breakpoint(&self, breakpoint: &str) -> bool {
        self.breakpoints.contains_key(breakpoint)
    }

    /// Returns the layout pattern for a breakpoint.
    pub fn breakpoint_layout(&self, breakpoint: &str) -> Option<&str> {
        self.breakpoints
            .get(breakpoint)
            .map(String::as_str)
            .filter(|pattern| !pattern.is_empty())
    }
}
