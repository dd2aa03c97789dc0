//! Layout build configuration.
//!
//! This module loads `layout.config`: the element tag, container widths,
//! breakpoint definitions, the CSS files to prepend, and theme colors. The
//! file is JSON; JSON5 syntax (comments, trailing commas) is accepted as a
//! fallback.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::constants::{DEFAULT_ELEMENT, DEFAULT_MAX_LAYOUT_WIDTH};
use crate::css::units::length_to_px;
use crate::models::{deserialize_layout_references, LayoutReference, WidthToken};
use crate::parser::scalar::deserialize_optional_length;

/// Kind of at-rule a breakpoint compiles to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum QueryType {
    /// `@media` viewport query
    #[default]
    #[serde(rename = "@media", alias = "media")]
    Media,
    /// `@container` size query
    #[serde(rename = "@container", alias = "container")]
    Container,
    /// Anything else; produces no CSS
    #[serde(other)]
    Unknown,
}

impl QueryType {
    /// Returns the at-rule keyword, or `None` for unknown types.
    pub const fn at_rule(self) -> Option<&'static str> {
        match self {
            Self::Media => Some("@media"),
            Self::Container => Some("@container"),
            Self::Unknown => None,
        }
    }
}

/// One named breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct BreakpointConfig {
    /// Query kind
    #[serde(rename = "type", default)]
    pub query_type: QueryType,
    /// Lower bound (CSS length)
    #[serde(default, deserialize_with = "deserialize_optional_length")]
    pub min: Option<String>,
    /// Upper bound (CSS length)
    #[serde(default, deserialize_with = "deserialize_optional_length")]
    pub max: Option<String>,
    /// Families and variants enabled at this breakpoint
    #[serde(default, deserialize_with = "deserialize_layout_references")]
    pub layouts: Vec<LayoutReference>,
}

impl BreakpointConfig {
    /// Builds the at-rule prelude for this breakpoint.
    ///
    /// Returns `None` when the breakpoint has no bounds or an unknown type.
    ///
    /// # Examples
    ///
    /// ```
    /// use laybuild::config::BreakpointConfig;
    ///
    /// let bp = BreakpointConfig {
    ///     min: Some("540px".into()),
    ///     max: Some("719px".into()),
    ///     ..Default::default()
    /// };
    /// assert_eq!(
    ///     bp.media_query().as_deref(),
    ///     Some("@media (min-width: 540px) and (max-width: 719px)")
    /// );
    /// ```
    pub fn media_query(&self) -> Option<String> {
        let at_rule = self.query_type.at_rule()?;

        let conditions: Vec<String> = [("min-width", &self.min), ("max-width", &self.max)]
            .into_iter()
            .filter_map(|(feature, bound)| bound.as_ref().map(|b| format!("({feature}: {b})")))
            .collect();

        if conditions.is_empty() {
            return None;
        }
        Some(format!("{at_rule} {}", conditions.join(" and ")))
    }

    /// Lower bound in whole pixels, if it can be resolved.
    #[allow(clippy::cast_sign_loss)]
    pub fn min_px(&self) -> Option<u32> {
        let px = length_to_px(self.min.as_deref()?)?;
        (px >= 0.0).then(|| px.trunc() as u32)
    }
}

/// Theme colors exposed as custom properties.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ThemeConfig {
    /// Background (`--layout-bg`)
    #[serde(default)]
    pub bg: String,
    /// Text color (`--layout-c`)
    #[serde(default)]
    pub color: String,
}

/// A container width, either bare or paired with its custom property.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// Plain CSS length
    Plain(String),
    /// `{ "value": "...", "cssProperty": "--..." }`
    Property {
        /// CSS length
        value: String,
        /// Custom property the value is bound to
        #[serde(rename = "cssProperty", default)]
        css_property: Option<String>,
    },
}

impl TokenValue {
    /// Returns the CSS length.
    pub fn value(&self) -> &str {
        match self {
            Self::Plain(value) | Self::Property { value, .. } => value,
        }
    }
}

/// Width settings of the layout container.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutContainerConfig {
    /// Global maximum width
    #[serde(default)]
    pub max_layout_width: Option<TokenValue>,
    /// Maximum width per width token
    #[serde(default)]
    pub width_tokens: IndexMap<String, TokenValue>,
}

/// Contents of `layout.config`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Custom element tag used in selectors
    #[serde(default = "default_element")]
    pub element: String,
    /// Global maximum width (shorthand for `layoutContainer.maxLayoutWidth`)
    #[serde(default, deserialize_with = "deserialize_optional_length")]
    pub max_layout_width: Option<String>,
    /// Container width settings
    #[serde(default)]
    pub layout_container: LayoutContainerConfig,
    /// Breakpoints in declaration order
    #[serde(default)]
    pub breakpoints: IndexMap<String, BreakpointConfig>,
    /// Core CSS file names (without `.css`), emitted first
    #[serde(default)]
    pub core: Vec<String>,
    /// Common CSS file names, emitted after core
    #[serde(default)]
    pub common: Vec<String>,
    /// Theme name → colors
    #[serde(default)]
    pub themes: IndexMap<String, ThemeConfig>,
}

fn default_element() -> String {
    DEFAULT_ELEMENT.to_string()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            element: default_element(),
            max_layout_width: None,
            layout_container: LayoutContainerConfig::default(),
            breakpoints: IndexMap::new(),
            core: Vec::new(),
            common: Vec::new(),
            themes: IndexMap::new(),
        }
    }
}

impl FromStr for LayoutConfig {
    type Err = anyhow::Error;

    /// Parses JSON, falling back to JSON5 when strict JSON fails.
    fn from_str(content: &str) -> Result<Self> {
        match serde_json::from_str(content) {
            Ok(config) => Ok(config),
            Err(json_err) => json5::from_str(content).map_err(|json5_err| {
                anyhow::anyhow!("{json5_err}").context(format!("Invalid layout config ({json_err})"))
            }),
        }
    }
}

impl LayoutConfig {
    /// Loads the configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout config: {}", path.display()))?;

        content
            .parse()
            .with_context(|| format!("Failed to parse layout config: {}", path.display()))
    }

    /// Effective global maximum layout width.
    ///
    /// `layoutContainer.maxLayoutWidth` wins over the top-level shorthand;
    /// without either the default of `1024px` applies.
    pub fn max_layout_width(&self) -> &str {
        self.layout_container
            .max_layout_width
            .as_ref()
            .map(TokenValue::value)
            .or(self.max_layout_width.as_deref())
            .unwrap_or(DEFAULT_MAX_LAYOUT_WIDTH)
    }

    /// Maximum width configured for a width token.
    pub fn width_token(&self, token: WidthToken) -> Option<&str> {
        self.layout_container
            .width_tokens
            .get(token.as_str())
            .map(TokenValue::value)
    }
}

/// Pixel thresholds consumed by srcset generation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelConfig {
    /// Effective maximum layout width
    pub max_layout_width: String,
    /// Breakpoint name → lower bound in pixels
    pub breakpoints: IndexMap<String, u32>,
}

impl PixelConfig {
    /// Derives the pixel table from each breakpoint's `min`.
    ///
    /// Breakpoints whose lower bound is missing or not in `px`/`rem` are left
    /// out.
    pub fn from_config(config: &LayoutConfig) -> Self {
        let breakpoints = config
            .breakpoints
            .iter()
            .filter_map(|(name, bp)| bp.min_px().map(|px| (name.clone(), px)))
            .collect();

        Self {
            max_layout_width: config.max_layout_width().to_string(),
            breakpoints,
        }
    }

    /// Pixel threshold for a breakpoint.
    pub fn pixels_for(&self, breakpoint: &str) -> Option<u32> {
        self.breakpoints.get(breakpoint).copied()
    }
}
