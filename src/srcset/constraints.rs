//! Width constraints applied when turning srcset widths into `sizes` values.

use crate::config::LayoutConfig;
use crate::constants::DEFAULT_SRCSET_WIDTH;
use crate::css::units::parse_percentage;
use crate::models::LayoutPreset;
use crate::srcset::calculate_constrained_width;

/// How wide a layout can grow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutConstraints {
    /// Full-bleed: percentages map straight to viewport units
    Unconstrained,
    /// Capped at a maximum CSS length
    MaxWidth(String),
}

impl LayoutConstraints {
    /// Derives the constraints of a preset.
    ///
    /// A `bleed` of `0` removes the cap. A `width` token uses the maximum
    /// configured for that token; presets without a token (or with a token
    /// the config does not define) use the global maximum layout width.
    ///
    /// # Examples
    ///
    /// ```
    /// use laybuild::config::LayoutConfig;
    /// use laybuild::preset::create_preset;
    /// use laybuild::srcset::LayoutConstraints;
    /// use serde_json::json;
    ///
    /// let config: LayoutConfig = r#"{
    ///     "layoutContainer": { "widthTokens": { "md": { "value": "48rem", "cssProperty": "--w-md" } } }
    /// }"#.parse()?;
    /// let preset = create_preset(&json!({
    ///     "id": "p", "name": "P", "breakpoints": { "md": "columns(2)" }, "width": "md"
    /// }))?;
    ///
    /// assert_eq!(
    ///     LayoutConstraints::for_preset(&preset, &config),
    ///     LayoutConstraints::MaxWidth("48rem".to_string())
    /// );
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn for_preset(preset: &LayoutPreset, config: &LayoutConfig) -> Self {
        if preset.bleed == Some(0.0) {
            return Self::Unconstrained;
        }

        let max_width = preset
            .width
            .and_then(|token| {
                let value = config.width_token(token);
                if value.is_none() {
                    tracing::warn!("⚠ Width token '{token}' is not configured; using the global maximum");
                }
                value
            })
            .unwrap_or_else(|| config.max_layout_width());

        Self::MaxWidth(max_width.to_string())
    }

    /// Converts one srcset width into a `sizes` length.
    ///
    /// Only percentage widths are rewritten.
    pub fn apply(&self, width: &str) -> String {
        if !width.contains('%') {
            return width.to_string();
        }

        match self {
            Self::MaxWidth(max_width) => calculate_constrained_width(width, max_width),
            Self::Unconstrained => parse_percentage(width)
                .map_or_else(|| DEFAULT_SRCSET_WIDTH.to_string(), |p| format!("{p}vw")),
        }
    }
}
