//! Attribute and markup projection of presets.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::constants::DEFAULT_ELEMENT;
use crate::models::{LayoutPreset, OverflowMode};
use crate::preset::PresetDefaults;

/// Value of one HTML attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// Boolean attribute, rendered without `="..."`
    Presence,
    /// Regular attribute value
    Text(String),
}

impl AttributeValue {
    /// Returns the attribute text; presence attributes read as `""`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Presence => "",
            Self::Text(text) => text,
        }
    }
}

impl Serialize for AttributeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Ordered attribute map for a `<lay-out>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Attributes(IndexMap<String, AttributeValue>);

impl Attributes {
    /// Creates an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a text attribute.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), AttributeValue::Text(value.into()));
    }

    /// Sets a presence-only attribute.
    pub fn set_presence(&mut self, name: impl Into<String>) {
        self.0.insert(name.into(), AttributeValue::Presence);
    }

    /// Looks up an attribute.
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.0.get(name)
    }

    /// Returns true if the attribute is set.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Attribute names in emission order.
    pub fn names(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(name, value)` pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Renders the attributes as they appear inside a start tag.
    pub fn to_html(&self) -> String {
        self.iter()
            .map(|(name, value)| match value {
                AttributeValue::Presence => name.to_string(),
                AttributeValue::Text(text) => format!("{name}=\"{}\"", escape_html(text)),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Converts a preset to `<lay-out>` attributes.
///
/// Breakpoints are copied verbatim; every other field is emitted only when it
/// differs from its default, so a minimal preset yields only breakpoints.
///
/// # Examples
///
/// ```
/// use laybuild::preset::{create_preset, preset_to_attributes};
/// use serde_json::json;
///
/// let preset = create_preset(&json!({
///     "id": "hero",
///     "name": "Hero",
///     "breakpoints": { "md": "columns(2)", "lg": "bento(4a)" },
///     "spaceTop": 2
/// }))?;
/// let attrs = preset_to_attributes(&preset);
/// assert_eq!(attrs.names(), vec!["md", "lg", "space-top"]);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn preset_to_attributes(preset: &LayoutPreset) -> Attributes {
    let mut attrs = Attributes::new();

    for (breakpoint, pattern) in &preset.breakpoints {
        attrs.set(breakpoint, pattern);
    }

    if let Some(columns) = &preset.columns {
        attrs.set("columns", columns);
    }
    if let Some(rows) = &preset.rows {
        attrs.set("rows", rows);
    }

    // Spacing
    let spacing = [
        ("col-gap", preset.col_gap, PresetDefaults::COL_GAP),
        ("row-gap", preset.row_gap, PresetDefaults::ROW_GAP),
        ("space-bottom", preset.space_bottom, PresetDefaults::SPACE_BOTTOM),
        ("space-top", preset.space_top, PresetDefaults::SPACE_TOP),
        ("pad-bottom", preset.pad_bottom, PresetDefaults::PAD_BOTTOM),
        ("pad-top", preset.pad_top, PresetDefaults::PAD_TOP),
        ("pad-inline", preset.pad_inline, PresetDefaults::PAD_INLINE),
    ];
    for (name, value, default) in spacing {
        if value != default {
            attrs.set(name, value.to_string());
        }
    }

    // Constraints
    if let Some(max_width) = preset
        .max_width
        .as_deref()
        .filter(|w| *w != PresetDefaults::MAX_WIDTH)
    {
        attrs.set("max-width", max_width);
    }
    if let Some(width) = preset.width {
        attrs.set("width", width.as_str());
    }
    if let Some(bleed) = preset.bleed {
        attrs.set("bleed", bleed.to_string());
    }
    if let Some(place_self) = preset
        .place_self
        .as_deref()
        .filter(|s| *s != PresetDefaults::SELF)
    {
        attrs.set("self", place_self);
    }

    // Visual & behavior
    if preset.gap_decorations {
        attrs.set_presence("gap");
    }
    if let Some(overflow) = preset.overflow.filter(|mode| *mode != OverflowMode::Unset) {
        attrs.set("overflow", overflow.as_str());
    }
    if let Some(theme) = &preset.theme {
        attrs.set("theme", theme);
    }
    if let Some(animation) = &preset.animation {
        attrs.set("animation", animation);
    }

    attrs
}

/// Renders the opening `<lay-out ...>` tag for a preset.
///
/// A `srcsets` value, when given, is appended as the last attribute.
pub fn preset_to_html(preset: &LayoutPreset, srcsets: Option<&str>) -> String {
    let mut attrs = preset_to_attributes(preset);
    if let Some(srcsets) = srcsets.filter(|s| !s.is_empty()) {
        attrs.set("srcsets", srcsets);
    }

    format!("<{DEFAULT_ELEMENT} {}>", attrs.to_html())
}

/// Renders a complete `<lay-out>` element wrapping `children`.
pub fn preset_to_html_with_children(
    preset: &LayoutPreset,
    children: &str,
    srcsets: Option<&str>,
) -> String {
    format!(
        "{}\n{children}\n</{DEFAULT_ELEMENT}>",
        preset_to_html(preset, srcsets)
    )
}

/// Escapes `& < > " '` for use in attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::create_preset;
    use serde_json::{json, Value};

    fn preset(extra: Value) -> LayoutPreset {
        let mut config = json!({
            "id": "hero",
            "name": "Hero",
            "breakpoints": { "md": "columns(2)", "lg": "bento(4a)" }
        });
        if let (Some(base), Some(extra)) = (config.as_object_mut(), extra.as_object()) {
            for (k, v) in extra {
                base.insert(k.clone(), v.clone());
            }
        }
        create_preset(&config).unwrap()
    }

    #[test]
    fn test_minimal_preset_emits_only_breakpoints() {
        let attrs = preset_to_attributes(&preset(json!({})));
        assert_eq!(attrs.names(), vec!["md", "lg"]);
        assert_eq!(attrs.get("md"), Some(&AttributeValue::Text("columns(2)".into())));
    }

    #[test]
    fn test_non_default_fields_are_emitted_in_order() {
        let attrs = preset_to_attributes(&preset(json!({
            "colGap": 2,
            "padInline": 1.5,
            "maxWidth": "80rem",
            "width": "xl",
            "bleed": 0,
            "self": "center",
            "gapDecorations": true,
            "overflow": "preview",
            "theme": "primary",
            "animation": "fade-up"
        })));

        assert_eq!(
            attrs.names(),
            vec![
                "md", "lg", "col-gap", "pad-inline", "max-width", "width", "bleed", "self",
                "gap", "overflow", "theme", "animation"
            ]
        );
        assert_eq!(attrs.get("col-gap").unwrap().as_str(), "2");
        assert_eq!(attrs.get("pad-inline").unwrap().as_str(), "1.5");
        assert_eq!(attrs.get("bleed").unwrap().as_str(), "0");
        assert_eq!(attrs.get("gap"), Some(&AttributeValue::Presence));
    }

    #[test]
    fn test_default_valued_fields_are_skipped() {
        let attrs = preset_to_attributes(&preset(json!({
            "colGap": 1,
            "maxWidth": "100vw",
            "self": "auto",
            "overflow": "",
            "gapDecorations": false
        })));
        assert_eq!(attrs.names(), vec!["md", "lg"]);
    }

    #[test]
    fn test_explicit_null_string_is_not_emitted() {
        let attrs = preset_to_attributes(&preset(json!({ "maxWidth": null })));
        assert!(!attrs.contains("max-width"));
    }

    #[test]
    fn test_preset_to_html() {
        let html = preset_to_html(&preset(json!({ "spaceTop": 2, "gapDecorations": true })), None);
        assert_eq!(
            html,
            r#"<lay-out md="columns(2)" lg="bento(4a)" space-top="2" gap>"#
        );
    }

    #[test]
    fn test_preset_to_html_escapes_values() {
        let html = preset_to_html(&preset(json!({ "theme": "a\"b<c>&'d" })), None);
        assert!(html.contains(r#"theme="a&quot;b&lt;c&gt;&amp;&#39;d""#));
    }

    #[test]
    fn test_preset_to_html_with_srcsets_and_children() {
        let html = preset_to_html_with_children(
            &preset(json!({})),
            "<img src=\"a.jpg\">",
            Some("default:100vw;540:50%"),
        );
        assert_eq!(
            html,
            "<lay-out md=\"columns(2)\" lg=\"bento(4a)\" srcsets=\"default:100vw;540:50%\">\n<img src=\"a.jpg\">\n</lay-out>"
        );
    }
}
