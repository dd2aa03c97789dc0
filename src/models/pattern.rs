//! Layout pattern and pattern family data structures.

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static LAYOUT_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)$").expect("layout id regex is valid"));

static LAYOUT_PATTERN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\(([^)]*)\)$").expect("layout pattern regex is valid"));

/// One selector rule declared by a pattern.
///
/// Selectors are relative to the layout element: `&` (or `root`) is the
/// element itself, `&>*` its direct children, `&:hover`-style selectors are
/// appended to it, and anything else addresses a child (`:nth-child(2)`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternRule {
    /// Relative selector as written in the family file
    pub selector: String,
    /// CSS declarations in file order
    pub properties: IndexMap<String, String>,
}

/// A concrete layout variant within a family.
///
/// # Invariants
///
/// - `id` is the composite `prefix(original_id)` form (e.g. `grid(3c)`)
/// - immutable once loaded into the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPattern {
    /// Composite id (e.g., "grid(3c)")
    pub id: String,
    /// Id as written in the family file (e.g., "3c")
    pub original_id: String,
    /// `grid-template-columns` value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<String>,
    /// `grid-template-rows` value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<String>,
    /// Number of children the pattern is designed for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<u32>,
    /// Whether the pattern repeats for children beyond `items`
    pub repeatable: bool,
    /// Comma-separated per-child widths (e.g., "66.67%,33.33%,33.33%")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srcset: Option<String>,
    /// Selector rules
    pub rules: Vec<PatternRule>,
}

/// A named group of layout variants sharing a prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternFamily {
    /// Registry key (the family file stem, e.g. "columns")
    pub key: String,
    /// Human-readable family name
    pub name: String,
    /// Prefix used to build composite ids and attribute values
    pub prefix: String,
    /// Variants in file order
    pub patterns: Vec<LayoutPattern>,
}

impl PatternFamily {
    /// Finds a variant by its bare id (`"3c"`) or composite id (`"grid(3c)"`).
    pub fn find_variant(&self, variant_id: &str) -> Option<&LayoutPattern> {
        self.patterns
            .iter()
            .find(|pattern| pattern.original_id == variant_id || pattern.id == variant_id)
    }

    /// Builds the composite id for a variant of this family.
    pub fn composite_id(&self, variant_id: &str) -> String {
        composite_id(&self.prefix, variant_id)
    }
}

/// Builds a composite pattern id (`prefix(id)`).
pub fn composite_id(prefix: &str, id: &str) -> String {
    format!("{prefix}({id})")
}

/// Extracts the parenthesized variant id from a composite id.
///
/// `"columns(2)"` yields `"2"`. Ids without a trailing `(...)` are returned
/// unchanged, so bare variant ids pass straight through.
pub fn extract_layout_id(full_id: &str) -> &str {
    LAYOUT_ID_REGEX
        .captures(full_id)
        .and_then(|captures| captures.get(1))
        .map_or(full_id, |m| m.as_str())
}

/// A layout pattern split into family and variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPattern {
    /// Family (e.g., "columns")
    pub layout_type: String,
    /// Variant id (e.g., "2")
    pub layout_id: String,
}

/// Splits a layout pattern such as `"bento(4a)"` into its parts.
pub fn parse_layout_pattern(pattern: &str) -> Option<ParsedPattern> {
    let captures = LAYOUT_PATTERN_REGEX.captures(pattern)?;
    Some(ParsedPattern {
        layout_type: captures[1].to_string(),
        layout_id: captures[2].to_string(),
    })
}

/// Returns true if the pattern has the `layoutType(id)` shape.
pub fn is_layout_pattern(pattern: &str) -> bool {
    LAYOUT_PATTERN_REGEX.is_match(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family() -> PatternFamily {
        PatternFamily {
            key: "grid".to_string(),
            name: "Grid".to_string(),
            prefix: "grid".to_string(),
            patterns: vec![LayoutPattern {
                id: "grid(3c)".to_string(),
                original_id: "3c".to_string(),
                columns: Some("2fr 1fr".to_string()),
                rows: None,
                items: Some(3),
                repeatable: false,
                srcset: Some("66.67%,33.33%,33.33%".to_string()),
                rules: Vec::new(),
            }],
        }
    }

    #[test]
    fn test_extract_layout_id() {
        assert_eq!(extract_layout_id("grid(3c)"), "3c");
        assert_eq!(extract_layout_id("columns(2)"), "2");
        assert_eq!(extract_layout_id("asym(l-r)"), "l-r");
        assert_eq!(extract_layout_id("ratio(50:25:25)"), "50:25:25");
    }

    #[test]
    fn test_extract_layout_id_passes_bare_ids_through() {
        assert_eq!(extract_layout_id("3c"), "3c");
        assert_eq!(extract_layout_id("grid()"), "grid()");
    }

    #[test]
    fn test_find_variant_by_either_id() {
        let family = family();
        assert!(family.find_variant("3c").is_some());
        assert!(family.find_variant("grid(3c)").is_some());
        assert!(family.find_variant("3d").is_none());
    }

    #[test]
    fn test_composite_id_matches_loaded_id() {
        let family = family();
        let pattern = &family.patterns[0];
        assert_eq!(family.composite_id(&pattern.original_id), pattern.id);
        assert_eq!(extract_layout_id(&pattern.id), pattern.original_id);
    }

    #[test]
    fn test_parse_layout_pattern() {
        let parsed = parse_layout_pattern("bento(4a)").unwrap();
        assert_eq!(parsed.layout_type, "bento");
        assert_eq!(parsed.layout_id, "4a");

        assert!(is_layout_pattern("columns(2)"));
        assert!(!is_layout_pattern("two-columns"));
        assert!(parse_layout_pattern("columns(2) extra").is_none());
    }
}
