//! Layout family file parser.
//!
//! One JSON file per family (`layouts/grid.json`) declares the family name,
//! its attribute prefix, and the variants:
//!
//! ```json
//! {
//!   "name": "Grid",
//!   "prefix": "grid",
//!   "layouts": [
//!     { "id": "3c", "columns": "2fr 1fr", "items": 3, "srcset": "66.67%,33.33%,33.33%",
//!       "rules": [{ "selector": "*:nth-of-type(1)", "properties": { "--layout-ga": "1 / 1 / 3 / 2" } }] }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::models::{composite_id, LayoutPattern, PatternFamily, PatternRule};
use crate::parser::scalar::{
    deserialize_css_properties, deserialize_optional_scalar, deserialize_scalar,
};

/// Family file as written on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternFile {
    /// Human-readable family name
    #[serde(default)]
    pub name: Option<String>,
    /// Attribute prefix (defaults to the file stem)
    #[serde(default)]
    pub prefix: Option<String>,
    /// Variant definitions; a file without this array is not a family file
    #[serde(default)]
    pub layouts: Option<Vec<PatternDefinition>>,
}

/// One variant as written on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// Bare variant id (e.g., "3c")
    #[serde(deserialize_with = "deserialize_scalar")]
    pub id: String,
    /// `grid-template-columns` value
    #[serde(default, deserialize_with = "deserialize_optional_scalar")]
    pub columns: Option<String>,
    /// `grid-template-rows` value
    #[serde(default, deserialize_with = "deserialize_optional_scalar")]
    pub rows: Option<String>,
    /// Designed child count
    #[serde(default)]
    pub items: Option<u32>,
    /// Whether the pattern repeats past `items`
    #[serde(default)]
    pub repeatable: bool,
    /// Per-child widths
    #[serde(default)]
    pub srcset: Option<String>,
    /// Selector rules
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

/// One selector rule as written on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleDefinition {
    /// Relative selector
    pub selector: String,
    /// Declarations in file order
    #[serde(default, deserialize_with = "deserialize_css_properties")]
    pub properties: IndexMap<String, String>,
}

impl PatternFile {
    /// Converts the raw file into a family registered under `key`.
    ///
    /// Variant ids become composite `prefix(id)` ids; the bare id is kept as
    /// `original_id`.
    pub fn into_family(self, key: &str) -> Result<PatternFamily> {
        let definitions = self
            .layouts
            .with_context(|| format!("Family '{key}' has no \"layouts\" array"))?;
        let prefix = self
            .prefix
            .filter(|prefix| !prefix.is_empty())
            .unwrap_or_else(|| key.to_string());

        let patterns = definitions
            .into_iter()
            .map(|def| LayoutPattern {
                id: composite_id(&prefix, &def.id),
                original_id: def.id,
                columns: def.columns,
                rows: def.rows,
                items: def.items,
                repeatable: def.repeatable,
                srcset: def.srcset.filter(|srcset| !srcset.trim().is_empty()),
                rules: def
                    .rules
                    .into_iter()
                    .map(|rule| PatternRule {
                        selector: rule.selector,
                        properties: rule.properties,
                    })
                    .collect(),
            })
            .collect();

        Ok(PatternFamily {
            key: key.to_string(),
            name: self.name.unwrap_or_else(|| key.to_string()),
            prefix,
            patterns,
        })
    }
}

/// Parses family JSON text registered under `key`.
pub fn parse_pattern_str(key: &str, content: &str) -> Result<PatternFamily> {
    let file: PatternFile = serde_json::from_str(content)
        .with_context(|| format!("Failed to parse layout family '{key}'"))?;
    file.into_family(key)
}

/// Reads and parses a family file; the key is the file stem.
pub fn parse_pattern_file(path: &Path) -> Result<PatternFamily> {
    let key = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .with_context(|| format!("Invalid layout file name: {}", path.display()))?;

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file: {}", path.display()))?;

    parse_pattern_str(key, &content)
}
