//! Flattened pattern table for runtime srcset lookups.
//!
//! The table maps every composite pattern id (`"grid(3c)"`) to the data the
//! runtime needs to compute image sizes, and is exported together with the
//! breakpoint pixel table as JSON.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::config::PixelConfig;
use crate::registry::PatternRegistry;

/// Srcset-relevant data of one pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LayoutSummary {
    /// Per-child widths
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srcset: Option<String>,
    /// Designed child count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<u32>,
    /// Whether the pattern repeats past `items`
    pub repeatable: bool,
}

impl LayoutSummary {
    /// Summary carrying only a srcset.
    pub fn with_srcset(srcset: impl Into<String>) -> Self {
        Self {
            srcset: Some(srcset.into()),
            ..Self::default()
        }
    }
}

/// Composite pattern id → summary, in registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LayoutsMap(IndexMap<String, LayoutSummary>);

impl LayoutsMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flattens every pattern of every loaded family.
    pub fn from_registry(registry: &PatternRegistry) -> Self {
        let mut map = Self::new();
        for pattern in registry.patterns() {
            map.insert(
                pattern.id.clone(),
                LayoutSummary {
                    srcset: pattern.srcset.clone(),
                    items: pattern.items,
                    repeatable: pattern.repeatable,
                },
            );
        }
        map
    }

    /// Adds or replaces a pattern summary.
    pub fn insert(&mut self, pattern: impl Into<String>, summary: LayoutSummary) {
        self.0.insert(pattern.into(), summary);
    }

    /// Looks up a pattern.
    pub fn get(&self, pattern: &str) -> Option<&LayoutSummary> {
        self.0.get(pattern)
    }

    /// Srcset of a pattern, if it declares one.
    pub fn srcset_for(&self, pattern: &str) -> Option<&str> {
        self.get(pattern)?.srcset.as_deref()
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Exported runtime data: the layouts map plus the pixel configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutsMapExport {
    /// Pattern table
    pub layouts: LayoutsMap,
    /// Breakpoint pixels and maximum layout width
    pub config: PixelConfig,
}

impl LayoutsMapExport {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize layouts map")
    }

    /// Writes the JSON export, creating parent directories.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
        fs::write(path, self.to_json()?)
            .with_context(|| format!("Failed to write layouts map: {}", path.display()))
    }
}
