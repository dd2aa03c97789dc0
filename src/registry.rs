//! In-memory registry of layout pattern families.
//!
//! All family files are loaded eagerly before any CSS is generated; the
//! registry is read-only afterwards.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{LayoutPattern, PatternFamily};
use crate::parser::parse_pattern_file;

/// Layout families keyed by file stem, in load order.
#[derive(Debug, Clone, Default)]
pub struct PatternRegistry {
    families: IndexMap<String, PatternFamily>,
}

impl PatternRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every `*.json` family file in `dir`, sorted by file name.
    ///
    /// Files that cannot be read or parsed are logged and skipped. An
    /// unreadable directory is an error.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read layouts directory: {}", dir.display()))?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("json")
            })
            .collect();
        files.sort();

        let mut registry = Self::new();
        for path in files {
            match parse_pattern_file(&path) {
                Ok(family) => {
                    tracing::info!(
                        "✓ Loaded {} ({} layouts)",
                        path.file_name().unwrap_or_default().to_string_lossy(),
                        family.patterns.len()
                    );
                    registry.insert(family);
                }
                Err(e) => {
                    tracing::warn!("⚠ Failed to load {}: {e:#}", path.display());
                }
            }
        }

        Ok(registry)
    }

    /// Adds a family, replacing any family with the same key.
    pub fn insert(&mut self, family: PatternFamily) {
        self.families.insert(family.key.clone(), family);
    }

    /// Looks up a family by key.
    pub fn find(&self, family: &str) -> Option<&PatternFamily> {
        self.families.get(family)
    }

    /// Looks up a variant by bare or composite id.
    pub fn find_variant(&self, family: &str, variant_id: &str) -> Option<&LayoutPattern> {
        self.find(family)?.find_variant(variant_id)
    }

    /// Iterates over families in load order.
    pub fn families(&self) -> impl Iterator<Item = &PatternFamily> {
        self.families.values()
    }

    /// Iterates over every pattern of every family.
    pub fn patterns(&self) -> impl Iterator<Item = &LayoutPattern> {
        self.families.values().flat_map(|family| family.patterns.iter())
    }

    /// Number of families.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Returns true if no family is loaded.
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}
