//! Layout CSS builder.
//!
//! This module drives a complete build: load `layout.config`, load every
//! family file, prepend the configured core/common CSS, resolve each
//! breakpoint's layout references, and write the grouped CSS.
//!
//! # Example
//!
//! ```no_run
//! use laybuild::builder::{BuildPaths, LayoutBuilder};
//! use std::path::Path;
//!
//! let paths = BuildPaths::from_config(Path::new("layout.config"));
//! let result = LayoutBuilder::new(paths).build()?;
//! println!("{} bytes of CSS", result.css.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

// Allow format! appended to String - more readable for CSS assembly
#![allow(clippy::format_push_string)]

pub mod resolver;

pub use resolver::{rewrite_selector, BreakpointResolver, ResolvedVariant, RuleGenerator};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::LayoutConfig;
use crate::constants::{CORE_CSS_DIR, DEFAULT_OUTPUT_FILE, LAYOUTS_DIR};
use crate::css::RuleAccumulator;
use crate::registry::PatternRegistry;

/// File locations for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPaths {
    /// `layout.config` path
    pub config: PathBuf,
    /// Directory holding the family JSON files
    pub layouts_dir: PathBuf,
    /// CSS output path
    pub output: PathBuf,
}

impl BuildPaths {
    /// Default paths for a config file: `<config dir>/layouts` and
    /// `dist/layout.css`.
    pub fn from_config(config: &Path) -> Self {
        Self {
            config: config.to_path_buf(),
            layouts_dir: config_dir(config).join(LAYOUTS_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }

    /// Overrides the layouts directory.
    #[must_use]
    pub fn with_layouts_dir(mut self, layouts_dir: impl Into<PathBuf>) -> Self {
        self.layouts_dir = layouts_dir.into();
        self
    }

    /// Overrides the output path.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Directory core and common CSS files are read from.
    pub fn core_dir(&self) -> PathBuf {
        config_dir(&self.config).join(CORE_CSS_DIR)
    }
}

fn config_dir(config: &Path) -> &Path {
    config.parent().unwrap_or_else(|| Path::new(""))
}

/// Outcome of a build.
#[derive(Debug, Clone)]
pub struct BuildResult {
    /// Generated stylesheet
    pub css: String,
    /// Families that were loaded
    pub registry: PatternRegistry,
    /// Parsed configuration
    pub config: LayoutConfig,
    /// Where the stylesheet was (or would be) written
    pub output: PathBuf,
}

/// Builds the layout stylesheet.
///
/// The builder owns the rule accumulator for its builds; every call to
/// [`LayoutBuilder::generate`] or [`LayoutBuilder::build`] starts from an
/// empty accumulator.
#[derive(Debug)]
pub struct LayoutBuilder {
    paths: BuildPaths,
    rules: RuleAccumulator,
}

impl LayoutBuilder {
    /// Creates a builder for the given paths.
    pub fn new(paths: BuildPaths) -> Self {
        Self {
            paths,
            rules: RuleAccumulator::new(),
        }
    }

    /// Build paths.
    pub fn paths(&self) -> &BuildPaths {
        &self.paths
    }

    /// Rules accumulated by the last build.
    pub fn rules(&self) -> &RuleAccumulator {
        &self.rules
    }

    /// Loads `layout.config`.
    pub fn load_config(&self) -> Result<LayoutConfig> {
        let config = LayoutConfig::load(&self.paths.config).context("Failed to load config")?;
        tracing::info!("✓ Loaded {}", self.paths.config.display());
        Ok(config)
    }

    /// Loads every family file.
    pub fn load_registry(&self) -> Result<PatternRegistry> {
        PatternRegistry::load_dir(&self.paths.layouts_dir)
    }

    /// Concatenates `<core dir>/<name>.css` files, each followed by a blank line.
    ///
    /// Missing or unreadable files are logged and skipped.
    pub fn load_css_files(&self, names: &[String]) -> String {
        let core_dir = self.paths.core_dir();
        let mut css = String::new();

        for name in names {
            let path = core_dir.join(format!("{name}.css"));
            match fs::read_to_string(&path) {
                Ok(content) => {
                    css.push_str(&content);
                    css.push_str("\n\n");
                    tracing::info!("✓ Loaded {name}.css");
                }
                Err(e) => tracing::warn!("⚠ CSS file not loaded: {} ({e})", path.display()),
            }
        }

        css
    }

    /// Resolves every breakpoint into the accumulator, replacing its contents.
    pub fn process_breakpoints(&mut self, config: &LayoutConfig, registry: &PatternRegistry) {
        self.rules = generate_layout_rules(config, registry);
    }

    /// Runs a build without writing the output file.
    pub fn generate(&mut self) -> Result<BuildResult> {
        let config = self.load_config()?;
        let registry = self.load_registry()?;

        let core_css = self.load_css_files(&config.core);
        let common_css = self.load_css_files(&config.common);

        self.process_breakpoints(&config, &registry);
        let css = assemble_css(&core_css, &common_css, &theme_css(&config), &self.rules);

        Ok(BuildResult {
            css,
            registry,
            config,
            output: self.paths.output.clone(),
        })
    }

    /// Runs a build and writes the stylesheet, creating parent directories.
    pub fn build(&mut self) -> Result<BuildResult> {
        let result = self.generate()?;

        if let Some(parent) = result.output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
        fs::write(&result.output, &result.css)
            .with_context(|| format!("Failed to write CSS: {}", result.output.display()))?;

        #[allow(clippy::cast_precision_loss)]
        let size_kb = result.css.len() as f64 / 1024.0;
        tracing::info!("✓ Generated: {} ({size_kb:.2} KB)", result.output.display());

        Ok(result)
    }
}

/// Resolves every configured breakpoint into a fresh accumulator.
///
/// Breakpoints without bounds or with an unknown query type produce no rules.
pub fn generate_layout_rules(config: &LayoutConfig, registry: &PatternRegistry) -> RuleAccumulator {
    let resolver = BreakpointResolver::new(registry);
    let mut rules = RuleAccumulator::new();

    for (name, breakpoint) in &config.breakpoints {
        let Some(media_query) = breakpoint.media_query() else {
            if breakpoint.query_type.at_rule().is_none() {
                tracing::warn!("⚠ Breakpoint '{name}' has an unknown query type; skipped");
            } else {
                tracing::debug!("Breakpoint '{name}' has no bounds; skipped");
            }
            continue;
        };

        let variants = resolver.expand(&breakpoint.layouts);
        RuleGenerator {
            element: &config.element,
            breakpoint: name,
            media_query: &media_query,
        }
        .emit(&variants, &mut rules);
    }

    rules
}

/// Renders the theme blocks.
pub fn theme_css(config: &LayoutConfig) -> String {
    let mut css = String::new();
    for (name, theme) in &config.themes {
        css.push_str(&format!("{}[theme=\"{name}\"] {{\n", config.element));
        css.push_str(&format!("  --layout-bg: {};\n", theme.bg));
        css.push_str(&format!("  --layout-c: {};\n", theme.color));
        css.push_str("}\n\n");
    }
    css
}

fn assemble_css(core: &str, common: &str, themes: &str, rules: &RuleAccumulator) -> String {
    let mut css = String::with_capacity(core.len() + common.len() + themes.len());
    css.push_str(core);
    css.push_str(common);
    if !themes.is_empty() {
        css.push_str(&format!("/* Themes */\n{themes}\n"));
    }
    css.push_str(&rules.to_css());
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_paths_defaults() {
        let paths = BuildPaths::from_config(Path::new("site/layout.config"));
        assert_eq!(paths.layouts_dir, PathBuf::from("site/layouts"));
        assert_eq!(paths.core_dir(), PathBuf::from("site/core"));
        assert_eq!(paths.output, PathBuf::from("dist/layout.css"));

        let paths = BuildPaths::from_config(Path::new("layout.config"))
            .with_layouts_dir("patterns")
            .with_output("out.css");
        assert_eq!(paths.layouts_dir, PathBuf::from("patterns"));
        assert_eq!(paths.core_dir(), PathBuf::from("core"));
        assert_eq!(paths.output, PathBuf::from("out.css"));
    }

    #[test]
    fn test_theme_css() {
        let config: LayoutConfig =
            r##"{ "themes": { "dark": { "bg": "#111", "color": "#eee" } } }"##.parse().unwrap();
        assert_eq!(
            theme_css(&config),
            "lay-out[theme=\"dark\"] {\n  --layout-bg: #111;\n  --layout-c: #eee;\n}\n\n"
        );
        assert_eq!(theme_css(&LayoutConfig::default()), "");
    }

    #[test]
    fn test_assemble_css_order() {
        let mut rules = RuleAccumulator::new();
        rules.add_rule("@media (min-width: 1px)", "a", [("--x", "1")]);

        let css = assemble_css("CORE\n\n", "COMMON\n\n", "THEME\n\n", &rules);
        assert_eq!(
            css,
            "CORE\n\nCOMMON\n\n/* Themes */\nTHEME\n\n\n\n@media (min-width: 1px) {\na {\n  --x: 1;\n}\n}\n"
        );

        let css = assemble_css("", "", "", &RuleAccumulator::new());
        assert_eq!(css, "");
    }
}
