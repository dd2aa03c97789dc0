//! Shared test fixtures for integration and E2E CLI tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Layout config exercising every breakpoint shape: unbounded, media, container,
/// and references with duplicates and unknown families.
pub const LAYOUT_CONFIG: &str = r##"{
  "element": "lay-out",
  "layoutContainer": {
    "maxLayoutWidth": { "value": "1024px", "cssProperty": "--layout-mw" },
    "widthTokens": {
      "md": { "value": "48rem", "cssProperty": "--layout-w-md" }
    }
  },
  "breakpoints": {
    "xs": { "type": "@media", "layouts": ["columns"] },
    "md": { "type": "@media", "min": "540px", "layouts": ["columns"] },
    "lg": {
      "type": "@media",
      "min": "720px",
      "layouts": ["columns", { "grid": ["3a", "grid(3c)"] }, { "grid": ["3c"] }]
    },
    "xl": {
      "type": "@container",
      "min": "1024px",
      "max": "1439px",
      "layouts": [{ "grid": ["3c", "missing"] }, "grid", "bento"]
    }
  },
  "core": ["base", "missing"],
  "common": ["animations"],
  "themes": {
    "primary": { "bg": "#000", "color": "#fff" }
  }
}"##;

/// Columns family; the `columns` prefix also emits the item count.
pub const COLUMNS_JSON: &str = r#"{
  "name": "Columns",
  "prefix": "columns",
  "layouts": [
    { "id": "1", "columns": "1fr", "items": 1, "srcset": "100%" },
    { "id": "2", "columns": "repeat(2, 1fr)", "items": 2, "srcset": "50%", "repeatable": true }
  ]
}"#;

/// Grid family with a variant carrying child rules.
pub const GRID_JSON: &str = r#"{
  "name": "Grid",
  "prefix": "grid",
  "layouts": [
    { "id": "3a", "columns": "1fr 1fr 1fr", "items": 3, "srcset": "33.33%" },
    {
      "id": "3c",
      "columns": "2fr 1fr",
      "rows": "auto auto",
      "items": 3,
      "srcset": "66.67%,33.33%,33.33%",
      "rules": [
        { "selector": "*:nth-of-type(1)", "properties": { "--layout-ga": "1 / 1 / 3 / 2" } },
        { "selector": "&", "properties": { "--layout-gap": "2" } }
      ]
    }
  ]
}"#;

/// Core stylesheet contents.
pub const BASE_CSS: &str = "lay-out { display: grid; }";

/// Common stylesheet contents.
pub const ANIMATIONS_CSS: &str = "@keyframes fade { from { opacity: 0; } }";

/// A complete project tree in a temporary directory.
pub struct LayoutProject {
    /// Owns the directory; dropped with the project
    pub dir: TempDir,
}

impl LayoutProject {
    /// Project root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Path to `layout.config`.
    pub fn config_path(&self) -> PathBuf {
        self.root().join("layout.config")
    }

    /// Path to the family directory.
    pub fn layouts_dir(&self) -> PathBuf {
        self.root().join("layouts")
    }

    /// Path the stylesheet is written to.
    pub fn output_path(&self) -> PathBuf {
        self.root().join("dist").join("layout.css")
    }

    /// Writes a file relative to the project root.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }
}

/// Creates a project with the default config, both families, and core CSS.
pub fn create_layout_project() -> LayoutProject {
    create_layout_project_with_config(LAYOUT_CONFIG)
}

/// Creates a project with a custom `layout.config`.
pub fn create_layout_project_with_config(config: &str) -> LayoutProject {
    let project = LayoutProject {
        dir: TempDir::new().expect("Failed to create temp dir"),
    };

    project.write("layout.config", config);
    project.write("layouts/columns.json", COLUMNS_JSON);
    project.write("layouts/grid.json", GRID_JSON);
    project.write("core/base.css", BASE_CSS);
    project.write("core/animations.css", ANIMATIONS_CSS);

    project
}

/// A valid preset document, as JSON.
pub const PRESET_JSON: &str = r#"{
  "id": "feature",
  "name": "Feature",
  "breakpoints": { "md": "columns(2)", "lg": "grid(3c)" },
  "spaceTop": 2,
  "width": "md",
  "theme": "primary"
}"#;

/// The same preset, as TOML.
pub const PRESET_TOML: &str = r#"
id = "feature"
name = "Feature"
spaceTop = 2
width = "md"
theme = "primary"

[breakpoints]
md = "columns(2)"
lg = "grid(3c)"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_project() {
        let project = create_layout_project();
        assert!(project.config_path().exists());
        assert!(project.layouts_dir().join("grid.json").exists());
        assert!(!project.output_path().exists());
    }
}
