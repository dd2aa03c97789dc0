//! Application-wide constants.
//!
//! Names and fallback values shared by the CSS builder, the preset model, and
//! the srcset calculator.

/// The display name of the application.
pub const APP_NAME: &str = "laybuild";

/// Custom element tag used when `layout.config` does not name one.
pub const DEFAULT_ELEMENT: &str = "lay-out";

/// Maximum layout width used for constrained sizes when nothing is configured.
pub const DEFAULT_MAX_LAYOUT_WIDTH: &str = "1024px";

/// Width every child gets below the first breakpoint.
pub const DEFAULT_SRCSET_WIDTH: &str = "100vw";

/// Pixel size of one `rem`.
pub const REM_BASE_PX: f64 = 16.0;

/// Family whose container rule also carries the `--_ci` items count.
pub const ITEMS_COUNT_FAMILY: &str = "columns";

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "layout.config";

/// Default output path for the generated stylesheet.
pub const DEFAULT_OUTPUT_FILE: &str = "dist/layout.css";

/// Directory (next to the config) holding the pattern family files.
pub const LAYOUTS_DIR: &str = "layouts";

/// Directory (next to the config) holding core/common stylesheet partials.
pub const CORE_CSS_DIR: &str = "core";
