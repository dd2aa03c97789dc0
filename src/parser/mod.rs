//! Parsing for layout family files and hand-written JSON values.
//!
//! This module reads the per-family JSON files under `layouts/` and provides
//! the lenient serde helpers shared by the config and preset loaders.

pub mod pattern_json;
pub mod scalar;

// Re-export commonly used functions
pub use pattern_json::{parse_pattern_file, parse_pattern_str};
