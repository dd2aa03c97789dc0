//! Data models for layout patterns, layout references, and presets.
//!
//! This module contains the core data structures shared by the registry,
//! builder, and srcset calculator. Models are independent of file I/O.

pub mod pattern;
pub mod preset;
pub mod reference;

// Re-export all model types
pub use pattern::{
    composite_id, extract_layout_id, is_layout_pattern, parse_layout_pattern, LayoutPattern,
    ParsedPattern, PatternFamily, PatternRule,
};
pub use preset::{LayoutPreset, OverflowMode, WidthToken};
pub use reference::{deserialize_layout_references, LayoutReference};
