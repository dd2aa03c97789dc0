//! laybuild Library
//!
//! This library provides the layout build system for the `<lay-out>` custom
//! element: loading pattern families, compiling per-breakpoint CSS, validating
//! presets, and computing responsive-image `sizes` values.

// Module declarations
pub mod builder;
pub mod cli;
pub mod config;
pub mod constants;
pub mod css;
pub mod models;
pub mod parser;
pub mod preset;
pub mod registry;
pub mod srcset;
