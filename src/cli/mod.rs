//! CLI command handlers for laybuild.
//!
//! This module provides headless, scriptable access to the layout build
//! system for build scripts and CI.

pub mod build;
pub mod common;
pub mod layouts_map;
pub mod preset;
pub mod sizes;
pub mod srcsets;

// Re-export types used by main.rs and tests
pub use build::BuildArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use layouts_map::LayoutsMapArgs;
pub use preset::PresetArgs;
pub use sizes::SizesArgs;
pub use srcsets::SrcsetsArgs;
