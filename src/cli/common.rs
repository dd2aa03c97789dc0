//! Shared CLI types: errors, exit codes, and config loading.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::LayoutConfig;
use crate::constants::LAYOUTS_DIR;
use crate::registry::PatternRegistry;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Input was read but is invalid (bad preset, warnings in strict mode)
    ValidationError = 1,
    /// Input could not be read, parsed, or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code category
    pub kind: ExitCode,
    /// User-facing message
    pub message: String,
}

impl CliError {
    /// An I/O or parse failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// A validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Loads `layout.config` and the family files next to it (or in `layouts`).
pub fn load_layout_context(
    config_path: &Path,
    layouts: Option<&Path>,
) -> CliResult<(LayoutConfig, PatternRegistry)> {
    let config = LayoutConfig::load(config_path).map_err(|e| CliError::io(format!("{e:#}")))?;

    let layouts_dir = layouts.map_or_else(
        || {
            config_path
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(LAYOUTS_DIR)
        },
        PathBuf::from,
    );
    let registry =
        PatternRegistry::load_dir(&layouts_dir).map_err(|e| CliError::io(format!("{e:#}")))?;

    Ok((config, registry))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("bad").exit_code(), 1);
        assert_eq!(CliError::io("missing").exit_code(), 2);
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::io("missing").to_string(), "missing");
    }
}
