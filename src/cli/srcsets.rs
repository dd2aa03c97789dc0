//! Srcsets command: generate the srcset string for a set of breakpoints.

use crate::cli::common::{load_layout_context, CliError, CliResult};
use crate::config::PixelConfig;
use crate::constants::DEFAULT_CONFIG_FILE;
use crate::preset::{create_preset, read_preset_document};
use crate::srcset::{build_srcsets, LayoutsMap};
use clap::Args;
use indexmap::IndexMap;
use std::path::PathBuf;

/// Generate a srcset string from breakpoint layouts
#[derive(Debug, Clone, Args)]
pub struct SrcsetsArgs {
    /// Path to layout.config
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Directory with layout family files (default: <config dir>/layouts)
    #[arg(short, long, value_name = "DIR")]
    pub layouts: Option<PathBuf>,

    /// Preset file (JSON or TOML) whose breakpoints are used
    #[arg(short, long, value_name = "FILE", conflicts_with = "breakpoints")]
    pub preset: Option<PathBuf>,

    /// Breakpoint layout, repeatable (e.g., md=columns(2))
    #[arg(
        short,
        long = "breakpoint",
        value_name = "NAME=PATTERN",
        value_parser = parse_breakpoint
    )]
    pub breakpoints: Vec<(String, String)>,
}

impl SrcsetsArgs {
    /// Execute the srcsets command
    pub fn execute(&self) -> CliResult<()> {
        let breakpoints = self.breakpoint_layouts()?;

        let (config, registry) = load_layout_context(&self.config, self.layouts.as_deref())?;
        let layouts = LayoutsMap::from_registry(&registry);
        let pixels = PixelConfig::from_config(&config);

        println!("{}", build_srcsets(&breakpoints, &layouts, &pixels));
        Ok(())
    }

    fn breakpoint_layouts(&self) -> CliResult<IndexMap<String, String>> {
        if let Some(path) = &self.preset {
            let document =
                read_preset_document(path).map_err(|e| CliError::io(format!("{e:#}")))?;
            let preset =
                create_preset(&document).map_err(|e| CliError::validation(format!("{e:#}")))?;
            return Ok(preset.breakpoints);
        }

        if self.breakpoints.is_empty() {
            return Err(CliError::validation(
                "Either --preset or at least one --breakpoint must be specified",
            ));
        }
        Ok(self.breakpoints.iter().cloned().collect())
    }
}

/// Parses a `name=pattern` argument.
fn parse_breakpoint(arg: &str) -> Result<(String, String), String> {
    let (name, pattern) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=PATTERN, got '{arg}'"))?;
    let (name, pattern) = (name.trim(), pattern.trim());
    if name.is_empty() || pattern.is_empty() {
        return Err(format!("expected NAME=PATTERN, got '{arg}'"));
    }
    Ok((name.to_string(), pattern.to_string()))
}
