//! Preset commands: validate a preset file or render it as markup.

use crate::cli::common::{load_layout_context, CliError, CliResult};
use crate::config::PixelConfig;
use crate::preset::{
    create_preset, preset_to_html, preset_to_html_with_children, read_preset_document,
    validate_preset,
};
use crate::srcset::{build_srcsets, LayoutsMap};
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Preset validation and rendering commands
#[derive(Args, Debug)]
pub struct PresetArgs {
    #[command(subcommand)]
    command: PresetCommand,
}

#[derive(Subcommand, Debug)]
enum PresetCommand {
    /// Check a preset file for errors and warnings
    Validate(PresetValidateArgs),
    /// Render a preset as a <lay-out> element
    Html(PresetHtmlArgs),
}

/// Check a preset file for errors and warnings
#[derive(Args, Debug)]
pub struct PresetValidateArgs {
    /// Preset file (JSON or TOML)
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    strict: bool,
}

/// Render a preset as a <lay-out> element
#[derive(Args, Debug)]
pub struct PresetHtmlArgs {
    /// Preset file (JSON or TOML)
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Inner HTML; renders the closing tag as well
    #[arg(long, value_name = "HTML")]
    children: Option<String>,

    /// Path to layout.config; adds a generated srcsets attribute
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory with layout family files (default: <config dir>/layouts)
    #[arg(short, long, value_name = "DIR", requires = "config")]
    layouts: Option<PathBuf>,
}

impl PresetArgs {
    /// Execute preset subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            PresetCommand::Validate(args) => args.execute(),
            PresetCommand::Html(args) => args.execute(),
        }
    }
}

impl PresetValidateArgs {
    /// Execute validate command
    pub fn execute(&self) -> CliResult<()> {
        let document =
            read_preset_document(&self.file).map_err(|e| CliError::io(format!("{e:#}")))?;
        let report = validate_preset(&document);

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&report)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            if report.is_valid() {
                println!("✓ Preset is valid");
            }
            print!("{}", report.format_message());
        }

        if !report.is_valid() {
            return Err(CliError::validation("Preset validation failed"));
        }
        if self.strict && !report.warnings.is_empty() {
            return Err(CliError::validation("Warnings found in strict mode"));
        }

        Ok(())
    }
}

impl PresetHtmlArgs {
    /// Execute html command
    pub fn execute(&self) -> CliResult<()> {
        let document =
            read_preset_document(&self.file).map_err(|e| CliError::io(format!("{e:#}")))?;
        let preset =
            create_preset(&document).map_err(|e| CliError::validation(format!("{e:#}")))?;

        let srcsets = match &self.config {
            Some(config_path) => {
                let (config, registry) =
                    load_layout_context(config_path, self.layouts.as_deref())?;
                let srcsets = build_srcsets(
                    &preset.breakpoints,
                    &LayoutsMap::from_registry(&registry),
                    &PixelConfig::from_config(&config),
                );
                Some(srcsets.to_string())
            }
            None => None,
        };

        let html = match &self.children {
            Some(children) => {
                preset_to_html_with_children(&preset, children, srcsets.as_deref())
            }
            None => preset_to_html(&preset, srcsets.as_deref()),
        };
        println!("{html}");

        Ok(())
    }
}
