//! Layouts-map command: export the pattern table for runtime srcset lookups.

use crate::cli::common::{load_layout_context, CliError, CliResult};
use crate::config::PixelConfig;
use crate::constants::DEFAULT_CONFIG_FILE;
use crate::srcset::{LayoutsMap, LayoutsMapExport};
use clap::Args;
use std::path::PathBuf;

/// Export pattern srcsets and breakpoint pixels as JSON
#[derive(Debug, Clone, Args)]
pub struct LayoutsMapArgs {
    /// Path to layout.config
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Directory with layout family files (default: <config dir>/layouts)
    #[arg(short, long, value_name = "DIR")]
    pub layouts: Option<PathBuf>,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl LayoutsMapArgs {
    /// Execute the layouts-map command
    pub fn execute(&self) -> CliResult<()> {
        let (config, registry) = load_layout_context(&self.config, self.layouts.as_deref())?;

        let export = LayoutsMapExport {
            layouts: LayoutsMap::from_registry(&registry),
            config: PixelConfig::from_config(&config),
        };

        match &self.output {
            Some(path) => {
                export
                    .write(path)
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                println!(
                    "✓ Wrote {} layouts to {}",
                    export.layouts.len(),
                    path.display()
                );
            }
            None => {
                let json = export
                    .to_json()
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                println!("{json}");
            }
        }

        Ok(())
    }
}
