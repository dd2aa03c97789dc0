//! Build command: compile `layout.config` and the family files into CSS.

use crate::builder::{BuildPaths, LayoutBuilder};
use crate::cli::common::{CliError, CliResult};
use crate::constants::DEFAULT_CONFIG_FILE;
use clap::Args;
use std::path::PathBuf;

/// Generate the layout stylesheet
#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    /// Path to layout.config
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Directory with layout family files (default: <config dir>/layouts)
    #[arg(short, long, value_name = "DIR")]
    pub layouts: Option<PathBuf>,

    /// Output CSS path (default: dist/layout.css)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Accepted for compatibility; minification is left to downstream tooling
    #[arg(long)]
    pub minify: bool,
}

impl BuildArgs {
    /// Execute the build command
    pub fn execute(&self) -> CliResult<()> {
        let mut paths = BuildPaths::from_config(&self.config);
        if let Some(layouts) = &self.layouts {
            paths = paths.with_layouts_dir(layouts);
        }
        if let Some(output) = &self.output {
            paths = paths.with_output(output);
        }

        if self.minify {
            tracing::info!("Minification is delegated to downstream tooling; writing unminified CSS");
        }

        let result = LayoutBuilder::new(paths)
            .build()
            .map_err(|e| CliError::io(format!("Build failed: {e:#}")))?;

        println!(
            "✓ Build complete: {} ({} families, {} bytes)",
            result.output.display(),
            result.registry.len(),
            result.css.len()
        );

        Ok(())
    }
}
