//! Sizes command: compute the `sizes` value for one child.

use crate::cli::common::{CliError, CliResult};
use crate::config::LayoutConfig;
use crate::srcset::{get_sizes_for_child, SizesOptions};
use clap::Args;
use std::path::PathBuf;

/// Compute a responsive-image sizes value from a srcset string
#[derive(Debug, Clone, Args)]
pub struct SizesArgs {
    /// Srcset string (e.g., "default:100vw;720:66.67%,33.33%")
    #[arg(short, long, value_name = "SRCSETS")]
    pub srcsets: String,

    /// Child index (0-based)
    #[arg(long, value_name = "N")]
    pub child: usize,

    /// Maximum layout width (default: from --config, else 1024px)
    #[arg(short, long, value_name = "LENGTH")]
    pub max_layout_width: Option<String>,

    /// Path to layout.config to read the maximum layout width from
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl SizesArgs {
    /// Execute the sizes command
    pub fn execute(&self) -> CliResult<()> {
        let options = match (&self.max_layout_width, &self.config) {
            (Some(max_layout_width), _) => SizesOptions {
                max_layout_width: max_layout_width.clone(),
            },
            (None, Some(path)) => {
                let config =
                    LayoutConfig::load(path).map_err(|e| CliError::io(format!("{e:#}")))?;
                SizesOptions::from_config(&config)
            }
            (None, None) => SizesOptions::default(),
        };

        println!("{}", get_sizes_for_child(&self.srcsets, self.child, &options));
        Ok(())
    }
}
