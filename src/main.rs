//! laybuild - Layout build system for the `<lay-out>` element
//!
//! Compiles layout pattern families and per-breakpoint selections into CSS,
//! validates presets, and computes responsive-image `sizes` values.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use laybuild::cli::{
    BuildArgs, CliResult, LayoutsMapArgs, PresetArgs, SizesArgs, SrcsetsArgs,
};
use laybuild::constants::APP_NAME;

/// laybuild - Layout build system for the <lay-out> element
#[derive(Parser, Debug)]
#[command(name = APP_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the layout stylesheet
    Build(BuildArgs),
    /// Generate a srcset string from breakpoint layouts
    Srcsets(SrcsetsArgs),
    /// Compute a responsive-image sizes value from a srcset string
    Sizes(SizesArgs),
    /// Validate or render presets
    Preset(PresetArgs),
    /// Export pattern srcsets and breakpoint pixels as JSON
    LayoutsMap(LayoutsMapArgs),
}

impl Commands {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Build(args) => args.execute(),
            Self::Srcsets(args) => args.execute(),
            Self::Sizes(args) => args.execute(),
            Self::Preset(args) => args.execute(),
            Self::LayoutsMap(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so stdout stays machine-readable
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
