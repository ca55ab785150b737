//! CLI Argument Parsing
//!
//! Running with no arguments performs the full guide. All flags are optional.

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CargoDham MCP Server - Railway deployment guide
#[derive(Parser, Debug)]
#[command(name = "cargodham-deploy")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Writes RAILWAY_DEPLOYMENT_SUMMARY.md when the guide completes.")]
pub struct Cli {
    /// Directory to write RAILWAY_DEPLOYMENT_SUMMARY.md into
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Never launch a browser (questions are still asked)
    #[arg(long)]
    pub no_browser: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default tracing filter for the verbosity level.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
