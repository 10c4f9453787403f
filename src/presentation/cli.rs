//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - A single positional selector: `all` or comma-separated controller suffixes
//! - Output flags (--json, --color, --verbose) shape narration only, never the deploy itself

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// rocdeploy - copy readout sources to Readout Controllers and rebuild them
#[derive(Parser, Debug)]
#[command(name = "rocdeploy")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:\n  rocdeploy all\n  rocdeploy 6,8,10")]
pub struct Cli {
    /// Controllers to deploy: `all`, or suffixes such as `6,8` (for ROC6, ROC8)
    #[arg(required_unless_present = "list")]
    pub selector: Option<String>,

    /// Print every command without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Stop at the first failed copy or build
    #[arg(long)]
    pub fail_fast: bool,

    /// List the controller inventory and exit
    #[arg(long, conflicts_with_all = ["dry_run", "fail_fast"])]
    pub list: bool,

    /// Output NDJSON events instead of text
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
