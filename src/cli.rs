use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "family-title-fixer")]
#[command(about = "Pair ISO and DIN references in product family titles", long_about = None)]
pub struct Cli {
    /// Path to the JSON configuration file
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// Apply the proposed changes without asking
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Show proposed changes without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}
