//! Command-line interface definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "deadlink",
    version,
    about = "Check whether dead urls are included in files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check files listed on stdin for dead urls
    Check {
        /// Configuration file path
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,

        /// Suppress log output
        #[arg(short, long, conflicts_with = "verbose")]
        quiet: bool,
    },

    /// Create a configuration file if it doesn't exist
    Init {
        /// Created configuration file path
        #[arg(short, long, default_value = ".deadlink.toml")]
        dest: PathBuf,
    },
}
