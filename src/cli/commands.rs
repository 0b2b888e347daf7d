//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Zendesk Sell connector CLI
#[derive(Parser, Debug)]
#[command(name = "tap-zendesk-sell")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Test connection to the Sell API
    Check {
        /// Inline config JSON
        #[arg(long)]
        config_json: Option<String>,
    },

    /// Discover custom fields and print the merged JSON schema
    Discover {
        /// Inline config JSON
        #[arg(long)]
        config_json: Option<String>,

        /// Resource types to query (comma-separated, empty = all)
        #[arg(long)]
        resources: Option<String>,
    },
}
