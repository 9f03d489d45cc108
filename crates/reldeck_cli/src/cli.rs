//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand, ValueEnum};

/// Terminal client for release analytics chat
#[derive(Parser)]
#[command(name = "reldeck", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the interactive chat TUI
    Tui {
        /// Backend base URL. Uses RELDECK_API_URL env if not set.
        #[arg(long)]
        api_url: Option<String>,
        /// Bearer token. Uses RELDECK_API_TOKEN env if not set.
        #[arg(long)]
        token: Option<String>,
    },
    /// Send one query and print the rendered reply
    Ask {
        /// The query to send
        query: String,
        /// Backend base URL. Uses RELDECK_API_URL env if not set.
        #[arg(long)]
        api_url: Option<String>,
        /// Bearer token. Uses RELDECK_API_TOKEN env if not set.
        #[arg(long)]
        token: Option<String>,
        /// Print the raw result string instead of rendering blocks
        #[arg(long)]
        raw: bool,
    },
    /// Render a saved reply (JSON block sequence) from a file
    Render {
        /// Path to a file holding the reply JSON
        file: String,
        /// Sort the first table by this column index (0-based)
        #[arg(long)]
        sort_by: Option<usize>,
        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,
    },
}
