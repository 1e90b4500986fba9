//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod analyze;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "comply")]
#[command(about = "Compliance document submission and keyword analysis")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Submit documents for keyword analysis and show the findings
    Analyze {
        /// Documents to submit (pdf, xlsx, docx, txt)
        files: Vec<PathBuf>,

        /// Analysis endpoint URL.
        /// Can also be set via COMPLY_API_URL environment variable.
        #[arg(
            long,
            short,
            env = "COMPLY_API_URL",
            default_value = "http://127.0.0.1:3030/api/analyze"
        )]
        endpoint: String,

        /// Request timeout in milliseconds
        #[arg(long, default_value = "30000")]
        timeout_ms: u64,

        /// Print the normalized response as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Write results as CSV to a file or directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum result rows to display (0 = unlimited)
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },

    /// Start the gateway server that relays requests to the analyzer
    Serve {
        /// Address to bind to: PORT, HOST, or HOST:PORT (default: 127.0.0.1:3030)
        #[arg(default_value = "127.0.0.1:3030")]
        bind: String,

        /// Analyzer base URL (overrides API_URL / PYTHON_API_URL)
        #[arg(long)]
        analyzer_url: Option<String>,
    },
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            files,
            endpoint,
            timeout_ms,
            json,
            output,
            limit,
        } => {
            analyze::cmd_analyze(
                &files,
                &endpoint,
                timeout_ms,
                json,
                output.as_deref(),
                limit,
            )
            .await
        }
        Commands::Serve { bind, analyzer_url } => {
            serve::cmd_serve(&bind, analyzer_url.as_deref()).await
        }
    }
}
