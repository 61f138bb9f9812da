//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot verdicts
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Per-juror votes and the verdict banner
    Summary,
    /// JSON report
    Json,
}

/// CLI arguments for tribunal
#[derive(Parser, Debug)]
#[command(name = "tribunal")]
#[command(author, version, about = "Quorum-based trust verdicts for web content")]
#[command(long_about = r#"
Tribunal polls a bench of independent jurors about a piece of content,
tallies their votes under a quorum rule, and caches the verdict per
content fingerprint. Verified human feedback can trigger a re-trial and
a weighted-role downgrade of severity.

Configuration files are loaded from (in priority order):
1. --config <path>      Explicit config file
2. ./tribunal.toml      Project-level config
3. ~/.config/tribunal/config.toml   Global config

Example:
  tribunal serve
  tribunal judge article.txt
  cat article.txt | tribunal judge --output json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Also write logs to this file (plain text, no ANSI)
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the verdict / feedback / review HTTP API
    Serve {
        /// Bind address (overrides config)
        #[arg(long, value_name = "HOST")]
        host: Option<String>,

        /// Bind port (overrides config)
        #[arg(long, value_name = "PORT")]
        port: Option<u16>,

        /// Append trial audit records to this JSONL file
        #[arg(long, value_name = "PATH")]
        audit_log: Option<PathBuf>,
    },

    /// Judge a single file (or stdin) and print the verdict
    Judge {
        /// File to judge; reads stdin when omitted
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },
}
