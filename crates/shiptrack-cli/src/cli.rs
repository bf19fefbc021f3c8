//! CLI argument definitions for shiptrack.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `track` | Look up one tracking id, optionally within a date window |
//! | `now` | Print the current local date and time |
//! | `demo` | Run the canned demonstration queries |
//! | `interactive` | Read tracking ids from stdin until `quit` |
//!
//! # Global Options
//!
//! | Option | Env | Default | Description |
//! |--------|-----|---------|-------------|
//! | `--simulated` | `USE_SIMULATED_API` | `true` | Use the in-memory source |
//! | `--base-url` | `SHIPMENT_API_BASE_URL` | demo domain | Remote lookup service |
//! | `--api-key` | `SHIPMENT_API_KEY` | none | Bearer credential |
//! | `--timeout-ms` | `SHIPMENT_API_TIMEOUT_MS` | `30000` | Remote wait bound |
//! | `--id-prefix` | - | `PKG` | Required tracking id prefix |
//! | `--verbose` | - | `false` | Debug logging on stderr |
//! | `--log-file` | - | none | Also append logs to a file |
//! | `--pretty` | - | `false` | Indented JSON output |
//!
//! # Examples
//!
//! ```bash
//! shiptrack track PKG123456789
//! shiptrack track PKG123456789 --from 2025-08-01 --to 2025-08-31 --pretty
//! USE_SIMULATED_API=false SHIPMENT_API_BASE_URL=https://tracker.example shiptrack track PKG987654321
//! ```

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};
use shiptrack_core::DEFAULT_BASE_URL;

/// Shipment tracking lookups against a simulated or remote source.
#[derive(Debug, Parser)]
#[command(
    name = "shiptrack",
    author,
    version,
    about = "Shipment tracking lookups against a simulated or remote source",
    long_about = "shiptrack validates a tracking id, resolves it against exactly one \
tracking source and prints a normalized shipment record as JSON.\n\
\n\
  • Simulated source with deterministic fixtures (default)\n\
  • Remote lookup service with optional bearer authentication\n\
  • Personal data is always redacted\n\
\n\
Use 'shiptrack <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Use the simulated source instead of the remote service.
    #[arg(
        long,
        global = true,
        env = "USE_SIMULATED_API",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub simulated: bool,

    /// Base URL of the remote lookup service.
    #[arg(long, global = true, env = "SHIPMENT_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Bearer credential for the remote service.
    #[arg(long, global = true, env = "SHIPMENT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Upper bound on a remote lookup, in milliseconds.
    #[arg(long, global = true, env = "SHIPMENT_API_TIMEOUT_MS", default_value_t = 30_000)]
    pub timeout_ms: u64,

    /// Prefix every tracking id must start with.
    #[arg(long, global = true, default_value = "PKG")]
    pub id_prefix: String,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Append log output to this file as well.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up a tracking id.
    Track(TrackArgs),
    /// Print the current local date and time.
    Now,
    /// Run the demonstration queries.
    Demo,
    /// Read `<ID> [FROM] [TO]` lines from stdin until quit/exit/bye/q.
    Interactive,
}

#[derive(Debug, Args)]
pub struct TrackArgs {
    /// Tracking id, e.g. PKG123456789.
    pub tracking_id: String,

    /// First day of the status window (YYYY-MM-DD, inclusive).
    #[arg(long)]
    pub from: Option<String>,

    /// Last day of the status window (YYYY-MM-DD, inclusive).
    #[arg(long)]
    pub to: Option<String>,
}
