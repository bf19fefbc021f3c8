use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::CliError;

const QUIET_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "warn,shiptrack=debug,shiptrack_core=debug";

/// Installs the global subscriber. `RUST_LOG` overrides the level chosen
/// from `verbose`. Logs never go to stdout.
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<(), CliError> {
    let file_layer = match log_file {
        Some(path) => Some(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(open_log_file(path)?)),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose),
        )
        .with(file_layer)
        .try_init()
        .map_err(|error| CliError::Logging(error.to_string()))
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

const fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        QUIET_FILTER
    }
}

fn open_log_file(path: &Path) -> Result<File, CliError> {
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}
