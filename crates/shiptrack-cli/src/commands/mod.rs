mod demo;
mod interactive;
mod now;
mod track;

use std::process::ExitCode;
use std::time::Duration;

use shiptrack_core::{IdentifierRule, TrackingConfig, TrackingResolver};

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    match &cli.command {
        Command::Now => now::run(cli.pretty),
        Command::Track(args) => track::run(args, &build_resolver(cli)?, cli.pretty).await,
        Command::Demo => demo::run(&build_resolver(cli)?, cli.pretty).await,
        Command::Interactive => interactive::run(&build_resolver(cli)?, cli.pretty).await,
    }
}

fn build_resolver(cli: &Cli) -> Result<TrackingResolver, CliError> {
    Ok(TrackingResolver::from_config(&tracking_config(cli)?)?)
}

fn tracking_config(cli: &Cli) -> Result<TrackingConfig, CliError> {
    let identifier_rule = IdentifierRule::default().with_prefix(cli.id_prefix.as_str())?;
    let config = if cli.simulated {
        TrackingConfig::simulated()
    } else {
        TrackingConfig::remote(cli.base_url.as_str())
    };

    Ok(config
        .with_credential(cli.api_key.clone())
        .with_timeout(Duration::from_millis(cli.timeout_ms))
        .with_identifier_rule(identifier_rule))
}
