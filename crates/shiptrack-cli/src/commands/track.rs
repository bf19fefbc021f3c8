use std::process::ExitCode;
use std::time::Instant;

use shiptrack_core::{TrackingErrorKind, TrackingQuery, TrackingResolver};

use crate::cli::TrackArgs;
use crate::error::CliError;
use crate::metadata::Metadata;
use crate::output::{self, Envelope};

pub async fn run(
    args: &TrackArgs,
    resolver: &TrackingResolver,
    pretty: bool,
) -> Result<ExitCode, CliError> {
    let mut query = TrackingQuery::new(args.tracking_id.as_str());
    query.from_date = args.from.clone();
    query.to_date = args.to.clone();

    let lookup = execute(resolver, &query).await;
    output::render(&lookup.envelope, pretty)?;
    Ok(ExitCode::from(lookup.exit_code))
}

/// A finished lookup, ready to print.
pub struct Lookup {
    pub envelope: Envelope,
    pub exit_code: u8,
}

pub async fn execute(resolver: &TrackingResolver, query: &TrackingQuery) -> Lookup {
    let started = Instant::now();
    let outcome = resolver.lookup_query(query).await;
    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    let meta = Metadata::new(resolver.backend(), latency_ms);

    let exit_code = match &outcome {
        Ok(result) => {
            tracing::info!(
                request_id = %meta.request_id,
                packages = result.len(),
                latency_ms,
                "lookup finished"
            );
            0
        }
        Err(error) => {
            tracing::info!(
                request_id = %meta.request_id,
                code = error.code(),
                latency_ms,
                "lookup failed"
            );
            if error.kind() == TrackingErrorKind::Validation {
                2
            } else {
                3
            }
        }
    };

    Lookup {
        envelope: Envelope::from_outcome(meta, query, outcome),
        exit_code,
    }
}
