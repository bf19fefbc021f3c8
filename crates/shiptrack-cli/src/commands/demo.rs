use std::process::ExitCode;

use shiptrack_core::{TrackingQuery, TrackingResolver};

use crate::error::CliError;
use crate::output;

use super::track;

/// Canonical fixture, a generic id, a repeat, a malformed id and a window
/// with no activity.
fn demo_queries() -> Vec<TrackingQuery> {
    vec![
        TrackingQuery::new("PKG123456789"),
        TrackingQuery::new("PKG987654321"),
        TrackingQuery::new("PKG123456789")
            .with_from_date("2025-08-01")
            .with_to_date("2025-08-31"),
        TrackingQuery::new("ABC123"),
        TrackingQuery::new("PKG999999999")
            .with_from_date("2024-01-01")
            .with_to_date("2024-01-31"),
    ]
}

pub async fn run(resolver: &TrackingResolver, pretty: bool) -> Result<ExitCode, CliError> {
    for query in demo_queries() {
        let lookup = track::execute(resolver, &query).await;
        output::render(&lookup.envelope, pretty)?;
    }
    Ok(ExitCode::SUCCESS)
}
