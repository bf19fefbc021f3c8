use std::process::ExitCode;

use shiptrack_core::{TrackingQuery, TrackingResolver};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::error::CliError;
use crate::output;

use super::track;

const PROMPT: &str = "tracking id [from] [to] (q to quit)> ";
const USAGE: &str = "usage: <TRACKING_ID> [FROM YYYY-MM-DD] [TO YYYY-MM-DD]";

#[derive(Debug, PartialEq, Eq)]
enum Line {
    Blank,
    Quit,
    Query(TrackingQuery),
    Invalid,
}

fn parse_line(line: &str) -> Line {
    let mut parts = line.split_whitespace();
    let Some(first) = parts.next() else {
        return Line::Blank;
    };
    if matches!(
        first.to_ascii_lowercase().as_str(),
        "quit" | "exit" | "bye" | "q"
    ) {
        return Line::Quit;
    }

    let mut query = TrackingQuery::new(first);
    query.from_date = parts.next().map(str::to_owned);
    query.to_date = parts.next().map(str::to_owned);
    if parts.next().is_some() {
        return Line::Invalid;
    }
    Line::Query(query)
}

/// Prompts go to stderr so stdout carries only envelopes.
pub async fn run(resolver: &TrackingResolver, pretty: bool) -> Result<ExitCode, CliError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stderr = tokio::io::stderr();

    loop {
        stderr.write_all(PROMPT.as_bytes()).await?;
        stderr.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_line(&line) {
            Line::Blank => continue,
            Line::Quit => break,
            Line::Invalid => {
                stderr.write_all(format!("{USAGE}\n").as_bytes()).await?;
            }
            Line::Query(query) => {
                let lookup = track::execute(resolver, &query).await;
                output::render(&lookup.envelope, pretty)?;
            }
        }
    }

    tracing::debug!("interactive session ended");
    Ok(ExitCode::SUCCESS)
}
