use std::process::ExitCode;

use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
struct NowData {
    current_date_and_time: String,
}

pub fn run(pretty: bool) -> Result<ExitCode, CliError> {
    // Falls back to UTC when the local offset cannot be determined soundly.
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let data = NowData {
        current_date_and_time: now.format(&Rfc3339)?,
    };
    output::render(&data, pretty)?;
    Ok(ExitCode::SUCCESS)
}
