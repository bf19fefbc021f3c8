use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::format_query_date;
use crate::http_client::{HttpAuth, HttpClient, HttpErrorKind, HttpRequest, ReqwestHttpClient};
use crate::source::{Backend, SourceFuture, TrackingSource};
use crate::{Package, TrackingError, ValidatedQuery, ValidationError};

const LOOKUP_PATH: &str = "/api/v2/package/lookup";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_ERROR_BODY_CHARS: usize = 512;

#[derive(Debug, Deserialize)]
struct LookupResponse {
    packages: Vec<Package>,
}

/// Single-attempt client for the remote package lookup service.
///
/// Sends one GET per query and never retries. The whole exchange, body
/// included, is bounded by the configured timeout.
#[derive(Clone)]
pub struct RemoteSource {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    auth: HttpAuth,
    timeout: Duration,
}

impl RemoteSource {
    pub fn new(base_url: impl AsRef<str>, credential: Option<&str>) -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new()), base_url, credential)
    }

    pub fn with_http_client(
        http_client: Arc<dyn HttpClient>,
        base_url: impl AsRef<str>,
        credential: Option<&str>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.as_ref().trim().trim_end_matches('/').to_owned(),
            auth: HttpAuth::from_credential(credential),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn has_credential(&self) -> bool {
        !matches!(self.auth, HttpAuth::None)
    }

    /// Full lookup URL for `query`; date bounds are omitted when absent.
    pub fn lookup_url(&self, query: &ValidatedQuery) -> String {
        let mut url = format!(
            "{}{LOOKUP_PATH}?trackingId={}",
            self.base_url,
            urlencoding::encode(query.tracking_id().as_str())
        );
        if let Some(from) = query.range().from() {
            url.push_str("&fromDate=");
            url.push_str(&urlencoding::encode(&format_query_date(from)));
        }
        if let Some(to) = query.range().to() {
            url.push_str("&toDate=");
            url.push_str(&urlencoding::encode(&format_query_date(to)));
        }
        url
    }

    async fn lookup(&self, query: &ValidatedQuery) -> Result<Vec<Package>, TrackingError> {
        let timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
        let request = HttpRequest::get(self.lookup_url(query))
            .with_header("accept", "application/json")
            .with_auth(&self.auth)
            .with_timeout_ms(timeout_ms);

        debug!(
            url = %request.url,
            authenticated = self.has_credential(),
            timeout_ms,
            "sending remote lookup"
        );

        let response = tokio::time::timeout(self.timeout, self.http_client.execute(request))
            .await
            .map_err(|_| TrackingError::Timeout { timeout_ms })?
            .map_err(|error| match error.kind() {
                HttpErrorKind::Timeout => TrackingError::Timeout { timeout_ms },
                HttpErrorKind::Connect | HttpErrorKind::Other => {
                    TrackingError::network(error.message())
                }
            })?;

        debug!(status = response.status, "remote lookup responded");

        match response.status {
            200 => parse_lookup_body(&response.body),
            404 => Err(TrackingError::not_found(query.tracking_id().as_str())),
            400 => {
                warn!(status = 400, "remote source rejected tracking id");
                Err(ValidationError::MalformedIdentifier {
                    value: query.tracking_id().as_str().to_owned(),
                    reason: format!(
                        "rejected by remote source: {}",
                        error_excerpt(&response.body)
                    ),
                }
                .into())
            }
            status => {
                warn!(status, "remote lookup failed");
                Err(TrackingError::remote(status, error_excerpt(&response.body)))
            }
        }
    }
}

impl TrackingSource for RemoteSource {
    fn backend(&self) -> Backend {
        Backend::Remote
    }

    fn fetch<'a>(&'a self, query: &'a ValidatedQuery) -> SourceFuture<'a> {
        Box::pin(self.lookup(query))
    }
}

/// Strict projection of a success body; nothing is accepted partially.
fn parse_lookup_body(body: &str) -> Result<Vec<Package>, TrackingError> {
    let response: LookupResponse = serde_json::from_str(body).map_err(|error| {
        TrackingError::malformed_response(format!("failed to parse lookup response: {error}"))
    })?;

    for package in &response.packages {
        package.validate().map_err(|error| {
            TrackingError::malformed_response(format!(
                "package '{}' failed validation: {error}",
                package.tracking_id
            ))
        })?;
    }

    Ok(response.packages)
}

fn error_excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return String::from("<empty body>");
    }
    trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect()
}
