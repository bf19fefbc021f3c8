use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, info_span, warn, Instrument};

use crate::adapters::{RemoteSource, SimulatedSource};
use crate::source::{Backend, TrackingSource};
use crate::validator::{IdentifierValidator, TrackingQuery, ValidatedQuery};
use crate::{ConfigError, Package, TrackingConfig, TrackingError, TrackingResult, ValidationError};

/// Validates queries and resolves them against the configured source.
///
/// Whatever the source returns passes the same post-conditions before it
/// reaches the caller:
///
/// 1. every package must carry the requested tracking id;
/// 2. sender and recipient fields are redacted;
/// 3. status histories are narrowed to the query's date range. Packages are
///    never dropped by the range, only their history.
///
/// A source reporting "not found" yields an empty [`TrackingResult`].
#[derive(Clone)]
pub struct TrackingResolver {
    validator: IdentifierValidator,
    source: Arc<dyn TrackingSource>,
}

impl std::fmt::Debug for TrackingResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackingResolver")
            .field("validator", &self.validator)
            .field("backend", &self.source.backend())
            .finish()
    }
}

impl TrackingResolver {
    /// Builds the resolver and its single active source.
    pub fn from_config(config: &TrackingConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let source: Arc<dyn TrackingSource> = match config.backend {
            Backend::Simulated => Arc::new(SimulatedSource::new()),
            Backend::Remote => Arc::new(
                RemoteSource::new(&config.base_url, config.credential.as_deref())
                    .with_timeout(config.timeout),
            ),
        };

        debug!(?config, "tracking resolver configured");
        Ok(Self::with_source(
            source,
            IdentifierValidator::new(config.identifier_rule.clone()),
        ))
    }

    pub fn with_source(source: Arc<dyn TrackingSource>, validator: IdentifierValidator) -> Self {
        Self { validator, source }
    }

    pub fn backend(&self) -> Backend {
        self.source.backend()
    }

    pub const fn validator(&self) -> &IdentifierValidator {
        &self.validator
    }

    pub fn validate(&self, query: &TrackingQuery) -> Result<ValidatedQuery, ValidationError> {
        self.validator.validate(query)
    }

    /// Validate then resolve. Invalid input never reaches the source.
    pub async fn lookup(
        &self,
        tracking_id: &str,
        from_date: Option<&str>,
        to_date: Option<&str>,
    ) -> Result<TrackingResult, TrackingError> {
        let query = TrackingQuery {
            tracking_id: tracking_id.to_owned(),
            from_date: from_date.map(str::to_owned),
            to_date: to_date.map(str::to_owned),
        };
        self.lookup_query(&query).await
    }

    pub async fn lookup_query(&self, query: &TrackingQuery) -> Result<TrackingResult, TrackingError> {
        let validated = self.validate(query).map_err(|error| {
            debug!(%error, "query rejected before lookup");
            error
        })?;
        self.resolve(&validated).await
    }

    pub async fn resolve(&self, query: &ValidatedQuery) -> Result<TrackingResult, TrackingError> {
        let span = info_span!(
            "lookup",
            tracking_id = %query.tracking_id(),
            backend = %self.backend(),
        );

        async move {
            let started = Instant::now();
            debug!(range = %query.range(), "dispatching to tracking source");

            let packages = match self.source.fetch(query).await {
                Ok(packages) => packages,
                Err(TrackingError::NotFound { .. }) => {
                    info!("source reported no matching package");
                    Vec::new()
                }
                Err(error) => {
                    warn!(code = error.code(), %error, "tracking source failed");
                    return Err(error);
                }
            };

            let result = finalize(query, packages)?;
            info!(
                packages = result.len(),
                latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                "lookup resolved"
            );
            Ok(result)
        }
        .instrument(span)
        .await
    }
}

fn finalize(query: &ValidatedQuery, packages: Vec<Package>) -> Result<TrackingResult, TrackingError> {
    let expected = query.tracking_id().as_str();
    let mut normalized = Vec::with_capacity(packages.len());

    for mut package in packages {
        if package.tracking_id != expected {
            warn!(found = %package.tracking_id, "source returned a foreign package");
            return Err(ValidationError::IntegrityMismatch {
                expected: expected.to_owned(),
                found: package.tracking_id,
            }
            .into());
        }

        package.redact();
        package.retain_status_within(query.range());
        normalized.push(package);
    }

    Ok(TrackingResult::new(normalized))
}
