//! Static lookup configuration.
//!
//! A [`TrackingConfig`] is built once at startup, validated, and handed to
//! [`TrackingResolver::from_config`](crate::TrackingResolver::from_config).
//! Nothing reads or mutates it afterwards.

use std::fmt::{Debug, Formatter};
use std::time::Duration;

use crate::{Backend, ConfigError, IdentifierRule};

pub const DEFAULT_BASE_URL: &str = "https://your-demo-domain.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, PartialEq, Eq)]
pub struct TrackingConfig {
    pub backend: Backend,
    pub base_url: String,
    pub credential: Option<String>,
    pub timeout: Duration,
    pub identifier_rule: IdentifierRule,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self::simulated()
    }
}

impl TrackingConfig {
    pub fn simulated() -> Self {
        Self {
            backend: Backend::Simulated,
            base_url: String::from(DEFAULT_BASE_URL),
            credential: None,
            timeout: DEFAULT_TIMEOUT,
            identifier_rule: IdentifierRule::default(),
        }
    }

    pub fn remote(base_url: impl Into<String>) -> Self {
        Self {
            backend: Backend::Remote,
            base_url: base_url.into(),
            ..Self::simulated()
        }
    }

    /// Empty or whitespace-only credentials are treated as absent.
    pub fn with_credential(mut self, credential: Option<String>) -> Self {
        self.credential = credential.filter(|value| !value.trim().is_empty());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_identifier_rule(mut self, identifier_rule: IdentifierRule) -> Self {
        self.identifier_rule = identifier_rule;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        if self.backend == Backend::Remote {
            let base_url = self.base_url.trim();
            if base_url.is_empty() {
                return Err(ConfigError::MissingBaseUrl);
            }
            if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                return Err(ConfigError::InvalidBaseUrl {
                    value: base_url.to_owned(),
                });
            }
        }

        Ok(())
    }
}

impl Debug for TrackingConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackingConfig")
            .field("backend", &self.backend)
            .field("base_url", &self.base_url)
            .field("credential", &self.credential.as_ref().map(|_| "***"))
            .field("timeout", &self.timeout)
            .field("identifier_rule", &self.identifier_rule)
            .finish()
    }
}
