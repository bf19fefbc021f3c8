//! Tracking source contract.
//!
//! A source answers one validated query with the raw packages it knows
//! about. Redaction, integrity checks and date filtering are the resolver's
//! job; sources only produce data.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Package, TrackingError, ValidatedQuery};

/// Backend variants a deployment can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Simulated,
    Remote,
}

impl Backend {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simulated => "simulated",
            Self::Remote => "remote",
        }
    }
}

impl Display for Backend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "simulated" | "sim" => Ok(Self::Simulated),
            "remote" => Ok(Self::Remote),
            other => Err(ConfigError::UnknownBackend {
                value: other.to_owned(),
            }),
        }
    }
}

pub type SourceFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<Package>, TrackingError>> + Send + 'a>>;

/// Source adapter contract.
///
/// # Errors
///
/// Implementations return [`TrackingError::NotFound`] when no package
/// matches, and the transport-specific variants (`Network`, `Timeout`,
/// `Remote`, `MalformedResponse`) for everything else that went wrong.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the resolver holds them behind an
/// `Arc` and may be shared across tasks.
pub trait TrackingSource: Send + Sync {
    fn backend(&self) -> Backend;

    fn fetch<'a>(&'a self, query: &'a ValidatedQuery) -> SourceFuture<'a>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_names() {
        assert_eq!("Remote".parse::<Backend>().expect("valid"), Backend::Remote);
        assert_eq!(" sim ".parse::<Backend>().expect("valid"), Backend::Simulated);
        assert!(matches!(
            "carrier-x".parse::<Backend>(),
            Err(ConfigError::UnknownBackend { .. })
        ));
    }
}
