use thiserror::Error;

/// Validation and data-integrity errors exposed by `shiptrack-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("tracking id cannot be empty")]
    MissingIdentifier,
    #[error("tracking id '{value}' has an invalid format: {reason}")]
    MalformedIdentifier { value: String, reason: String },
    #[error("date range is inverted: from {from} is after to {to}")]
    InvalidDateRange { from: String, to: String },
    #[error("{field} must be a date in YYYY-MM-DD format: '{value}'")]
    MalformedDate { field: &'static str, value: String },
    #[error("package tracking id '{found}' does not match requested '{expected}'")]
    IntegrityMismatch { expected: String, found: String },

    #[error("timestamp must be ISO 8601 (YYYY-MM-DDTHH:MM:SS): '{value}'")]
    InvalidTimestamp { value: String },
    #[error("currency must be a 3-letter uppercase ISO code: '{value}'")]
    InvalidCurrency { value: String },
    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },
    #[error("itemCount {declared} does not match {actual} listed items")]
    ItemCountMismatch { declared: usize, actual: usize },
    #[error("item id '{item_id}' appears more than once in the package")]
    DuplicateItemId { item_id: String },
}

/// Coarse classification of [`ValidationError`] used by callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    MissingIdentifier,
    MalformedIdentifier,
    InvalidDateRange,
    MalformedDate,
    IntegrityMismatch,
    InvalidModel,
}

impl ValidationErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingIdentifier => "missing_identifier",
            Self::MalformedIdentifier => "malformed_identifier",
            Self::InvalidDateRange => "invalid_date_range",
            Self::MalformedDate => "malformed_date",
            Self::IntegrityMismatch => "integrity_mismatch",
            Self::InvalidModel => "invalid_model",
        }
    }
}

impl ValidationError {
    pub const fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::MissingIdentifier => ValidationErrorKind::MissingIdentifier,
            Self::MalformedIdentifier { .. } => ValidationErrorKind::MalformedIdentifier,
            Self::InvalidDateRange { .. } => ValidationErrorKind::InvalidDateRange,
            Self::MalformedDate { .. } => ValidationErrorKind::MalformedDate,
            Self::IntegrityMismatch { .. } => ValidationErrorKind::IntegrityMismatch,
            Self::InvalidTimestamp { .. }
            | Self::InvalidCurrency { .. }
            | Self::NonFiniteValue { .. }
            | Self::NegativeValue { .. }
            | Self::ItemCountMismatch { .. }
            | Self::DuplicateItemId { .. } => ValidationErrorKind::InvalidModel,
        }
    }
}

/// Error classification for a tracking lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingErrorKind {
    Validation,
    NotFound,
    Network,
    Timeout,
    Remote,
    MalformedResponse,
}

impl TrackingErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Network => "network",
            Self::Timeout => "timeout",
            Self::Remote => "remote",
            Self::MalformedResponse => "malformed_response",
        }
    }
}

/// Structured lookup failure returned by sources and the resolver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no package found for tracking id '{tracking_id}'")]
    NotFound { tracking_id: String },

    #[error("network error: {message}")]
    Network { message: String },

    #[error("request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    #[error("remote source returned status {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("malformed response from remote source: {message}")]
    MalformedResponse { message: String },
}

impl TrackingError {
    pub fn not_found(tracking_id: impl Into<String>) -> Self {
        Self::NotFound {
            tracking_id: tracking_id.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn remote(status: u16, message: impl Into<String>) -> Self {
        Self::Remote {
            status,
            message: message.into(),
        }
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> TrackingErrorKind {
        match self {
            Self::Validation(_) => TrackingErrorKind::Validation,
            Self::NotFound { .. } => TrackingErrorKind::NotFound,
            Self::Network { .. } => TrackingErrorKind::Network,
            Self::Timeout { .. } => TrackingErrorKind::Timeout,
            Self::Remote { .. } => TrackingErrorKind::Remote,
            Self::MalformedResponse { .. } => TrackingErrorKind::MalformedResponse,
        }
    }

    /// Transient failures a caller may choose to retry. The core never retries.
    pub const fn retryable(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "tracking.validation",
            Self::NotFound { .. } => "tracking.not_found",
            Self::Network { .. } => "tracking.network",
            Self::Timeout { .. } => "tracking.timeout",
            Self::Remote { .. } => "tracking.remote",
            Self::MalformedResponse { .. } => "tracking.malformed_response",
        }
    }
}

/// Invalid static configuration detected at startup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown backend '{value}', expected one of simulated, remote")]
    UnknownBackend { value: String },
    #[error("remote backend requires a base URL")]
    MissingBaseUrl,
    #[error("base URL must start with http:// or https://: '{value}'")]
    InvalidBaseUrl { value: String },
    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
    #[error("identifier prefix must be ASCII alphanumeric: '{value}'")]
    InvalidIdentifierPrefix { value: String },
    #[error("identifier body length bounds are invalid: min {min}, max {max}")]
    InvalidIdentifierLength { min: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_transport_failures_are_retryable() {
        assert!(TrackingError::network("refused").retryable());
        assert!(TrackingError::Timeout { timeout_ms: 30_000 }.retryable());
        assert!(!TrackingError::remote(500, "boom").retryable());
        assert!(!TrackingError::from(ValidationError::MissingIdentifier).retryable());
    }

    #[test]
    fn validation_errors_keep_their_kind_through_conversion() {
        let error = TrackingError::from(ValidationError::IntegrityMismatch {
            expected: String::from("PKG123456789"),
            found: String::from("PKG000000000"),
        });

        assert_eq!(error.kind(), TrackingErrorKind::Validation);
        assert_eq!(error.code(), "tracking.validation");
        match error {
            TrackingError::Validation(inner) => {
                assert_eq!(inner.kind(), ValidationErrorKind::IntegrityMismatch);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
