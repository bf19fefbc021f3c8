use std::fmt::{Display, Formatter};

use serde::Serialize;
use shiptrack_core::Backend;
use time::OffsetDateTime;
use uuid::Uuid;

/// Request identifier (UUID v4) stamped on every printed envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Envelope metadata.
///
/// Field order is fixed to keep JSON output stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub request_id: RequestId,
    pub backend: Backend,
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
    pub latency_ms: u64,
}

impl Metadata {
    pub fn new(backend: Backend, latency_ms: u64) -> Self {
        Self {
            request_id: RequestId::new_v4(),
            backend,
            generated_at: OffsetDateTime::now_utc(),
            latency_ms,
        }
    }
}
