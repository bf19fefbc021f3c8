//! # Shiptrack Core
//!
//! Tracking-data retrieval and normalization for shipment lookups.
//!
//! ## Overview
//!
//! Given a tracking identifier and an optional date range, this crate
//! returns a normalized shipment record: the package, its items, and their
//! status histories. Two interchangeable sources sit behind one contract:
//!
//! - **Simulated**: deterministic in-memory fixtures, no I/O
//! - **Remote**: a single GET against the package lookup service
//!
//! Exactly one source is active per [`TrackingResolver`], chosen from a
//! [`TrackingConfig`] at startup.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Simulated and remote tracking sources |
//! | [`config`] | Static resolver configuration |
//! | [`domain`] | Package, Item, StatusUpdate and identifier types |
//! | [`error`] | Validation, lookup and configuration errors |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`resolver`] | Source dispatch and result normalization |
//! | [`source`] | Tracking source trait |
//! | [`validator`] | Identifier and date-range validation |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shiptrack_core::{TrackingConfig, TrackingResolver};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let resolver = TrackingResolver::from_config(&TrackingConfig::simulated())?;
//!     let result = resolver.lookup("PKG123456789", None, None).await?;
//!
//!     for package in result.packages() {
//!         println!("{} -> {}", package.origin_city, package.destination_city);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │  CLI / Orchestrator │
//! └──────────┬──────────┘
//!            │ lookup(id, from, to)
//!            ▼
//! ┌─────────────────────┐
//! │ IdentifierValidator │  no I/O, fails fast
//! └──────────┬──────────┘
//!            ▼
//! ┌─────────────────────┐     ┌──────────────────┐
//! │  TrackingResolver   │────▶│ SimulatedSource  │
//! │ (redact, integrity, │     └──────────────────┘
//! │  date filter)       │     ┌──────────────────┐     ┌─────────────┐
//! │                     │────▶│  RemoteSource    │────▶│ HttpClient  │
//! └─────────────────────┘     └──────────────────┘     └─────────────┘
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use shiptrack_core::{TrackingError, TrackingErrorKind};
//!
//! fn handle_error(error: &TrackingError) {
//!     match error.kind() {
//!         TrackingErrorKind::Network | TrackingErrorKind::Timeout => {
//!             // transient: the caller may retry
//!         }
//!         TrackingErrorKind::Validation => {
//!             // report to user, never retry
//!         }
//!         _ => {}
//!     }
//! }
//! ```
//!
//! "Not found" is not an error at this level: the resolver returns an empty
//! [`TrackingResult`].
//!
//! ## Privacy
//!
//! Sender and recipient fields are overwritten with [`REDACTED`] on every
//! package, whichever source produced it. Credentials are never logged.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod resolver;
pub mod source;
pub mod validator;

pub use adapters::{RemoteSource, SimulatedSource, CANONICAL_TRACKING_ID};

pub use config::{TrackingConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

pub use domain::{
    format_query_date, parse_query_date, validate_currency_code, DateRange, IdentifierRule, Item,
    Package, PackageDraft, StatusUpdate, Timestamp, TrackingId, TrackingResult, REDACTED,
};

pub use error::{
    ConfigError, TrackingError, TrackingErrorKind, ValidationError, ValidationErrorKind,
};

pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpErrorKind, HttpRequest, HttpResponse, ReqwestHttpClient,
};

pub use resolver::TrackingResolver;

pub use source::{Backend, SourceFuture, TrackingSource};

pub use validator::{IdentifierValidator, TrackingQuery, ValidatedQuery};
