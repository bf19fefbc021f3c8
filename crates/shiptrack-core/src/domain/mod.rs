//! # Domain Models
//!
//! Canonical shipment types shared by every tracking source.
//!
//! ## Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Package`] | Shipment aggregate: route, commercial data, items, history |
//! | [`Item`] | Item owned by one package, with its own history |
//! | [`StatusUpdate`] | Single timestamped handling event |
//! | [`TrackingResult`] | Zero or more packages returned by a lookup |
//! | [`TrackingId`] | Normalized, format-checked tracking identifier |
//! | [`DateRange`] | Optional inclusive calendar window |
//! | [`Timestamp`] | Offset-free ISO 8601 event time |
//!
//! ## Privacy
//!
//! Sender and recipient fields only ever leave the core holding
//! [`REDACTED`]. Packages built in-process through [`PackageDraft`] never
//! carry personal data in the first place; packages received from a remote
//! source are redacted by the resolver.

mod date_range;
mod models;
mod timestamp;
mod tracking_id;

pub use date_range::{format_query_date, parse_query_date, DateRange};
pub use models::{
    validate_currency_code, Item, Package, PackageDraft, StatusUpdate, TrackingResult, REDACTED,
};
pub use timestamp::Timestamp;
pub use tracking_id::{IdentifierRule, TrackingId};
