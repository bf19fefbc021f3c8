use time::macros::datetime;
use tracing::debug;

use crate::source::{Backend, SourceFuture, TrackingSource};
use crate::{
    Item, Package, PackageDraft, StatusUpdate, Timestamp, TrackingError, TrackingId,
    ValidatedQuery, ValidationError,
};

/// Tracking id that always yields the canonical demonstration package.
pub const CANONICAL_TRACKING_ID: &str = "PKG123456789";

const GENERIC_PREFIX: &str = "PKG";

/// Deterministic in-memory tracking source.
///
/// Output depends only on the tracking id: the canonical id maps to a fixed
/// two-item shipment, every other `PKG` id to a generic delivered parcel.
/// Nothing here awaits, so the returned future is ready on first poll.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedSource;

impl SimulatedSource {
    pub const fn new() -> Self {
        Self
    }

    /// Synchronous core of [`TrackingSource::fetch`].
    pub fn generate(&self, tracking_id: &TrackingId) -> Result<Vec<Package>, TrackingError> {
        let id = tracking_id.as_str();
        if id == CANONICAL_TRACKING_ID {
            debug!(tracking_id = id, "simulated source returning canonical fixture");
            return Ok(vec![canonical_package()?]);
        }

        if id.starts_with(GENERIC_PREFIX) {
            debug!(tracking_id = id, "simulated source synthesizing generic package");
            return Ok(vec![generic_package(tracking_id)?]);
        }

        Err(TrackingError::not_found(id))
    }
}

impl TrackingSource for SimulatedSource {
    fn backend(&self) -> Backend {
        Backend::Simulated
    }

    fn fetch<'a>(&'a self, query: &'a ValidatedQuery) -> SourceFuture<'a> {
        let result = self.generate(query.tracking_id());
        Box::pin(async move { result })
    }
}

fn canonical_package() -> Result<Package, ValidationError> {
    let arrived = Timestamp::new(datetime!(2025-08-11 10:00:00));
    let departed = Timestamp::new(datetime!(2025-08-11 11:00:00));
    let in_transit = Timestamp::new(datetime!(2025-08-11 14:00:00));

    let tablet = Item::new(
        "ITM987654321",
        "Tablet",
        1.2,
        1.3,
        vec![
            StatusUpdate::new("ARR", arrived, "MUC1", "Arrived at origin facility"),
            StatusUpdate::new("DEP", departed, "MUC1", "Departed from origin facility"),
            StatusUpdate::new("TRN", in_transit, "HUB1", "In transit to destination"),
        ],
    )?;
    let charger = Item::new(
        "ITM987654322",
        "Charger",
        1.3,
        1.5,
        vec![
            StatusUpdate::new("ARR", arrived, "MUC1", "Arrived at origin facility"),
            StatusUpdate::new("DEP", departed, "MUC1", "Departed from origin facility"),
        ],
    )?;

    Package::from_draft(PackageDraft {
        package_key: 987_654_321,
        tracking_id: String::from(CANONICAL_TRACKING_ID),
        service_type: String::from("EXPRESS"),
        customer_reference: String::from("REF20250811"),
        origin_country: String::from("DE"),
        origin_city: String::from("Munich"),
        origin_facility: String::from("MUC1"),
        destination_country: String::from("FR"),
        destination_city: String::from("Paris"),
        destination_facility: String::from("CDG2"),
        dispatch_date: Timestamp::new(datetime!(2025-08-11 09:00:00)),
        package_contents: String::from("ELECTRONICS"),
        currency: String::from("EUR"),
        declared_value: 199.99,
        declared_weight: 2.5,
        actual_weight: 2.8,
        items: vec![tablet, charger],
        status_updates: vec![
            StatusUpdate::new("DEP", departed, "MUC1", "Departed from origin facility"),
            StatusUpdate::new("TRN", in_transit, "HUB1", "In transit to destination"),
        ],
    })
}

fn generic_package(tracking_id: &TrackingId) -> Result<Package, ValidationError> {
    let suffix = tracking_id.suffix(6);
    let arrived = Timestamp::new(datetime!(2025-08-11 09:00:00));
    let delivered = Timestamp::new(datetime!(2025-08-11 16:00:00));

    let history = vec![
        StatusUpdate::new("ARR", arrived, "NYC1", "Arrived at origin facility"),
        StatusUpdate::new("DEL", delivered, "LAX1", "Delivered successfully"),
    ];
    let documents = Item::new(
        format!("ITM{suffix}"),
        "Business Documents",
        0.5,
        0.6,
        history.clone(),
    )?;

    Package::from_draft(PackageDraft {
        package_key: synthetic_package_key(tracking_id),
        tracking_id: tracking_id.as_str().to_owned(),
        service_type: String::from("STANDARD"),
        customer_reference: format!("REF{suffix}"),
        origin_country: String::from("US"),
        origin_city: String::from("New York"),
        origin_facility: String::from("NYC1"),
        destination_country: String::from("US"),
        destination_city: String::from("Los Angeles"),
        destination_facility: String::from("LAX1"),
        dispatch_date: Timestamp::new(datetime!(2025-08-11 08:00:00)),
        package_contents: String::from("DOCUMENTS"),
        currency: String::from("USD"),
        declared_value: 50.0,
        declared_weight: 0.5,
        actual_weight: 0.6,
        items: vec![documents],
        status_updates: history,
    })
}

// Nine-digit key, stable for a given id.
fn synthetic_package_key(tracking_id: &TrackingId) -> u64 {
    let seed = tracking_id
        .as_str()
        .bytes()
        .fold(13_u64, |acc, byte| acc.wrapping_mul(29).wrapping_add(u64::from(byte)));
    100_000_000 + seed % 900_000_000
}
