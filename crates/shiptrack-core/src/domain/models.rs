use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{DateRange, Timestamp, ValidationError};

/// Placeholder written over every sender/recipient field before output.
pub const REDACTED: &str = "REDACTED";

/// Single timestamped event in a package's or item's handling history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub status_code: String,
    pub status_timestamp: Timestamp,
    pub status_location: String,
    pub status_remarks: String,
}

impl StatusUpdate {
    pub fn new(
        status_code: impl Into<String>,
        status_timestamp: Timestamp,
        status_location: impl Into<String>,
        status_remarks: impl Into<String>,
    ) -> Self {
        Self {
            status_code: status_code.into(),
            status_timestamp,
            status_location: status_location.into(),
            status_remarks: status_remarks.into(),
        }
    }
}

/// Item owned by exactly one package, with its own status history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub item_id: String,
    pub item_weight_declared: f64,
    pub item_weight_actual: f64,
    pub item_description: String,
    pub status_updates: Vec<StatusUpdate>,
}

impl Item {
    pub fn new(
        item_id: impl Into<String>,
        item_description: impl Into<String>,
        item_weight_declared: f64,
        item_weight_actual: f64,
        status_updates: Vec<StatusUpdate>,
    ) -> Result<Self, ValidationError> {
        let item = Self {
            item_id: item_id.into(),
            item_weight_declared,
            item_weight_actual,
            item_description: item_description.into(),
            status_updates,
        };
        item.validate()?;
        Ok(item)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_non_negative("itemWeightDeclared", self.item_weight_declared)?;
        validate_non_negative("itemWeightActual", self.item_weight_actual)
    }
}

/// Shipment record as produced by a tracking source.
///
/// Field names on the wire are the camelCase forms of the Rust names.
/// `item_count` must always equal `items.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub package_key: u64,
    pub tracking_id: String,
    pub date_partition: u32,
    pub service_type: String,
    pub customer_reference: String,
    pub origin_country: String,
    pub origin_city: String,
    pub origin_facility: String,
    pub destination_country: String,
    pub destination_city: String,
    pub destination_facility: String,
    pub sender_name: String,
    pub sender_contact: String,
    pub recipient_name: String,
    pub recipient_contact: String,
    pub dispatch_date: Timestamp,
    pub item_count: usize,
    pub package_contents: String,
    pub currency: String,
    pub declared_value: f64,
    pub declared_weight: f64,
    pub actual_weight: f64,
    pub items: Vec<Item>,
    pub status_updates: Vec<StatusUpdate>,
}

/// In-process description of a package.
///
/// Derived fields (`datePartition`, `itemCount`) and personal data are not
/// part of the draft; [`Package::from_draft`] fills them in.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageDraft {
    pub package_key: u64,
    pub tracking_id: String,
    pub service_type: String,
    pub customer_reference: String,
    pub origin_country: String,
    pub origin_city: String,
    pub origin_facility: String,
    pub destination_country: String,
    pub destination_city: String,
    pub destination_facility: String,
    pub dispatch_date: Timestamp,
    pub package_contents: String,
    pub currency: String,
    pub declared_value: f64,
    pub declared_weight: f64,
    pub actual_weight: f64,
    pub items: Vec<Item>,
    pub status_updates: Vec<StatusUpdate>,
}

impl Package {
    pub fn from_draft(draft: PackageDraft) -> Result<Self, ValidationError> {
        let package = Self {
            package_key: draft.package_key,
            tracking_id: draft.tracking_id,
            date_partition: draft.dispatch_date.date_partition(),
            service_type: draft.service_type,
            customer_reference: draft.customer_reference,
            origin_country: draft.origin_country,
            origin_city: draft.origin_city,
            origin_facility: draft.origin_facility,
            destination_country: draft.destination_country,
            destination_city: draft.destination_city,
            destination_facility: draft.destination_facility,
            sender_name: String::from(REDACTED),
            sender_contact: String::from(REDACTED),
            recipient_name: String::from(REDACTED),
            recipient_contact: String::from(REDACTED),
            dispatch_date: draft.dispatch_date,
            item_count: draft.items.len(),
            package_contents: draft.package_contents,
            currency: validate_currency_code(&draft.currency)?,
            declared_value: draft.declared_value,
            declared_weight: draft.declared_weight,
            actual_weight: draft.actual_weight,
            items: draft.items,
            status_updates: draft.status_updates,
        };
        package.validate()?;
        Ok(package)
    }

    /// Checks the invariants a package must hold regardless of its source.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_non_negative("declaredValue", self.declared_value)?;
        validate_non_negative("declaredWeight", self.declared_weight)?;
        validate_non_negative("actualWeight", self.actual_weight)?;

        if self.currency.len() != 3 || !self.currency.chars().all(|ch| ch.is_ascii_uppercase()) {
            return Err(ValidationError::InvalidCurrency {
                value: self.currency.clone(),
            });
        }

        if self.item_count != self.items.len() {
            return Err(ValidationError::ItemCountMismatch {
                declared: self.item_count,
                actual: self.items.len(),
            });
        }

        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            item.validate()?;
            if !seen.insert(item.item_id.as_str()) {
                return Err(ValidationError::DuplicateItemId {
                    item_id: item.item_id.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn redact(&mut self) {
        for field in [
            &mut self.sender_name,
            &mut self.sender_contact,
            &mut self.recipient_name,
            &mut self.recipient_contact,
        ] {
            field.clear();
            field.push_str(REDACTED);
        }
    }

    pub fn is_redacted(&self) -> bool {
        [
            &self.sender_name,
            &self.sender_contact,
            &self.recipient_name,
            &self.recipient_contact,
        ]
        .iter()
        .all(|field| field.as_str() == REDACTED)
    }

    /// Drops package- and item-level status entries outside `range`.
    ///
    /// Relative order of the remaining entries is unchanged.
    pub fn retain_status_within(&mut self, range: &DateRange) {
        if range.is_unbounded() {
            return;
        }

        self.status_updates
            .retain(|update| range.contains(update.status_timestamp));
        for item in &mut self.items {
            item.status_updates
                .retain(|update| range.contains(update.status_timestamp));
        }
    }
}

/// Uniform lookup output: zero or more packages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackingResult {
    packages: Vec<Package>,
}

impl TrackingResult {
    pub fn new(packages: Vec<Package>) -> Self {
        Self { packages }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }
}

/// Validate and normalize currency to uppercase 3-letter code.
pub fn validate_currency_code(input: &str) -> Result<String, ValidationError> {
    let normalized = input.trim().to_ascii_uppercase();
    let is_valid = normalized.len() == 3 && normalized.chars().all(|ch| ch.is_ascii_alphabetic());

    if !is_valid {
        return Err(ValidationError::InvalidCurrency {
            value: input.to_owned(),
        });
    }

    Ok(normalized)
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_query_date;

    fn ts(value: &str) -> Timestamp {
        Timestamp::parse(value).expect("timestamp")
    }

    fn draft() -> PackageDraft {
        PackageDraft {
            package_key: 1,
            tracking_id: String::from("PKG000111222"),
            service_type: String::from("STANDARD"),
            customer_reference: String::from("REF111222"),
            origin_country: String::from("US"),
            origin_city: String::from("New York"),
            origin_facility: String::from("NYC1"),
            destination_country: String::from("US"),
            destination_city: String::from("Los Angeles"),
            destination_facility: String::from("LAX1"),
            dispatch_date: ts("2025-08-11T08:00:00"),
            package_contents: String::from("DOCUMENTS"),
            currency: String::from("usd"),
            declared_value: 50.0,
            declared_weight: 0.5,
            actual_weight: 0.6,
            items: vec![Item::new(
                "ITM111222",
                "Business Documents",
                0.5,
                0.6,
                vec![
                    StatusUpdate::new("ARR", ts("2025-08-11T09:00:00"), "NYC1", "Arrived"),
                    StatusUpdate::new("DEL", ts("2025-08-13T16:00:00"), "LAX1", "Delivered"),
                ],
            )
            .expect("valid item")],
            status_updates: vec![
                StatusUpdate::new("ARR", ts("2025-08-11T09:00:00"), "NYC1", "Arrived"),
                StatusUpdate::new("DEL", ts("2025-08-13T16:00:00"), "LAX1", "Delivered"),
            ],
        }
    }

    #[test]
    fn draft_derives_partition_count_and_redaction() {
        let package = Package::from_draft(draft()).expect("valid package");

        assert_eq!(package.date_partition, 20250811);
        assert_eq!(package.item_count, 1);
        assert_eq!(package.currency, "USD");
        assert!(package.is_redacted());
    }

    #[test]
    fn rejects_negative_declared_value() {
        let mut draft = draft();
        draft.declared_value = -1.0;
        let err = Package::from_draft(draft).expect_err("must fail");
        assert_eq!(
            err,
            ValidationError::NegativeValue {
                field: "declaredValue"
            }
        );
    }

    #[test]
    fn validate_catches_item_count_drift() {
        let mut package = Package::from_draft(draft()).expect("valid package");
        package.item_count = 2;
        assert!(matches!(
            package.validate(),
            Err(ValidationError::ItemCountMismatch {
                declared: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn redact_overwrites_personal_fields() {
        let mut package = Package::from_draft(draft()).expect("valid package");
        package.sender_name = String::from("Jane Doe");
        package.recipient_contact = String::from("+49 89 000000");
        assert!(!package.is_redacted());

        package.redact();
        assert!(package.is_redacted());
    }

    #[test]
    fn date_filter_narrows_history_but_keeps_package_shape() {
        let mut package = Package::from_draft(draft()).expect("valid package");
        let day = parse_query_date("fromDate", "2025-08-13").expect("date");
        let range = DateRange::new(Some(day), Some(day)).expect("range");

        package.retain_status_within(&range);

        assert_eq!(package.status_updates.len(), 1);
        assert_eq!(package.status_updates[0].status_code, "DEL");
        assert_eq!(package.items[0].status_updates.len(), 1);
        assert_eq!(package.item_count, package.items.len());
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let package = Package::from_draft(draft()).expect("valid package");
        let value = serde_json::to_value(&package).expect("serializes");

        assert_eq!(value["trackingId"], "PKG000111222");
        assert_eq!(value["datePartition"], 20250811);
        assert_eq!(value["dispatchDate"], "2025-08-11T08:00:00");
        assert_eq!(value["items"][0]["itemWeightDeclared"], 0.5);
        assert_eq!(value["statusUpdates"][1]["statusCode"], "DEL");
    }
}
