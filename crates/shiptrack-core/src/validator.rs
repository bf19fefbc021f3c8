//! Identifier and date-range validation.
//!
//! Validation is a pure function of its input and runs before any source is
//! consulted, so malformed queries never cost a network round trip.

use crate::domain::{parse_query_date, DateRange, IdentifierRule, TrackingId};
use crate::ValidationError;

/// Raw lookup input as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingQuery {
    pub tracking_id: String,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

impl TrackingQuery {
    pub fn new(tracking_id: impl Into<String>) -> Self {
        Self {
            tracking_id: tracking_id.into(),
            from_date: None,
            to_date: None,
        }
    }

    pub fn with_from_date(mut self, from_date: impl Into<String>) -> Self {
        self.from_date = Some(from_date.into());
        self
    }

    pub fn with_to_date(mut self, to_date: impl Into<String>) -> Self {
        self.to_date = Some(to_date.into());
        self
    }
}

/// Query that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuery {
    tracking_id: TrackingId,
    range: DateRange,
}

impl ValidatedQuery {
    pub const fn new(tracking_id: TrackingId, range: DateRange) -> Self {
        Self { tracking_id, range }
    }

    pub const fn tracking_id(&self) -> &TrackingId {
        &self.tracking_id
    }

    pub const fn range(&self) -> &DateRange {
        &self.range
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierValidator {
    rule: IdentifierRule,
}

impl IdentifierValidator {
    pub const fn new(rule: IdentifierRule) -> Self {
        Self { rule }
    }

    pub const fn rule(&self) -> &IdentifierRule {
        &self.rule
    }

    pub fn validate(&self, query: &TrackingQuery) -> Result<ValidatedQuery, ValidationError> {
        let tracking_id = TrackingId::parse(&query.tracking_id, &self.rule)?;
        let from = parse_optional_date("fromDate", query.from_date.as_deref())?;
        let to = parse_optional_date("toDate", query.to_date.as_deref())?;
        let range = DateRange::new(from, to)?;

        Ok(ValidatedQuery::new(tracking_id, range))
    }
}

// Blank date strings count as "not supplied".
fn parse_optional_date(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<time::Date>, ValidationError> {
    match value {
        Some(raw) if !raw.trim().is_empty() => parse_query_date(field, raw).map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationErrorKind;

    fn kind_of(query: TrackingQuery) -> ValidationErrorKind {
        IdentifierValidator::default()
            .validate(&query)
            .expect_err("must fail")
            .kind()
    }

    #[test]
    fn accepts_id_without_dates() {
        let validated = IdentifierValidator::default()
            .validate(&TrackingQuery::new("PKG123456789"))
            .expect("valid");
        assert_eq!(validated.tracking_id().as_str(), "PKG123456789");
        assert!(validated.range().is_unbounded());
    }

    #[test]
    fn identifier_is_checked_before_dates() {
        let query = TrackingQuery::new("").with_from_date("not-a-date");
        assert_eq!(kind_of(query), ValidationErrorKind::MissingIdentifier);
    }

    #[test]
    fn malformed_date_is_reported_before_range_order() {
        let query = TrackingQuery::new("PKG123456789")
            .with_from_date("2025-13-01")
            .with_to_date("2025-01-01");
        assert_eq!(kind_of(query), ValidationErrorKind::MalformedDate);
    }

    #[test]
    fn blank_dates_are_ignored() {
        let query = TrackingQuery::new("PKG123456789")
            .with_from_date("")
            .with_to_date("  ");
        let validated = IdentifierValidator::default()
            .validate(&query)
            .expect("valid");
        assert!(validated.range().is_unbounded());
    }

    #[test]
    fn custom_prefix_rule_is_honored() {
        let rule = IdentifierRule::default()
            .with_prefix("SHP")
            .expect("valid prefix");
        let validator = IdentifierValidator::new(rule);

        assert!(validator.validate(&TrackingQuery::new("SHP123456")).is_ok());
        assert!(validator.validate(&TrackingQuery::new("PKG123456")).is_err());
    }
}
