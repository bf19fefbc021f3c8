use std::fmt::{Display, Formatter};

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::{Timestamp, ValidationError};

const QUERY_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Parse a `YYYY-MM-DD` query date. `field` names the parameter in errors.
pub fn parse_query_date(field: &'static str, input: &str) -> Result<Date, ValidationError> {
    Date::parse(input.trim(), QUERY_DATE_FORMAT).map_err(|_| ValidationError::MalformedDate {
        field,
        value: input.to_owned(),
    })
}

pub fn format_query_date(date: Date) -> String {
    date.format(QUERY_DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// Optional, inclusive calendar-date window applied to status histories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    from: Option<Date>,
    to: Option<Date>,
}

impl DateRange {
    pub const fn unbounded() -> Self {
        Self {
            from: None,
            to: None,
        }
    }

    pub fn new(from: Option<Date>, to: Option<Date>) -> Result<Self, ValidationError> {
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(ValidationError::InvalidDateRange {
                    from: format_query_date(from),
                    to: format_query_date(to),
                });
            }
        }

        Ok(Self { from, to })
    }

    pub const fn from(&self) -> Option<Date> {
        self.from
    }

    pub const fn to(&self) -> Option<Date> {
        self.to
    }

    pub const fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Whole-day inclusive on both ends.
    pub fn contains(&self, timestamp: Timestamp) -> bool {
        let date = timestamp.date();
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let from = self.from.map(format_query_date);
        let to = self.to.map(format_query_date);
        write!(
            f,
            "{}..={}",
            from.as_deref().unwrap_or(""),
            to.as_deref().unwrap_or("")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> Date {
        parse_query_date("date", value).expect("valid date")
    }

    #[test]
    fn single_day_range_includes_midnight_and_end_of_day() {
        let range = DateRange::new(Some(date("2025-08-11")), Some(date("2025-08-11")))
            .expect("valid range");

        assert!(range.contains(Timestamp::parse("2025-08-11T00:00:00").expect("ts")));
        assert!(range.contains(Timestamp::parse("2025-08-11T23:59:59").expect("ts")));
        assert!(!range.contains(Timestamp::parse("2025-08-12T00:00:00").expect("ts")));
        assert!(!range.contains(Timestamp::parse("2025-08-10T23:59:59").expect("ts")));
    }

    #[test]
    fn open_ended_ranges_bound_one_side() {
        let from_only = DateRange::new(Some(date("2025-08-11")), None).expect("valid");
        assert!(from_only.contains(Timestamp::parse("2030-01-01T00:00:00").expect("ts")));
        assert!(!from_only.contains(Timestamp::parse("2025-08-10T12:00:00").expect("ts")));
    }

    #[test]
    fn rejects_inverted_range() {
        let err = DateRange::new(Some(date("2025-08-12")), Some(date("2025-08-11")))
            .expect_err("must fail");
        assert_eq!(
            err,
            ValidationError::InvalidDateRange {
                from: String::from("2025-08-12"),
                to: String::from("2025-08-11"),
            }
        );
    }

    #[test]
    fn rejects_non_iso_dates() {
        assert!(matches!(
            parse_query_date("fromDate", "11/08/2025"),
            Err(ValidationError::MalformedDate { field: "fromDate", .. })
        ));
        assert!(parse_query_date("fromDate", "2025-02-30").is_err());
    }
}
