use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::ValidationError;

const WIRE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
const WIRE_FORMAT_FRACTIONAL: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");

/// Event timestamp as exchanged with tracking sources.
///
/// The wire form carries no offset (`2025-08-11T09:00:00`). RFC3339 input
/// with an explicit offset is accepted and shifted to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(PrimitiveDateTime);

impl Timestamp {
    pub const fn new(value: PrimitiveDateTime) -> Self {
        Self(value)
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if let Ok(parsed) = PrimitiveDateTime::parse(trimmed, WIRE_FORMAT) {
            return Ok(Self(parsed));
        }
        if let Ok(parsed) = PrimitiveDateTime::parse(trimmed, WIRE_FORMAT_FRACTIONAL) {
            return Ok(Self(parsed));
        }

        let offset = OffsetDateTime::parse(trimmed, &Rfc3339).map_err(|_| {
            ValidationError::InvalidTimestamp {
                value: input.to_owned(),
            }
        })?;
        let utc = offset.to_offset(UtcOffset::UTC);
        Ok(Self(PrimitiveDateTime::new(utc.date(), utc.time())))
    }

    pub const fn date(self) -> Date {
        self.0.date()
    }

    /// `YYYYMMDD` encoding of the calendar date.
    pub fn date_partition(self) -> u32 {
        let date = self.0.date();
        let year = u32::try_from(date.year()).unwrap_or(0);
        year * 10_000 + u32::from(u8::from(date.month())) * 100 + u32::from(date.day())
    }

    pub fn format_wire(self) -> String {
        self.0
            .format(WIRE_FORMAT)
            .unwrap_or_else(|_| String::from("<unformattable>"))
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_wire())
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_wire())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
