use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ValidationError};

const DEFAULT_PREFIX: &str = "PKG";
const DEFAULT_MIN_BODY_LEN: usize = 6;
const DEFAULT_MAX_BODY_LEN: usize = 20;

/// Format rule a tracking id must satisfy after normalization.
///
/// A valid id is the prefix followed by an ASCII alphanumeric body whose
/// length lies within `min_body_len..=max_body_len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierRule {
    prefix: String,
    min_body_len: usize,
    max_body_len: usize,
}

impl Default for IdentifierRule {
    fn default() -> Self {
        Self {
            prefix: String::from(DEFAULT_PREFIX),
            min_body_len: DEFAULT_MIN_BODY_LEN,
            max_body_len: DEFAULT_MAX_BODY_LEN,
        }
    }
}

impl IdentifierRule {
    pub fn new(
        prefix: impl AsRef<str>,
        min_body_len: usize,
        max_body_len: usize,
    ) -> Result<Self, ConfigError> {
        let prefix = prefix.as_ref().trim().to_ascii_uppercase();
        if !prefix.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            return Err(ConfigError::InvalidIdentifierPrefix { value: prefix });
        }
        if min_body_len == 0 || min_body_len > max_body_len {
            return Err(ConfigError::InvalidIdentifierLength {
                min: min_body_len,
                max: max_body_len,
            });
        }

        Ok(Self {
            prefix,
            min_body_len,
            max_body_len,
        })
    }

    /// Same length bounds, different prefix.
    pub fn with_prefix(self, prefix: impl AsRef<str>) -> Result<Self, ConfigError> {
        Self::new(prefix, self.min_body_len, self.max_body_len)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub const fn min_body_len(&self) -> usize {
        self.min_body_len
    }

    pub const fn max_body_len(&self) -> usize {
        self.max_body_len
    }

    fn check(&self, normalized: &str) -> Result<(), String> {
        if let Some((index, ch)) = normalized
            .chars()
            .enumerate()
            .find(|(_, ch)| !ch.is_ascii_alphanumeric())
        {
            return Err(format!("invalid character '{ch}' at index {index}"));
        }

        let Some(body) = normalized.strip_prefix(self.prefix.as_str()) else {
            return Err(format!("must start with '{}'", self.prefix));
        };

        let len = body.len();
        if len < self.min_body_len || len > self.max_body_len {
            return Err(format!(
                "expected {}..={} characters after '{}', found {len}",
                self.min_body_len, self.max_body_len, self.prefix
            ));
        }

        Ok(())
    }
}

/// Normalized (trimmed, uppercase) tracking identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingId(String);

impl TrackingId {
    /// Parse and normalize a raw identifier against `rule`.
    pub fn parse(input: &str, rule: &IdentifierRule) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingIdentifier);
        }

        let normalized = trimmed.to_ascii_uppercase();
        rule.check(&normalized)
            .map_err(|reason| ValidationError::MalformedIdentifier {
                value: input.to_owned(),
                reason,
            })?;

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last `len` characters, or the whole id when it is shorter.
    pub fn suffix(&self, len: usize) -> &str {
        let start = self.0.len().saturating_sub(len);
        &self.0[start..]
    }
}

impl Display for TrackingId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for TrackingId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_tracking_id() {
        let parsed = TrackingId::parse(" pkg123456789 ", &IdentifierRule::default())
            .expect("id should parse");
        assert_eq!(parsed.as_str(), "PKG123456789");
        assert_eq!(parsed.suffix(6), "456789");
    }

    #[test]
    fn rejects_whitespace_only_id() {
        let err = TrackingId::parse("   ", &IdentifierRule::default()).expect_err("must fail");
        assert_eq!(err, ValidationError::MissingIdentifier);
    }

    #[test]
    fn rejects_wrong_prefix_and_inner_space() {
        let rule = IdentifierRule::default();
        assert!(matches!(
            TrackingId::parse("ABC123456", &rule),
            Err(ValidationError::MalformedIdentifier { .. })
        ));
        assert!(matches!(
            TrackingId::parse("bad id", &rule),
            Err(ValidationError::MalformedIdentifier { .. })
        ));
    }

    #[test]
    fn enforces_body_length_bounds() {
        let rule = IdentifierRule::new("PKG", 3, 4).expect("valid rule");
        assert!(TrackingId::parse("PKG12", &rule).is_err());
        assert!(TrackingId::parse("PKG123", &rule).is_ok());
        assert!(TrackingId::parse("PKG1234", &rule).is_ok());
        assert!(TrackingId::parse("PKG12345", &rule).is_err());
    }

    #[test]
    fn rule_rejects_inverted_bounds() {
        let err = IdentifierRule::new("PKG", 8, 4).expect_err("must fail");
        assert!(matches!(err, ConfigError::InvalidIdentifierLength { .. }));
    }
}
