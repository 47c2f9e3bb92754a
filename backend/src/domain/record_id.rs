//! Numeric record identifiers assigned by the store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a persisted record.
///
/// Identifiers are allocated by the store on insert and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i32);

/// Raised when a path segment does not start with a decimal integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid record id: `{raw}` is not an integer")]
pub struct InvalidRecordId {
    raw: String,
}

impl RecordId {
    /// Wrap a raw store identifier.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Parse a path segment the way `parseInt(segment, 10)` reads it.
    ///
    /// Leading whitespace and a single sign are accepted, then the longest
    /// run of ASCII digits is taken and anything after it is ignored. Input
    /// without leading digits, or outside the `i32` range, is rejected.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::RecordId;
    ///
    /// assert_eq!(RecordId::parse_lenient("42").map(RecordId::get), Ok(42));
    /// assert_eq!(RecordId::parse_lenient(" 7abc").map(RecordId::get), Ok(7));
    /// assert!(RecordId::parse_lenient("abc").is_err());
    /// ```
    pub fn parse_lenient(raw: &str) -> Result<Self, InvalidRecordId> {
        let invalid = || InvalidRecordId {
            raw: raw.to_owned(),
        };
        let trimmed = raw.trim_start();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let digit_len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
        let digits = unsigned
            .get(..digit_len)
            .filter(|digits| !digits.is_empty())
            .ok_or_else(invalid)?;
        let magnitude: i64 = digits.parse().map_err(|_| invalid())?;
        let value = if negative { -magnitude } else { magnitude };
        i32::try_from(value).map(Self).map_err(|_| invalid())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", 1)]
    #[case("0042", 42)]
    #[case("  9", 9)]
    #[case("+5", 5)]
    #[case("-3", -3)]
    #[case("12abc", 12)]
    #[case("7.9", 7)]
    fn parse_lenient_reads_leading_digits(#[case] raw: &str, #[case] expected: i32) {
        assert_eq!(RecordId::parse_lenient(raw), Ok(RecordId::new(expected)));
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("-")]
    #[case("+-1")]
    #[case("99999999999")]
    #[case("999999999999999999999999")]
    fn parse_lenient_rejects_non_numeric_or_out_of_range(#[case] raw: &str) {
        let error = RecordId::parse_lenient(raw).expect_err("id should be rejected");
        assert!(error.to_string().contains("invalid record id"));
    }

    #[rstest]
    fn serialises_as_a_bare_integer() {
        let json = serde_json::to_string(&RecordId::new(3)).expect("serialise id");
        assert_eq!(json, "3");
    }
}
