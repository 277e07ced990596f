use std::fmt::{Display, Formatter};

use time::OffsetDateTime;

use crate::ValidationError;

/// Calendar month used to key the monthly rate feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u8,
}

impl YearMonth {
    pub fn new(year: i32, month: u8) -> Result<Self, ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::InvalidMonth { month });
        }
        Ok(Self { year, month })
    }

    /// Month of `value` after shifting it to UTC.
    pub fn from_datetime(value: OffsetDateTime) -> Self {
        let utc = value.to_offset(time::UtcOffset::UTC);
        Self {
            year: utc.year(),
            month: u8::from(utc.month()),
        }
    }

    pub fn current_utc() -> Self {
        Self::from_datetime(OffsetDateTime::now_utc())
    }

    /// Parse a `YYYYMM` key.
    pub fn parse_key(input: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidYearMonthKey {
            value: input.to_owned(),
        };

        if input.len() != 6 || !input.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(invalid());
        }

        let (year, month) = input.split_at(4);
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u8>().map_err(|_| invalid())?;
        Self::new(year, month)
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub const fn month(self) -> u8 {
        self.month
    }

    /// `YYYYMM`, zero padded.
    pub fn key(self) -> String {
        format!("{:04}{:02}", self.year, self.month)
    }

    /// `YYYY-MM`, the form the CNB monthly endpoint expects.
    pub fn query_value(self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.key())
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn key_is_zero_padded() {
        let value = YearMonth::new(2024, 1).expect("valid");
        assert_eq!(value.key(), "202401");
        assert_eq!(value.query_value(), "2024-01");
    }

    #[test]
    fn derives_month_in_utc() {
        let local = datetime!(2024-03-01 00:30 +02:00);
        assert_eq!(YearMonth::from_datetime(local).key(), "202402");
    }

    #[test]
    fn parses_key() {
        let parsed = YearMonth::parse_key("202403").expect("must parse");
        assert_eq!(parsed.year(), 2024);
        assert_eq!(parsed.month(), 3);
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!(matches!(
            YearMonth::parse_key("2024-03"),
            Err(ValidationError::InvalidYearMonthKey { .. })
        ));
        assert!(matches!(
            YearMonth::parse_key("202413"),
            Err(ValidationError::InvalidMonth { month: 13 })
        ));
    }
}
