use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const CURRENCY_CODE_LEN: usize = 3;

/// Code of the currency every [`ExchangeRate`](crate::ExchangeRate) is quoted against.
pub const TARGET_CURRENCY_CODE: &str = "CZK";

/// Normalized ISO 4217 style currency code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Parse and normalize a currency code to uppercase.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyCurrency);
        }

        let normalized = trimmed.to_ascii_uppercase();
        let is_valid = normalized.len() == CURRENCY_CODE_LEN
            && normalized.chars().all(|ch| ch.is_ascii_alphabetic());
        if !is_valid {
            return Err(ValidationError::InvalidCurrency {
                value: input.to_owned(),
            });
        }

        Ok(Self(normalized))
    }

    /// The fixed target currency.
    pub fn target() -> Self {
        Self(String::from(TARGET_CURRENCY_CODE))
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    pub fn matches_code(&self, code: &str) -> bool {
        self.0 == code
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<String> for Currency {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Currency {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.0
    }
}
