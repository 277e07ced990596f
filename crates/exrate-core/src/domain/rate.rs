use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::Currency;

/// Single currency line as reported by the remote rate source.
///
/// Rates may be quoted per `amount` units of the currency (for example
/// 100 JPY), so the raw `rate` is not necessarily a per-unit value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateQuote {
    pub currency_code: String,
    pub rate: f64,
    pub amount: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_for: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl RateQuote {
    pub fn new(currency_code: impl Into<String>, rate: f64, amount: u32) -> Self {
        Self {
            currency_code: currency_code.into(),
            rate,
            amount,
            country: None,
            currency: None,
            valid_for: None,
            order: None,
        }
    }

    /// Rate for one unit of the quoted currency.
    ///
    /// A zero `amount` is read as a per-unit quote.
    pub fn normalized_rate(&self) -> f64 {
        self.rate / f64::from(self.amount.max(1))
    }
}

/// Payload shared by the daily and the monthly rate feeds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateQuoteList {
    #[serde(default)]
    pub rates: Vec<RateQuote>,
}

impl RateQuoteList {
    pub fn new(rates: Vec<RateQuote>) -> Self {
        Self { rates }
    }
}

/// Normalized rate: one unit of `source` buys `value` units of `target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub source: Currency,
    pub target: Currency,
    pub value: f64,
}

impl ExchangeRate {
    pub fn new(source: Currency, target: Currency, value: f64) -> Self {
        Self {
            source,
            target,
            value,
        }
    }
}

impl Display for ExchangeRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}={}", self.source, self.target, self.value)
    }
}
