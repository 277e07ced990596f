//! # Domain Models
//!
//! Canonical value types shared by the rate source, the aggregator and the CLI.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Currency`] | Validated 3-letter currency code |
//! | [`RateQuote`] | Provider rate line, quoted per `amount` units |
//! | [`RateQuoteList`] | Payload of one provider feed |
//! | [`ExchangeRate`] | Normalized per-unit rate against the target currency |
//! | [`YearMonth`] | Key of the monthly feed |
//!
//! All types validate their invariants at construction time.

mod currency;
mod rate;
mod year_month;

pub use currency::{Currency, TARGET_CURRENCY_CODE};
pub use rate::{ExchangeRate, RateQuote, RateQuoteList};
pub use year_month::YearMonth;
