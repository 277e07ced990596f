//! # Exrate Core
//!
//! Core contracts and the rate aggregation pipeline for the exrate toolkit.
//!
//! ## Overview
//!
//! - **Domain models** for currencies, provider quotes and normalized rates
//! - **Response envelope** carrying either a payload or endpoint-tagged failure
//! - **Rate source trait** with a Czech National Bank adapter
//! - **Aggregator** that fetches both CNB feeds concurrently and filters them
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Rate source adapters (CNB) |
//! | [`aggregator`] | Fetch-validate-merge pipeline |
//! | [`domain`] | Domain models (Currency, RateQuote, ExchangeRate, YearMonth) |
//! | [`envelope`] | Per-call response envelope |
//! | [`error`] | Core validation errors |
//! | [`http_client`] | HTTP client abstraction |
//! | [`rate_source`] | Rate source trait |
//! | [`repository`] | Requested currency sources |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use exrate_core::{CnbRateSource, Currency, RateAggregator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let aggregator = RateAggregator::new(Arc::new(CnbRateSource::default()));
//!     let requested = vec![Currency::parse("USD")?, Currency::parse("EUR")?];
//!
//!     for rate in aggregator.get_exchange_rates(&requested).await? {
//!         println!("{rate}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  CLI / User     │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ RateAggregator  │
//! └────────┬────────┘
//!          │  daily ║ other (joined)
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ RateSource      │────▶│ HTTP Client      │
//! │ (CNB adapter)   │     │ (reqwest)        │
//! └─────────────────┘     └──────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Remote failures never escape as panics or transport errors: the adapter
//! folds them into [`ResponseEnvelope::Failure`] and the aggregator reports
//! them as a [`RateError`]:
//!
//! ```rust
//! use exrate_core::{RateError, RateErrorKind};
//!
//! fn describe(error: &RateError) -> &'static str {
//!     match error.kind() {
//!         RateErrorKind::Validation => "nothing to look up",
//!         RateErrorKind::Api => "rate source unavailable",
//!     }
//! }
//! ```

pub mod adapters;
pub mod aggregator;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod http_client;
pub mod rate_source;
pub mod repository;

pub use adapters::{CnbRateSource, CnbRateSourceBuilder, DEFAULT_CNB_BASE_URL};

pub use aggregator::{RateAggregator, RateError, RateErrorKind, NO_SOURCE_CURRENCIES};

pub use domain::{
    Currency, ExchangeRate, RateQuote, RateQuoteList, YearMonth, TARGET_CURRENCY_CODE,
};

pub use envelope::{EnvelopeError, ResponseEnvelope};

pub use error::ValidationError;

pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, DEFAULT_TIMEOUT_MS,
};

pub use rate_source::{EnvelopeFuture, RateEndpoint, RateSource};

pub use repository::{CurrencyRepository, StaticCurrencyRepository, DEFAULT_SOURCE_CURRENCIES};
