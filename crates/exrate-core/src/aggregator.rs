//! Rate aggregation pipeline.
//!
//! [`RateAggregator::get_exchange_rates`] runs five stages in a fixed order:
//!
//! 1. validate the requested currencies (no remote call on failure)
//! 2. fetch the daily and the monthly feeds concurrently
//! 3. validate both envelopes, daily first
//! 4. merge both feeds, keep requested currencies, normalize rates
//! 5. turn the final [`PipelineState`] into a `Result`
//!
//! Each stage consumes the previous stage's value, so nothing outlives a
//! single call and concurrent calls on one aggregator never interfere.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::rate_source::{RateEndpoint, RateSource};
use crate::{
    Currency, EnvelopeError, ExchangeRate, RateQuote, RateQuoteList, ResponseEnvelope, YearMonth,
};

/// Failure class of an aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateErrorKind {
    /// The request was rejected before any remote call.
    Validation,
    /// A remote feed reported failure.
    Api,
}

impl RateErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "ValidationError",
            Self::Api => "ApiError",
        }
    }
}

impl Display for RateErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed failure arm of [`RateAggregator::get_exchange_rates`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct RateError {
    kind: RateErrorKind,
    message: String,
}

impl RateError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: RateErrorKind::Validation,
            message: message.into(),
        }
    }

    pub fn api(error: &EnvelopeError) -> Self {
        Self {
            kind: RateErrorKind::Api,
            message: error.to_string(),
        }
    }

    pub const fn kind(&self) -> RateErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub const NO_SOURCE_CURRENCIES: &str = "no source currencies provided";

/// Where a pipeline run ended up; consumed by the result builder.
#[derive(Debug, Clone, PartialEq)]
enum PipelineState {
    CurrenciesInvalid,
    DailyFailed(EnvelopeError),
    OtherFailed(EnvelopeError),
    Completed(Vec<ExchangeRate>),
}

#[derive(Debug, Clone, Copy)]
struct ValidatedRequest<'a> {
    currencies: &'a [Currency],
}

#[derive(Debug)]
struct FetchedResponses<'a> {
    request: ValidatedRequest<'a>,
    daily: ResponseEnvelope<RateQuoteList>,
    other: ResponseEnvelope<RateQuoteList>,
}

#[derive(Debug)]
struct ValidatedResponses<'a> {
    request: ValidatedRequest<'a>,
    daily: RateQuoteList,
    other: RateQuoteList,
}

/// Fetches, merges and filters rates against [`Currency::target`].
#[derive(Clone)]
pub struct RateAggregator {
    source: Arc<dyn RateSource>,
    target: Currency,
}

impl RateAggregator {
    pub fn new(source: Arc<dyn RateSource>) -> Self {
        Self {
            source,
            target: Currency::target(),
        }
    }

    /// Rates for `requested`, keyed on the current UTC month.
    ///
    /// # Errors
    ///
    /// Returns [`RateErrorKind::Validation`] when `requested` is empty and
    /// [`RateErrorKind::Api`] when either remote feed reports failure.
    /// Requested currencies missing from both feeds are not an error.
    pub async fn get_exchange_rates(
        &self,
        requested: &[Currency],
    ) -> Result<Vec<ExchangeRate>, RateError> {
        self.get_exchange_rates_at(requested, YearMonth::current_utc())
            .await
    }

    /// Same as [`get_exchange_rates`](Self::get_exchange_rates) with an explicit month.
    ///
    /// # Errors
    ///
    /// See [`get_exchange_rates`](Self::get_exchange_rates).
    pub async fn get_exchange_rates_at(
        &self,
        requested: &[Currency],
        year_month: YearMonth,
    ) -> Result<Vec<ExchangeRate>, RateError> {
        let state = match validate_currencies(requested) {
            Err(state) => state,
            Ok(request) => {
                let fetched = self.fetch_responses(request, year_month).await;
                match validate_responses(fetched) {
                    Ok(validated) => {
                        PipelineState::Completed(merge_filter_map(validated, &self.target))
                    }
                    Err(state) => state,
                }
            }
        };

        into_result(state)
    }

    async fn fetch_responses<'a>(
        &self,
        request: ValidatedRequest<'a>,
        year_month: YearMonth,
    ) -> FetchedResponses<'a> {
        let key = year_month.key();
        debug!(source = self.source.id(), %key, "fetching daily and other rates");

        let (daily, other) = tokio::join!(
            self.source.daily(),
            self.source.other_by_year_month(&key)
        );

        debug!(
            daily_ok = daily.is_success(),
            other_ok = other.is_success(),
            "both rate feeds completed"
        );

        FetchedResponses {
            request,
            daily,
            other,
        }
    }
}

fn validate_currencies(requested: &[Currency]) -> Result<ValidatedRequest<'_>, PipelineState> {
    if requested.is_empty() {
        debug!("no source currencies requested; skipping remote calls");
        return Err(PipelineState::CurrenciesInvalid);
    }

    debug!(count = requested.len(), "source currencies validated");
    Ok(ValidatedRequest {
        currencies: requested,
    })
}

fn validate_responses(
    fetched: FetchedResponses<'_>,
) -> Result<ValidatedResponses<'_>, PipelineState> {
    let FetchedResponses {
        request,
        daily,
        other,
    } = fetched;

    let daily = daily.into_result().map_err(|error| {
        debug!(endpoint = %RateEndpoint::Daily, "daily response failed");
        PipelineState::DailyFailed(error)
    })?;
    let other = other.into_result().map_err(|error| {
        debug!(endpoint = %RateEndpoint::Other, "other response failed");
        PipelineState::OtherFailed(error)
    })?;

    Ok(ValidatedResponses {
        request,
        daily,
        other,
    })
}

fn merge_filter_map(validated: ValidatedResponses<'_>, target: &Currency) -> Vec<ExchangeRate> {
    let ValidatedResponses {
        request,
        daily,
        other,
    } = validated;

    daily
        .rates
        .into_iter()
        .chain(other.rates)
        .filter_map(|quote| to_exchange_rate(&quote, request.currencies, target))
        .collect()
}

fn to_exchange_rate(
    quote: &RateQuote,
    requested: &[Currency],
    target: &Currency,
) -> Option<ExchangeRate> {
    requested
        .iter()
        .find(|currency| currency.matches_code(&quote.currency_code))
        .map(|source| ExchangeRate::new(source.clone(), target.clone(), quote.normalized_rate()))
}

fn into_result(state: PipelineState) -> Result<Vec<ExchangeRate>, RateError> {
    let result = match state {
        PipelineState::CurrenciesInvalid => Err(RateError::validation(NO_SOURCE_CURRENCIES)),
        PipelineState::DailyFailed(error) | PipelineState::OtherFailed(error) => {
            Err(RateError::api(&error))
        }
        PipelineState::Completed(rates) => Ok(rates),
    };

    match &result {
        Ok(rates) => info!(count = rates.len(), "exchange rates aggregated"),
        Err(error) => warn!(
            kind = %error.kind(),
            message = error.message(),
            "exchange rate aggregation failed"
        ),
    }

    result
}
