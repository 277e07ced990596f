//! Remote rate source contract.
//!
//! The aggregator only depends on [`RateSource`]; the CNB adapter in
//! [`crate::adapters`] is the production implementation.
//!
//! # Endpoints
//!
//! | Endpoint | Method | Payload | Description |
//! |----------|--------|---------|-------------|
//! | Daily | [`RateSource::daily`] | [`RateQuoteList`] | Rates fixed for today |
//! | Other | [`RateSource::other_by_year_month`] | [`RateQuoteList`] | Monthly rates for less traded currencies |

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{RateQuoteList, ResponseEnvelope};

/// The two remote feeds merged by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateEndpoint {
    Daily,
    Other,
}

impl RateEndpoint {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Other => "other",
        }
    }
}

impl Display for RateEndpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type EnvelopeFuture<'a> =
    Pin<Box<dyn Future<Output = ResponseEnvelope<RateQuoteList>> + Send + 'a>>;

/// Remote rate source contract.
///
/// Implementations must report every ordinary failure (transport errors,
/// non-success statuses, undecodable bodies) as
/// [`ResponseEnvelope::Failure`] instead of panicking.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; one source is shared by every
/// concurrent aggregation.
pub trait RateSource: Send + Sync {
    /// Short identifier used in log lines.
    fn id(&self) -> &'static str;

    /// Fetches the current daily rate set.
    fn daily<'a>(&'a self) -> EnvelopeFuture<'a>;

    /// Fetches the monthly rate set for a `YYYYMM` key.
    fn other_by_year_month<'a>(&'a self, key: &'a str) -> EnvelopeFuture<'a>;
}
