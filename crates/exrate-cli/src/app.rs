use std::sync::Arc;

use exrate_core::{
    CnbRateSource, CurrencyRepository, ExchangeRate, RateAggregator, RateError, RateSource,
    StaticCurrencyRepository,
};
use tracing::{debug, warn};

use crate::cli::Cli;
use crate::error::CliError;

pub type RateOutcome = Result<Vec<ExchangeRate>, RateError>;

/// Wires the currency repository to the aggregator for one invocation.
pub struct App {
    repository: Arc<dyn CurrencyRepository>,
    aggregator: Arc<RateAggregator>,
}

impl App {
    pub fn new(repository: Arc<dyn CurrencyRepository>, source: Arc<dyn RateSource>) -> Self {
        Self {
            repository,
            aggregator: Arc::new(RateAggregator::new(source)),
        }
    }

    /// Builds the CNB-backed app. Flags override the environment.
    ///
    /// # Errors
    ///
    /// A malformed currency argument is reported as a validation
    /// [`RateError`], the same outcome the aggregator gives a bad request.
    pub fn from_cli(cli: &Cli) -> Result<Self, RateError> {
        let repository = if cli.currencies.is_empty() {
            StaticCurrencyRepository::default()
        } else {
            StaticCurrencyRepository::parse(&cli.currencies).map_err(|error| {
                warn!(%error, "rejected currency argument");
                RateError::validation(error.to_string())
            })?
        };

        let mut builder = CnbRateSource::builder().from_env();
        if let Some(base_url) = &cli.base_url {
            builder = builder.with_base_url(base_url.as_str());
        }
        if let Some(timeout_ms) = cli.timeout_ms {
            builder = builder.with_timeout_ms(timeout_ms);
        }
        let source = builder.build();
        debug!(
            base_url = source.base_url(),
            timeout_ms = source.timeout_ms(),
            "configured CNB source"
        );

        Ok(Self::new(Arc::new(repository), Arc::new(source)))
    }

    /// Runs the lookup on its own task so a misbehaving collaborator
    /// surfaces as [`CliError::Task`] instead of tearing down the process.
    pub async fn run(&self) -> Result<RateOutcome, CliError> {
        let requested = self.repository.source_currencies();
        let aggregator = Arc::clone(&self.aggregator);

        let outcome = tokio::spawn(async move { aggregator.get_exchange_rates(&requested).await })
            .await?;
        Ok(outcome)
    }
}
