use std::env;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient, DEFAULT_TIMEOUT_MS};
use crate::rate_source::{EnvelopeFuture, RateEndpoint, RateSource};
use crate::{RateQuoteList, ResponseEnvelope, YearMonth};

pub const DEFAULT_CNB_BASE_URL: &str = "https://api.cnb.cz";

const DAILY_PATH: &str = "/cnbapi/exrates/daily";
const OTHER_PATH: &str = "/cnbapi/fxrates/daily-month";
const DEFAULT_LANG: &str = "EN";

/// Czech National Bank rate source.
///
/// The daily feed covers the commonly traded currencies; the remaining
/// ones are only published once a month by the `daily-month` feed.
#[derive(Clone)]
pub struct CnbRateSource {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    timeout_ms: u64,
}

impl Default for CnbRateSource {
    fn default() -> Self {
        CnbRateSourceBuilder::new().build()
    }
}

impl CnbRateSource {
    pub fn builder() -> CnbRateSourceBuilder {
        CnbRateSourceBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub fn daily_url(&self) -> String {
        format!("{}{DAILY_PATH}?lang={DEFAULT_LANG}", self.base_url)
    }

    pub fn other_url(&self, year_month: YearMonth) -> String {
        format!(
            "{}{OTHER_PATH}?lang={DEFAULT_LANG}&yearMonth={}",
            self.base_url,
            urlencoding::encode(&year_month.query_value())
        )
    }

    async fn fetch(&self, endpoint: RateEndpoint, url: String) -> ResponseEnvelope<RateQuoteList> {
        let request = HttpRequest::get(url.as_str())
            .with_header("Accept", "application/json")
            .with_timeout_ms(self.timeout_ms);

        debug!(%endpoint, %url, "requesting rates");

        let response = match self.http_client.execute(request).await {
            Ok(response) => response,
            Err(error) => return failure(endpoint, url, error.message()),
        };

        if !response.is_success() {
            let message = format!("upstream returned status {}", response.status);
            return failure(endpoint, url, message);
        }

        match serde_json::from_str::<RateQuoteList>(&response.body) {
            Ok(list) => {
                debug!(%endpoint, count = list.rates.len(), "received rates");
                ResponseEnvelope::success(list)
            }
            Err(error) => failure(endpoint, url, format!("invalid response body: {error}")),
        }
    }
}

fn failure(
    endpoint: RateEndpoint,
    url: String,
    message: impl Into<String>,
) -> ResponseEnvelope<RateQuoteList> {
    let message = message.into();
    warn!(%endpoint, %url, %message, "rate request failed");
    ResponseEnvelope::failure(url, message)
}

impl RateSource for CnbRateSource {
    fn id(&self) -> &'static str {
        "cnb"
    }

    fn daily<'a>(&'a self) -> EnvelopeFuture<'a> {
        Box::pin(async move { self.fetch(RateEndpoint::Daily, self.daily_url()).await })
    }

    fn other_by_year_month<'a>(&'a self, key: &'a str) -> EnvelopeFuture<'a> {
        Box::pin(async move {
            match YearMonth::parse_key(key) {
                Ok(year_month) => {
                    self.fetch(RateEndpoint::Other, self.other_url(year_month))
                        .await
                }
                Err(error) => failure(
                    RateEndpoint::Other,
                    format!("{}{OTHER_PATH}", self.base_url),
                    error.to_string(),
                ),
            }
        })
    }
}

/// Builder for [`CnbRateSource`].
///
/// # Environment Variables
///
/// | Variable | Effect |
/// |----------|--------|
/// | `EXRATE_CNB_BASE_URL` | Overrides the API base URL |
/// | `EXRATE_TIMEOUT_MS` | Per-request timeout applied to both feeds |
#[derive(Default)]
pub struct CnbRateSourceBuilder {
    http_client: Option<Arc<dyn HttpClient>>,
    base_url: Option<String>,
    timeout_ms: Option<u64>,
}

impl CnbRateSourceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads overrides from the environment. Unparseable values are ignored.
    pub fn from_env(mut self) -> Self {
        if let Ok(base_url) = env::var("EXRATE_CNB_BASE_URL") {
            self.base_url = Some(base_url);
        }
        if let Ok(raw) = env::var("EXRATE_TIMEOUT_MS") {
            match raw.trim().parse::<u64>() {
                Ok(timeout_ms) => self.timeout_ms = Some(timeout_ms),
                Err(_) => warn!(value = %raw, "ignoring invalid EXRATE_TIMEOUT_MS"),
            }
        }
        self
    }

    pub fn with_http_client(mut self, http_client: Arc<dyn HttpClient>) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    pub fn build(self) -> CnbRateSource {
        let base_url = self
            .base_url
            .unwrap_or_else(|| String::from(DEFAULT_CNB_BASE_URL))
            .trim_end_matches('/')
            .to_owned();

        CnbRateSource {
            http_client: self
                .http_client
                .unwrap_or_else(|| Arc::new(ReqwestHttpClient::new())),
            base_url,
            timeout_ms: self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS),
        }
    }
}
