use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use exrate_core::{
    CnbRateSource, HttpClient, HttpError, HttpRequest, HttpResponse, RateSource,
    ResponseEnvelope,
};

const DAILY_BODY: &str = r#"{
    "rates": [
        {"validFor": "2024-01-02", "order": 1, "country": "USA", "currency": "dollar", "amount": 1, "currencyCode": "USD", "rate": 22.5},
        {"validFor": "2024-01-02", "order": 1, "country": "Japan", "currency": "yen", "amount": 100, "currencyCode": "JPY", "rate": 15.687}
    ]
}"#;

const OTHER_BODY: &str = r#"{
    "rates": [
        {"validFor": "2023-12-29", "order": 12, "country": "Kenya", "currency": "shilling", "amount": 100, "currencyCode": "KES", "rate": 14.2}
    ]
}"#;

type Responder = dyn Fn(&HttpRequest) -> Result<HttpResponse, HttpError> + Send + Sync;

/// Answers from a closure and records every request it sees.
struct CannedHttpClient {
    responder: Box<Responder>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl CannedHttpClient {
    fn new(
        responder: impl Fn(&HttpRequest) -> Result<HttpResponse, HttpError> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl HttpClient for CannedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let response = (self.responder)(&request);
        self.requests
            .lock()
            .expect("requests lock")
            .push(request);
        Box::pin(async move { response })
    }
}

fn cnb_routes(request: &HttpRequest) -> Result<HttpResponse, HttpError> {
    if request.url.contains("/cnbapi/exrates/daily") {
        Ok(HttpResponse::ok_json(DAILY_BODY))
    } else if request.url.contains("/cnbapi/fxrates/daily-month") {
        Ok(HttpResponse::ok_json(OTHER_BODY))
    } else {
        Ok(HttpResponse::with_status(404, "not found"))
    }
}

fn source_with(client: Arc<CannedHttpClient>) -> CnbRateSource {
    CnbRateSource::builder()
        .with_http_client(client)
        .with_base_url("https://cnb.test")
        .with_timeout_ms(1_234)
        .build()
}

#[tokio::test]
async fn daily_returns_parsed_quotes() {
    let client = CannedHttpClient::new(cnb_routes);
    let source = source_with(client.clone());

    let envelope = source.daily().await;

    let list = envelope.into_result().expect("daily should succeed");
    assert_eq!(list.rates.len(), 2);
    assert_eq!(list.rates[0].currency_code, "USD");
    assert_eq!(list.rates[1].amount, 100);

    let requests = client.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url,
        "https://cnb.test/cnbapi/exrates/daily?lang=EN"
    );
    assert_eq!(requests[0].timeout_ms, 1_234);
    assert_eq!(
        requests[0].headers.get("accept").map(String::as_str),
        Some("application/json")
    );
}

#[tokio::test]
async fn other_translates_key_into_month_query() {
    let client = CannedHttpClient::new(cnb_routes);
    let source = source_with(client.clone());

    let envelope = source.other_by_year_month("202401").await;

    let list = envelope.into_result().expect("other should succeed");
    assert_eq!(list.rates[0].currency_code, "KES");
    assert_eq!(
        client.requests()[0].url,
        "https://cnb.test/cnbapi/fxrates/daily-month?lang=EN&yearMonth=2024-01"
    );
}

#[tokio::test]
async fn malformed_key_is_a_failure_envelope_without_request() {
    let client = CannedHttpClient::new(cnb_routes);
    let source = source_with(client.clone());

    let envelope = source.other_by_year_month("2024-1").await;

    let error = envelope.into_result().expect_err("must fail");
    assert_eq!(error.endpoint, "https://cnb.test/cnbapi/fxrates/daily-month");
    assert!(error.message.contains("YYYYMM"), "{}", error.message);
    assert!(client.requests().is_empty());
}

#[tokio::test]
async fn transport_error_becomes_failure_envelope() {
    let client =
        CannedHttpClient::new(|_| Err(HttpError::new("request timeout: deadline elapsed")));
    let source = source_with(client);

    let envelope = source.daily().await;

    assert!(!envelope.is_success());
    let error = envelope.error().expect("failure detail");
    assert_eq!(error.endpoint, "https://cnb.test/cnbapi/exrates/daily?lang=EN");
    assert!(error.message.contains("timeout"));
}

#[tokio::test]
async fn non_success_status_becomes_failure_envelope() {
    let client = CannedHttpClient::new(|_| Ok(HttpResponse::with_status(503, "maintenance")));
    let source = source_with(client);

    let envelope = source.other_by_year_month("202401").await;

    let error = envelope.into_result().expect_err("must fail");
    assert_eq!(error.message, "upstream returned status 503");
}

#[tokio::test]
async fn undecodable_body_becomes_failure_envelope() {
    let client = CannedHttpClient::new(|_| Ok(HttpResponse::ok_json("<html>oops</html>")));
    let source = source_with(client);

    let envelope = source.daily().await;

    match envelope {
        ResponseEnvelope::Failure { error } => {
            assert!(
                error.message.starts_with("invalid response body"),
                "{}",
                error.message
            );
        }
        ResponseEnvelope::Success { .. } => panic!("html must not decode as rates"),
    }
}

#[tokio::test]
async fn empty_object_decodes_as_empty_rate_list() {
    let client = CannedHttpClient::new(|_| Ok(HttpResponse::ok_json("{}")));
    let source = source_with(client);

    let list = source
        .daily()
        .await
        .into_result()
        .expect("missing rates field defaults to empty");
    assert!(list.rates.is_empty());
}
