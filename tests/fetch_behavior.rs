//! Behavior-driven tests for the quote fetcher
//!
//! These tests verify how the Stooq adapter turns relay responses into daily
//! series or classified failures, using a canned transport.

use std::sync::Arc;

use tickerdash_core::{
    DailySeriesSource, DashboardConfig, FetchErrorKind, HttpError, HttpResponse, StaticHttpClient,
    StooqAdapter, Ticker,
};

const HEADER: &str = "Date,Open,High,Low,Close,Volume";

fn adapter_with(client: StaticHttpClient) -> (StooqAdapter, Arc<StaticHttpClient>) {
    let client = Arc::new(client);
    let adapter = StooqAdapter::new(client.clone(), &DashboardConfig::default());
    (adapter, client)
}

fn url_for(ticker: &Ticker) -> String {
    let (adapter, _) = adapter_with(StaticHttpClient::new());
    adapter.request_url(ticker)
}

fn ticker(raw: &str) -> Ticker {
    Ticker::parse(raw).expect("valid ticker")
}

// =============================================================================
// Fetch: Valid Response Handling
// =============================================================================

#[tokio::test]
async fn when_relay_returns_history_points_are_parsed_in_order() {
    // Given: A relay response with three daily rows
    let aapl = ticker("AAPL");
    let body = format!(
        "{HEADER}\n2024-01-02,185.0,186.0,183.0,185.6,1000\n\
         2024-01-03,184.2,185.9,183.4,184.3,900\n\
         2024-01-04,182.1,183.1,180.9,181.9,1100\n"
    );
    let (adapter, client) =
        adapter_with(StaticHttpClient::new().with_response(url_for(&aapl), HttpResponse::ok(body)));

    // When: The daily series is fetched
    let points = adapter
        .fetch_daily_series(&aapl)
        .await
        .expect("history should parse");

    // Then: All rows are kept in received order
    let closes: Vec<f64> = points.iter().map(|p| p.close).collect();
    assert_eq!(closes, [185.6, 184.3, 181.9]);
    assert_eq!(points[0].open, 185.0);

    // And: Exactly one request went through the relay, asking for CSV
    let requests = client.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.starts_with("https://api.allorigins.win/raw?url="));
    assert_eq!(requests[0].headers.get("accept").map(String::as_str), Some("text/csv"));
}

// =============================================================================
// Fetch: Error Classification
// =============================================================================

#[tokio::test]
async fn when_relay_returns_error_status_provider_is_unreachable() {
    // Given: The relay answers 502
    let msft = ticker("MSFT");
    let (adapter, _) = adapter_with(
        StaticHttpClient::new()
            .with_response(url_for(&msft), HttpResponse::with_status(502, "bad gateway")),
    );

    // When / Then
    let error = adapter.fetch_daily_series(&msft).await.expect_err("must fail");
    assert_eq!(error.kind(), FetchErrorKind::ProviderUnreachable);
    assert_eq!(error.message(), "Unable to reach stock data provider.");
}

#[tokio::test]
async fn when_transport_fails_provider_is_unreachable() {
    let msft = ticker("MSFT");
    let (adapter, _) = adapter_with(
        StaticHttpClient::new().with_error(url_for(&msft), HttpError::new("connection refused")),
    );

    let error = adapter.fetch_daily_series(&msft).await.expect_err("must fail");
    assert_eq!(error.kind(), FetchErrorKind::ProviderUnreachable);
}

#[tokio::test]
async fn when_payload_contains_sentinel_no_data_is_reported_regardless_of_rows() {
    // Given: A long payload that mentions N/D once
    let zzzz = ticker("ZZZZ");
    let mut body = String::from(HEADER);
    for day in 1..=20 {
        body.push_str(&format!("\n2024-01-{day:02},1,1,1,1,1"));
    }
    body.push_str("\n2024-01-21,N/D,N/D,N/D,N/D,N/D");
    let (adapter, _) =
        adapter_with(StaticHttpClient::new().with_response(url_for(&zzzz), HttpResponse::ok(body)));

    // When / Then
    let error = adapter.fetch_daily_series(&zzzz).await.expect_err("must fail");
    assert_eq!(error.kind(), FetchErrorKind::NoData);
    assert_eq!(error.message(), "No data found.");
}

#[tokio::test]
async fn when_payload_has_header_and_one_row_history_is_insufficient() {
    // Given: Header, one row and a trailing row without a close
    let abc = ticker("ABC");
    let body = format!("{HEADER}\n2024-01-02,1,1,1,1,1\n2024-01-03,1,1,1\n");
    let (adapter, _) =
        adapter_with(StaticHttpClient::new().with_response(url_for(&abc), HttpResponse::ok(body)));

    // When / Then
    let error = adapter.fetch_daily_series(&abc).await.expect_err("must fail");
    assert_eq!(error.kind(), FetchErrorKind::InsufficientHistory);
    assert_eq!(error.message(), "Not enough history.");
}

#[tokio::test]
async fn when_payload_is_header_plus_one_row_it_is_reported_as_no_data() {
    // Two lines in total fall below the minimum payload size
    let abc = ticker("ABC");
    let body = format!("{HEADER}\n2024-01-02,1,1,1,1,1\n");
    let (adapter, _) =
        adapter_with(StaticHttpClient::new().with_response(url_for(&abc), HttpResponse::ok(body)));

    let error = adapter.fetch_daily_series(&abc).await.expect_err("must fail");
    assert_eq!(error.kind(), FetchErrorKind::NoData);
}

// =============================================================================
// Fetch: Symbol Mapping
// =============================================================================

#[test]
fn suffixed_tickers_are_requested_verbatim_in_lowercase() {
    let (adapter, _) = adapter_with(StaticHttpClient::new());
    assert_eq!(
        adapter.source_url(&ticker("bmw.de")),
        "https://stooq.com/q/d/l/?s=bmw.de&i=d"
    );
    assert_eq!(
        adapter.source_url(&ticker("nvda")),
        "https://stooq.com/q/d/l/?s=nvda.us&i=d"
    );
}
