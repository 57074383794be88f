use std::sync::Arc;

use csv::StringRecord;
use tracing::debug;

use crate::config::DashboardConfig;
use crate::data_source::{DailySeriesSource, FetchError, SeriesFuture};
use crate::domain::parse_iso_date;
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::{DailyPoint, Ticker};

/// Token the provider emits in place of prices for unknown symbols.
const NO_DATA_SENTINEL: &str = "N/D";

/// Header plus at least two rows.
const MIN_PAYLOAD_LINES: usize = 3;

const MIN_POINTS: usize = 2;

/// Stooq daily-history adapter, optionally routed through a CORS relay.
#[derive(Clone)]
pub struct StooqAdapter {
    http_client: Arc<dyn HttpClient>,
    relay_url: Option<String>,
    provider_url: String,
    timeout_ms: u64,
}

impl StooqAdapter {
    pub fn new(http_client: Arc<dyn HttpClient>, config: &DashboardConfig) -> Self {
        Self {
            http_client,
            relay_url: config.relay_url.clone(),
            provider_url: config.provider_url.clone(),
            timeout_ms: config.timeout_ms,
        }
    }

    /// Adapter using the real network transport.
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(Arc::new(ReqwestHttpClient::new(&config.user_agent)), config)
    }

    /// Provider URL for the ticker's full daily history.
    pub fn source_url(&self, ticker: &Ticker) -> String {
        format!(
            "{}?s={}&i=d",
            self.provider_url,
            urlencoding::encode(&ticker.provider_symbol())
        )
    }

    /// URL actually requested: the source URL wrapped by the relay, if any.
    pub fn request_url(&self, ticker: &Ticker) -> String {
        let source = self.source_url(ticker);
        match &self.relay_url {
            Some(relay) => format!("{relay}?url={}", urlencoding::encode(&source)),
            None => source,
        }
    }

    async fn fetch(&self, ticker: &Ticker) -> Result<Vec<DailyPoint>, FetchError> {
        let url = self.request_url(ticker);
        debug!(%ticker, %url, "fetching daily series");

        let request = HttpRequest::get(url)
            .with_header("accept", "text/csv")
            .with_timeout_ms(self.timeout_ms);

        let response = self.http_client.execute(request).await.map_err(|error| {
            debug!(%ticker, error = %error, "transport error");
            FetchError::provider_unreachable()
        })?;

        if !response.is_success() {
            debug!(%ticker, status = response.status, "relay returned non-success status");
            return Err(FetchError::provider_unreachable());
        }

        let points = parse_daily_csv(&response.body)?;
        debug!(%ticker, points = points.len(), "parsed daily series");
        Ok(points)
    }
}

impl DailySeriesSource for StooqAdapter {
    fn name(&self) -> &'static str {
        "stooq"
    }

    fn fetch_daily_series<'a>(&'a self, ticker: &'a Ticker) -> SeriesFuture<'a> {
        Box::pin(self.fetch(ticker))
    }
}

/// Parse a provider CSV payload (`Date,Open,High,Low,Close[,Volume...]`).
///
/// Rows without a finite close or a valid date are dropped. Point order is
/// kept as delivered.
pub fn parse_daily_csv(body: &str) -> Result<Vec<DailyPoint>, FetchError> {
    let body = body.trim();
    let line_count = body.split('\n').count();

    if line_count < MIN_PAYLOAD_LINES || body.contains(NO_DATA_SENTINEL) {
        return Err(FetchError::no_data());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let points: Vec<DailyPoint> = reader
        .records()
        .filter_map(|record| match record {
            Ok(record) => parse_record(&record),
            Err(error) => {
                debug!(error = %error, "skipping unreadable csv row");
                None
            }
        })
        .collect();

    if points.len() < MIN_POINTS {
        return Err(FetchError::insufficient_history());
    }

    Ok(points)
}

fn parse_record(record: &StringRecord) -> Option<DailyPoint> {
    let close = parse_price(record.get(4));
    if !close.is_finite() {
        return None;
    }

    let date = parse_iso_date(record.get(0)?).ok()?;
    Some(DailyPoint::new(
        date,
        parse_price(record.get(1)),
        parse_price(record.get(2)),
        parse_price(record.get(3)),
        close,
    ))
}

fn parse_price(field: Option<&str>) -> f64 {
    field
        .and_then(|raw| raw.parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}
