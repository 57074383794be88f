//! Concurrent per-ticker fetching with an all-settle join.
//!
//! One task is spawned per ticker. Every task settles into a
//! [`SeriesResult`]; a failing or panicking task only affects its own slot.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::data_source::DailySeriesSource;
use crate::{DailyPoint, Ticker};

/// Message stored for a ticker whose task ended without a classified error.
pub const UNABLE_TO_LOAD: &str = "Unable to load.";

/// Outcome of one ticker's fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeriesResult {
    Success { points: Vec<DailyPoint> },
    Failure { message: String },
}

impl SeriesResult {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Settled results of a submission, in submission order.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    /// Name of the source that served the batch.
    pub source: &'static str,
    pub results: Vec<(Ticker, SeriesResult)>,
    pub latency_ms: u64,
}

impl BatchOutcome {
    pub fn failure_count(&self) -> usize {
        self.results
            .iter()
            .filter(|(_, result)| !result.is_success())
            .count()
    }
}

/// Fetch every ticker concurrently and wait for all of them to settle.
///
/// Dropping the returned future aborts the tasks still in flight.
pub async fn fetch_all(source: Arc<dyn DailySeriesSource>, tickers: &[Ticker]) -> BatchOutcome {
    let started = Instant::now();
    let source_name = source.name();
    debug!(source = source_name, tickers = tickers.len(), "fetching batch");
    let mut tasks = JoinSet::new();
    let mut ticker_by_task = HashMap::with_capacity(tickers.len());

    for ticker in tickers {
        let source = Arc::clone(&source);
        let owned = ticker.clone();
        let handle = tasks.spawn(async move {
            let outcome = source.fetch_daily_series(&owned).await;
            (owned, outcome)
        });
        ticker_by_task.insert(handle.id(), ticker.clone());
    }

    let mut settled: HashMap<Ticker, SeriesResult> = HashMap::with_capacity(tickers.len());
    while let Some(joined) = tasks.join_next_with_id().await {
        match joined {
            Ok((_, (ticker, Ok(points)))) => {
                debug!(%ticker, source = source_name, points = points.len(), "ticker settled");
                settled.insert(ticker, SeriesResult::Success { points });
            }
            Ok((_, (ticker, Err(error)))) => {
                warn!(%ticker, source = source_name, code = error.code(), "ticker fetch failed");
                settled.insert(ticker, SeriesResult::failure(error.message()));
            }
            Err(join_error) => {
                if let Some(ticker) = ticker_by_task.get(&join_error.id()) {
                    warn!(
                        %ticker,
                        source = source_name,
                        error = %join_error,
                        "ticker task did not complete"
                    );
                    settled.insert(ticker.clone(), SeriesResult::failure(UNABLE_TO_LOAD));
                }
            }
        }
    }

    let results = tickers
        .iter()
        .map(|ticker| {
            let result = settled
                .remove(ticker)
                .unwrap_or_else(|| SeriesResult::failure(UNABLE_TO_LOAD));
            (ticker.clone(), result)
        })
        .collect();

    BatchOutcome {
        source: source_name,
        results,
        latency_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
    }
}
