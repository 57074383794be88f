//! Daily-series source contract and fetch error classification.
//!
//! Every provider adapter implements [`DailySeriesSource`]; the dashboard
//! fans out one call per ticker and never sees anything but a point list or
//! a [`FetchError`].

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{DailyPoint, Ticker};

/// Boxed future returned by [`DailySeriesSource::fetch_daily_series`].
pub type SeriesFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<DailyPoint>, FetchError>> + Send + 'a>>;

/// Why a ticker's history could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    /// Transport failure or non-success status from the relay.
    ProviderUnreachable,
    /// Empty payload or the provider's "no data" sentinel.
    NoData,
    /// Fewer than two usable rows after parsing.
    InsufficientHistory,
}

/// Per-ticker fetch failure carrying a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    kind: FetchErrorKind,
    message: String,
}

impl FetchError {
    pub fn provider_unreachable() -> Self {
        Self {
            kind: FetchErrorKind::ProviderUnreachable,
            message: String::from("Unable to reach stock data provider."),
        }
    }

    pub fn no_data() -> Self {
        Self {
            kind: FetchErrorKind::NoData,
            message: String::from("No data found."),
        }
    }

    pub fn insufficient_history() -> Self {
        Self {
            kind: FetchErrorKind::InsufficientHistory,
            message: String::from("Not enough history."),
        }
    }

    pub const fn kind(&self) -> FetchErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            FetchErrorKind::ProviderUnreachable => "fetch.provider_unreachable",
            FetchErrorKind::NoData => "fetch.no_data",
            FetchErrorKind::InsufficientHistory => "fetch.insufficient_history",
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for FetchError {}

/// Source of full daily price history for one ticker.
///
/// Implementations must be `Send + Sync`; the dashboard shares one source
/// across the concurrent per-ticker tasks of a submission.
pub trait DailySeriesSource: Send + Sync {
    /// Short provider name used in logs.
    fn name(&self) -> &'static str;

    /// Fetch the complete daily history for `ticker`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the provider cannot be reached, reports
    /// no data, or yields fewer than two usable points.
    fn fetch_daily_series<'a>(&'a self, ticker: &'a Ticker) -> SeriesFuture<'a>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message_and_code() {
        let error = FetchError::no_data();
        assert_eq!(error.to_string(), "No data found. (fetch.no_data)");
        assert_eq!(error.kind(), FetchErrorKind::NoData);
    }
}
